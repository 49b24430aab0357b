//! # Cloud Resource Naming (cloud-naming)
//!
//! Builds standardized names for cloud resources (buckets, parameters,
//! load balancers, ...) out of a fixed list of prefix segments and a short,
//! caller-supplied identifier. A region, either verbatim or abbreviated to
//! its short code, can be added as the leading segment.
//!
//! ## Design
//!
//! Every name is produced by one primitive, [`join`]:
//!
//! ```text
//! ┌────────────┬───┬────────────┬───┬─────┬───┬────────────┐
//! │ [region]   │ d │ prefix[0]  │ d │ ... │ d │ short name │
//! └────────────┴───┴────────────┴───┴─────┴───┴────────────┘
//! ```
//!
//! where `d` is the delimiter picked by the naming convention:
//!
//! | Convention          | Delimiter                |
//! |---------------------|--------------------------|
//! | default             | default (`-`)            |
//! | SSM parameter       | hierarchical (`/`)       |
//! | S3 bucket           | hierarchical (`/`)       |
//! | region + S3 bucket  | default (`-`)            |
//!
//! ## Usage
//!
//! ```
//! use cloud_naming::Naming;
//!
//! let naming = Naming::new()
//!     .with_prefix_segments(["prod", "app"])
//!     .with_short_region(true);
//!
//! assert_eq!(naming.default_name("service").unwrap(), "prod-app-service");
//! assert_eq!(naming.ssm_parameter("parameter").unwrap(), "prod/app/parameter");
//! assert_eq!(
//!     naming.with_region_default("service", "us-west-2").unwrap(),
//!     "usw2-prod-app-service"
//! );
//! ```
//!
//! Names are not checked against service limits. The limits are exported as
//! constants for callers that want to enforce them.

pub mod error;
pub mod naming;
pub mod regions;

pub use error::{NamingError, Result};
pub use naming::{join, Advisory, Named, Naming};
pub use regions::{
    check_unique_codes, is_supported_region, region_for_short_code, regions, short_region,
    CodeCollision, REGION_CODES, SHORT_REGIONS,
};

/// Maximum length of an S3 bucket name. Not enforced.
pub const S3_BUCKET_NAME_LIMIT: usize = 63;

/// Maximum length of a load balancer name. Not enforced.
pub const LOAD_BALANCER_NAME_LIMIT: usize = 32;

/// Default length of a random name suffix.
///
/// Reserved: no naming operation appends a suffix yet.
pub const DEFAULT_SUFFIX_LENGTH: usize = 4;

/// Default delimiter for flat resource names.
pub const DEFAULT_DELIMITER: &str = "-";

/// Default delimiter for path-like names (SSM parameters).
pub const HIERARCHICAL_DELIMITER: &str = "/";
