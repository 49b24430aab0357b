//! Config-file loading for cloud-naming.
//!
//! Reads a `naming.toml` file and builds a [`Naming`] engine from it, so
//! provisioning code shares one naming convention per project.
//!
//! # Usage
//!
//! ```ignore
//! let naming = cloud_naming_config::load("naming.toml")?;
//! let bucket = naming.with_region_s3_bucket("assets", "eu-west-1")?;
//! ```
//!
//! # File format
//!
//! ```toml
//! prefix_segments = ["prod", "app"]
//! default_delimiter = "-"
//! hierarchical_delimiter = "/"
//! use_short_region = true
//! ```
//!
//! All keys are optional. Unknown keys are rejected so typos do not silently
//! fall back to defaults.

mod toml_parser;

pub use toml_parser::{ConfigError, NamingConfig};

use std::io;
use std::path::Path;

use cloud_naming::Naming;
use tracing::{debug, info};

/// Load a naming engine from a TOML file.
///
/// # Errors
///
/// Returns an error if:
/// - the file cannot be read
/// - the file is not valid TOML or contains unknown keys
/// - a prefix segment is empty
pub fn load(config_path: impl AsRef<Path>) -> Result<Naming, ConfigError> {
    let config_path = config_path.as_ref();
    let config = NamingConfig::from_file(config_path)?;
    debug!(path = %config_path.display(), ?config, "loaded naming config");
    Ok(config.into_naming())
}

/// Like [`load`], but a missing file yields the default engine.
///
/// Any other read failure is still returned as [`ConfigError::Io`].
pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Naming, ConfigError> {
    let config_path = config_path.as_ref();
    match load(config_path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            info!(path = %config_path.display(), "no naming config found, using defaults");
            Ok(Naming::new())
        }
        result => result,
    }
}
