//! Naming engine — prefix segments, delimiters and region-qualified names.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{NamingError, Result};
use crate::regions::short_region;
use crate::{DEFAULT_DELIMITER, DEFAULT_SUFFIX_LENGTH, HIERARCHICAL_DELIMITER};

/// Join `prefix_segments` and `short_name` with `separator`.
///
/// Segments are used verbatim: no trimming, case folding or character
/// filtering. Validation against the target service is left to the caller.
///
/// # Errors
///
/// Returns [`NamingError::EmptyShortName`] if `short_name` is empty.
pub fn join<S: AsRef<str>>(
    prefix_segments: &[S],
    short_name: &str,
    separator: &str,
) -> Result<String> {
    if short_name.is_empty() {
        return Err(NamingError::EmptyShortName);
    }

    let capacity = prefix_segments
        .iter()
        .map(|s| s.as_ref().len() + separator.len())
        .sum::<usize>()
        + short_name.len();

    let mut name = String::with_capacity(capacity);
    for segment in prefix_segments {
        name.push_str(segment.as_ref());
        name.push_str(separator);
    }
    name.push_str(short_name);

    trace!(%name, "joined resource name");
    Ok(name)
}

/// A diagnostic attached to a generated name. It never blocks generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Bucket names are globally unique but buckets live in one region, so
    /// the region belongs in the name.
    PreferRegionQualifiedBucket,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreferRegionQualifiedBucket => write!(
                f,
                "It's highly recommended to use with_region_s3_bucket() instead of s3_bucket() \
                 because the bucket name must be unique globally and, at the same time, \
                 buckets are located in a specific region. Hence, it makes sense to include \
                 the region in the name."
            ),
        }
    }
}

/// A generated name together with an optional advisory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Named {
    pub name: String,
    pub advisory: Option<Advisory>,
}

impl Named {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Naming engine for AWS resources.
///
/// Immutable once built: every `with_*` method consumes the engine and
/// returns a reconfigured one, so a shared `&Naming` can be used from any
/// number of threads.
///
/// ```
/// use cloud_naming::Naming;
///
/// let naming = Naming::new()
///     .with_prefix_segments(["prod", "app"])
///     .with_default_delimiter("_");
///
/// assert_eq!(naming.default_name("queue").unwrap(), "prod_app_queue");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Naming {
    prefix_segments: Vec<String>,
    default_delimiter: String,
    hierarchical_delimiter: String,
    /// Reserved for random suffixes. No operation reads it.
    suffix_length: usize,
    use_short_region: bool,
}

impl Default for Naming {
    fn default() -> Self {
        Self::new()
    }
}

impl Naming {
    /// Empty prefix, `-` default delimiter, `/` hierarchical delimiter and
    /// full region names.
    pub fn new() -> Self {
        Self {
            prefix_segments: Vec::new(),
            default_delimiter: DEFAULT_DELIMITER.to_string(),
            hierarchical_delimiter: HIERARCHICAL_DELIMITER.to_string(),
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            use_short_region: false,
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Builder method: replace the prefix segments.
    pub fn with_prefix_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set the delimiter for flat names.
    pub fn with_default_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.default_delimiter = delimiter.into();
        self
    }

    /// Builder method: set the delimiter for path-like names.
    pub fn with_hierarchical_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.hierarchical_delimiter = delimiter.into();
        self
    }

    /// Builder method: set the reserved random-suffix length.
    pub fn with_suffix_length(mut self, length: usize) -> Self {
        self.suffix_length = length;
        self
    }

    /// Builder method: abbreviate regions to their short code
    /// (`us-west-2` → `usw2`) in region-qualified names.
    ///
    /// Default: `false`
    pub fn with_short_region(mut self, enabled: bool) -> Self {
        self.use_short_region = enabled;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn prefix_segments(&self) -> &[String] {
        &self.prefix_segments
    }

    #[inline]
    pub fn default_delimiter(&self) -> &str {
        &self.default_delimiter
    }

    #[inline]
    pub fn hierarchical_delimiter(&self) -> &str {
        &self.hierarchical_delimiter
    }

    #[inline]
    pub fn suffix_length(&self) -> usize {
        self.suffix_length
    }

    #[inline]
    pub fn use_short_region(&self) -> bool {
        self.use_short_region
    }

    // -------------------------------------------------------------------------
    // Names
    // -------------------------------------------------------------------------

    /// Join arbitrary prefix segments with `short_name`. Same as [`join`].
    #[inline]
    pub fn name<S: AsRef<str>>(
        &self,
        prefix_segments: &[S],
        short_name: &str,
        separator: &str,
    ) -> Result<String> {
        join(prefix_segments, short_name, separator)
    }

    /// General-purpose name: prefix segments joined by the default delimiter.
    pub fn default_name(&self, short_name: &str) -> Result<String> {
        join(&self.prefix_segments, short_name, &self.default_delimiter)
    }

    /// S3 bucket name, joined by the **hierarchical** delimiter.
    ///
    /// Always carries [`Advisory::PreferRegionQualifiedBucket`]. Note that
    /// [`Naming::with_region_s3_bucket`] uses the default delimiter instead.
    /// Both are kept so names of existing buckets do not change.
    pub fn s3_bucket(&self, short_name: &str) -> Result<Named> {
        let name = join(&self.prefix_segments, short_name, &self.hierarchical_delimiter)?;
        let advisory = Advisory::PreferRegionQualifiedBucket;
        warn!(%name, "{}", advisory);

        Ok(Named {
            name,
            advisory: Some(advisory),
        })
    }

    /// SSM parameter name: prefix segments joined by the hierarchical delimiter.
    pub fn ssm_parameter(&self, short_name: &str) -> Result<String> {
        join(&self.prefix_segments, short_name, &self.hierarchical_delimiter)
    }

    // -------------------------------------------------------------------------
    // Region-qualified names
    // -------------------------------------------------------------------------

    /// Leading segment for `region`.
    ///
    /// Verbatim unless short regions are enabled, in which case the short
    /// code from the region table is used.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::UnsupportedRegion`] if short regions are
    /// enabled and `region` is not in the table.
    pub fn region_segment<'a>(&self, region: &'a str) -> Result<&'a str> {
        if !self.use_short_region {
            return Ok(region);
        }

        match short_region(region) {
            Some(code) => {
                debug!(region, code, "abbreviated region");
                Ok(code)
            }
            None => Err(NamingError::UnsupportedRegion {
                region: region.to_string(),
            }),
        }
    }

    /// Name with the region as the first segment, joined by `separator`.
    pub fn with_region_name(
        &self,
        short_name: &str,
        separator: &str,
        region: &str,
    ) -> Result<String> {
        let region_segment = self.region_segment(region)?;

        let mut segments: Vec<&str> = Vec::with_capacity(self.prefix_segments.len() + 1);
        segments.push(region_segment);
        segments.extend(self.prefix_segments.iter().map(String::as_str));

        join(&segments, short_name, separator)
    }

    /// Region-qualified name joined by the default delimiter.
    pub fn with_region_default(&self, short_name: &str, region: &str) -> Result<String> {
        self.with_region_name(short_name, &self.default_delimiter, region)
    }

    /// Region-qualified SSM parameter name, joined by the hierarchical delimiter.
    pub fn with_region_ssm_parameter(&self, short_name: &str, region: &str) -> Result<String> {
        self.with_region_name(short_name, &self.hierarchical_delimiter, region)
    }

    /// Region-qualified S3 bucket name, joined by the **default** delimiter.
    ///
    /// Unlike [`Naming::s3_bucket`], which uses the hierarchical delimiter.
    pub fn with_region_s3_bucket(&self, short_name: &str, region: &str) -> Result<String> {
        self.with_region_name(short_name, &self.default_delimiter, region)
    }
}
