//! TOML configuration parser for naming.toml.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use cloud_naming::Naming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parsed naming configuration.
///
/// Every key is optional; missing keys keep the [`Naming::new`] defaults.
///
/// ```toml
/// prefix_segments = ["prod", "app"]
/// default_delimiter = "-"
/// hierarchical_delimiter = "/"
/// suffix_length = 4
/// use_short_region = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_segments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchical_delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_short_region: Option<bool>,
}

impl NamingConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Capture every setting of an existing engine.
    pub fn from_naming(naming: &Naming) -> Self {
        Self {
            prefix_segments: Some(naming.prefix_segments().to_vec()),
            default_delimiter: Some(naming.default_delimiter().to_string()),
            hierarchical_delimiter: Some(naming.hierarchical_delimiter().to_string()),
            suffix_length: Some(naming.suffix_length()),
            use_short_region: Some(naming.use_short_region()),
        }
    }

    /// Build the engine, starting from the defaults.
    pub fn into_naming(self) -> Naming {
        let mut naming = Naming::new();

        if let Some(segments) = self.prefix_segments {
            naming = naming.with_prefix_segments(segments);
        }
        if let Some(delimiter) = self.default_delimiter {
            naming = naming.with_default_delimiter(delimiter);
        }
        if let Some(delimiter) = self.hierarchical_delimiter {
            naming = naming.with_hierarchical_delimiter(delimiter);
        }
        if let Some(length) = self.suffix_length {
            naming = naming.with_suffix_length(length);
        }
        if let Some(enabled) = self.use_short_region {
            naming = naming.with_short_region(enabled);
        }

        naming
    }

    /// Serialize to TOML.
    ///
    /// Applies the same validation as parsing, so anything written here can
    /// be loaded back.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        self.validate()?;
        Ok(toml::to_string(self)?)
    }

    /// Write to a TOML file. Nothing is written if validation fails.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(segments) = &self.prefix_segments
            && let Some(index) = segments.iter().position(String::is_empty)
        {
            return Err(ConfigError::Validation(format!(
                "prefix_segments[{}] is empty; remove it or give it a value",
                index
            )));
        }
        Ok(())
    }
}

impl FromStr for NamingConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: NamingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
prefix_segments = ["prod", "app"]
default_delimiter = "_"
hierarchical_delimiter = ":"
suffix_length = 6
use_short_region = true
"#;
        let naming = toml.parse::<NamingConfig>().unwrap().into_naming();

        assert_eq!(naming.prefix_segments(), ["prod", "app"]);
        assert_eq!(naming.default_delimiter(), "_");
        assert_eq!(naming.hierarchical_delimiter(), ":");
        assert_eq!(naming.suffix_length(), 6);
        assert!(naming.use_short_region());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: NamingConfig = "".parse().unwrap();
        assert_eq!(config, NamingConfig::default());
        assert_eq!(config.into_naming(), Naming::new());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let naming = r#"prefix_segments = ["staging"]"#
            .parse::<NamingConfig>()
            .unwrap()
            .into_naming();

        assert_eq!(naming.default_name("api").unwrap(), "staging-api");
        assert_eq!(naming.ssm_parameter("api").unwrap(), "staging/api");
        assert!(!naming.use_short_region());
    }

    #[test]
    fn empty_delimiter_is_allowed() {
        let naming = r#"default_delimiter = """#
            .parse::<NamingConfig>()
            .unwrap()
            .into_naming();
        assert_eq!(naming.default_delimiter(), "");
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = r#"prefix = ["prod"]"#.parse::<NamingConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_wrong_types() {
        let cases = [
            r#"prefix_segments = "prod""#,
            r#"use_short_region = "yes""#,
            r#"suffix_length = -1"#,
        ];

        for case in cases {
            assert!(
                case.parse::<NamingConfig>().is_err(),
                "Should reject: {}",
                case
            );
        }
    }

    #[test]
    fn rejects_empty_prefix_segment() {
        let err = r#"prefix_segments = ["prod", ""]"#
            .parse::<NamingConfig>()
            .unwrap_err();

        match err {
            ConfigError::Validation(msg) => assert!(msg.contains("prefix_segments[1]")),
            other => panic!("Expected Validation, got: {:?}", other),
        }
    }

    #[test]
    fn serializing_rejects_empty_prefix_segment() {
        let naming = Naming::new().with_prefix_segments(["", "app"]);

        let result = NamingConfig::from_naming(&naming).to_toml_string();
        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("prefix_segments[0]")),
            other => panic!("Expected Validation, got: {:?}", other),
        }
    }

    #[test]
    fn from_naming_round_trips_through_toml() {
        let naming = Naming::new()
            .with_prefix_segments(["prod", "app"])
            .with_short_region(true);

        let text = NamingConfig::from_naming(&naming).to_toml_string().unwrap();
        assert!(text.contains("use_short_region = true"));

        let back = text.parse::<NamingConfig>().unwrap().into_naming();
        assert_eq!(back, naming);
    }
}
