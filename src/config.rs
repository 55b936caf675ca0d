use crate::errors::{ClasskitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Composition-root configuration.
///
/// Holds the ambient values the composing layer reads, currently the
/// optional class prefix. It is passed explicitly to [`crate::prefix::Scope`]
/// and never consulted through global state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComposerConfig {
    /// Prefix prepended to every token the library itself produces.
    /// Absent or empty means "no prefix".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,
}

impl ComposerConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ClasskitError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ClasskitError::Config {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ClasskitError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| ClasskitError::Config {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file, auto-detecting the format.
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ClasskitError::Config {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration; the other side wins where set.
    pub fn merge(mut self, other: Self) -> Self {
        if other.class_prefix.is_some() {
            self.class_prefix = other.class_prefix;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_has_no_prefix() {
        let config = ComposerConfig::default();
        assert!(config.class_prefix.is_none());
    }

    #[test]
    fn test_yaml_config_loading() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(b"classPrefix: \"bulma-\"\n").unwrap();

        let config = ComposerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.class_prefix.as_deref(), Some("bulma-"));
    }

    #[test]
    fn test_json_config_loading() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(br#"{"classPrefix": "app-"}"#).unwrap();

        let config = ComposerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.class_prefix.as_deref(), Some("app-"));
    }

    #[test]
    fn test_unsupported_format_is_an_error() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let err = ComposerConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_merge_prefers_other_when_set() {
        let base = ComposerConfig {
            class_prefix: Some("base-".to_string()),
        };
        let merged = base.clone().merge(ComposerConfig::default());
        assert_eq!(merged.class_prefix.as_deref(), Some("base-"));

        let merged = base.merge(ComposerConfig {
            class_prefix: Some("override-".to_string()),
        });
        assert_eq!(merged.class_prefix.as_deref(), Some("override-"));
    }
}
