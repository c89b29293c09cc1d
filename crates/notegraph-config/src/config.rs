//! Top-level configuration and file loading

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::{IndexingConfig, QueryConfig};

/// Errors from loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading/writing the config file
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// `[indexing]` section
    #[serde(default)]
    pub indexing: IndexingConfig,

    /// `[query]` section
    #[serde(default)]
    pub query: QueryConfig,
}

impl GraphConfig {
    /// Default config file path: `$XDG_CONFIG_HOME/notegraph/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("notegraph")
            .join("config.toml")
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from disk
    ///
    /// A missing or blank file yields the defaults. Malformed TOML is an error.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml_str(&content)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config at {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write configuration to disk as pretty TOML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReindexStrategy;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = GraphConfig::default_path();
        assert!(path.ends_with("notegraph/config.toml"));
    }

    #[test]
    fn test_empty_string_gives_defaults() {
        let config = GraphConfig::from_toml_str("").unwrap();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = GraphConfig::from_toml_str(
            r#"
            [query]
            include_heading_links_in_backlinks = true
            "#,
        )
        .unwrap();
        assert!(config.query.include_heading_links_in_backlinks);
        assert_eq!(config.indexing.reindex_strategy, ReindexStrategy::Additive);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = GraphConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn test_load_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "   \n").unwrap();
        assert_eq!(GraphConfig::load(&path).unwrap(), GraphConfig::default());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();

        assert!(matches!(GraphConfig::load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(GraphConfig::load_or_default(&path), GraphConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = GraphConfig::default();
        config.indexing.reindex_strategy = ReindexStrategy::ClearOutgoing;
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("clear_outgoing"));
        assert_eq!(GraphConfig::load(&path).unwrap(), config);
    }
}
