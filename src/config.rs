use std::path::Path;

use crate::ai::SearchConfig;
use crate::error::ConfigError;
use crate::game::SessionConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be at least 1".into(),
            ));
        }
        if self.search.depth > 12 {
            return Err(ConfigError::Validation(
                "search.depth must be at most 12".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::DEFAULT_DEPTH;
    use crate::game::Player;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
        assert_eq!(config.session.automated_side, Player::Yellow);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be at least 1"
        );
    }

    #[test]
    fn test_excessive_depth_rejected() {
        let mut config = AppConfig::default();
        config.search.depth = 13;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_from_toml() {
        let config: AppConfig = toml::from_str(
            "[search]\ndepth = 6\n\n[session]\nautomated_side = \"red\"\n",
        )
        .unwrap();
        assert_eq!(config.search.depth, 6);
        assert_eq!(config.session.automated_side, Player::Red);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[search]\ndepth = 5\n").unwrap();
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.session.automated_side, Player::Yellow);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = AppConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
    }
}
