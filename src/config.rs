//! Configuration handling for the application

use crate::router::paths;
use crate::store::DEFAULT_SAVE_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the simulated save latency
pub const SAVE_DELAY_ENV: &str = "FORMDECK_SAVE_DELAY_MS";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Latency of the simulated save, in milliseconds
    pub save_delay_ms: Option<u64>,
    /// Route shown at startup
    pub start_route: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "formdeck", "formdeck")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_or_default(Self::config_path().as_deref())
    }

    /// Load from `path`, falling back to defaults when there is no file
    fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save latency, honouring the environment override
    pub fn save_delay(&self) -> Duration {
        let from_env = match std::env::var(SAVE_DELAY_ENV) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid {}", SAVE_DELAY_ENV);
                    None
                }
            },
            Err(_) => None,
        };
        Self::resolve_delay(from_env, self.save_delay_ms)
    }

    fn resolve_delay(from_env: Option<u64>, from_file: Option<u64>) -> Duration {
        from_env
            .or(from_file)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SAVE_DELAY)
    }

    /// Route shown at startup
    pub fn start_route(&self) -> &str {
        self.start_route.as_deref().unwrap_or(paths::HOME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.save_delay_ms.is_none());
        assert!(config.start_route.is_none());
        assert_eq!(config.start_route(), "/");
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            save_delay_ms: Some(50),
            start_route: Some("/survey-form".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.start_route(), "/survey-form");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"save_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.save_delay_ms, Some(10));
    }

    #[test]
    fn test_delay_precedence() {
        assert_eq!(
            AppConfig::resolve_delay(None, None),
            Duration::from_millis(300)
        );
        assert_eq!(
            AppConfig::resolve_delay(None, Some(20)),
            Duration::from_millis(20)
        );
        assert_eq!(
            AppConfig::resolve_delay(Some(5), Some(20)),
            Duration::from_millis(5)
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("formdeck-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.json");
        let config = AppConfig {
            save_delay_ms: Some(0),
            start_route: None,
        };

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = std::env::temp_dir()
            .join(format!("formdeck-missing-{}", uuid::Uuid::new_v4()))
            .join("config.json");
        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
