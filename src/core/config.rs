use crate::core::cache::DEFAULT_CACHE_CAPACITY;
use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pending path notifications buffered before producers block
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of repositories with a cached status
    pub cache_capacity: usize,
    /// Capacity of the path-visit intake queue
    pub queue_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl TrackerConfig {
    /// Load `config.json` from the config directory, or defaults if there is none.
    pub fn load_or_default() -> Result<Self> {
        let config_file = get_config_directory()?.join(CONFIG_FILE_NAME);
        Self::load_from(&config_file)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| TrackerError::config_load_failed(config_file, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| TrackerError::config_load_failed(config_file, e))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(TrackerError::invalid_config(
                "cache_capacity must be at least 1",
            ));
        }
        if self.queue_capacity == 0 {
            return Err(TrackerError::invalid_config(
                "queue_capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.cache_capacity, 15);
        assert_eq!(config.queue_capacity, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig::load_from(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "cache_capacity": 4 }"#).unwrap();

        let config = TrackerConfig::load_from(&path).unwrap();
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = TrackerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigLoadFailed { .. }));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = TrackerConfig {
            cache_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TrackerError::InvalidConfig { .. })
        ));
    }
}
