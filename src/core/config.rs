//! Session pacing rules.
//!
//! Balance numbers are compile-time constants; only the encounter rhythm and
//! the seed are configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_BOSS_INTERVAL, DEFAULT_RANDOM_SHOP_CHANCE_PERCENT, DEFAULT_SHOP_INTERVAL,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Every `boss_interval`-th encounter is a boss.
    pub boss_interval: u32,
    /// A merchant visits after every `shop_interval`-th non-boss encounter.
    pub shop_interval: u32,
    /// Chance of a merchant visit after any other surviving encounter.
    pub random_shop_chance_percent: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boss_interval: DEFAULT_BOSS_INTERVAL,
            shop_interval: DEFAULT_SHOP_INTERVAL,
            random_shop_chance_percent: DEFAULT_RANDOM_SHOP_CHANCE_PERCENT,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boss_interval == 0 {
            return Err(ConfigError::Invalid("boss_interval must be at least 1".into()));
        }
        if self.shop_interval == 0 {
            return Err(ConfigError::Invalid("shop_interval must be at least 1".into()));
        }
        if self.random_shop_chance_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "random_shop_chance_percent must be 0-100, got {}",
                self.random_shop_chance_percent
            )));
        }
        Ok(())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.boss_interval, 10);
        assert_eq!(config.shop_interval, 5);
        assert_eq!(config.random_shop_chance_percent, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json_str(r#"{ "boss_interval": 4, "seed": 7 }"#).unwrap();
        assert_eq!(config.boss_interval, 4);
        assert_eq!(config.shop_interval, 5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = GameConfig::from_json_str(r#"{ "shop_interval": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_chance_over_100() {
        let config = GameConfig {
            random_shop_chance_percent: 101,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ boss_interval: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("cyberdefense_config_{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "random_shop_chance_percent": 0 }}"#).unwrap();
        drop(file);

        let config = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(config.random_shop_chance_percent, 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::from_json_file("/nonexistent/cyberdefense.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
