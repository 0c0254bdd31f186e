//! # UI Settings
//!
//! Engine-level settings for the UI layer: logging, the font texture cache
//! timings, where assets live and which stylesheet draws the cursor.
//!
//! Settings are plain serde structs and load from `.toml` or `.ron` through the
//! [`Config`] trait.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// # Text Cache Configuration
///
/// Timings for the font texture cache. TTLs are counted in cache-check ticks:
/// every `check_interval` calls to the cache update, each entry loses
/// `check_interval` TTL and entries below zero are released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextCacheConfig {
    /// Number of update calls between cache checks
    pub check_interval: u32,
    /// TTL given to a freshly rasterized text
    pub insert_ttl: i32,
    /// TTL given back to an entry every time it is fetched
    pub hit_ttl: i32,
}

impl TextCacheConfig {
    /// Create a cache configuration with the default timings
    pub const fn new() -> Self {
        Self {
            check_interval: 100,
            insert_ttl: 1000,
            hit_ttl: 1500,
        }
    }

    /// Set the number of update calls between cache checks
    pub const fn with_check_interval(mut self, interval: u32) -> Self {
        self.check_interval = interval;
        self
    }

    /// Set insert and hit TTLs
    pub const fn with_ttl(mut self, insert_ttl: i32, hit_ttl: i32) -> Self {
        self.insert_ttl = insert_ttl;
        self.hit_ttl = hit_ttl;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.check_interval == 0 {
            return Err("Text cache check interval must be at least 1".to_string());
        }
        if self.insert_ttl < 0 || self.hit_ttl < 0 {
            return Err("Text cache TTLs cannot be negative".to_string());
        }
        Ok(())
    }
}

impl Default for TextCacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # UI Settings
///
/// Top-level settings applications hand to the UI manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UISettings {
    /// Default `env_logger` filter
    pub log_level: String,
    /// Base directory for images, fonts and stylesheets
    pub assets_dir: String,
    /// Stylesheet used to build the cursor image, if any
    pub cursor_stylesheet: Option<String>,
    /// Font texture cache timings
    pub text_cache: TextCacheConfig,
}

impl UISettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            assets_dir: "assets".to_string(),
            cursor_stylesheet: None,
            text_cache: TextCacheConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set text cache timings
    pub const fn with_text_cache(mut self, text_cache: TextCacheConfig) -> Self {
        self.text_cache = text_cache;
        self
    }

    /// Set assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the cursor stylesheet
    pub fn with_cursor_stylesheet(mut self, path: impl Into<String>) -> Self {
        self.cursor_stylesheet = Some(path.into());
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        self.text_cache.validate()
    }
}

impl Default for UISettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for UISettings {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = UISettings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.text_cache, TextCacheConfig::new());
        assert_eq!(settings.text_cache.check_interval, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let settings = UISettings::new().with_text_cache(TextCacheConfig::new().with_check_interval(0));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui.toml");
        let path = path.to_str().unwrap();

        let settings = UISettings::new()
            .with_log_level("debug")
            .with_assets_dir("data")
            .with_cursor_stylesheet("ui/cursor.toml")
            .with_text_cache(TextCacheConfig::new().with_ttl(10, 20));
        settings.save_to_file(path).unwrap();

        assert_eq!(UISettings::load_from_file(path).unwrap(), settings);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ui.ron");
        let path = path.to_str().unwrap();

        let settings = UISettings::new().with_log_level("warn");
        settings.save_to_file(path).unwrap();

        assert_eq!(UISettings::load_from_file(path).unwrap(), settings);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "assets_dir = \"res\"\n[text_cache]\nhit_ttl = 3000\n").unwrap();

        let settings = UISettings::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.assets_dir, "res");
        assert_eq!(settings.text_cache.hit_ttl, 3000);
        assert_eq!(settings.text_cache.insert_ttl, 1000);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_unsupported_format() {
        let err = UISettings::default().save_to_file("settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
