//! Configuration system
//!
//! Two kinds of configuration live here:
//! - [`Config`]: typed settings structs loaded from TOML or RON files
//! - [`ConfigAsset`]: section-keyed key/value stylesheets read through typed accessors

mod asset;

pub use asset::{ConfigAsset, ConfigHandle};
pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is present but malformed (bad point, color, rectangle or number)
    #[error("Invalid format for [{section}] {key} = '{value}': {reason}")]
    AssetLoad {
        /// Config section
        section: String,
        /// Key within the section
        key: String,
        /// Raw value found in the config
        value: String,
        /// What was expected
        reason: &'static str,
    },

    /// A value is present but is not one of the allowed options
    #[error("Invalid config value [{section}] {key} = '{value}': value is not one of the given options")]
    InvalidValue {
        /// Config section
        section: String,
        /// Key within the section
        key: String,
        /// Raw value found in the config
        value: String,
    },
}

impl ConfigError {
    /// True for malformed-value and unknown-option errors
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::AssetLoad { .. } | Self::InvalidValue { .. })
    }
}
