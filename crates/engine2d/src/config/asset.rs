//! Section-keyed configuration assets (stylesheets)
//!
//! A config asset is a two-level map: `[section] key = value`. Values are kept as
//! strings and parsed on access, so a malformed value only fails the lookup that
//! reads it.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use super::ConfigError;
use crate::foundation::math::{Color, PointF, RectF};

/// Shared handle to a loaded config asset
pub type ConfigHandle = Rc<ConfigAsset>;

/// Section-keyed key/value configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigAsset {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigAsset {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    ///
    /// Every top-level table becomes a section. Strings, numbers and booleans are
    /// stored as their string form; arrays of scalars are joined with commas, so
    /// `color = [255, 0, 0]` reads the same as `color = "255,0,0"`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))?;

        let mut config = Self::new();
        for (section, value) in table {
            let toml::Value::Table(entries) = value else {
                return Err(ConfigError::Parse(format!(
                    "key '{section}' is outside of a section"
                )));
            };
            for (key, value) in entries {
                let as_str = Self::value_to_string(&section, &key, &value)?;
                config.set(&section, &key, as_str);
            }
        }
        Ok(config)
    }

    /// Load and parse a TOML config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    fn value_to_string(section: &str, key: &str, value: &toml::Value) -> Result<String, ConfigError> {
        match value {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Float(f) => Ok(f.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            toml::Value::Datetime(d) => Ok(d.to_string()),
            toml::Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| match item {
                        toml::Value::Array(_) | toml::Value::Table(_) => Err(ConfigError::Parse(format!(
                            "[{section}] {key}: nested arrays are not supported"
                        ))),
                        other => Self::value_to_string(section, key, other),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(parts.join(","))
            }
            toml::Value::Table(_) => Err(ConfigError::Parse(format!(
                "[{section}] {key}: nested tables are not supported"
            ))),
        }
    }

    /// Set a raw value
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Builder form of [`ConfigAsset::set`]
    pub fn with(mut self, section: &str, key: &str, value: impl Into<String>) -> Self {
        self.set(section, key, value);
        self
    }

    /// Check if a key exists
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.raw(section, key).is_some()
    }

    /// Names of all sections
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Get a string value, if set
    pub fn get_str_opt(&self, section: &str, key: &str) -> Option<&str> {
        self.raw(section, key)
    }

    /// Get a string value or a default
    pub fn get_str<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.raw(section, key).unwrap_or(default)
    }

    /// Get an integer value or a default
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> Result<i32, ConfigError> {
        self.parse_with(section, key, default, "expected an integer", |s| s.parse().ok())
    }

    /// Get a float value or a default
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> Result<f32, ConfigError> {
        self.parse_with(section, key, default, "expected a number", |s| s.parse().ok())
    }

    /// Get a boolean value or a default (`true/false`, `1/0`, `yes/no`)
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> Result<bool, ConfigError> {
        self.parse_with(section, key, default, "expected a boolean", |s| {
            match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                _ => None,
            }
        })
    }

    /// Get an `"x,y"` point, if set
    pub fn get_point_f_opt(&self, section: &str, key: &str) -> Result<Option<PointF>, ConfigError> {
        let Some(raw) = self.raw(section, key) else {
            return Ok(None);
        };
        let parsed = raw
            .split_once(',')
            .and_then(|(x, y)| Some(PointF::new(x.trim().parse().ok()?, y.trim().parse().ok()?)));
        parsed
            .map(Some)
            .ok_or_else(|| Self::format_error(section, key, raw, "must be 'x,y'"))
    }

    /// Get an `"x,y"` point or a default
    pub fn get_point_f(&self, section: &str, key: &str, default: PointF) -> Result<PointF, ConfigError> {
        Ok(self.get_point_f_opt(section, key)?.unwrap_or(default))
    }

    /// Get an `"r,g,b"` or `"r,g,b,a"` color (components 0..=255) or a default
    ///
    /// Components are divided by 255; a missing alpha is fully opaque.
    pub fn get_color(&self, section: &str, key: &str, default: Color) -> Result<Color, ConfigError> {
        let Some(raw) = self.raw(section, key) else {
            return Ok(default);
        };
        let parts = Self::split_numbers(raw)
            .filter(|parts| parts.len() == 3 || parts.len() == 4)
            .ok_or_else(|| Self::format_error(section, key, raw, "must be 'r,g,b' or 'r,g,b,a'"))?;
        let alpha = parts.get(3).map_or(1.0, |a| a / 255.0);
        Ok(Color::new(parts[0] / 255.0, parts[1] / 255.0, parts[2] / 255.0, alpha))
    }

    /// Get an `"x,y,width,height"` rectangle or a default
    pub fn get_rectangle_f(&self, section: &str, key: &str, default: RectF) -> Result<RectF, ConfigError> {
        let Some(raw) = self.raw(section, key) else {
            return Ok(default);
        };
        let parts = Self::split_numbers(raw)
            .filter(|parts| parts.len() == 4)
            .ok_or_else(|| Self::format_error(section, key, raw, "must be 'x,y,width,height'"))?;
        Ok(RectF::new(parts[0], parts[1], parts[2], parts[3]))
    }

    /// Get the index of an enumerated option or a default
    ///
    /// A value that is present but matches none of `options` is an error, never a
    /// silent fallback to `default`.
    pub fn get_option(
        &self,
        section: &str,
        key: &str,
        options: &[&str],
        default: usize,
    ) -> Result<usize, ConfigError> {
        let Some(raw) = self.raw(section, key) else {
            return Ok(default);
        };
        options
            .iter()
            .position(|option| *option == raw)
            .ok_or_else(|| ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
            })
    }

    fn parse_with<T>(
        &self,
        section: &str,
        key: &str,
        default: T,
        reason: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, ConfigError> {
        match self.raw(section, key) {
            None => Ok(default),
            Some(raw) => parse(raw.trim()).ok_or_else(|| Self::format_error(section, key, raw, reason)),
        }
    }

    fn split_numbers(raw: &str) -> Option<Vec<f32>> {
        raw.split(',').map(|part| part.trim().parse::<f32>().ok()).collect()
    }

    fn format_error(section: &str, key: &str, raw: &str, reason: &'static str) -> ConfigError {
        ConfigError::AssetLoad {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
            reason,
        }
    }
}
