//! Asset management system
//!
//! UI elements reach images, fonts and stylesheets through the [`AssetLoader`]
//! trait. Loaded assets are shared handles; loading the same path twice returns
//! the same handle.

mod asset_manager;

pub use asset_manager::AssetManager;

use std::rc::Rc;
use thiserror::Error;

use crate::config::{ConfigError, ConfigHandle};

/// Identifier assigned to an asset when it is first loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

/// An image known to the asset manager
///
/// Decoding and GPU upload belong to the graphics backend; the UI only needs a
/// stable identity and the path it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Asset identifier
    pub id: AssetId,
    /// Path the image was loaded from
    pub path: String,
}

/// A font known to the asset manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    /// Asset identifier
    pub id: AssetId,
    /// Path the font was loaded from
    pub path: String,
}

/// Shared image handle
pub type ImageHandle = Rc<ImageAsset>;

/// Shared font handle
pub type FontHandle = Rc<FontAsset>;

/// Asset source consumed by the UI
pub trait AssetLoader {
    /// Load (or fetch from cache) an image
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError>;

    /// Load (or fetch from cache) a font
    fn load_font(&mut self, path: &str) -> Result<FontHandle, AssetError>;

    /// Load (or fetch from cache) a stylesheet
    fn load_config(&mut self, path: &str) -> Result<ConfigHandle, AssetError>;
}

/// Asset system errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Unsupported asset format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Config asset could not be parsed
    #[error("Config error in '{path}': {source}")]
    Config {
        /// Path of the config asset
        path: String,
        /// Underlying parse error
        #[source]
        source: ConfigError,
    },

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
