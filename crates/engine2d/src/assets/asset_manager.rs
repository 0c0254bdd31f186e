//! Path-keyed asset cache
//!
//! Stylesheets are read from disk (relative to the assets directory) or
//! registered in memory; images and fonts are registered by path and handed to
//! the graphics backend for decoding.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{AssetError, AssetId, AssetLoader, FontAsset, FontHandle, ImageAsset, ImageHandle};
use crate::config::{ConfigAsset, ConfigHandle};
use crate::core::config::UISettings;

/// Asset manager backed by a base directory
pub struct AssetManager {
    base_dir: PathBuf,
    next_id: u64,
    images: HashMap<String, ImageHandle>,
    fonts: HashMap<String, FontHandle>,
    configs: HashMap<String, ConfigHandle>,
}

impl AssetManager {
    /// Create an asset manager rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            next_id: 0,
            images: HashMap::new(),
            fonts: HashMap::new(),
            configs: HashMap::new(),
        }
    }

    /// Create an asset manager from UI settings
    pub fn from_settings(settings: &UISettings) -> Self {
        Self::new(&settings.assets_dir)
    }

    /// Base directory relative paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Register an in-memory stylesheet under `path`
    ///
    /// Later loads of `path` return this config without touching the disk.
    pub fn insert_config(&mut self, path: &str, config: ConfigAsset) -> ConfigHandle {
        let handle = Rc::new(config);
        if self.configs.insert(path.to_string(), Rc::clone(&handle)).is_some() {
            log::debug!("Replaced cached config '{}'", path);
        }
        handle
    }

    /// Parse TOML text and register it under `path`
    pub fn insert_config_str(&mut self, path: &str, toml_text: &str) -> Result<ConfigHandle, AssetError> {
        let config = ConfigAsset::from_toml_str(toml_text).map_err(|source| AssetError::Config {
            path: path.to_string(),
            source,
        })?;
        Ok(self.insert_config(path, config))
    }

    /// Check if a path is already cached
    pub fn is_cached(&self, path: &str) -> bool {
        self.images.contains_key(path) || self.fonts.contains_key(path) || self.configs.contains_key(path)
    }

    /// Number of cached assets of all kinds
    pub fn len(&self) -> usize {
        self.images.len() + self.fonts.len() + self.configs.len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached asset
    ///
    /// Handles held elsewhere stay valid; the next load of a path creates a new asset.
    pub fn clear(&mut self) {
        self.images.clear();
        self.fonts.clear();
        self.configs.clear();
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    fn next_asset_id(&mut self) -> AssetId {
        let id = AssetId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_path(path: &str) -> Result<(), AssetError> {
        if path.trim().is_empty() {
            return Err(AssetError::NotFound("<empty path>".to_string()));
        }
        Ok(())
    }
}

impl AssetLoader for AssetManager {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
        Self::check_path(path)?;
        if let Some(image) = self.images.get(path) {
            return Ok(Rc::clone(image));
        }

        let image = Rc::new(ImageAsset {
            id: self.next_asset_id(),
            path: path.to_string(),
        });
        log::debug!("Registered image '{}' as {:?}", path, image.id);
        self.images.insert(path.to_string(), Rc::clone(&image));
        Ok(image)
    }

    fn load_font(&mut self, path: &str) -> Result<FontHandle, AssetError> {
        Self::check_path(path)?;
        if let Some(font) = self.fonts.get(path) {
            return Ok(Rc::clone(font));
        }

        let font = Rc::new(FontAsset {
            id: self.next_asset_id(),
            path: path.to_string(),
        });
        log::debug!("Registered font '{}' as {:?}", path, font.id);
        self.fonts.insert(path.to_string(), Rc::clone(&font));
        Ok(font)
    }

    fn load_config(&mut self, path: &str) -> Result<ConfigHandle, AssetError> {
        Self::check_path(path)?;
        if let Some(config) = self.configs.get(path) {
            return Ok(Rc::clone(config));
        }

        let full_path = self.resolve(path);
        if full_path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(AssetError::UnsupportedFormat(path.to_string()));
        }
        if !full_path.exists() {
            return Err(AssetError::NotFound(full_path.display().to_string()));
        }

        let contents = std::fs::read_to_string(&full_path)?;
        let config = ConfigAsset::from_toml_str(&contents).map_err(|source| AssetError::Config {
            path: path.to_string(),
            source,
        })?;
        log::debug!("Loaded config '{}'", full_path.display());
        Ok(self.insert_config(path, config))
    }
}
