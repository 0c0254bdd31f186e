//! Font texture cache
//!
//! Rasterizing text is expensive, so every (font, text) pair drawn by the UI is
//! kept as a texture until it has not been drawn for a while. Ages are counted
//! in cache-check ticks rather than time, so a paused game keeps its textures.

use std::collections::HashMap;

use crate::assets::AssetId;
use crate::core::config::TextCacheConfig;
use crate::render::backend::{GraphicsBackend, TextureHandle};

/// Identifies a font at a specific native size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontKey {
    /// Font asset
    pub font: AssetId,
    /// Native rasterization size in pixels
    pub native_size: u32,
}

/// A rasterized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedTexture {
    /// Texture holding the text
    pub texture: TextureHandle,
    /// Width in pixels at native size
    pub width: i32,
    /// Height in pixels at native size
    pub height: i32,
    /// Remaining time to live, in cache-check ticks
    pub ttl: i32,
}

/// TTL-based cache of rasterized texts
#[derive(Debug)]
pub struct FontsTextureCache {
    config: TextCacheConfig,
    entries: HashMap<FontKey, HashMap<String, CachedTexture>>,
    countdown: u32,
}

impl FontsTextureCache {
    /// Create an empty cache
    pub fn new(config: TextCacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            countdown: config.check_interval.max(1),
        }
    }

    /// Cache timings
    pub const fn config(&self) -> &TextCacheConfig {
        &self.config
    }

    /// Look up a rasterized text
    ///
    /// A hit refreshes the entry's TTL.
    pub fn get_from_cache(&mut self, font: FontKey, text: &str) -> Option<CachedTexture> {
        let entry = self.entries.get_mut(&font)?.get_mut(text)?;
        entry.ttl = self.config.hit_ttl;
        Some(*entry)
    }

    /// Store a rasterized text
    ///
    /// Returns the texture previously cached under the same key, if any; the
    /// caller owns it and must release it.
    pub fn add_to_cache(
        &mut self,
        font: FontKey,
        text: &str,
        texture: TextureHandle,
        width: i32,
        height: i32,
    ) -> Option<TextureHandle> {
        let entry = CachedTexture {
            texture,
            width,
            height,
            ttl: self.config.insert_ttl,
        };
        self.entries
            .entry(font)
            .or_default()
            .insert(text.to_string(), entry)
            .map(|previous| previous.texture)
            .filter(|previous| *previous != texture)
    }

    /// Tick the cache
    ///
    /// Every `check_interval` calls, ages all entries and releases the ones
    /// whose TTL dropped below zero. Returns the number of released textures.
    pub fn update(&mut self, backend: &mut dyn GraphicsBackend) -> usize {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return 0;
        }
        self.countdown = self.config.check_interval.max(1);

        let step = self.config.check_interval as i32;
        let mut released = 0;
        for texts in self.entries.values_mut() {
            texts.retain(|text, entry| {
                entry.ttl -= step;
                if entry.ttl < 0 {
                    log::trace!("Releasing cached text '{}'", text);
                    backend.destroy_texture(entry.texture);
                    released += 1;
                    false
                } else {
                    true
                }
            });
        }
        self.entries.retain(|_, texts| !texts.is_empty());

        if released > 0 {
            log::info!("Font texture cache released {} texture(s), {} remaining", released, self.len());
        }
        released
    }

    /// Release every cached texture
    pub fn clear(&mut self, backend: &mut dyn GraphicsBackend) {
        for texts in self.entries.values() {
            for entry in texts.values() {
                backend.destroy_texture(entry.texture);
            }
        }
        self.entries.clear();
    }

    /// Number of cached texts
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FontsTextureCache {
    fn default() -> Self {
        Self::new(TextCacheConfig::default())
    }
}
