//! Text rendering system
//!
//! Screen-space text for the UI. Texts are rasterized by the graphics backend
//! into one texture per (font, text) pair and kept in a TTL cache.
//!
//! # Architecture
//!
//! - [`TextRenderer`]: draws texts, rasterizing on cache misses
//! - [`FontsTextureCache`]: the (font, text) to texture cache and its eviction
//!
//! # Example
//!
//! ```
//! use engine2d::render::commands::CommandRecorder;
//! use engine2d::render::text::TextRenderer;
//!
//! let mut backend = CommandRecorder::new(800, 600);
//! let mut renderer = TextRenderer::default();
//! // ... draw texts during the frame ...
//! renderer.update(&mut backend);
//! ```

mod font_cache;
mod text_renderer;

pub use font_cache::{CachedTexture, FontKey, FontsTextureCache};
pub use text_renderer::{TextAlignment, TextDraw, TextRenderer, ALIGNMENT_OPTIONS};
