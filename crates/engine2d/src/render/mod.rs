//! # Rendering System
//!
//! Backend-agnostic drawing interface used by the UI.
//!
//! ## Architecture
//!
//! - **Backend**: the [`GraphicsBackend`] trait a platform renderer implements
//! - **Commands**: [`CommandRecorder`], a headless backend recording [`DrawCommand`]s
//! - **Text**: cached text rasterization on top of the backend

pub mod backend;
pub mod commands;
pub mod text;

pub use backend::{
    BlendMode, GraphicsBackend, RenderError, RenderResult, RenderedText, Sprite, TextureHandle, BLEND_OPTIONS,
};
pub use commands::{CommandRecorder, DrawCommand};
pub use text::{FontsTextureCache, TextAlignment, TextRenderer};
