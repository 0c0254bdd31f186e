//! # Engine2D
//!
//! Runtime core of a 2D game engine: a retained-mode UI element tree styled
//! from stylesheets, driven once per frame by the host application.
//!
//! ## Features
//!
//! - **UI Tree**: images, texts, rectangles, buttons, check boxes, radio buttons,
//!   sliders, scrollbars, windows and lists in a handle-addressed arena
//! - **Stylesheets**: section-keyed TOML stylesheets, nested for composite elements
//! - **Text Cache**: rasterized texts kept in a TTL cache and released when stale
//! - **Backends**: input and drawing go through traits; a headless command
//!   recorder is included for tests and tooling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use engine2d::prelude::*;
//!
//! fn main() -> Result<(), UIError> {
//!     let settings = UISettings::default();
//!     let mut ui = UIManager::from_settings(&settings)?;
//!     let root = ui.create_root(None)?;
//!     let play = ui.create_button(Some("ui/button.toml"), Some(root), Some("Play"))?;
//!     ui.set_callback(play, UICallbackKind::MouseReleased, |_, _| log::info!("Play!"))?;
//!
//!     let mut input = InputState::new();
//!     let mut gfx = CommandRecorder::new(1280, 720);
//!     loop {
//!         input.begin_frame();
//!         // ... feed platform events into `input` ...
//!         ui.update_ui(root, 1.0 / 60.0, &input, &gfx);
//!         ui.draw(root, true, &input, &mut gfx)?;
//!         ui.end_frame(&mut gfx);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;
pub mod foundation;
pub mod assets;
pub mod input;
pub mod render;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetLoader, AssetManager},
        config::{ConfigAsset, ConfigError},
        core::{Config, TextCacheConfig, UISettings},
        foundation::math::{Color, PointF, PointI, RectI},
        input::{InputBackend, InputState, KeyCode, MouseButton},
        render::{BlendMode, CommandRecorder, DrawCommand, GraphicsBackend, Sprite},
        ui::{UICallbackKind, UIElementFlags, UIElementState, UIElementType, UIError, UIManager, UINodeId},
    };
}
