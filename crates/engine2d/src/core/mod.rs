//! # Core Module
//!
//! Shared settings and re-exports used throughout the engine.
//!
//! ## Organization
//!
//! - **Config**: engine-level UI settings
//! - **Foundation**: low-level utilities (math, collections, logging)
//! - **Assets**: asset loading and caching

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;
pub use crate::assets;

pub use config::{
    UISettings,
    TextCacheConfig,
    Config,
    ConfigError,
};
