//! Graphics backend trait
//!
//! Defines the interface between the UI and a rendering backend. The UI never
//! talks to a GPU API directly: it asks the backend to draw images, rectangles
//! and pre-rasterized text textures in render-target pixels.

use crate::assets::{FontHandle, ImageHandle};
use crate::foundation::math::{to_point_i, Color, PointF, PointI, RectI};

/// Result type for backend calls
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors reported by a graphics backend
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Text could not be rasterized
    #[error("Failed to render text '{text}': {reason}")]
    TextRasterization {
        /// Text that failed
        text: String,
        /// Backend message
        reason: String,
    },

    /// Texture handle is unknown to the backend
    #[error("Unknown texture: {0:?}")]
    UnknownTexture(TextureHandle),

    /// Any other backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// A text rasterized into a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedText {
    /// Texture holding the text
    pub texture: TextureHandle,
    /// Texture width in pixels
    pub width: i32,
    /// Texture height in pixels
    pub height: i32,
}

/// Blend mode names accepted by stylesheets, in [`BlendMode`] order
pub const BLEND_OPTIONS: [&str; 11] = [
    "opaque",
    "alpha",
    "mod",
    "darken",
    "multiply",
    "screen",
    "invert",
    "difference",
    "lighten",
    "additive",
    "subtract",
];

/// How a draw call is blended with the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// No blending
    Opaque,
    /// Standard alpha blending
    #[default]
    AlphaBlend,
    /// Color modulation
    Mod,
    /// Keep the darker color
    Darken,
    /// Multiply colors
    Multiply,
    /// Screen blending
    Screen,
    /// Invert destination
    Invert,
    /// Absolute difference
    Difference,
    /// Keep the lighter color
    Lighten,
    /// Add colors
    Additive,
    /// Subtract colors
    Subtract,
}

impl BlendMode {
    /// All blend modes, in [`BLEND_OPTIONS`] order
    pub const ALL: [Self; 11] = [
        Self::Opaque,
        Self::AlphaBlend,
        Self::Mod,
        Self::Darken,
        Self::Multiply,
        Self::Screen,
        Self::Invert,
        Self::Difference,
        Self::Lighten,
        Self::Additive,
        Self::Subtract,
    ];

    /// Blend mode for an index into [`BLEND_OPTIONS`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stylesheet name of this blend mode
    pub fn name(self) -> &'static str {
        BLEND_OPTIONS[self as usize]
    }
}

/// A positioned, rotated image draw
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Image to draw
    pub image: ImageHandle,
    /// Position in render-target pixels
    pub position: PointI,
    /// Drawn size in pixels
    pub size: PointI,
    /// Normalized origin within `size`
    pub origin: PointF,
    /// Source rectangle; empty draws the whole image
    pub source_rect: RectI,
    /// Rotation in degrees
    pub rotation: f32,
    /// Tint color
    pub color: Color,
    /// Blend mode
    pub blend: BlendMode,
}

impl Sprite {
    /// Create a sprite drawing the whole image at `size`
    pub fn new(image: ImageHandle, size: PointI) -> Self {
        Self {
            image,
            position: PointI::zeros(),
            size,
            origin: PointF::zeros(),
            source_rect: RectI::zero(),
            rotation: 0.0,
            color: crate::foundation::math::white(),
            blend: BlendMode::AlphaBlend,
        }
    }

    /// Destination rectangle after applying the origin
    pub fn dest_rect(&self) -> RectI {
        let size = PointF::new(self.size.x as f32, self.size.y as f32);
        let top_left = self.position - to_point_i(self.origin.component_mul(&size));
        RectI::new(top_left.x, top_left.y, self.size.x, self.size.y)
    }
}

/// Rendering backend consumed by the UI
pub trait GraphicsBackend {
    /// Size of the render target in pixels
    fn renderable_size(&self) -> PointI;

    /// Size of the window in screen pixels
    fn window_size(&self) -> PointI;

    /// Draw an image
    ///
    /// An empty `source` draws the whole image.
    fn draw_image(
        &mut self,
        image: &ImageHandle,
        dest: RectI,
        source: RectI,
        color: Color,
        blend: BlendMode,
    ) -> RenderResult<()>;

    /// Draw a filled or outlined rectangle
    fn draw_rectangle(&mut self, rect: RectI, color: Color, filled: bool, blend: BlendMode) -> RenderResult<()>;

    /// Draw a sprite
    ///
    /// Backends without rotation support can rely on the default, which draws
    /// the sprite's destination rectangle unrotated.
    fn draw_sprite(&mut self, sprite: &Sprite) -> RenderResult<()> {
        self.draw_image(&sprite.image, sprite.dest_rect(), sprite.source_rect, sprite.color, sprite.blend)
    }

    /// Rasterize a text into a new texture owned by the caller
    fn render_text(&mut self, font: &FontHandle, text: &str, native_size: u32) -> RenderResult<RenderedText>;

    /// Draw a texture previously returned by [`GraphicsBackend::render_text`]
    fn draw_texture(&mut self, texture: TextureHandle, dest: RectI, color: Color, blend: BlendMode) -> RenderResult<()>;

    /// Release a texture
    fn destroy_texture(&mut self, texture: TextureHandle);
}
