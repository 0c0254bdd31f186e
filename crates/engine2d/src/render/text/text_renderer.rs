//! Text renderer
//!
//! Draws texts through the graphics backend, rasterizing each (font, text)
//! pair once and reusing the texture while it stays in the cache.

use super::font_cache::{FontKey, FontsTextureCache};
use crate::assets::FontHandle;
use crate::core::config::TextCacheConfig;
use crate::foundation::math::{Color, PointI, RectI};
use crate::render::backend::{BlendMode, GraphicsBackend, RenderResult, TextureHandle};

/// Alignment names accepted by stylesheets, in [`TextAlignment`] order
pub const ALIGNMENT_OPTIONS: [&str; 3] = ["left", "right", "center"];

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Text starts at the position
    #[default]
    Left,
    /// Text ends at the position
    Right,
    /// Text is centered on the position
    Center,
}

impl TextAlignment {
    /// Alignment for an index into [`ALIGNMENT_OPTIONS`]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Center),
            _ => None,
        }
    }

    /// Horizontal origin of the drawn text (0 = left edge, 1 = right edge)
    pub const fn origin_x(self) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Right => 1.0,
            Self::Center => 0.5,
        }
    }
}

/// Parameters for a single text draw
#[derive(Debug, Clone, Copy)]
pub struct TextDraw<'a> {
    /// Font to draw with
    pub font: &'a FontHandle,
    /// Size the font is rasterized at
    pub native_size: u32,
    /// Size the text is drawn at
    pub font_size: u32,
    /// Text to draw
    pub text: &'a str,
    /// Anchor position; its meaning depends on `alignment`
    pub position: PointI,
    /// Horizontal alignment around `position`
    pub alignment: TextAlignment,
    /// Text color
    pub color: Color,
    /// Blend mode
    pub blend: BlendMode,
}

/// Cached text renderer
#[derive(Debug, Default)]
pub struct TextRenderer {
    cache: FontsTextureCache,
}

impl TextRenderer {
    /// Create a text renderer with the given cache timings
    pub fn new(config: TextCacheConfig) -> Self {
        Self {
            cache: FontsTextureCache::new(config),
        }
    }

    /// The font texture cache
    pub const fn cache(&self) -> &FontsTextureCache {
        &self.cache
    }

    /// Size a text would be drawn at
    ///
    /// Rasterizes (and caches) the text if it is not cached yet.
    pub fn measure_text(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        font: &FontHandle,
        native_size: u32,
        font_size: u32,
        text: &str,
    ) -> RenderResult<PointI> {
        if text.is_empty() {
            return Ok(PointI::zeros());
        }
        let (width, height, _) = self.fetch(backend, font, native_size, text)?;
        Ok(Self::scaled_size(width, height, native_size, font_size))
    }

    /// Draw a text, returning the drawn rectangle
    pub fn draw_text(&mut self, backend: &mut dyn GraphicsBackend, draw: &TextDraw<'_>) -> RenderResult<RectI> {
        if draw.text.is_empty() {
            return Ok(RectI::new(draw.position.x, draw.position.y, 0, 0));
        }

        let (width, height, texture) = self.fetch(backend, draw.font, draw.native_size, draw.text)?;
        let size = Self::scaled_size(width, height, draw.native_size, draw.font_size);

        let x = draw.position.x - (size.x as f32 * draw.alignment.origin_x()) as i32;
        let dest = RectI::new(x, draw.position.y, size.x, size.y);
        backend.draw_texture(texture, dest, draw.color, draw.blend)?;
        Ok(dest)
    }

    /// Tick the font texture cache
    pub fn update(&mut self, backend: &mut dyn GraphicsBackend) -> usize {
        self.cache.update(backend)
    }

    /// Release every cached texture
    pub fn clear(&mut self, backend: &mut dyn GraphicsBackend) {
        self.cache.clear(backend);
    }

    fn fetch(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        font: &FontHandle,
        native_size: u32,
        text: &str,
    ) -> RenderResult<(i32, i32, TextureHandle)> {
        let key = FontKey {
            font: font.id,
            native_size,
        };
        if let Some(cached) = self.cache.get_from_cache(key, text) {
            return Ok((cached.width, cached.height, cached.texture));
        }

        let rendered = backend.render_text(font, text, native_size)?;
        if let Some(previous) = self
            .cache
            .add_to_cache(key, text, rendered.texture, rendered.width, rendered.height)
        {
            backend.destroy_texture(previous);
        }
        Ok((rendered.width, rendered.height, rendered.texture))
    }

    fn scaled_size(width: i32, height: i32, native_size: u32, font_size: u32) -> PointI {
        if native_size == 0 || native_size == font_size {
            return PointI::new(width, height);
        }
        let scale = font_size as f32 / native_size as f32;
        PointI::new((width as f32 * scale) as i32, (height as f32 * scale) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetId, FontAsset};
    use crate::foundation::math::white;
    use crate::render::commands::{CommandRecorder, DrawCommand};
    use std::rc::Rc;

    fn font() -> FontHandle {
        Rc::new(FontAsset {
            id: AssetId(9),
            path: "ui.ttf".to_string(),
        })
    }

    fn draw<'a>(font: &'a FontHandle, text: &'a str, alignment: TextAlignment, font_size: u32) -> TextDraw<'a> {
        TextDraw {
            font,
            native_size: 24,
            font_size,
            text,
            position: PointI::new(100, 10),
            alignment,
            color: white(),
            blend: BlendMode::AlphaBlend,
        }
    }

    #[test]
    fn test_text_is_rasterized_once() {
        let font = font();
        let mut backend = CommandRecorder::new(800, 600);
        let mut renderer = TextRenderer::default();

        renderer.draw_text(&mut backend, &draw(&font, "Play", TextAlignment::Left, 24)).unwrap();
        renderer.draw_text(&mut backend, &draw(&font, "Play", TextAlignment::Left, 24)).unwrap();

        assert_eq!(backend.rendered_texts(), &["Play".to_string()]);
        assert_eq!(backend.commands().len(), 2);
        assert_eq!(renderer.cache().len(), 1);
    }

    #[test]
    fn test_alignment_and_scale() {
        let font = font();
        let mut backend = CommandRecorder::new(800, 600);
        let mut renderer = TextRenderer::default();

        // 4 chars * 8px = 32px at native size, 64px at double size
        let right = renderer.draw_text(&mut backend, &draw(&font, "Quit", TextAlignment::Right, 48)).unwrap();
        assert_eq!(right, RectI::new(36, 10, 64, 32));

        let center = renderer.draw_text(&mut backend, &draw(&font, "Quit", TextAlignment::Center, 24)).unwrap();
        assert_eq!(center, RectI::new(84, 10, 32, 16));

        assert!(matches!(backend.commands()[0], DrawCommand::Texture { dest, .. } if dest == right));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let font = font();
        let mut backend = CommandRecorder::new(800, 600);
        let mut renderer = TextRenderer::default();
        renderer.draw_text(&mut backend, &draw(&font, "", TextAlignment::Left, 24)).unwrap();
        assert!(backend.commands().is_empty());
        assert!(backend.rendered_texts().is_empty());
    }

    #[test]
    fn test_evicted_text_is_rasterized_again() {
        let font = font();
        let mut backend = CommandRecorder::new(800, 600);
        let mut renderer = TextRenderer::new(TextCacheConfig::new().with_check_interval(1).with_ttl(0, 0));

        renderer.measure_text(&mut backend, &font, 24, 24, "Hi").unwrap();
        assert_eq!(renderer.update(&mut backend), 1);
        assert_eq!(backend.live_texture_count(), 0);

        renderer.measure_text(&mut backend, &font, 24, 24, "Hi").unwrap();
        assert_eq!(backend.rendered_texts().len(), 2);
    }
}
