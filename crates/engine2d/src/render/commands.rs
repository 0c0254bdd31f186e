//! Recorded draw commands
//!
//! [`CommandRecorder`] is a headless [`GraphicsBackend`]: instead of drawing it
//! records every call as a [`DrawCommand`] so a frame can be inspected, replayed
//! by a real renderer or logged.

use std::collections::HashSet;

use super::backend::{BlendMode, GraphicsBackend, RenderError, RenderResult, RenderedText, TextureHandle};
use crate::assets::{AssetId, FontHandle, ImageHandle};
use crate::foundation::math::{Color, PointI, RectI};

/// Width of one character in the recorder's fake text rasterizer, at native size
pub const RECORDER_GLYPH_WIDTH: i32 = 8;

/// Height of a text line in the recorder's fake text rasterizer, at native size
pub const RECORDER_LINE_HEIGHT: i32 = 16;

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Image draw
    Image {
        /// Image asset
        image: AssetId,
        /// Destination rectangle
        dest: RectI,
        /// Source rectangle (empty for the whole image)
        source: RectI,
        /// Tint color
        color: Color,
        /// Blend mode
        blend: BlendMode,
    },
    /// Rectangle draw
    Rectangle {
        /// Destination rectangle
        rect: RectI,
        /// Color
        color: Color,
        /// Filled or outline only
        filled: bool,
        /// Blend mode
        blend: BlendMode,
    },
    /// Texture draw (rendered text)
    Texture {
        /// Texture handle
        texture: TextureHandle,
        /// Destination rectangle
        dest: RectI,
        /// Tint color
        color: Color,
        /// Blend mode
        blend: BlendMode,
    },
}

impl DrawCommand {
    /// Destination rectangle of the command
    pub const fn dest(&self) -> RectI {
        match self {
            Self::Image { dest, .. } | Self::Texture { dest, .. } => *dest,
            Self::Rectangle { rect, .. } => *rect,
        }
    }
}

/// Headless graphics backend that records draw calls
#[derive(Debug)]
pub struct CommandRecorder {
    renderable_size: PointI,
    window_size: PointI,
    commands: Vec<DrawCommand>,
    next_texture: u64,
    live_textures: HashSet<TextureHandle>,
    destroyed_textures: Vec<TextureHandle>,
    rendered_texts: Vec<String>,
}

impl CommandRecorder {
    /// Create a recorder whose window and render target share a size
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_window_size(PointI::new(width, height), PointI::new(width, height))
    }

    /// Create a recorder with distinct render-target and window sizes
    pub fn with_window_size(renderable_size: PointI, window_size: PointI) -> Self {
        Self {
            renderable_size,
            window_size,
            commands: Vec::new(),
            next_texture: 1,
            live_textures: HashSet::new(),
            destroyed_textures: Vec::new(),
            rendered_texts: Vec::new(),
        }
    }

    /// Recorded commands, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Texts rasterized so far, in order
    pub fn rendered_texts(&self) -> &[String] {
        &self.rendered_texts
    }

    /// Textures that were released through [`GraphicsBackend::destroy_texture`]
    pub fn destroyed_textures(&self) -> &[TextureHandle] {
        &self.destroyed_textures
    }

    /// Number of textures created and not yet released
    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }

    /// Resize the render target and window
    pub fn resize(&mut self, renderable_size: PointI, window_size: PointI) {
        self.renderable_size = renderable_size;
        self.window_size = window_size;
    }
}

impl GraphicsBackend for CommandRecorder {
    fn renderable_size(&self) -> PointI {
        self.renderable_size
    }

    fn window_size(&self) -> PointI {
        self.window_size
    }

    fn draw_image(
        &mut self,
        image: &ImageHandle,
        dest: RectI,
        source: RectI,
        color: Color,
        blend: BlendMode,
    ) -> RenderResult<()> {
        self.commands.push(DrawCommand::Image {
            image: image.id,
            dest,
            source,
            color,
            blend,
        });
        Ok(())
    }

    fn draw_rectangle(&mut self, rect: RectI, color: Color, filled: bool, blend: BlendMode) -> RenderResult<()> {
        self.commands.push(DrawCommand::Rectangle { rect, color, filled, blend });
        Ok(())
    }

    fn render_text(&mut self, _font: &FontHandle, text: &str, _native_size: u32) -> RenderResult<RenderedText> {
        let texture = TextureHandle(self.next_texture);
        self.next_texture += 1;
        self.live_textures.insert(texture);
        self.rendered_texts.push(text.to_string());

        let width = text.chars().count() as i32 * RECORDER_GLYPH_WIDTH;
        Ok(RenderedText {
            texture,
            width,
            height: RECORDER_LINE_HEIGHT,
        })
    }

    fn draw_texture(&mut self, texture: TextureHandle, dest: RectI, color: Color, blend: BlendMode) -> RenderResult<()> {
        if !self.live_textures.contains(&texture) {
            return Err(RenderError::UnknownTexture(texture));
        }
        self.commands.push(DrawCommand::Texture { texture, dest, color, blend });
        Ok(())
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        if self.live_textures.remove(&texture) {
            self.destroyed_textures.push(texture);
        } else {
            log::warn!("Destroying unknown texture {:?}", texture);
        }
    }
}
