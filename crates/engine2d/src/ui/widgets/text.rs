//! Text widget - labels and text display

use super::core::UIElement;
use crate::assets::{AssetLoader, FontHandle};
use crate::config::ConfigAsset;
use crate::foundation::math::{PointI, RectI};
use crate::render::backend::{GraphicsBackend, RenderResult};
use crate::render::text::{TextAlignment, TextDraw, TextRenderer, ALIGNMENT_OPTIONS};
use crate::ui::UIError;

const SECTION: &str = "text";

/// Default native rasterization size of fonts
pub const DEFAULT_FONT_NATIVE_SIZE: u32 = 24;

/// UI text payload
#[derive(Debug, Clone)]
pub struct UIText {
    /// Text content to display
    pub text: String,
    /// Font; nothing is drawn while unset
    pub font: Option<FontHandle>,
    /// Size the font is rasterized at
    pub font_native_size: u32,
    /// Size the text is drawn at
    pub font_size: u32,
    /// Horizontal alignment within the element bounds
    pub alignment: TextAlignment,
    pub(crate) actual_rect: RectI,
}

impl Default for UIText {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: None,
            font_native_size: DEFAULT_FONT_NATIVE_SIZE,
            font_size: DEFAULT_FONT_NATIVE_SIZE,
            alignment: TextAlignment::Left,
            actual_rect: RectI::zero(),
        }
    }
}

impl UIText {
    /// Create a text payload with content
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Load the `[text]` section
    ///
    /// `font_size` defaults to the native size when only the native size is set.
    pub fn load_style(
        &mut self,
        element: &mut UIElement,
        config: &ConfigAsset,
        assets: &mut dyn AssetLoader,
    ) -> Result<(), UIError> {
        if let Some(path) = config.get_str_opt(SECTION, "font_path") {
            self.font = Some(assets.load_font(path)?);
        }

        let native = config.get_int(SECTION, "font_native_size", self.font_native_size as i32)?;
        self.font_native_size = native.max(1) as u32;
        let size_default = if config.contains(SECTION, "font_native_size") {
            self.font_native_size
        } else {
            self.font_size
        };
        self.font_size = config.get_int(SECTION, "font_size", size_default as i32)?.max(0) as u32;

        let alignment = config.get_option(SECTION, "alignment", &ALIGNMENT_OPTIONS, self.alignment as usize)?;
        self.alignment = TextAlignment::from_index(alignment).unwrap_or_default();

        element.style.load_colors(config, SECTION)?;
        element.style.load_blend(config, SECTION)?;
        Ok(())
    }

    /// Position the text is drawn from, given the alignment
    pub fn draw_position(&self, dest: RectI) -> PointI {
        let x = match self.alignment {
            TextAlignment::Left => dest.x,
            TextAlignment::Center => dest.x + dest.width / 2,
            TextAlignment::Right => dest.right(),
        };
        PointI::new(x, dest.y)
    }

    /// Rectangle the text covered when last drawn or measured
    ///
    /// Empty at the draw position while the text has no font or no content.
    pub const fn actual_rect(&self) -> RectI {
        self.actual_rect
    }

    /// Compute the covered rectangle without drawing
    pub fn measure(
        &mut self,
        element: &UIElement,
        renderer: &mut TextRenderer,
        gfx: &mut dyn GraphicsBackend,
    ) -> RenderResult<RectI> {
        let position = self.draw_position(element.dest_rect());
        let size = match &self.font {
            Some(font) => renderer.measure_text(gfx, font, self.font_native_size, self.font_size, &self.text)?,
            None => PointI::zeros(),
        };
        let x = position.x - (size.x as f32 * self.alignment.origin_x()) as i32;
        self.actual_rect = RectI::new(x, position.y, size.x, size.y);
        Ok(self.actual_rect)
    }

    /// Draw the text inside the element's destination rectangle
    ///
    /// Returns the rectangle the text covered.
    pub fn draw(
        &self,
        element: &UIElement,
        renderer: &mut TextRenderer,
        gfx: &mut dyn GraphicsBackend,
    ) -> RenderResult<RectI> {
        let position = self.draw_position(element.dest_rect());
        let Some(font) = &self.font else {
            return Ok(RectI::new(position.x, position.y, 0, 0));
        };
        renderer.draw_text(
            gfx,
            &TextDraw {
                font,
                native_size: self.font_native_size,
                font_size: self.font_size,
                text: &self.text,
                position,
                alignment: self.alignment,
                color: element.current_state_color(),
                blend: element.style.blend,
            },
        )
    }
}
