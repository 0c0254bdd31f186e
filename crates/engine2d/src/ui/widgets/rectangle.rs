//! Rectangle widget - colored backgrounds and outlines

use super::core::UIElement;
use crate::config::ConfigAsset;
use crate::render::backend::{GraphicsBackend, RenderResult};
use crate::ui::UIError;

const SECTION: &str = "rectangle";

/// UI rectangle payload
#[derive(Debug, Clone)]
pub struct UIRectangle {
    /// Fill the rectangle, or draw its outline only
    pub filled: bool,
}

impl Default for UIRectangle {
    fn default() -> Self {
        Self { filled: true }
    }
}

impl UIRectangle {
    /// Load the `[rectangle]` section
    pub fn load_style(&mut self, element: &mut UIElement, config: &ConfigAsset) -> Result<(), UIError> {
        element.style.load_colors(config, SECTION)?;
        element.style.load_blend(config, SECTION)?;
        self.filled = config.get_bool(SECTION, "filled", self.filled)?;
        Ok(())
    }

    /// Draw the rectangle in the current state color
    pub fn draw(&self, element: &UIElement, gfx: &mut dyn GraphicsBackend) -> RenderResult<()> {
        gfx.draw_rectangle(
            element.dest_rect(),
            element.current_state_color(),
            self.filled,
            element.style.blend,
        )
    }
}
