//! Image widget - draws an image with per-state color and source rectangle

use super::core::UIElement;
use crate::assets::{AssetLoader, ImageHandle};
use crate::config::ConfigAsset;
use crate::render::backend::{GraphicsBackend, RenderResult};
use crate::ui::UIError;

/// Stylesheet section read by images and every image-based element
pub const IMAGE_SECTION: &str = "image";

/// UI image payload
///
/// Buttons, check boxes, sliders, scrollbars and windows are images too and
/// embed this payload.
#[derive(Debug, Clone, Default)]
pub struct UIImage {
    /// Image to draw; nothing is drawn while unset
    pub image: Option<ImageHandle>,
}

impl UIImage {
    /// Load the `[image]` section
    pub fn load_style(
        &mut self,
        element: &mut UIElement,
        config: &ConfigAsset,
        assets: &mut dyn AssetLoader,
    ) -> Result<(), UIError> {
        if let Some(path) = config.get_str_opt(IMAGE_SECTION, "image_path") {
            self.image = Some(assets.load_image(path)?);
        }
        element.style.load_colors(config, IMAGE_SECTION)?;
        element.style.load_source_rects(config, IMAGE_SECTION)?;
        element.style.load_blend(config, IMAGE_SECTION)?;
        Ok(())
    }

    /// Draw the image into the element's destination rectangle
    pub fn draw(&self, element: &UIElement, gfx: &mut dyn GraphicsBackend) -> RenderResult<()> {
        let Some(image) = &self.image else {
            return Ok(());
        };
        gfx.draw_image(
            image,
            element.dest_rect(),
            element.current_state_source_rect(),
            element.current_state_color(),
            element.style.blend,
        )
    }
}
