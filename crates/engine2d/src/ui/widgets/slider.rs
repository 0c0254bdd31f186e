//! Slider widget - horizontal integer value picker
//!
//! The slider is an image (the track) with an optional handle image and an
//! optional overlay that shows the active part of the track.

use super::core::UISides;
use super::image::UIImage;
use crate::foundation::math::{RectI, PointI};
use crate::ui::UINodeId;

/// Default maximum slider value
pub const DEFAULT_SLIDER_MAX: i32 = 10;

/// UI slider payload
#[derive(Debug, Clone)]
pub struct UISlider {
    /// Track image
    pub image: UIImage,
    /// Handle element, if styled
    pub handle: Option<UINodeId>,
    /// Active-part overlay element, if styled
    pub overlay: Option<UINodeId>,
    /// Source rectangle of the active part within the track image
    pub active_source_rect: RectI,
    pub(crate) value: i32,
    pub(crate) max_value: i32,
}

impl Default for UISlider {
    fn default() -> Self {
        Self {
            image: UIImage::default(),
            handle: None,
            overlay: None,
            active_source_rect: RectI::zero(),
            value: 0,
            max_value: DEFAULT_SLIDER_MAX,
        }
    }
}

impl UISlider {
    /// Current value
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Maximum value
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Clamp a value into `[0, max_value]`
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.max_value.max(0))
    }

    /// Width the handle can travel
    pub fn track_width(rect: RectI, padding: UISides, handle_width: i32) -> i32 {
        rect.width - padding.left - padding.right - handle_width
    }

    /// Value under the cursor (unclamped)
    pub fn value_at(&self, mouse: PointI, rect: RectI, padding: UISides, handle_width: i32) -> i32 {
        let track = Self::track_width(rect, padding, handle_width);
        if track <= 0 {
            return 0;
        }
        let x = mouse.x - rect.x - padding.left - handle_width / 2;
        ((x as f32 / track as f32) * self.max_value as f32).floor() as i32
    }

    /// Fraction of the track covered by the current value
    pub fn fill_ratio(&self) -> f32 {
        if self.max_value <= 0 {
            return 0.0;
        }
        self.value as f32 / self.max_value as f32
    }

    /// Handle x offset for the current value
    pub fn handle_offset(&self, rect: RectI, padding: UISides, handle_width: i32) -> i32 {
        let track = Self::track_width(rect, padding, handle_width).max(0);
        (self.fill_ratio() * track as f32) as i32
    }

    /// Overlay size and source rectangle for the current value
    pub fn overlay_geometry(&self, rect: RectI, padding: UISides) -> (PointI, RectI) {
        let ratio = self.fill_ratio();
        let inner = padding.shrink(rect);
        let size = PointI::new((inner.width as f32 * ratio) as i32, inner.height);
        let mut source = self.active_source_rect;
        source.width = (source.width as f32 * ratio) as i32;
        (size, source)
    }
}
