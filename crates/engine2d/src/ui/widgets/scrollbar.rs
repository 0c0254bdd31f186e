//! Vertical scrollbar widget

use super::core::UISides;
use super::image::UIImage;
use crate::foundation::math::RectI;
use crate::ui::UINodeId;

/// Default maximum scrollbar value
pub const DEFAULT_SCROLLBAR_MAX: i32 = 10;

/// UI vertical scrollbar payload
///
/// The value is derived from the handle offset every update.
#[derive(Debug, Clone)]
pub struct UIVerticalScrollbar {
    /// Track image
    pub image: UIImage,
    /// Handle element, if styled
    pub handle: Option<UINodeId>,
    pub(crate) value: i32,
    pub(crate) max_value: i32,
    /// Cursor y of a track press the next update snaps the handle to
    pub(crate) pending_snap: Option<i32>,
}

impl Default for UIVerticalScrollbar {
    fn default() -> Self {
        Self {
            image: UIImage::default(),
            handle: None,
            value: 0,
            max_value: DEFAULT_SCROLLBAR_MAX,
            pending_snap: None,
        }
    }
}

impl UIVerticalScrollbar {
    /// Current value
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Maximum value
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Height the handle can travel
    pub const fn track_height(rect: RectI, padding: UISides, handle_height: i32) -> i32 {
        rect.height - padding.top - padding.bottom - handle_height
    }

    /// Value for a handle offset
    pub fn value_from_offset(&self, offset_y: i32, track_height: i32) -> i32 {
        if track_height <= 0 {
            return 0;
        }
        ((offset_y as f32 / track_height as f32) * self.max_value as f32).ceil() as i32
    }

    /// Handle offset that centers the handle on `cursor_y`
    pub const fn snap_offset(cursor_y: i32, rect: RectI, padding: UISides, handle_height: i32) -> i32 {
        cursor_y - rect.y - padding.top - handle_height / 2
    }

    /// Handle movement for one value step
    pub fn step(&self, track_height: i32) -> i32 {
        if self.max_value <= 0 {
            return 0;
        }
        (track_height as f32 / self.max_value as f32).ceil() as i32
    }
}
