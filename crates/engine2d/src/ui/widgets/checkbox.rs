//! Check box and radio button widgets
//!
//! Both are images with a caption and a latched checked value; a checked box is
//! displayed in its pressed style. Radio buttons uncheck their sibling radios
//! when checked.

use super::image::UIImage;
use crate::ui::UINodeId;

/// UI check box payload (also used by radio buttons)
#[derive(Debug, Clone)]
pub struct UICheckBox {
    /// Background image
    pub image: UIImage,
    /// Caption text element
    pub caption: UINodeId,
    /// Current value
    pub checked: bool,
    /// Whether a click may uncheck a checked box
    pub allow_uncheck: bool,
}

impl UICheckBox {
    /// Check box payload; clicking toggles both ways
    pub fn new_checkbox(caption: UINodeId) -> Self {
        Self {
            image: UIImage::default(),
            caption,
            checked: false,
            allow_uncheck: true,
        }
    }

    /// Radio button payload; clicking a checked radio does nothing
    pub fn new_radio(caption: UINodeId) -> Self {
        Self {
            allow_uncheck: false,
            ..Self::new_checkbox(caption)
        }
    }

    /// Value a toggle would set, or `None` if toggling is not allowed
    pub const fn toggled_value(&self) -> Option<bool> {
        if self.checked && !self.allow_uncheck {
            None
        } else {
            Some(!self.checked)
        }
    }
}
