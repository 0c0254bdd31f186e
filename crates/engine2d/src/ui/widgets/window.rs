//! Window widget - an image with a title

use super::image::UIImage;
use crate::ui::UINodeId;

/// UI window payload
#[derive(Debug, Clone)]
pub struct UIWindow {
    /// Background image
    pub image: UIImage,
    /// Title text element
    pub title: UINodeId,
}

impl UIWindow {
    /// Create a window payload around an existing title element
    pub fn new(title: UINodeId) -> Self {
        Self {
            image: UIImage::default(),
            title,
        }
    }
}
