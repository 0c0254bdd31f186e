//! Button widget - an image with a caption

use super::image::UIImage;
use crate::config::{ConfigAsset, ConfigError};
use crate::foundation::math::{PointF, PointI, to_point_i};
use crate::ui::UINodeId;

/// Style of an internal text child (a button caption or a window title)
///
/// Read from `<prefix>_style` (nested stylesheet path), `<prefix>_offset` and
/// `<prefix>_anchor`. The anchor is only applied when present.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Nested stylesheet for the text element
    pub stylesheet: Option<String>,
    /// Offset of the text element
    pub offset: PointI,
    /// Anchor of the text element, if set
    pub anchor: Option<PointF>,
}

impl LabelStyle {
    /// Read a label style from `section`
    pub fn read(config: &ConfigAsset, section: &str, prefix: &str) -> Result<Self, ConfigError> {
        let stylesheet = config
            .get_str_opt(section, &format!("{prefix}_style"))
            .map(str::to_string);
        let offset = config.get_point_f(section, &format!("{prefix}_offset"), PointF::zeros())?;
        let anchor = config.get_point_f_opt(section, &format!("{prefix}_anchor"))?;
        Ok(Self {
            stylesheet,
            offset: to_point_i(offset),
            anchor,
        })
    }
}

/// UI button payload
#[derive(Debug, Clone)]
pub struct UIButton {
    /// Background image
    pub image: UIImage,
    /// Caption text element
    pub caption: UINodeId,
}

impl UIButton {
    /// Create a button payload around an existing caption element
    pub fn new(caption: UINodeId) -> Self {
        Self {
            image: UIImage::default(),
            caption,
        }
    }
}
