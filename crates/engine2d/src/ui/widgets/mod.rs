//! UI widgets module
//!
//! The shared element record and the payload of every element variant.

pub mod core;
pub mod image;
pub mod rectangle;
pub mod text;
pub mod button;
pub mod checkbox;
pub mod slider;
pub mod scrollbar;
pub mod list;
pub mod window;

// Re-export core types
pub use core::{
    UICoords, UICoordsType, UIElement, UIElementFlags, UIElementState, UIElementType, UISides, UIStyle,
};

// Re-export widget types
pub use image::UIImage;
pub use rectangle::UIRectangle;
pub use text::UIText;
pub use button::{LabelStyle, UIButton};
pub use checkbox::UICheckBox;
pub use slider::UISlider;
pub use scrollbar::UIVerticalScrollbar;
pub use list::{UIList, UIListItem};
pub use window::UIWindow;
