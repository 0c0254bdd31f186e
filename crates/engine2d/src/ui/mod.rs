//! UI System Module
//!
//! Retained-mode UI element tree driven once per frame by the host.
//!
//! Architecture:
//! - UIManager: owns the element arena, builds elements from stylesheets and
//!   runs the update, input and draw passes
//! - widgets/: the shared element record and every variant payload
//! - input/: capture token, input events and interaction callbacks
//!
//! Elements are addressed by [`UINodeId`] handles; a handle of a removed
//! element simply fails lookup.

pub mod manager;
pub mod node;
pub mod widgets;
pub mod input;
mod tree;
mod style;
mod controls;

#[cfg(test)]
mod tests;

pub use manager::{UIError, UIManager};
pub use node::{UIElementKind, UINode};

// Re-export widgets
pub use widgets::{
    LabelStyle, UIButton, UICheckBox, UICoords, UICoordsType, UIElement, UIElementFlags, UIElementState,
    UIElementType, UIImage, UIList, UIListItem, UIRectangle, UISides, UISlider, UIStyle, UIText,
    UIVerticalScrollbar, UIWindow,
};

// Re-export input types
pub use input::{UICallback, UICallbackKind, UIInputEvent, UIPointer, UIUpdateInputState};

crate::foundation::collections::new_key_type! {
    /// Unique identifier for UI elements
    pub struct UINodeId;
}
