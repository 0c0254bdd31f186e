//! UI tree nodes

use super::input::UICallbacks;
use super::widgets::{
    UIButton, UICheckBox, UIElement, UIElementType, UIImage, UIList, UIRectangle, UISlider, UIText,
    UIVerticalScrollbar, UIWindow,
};
use super::UINodeId;

/// Variant payload of an element
#[derive(Debug, Clone)]
pub enum UIElementKind {
    /// Plain container, draws nothing
    Container,
    /// Image
    Image(UIImage),
    /// Colored rectangle
    Rectangle(UIRectangle),
    /// Text
    Text(UIText),
    /// Button
    Button(UIButton),
    /// Check box
    CheckBox(UICheckBox),
    /// Radio button
    Radio(UICheckBox),
    /// Horizontal slider
    Slider(UISlider),
    /// Vertical scrollbar
    VerticalScrollbar(UIVerticalScrollbar),
    /// List of text items
    List(UIList),
    /// Window with a title
    Window(UIWindow),
}

impl UIElementKind {
    /// Type tag of this payload
    pub const fn element_type(&self) -> UIElementType {
        match self {
            Self::Container => UIElementType::Container,
            Self::Image(_) => UIElementType::Image,
            Self::Rectangle(_) => UIElementType::Rectangle,
            Self::Text(_) => UIElementType::Text,
            Self::Button(_) => UIElementType::Button,
            Self::CheckBox(_) => UIElementType::CheckBox,
            Self::Radio(_) => UIElementType::Radio,
            Self::Slider(_) => UIElementType::Slider,
            Self::VerticalScrollbar(_) => UIElementType::VerticalScrollbar,
            Self::List(_) => UIElementType::List,
            Self::Window(_) => UIElementType::Window,
        }
    }

    /// Image part of image-based payloads
    pub const fn image(&self) -> Option<&UIImage> {
        match self {
            Self::Image(image) => Some(image),
            Self::Button(button) => Some(&button.image),
            Self::CheckBox(checkbox) | Self::Radio(checkbox) => Some(&checkbox.image),
            Self::Slider(slider) => Some(&slider.image),
            Self::VerticalScrollbar(scrollbar) => Some(&scrollbar.image),
            Self::Window(window) => Some(&window.image),
            Self::Container | Self::Rectangle(_) | Self::Text(_) | Self::List(_) => None,
        }
    }

    /// Caption or title element of labelled payloads
    pub const fn label(&self) -> Option<UINodeId> {
        match self {
            Self::Button(button) => Some(button.caption),
            Self::CheckBox(checkbox) | Self::Radio(checkbox) => Some(checkbox.caption),
            Self::Window(window) => Some(window.title),
            _ => None,
        }
    }

    /// Whether `id` is a part this element created and holds on to
    pub fn has_part(&self, id: UINodeId) -> bool {
        match self {
            Self::Slider(slider) => slider.handle == Some(id) || slider.overlay == Some(id),
            Self::VerticalScrollbar(scrollbar) => scrollbar.handle == Some(id),
            Self::List(list) => list.background == id,
            kind => kind.label() == Some(id),
        }
    }
}

/// Element stored in the UI arena
pub struct UINode {
    /// Shared element record
    pub element: UIElement,
    /// Variant payload
    pub kind: UIElementKind,
    pub(crate) callbacks: UICallbacks,
}

impl UINode {
    /// Create a node around a payload
    pub fn new(kind: UIElementKind) -> Self {
        Self {
            element: UIElement::new(kind.element_type()),
            kind,
            callbacks: UICallbacks::default(),
        }
    }
}

impl std::fmt::Debug for UINode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UINode")
            .field("element", &self.element)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
