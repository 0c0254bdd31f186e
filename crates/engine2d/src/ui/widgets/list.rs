//! List widget - a vertical list of selectable text items
//!
//! Items live under an internal background window: each item is a background
//! image stretched over the line plus a text element on top of it.

use crate::config::ConfigHandle;
use crate::ui::UINodeId;

/// Default distance between list lines, in pixels
pub const DEFAULT_LINE_HEIGHT: i32 = 30;

/// One list line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UIListItem {
    /// Text element
    pub text: UINodeId,
    /// Background image element
    pub background: UINodeId,
}

/// UI list payload
#[derive(Debug, Clone)]
pub struct UIList {
    /// Background window all items are placed in
    pub background: UINodeId,
    pub(crate) items: Vec<UIListItem>,
    pub(crate) items_background_sheet: Option<ConfigHandle>,
    pub(crate) items_text_sheet: Option<ConfigHandle>,
    pub(crate) line_height: i32,
    pub(crate) selected: Option<usize>,
    /// Locked lists ignore clicks
    pub locked: bool,
}

impl UIList {
    /// Create a list payload around an existing background window
    pub const fn new(background: UINodeId) -> Self {
        Self {
            background,
            items: Vec::new(),
            items_background_sheet: None,
            items_text_sheet: None,
            line_height: DEFAULT_LINE_HEIGHT,
            selected: None,
            locked: false,
        }
    }

    /// Items, top to bottom
    pub fn items(&self) -> &[UIListItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distance between lines, in pixels
    pub const fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Index of the selected item
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the item owning `element` (its text or its background)
    pub fn index_of_element(&self, element: UINodeId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.text == element || item.background == element)
    }

    /// Selection after removing the item at `removed`
    pub const fn selection_after_removal(&self, removed: usize) -> Option<usize> {
        match self.selected {
            Some(selected) if selected == removed => None,
            Some(selected) if selected > removed => Some(selected - 1),
            other => other,
        }
    }

    /// Vertical offset of the item at `index`
    pub const fn item_offset(&self, index: usize) -> i32 {
        index as i32 * self.line_height
    }
}
