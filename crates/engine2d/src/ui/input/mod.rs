//! UI input handling module
//!
//! Interaction callbacks are single-slot listeners stored per element. They
//! receive the element handle and, for mouse callbacks, the button state at the
//! time of the change.

pub mod processor;

// Re-export commonly used types
pub use processor::{UIInputEvent, UIPointer, UIUpdateInputState};

use super::UINodeId;

/// Interaction callback
pub type UICallback = Box<dyn FnMut(UINodeId, Option<&UIInputEvent>)>;

/// Callback slot of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UICallbackKind {
    /// Cursor entered the element
    MouseEnter,
    /// Cursor left the element
    MouseLeave,
    /// A mouse button went down on the element
    MousePressed,
    /// A mouse button was released on the element
    MouseReleased,
    /// Element is about to be drawn
    Draw,
    /// Latched value changed (check boxes, sliders, scrollbars, lists)
    ValueChange,
}

impl UICallbackKind {
    const fn slot(self) -> usize {
        self as usize
    }
}

/// Callback slots of one element
#[derive(Default)]
pub(crate) struct UICallbacks {
    slots: [Option<UICallback>; 6],
}

impl UICallbacks {
    pub(crate) fn set(&mut self, kind: UICallbackKind, callback: Option<UICallback>) {
        self.slots[kind.slot()] = callback;
    }

    pub(crate) fn is_set(&self, kind: UICallbackKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Take a callback out of its slot for the duration of a call
    pub(crate) fn take(&mut self, kind: UICallbackKind) -> Option<UICallback> {
        self.slots[kind.slot()].take()
    }

    /// Put a taken callback back unless the slot was filled meanwhile
    pub(crate) fn restore(&mut self, kind: UICallbackKind, callback: UICallback) {
        let slot = &mut self.slots[kind.slot()];
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_take_and_restore() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut callbacks = UICallbacks::default();
        callbacks.set(UICallbackKind::ValueChange, Some(Box::new(move |_, _| counter.set(counter.get() + 1))));
        assert!(callbacks.is_set(UICallbackKind::ValueChange));
        assert!(!callbacks.is_set(UICallbackKind::Draw));

        let mut callback = callbacks.take(UICallbackKind::ValueChange).unwrap();
        assert!(!callbacks.is_set(UICallbackKind::ValueChange));
        callback(UINodeId::default(), None);
        callbacks.restore(UICallbackKind::ValueChange, callback);

        assert!(callbacks.is_set(UICallbackKind::ValueChange));
        assert_eq!(calls.get(), 1);
    }
}
