//! Input system
//!
//! The UI reads input through [`InputBackend`]: current key state, edges
//! (pressed/released this frame), named actions, cursor and wheel. [`InputState`]
//! is a plain snapshot implementation that a platform layer (or a test) fills
//! in every frame.

use std::collections::{HashMap, HashSet};

use crate::foundation::math::PointI;

/// Input source consumed by the UI
pub trait InputBackend {
    /// Check if a key is currently held
    fn down(&self, key: KeyCode) -> bool;

    /// Check if a key went down this frame
    fn pressed_now(&self, key: KeyCode) -> bool;

    /// Check if a key went up this frame
    fn released_now(&self, key: KeyCode) -> bool;

    /// Check if any key bound to a named action is held
    fn action_down(&self, action: &str) -> bool;

    /// Check if a named action went down this frame
    fn action_pressed_now(&self, action: &str) -> bool;

    /// Check if a named action went up this frame
    fn action_released_now(&self, action: &str) -> bool;

    /// Cursor position in window pixels
    fn cursor_position(&self) -> PointI;

    /// Cursor movement since the previous frame
    fn cursor_delta(&self) -> PointI;

    /// Wheel movement this frame, in notches (positive y scrolls up)
    fn scroll_delta(&self) -> PointI;
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Left mouse button
    MouseLeft,
    /// Right mouse button
    MouseRight,
    /// Middle mouse button
    MouseMiddle,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl From<MouseButton> for KeyCode {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::MouseLeft,
            MouseButton::Right => Self::MouseRight,
            MouseButton::Middle => Self::MouseMiddle,
        }
    }
}

/// Per-frame input snapshot
///
/// Call [`InputState::begin_frame`] once per frame before feeding the frame's
/// events; edges are computed against the state at that point.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    down: HashSet<KeyCode>,
    previous_down: HashSet<KeyCode>,
    cursor: PointI,
    previous_cursor: PointI,
    scroll: PointI,
    actions: HashMap<String, Vec<KeyCode>>,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: current state becomes the edge baseline
    pub fn begin_frame(&mut self) {
        self.previous_down.clone_from(&self.down);
        self.previous_cursor = self.cursor;
        self.scroll = PointI::zeros();
    }

    /// Set a key's state
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.down.insert(key);
        } else {
            self.down.remove(&key);
        }
    }

    /// Set a mouse button's state
    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.set_key(button.into(), pressed);
    }

    /// Move the cursor (window pixels)
    pub fn set_cursor_position(&mut self, x: i32, y: i32) {
        self.cursor = PointI::new(x, y);
    }

    /// Accumulate wheel movement for this frame
    pub fn add_scroll(&mut self, x: i32, y: i32) {
        self.scroll += PointI::new(x, y);
    }

    /// Bind a key to a named action
    pub fn bind_action(&mut self, action: impl Into<String>, key: KeyCode) {
        let keys = self.actions.entry(action.into()).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    fn action_keys(&self, action: &str) -> &[KeyCode] {
        self.actions.get(action).map_or(&[], Vec::as_slice)
    }
}

impl InputBackend for InputState {
    fn down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    fn pressed_now(&self, key: KeyCode) -> bool {
        self.down.contains(&key) && !self.previous_down.contains(&key)
    }

    fn released_now(&self, key: KeyCode) -> bool {
        !self.down.contains(&key) && self.previous_down.contains(&key)
    }

    fn action_down(&self, action: &str) -> bool {
        self.action_keys(action).iter().any(|key| self.down(*key))
    }

    fn action_pressed_now(&self, action: &str) -> bool {
        self.action_keys(action).iter().any(|key| self.pressed_now(*key))
    }

    fn action_released_now(&self, action: &str) -> bool {
        self.action_keys(action).iter().any(|key| self.released_now(*key))
    }

    fn cursor_position(&self) -> PointI {
        self.cursor
    }

    fn cursor_delta(&self) -> PointI {
        self.cursor - self.previous_cursor
    }

    fn scroll_delta(&self) -> PointI {
        self.scroll
    }
}
