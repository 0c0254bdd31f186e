//! UI Input Processing
//!
//! The input pass walks the tree topmost first: children in reverse draw
//! order, then the element itself. The first element under the cursor is
//! recorded as pointed on, and a capturing element stops every element
//! processed after it from being hit in the same pass.

use super::UICallbackKind;
use crate::foundation::math::PointI;
use crate::input::{InputBackend, KeyCode};
use crate::ui::widgets::{UIElementFlags, UIElementState};
use crate::ui::{UIElementKind, UIManager, UINodeId};

/// Mouse button state passed to mouse callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UIInputEvent {
    /// Primary button is held
    pub left_down: bool,
    /// Secondary button is held
    pub right_down: bool,
}

impl UIInputEvent {
    /// Snapshot the mouse buttons of an input backend
    pub fn from_input(input: &dyn InputBackend) -> Self {
        Self {
            left_down: input.down(KeyCode::MouseLeft),
            right_down: input.down(KeyCode::MouseRight),
        }
    }
}

/// Cursor position and movement in render-target pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UIPointer {
    /// Cursor position
    pub position: PointI,
    /// Movement since the previous frame
    pub delta: PointI,
}

/// Token shared by every element during one input pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UIUpdateInputState {
    /// Set once a capturing element was hit; later elements are not hit-tested
    pub break_loop: bool,
    /// First element hit in this pass
    pub element_pointed_on: Option<UINodeId>,
}

impl UIManager {
    /// Run the input pass over a subtree
    pub fn do_input_updates(
        &mut self,
        id: UINodeId,
        pointer: UIPointer,
        input: &dyn InputBackend,
        token: &mut UIUpdateInputState,
    ) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if !node.element.is_visible() {
            self.reset_input_state(id);
            return;
        }

        let children = node.element.children.clone();
        for &child in children.iter().rev() {
            self.do_input_updates(child, pointer, input, token);
        }

        self.input_update_element(id, pointer, input, token);
        self.copy_state_to_children(id);
        self.input_update_kind(id, pointer, input, token);
    }

    /// Put a hidden subtree back to idle so nothing in it reads as pressed
    fn reset_input_state(&mut self, id: UINodeId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let element = &mut node.element;
        element.prev_state = UIElementState::Idle;
        element.state = UIElementState::Idle;
        element.dragging = false;
        let children = element.children.clone();
        for child in children {
            self.reset_input_state(child);
        }
    }

    fn input_update_element(
        &mut self,
        id: UINodeId,
        pointer: UIPointer,
        input: &dyn InputBackend,
        token: &mut UIUpdateInputState,
    ) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let element = &mut node.element;
        element.prev_state = element.state;

        let hit = element.has_flag(UIElementFlags::INTERACTIVE)
            && !token.break_loop
            && element.dest_rect().contains(pointer.position);
        element.state = if !hit {
            UIElementState::Idle
        } else if input.down(KeyCode::MouseLeft) {
            UIElementState::PressedDown
        } else if input.down(KeyCode::MouseRight) {
            UIElementState::AltPressedDown
        } else {
            UIElementState::PointedOn
        };

        if hit {
            if token.element_pointed_on.is_none() {
                token.element_pointed_on = Some(id);
            }
            if element.has_flag(UIElementFlags::CAPTURE_INPUT) {
                token.break_loop = true;
            }
        }

        let mut clamp_drag = false;
        if element.has_flag(UIElementFlags::DRAGGABLE) {
            if hit && input.pressed_now(KeyCode::MouseLeft) {
                element.dragging = true;
            } else if !input.down(KeyCode::MouseLeft) {
                element.dragging = false;
            } else if element.dragging && pointer.delta != PointI::zeros() {
                let offset = element.offset() + pointer.delta;
                element.set_offset(offset);
                clamp_drag = element.has_flag(UIElementFlags::LIMIT_DRAG_TO_PARENT);
            }
        }

        let (prev, state) = (element.prev_state, element.state);
        if clamp_drag {
            self.clamp_offset_to_parent(id);
        }

        let event = UIInputEvent::from_input(input);
        if prev == UIElementState::Idle && state != UIElementState::Idle {
            self.fire(id, UICallbackKind::MouseEnter, Some(&event));
        }
        if prev != UIElementState::Idle && state == UIElementState::Idle {
            self.fire(id, UICallbackKind::MouseLeave, None);
        }
        if state.is_pressed() && state != prev {
            self.fire(id, UICallbackKind::MousePressed, Some(&event));
        }
        if prev.is_pressed() && state == UIElementState::PointedOn {
            self.fire(id, UICallbackKind::MouseReleased, Some(&event));
        }
    }

    fn copy_state_to_children(&mut self, id: UINodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let state = node.element.state;
        let children = node.element.children.clone();
        for child in children {
            let Some(child_node) = self.nodes.get_mut(child) else {
                continue;
            };
            if child_node.element.has_flag(UIElementFlags::COPY_PARENT_STATE) {
                child_node.element.state = state;
                self.copy_state_to_children(child);
            }
        }
    }

    fn input_update_kind(
        &mut self,
        id: UINodeId,
        pointer: UIPointer,
        input: &dyn InputBackend,
        token: &UIUpdateInputState,
    ) {
        if let Some(node) = self.nodes.get_mut(id) {
            let pressed_now = node.element.state == UIElementState::PressedDown
                && node.element.prev_state != UIElementState::PressedDown;
            if let UIElementKind::VerticalScrollbar(scrollbar) = &mut node.kind {
                if pressed_now {
                    scrollbar.pending_snap = Some(pointer.position.y);
                }
            }
        }

        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let state = node.element.state;

        match &node.kind {
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => {
                if state != UIElementState::Idle && input.released_now(KeyCode::MouseLeft) {
                    if let Some(checked) = checkbox.toggled_value() {
                        self.apply_checked(id, checked);
                    }
                }
            }
            UIElementKind::Slider(slider) => {
                if state == UIElementState::PressedDown {
                    let handle_width = slider.handle.map_or(0, |handle| self.dest_rect_of(handle).width);
                    let value = slider.value_at(
                        pointer.position,
                        node.element.dest_rect(),
                        node.element.padding(),
                        handle_width,
                    );
                    self.apply_slider_value(id, value);
                }
            }
            UIElementKind::VerticalScrollbar(scrollbar) => {
                let scroll = input.scroll_delta().y;
                let Some((handle, track)) = self.scrollbar_track(id) else {
                    return;
                };
                let pointed = state != UIElementState::Idle
                    || self.nodes.get(handle).is_some_and(|n| n.element.state != UIElementState::Idle);
                if scroll != 0 && pointed {
                    let step = scrollbar.step(track);
                    self.scroll_handle(id, handle, -scroll * step);
                }
            }
            UIElementKind::List(list) => {
                if list.locked || !input.released_now(KeyCode::MouseLeft) {
                    return;
                }
                let Some(pointed) = token.element_pointed_on else {
                    return;
                };
                if let Some(index) = list.items.iter().position(|item| item.background == pointed) {
                    self.apply_list_selection(id, Some(index));
                }
            }
            _ => {}
        }
    }

    fn scroll_handle(&mut self, scrollbar: UINodeId, handle: UINodeId, dy: i32) {
        if let Some(node) = self.nodes.get_mut(handle) {
            let offset = node.element.offset();
            node.element.set_offset(PointI::new(offset.x, offset.y + dy));
        }
        self.clamp_offset_to_parent(handle);
        self.refresh_scrollbar_value(scrollbar);
    }
}
