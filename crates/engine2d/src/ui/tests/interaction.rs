//! Hit testing, capture, dragging and mouse callbacks

use std::cell::RefCell;
use std::rc::Rc;

use super::Harness;
use crate::foundation::math::PointI;
use crate::render::commands::CommandRecorder;
use crate::ui::{UICallbackKind, UIElementFlags, UIElementState, UIManager, UINodeId};

/// Image of `size` pixels at `offset`, attached to `parent`
fn square(ui: &mut UIManager, parent: UINodeId, offset: (i32, i32), size: i32) -> UINodeId {
    let id = ui.create_image(None, Some(parent)).unwrap();
    let element = ui.element_mut(id).unwrap();
    element.set_size_in_pixels(size, size);
    element.set_offset(PointI::new(offset.0, offset.1));
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_stops_lower_siblings() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let a = square(&mut h.ui, root, (0, 0), 100);
        let b = square(&mut h.ui, root, (50, 50), 100);

        // b is drawn last, so it is tested first
        assert_eq!(h.frame(75, 75, false), Some(b));
        assert_eq!(h.ui.element(b).unwrap().state(), UIElementState::PointedOn);
        assert_eq!(h.ui.element(a).unwrap().state(), UIElementState::Idle);

        h.ui.element_mut(b).unwrap().set_flag(UIElementFlags::CAPTURE_INPUT, false);
        assert_eq!(h.frame(75, 75, false), Some(b));
        assert_eq!(h.ui.element(a).unwrap().state(), UIElementState::PointedOn);
    }

    #[test]
    fn test_non_interactive_elements_are_transparent() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let a = square(&mut h.ui, root, (0, 0), 100);
        let b = square(&mut h.ui, root, (0, 0), 100);
        h.ui.element_mut(b).unwrap().set_flag(UIElementFlags::INTERACTIVE, false);

        assert_eq!(h.frame(10, 10, false), Some(a));
        assert_eq!(h.ui.element(b).unwrap().state(), UIElementState::Idle);
        assert_eq!(h.frame(500, 500, false), None);
    }

    #[test]
    fn test_buttons_select_state() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let image = square(&mut h.ui, root, (0, 0), 100);

        h.frame(10, 10, true);
        assert_eq!(h.ui.element(image).unwrap().state(), UIElementState::PressedDown);

        h.input.begin_frame();
        h.input.set_mouse_button(crate::input::MouseButton::Left, false);
        h.input.set_mouse_button(crate::input::MouseButton::Right, true);
        h.ui.update_ui(h.root, 0.016, &h.input, &h.gfx);
        assert_eq!(h.ui.element(image).unwrap().state(), UIElementState::AltPressedDown);
        assert_eq!(h.ui.element(image).unwrap().prev_state(), UIElementState::PressedDown);
    }

    #[test]
    fn test_drag_is_limited_to_parent() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let panel = h.ui.create_container(None, Some(root)).unwrap();
        let element = h.ui.element_mut(panel).unwrap();
        element.set_size_in_pixels(200, 200);
        element.set_offset(PointI::new(100, 100));

        let handle = square(&mut h.ui, panel, (0, 0), 50);
        let element = h.ui.element_mut(handle).unwrap();
        element.set_flag(UIElementFlags::DRAGGABLE, true);
        element.set_flag(UIElementFlags::LIMIT_DRAG_TO_PARENT, true);

        h.frame(110, 110, true);
        h.frame(400, 110, true);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(150, 0));

        // released: moving with the button held elsewhere does nothing
        h.frame(400, 110, false);
        h.frame(300, 300, true);
        h.frame(350, 350, true);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(150, 0));
    }

    #[test]
    fn test_drag_without_limit_follows_cursor() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let image = square(&mut h.ui, root, (0, 0), 50);
        h.ui.element_mut(image).unwrap().set_flag(UIElementFlags::DRAGGABLE, true);

        h.frame(10, 10, true);
        h.frame(30, 25, true);
        h.frame(60, 45, true);
        assert_eq!(h.ui.element(image).unwrap().offset(), PointI::new(50, 35));
    }

    #[test]
    fn test_mouse_callbacks() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let image = square(&mut h.ui, root, (0, 0), 100);

        let log: Rc<RefCell<Vec<(UICallbackKind, Option<bool>)>>> = Rc::new(RefCell::new(Vec::new()));
        for kind in [
            UICallbackKind::MouseEnter,
            UICallbackKind::MouseLeave,
            UICallbackKind::MousePressed,
            UICallbackKind::MouseReleased,
        ] {
            let log = Rc::clone(&log);
            h.ui.set_callback(image, kind, move |_, event| {
                log.borrow_mut().push((kind, event.map(|e| e.left_down)));
            })
            .unwrap();
        }

        h.frame(50, 50, false);
        h.frame(50, 50, true);
        h.frame(50, 50, true);
        h.frame(50, 50, false);
        h.frame(200, 200, false);

        assert_eq!(
            *log.borrow(),
            [
                (UICallbackKind::MouseEnter, Some(false)),
                (UICallbackKind::MousePressed, Some(true)),
                (UICallbackKind::MouseReleased, Some(false)),
                (UICallbackKind::MouseLeave, None),
            ]
        );

        h.ui.clear_callback(image, UICallbackKind::MouseEnter).unwrap();
        h.frame(50, 50, false);
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_hidden_element_goes_idle_silently() {
        let mut h = Harness::new(&[]);
        let root = h.root;
        let image = square(&mut h.ui, root, (0, 0), 100);
        let left = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&left);
        h.ui.set_callback(image, UICallbackKind::MouseLeave, move |_, _| *counter.borrow_mut() += 1)
            .unwrap();

        h.frame(50, 50, false);
        h.ui.element_mut(image).unwrap().set_visible(false);
        assert_eq!(h.frame(50, 50, false), None);
        assert_eq!(h.ui.element(image).unwrap().state(), UIElementState::Idle);
        assert_eq!(*left.borrow(), 0);
    }

    #[test]
    fn test_cursor_is_scaled_to_render_target() {
        let mut h = Harness::new(&[]);
        h.gfx = CommandRecorder::with_window_size(PointI::new(800, 600), PointI::new(1600, 1200));
        let root = h.root;
        let image = square(&mut h.ui, root, (350, 250), 100);
        h.ui.element_mut(image).unwrap().set_flag(UIElementFlags::DRAGGABLE, true);

        h.input.set_cursor_position(800, 600);
        assert_eq!(UIManager::relative_cursor_pos(&h.input, &h.gfx), PointI::new(400, 300));
        assert_eq!(h.frame(800, 600, true), Some(image));

        // 200 window pixels are 100 render pixels
        h.frame(1000, 600, true);
        assert_eq!(h.ui.element(image).unwrap().offset(), PointI::new(450, 250));
    }
}
