//! Check boxes, radio buttons, sliders and scrollbars

use std::cell::RefCell;
use std::rc::Rc;

use super::Harness;
use crate::foundation::math::{PointI, RectI};
use crate::ui::{UIElementFlags, UIElementState, UIError, UIManager, UINodeId};

const SLIDER_SHEET: &str = r#"
[style]
width = "220p"
height = "20p"
offset = "100,0"
padding = "10,0,10,0"

[image]
image_path = "ui/slider.png"
source_rect = "0,0,220,20"

[slider]
handle_style = "ui/handle.toml"
active_slider_rect = "0,20,200,20"
"#;

const HANDLE_SHEET: &str = r#"
[style]
width = "20p"
height = "20p"

[image]
image_path = "ui/handle.png"
"#;

const SCROLLBAR_SHEET: &str = r#"
[style]
width = "20p"
height = "200p"
offset = "0,100"

[image]
image_path = "ui/track.png"

[scrollbar]
handle_style = "ui/scroll_handle.toml"
"#;

const SCROLL_HANDLE_SHEET: &str = r#"
[style]
width = "100%"
height = "20p"
"#;

/// Record every value change of `id` under `name`
fn record(ui: &mut UIManager, id: UINodeId, name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) {
    let log = Rc::clone(log);
    ui.set_on_value_change(id, move |_, _| log.borrow_mut().push(name)).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_fires_once_per_change() {
        let mut h = Harness::new(&[]);
        let checkbox = h.ui.create_checkbox(None, Some(h.root), Some("Sound")).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        record(&mut h.ui, checkbox, "sound", &log);

        h.ui.set_checkbox_value(checkbox, true).unwrap();
        h.ui.set_checkbox_value(checkbox, true).unwrap();
        assert_eq!(log.borrow().len(), 1);
        assert!(h.ui.checkbox_value(checkbox).unwrap());
        assert!(h.ui.element(checkbox).unwrap().has_flag(UIElementFlags::FORCE_ACTIVE_STATE));

        h.ui.set_checkbox_value(checkbox, false).unwrap();
        assert_eq!(log.borrow().len(), 2);
        assert!(!h.ui.element(checkbox).unwrap().has_flag(UIElementFlags::FORCE_ACTIVE_STATE));
    }

    #[test]
    fn test_checkbox_toggles_on_click() {
        let mut h = Harness::new(&[]);
        let checkbox = h.ui.create_checkbox(None, Some(h.root), None).unwrap();
        h.ui.element_mut(checkbox).unwrap().set_size_in_pixels(20, 20);
        let log = Rc::new(RefCell::new(Vec::new()));
        record(&mut h.ui, checkbox, "box", &log);

        h.click(10, 10);
        assert!(h.ui.checkbox_value(checkbox).unwrap());
        h.click(10, 10);
        assert!(!h.ui.checkbox_value(checkbox).unwrap());

        // release outside the box
        h.click(100, 100);
        assert!(!h.ui.checkbox_value(checkbox).unwrap());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_radio_buttons_keep_one_checked() {
        let mut h = Harness::new(&[]);
        let group = h.ui.create_container(None, Some(h.root)).unwrap();
        let a = h.ui.create_radio_button(None, Some(group), Some("A")).unwrap();
        let b = h.ui.create_radio_button(None, Some(group), Some("B")).unwrap();
        let c = h.ui.create_radio_button(None, Some(group), Some("C")).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (id, name) in [(a, "a"), (b, "b"), (c, "c")] {
            record(&mut h.ui, id, name, &log);
        }

        h.ui.set_checkbox_value(a, true).unwrap();
        assert_eq!(*log.borrow(), ["a"]);

        h.ui.set_checkbox_value(b, true).unwrap();
        // a's uncheck fires inside b's call
        assert_eq!(*log.borrow(), ["a", "b", "a"]);

        let values: Vec<bool> = [a, b, c].iter().map(|id| h.ui.checkbox_value(*id).unwrap()).collect();
        assert_eq!(values, [false, true, false]);
        assert!(!h.ui.element(a).unwrap().has_flag(UIElementFlags::FORCE_ACTIVE_STATE));
        assert!(h.ui.element(b).unwrap().has_flag(UIElementFlags::FORCE_ACTIVE_STATE));
    }

    #[test]
    fn test_checked_radio_ignores_toggle() {
        let mut h = Harness::new(&[]);
        let radio = h.ui.create_radio_button(None, Some(h.root), None).unwrap();
        h.ui.set_checkbox_value(radio, true).unwrap();
        h.ui.toggle_checkbox(radio).unwrap();
        assert!(h.ui.checkbox_value(radio).unwrap());

        h.ui.set_allow_uncheck(radio, true).unwrap();
        h.ui.toggle_checkbox(radio).unwrap();
        assert!(!h.ui.checkbox_value(radio).unwrap());
    }

    #[test]
    fn test_slider_clamps_and_skips_unchanged() {
        let mut h = Harness::new(&[]);
        let slider = h.ui.create_slider(None, Some(h.root)).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        record(&mut h.ui, slider, "slider", &log);

        h.ui.set_slider_value(slider, -5).unwrap();
        assert_eq!(h.ui.slider_value(slider).unwrap(), 0);
        assert!(log.borrow().is_empty());

        h.ui.set_slider_value(slider, 99).unwrap();
        assert_eq!(h.ui.slider_value(slider).unwrap(), 10);
        h.ui.set_slider_value(slider, 10).unwrap();
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_slider_follows_press() {
        let mut h = Harness::new(&[("ui/slider.toml", SLIDER_SHEET), ("ui/handle.toml", HANDLE_SHEET)]);
        let slider = h.ui.create_slider(Some("ui/slider.toml"), Some(h.root)).unwrap();
        let children = h.ui.children(slider).unwrap().to_vec();
        let (overlay, handle) = (children[0], children[1]);
        assert!(!h.ui.element(handle).unwrap().has_flag(UIElementFlags::INTERACTIVE));

        // track is 220 - 20 padding - 20 handle = 180 wide, starting at x = 120
        h.frame(210, 10, true);
        assert_eq!(h.ui.slider_value(slider).unwrap(), 5);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(90, 0));

        let overlay_element = h.ui.element(overlay).unwrap();
        assert!(overlay_element.is_visible());
        assert_eq!(overlay_element.style.source_rect, RectI::new(0, 20, 100, 20));
        h.frame(210, 10, true);
        assert_eq!(h.ui.element(overlay).unwrap().dest_rect(), RectI::new(110, 0, 100, 20));

        // presses on the padding clamp to the ends
        h.frame(105, 10, true);
        assert_eq!(h.ui.slider_value(slider).unwrap(), 0);
        h.frame(315, 10, true);
        assert_eq!(h.ui.slider_value(slider).unwrap(), 10);

        // outside the slider nothing changes
        h.frame(600, 10, true);
        assert_eq!(h.ui.slider_value(slider).unwrap(), 10);

        h.ui.set_slider_value(slider, 0).unwrap();
        assert!(!h.ui.element(overlay).unwrap().is_visible());
    }

    #[test]
    fn test_restyling_slider_replaces_parts() {
        let mut h = Harness::new(&[("ui/slider.toml", SLIDER_SHEET), ("ui/handle.toml", HANDLE_SHEET)]);
        let slider = h.ui.create_slider(Some("ui/slider.toml"), Some(h.root)).unwrap();
        let before = h.ui.len();
        h.ui.load_stylesheet(slider, "ui/slider.toml").unwrap();
        assert_eq!(h.ui.len(), before);
        assert_eq!(h.ui.children(slider).unwrap().len(), 2);
    }

    #[test]
    fn test_scrollbar_snaps_to_click_and_scrolls() {
        let mut h = Harness::new(&[
            ("ui/scrollbar.toml", SCROLLBAR_SHEET),
            ("ui/scroll_handle.toml", SCROLL_HANDLE_SHEET),
        ]);
        let scrollbar = h.ui.create_vertical_scrollbar(Some("ui/scrollbar.toml"), Some(h.root)).unwrap();
        let handle = h.ui.children(scrollbar).unwrap()[0];
        let handle_element = h.ui.element(handle).unwrap();
        assert!(handle_element.has_flag(UIElementFlags::DRAGGABLE));
        assert!(handle_element.has_flag(UIElementFlags::LIMIT_DRAG_TO_PARENT));

        // press on the track below the handle; the snap happens on the next update
        h.frame(10, 200, true);
        h.frame(10, 200, true);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(0, 90));
        assert_eq!(h.ui.scrollbar_value(scrollbar).unwrap(), 5);

        // one wheel notch up moves one step (ceil(180 / 10) pixels)
        h.scroll_frame(10, 150, 1);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(0, 72));
        assert_eq!(h.ui.scrollbar_value(scrollbar).unwrap(), 4);

        // scrolling far down stays inside the track
        h.scroll_frame(10, 150, -50);
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(0, 180));
        assert_eq!(h.ui.scrollbar_value(scrollbar).unwrap(), 10);
    }

    #[test]
    fn test_hidden_scrollbar_stops_snapping() {
        let mut h = Harness::new(&[
            ("ui/scrollbar.toml", SCROLLBAR_SHEET),
            ("ui/scroll_handle.toml", SCROLL_HANDLE_SHEET),
        ]);
        let panel = h.ui.create_container(None, Some(h.root)).unwrap();
        let scrollbar = h.ui.create_vertical_scrollbar(Some("ui/scrollbar.toml"), Some(panel)).unwrap();
        let handle = h.ui.children(scrollbar).unwrap()[0];
        let log = Rc::new(RefCell::new(Vec::new()));
        record(&mut h.ui, scrollbar, "scroll", &log);

        // one press on the track, then the panel goes away while the press is fresh
        h.frame(10, 200, true);
        h.ui.element_mut(panel).unwrap().set_visible(false);

        for y in [230, 250, 270, 290] {
            h.frame(10, y, false);
        }

        // the pending press lands where it was made, once
        assert_eq!(h.ui.element(handle).unwrap().offset(), PointI::new(0, 90));
        assert_eq!(h.ui.scrollbar_value(scrollbar).unwrap(), 5);
        assert_eq!(log.borrow().len(), 1);

        let element = h.ui.element(scrollbar).unwrap();
        assert_eq!(element.state(), UIElementState::Idle);
        assert_eq!(element.prev_state(), UIElementState::Idle);
        assert_eq!(h.ui.element(handle).unwrap().state(), UIElementState::Idle);
    }

    #[test]
    fn test_slider_and_scrollbar_parts_stay() {
        let mut h = Harness::new(&[
            ("ui/slider.toml", SLIDER_SHEET),
            ("ui/handle.toml", HANDLE_SHEET),
            ("ui/scrollbar.toml", SCROLLBAR_SHEET),
            ("ui/scroll_handle.toml", SCROLL_HANDLE_SHEET),
        ]);
        let slider = h.ui.create_slider(Some("ui/slider.toml"), Some(h.root)).unwrap();
        let scrollbar = h.ui.create_vertical_scrollbar(Some("ui/scrollbar.toml"), Some(h.root)).unwrap();

        for owner in [slider, scrollbar] {
            for part in h.ui.children(owner).unwrap().to_vec() {
                assert!(matches!(h.ui.remove(part), Err(UIError::InvalidState(_))));
            }
        }
        assert_eq!(h.ui.children(slider).unwrap().len(), 2);
        assert_eq!(h.ui.children(scrollbar).unwrap().len(), 1);
    }
}
