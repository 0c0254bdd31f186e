//! Element construction, stylesheets and tree editing

use super::Harness;
use crate::foundation::math::{PointF, PointI, RectI};
use crate::render::text::TextAlignment;
use crate::ui::{UIElementFlags, UIElementKind, UIElementState, UIElementType, UIError};

const BUTTON_SHEET: &str = r#"
[style]
width = "200p"
height = "50p"
anchor = "0.5,0.5"
origin = "0.5,0.5"

[image]
image_path = "ui/button.png"
source_rect = [0, 0, 200, 50]
source_rect_pressed = [0, 50, 200, 50]

[button]
caption_style = "ui/caption.toml"
caption_offset = [0, 5]
"#;

const CAPTION_SHEET: &str = r#"
[style]
offset = "12,12"

[text]
font_path = "fonts/ui.ttf"
font_native_size = 32
font_size = 18
alignment = "center"
color = [255, 255, 0]
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_caption_from_nested_stylesheet() {
        let mut h = Harness::new(&[("ui/button.toml", BUTTON_SHEET), ("ui/caption.toml", CAPTION_SHEET)]);
        let button = h.ui.create_button(Some("ui/button.toml"), Some(h.root), Some("Play")).unwrap();
        let caption = h.ui.caption(button).unwrap();

        // caption_offset wins over the nested stylesheet's own offset
        let element = h.ui.element(caption).unwrap();
        assert_eq!(element.offset(), PointI::new(0, 5));
        assert!(!element.has_flag(UIElementFlags::INTERACTIVE));
        assert!(element.has_flag(UIElementFlags::COPY_PARENT_STATE));

        let UIElementKind::Text(text) = h.ui.kind(caption).unwrap() else {
            panic!("caption is not a text element");
        };
        assert_eq!(text.text, "Play");
        assert_eq!(text.font.as_ref().map(|f| f.path.as_str()), Some("fonts/ui.ttf"));
        assert_eq!(text.font_native_size, 32);
        assert_eq!(text.font_size, 18);
        assert_eq!(text.alignment, TextAlignment::Center);
        assert_eq!(h.ui.children(button).unwrap(), &[caption]);
    }

    #[test]
    fn test_button_layout_and_caption_follows_state() {
        let mut h = Harness::new(&[("ui/button.toml", BUTTON_SHEET), ("ui/caption.toml", CAPTION_SHEET)]);
        let button = h.ui.create_button(Some("ui/button.toml"), Some(h.root), Some("Play")).unwrap();
        let caption = h.ui.caption(button).unwrap();

        let pointed = h.frame(400, 300, false);
        assert_eq!(pointed, Some(button));
        assert_eq!(h.ui.element(button).unwrap().dest_rect(), RectI::new(300, 275, 200, 50));
        assert_eq!(h.ui.element(caption).unwrap().dest_rect(), RectI::new(300, 280, 200, 50));
        assert_eq!(h.ui.element(caption).unwrap().state(), UIElementState::PointedOn);

        h.frame(400, 300, true);
        assert_eq!(h.ui.element(button).unwrap().state(), UIElementState::PressedDown);
        assert_eq!(h.ui.element(caption).unwrap().state(), UIElementState::PressedDown);
        assert_eq!(
            h.ui.element(button).unwrap().current_state_source_rect(),
            RectI::new(0, 50, 200, 50)
        );

        assert_eq!(h.frame(10, 10, false), None);
        assert_eq!(h.ui.element(caption).unwrap().state(), UIElementState::Idle);
    }

    #[test]
    fn test_window_title_anchor() {
        let mut h = Harness::new(&[(
            "ui/window.toml",
            r#"
            [style]
            width = "50%"
            height = "50%"
            padding = [10, 30, 10, 10]

            [window]
            title_offset = "0,4"
            title_anchor = "0.5,0"
            "#,
        )]);
        let window = h.ui.create_window(Some("ui/window.toml"), Some(h.root), Some("Options")).unwrap();
        let title = h.ui.title(window).unwrap();
        assert_eq!(h.ui.text(title).unwrap(), "Options");
        assert_eq!(h.ui.element(title).unwrap().anchor(), PointF::new(0.5, 0.0));

        h.frame(0, 0, false);
        // 400x300 window, title laid out inside the padded region
        let region = h.ui.element(window).unwrap().child_region(false);
        assert_eq!(region, RectI::new(10, 30, 380, 260));
        assert_eq!(h.ui.element(title).unwrap().dest_rect().position(), PointI::new(200, 34));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let mut h = Harness::new(&[("ui/plain.toml", "[image]\nimage_path = \"ui/plain.png\"\n")]);
        let image = h.ui.create_image(Some("ui/plain.toml"), Some(h.root)).unwrap();
        let element = h.ui.element(image).unwrap();
        assert!(element.has_flag(UIElementFlags::INTERACTIVE));
        assert!(element.has_flag(UIElementFlags::CAPTURE_INPUT));
        assert!(element.is_visible());
        assert_eq!(element.offset(), PointI::zeros());
    }

    #[test]
    fn test_malformed_stylesheet_fails_without_leaking() {
        let mut h = Harness::new(&[("ui/bad.toml", "[style]\nanchor = \"middle\"\n")]);
        let before = h.ui.len();
        let err = h.ui.create_button(Some("ui/bad.toml"), Some(h.root), None).unwrap_err();
        assert!(matches!(err, UIError::Config(_)));
        assert_eq!(h.ui.len(), before);
        assert!(h.ui.children(h.root).unwrap().is_empty());
    }

    #[test]
    fn test_missing_stylesheet_is_asset_error() {
        let mut h = Harness::new(&[]);
        let err = h.ui.create_image(Some("ui/nope.toml"), Some(h.root)).unwrap_err();
        assert!(matches!(err, UIError::Asset(_)));
    }

    #[test]
    fn test_add_child_rejects_second_parent_and_cycles() {
        let mut h = Harness::new(&[]);
        let a = h.ui.create_container(None, Some(h.root)).unwrap();
        let b = h.ui.create_container(None, Some(a)).unwrap();

        assert!(matches!(h.ui.add_child(h.root, b), Err(UIError::InvalidState(_))));

        let root = h.root;
        h.ui.remove_child(root, a).unwrap();
        assert_eq!(h.ui.parent(a).unwrap(), None);
        assert!(matches!(h.ui.add_child(b, a), Err(UIError::InvalidState(_))));
        assert!(matches!(h.ui.add_child(a, a), Err(UIError::InvalidState(_))));
        assert!(matches!(h.ui.remove_child(root, a), Err(UIError::InvalidState(_))));

        h.ui.add_child(root, a).unwrap();
        assert_eq!(h.ui.parent(a).unwrap(), Some(root));
    }

    #[test]
    fn test_remove_destroys_subtree() {
        let mut h = Harness::new(&[]);
        let window = h.ui.create_window(None, Some(h.root), Some("Title")).unwrap();
        let title = h.ui.title(window).unwrap();
        let inner = h.ui.create_image(None, Some(window)).unwrap();

        h.ui.remove(window).unwrap();
        assert!(!h.ui.contains(window));
        assert!(!h.ui.contains(title));
        assert!(matches!(h.ui.element(inner), Err(UIError::UnknownElement(id)) if id == inner));
        assert!(h.ui.children(h.root).unwrap().is_empty());
    }

    #[test]
    fn test_parts_are_removed_with_their_owner() {
        let mut h = Harness::new(&[]);
        let button = h.ui.create_button(None, Some(h.root), Some("Play")).unwrap();
        let caption = h.ui.caption(button).unwrap();
        let window = h.ui.create_window(None, Some(h.root), Some("Title")).unwrap();
        let title = h.ui.title(window).unwrap();

        assert!(matches!(h.ui.remove(caption), Err(UIError::InvalidState(_))));
        assert!(matches!(h.ui.remove_child(window, title), Err(UIError::InvalidState(_))));
        assert_eq!(h.ui.parent(caption).unwrap(), Some(button));
        assert_eq!(h.ui.text(caption).unwrap(), "Play");

        // plain children of a composite element are still free to go
        let inner = h.ui.create_image(None, Some(window)).unwrap();
        h.ui.remove(inner).unwrap();
        assert_eq!(h.ui.children(window).unwrap(), &[title]);
    }

    #[test]
    fn test_move_to_front() {
        let mut h = Harness::new(&[]);
        let a = h.ui.create_image(None, Some(h.root)).unwrap();
        let b = h.ui.create_image(None, Some(h.root)).unwrap();
        h.ui.move_to_front(a).unwrap();
        assert_eq!(h.ui.children(h.root).unwrap(), &[b, a]);
    }

    #[test]
    fn test_typed_accessors_check_the_type() {
        let mut h = Harness::new(&[]);
        let image = h.ui.create_image(None, Some(h.root)).unwrap();
        match h.ui.slider_value(image) {
            Err(UIError::WrongElementType { found, .. }) => assert_eq!(found, UIElementType::Image),
            other => panic!("unexpected {other:?}"),
        }
        assert!(h.ui.set_text(image, "x").is_err());
        assert!(h.ui.caption(image).is_err());
    }
}
