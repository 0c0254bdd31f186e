//! Draw order, visibility, the cursor and the font texture cache

use std::cell::RefCell;
use std::rc::Rc;

use super::Harness;
use crate::assets::AssetManager;
use crate::core::{TextCacheConfig, UISettings};
use crate::foundation::math::{PointI, RectI};
use crate::render::backend::Sprite;
use crate::render::commands::DrawCommand;
use crate::ui::{UICallbackKind, UIError, UIManager};

const PANEL_SHEET: &str = r#"
[style]
width = "300p"
height = "200p"
offset = "50,50"

[image]
image_path = "ui/panel.png"
"#;

const FRAME_SHEET: &str = r#"
[style]
width = "100p"
height = "20p"

[rectangle]
color = "255,0,0"
filled = false
"#;

const LABEL_SHEET: &str = r#"
[text]
font_path = "fonts/ui.ttf"
font_native_size = 16
font_size = 16
"#;

const CENTERED_SHEET: &str = r#"
[text]
font_path = "fonts/ui.ttf"
font_native_size = 16
font_size = 16
alignment = "center"
"#;

const SHEETS: [(&str, &str); 4] = [
    ("ui/panel.toml", PANEL_SHEET),
    ("ui/frame.toml", FRAME_SHEET),
    ("ui/label.toml", LABEL_SHEET),
    ("ui/centered.toml", CENTERED_SHEET),
];

/// Commands reduced to their variant names
fn kinds(commands: &[DrawCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .map(|command| match command {
            DrawCommand::Image { .. } => "image",
            DrawCommand::Rectangle { .. } => "rectangle",
            DrawCommand::Texture { .. } => "texture",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_draw_before_children() {
        let mut h = Harness::new(&SHEETS);
        let panel = h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        h.ui.create_rectangle(Some("ui/frame.toml"), Some(panel)).unwrap();
        h.ui.create_text(Some("ui/label.toml"), Some(panel), Some("Hi")).unwrap();

        h.frame(0, 0, false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();

        let commands = h.gfx.take_commands();
        assert_eq!(kinds(&commands), ["image", "rectangle", "texture"]);
        assert_eq!(commands[0].dest(), RectI::new(50, 50, 300, 200));
        assert_eq!(commands[1].dest(), RectI::new(50, 50, 100, 20));
        // two glyphs of the recorder's 8 pixel font
        assert_eq!(commands[2].dest(), RectI::new(50, 50, 16, 16));
        assert_eq!(h.gfx.rendered_texts(), ["Hi"]);
    }

    #[test]
    fn test_text_keeps_its_drawn_rect() {
        let mut h = Harness::new(&SHEETS);
        let panel = h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        let label = h.ui.create_text(Some("ui/label.toml"), Some(panel), Some("Hi")).unwrap();
        assert_eq!(h.ui.text_actual_rect(label).unwrap(), RectI::zero());

        h.frame(0, 0, false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(h.ui.text_actual_rect(label).unwrap(), RectI::new(50, 50, 16, 16));

        h.ui.set_text(label, "Hello").unwrap();
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(h.ui.text_actual_rect(label).unwrap(), RectI::new(50, 50, 40, 16));
    }

    #[test]
    fn test_measure_text_without_drawing() {
        let mut h = Harness::new(&SHEETS);
        let panel = h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        let title = h.ui.create_text(Some("ui/centered.toml"), Some(panel), Some("Score")).unwrap();
        h.frame(0, 0, false);

        // centered on the panel's middle at x = 200
        let rect = h.ui.measure_text(title, &mut h.gfx).unwrap();
        assert_eq!(rect, RectI::new(180, 50, 40, 16));
        assert_eq!(h.ui.text_actual_rect(title).unwrap(), rect);
        assert!(h.gfx.commands().is_empty());
        assert_eq!(h.ui.text_renderer().cache().len(), 1);

        assert!(matches!(
            h.ui.measure_text(panel, &mut h.gfx),
            Err(UIError::WrongElementType { .. })
        ));
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let mut h = Harness::new(&SHEETS);
        let panel = h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        h.ui.create_rectangle(Some("ui/frame.toml"), Some(panel)).unwrap();
        h.ui.element_mut(panel).unwrap().set_visible(false);

        h.frame(0, 0, false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert!(h.gfx.commands().is_empty());
    }

    #[test]
    fn test_draw_callback_fires_for_visible_elements() {
        let mut h = Harness::new(&SHEETS);
        let panel = h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        let frame = h.ui.create_rectangle(Some("ui/frame.toml"), Some(panel)).unwrap();
        let drawn = Rc::new(RefCell::new(Vec::new()));
        for id in [panel, frame] {
            let drawn = Rc::clone(&drawn);
            h.ui.set_callback(id, UICallbackKind::Draw, move |id, event| {
                assert!(event.is_none());
                drawn.borrow_mut().push(id);
            })
            .unwrap();
        }

        h.frame(0, 0, false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(*drawn.borrow(), [panel, frame]);

        h.ui.element_mut(frame).unwrap().set_visible(false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(*drawn.borrow(), [panel, frame, panel]);
    }

    #[test]
    fn test_cursor_sprite_draws_last() {
        let mut h = Harness::new(&SHEETS);
        h.ui.create_image(Some("ui/panel.toml"), Some(h.root)).unwrap();
        let image = h.ui.assets_mut().load_image("ui/cursor.png").unwrap();
        let cursor = h.ui.set_cursor_sprite(&Sprite::new(image, PointI::new(16, 16))).unwrap();
        assert_eq!(h.ui.cursor(), Some(cursor));

        // the cursor never takes part in input
        assert_eq!(h.frame(400, 300, false), None);
        h.ui.draw(h.root, true, &h.input, &mut h.gfx).unwrap();

        let commands = h.gfx.take_commands();
        assert_eq!(kinds(&commands), ["image", "image"]);
        assert_eq!(commands[1].dest(), RectI::new(400, 300, 16, 16));

        // replacing an owned cursor destroys it
        h.ui.set_cursor(None).unwrap();
        assert!(!h.ui.contains(cursor));
        h.ui.draw(h.root, true, &h.input, &mut h.gfx).unwrap();
        assert_eq!(h.gfx.commands().len(), 1);
    }

    #[test]
    fn test_cursor_must_be_a_parentless_image() {
        let mut h = Harness::new(&SHEETS);
        let rectangle = h.ui.create_rectangle(None, None).unwrap();
        assert!(matches!(
            h.ui.set_cursor(Some(rectangle)),
            Err(UIError::WrongElementType { .. })
        ));

        let child = h.ui.create_image(None, Some(h.root)).unwrap();
        assert!(matches!(h.ui.set_cursor(Some(child)), Err(UIError::InvalidState(_))));

        let cursor = h.ui.create_image(None, None).unwrap();
        h.ui.set_cursor(Some(cursor)).unwrap();
        assert!(matches!(h.ui.add_child(h.root, cursor), Err(UIError::InvalidState(_))));

        // a caller-owned cursor survives being replaced
        h.ui.set_cursor(None).unwrap();
        assert!(h.ui.contains(cursor));
    }

    #[test]
    fn test_end_frame_releases_stale_texts() {
        let settings = UISettings {
            text_cache: TextCacheConfig::new().with_check_interval(1).with_ttl(0, 2),
            ..UISettings::default()
        };
        let mut assets = AssetManager::new("assets");
        assets.insert_config_str("ui/label.toml", LABEL_SHEET).unwrap();
        let mut h = Harness::new(&[]);
        h.ui = UIManager::new(Box::new(assets), &settings);
        h.root = h.ui.create_root(None).unwrap();
        h.ui.create_text(Some("ui/label.toml"), Some(h.root), Some("Score")).unwrap();

        h.frame(0, 0, false);
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(h.ui.text_renderer().cache().len(), 1);

        h.ui.end_frame(&mut h.gfx);
        assert_eq!(h.ui.frame_count(), 1);
        assert!(h.ui.text_renderer().cache().is_empty());
        assert_eq!(h.gfx.destroyed_textures().len(), 1);
        assert_eq!(h.gfx.live_texture_count(), 0);

        // drawing again rasterizes the text again
        h.ui.draw(h.root, false, &h.input, &mut h.gfx).unwrap();
        assert_eq!(h.gfx.rendered_texts(), ["Score", "Score"]);
    }
}
