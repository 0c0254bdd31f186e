//! Headless UI demo
//!
//! Builds an options window from in-memory stylesheets, scripts a few seconds
//! of mouse input against it and logs what the UI reports and draws.

use std::cell::Cell;
use std::rc::Rc;

use engine2d::prelude::*;

// Scripted cursor: (x, y, left button down)
const SCRIPT: [(i32, i32, bool); 14] = [
    (10, 10, false),
    (220, 170, false),
    (220, 170, true),
    (220, 170, false),
    (320, 210, true),
    (320, 210, false),
    (320, 260, true),
    (380, 260, true),
    (380, 260, false),
    (220, 315, true),
    (220, 315, false),
    (400, 440, false),
    (400, 440, true),
    (400, 440, false),
];

const STYLESHEETS: [(&str, &str); 9] = [
    (
        "ui/window.toml",
        r#"
        [style]
        width = "400p"
        height = "360p"
        anchor = "0.5,0.5"
        origin = "0.5,0.5"
        padding = "10,40,10,10"

        [image]
        image_path = "ui/window.png"

        [window]
        title_style = "ui/label.toml"
        title_offset = "0,8"
        title_anchor = "0.5,0"
        "#,
    ),
    (
        "ui/label.toml",
        r#"
        [text]
        font_path = "fonts/ui.ttf"
        font_native_size = 32
        font_size = 16
        alignment = "center"
        "#,
    ),
    (
        "ui/checkbox.toml",
        r#"
        [style]
        width = "24p"
        height = "24p"

        [image]
        image_path = "ui/checkbox.png"
        source_rect = "0,0,24,24"
        source_rect_pressed = "24,0,24,24"

        [checkbox]
        caption_style = "ui/label.toml"
        caption_offset = "40,4"
        "#,
    ),
    (
        "ui/radio.toml",
        r#"
        [style]
        width = "24p"
        height = "24p"

        [image]
        image_path = "ui/radio.png"
        source_rect = "0,0,24,24"
        source_rect_pressed = "24,0,24,24"

        [radio]
        caption_style = "ui/label.toml"
        caption_offset = "40,4"
        "#,
    ),
    (
        "ui/slider.toml",
        r#"
        [style]
        width = "220p"
        height = "20p"
        offset = "0,90"
        padding = "10,0,10,0"

        [image]
        image_path = "ui/slider.png"
        source_rect = "0,0,220,20"

        [slider]
        handle_style = "ui/handle.toml"
        active_slider_rect = "0,20,200,20"
        max_value = 20
        "#,
    ),
    (
        "ui/handle.toml",
        r#"
        [style]
        width = "20p"
        height = "20p"

        [image]
        image_path = "ui/handle.png"
        "#,
    ),
    (
        "ui/list.toml",
        r#"
        [style]
        width = "200p"
        height = "100p"
        offset = "0,130"

        [list]
        items_background_style = "ui/list_item.toml"
        items_text_style = "ui/label.toml"
        line_height = 20
        "#,
    ),
    (
        "ui/list_item.toml",
        r#"
        [image]
        image_path = "ui/list_item.png"
        source_rect = "0,0,200,20"
        source_rect_highlight = "0,20,200,20"
        "#,
    ),
    (
        "ui/button.toml",
        r#"
        [style]
        width = "160p"
        height = "40p"
        anchor = "0.5,1"
        origin = "0.5,1"
        offset = "0,-10"

        [image]
        image_path = "ui/button.png"
        source_rect = "0,0,160,40"
        source_rect_highlight = "0,40,160,40"
        source_rect_pressed = "0,80,160,40"

        [button]
        caption_style = "ui/label.toml"
        caption_offset = "0,10"
        "#,
    ),
];

fn build_assets() -> Result<AssetManager, AssetError> {
    let mut assets = AssetManager::new("assets");
    for (path, text) in STYLESHEETS {
        assets.insert_config_str(path, text)?;
    }
    Ok(assets)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = UISettings::default().with_log_level("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level)).init();

    let mut ui = UIManager::new(Box::new(build_assets()?), &settings);
    let root = ui.create_root(None)?;
    let window = ui.create_window(Some("ui/window.toml"), Some(root), Some("Options"))?;

    let fullscreen = ui.create_checkbox(Some("ui/checkbox.toml"), Some(window), Some("Fullscreen"))?;
    ui.set_on_value_change(fullscreen, |_, _| log::info!("Fullscreen toggled"))?;

    let difficulty = ui.create_container(None, Some(window))?;
    let mut radios = Vec::new();
    for (i, name) in ["Easy", "Normal", "Hard"].into_iter().enumerate() {
        let radio = ui.create_radio_button(Some("ui/radio.toml"), Some(difficulty), Some(name))?;
        ui.element_mut(radio)?.set_offset(PointI::new(i as i32 * 100, 40));
        ui.set_on_value_change(radio, move |_, _| log::info!("Difficulty '{}' changed", name))?;
        radios.push(radio);
    }
    ui.set_checkbox_value(radios[1], true)?;

    let volume = ui.create_slider(Some("ui/slider.toml"), Some(window))?;
    let list = ui.create_list(Some("ui/list.toml"), Some(window))?;
    for save in ["Autosave", "Sector 7", "Before the boss"] {
        ui.add_list_item(list, save)?;
    }

    let quit = ui.create_button(Some("ui/button.toml"), Some(window), Some("Quit"))?;
    let quit_requested = Rc::new(Cell::new(false));
    let flag = Rc::clone(&quit_requested);
    ui.set_callback(quit, UICallbackKind::MouseReleased, move |_, _| flag.set(true))?;

    let cursor_image = ui.assets_mut().load_image("ui/cursor.png")?;
    ui.set_cursor_sprite(&Sprite::new(cursor_image, PointI::new(16, 16)))?;

    let mut input = InputState::new();
    let mut gfx = CommandRecorder::new(800, 600);

    for (frame, (x, y, left_down)) in SCRIPT.into_iter().enumerate() {
        input.begin_frame();
        input.set_cursor_position(x, y);
        input.set_mouse_button(MouseButton::Left, left_down);

        let pointed = ui.update_ui(root, 1.0 / 60.0, &input, &gfx);
        ui.draw(root, true, &input, &mut gfx)?;
        ui.end_frame(&mut gfx);

        let commands = gfx.take_commands();
        log::info!(
            "Frame {}: cursor ({}, {}) {} pointed on {:?}, {} draw commands",
            frame,
            x,
            y,
            if left_down { "down" } else { "up" },
            pointed.and_then(|id| ui.element(id).ok()).map(|e| e.element_type()),
            commands.len()
        );
        for command in &commands {
            log::debug!("  {:?}", command);
        }

        if quit_requested.get() {
            log::info!("Quit requested on frame {}", frame);
            break;
        }
    }

    log::info!("Fullscreen: {}", ui.checkbox_value(fullscreen)?);
    for radio in &radios {
        let caption = ui.caption(*radio)?;
        log::info!("Difficulty {}: {}", ui.text(caption)?, ui.checkbox_value(*radio)?);
    }
    log::info!("Volume: {}/{}", ui.slider_value(volume)?, ui.slider_max_value(volume)?);
    log::info!("Selected save: {:?}", ui.list_selected_item(list)?);
    log::info!("{} elements, {} cached texts", ui.len(), ui.text_renderer().cache().len());
    Ok(())
}
