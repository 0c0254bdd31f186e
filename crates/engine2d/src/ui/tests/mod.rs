//! UI integration scenarios
//!
//! Each scenario drives a [`UIManager`] through the headless command recorder
//! and an [`InputState`] snapshot, one frame at a time.

mod composition;
mod values;
mod interaction;
mod drawing;

use crate::assets::AssetManager;
use crate::core::UISettings;
use crate::input::{InputState, MouseButton};
use crate::render::commands::CommandRecorder;
use crate::ui::{UIManager, UINodeId};

/// Manager, root and backends for one scenario
pub(crate) struct Harness {
    pub ui: UIManager,
    pub root: UINodeId,
    pub input: InputState,
    pub gfx: CommandRecorder,
}

impl Harness {
    /// 800x600 harness with in-memory stylesheets
    pub fn new(stylesheets: &[(&str, &str)]) -> Self {
        let mut assets = AssetManager::new("assets");
        for (path, text) in stylesheets {
            assets.insert_config_str(path, text).expect("test stylesheet parses");
        }
        let mut ui = UIManager::new(Box::new(assets), &UISettings::default());
        let root = ui.create_root(None).expect("root");
        Self {
            ui,
            root,
            input: InputState::new(),
            gfx: CommandRecorder::new(800, 600),
        }
    }

    /// Run one frame with the cursor at `(x, y)` and the primary button state
    pub fn frame(&mut self, x: i32, y: i32, left_down: bool) -> Option<UINodeId> {
        self.input.begin_frame();
        self.input.set_cursor_position(x, y);
        self.input.set_mouse_button(MouseButton::Left, left_down);
        self.ui.update_ui(self.root, 0.016, &self.input, &self.gfx)
    }

    /// Run one frame with wheel movement
    pub fn scroll_frame(&mut self, x: i32, y: i32, notches: i32) -> Option<UINodeId> {
        self.input.begin_frame();
        self.input.set_cursor_position(x, y);
        self.input.set_mouse_button(MouseButton::Left, false);
        self.input.add_scroll(0, notches);
        self.ui.update_ui(self.root, 0.016, &self.input, &self.gfx)
    }

    /// Press and release the primary button at `(x, y)`
    pub fn click(&mut self, x: i32, y: i32) {
        self.frame(x, y, true);
        self.frame(x, y, false);
    }
}
