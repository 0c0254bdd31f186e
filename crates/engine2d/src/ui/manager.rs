//! UI Manager
//!
//! Central UI system that owns the element arena, builds elements from
//! stylesheets and drives the update, input and draw passes.

use thiserror::Error;

use super::input::{UICallback, UICallbackKind, UIInputEvent, UIPointer, UIUpdateInputState};
use super::node::{UIElementKind, UINode};
use super::widgets::{
    UIButton, UICheckBox, UIElement, UIElementFlags, UIElementType, UIImage, UIList, UIRectangle, UISlider,
    UIText, UIVerticalScrollbar, UIWindow,
};
use super::UINodeId;
use crate::assets::{AssetError, AssetLoader, AssetManager};
use crate::config::ConfigError;
use crate::core::UISettings;
use crate::foundation::collections::SlotMap;
use crate::foundation::math::{PointI, RectI};
use crate::input::InputBackend;
use crate::render::backend::{GraphicsBackend, RenderError, Sprite};
use crate::render::text::TextRenderer;

/// UI system errors
#[derive(Error, Debug)]
pub enum UIError {
    /// Malformed or invalid stylesheet value
    #[error("Stylesheet error: {0}")]
    Config(#[from] ConfigError),

    /// Stylesheet, image or font could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Graphics backend failure while drawing
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Operation not allowed in the current tree state
    #[error("Invalid UI state: {0}")]
    InvalidState(String),

    /// Handle of a removed (or never created) element
    #[error("Unknown UI element: {0:?}")]
    UnknownElement(UINodeId),

    /// Typed operation on an element of another type
    #[error("Wrong element type: expected {expected}, found {found:?}")]
    WrongElementType {
        /// Accepted element type(s)
        expected: &'static str,
        /// Actual element type
        found: UIElementType,
    },
}

/// Central UI management system
pub struct UIManager {
    /// UI elements by handle
    pub(crate) nodes: SlotMap<UINodeId, UINode>,

    /// Source of images, fonts and stylesheets
    pub(crate) assets: Box<dyn AssetLoader>,

    /// Text drawing and font texture cache
    pub(crate) text_renderer: TextRenderer,

    /// Image element drawn at the mouse position
    pub(crate) cursor: Option<UINodeId>,

    /// Cursor element created from a sprite, owned by the manager
    cursor_owned: bool,

    /// Render-target size seen by the last frame
    pub(crate) renderable_size: PointI,

    /// Cursor in render-target space, as of the last update
    pub(crate) pointer: UIPointer,

    /// Frame counter
    frame_counter: u64,
}

impl UIManager {
    /// Create a UI manager loading assets through `assets`
    pub fn new(assets: Box<dyn AssetLoader>, settings: &UISettings) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            assets,
            text_renderer: TextRenderer::new(settings.text_cache),
            cursor: None,
            cursor_owned: false,
            renderable_size: PointI::zeros(),
            pointer: UIPointer::default(),
            frame_counter: 0,
        }
    }

    /// Create a UI manager with an [`AssetManager`] rooted at the settings'
    /// assets directory, and the settings' cursor if one is configured
    pub fn from_settings(settings: &UISettings) -> Result<Self, UIError> {
        let mut manager = Self::new(Box::new(AssetManager::from_settings(settings)), settings);
        if let Some(stylesheet) = settings.cursor_stylesheet.as_deref() {
            let cursor = manager.create_image(Some(stylesheet), None)?;
            manager.set_cursor(Some(cursor))?;
        }
        log::info!("UI manager created (assets: {})", settings.assets_dir);
        Ok(manager)
    }

    /// Asset loader used for stylesheets
    pub fn assets_mut(&mut self) -> &mut dyn AssetLoader {
        self.assets.as_mut()
    }

    /// Text renderer and its font texture cache
    pub const fn text_renderer(&self) -> &TextRenderer {
        &self.text_renderer
    }

    /// Number of live elements, internal ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no element exists
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a handle refers to a live element
    pub fn contains(&self, id: UINodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Frames ended so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    // ---------------------------------------------------------------------
    // Factory
    // ---------------------------------------------------------------------

    /// Create a root container
    ///
    /// Roots are not interactive, so the input pass reports nothing over empty
    /// space.
    pub fn create_root(&mut self, stylesheet: Option<&str>) -> Result<UINodeId, UIError> {
        let id = self.create_container(stylesheet, None)?;
        if let Some(node) = self.nodes.get_mut(id) {
            node.element.set_flag(UIElementFlags::INTERACTIVE, false);
        }
        Ok(id)
    }

    /// Create a container
    pub fn create_container(&mut self, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Container);
        self.finish(id, stylesheet, parent)
    }

    /// Create an image
    pub fn create_image(&mut self, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Image(UIImage::default()));
        self.finish(id, stylesheet, parent)
    }

    /// Create a rectangle
    pub fn create_rectangle(&mut self, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Rectangle(UIRectangle::default()));
        self.finish(id, stylesheet, parent)
    }

    /// Create a text
    pub fn create_text(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
        text: Option<&str>,
    ) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Text(UIText::new(text.unwrap_or_default())));
        self.finish(id, stylesheet, parent)
    }

    /// Create a window with a title
    pub fn create_window(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
        title: Option<&str>,
    ) -> Result<UINodeId, UIError> {
        let title = self.create_label(title);
        let id = self.insert(UIElementKind::Window(UIWindow::new(title)));
        self.attach(id, title);
        self.finish(id, stylesheet, parent)
    }

    /// Create a button with a caption
    pub fn create_button(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
        caption: Option<&str>,
    ) -> Result<UINodeId, UIError> {
        let caption = self.create_label(caption);
        let id = self.insert(UIElementKind::Button(UIButton::new(caption)));
        self.attach(id, caption);
        self.finish(id, stylesheet, parent)
    }

    /// Create a check box with a caption
    pub fn create_checkbox(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
        caption: Option<&str>,
    ) -> Result<UINodeId, UIError> {
        let caption = self.create_label(caption);
        let id = self.insert(UIElementKind::CheckBox(UICheckBox::new_checkbox(caption)));
        self.attach(id, caption);
        self.finish(id, stylesheet, parent)
    }

    /// Create a radio button with a caption
    pub fn create_radio_button(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
        caption: Option<&str>,
    ) -> Result<UINodeId, UIError> {
        let caption = self.create_label(caption);
        let id = self.insert(UIElementKind::Radio(UICheckBox::new_radio(caption)));
        self.attach(id, caption);
        self.finish(id, stylesheet, parent)
    }

    /// Create a horizontal slider
    pub fn create_slider(&mut self, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Slider(UISlider::default()));
        self.finish(id, stylesheet, parent)
    }

    /// Create a vertical scrollbar
    pub fn create_vertical_scrollbar(
        &mut self,
        stylesheet: Option<&str>,
        parent: Option<UINodeId>,
    ) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::VerticalScrollbar(UIVerticalScrollbar::default()));
        self.finish(id, stylesheet, parent)
    }

    /// Create a list
    pub fn create_list(&mut self, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        let background = self.create_window(None, None, None)?;
        let id = self.insert(UIElementKind::List(UIList::new(background)));
        self.attach(id, background);
        self.finish(id, stylesheet, parent)
    }

    pub(crate) fn insert(&mut self, kind: UIElementKind) -> UINodeId {
        let element_type = kind.element_type();
        let id = self.nodes.insert(UINode::new(kind));
        log::debug!("Created {:?} element {:?}", element_type, id);
        id
    }

    /// Non-interactive text child that follows its owner's state
    fn create_label(&mut self, text: Option<&str>) -> UINodeId {
        let id = self.insert(UIElementKind::Text(UIText::new(text.unwrap_or_default())));
        if let Some(node) = self.nodes.get_mut(id) {
            node.element.set_flag(UIElementFlags::INTERACTIVE, false);
            node.element.set_flag(UIElementFlags::COPY_PARENT_STATE, true);
        }
        id
    }

    /// Style a freshly created element and attach it; the element is destroyed
    /// again if either step fails
    fn finish(&mut self, id: UINodeId, stylesheet: Option<&str>, parent: Option<UINodeId>) -> Result<UINodeId, UIError> {
        if let Some(path) = stylesheet {
            if let Err(err) = self.load_stylesheet(id, path) {
                self.destroy_subtree(id);
                return Err(err);
            }
        }
        if let Some(parent) = parent {
            if let Err(err) = self.add_child(parent, id) {
                self.destroy_subtree(id);
                return Err(err);
            }
        }
        Ok(id)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub(crate) fn node(&self, id: UINodeId) -> Result<&UINode, UIError> {
        self.nodes.get(id).ok_or(UIError::UnknownElement(id))
    }

    pub(crate) fn node_mut(&mut self, id: UINodeId) -> Result<&mut UINode, UIError> {
        self.nodes.get_mut(id).ok_or(UIError::UnknownElement(id))
    }

    /// Shared element record
    pub fn element(&self, id: UINodeId) -> Result<&UIElement, UIError> {
        Ok(&self.node(id)?.element)
    }

    /// Shared element record, mutable
    pub fn element_mut(&mut self, id: UINodeId) -> Result<&mut UIElement, UIError> {
        Ok(&mut self.node_mut(id)?.element)
    }

    /// Variant payload
    pub fn kind(&self, id: UINodeId) -> Result<&UIElementKind, UIError> {
        Ok(&self.node(id)?.kind)
    }

    /// Text content of a text element
    pub fn text(&self, id: UINodeId) -> Result<&str, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::Text(text) => Ok(&text.text),
            other => Err(wrong_type("text", other)),
        }
    }

    /// Replace the content of a text element
    pub fn set_text(&mut self, id: UINodeId, text: impl Into<String>) -> Result<(), UIError> {
        match &mut self.node_mut(id)?.kind {
            UIElementKind::Text(payload) => {
                payload.text = text.into();
                Ok(())
            }
            other => Err(wrong_type("text", other)),
        }
    }

    /// Rectangle a text element covered when it was last drawn or measured
    pub fn text_actual_rect(&self, id: UINodeId) -> Result<RectI, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::Text(text) => Ok(text.actual_rect()),
            other => Err(wrong_type("text", other)),
        }
    }

    /// Measure the rectangle a text element covers at its current position
    ///
    /// The text is rasterized into the cache if needed but not drawn.
    pub fn measure_text(&mut self, id: UINodeId, gfx: &mut dyn GraphicsBackend) -> Result<RectI, UIError> {
        let node = self.nodes.get_mut(id).ok_or(UIError::UnknownElement(id))?;
        match &mut node.kind {
            UIElementKind::Text(text) => Ok(text.measure(&node.element, &mut self.text_renderer, gfx)?),
            other => Err(wrong_type("text", other)),
        }
    }

    /// Caption element of a button, check box or radio button
    pub fn caption(&self, id: UINodeId) -> Result<UINodeId, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::Button(UIButton { caption, .. })
            | UIElementKind::CheckBox(UICheckBox { caption, .. })
            | UIElementKind::Radio(UICheckBox { caption, .. }) => Ok(*caption),
            other => Err(wrong_type("button, check box or radio button", other)),
        }
    }

    /// Title element of a window
    pub fn title(&self, id: UINodeId) -> Result<UINodeId, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::Window(window) => Ok(window.title),
            other => Err(wrong_type("window", other)),
        }
    }

    // ---------------------------------------------------------------------
    // Callbacks
    // ---------------------------------------------------------------------

    /// Set the callback of one slot, replacing the previous one
    pub fn set_callback(
        &mut self,
        id: UINodeId,
        kind: UICallbackKind,
        callback: impl FnMut(UINodeId, Option<&UIInputEvent>) + 'static,
    ) -> Result<(), UIError> {
        let callback: UICallback = Box::new(callback);
        self.node_mut(id)?.callbacks.set(kind, Some(callback));
        Ok(())
    }

    /// Set the value-change callback
    pub fn set_on_value_change(
        &mut self,
        id: UINodeId,
        callback: impl FnMut(UINodeId, Option<&UIInputEvent>) + 'static,
    ) -> Result<(), UIError> {
        self.set_callback(id, UICallbackKind::ValueChange, callback)
    }

    /// Remove the callback of one slot
    pub fn clear_callback(&mut self, id: UINodeId, kind: UICallbackKind) -> Result<(), UIError> {
        self.node_mut(id)?.callbacks.set(kind, None);
        Ok(())
    }

    /// Invoke a callback if it is set
    pub(crate) fn fire(&mut self, id: UINodeId, kind: UICallbackKind, event: Option<&UIInputEvent>) {
        let Some(mut callback) = self.nodes.get_mut(id).and_then(|node| node.callbacks.take(kind)) else {
            return;
        };
        callback(id, event);
        if let Some(node) = self.nodes.get_mut(id) {
            node.callbacks.restore(kind, callback);
        }
    }

    // ---------------------------------------------------------------------
    // Frame
    // ---------------------------------------------------------------------

    /// Update the tree under `root` and run the input pass
    ///
    /// Returns the topmost interactive element under the cursor.
    pub fn update_ui(
        &mut self,
        root: UINodeId,
        delta_time: f32,
        input: &dyn InputBackend,
        gfx: &dyn GraphicsBackend,
    ) -> Option<UINodeId> {
        self.renderable_size = gfx.renderable_size();
        self.pointer = UIPointer {
            position: Self::relative_cursor_pos(input, gfx),
            delta: Self::to_render_space(input.cursor_delta(), gfx),
        };

        self.update(root, delta_time);

        let mut token = UIUpdateInputState::default();
        self.do_input_updates(root, self.pointer, input, &mut token);
        token.element_pointed_on
    }

    /// Tick the font texture cache; call once per frame after drawing
    pub fn end_frame(&mut self, gfx: &mut dyn GraphicsBackend) {
        let evicted = self.text_renderer.update(gfx);
        self.frame_counter += 1;
        if evicted > 0 {
            log::trace!("Frame {}: {} cached texts evicted", self.frame_counter, evicted);
        }
    }

    /// Cursor position converted from window space to render-target space
    pub fn relative_cursor_pos(input: &dyn InputBackend, gfx: &dyn GraphicsBackend) -> PointI {
        Self::to_render_space(input.cursor_position(), gfx)
    }

    fn to_render_space(point: PointI, gfx: &dyn GraphicsBackend) -> PointI {
        let window = gfx.window_size();
        let renderable = gfx.renderable_size();
        if window.x <= 0 || window.y <= 0 {
            return point;
        }
        PointI::new(point.x * renderable.x / window.x, point.y * renderable.y / window.y)
    }

    /// Region elements without a parent are laid out in
    pub(crate) fn screen_region(&self) -> RectI {
        RectI::new(0, 0, self.renderable_size.x, self.renderable_size.y)
    }

    // ---------------------------------------------------------------------
    // Cursor
    // ---------------------------------------------------------------------

    /// Current cursor element
    pub const fn cursor(&self) -> Option<UINodeId> {
        self.cursor
    }

    /// Use an image element without a parent as the cursor
    ///
    /// The element stops taking part in input. `None` removes the cursor.
    pub fn set_cursor(&mut self, cursor: Option<UINodeId>) -> Result<(), UIError> {
        if let Some(id) = cursor {
            let node = self.node_mut(id)?;
            if !matches!(node.kind, UIElementKind::Image(_)) {
                return Err(wrong_type("image", &node.kind));
            }
            if node.element.parent.is_some() {
                return Err(UIError::InvalidState(format!("cursor {id:?} must not have a parent")));
            }
            for flag in [
                UIElementFlags::INTERACTIVE,
                UIElementFlags::CAPTURE_INPUT,
                UIElementFlags::DRAGGABLE,
                UIElementFlags::LIMIT_DRAG_TO_PARENT,
            ] {
                node.element.set_flag(flag, false);
            }
        }

        if let Some(previous) = self.cursor.take() {
            if self.cursor_owned && Some(previous) != cursor {
                self.destroy_subtree(previous);
            }
        }
        self.cursor = cursor;
        self.cursor_owned = false;
        Ok(())
    }

    /// Use a sprite as the cursor
    ///
    /// The sprite position is the offset from the mouse position.
    pub fn set_cursor_sprite(&mut self, sprite: &Sprite) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Image(UIImage {
            image: Some(sprite.image.clone()),
        }));
        if let Some(node) = self.nodes.get_mut(id) {
            let element = &mut node.element;
            element.set_offset(sprite.position);
            element.set_origin(sprite.origin);
            element.set_size_in_pixels(sprite.size.x, sprite.size.y);
            element.style.set_all_colors(sprite.color);
            element.style.source_rect = sprite.source_rect;
            element.style.source_rect_highlight = sprite.source_rect;
            element.style.source_rect_pressed = sprite.source_rect;
            element.style.blend = sprite.blend;
        }
        self.set_cursor(Some(id))?;
        self.cursor_owned = true;
        Ok(id)
    }
}

pub(crate) fn wrong_type(expected: &'static str, found: &UIElementKind) -> UIError {
    UIError::WrongElementType {
        expected,
        found: found.element_type(),
    }
}
