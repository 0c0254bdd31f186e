//! Stylesheet loading
//!
//! The base `[style]` section is read first, then the variant's own section.
//! Variants with internal elements (captions, titles, handles, overlays, list
//! backgrounds) style them from nested stylesheets loaded through the asset
//! loader.

use super::manager::UIError;
use super::node::{UIElementKind, UINode};
use super::widgets::{LabelStyle, UIElementFlags, UIElementType, UIImage};
use super::{UIManager, UINodeId};
use crate::config::ConfigAsset;
use crate::foundation::math::RectF;

const SLIDER_SECTION: &str = "slider";
const SCROLLBAR_SECTION: &str = "scrollbar";
const LIST_SECTION: &str = "list";

impl UIManager {
    /// Load a stylesheet through the asset loader and apply it
    pub fn load_stylesheet(&mut self, id: UINodeId, path: &str) -> Result<(), UIError> {
        let config = self.assets.load_config(path)?;
        self.load_style(id, &config)
    }

    /// Apply a stylesheet to an element
    ///
    /// Keys that are not set keep their current values.
    pub fn load_style(&mut self, id: UINodeId, config: &ConfigAsset) -> Result<(), UIError> {
        let node = self.nodes.get_mut(id).ok_or(UIError::UnknownElement(id))?;
        let UINode { element, kind, .. } = node;
        element.load_style(config)?;

        let assets = self.assets.as_mut();
        match kind {
            UIElementKind::Container | UIElementKind::List(_) => {}
            UIElementKind::Rectangle(rectangle) => rectangle.load_style(element, config)?,
            UIElementKind::Text(text) => text.load_style(element, config, assets)?,
            UIElementKind::Image(image) => image.load_style(element, config, assets)?,
            UIElementKind::Button(button) => button.image.load_style(element, config, assets)?,
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => {
                checkbox.image.load_style(element, config, assets)?;
            }
            UIElementKind::Slider(slider) => slider.image.load_style(element, config, assets)?,
            UIElementKind::VerticalScrollbar(scrollbar) => scrollbar.image.load_style(element, config, assets)?,
            UIElementKind::Window(window) => window.image.load_style(element, config, assets)?,
        }

        let element_type = element.element_type();
        match element_type {
            UIElementType::Button => self.load_label_style(id, config, "button", "caption")?,
            UIElementType::CheckBox => self.load_label_style(id, config, "checkbox", "caption")?,
            UIElementType::Radio => self.load_label_style(id, config, "radio", "caption")?,
            UIElementType::Window => self.load_label_style(id, config, "window", "title")?,
            UIElementType::Slider => self.load_slider_style(id, config)?,
            UIElementType::VerticalScrollbar => self.load_scrollbar_style(id, config)?,
            UIElementType::List => self.load_list_style(id, config)?,
            _ => {}
        }

        log::debug!("Loaded style for {:?} element {:?}", element_type, id);
        Ok(())
    }

    fn load_label_style(&mut self, id: UINodeId, config: &ConfigAsset, section: &str, prefix: &str) -> Result<(), UIError> {
        let style = LabelStyle::read(config, section, prefix)?;
        let Some(label) = self.node(id)?.kind.label() else {
            return Ok(());
        };
        if let Some(path) = &style.stylesheet {
            self.load_stylesheet(label, path)?;
        }

        let element = &mut self.node_mut(label)?.element;
        element.set_offset(style.offset);
        if let Some(anchor) = style.anchor {
            element.set_anchor(anchor);
        }
        Ok(())
    }

    fn load_slider_style(&mut self, id: UINodeId, config: &ConfigAsset) -> Result<(), UIError> {
        let handle_sheet = config.get_str_opt(SLIDER_SECTION, "handle_style").map(str::to_string);

        let node = self.node_mut(id)?;
        let blend = node.element.style.blend;
        let UIElementKind::Slider(slider) = &mut node.kind else {
            return Ok(());
        };
        slider.max_value = config.get_int(SLIDER_SECTION, "max_value", slider.max_value)?;
        slider.value = slider.clamp(slider.value);
        let active = config.get_rectangle_f(SLIDER_SECTION, "active_slider_rect", RectF::from(slider.active_source_rect))?;
        slider.active_source_rect = active.to_rect_i();
        let active = slider.active_source_rect;
        let image = slider.image.image.clone();
        let old = [slider.overlay.take(), slider.handle.take()];

        for element in old.into_iter().flatten() {
            self.detach(element);
            self.destroy_subtree(element);
        }

        if let Some(image) = image.filter(|_| !active.is_empty()) {
            let overlay = self.insert(UIElementKind::Image(UIImage { image: Some(image) }));
            if let Some(node) = self.nodes.get_mut(overlay) {
                node.element.set_flag(UIElementFlags::INTERACTIVE, false);
                node.element.style.source_rect = active;
                node.element.style.blend = blend;
            }
            self.attach(id, overlay);
            self.set_slider_part(id, |slider| slider.overlay = Some(overlay));
        }

        if let Some(sheet) = handle_sheet {
            let handle = self.create_part(&sheet)?;
            if let Some(node) = self.nodes.get_mut(handle) {
                node.element.set_flag(UIElementFlags::INTERACTIVE, false);
            }
            self.attach(id, handle);
            self.set_slider_part(id, |slider| slider.handle = Some(handle));
        }

        self.sync_slider(id);
        Ok(())
    }

    fn set_slider_part(&mut self, id: UINodeId, set: impl FnOnce(&mut super::UISlider)) {
        if let Some(UIElementKind::Slider(slider)) = self.nodes.get_mut(id).map(|node| &mut node.kind) {
            set(slider);
        }
    }

    fn load_scrollbar_style(&mut self, id: UINodeId, config: &ConfigAsset) -> Result<(), UIError> {
        let handle_sheet = config.get_str_opt(SCROLLBAR_SECTION, "handle_style").map(str::to_string);

        let UIElementKind::VerticalScrollbar(scrollbar) = &mut self.node_mut(id)?.kind else {
            return Ok(());
        };
        scrollbar.max_value = config.get_int(SCROLLBAR_SECTION, "max_value", scrollbar.max_value)?;
        let Some(sheet) = handle_sheet else {
            return Ok(());
        };
        if let Some(old) = scrollbar.handle.take() {
            self.detach(old);
            self.destroy_subtree(old);
        }

        let handle = self.create_part(&sheet)?;
        if let Some(node) = self.nodes.get_mut(handle) {
            node.element.set_flag(UIElementFlags::DRAGGABLE, true);
            node.element.set_flag(UIElementFlags::LIMIT_DRAG_TO_PARENT, true);
        }
        self.attach(id, handle);
        if let Some(UIElementKind::VerticalScrollbar(scrollbar)) = self.nodes.get_mut(id).map(|node| &mut node.kind) {
            scrollbar.handle = Some(handle);
        }
        Ok(())
    }

    fn load_list_style(&mut self, id: UINodeId, config: &ConfigAsset) -> Result<(), UIError> {
        let background_sheet = config.get_str_opt(LIST_SECTION, "background_style");
        let items_background = config
            .get_str_opt(LIST_SECTION, "items_background_style")
            .map(|path| self.assets.load_config(path))
            .transpose()?;
        let items_text = config
            .get_str_opt(LIST_SECTION, "items_text_style")
            .map(|path| self.assets.load_config(path))
            .transpose()?;

        let list = self.list(id)?;
        let background = list.background;
        let line_height = config.get_int(LIST_SECTION, "line_height", list.line_height())?;

        if let Some(path) = background_sheet {
            self.load_stylesheet(background, path)?;
        }

        if let UIElementKind::List(list) = &mut self.node_mut(id)?.kind {
            list.line_height = line_height;
            if items_background.is_some() {
                list.items_background_sheet = items_background;
            }
            if items_text.is_some() {
                list.items_text_sheet = items_text;
            }
        }
        self.layout_list(id);
        Ok(())
    }

    /// Image element styled by a nested stylesheet, not yet attached
    fn create_part(&mut self, stylesheet: &str) -> Result<UINodeId, UIError> {
        let id = self.insert(UIElementKind::Image(UIImage::default()));
        if let Err(err) = self.load_stylesheet(id, stylesheet) {
            self.destroy_subtree(id);
            return Err(err);
        }
        Ok(id)
    }
}
