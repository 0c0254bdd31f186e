//! Latched values of check boxes, radio buttons, sliders, scrollbars and lists

use super::input::UICallbackKind;
use super::manager::{wrong_type, UIError};
use super::node::UIElementKind;
use super::widgets::{
    UICoords, UICoordsType, UIElementFlags, UIImage, UIList, UIListItem, UISlider, UIText, UIVerticalScrollbar,
};
use super::{UIManager, UINodeId};
use crate::foundation::math::PointI;

impl UIManager {
    // ---------------------------------------------------------------------
    // Check boxes and radio buttons
    // ---------------------------------------------------------------------

    /// Checked value of a check box or radio button
    pub fn checkbox_value(&self, id: UINodeId) -> Result<bool, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => Ok(checkbox.checked),
            other => Err(wrong_type("check box or radio button", other)),
        }
    }

    /// Set the checked value of a check box or radio button
    ///
    /// The value-change callback fires only if the value changes. Checking a
    /// radio button unchecks its sibling radio buttons.
    pub fn set_checkbox_value(&mut self, id: UINodeId, checked: bool) -> Result<(), UIError> {
        self.checkbox_value(id)?;
        self.apply_checked(id, checked);
        Ok(())
    }

    /// Toggle a check box or radio button
    ///
    /// Does nothing on a checked element that does not allow unchecking.
    pub fn toggle_checkbox(&mut self, id: UINodeId) -> Result<(), UIError> {
        let toggled = match &self.node(id)?.kind {
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => checkbox.toggled_value(),
            other => return Err(wrong_type("check box or radio button", other)),
        };
        if let Some(checked) = toggled {
            self.apply_checked(id, checked);
        }
        Ok(())
    }

    /// Allow or forbid unchecking by click
    pub fn set_allow_uncheck(&mut self, id: UINodeId, allow: bool) -> Result<(), UIError> {
        match &mut self.node_mut(id)?.kind {
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => {
                checkbox.allow_uncheck = allow;
                Ok(())
            }
            other => Err(wrong_type("check box or radio button", other)),
        }
    }

    pub(crate) fn apply_checked(&mut self, id: UINodeId, checked: bool) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let is_radio = matches!(node.kind, UIElementKind::Radio(_));
        let changed = match &mut node.kind {
            UIElementKind::CheckBox(checkbox) | UIElementKind::Radio(checkbox) => {
                let changed = checkbox.checked != checked;
                checkbox.checked = checked;
                changed
            }
            _ => return,
        };
        node.element.set_flag(UIElementFlags::FORCE_ACTIVE_STATE, checked);

        if changed {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
        if is_radio && checked {
            self.uncheck_sibling_radios(id);
        }
    }

    fn uncheck_sibling_radios(&mut self, id: UINodeId) {
        let Some(parent) = self.nodes.get(id).and_then(|node| node.element.parent) else {
            return;
        };
        let siblings = self
            .nodes
            .get(parent)
            .map(|node| node.element.children.clone())
            .unwrap_or_default();
        for sibling in siblings {
            let is_radio = self
                .nodes
                .get(sibling)
                .is_some_and(|node| matches!(node.kind, UIElementKind::Radio(_)));
            if sibling != id && is_radio {
                self.apply_checked(sibling, false);
                self.update_single(sibling);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Sliders
    // ---------------------------------------------------------------------

    fn slider(&self, id: UINodeId) -> Result<&UISlider, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::Slider(slider) => Ok(slider),
            other => Err(wrong_type("slider", other)),
        }
    }

    /// Slider value
    pub fn slider_value(&self, id: UINodeId) -> Result<i32, UIError> {
        Ok(self.slider(id)?.value())
    }

    /// Maximum slider value
    pub fn slider_max_value(&self, id: UINodeId) -> Result<i32, UIError> {
        Ok(self.slider(id)?.max_value())
    }

    /// Set the slider value, clamped to `[0, max_value]`
    ///
    /// The value-change callback fires only if the clamped value differs.
    pub fn set_slider_value(&mut self, id: UINodeId, value: i32) -> Result<(), UIError> {
        self.slider(id)?;
        self.apply_slider_value(id, value);
        Ok(())
    }

    pub(crate) fn apply_slider_value(&mut self, id: UINodeId, value: i32) {
        let changed = match self.nodes.get_mut(id).map(|node| &mut node.kind) {
            Some(UIElementKind::Slider(slider)) => {
                let value = slider.clamp(value);
                let changed = slider.value != value;
                slider.value = value;
                changed
            }
            _ => return,
        };
        if changed {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
        self.sync_slider(id);
    }

    /// Place the handle and size the overlay for the current value
    pub(crate) fn sync_slider(&mut self, id: UINodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let UIElementKind::Slider(slider) = &node.kind else {
            return;
        };
        let rect = node.element.dest_rect();
        let padding = node.element.padding();
        let handle = slider.handle;
        let handle_width = handle.map_or(0, |handle| self.dest_rect_of(handle).width);
        let handle_x = slider.handle_offset(rect, padding, handle_width);
        let overlay = slider.overlay;
        let (overlay_size, overlay_source) = slider.overlay_geometry(rect, padding);
        let has_value = slider.value() > 0;

        if let Some(node) = handle.and_then(|handle| self.nodes.get_mut(handle)) {
            let y = node.element.offset().y;
            node.element.set_offset(PointI::new(handle_x, y));
        }
        if let Some(node) = overlay.and_then(|overlay| self.nodes.get_mut(overlay)) {
            let element = &mut node.element;
            element.set_size_in_pixels(overlay_size.x, overlay_size.y);
            element.style.source_rect = overlay_source;
            element.style.source_rect_highlight = overlay_source;
            element.style.source_rect_pressed = overlay_source;
            element.set_visible(has_value);
        }
    }

    // ---------------------------------------------------------------------
    // Scrollbars
    // ---------------------------------------------------------------------

    /// Scrollbar value
    pub fn scrollbar_value(&self, id: UINodeId) -> Result<i32, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::VerticalScrollbar(scrollbar) => Ok(scrollbar.value()),
            other => Err(wrong_type("vertical scrollbar", other)),
        }
    }

    /// Handle and handle travel of a scrollbar with a handle
    pub(crate) fn scrollbar_track(&self, id: UINodeId) -> Option<(UINodeId, i32)> {
        let node = self.nodes.get(id)?;
        let UIElementKind::VerticalScrollbar(scrollbar) = &node.kind else {
            return None;
        };
        let handle = scrollbar.handle?;
        let handle_height = self.nodes.get(handle)?.element.dest_rect().height;
        let track = UIVerticalScrollbar::track_height(node.element.dest_rect(), node.element.padding(), handle_height);
        Some((handle, track))
    }

    /// Derive the scrollbar value from its handle position
    pub(crate) fn refresh_scrollbar_value(&mut self, id: UINodeId) {
        let Some((handle, track)) = self.scrollbar_track(id) else {
            return;
        };
        let offset_y = self.nodes.get(handle).map_or(0, |node| node.element.offset().y);
        let changed = match self.nodes.get_mut(id).map(|node| &mut node.kind) {
            Some(UIElementKind::VerticalScrollbar(scrollbar)) => {
                let value = scrollbar.value_from_offset(offset_y, track);
                let changed = scrollbar.value != value;
                scrollbar.value = value;
                changed
            }
            _ => return,
        };
        if changed {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
    }

    // ---------------------------------------------------------------------
    // Lists
    // ---------------------------------------------------------------------

    /// List payload
    pub fn list(&self, id: UINodeId) -> Result<&UIList, UIError> {
        match &self.node(id)?.kind {
            UIElementKind::List(list) => Ok(list),
            other => Err(wrong_type("list", other)),
        }
    }

    fn list_mut(&mut self, id: UINodeId) -> Result<&mut UIList, UIError> {
        match &mut self.node_mut(id)?.kind {
            UIElementKind::List(list) => Ok(list),
            other => Err(wrong_type("list", other)),
        }
    }

    /// Append an item, returning its index
    pub fn add_list_item(&mut self, id: UINodeId, text: &str) -> Result<usize, UIError> {
        let list = self.list(id)?;
        let window = list.background;
        let background_sheet = list.items_background_sheet.clone();
        let text_sheet = list.items_text_sheet.clone();
        self.node(window)?;

        let background = self.insert(UIElementKind::Image(UIImage::default()));
        let label = self.insert(UIElementKind::Text(UIText::new(text)));
        if let Some(node) = self.nodes.get_mut(label) {
            node.element.set_flag(UIElementFlags::INTERACTIVE, false);
        }

        let styled = background_sheet
            .map_or(Ok(()), |sheet| self.load_style(background, &sheet))
            .and_then(|()| text_sheet.map_or(Ok(()), |sheet| self.load_style(label, &sheet)));
        if let Err(err) = styled {
            self.destroy_subtree(background);
            self.destroy_subtree(label);
            return Err(err);
        }

        self.attach(window, background);
        self.attach(window, label);
        let list = self.list_mut(id)?;
        list.items.push(UIListItem { text: label, background });
        let index = list.items.len() - 1;
        self.layout_list(id);
        log::debug!("List {:?}: added item {} '{}'", id, index, text);
        Ok(index)
    }

    /// Remove the first item with the given text
    ///
    /// Returns false if no item matches.
    pub fn remove_list_item(&mut self, id: UINodeId, text: &str) -> Result<bool, UIError> {
        match self.list_item_index(id, text)? {
            Some(index) => {
                self.remove_list_item_at(id, index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the item at `index`
    pub fn remove_list_item_at(&mut self, id: UINodeId, index: usize) -> Result<(), UIError> {
        let list = self.list_mut(id)?;
        if index >= list.items.len() {
            return Err(UIError::InvalidState(format!(
                "list {id:?} has no item {index} ({} items)",
                list.items.len()
            )));
        }
        let selection = list.selection_after_removal(index);
        let item = list.items.remove(index);
        let cleared = list.selected.is_some() && selection.is_none();
        list.selected = selection;

        for element in [item.background, item.text] {
            self.detach(element);
            self.destroy_subtree(element);
        }
        self.layout_list(id);
        if cleared {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
        Ok(())
    }

    /// Remove every item
    pub fn clear_list(&mut self, id: UINodeId) -> Result<(), UIError> {
        let list = self.list_mut(id)?;
        let items = std::mem::take(&mut list.items);
        let had_selection = list.selected.take().is_some();

        for item in items {
            for element in [item.background, item.text] {
                self.detach(element);
                self.destroy_subtree(element);
            }
        }
        if had_selection {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
        Ok(())
    }

    /// Number of items
    pub fn list_len(&self, id: UINodeId) -> Result<usize, UIError> {
        Ok(self.list(id)?.len())
    }

    /// Texts of all items, top to bottom
    pub fn list_item_texts(&self, id: UINodeId) -> Result<Vec<&str>, UIError> {
        let list = self.list(id)?;
        Ok(list
            .items
            .iter()
            .filter_map(|item| match self.nodes.get(item.text).map(|node| &node.kind) {
                Some(UIElementKind::Text(text)) => Some(text.text.as_str()),
                _ => None,
            })
            .collect())
    }

    /// Index of the first item with the given text
    pub fn list_item_index(&self, id: UINodeId, text: &str) -> Result<Option<usize>, UIError> {
        Ok(self.list_item_texts(id)?.iter().position(|item| *item == text))
    }

    /// Check if an item with the given text exists
    pub fn list_contains(&self, id: UINodeId, text: &str) -> Result<bool, UIError> {
        Ok(self.list_item_index(id, text)?.is_some())
    }

    /// Index of the selected item
    pub fn list_selected_index(&self, id: UINodeId) -> Result<Option<usize>, UIError> {
        Ok(self.list(id)?.selected_index())
    }

    /// Text of the selected item
    pub fn list_selected_item(&self, id: UINodeId) -> Result<Option<&str>, UIError> {
        let Some(index) = self.list(id)?.selected_index() else {
            return Ok(None);
        };
        Ok(self.list_item_texts(id)?.get(index).copied())
    }

    /// Select the first item with the given text
    ///
    /// Returns false if no item matches.
    pub fn select_list_item(&mut self, id: UINodeId, text: &str) -> Result<bool, UIError> {
        match self.list_item_index(id, text)? {
            Some(index) => {
                self.apply_list_selection(id, Some(index));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Select the item at `index`
    pub fn select_list_index(&mut self, id: UINodeId, index: usize) -> Result<(), UIError> {
        let len = self.list(id)?.len();
        if index >= len {
            return Err(UIError::InvalidState(format!("list {id:?} has no item {index} ({len} items)")));
        }
        self.apply_list_selection(id, Some(index));
        Ok(())
    }

    /// Clear the selection
    pub fn clear_list_selection(&mut self, id: UINodeId) -> Result<(), UIError> {
        self.list(id)?;
        self.apply_list_selection(id, None);
        Ok(())
    }

    /// Lock or unlock a list; locked lists ignore clicks
    pub fn set_list_locked(&mut self, id: UINodeId, locked: bool) -> Result<(), UIError> {
        self.list_mut(id)?.locked = locked;
        Ok(())
    }

    pub(crate) fn apply_list_selection(&mut self, id: UINodeId, selection: Option<usize>) {
        let Ok(list) = self.list_mut(id) else {
            return;
        };
        let previous = list.selected;
        list.selected = selection;
        let items = list.items.clone();

        for (index, item) in items.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(item.background) {
                node.element
                    .set_flag(UIElementFlags::FORCE_ACTIVE_STATE, Some(index) == selection);
            }
        }
        if previous != selection {
            self.fire(id, UICallbackKind::ValueChange, None);
        }
    }

    /// Place every item at its line
    pub(crate) fn layout_list(&mut self, id: UINodeId) {
        let Ok(list) = self.list(id) else {
            return;
        };
        let line_height = list.line_height();
        let lines: Vec<(UIListItem, i32)> = list
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (*item, list.item_offset(index)))
            .collect();
        let selected = list.selected_index();
        let line_size = UICoords::new(100, UICoordsType::PercentOfParent, line_height, UICoordsType::Pixels);

        for (index, (item, y)) in lines.into_iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(item.background) {
                node.element.set_offset(PointI::new(0, y));
                node.element.set_size(line_size);
                node.element
                    .set_flag(UIElementFlags::FORCE_ACTIVE_STATE, selected == Some(index));
            }
            if let Some(node) = self.nodes.get_mut(item.text) {
                node.element.set_offset(PointI::new(0, y));
                node.element.set_size(line_size);
            }
        }
    }

    /// List and item index owning a list item element
    pub(crate) fn owning_list(&self, element: UINodeId) -> Option<(UINodeId, usize)> {
        let window = self.nodes.get(element)?.element.parent?;
        let list_id = self.nodes.get(window)?.element.parent?;
        match &self.nodes.get(list_id)?.kind {
            UIElementKind::List(list) if list.background == window => {
                list.index_of_element(element).map(|index| (list_id, index))
            }
            _ => None,
        }
    }
}
