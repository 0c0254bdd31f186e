//! Tree editing and the recursive update and draw passes

use super::input::UICallbackKind;
use super::manager::UIError;
use super::node::UIElementKind;
use super::widgets::{UIElementFlags, UIElementType, UIVerticalScrollbar};
use super::{UIManager, UINodeId};
use crate::foundation::math::{PointF, PointI, RectI};
use crate::input::InputBackend;
use crate::render::backend::GraphicsBackend;

/// Time step used when refreshing a single element outside the frame update
const SINGLE_UPDATE_DT: f32 = 0.1;

impl UIManager {
    // ---------------------------------------------------------------------
    // Tree editing
    // ---------------------------------------------------------------------

    /// Append `child` to the children of `parent`
    ///
    /// Fails if the child already has a parent or is an ancestor of `parent`.
    pub fn add_child(&mut self, parent: UINodeId, child: UINodeId) -> Result<(), UIError> {
        self.node(parent)?;
        if let Some(existing) = self.node(child)?.element.parent {
            return Err(UIError::InvalidState(format!(
                "element {child:?} already has parent {existing:?}"
            )));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(UIError::InvalidState(format!(
                "adding {child:?} under {parent:?} would create a cycle"
            )));
        }
        if self.cursor == Some(child) {
            return Err(UIError::InvalidState(format!("cursor {child:?} cannot be added to the tree")));
        }
        self.attach(parent, child);
        Ok(())
    }

    /// Detach `child` from `parent` without destroying it
    pub fn remove_child(&mut self, parent: UINodeId, child: UINodeId) -> Result<(), UIError> {
        if !self.node(parent)?.element.children.contains(&child) {
            return Err(UIError::InvalidState(format!("{child:?} is not a child of {parent:?}")));
        }
        self.ensure_not_part(child)?;
        self.detach(child);
        Ok(())
    }

    /// Detach an element from its parent and destroy its subtree
    ///
    /// Removing a list item element removes the whole item from its list.
    /// Parts of a composite element, such as a caption or a slider handle,
    /// go away with their owner and cannot be removed on their own.
    pub fn remove(&mut self, id: UINodeId) -> Result<(), UIError> {
        if self.node(id)?.element.parent.is_none() {
            log::warn!("Removing root element {:?}", id);
        }
        self.ensure_not_part(id)?;
        if let Some((list, index)) = self.owning_list(id) {
            return self.remove_list_item_at(list, index);
        }
        self.detach(id);
        self.destroy_subtree(id);
        Ok(())
    }

    /// Move an element to the end of its parent's children, drawing it last
    pub fn move_to_front(&mut self, id: UINodeId) -> Result<(), UIError> {
        let Some(parent) = self.node(id)?.element.parent else {
            return Ok(());
        };
        let siblings = &mut self.node_mut(parent)?.element.children;
        siblings.retain(|&sibling| sibling != id);
        siblings.push(id);
        Ok(())
    }

    /// Children of an element, in draw order
    pub fn children(&self, id: UINodeId) -> Result<&[UINodeId], UIError> {
        Ok(self.node(id)?.element.children())
    }

    /// Parent of an element
    pub fn parent(&self, id: UINodeId) -> Result<Option<UINodeId>, UIError> {
        Ok(self.node(id)?.element.parent)
    }

    /// Shift an element's offset so it lies inside its parent region
    pub fn validate_offset_inside_parent(&mut self, id: UINodeId) -> Result<(), UIError> {
        self.node(id)?;
        self.clamp_offset_to_parent(id);
        Ok(())
    }

    pub(crate) fn clamp_offset_to_parent(&mut self, id: UINodeId) {
        let region = self.region_for(id);
        if let Some(node) = self.nodes.get_mut(id) {
            let offset = node.element.offset_inside(region);
            node.element.set_offset(offset);
        }
    }

    /// Region an element is laid out in
    pub(crate) fn region_for(&self, id: UINodeId) -> RectI {
        let Some(node) = self.nodes.get(id) else {
            return self.screen_region();
        };
        let ignore_padding = node.element.has_flag(UIElementFlags::IGNORE_PARENT_PADDING);
        node.element
            .parent
            .and_then(|parent| self.nodes.get(parent))
            .map_or_else(|| self.screen_region(), |parent| parent.element.child_region(ignore_padding))
    }

    pub(crate) fn dest_rect_of(&self, id: UINodeId) -> RectI {
        self.nodes.get(id).map_or_else(RectI::zero, |node| node.element.dest_rect())
    }

    fn ensure_not_part(&self, id: UINodeId) -> Result<(), UIError> {
        let Some(owner) = self.node(id)?.element.parent else {
            return Ok(());
        };
        match self.nodes.get(owner) {
            Some(node) if node.kind.has_part(id) => Err(UIError::InvalidState(format!(
                "{id:?} is a part of {owner:?} and is removed with it"
            ))),
            _ => Ok(()),
        }
    }

    fn is_ancestor_or_self(&self, ancestor: UINodeId, id: UINodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(node_id).and_then(|node| node.element.parent);
        }
        false
    }

    pub(crate) fn attach(&mut self, parent: UINodeId, child: UINodeId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.element.parent = Some(parent);
            node.element.mark_as_dirty();
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.element.children.push(child);
        }
        log::debug!("Attached {:?} to {:?}", child, parent);
    }

    pub(crate) fn detach(&mut self, child: UINodeId) {
        let Some(parent) = self.nodes.get_mut(child).and_then(|node| node.element.parent.take()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(child) {
            node.element.mark_as_dirty();
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.element.children.retain(|&c| c != child);
        }
    }

    pub(crate) fn destroy_subtree(&mut self, id: UINodeId) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        if self.cursor == Some(id) {
            self.cursor = None;
        }
        for child in node.element.children {
            self.destroy_subtree(child);
        }
    }

    // ---------------------------------------------------------------------
    // Update
    // ---------------------------------------------------------------------

    /// Update an element and its subtree
    ///
    /// The destination rectangle is recomputed first, then the children, then
    /// the variant logic that depends on their rectangles.
    pub fn update(&mut self, id: UINodeId, delta_time: f32) {
        let region = self.region_for(id);
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.element.update_dest_rect(region);

        let children = node.element.children.clone();
        for child in children {
            self.update(child, delta_time);
        }

        match self.nodes.get(id).map(|node| node.element.element_type()) {
            Some(UIElementType::Slider) => self.sync_slider(id),
            Some(UIElementType::VerticalScrollbar) => self.update_scrollbar(id),
            Some(UIElementType::List) => self.layout_list(id),
            _ => {}
        }
    }

    pub(crate) fn update_single(&mut self, id: UINodeId) {
        self.update(id, SINGLE_UPDATE_DT);
    }

    /// Snap the handle to a track press recorded by the input pass
    ///
    /// The update runs before the input pass, so the snap lands one frame
    /// after the press. The value is refreshed from the handle offset either way.
    fn update_scrollbar(&mut self, id: UINodeId) {
        let pending = match self.nodes.get_mut(id).map(|node| &mut node.kind) {
            Some(UIElementKind::VerticalScrollbar(scrollbar)) => scrollbar.pending_snap.take(),
            _ => return,
        };

        if let (Some(cursor_y), Some((handle, _))) = (pending, self.scrollbar_track(id)) {
            let handle_height = self.dest_rect_of(handle).height;
            let Some(node) = self.nodes.get(id) else {
                return;
            };
            let element = &node.element;
            let y = UIVerticalScrollbar::snap_offset(cursor_y, element.dest_rect(), element.padding(), handle_height);
            if let Some(handle_node) = self.nodes.get_mut(handle) {
                let x = handle_node.element.offset().x;
                handle_node.element.set_offset(PointI::new(x, y));
            }
            self.clamp_offset_to_parent(handle);
            self.update(handle, 0.0);
        }
        self.refresh_scrollbar_value(id);
    }

    // ---------------------------------------------------------------------
    // Draw
    // ---------------------------------------------------------------------

    /// Draw the tree under `root`, then the cursor if requested
    pub fn draw(
        &mut self,
        root: UINodeId,
        draw_cursor: bool,
        input: &dyn InputBackend,
        gfx: &mut dyn GraphicsBackend,
    ) -> Result<(), UIError> {
        self.draw_element(root, gfx)?;
        if draw_cursor {
            self.draw_cursor(input, gfx)?;
        }
        Ok(())
    }

    /// Draw the cursor element at the mouse position
    pub fn draw_cursor(&mut self, input: &dyn InputBackend, gfx: &mut dyn GraphicsBackend) -> Result<(), UIError> {
        let Some(cursor) = self.cursor else {
            return Ok(());
        };
        self.renderable_size = gfx.renderable_size();
        let mouse = Self::relative_cursor_pos(input, gfx);
        let size = self.renderable_size;
        if let Some(node) = self.nodes.get_mut(cursor) {
            node.element.set_anchor(PointF::new(
                mouse.x as f32 / size.x.max(1) as f32,
                mouse.y as f32 / size.y.max(1) as f32,
            ));
        }
        self.update_single(cursor);
        self.draw_element(cursor, gfx)
    }

    fn draw_element(&mut self, id: UINodeId, gfx: &mut dyn GraphicsBackend) -> Result<(), UIError> {
        match self.nodes.get(id) {
            Some(node) if node.element.is_visible() => {}
            _ => return Ok(()),
        }
        self.fire(id, UICallbackKind::Draw, None);

        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        let element = &node.element;
        let mut text_rect = None;
        match &node.kind {
            UIElementKind::Container | UIElementKind::List(_) => {}
            UIElementKind::Rectangle(rectangle) => rectangle.draw(element, gfx)?,
            UIElementKind::Text(text) => text_rect = Some(text.draw(element, &mut self.text_renderer, gfx)?),
            kind => {
                if let Some(image) = kind.image() {
                    image.draw(element, gfx)?;
                }
            }
        }

        let children = node.element.children.clone();
        if let Some(rect) = text_rect {
            if let Some(UIElementKind::Text(text)) = self.nodes.get_mut(id).map(|node| &mut node.kind) {
                text.actual_rect = rect;
            }
        }
        for child in children {
            self.draw_element(child, gfx)?;
        }
        Ok(())
    }
}
