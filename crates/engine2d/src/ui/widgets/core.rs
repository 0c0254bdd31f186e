//! Core UI widget primitives
//!
//! Shared types used by all UI elements: coordinates, sides, states, flags,
//! per-state style and the [`UIElement`] record every node in the tree carries.

use bitflags::bitflags;

use crate::config::{ConfigAsset, ConfigError};
use crate::foundation::math::{to_point_f, to_point_i, white, Color, PointF, PointI, RectF, RectI};
use crate::render::backend::{BlendMode, BLEND_OPTIONS};
use crate::ui::UINodeId;

/// Unit of a [`UICoords`] axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UICoordsType {
    /// Absolute pixels
    Pixels,
    /// Percent of the parent region
    #[default]
    PercentOfParent,
}

impl UICoordsType {
    /// Stylesheet suffix for this unit
    pub const fn suffix(self) -> char {
        match self {
            Self::Pixels => 'p',
            Self::PercentOfParent => '%',
        }
    }
}

/// A 2D size (or position) where each axis has its own unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UICoords {
    /// X value
    pub x: i32,
    /// X unit
    pub x_type: UICoordsType,
    /// Y value
    pub y: i32,
    /// Y unit
    pub y_type: UICoordsType,
}

impl UICoords {
    /// Create coords with explicit units
    pub const fn new(x: i32, x_type: UICoordsType, y: i32, y_type: UICoordsType) -> Self {
        Self { x, x_type, y, y_type }
    }

    /// Both axes in pixels
    pub const fn pixels(x: i32, y: i32) -> Self {
        Self::new(x, UICoordsType::Pixels, y, UICoordsType::Pixels)
    }

    /// Both axes in percent of parent
    pub const fn percent(x: i32, y: i32) -> Self {
        Self::new(x, UICoordsType::PercentOfParent, y, UICoordsType::PercentOfParent)
    }

    /// Parse one axis from a stylesheet value such as `"100p"` or `"50%"`
    ///
    /// A bare number is read as pixels.
    pub fn parse_axis(value: &str) -> Option<(i32, UICoordsType)> {
        let value = value.trim();
        let (number, unit) = if let Some(number) = value.strip_suffix('%') {
            (number, UICoordsType::PercentOfParent)
        } else if let Some(number) = value.strip_suffix('p') {
            (number, UICoordsType::Pixels)
        } else {
            (value, UICoordsType::Pixels)
        };
        let number = number.trim().parse::<f32>().ok()?;
        Some((number as i32, unit))
    }

    /// Resolve to pixels inside a region of the given size
    pub fn calc(&self, region_size: PointI) -> PointI {
        PointI::new(
            Self::calc_axis(self.x, self.x_type, region_size.x),
            Self::calc_axis(self.y, self.y_type, region_size.y),
        )
    }

    fn calc_axis(value: i32, unit: UICoordsType, region: i32) -> i32 {
        match unit {
            UICoordsType::Pixels => value,
            UICoordsType::PercentOfParent => ((value as f32 / 100.0) * region as f32) as i32,
        }
    }
}

impl Default for UICoords {
    fn default() -> Self {
        Self::percent(100, 100)
    }
}

/// Left, top, right and bottom values (padding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UISides {
    /// Left side
    pub left: i32,
    /// Top side
    pub top: i32,
    /// Right side
    pub right: i32,
    /// Bottom side
    pub bottom: i32,
}

impl UISides {
    /// Create sides
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build from a `left,top,right,bottom` rectangle as read from a stylesheet
    pub fn from_rect(rect: RectF) -> Self {
        Self::new(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32)
    }

    /// Shrink a rectangle by these sides
    pub const fn shrink(&self, rect: RectI) -> RectI {
        RectI::new(
            rect.x + self.left,
            rect.y + self.top,
            rect.width - self.left - self.right,
            rect.height - self.top - self.bottom,
        )
    }
}

/// Interaction state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UIElementState {
    /// Not interacted with
    #[default]
    Idle,
    /// Cursor is on the element
    PointedOn,
    /// Primary button is held on the element
    PressedDown,
    /// Secondary button is held on the element
    AltPressedDown,
}

impl UIElementState {
    /// True for both pressed states
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::PressedDown | Self::AltPressedDown)
    }
}

bitflags! {
    /// Behavior flags of an element
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UIElementFlags: u32 {
        /// Element reacts to the cursor
        const INTERACTIVE = 1 << 0;
        /// Element stops the cursor from reaching elements behind it
        const CAPTURE_INPUT = 1 << 1;
        /// Element can be dragged with the primary button
        const DRAGGABLE = 1 << 2;
        /// Dragging keeps the element inside its parent region
        const LIMIT_DRAG_TO_PARENT = 1 << 3;
        /// Element takes its parent's state after every input update
        const COPY_PARENT_STATE = 1 << 4;
        /// Element and its children are drawn
        const VISIBLE = 1 << 5;
        /// Element is displayed as pressed regardless of its input state
        const FORCE_ACTIVE_STATE = 1 << 6;
        /// Element is positioned inside the parent's full rectangle, ignoring padding
        const IGNORE_PARENT_PADDING = 1 << 7;
    }
}

impl Default for UIElementFlags {
    fn default() -> Self {
        Self::INTERACTIVE | Self::CAPTURE_INPUT | Self::VISIBLE
    }
}

/// Element type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UIElementType {
    /// Plain container
    Container,
    /// Image
    Image,
    /// Colored rectangle
    Rectangle,
    /// Text
    Text,
    /// Button
    Button,
    /// Check box
    CheckBox,
    /// Radio button
    Radio,
    /// Horizontal slider
    Slider,
    /// Vertical scrollbar
    VerticalScrollbar,
    /// List of text items
    List,
    /// Window with a title
    Window,
}

impl UIElementType {
    /// Stylesheet section holding this type's own keys, if it has any
    pub const fn style_section(self) -> Option<&'static str> {
        match self {
            Self::Container => None,
            Self::Image => Some("image"),
            Self::Rectangle => Some("rectangle"),
            Self::Text => Some("text"),
            Self::Button => Some("button"),
            Self::CheckBox => Some("checkbox"),
            Self::Radio => Some("radio"),
            Self::Slider => Some("slider"),
            Self::VerticalScrollbar => Some("scrollbar"),
            Self::List => Some("list"),
            Self::Window => Some("window"),
        }
    }
}

/// Per-state drawing style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UIStyle {
    /// Idle color
    pub color: Color,
    /// Color while pointed on
    pub color_highlight: Color,
    /// Color while pressed
    pub color_pressed: Color,
    /// Color while alt-pressed
    pub color_alt_pressed: Color,
    /// Idle source rectangle (empty draws the whole image)
    pub source_rect: RectI,
    /// Source rectangle while pointed on
    pub source_rect_highlight: RectI,
    /// Source rectangle while pressed or alt-pressed
    pub source_rect_pressed: RectI,
    /// Blend mode
    pub blend: BlendMode,
}

impl Default for UIStyle {
    fn default() -> Self {
        Self {
            color: white(),
            color_highlight: white(),
            color_pressed: white(),
            color_alt_pressed: white(),
            source_rect: RectI::zero(),
            source_rect_highlight: RectI::zero(),
            source_rect_pressed: RectI::zero(),
            blend: BlendMode::AlphaBlend,
        }
    }
}

impl UIStyle {
    /// Set the same color for every state
    pub fn set_all_colors(&mut self, color: Color) {
        self.color = color;
        self.color_highlight = color;
        self.color_pressed = color;
        self.color_alt_pressed = color;
    }

    /// Load per-state colors from `section`
    ///
    /// A derived color (highlight, pressed, alt-pressed) that is not set falls
    /// back to the color it derives from when that one is set in this config,
    /// and keeps its current value otherwise.
    pub fn load_colors(&mut self, config: &ConfigAsset, section: &str) -> Result<(), ConfigError> {
        let mut chain_set = config.contains(section, "color");
        self.color = config.get_color(section, "color", self.color)?;

        let fallback = if chain_set { self.color } else { self.color_highlight };
        chain_set |= config.contains(section, "color_highlight");
        self.color_highlight = config.get_color(section, "color_highlight", fallback)?;

        let fallback = if chain_set { self.color_highlight } else { self.color_pressed };
        chain_set |= config.contains(section, "color_pressed");
        self.color_pressed = config.get_color(section, "color_pressed", fallback)?;

        let fallback = if chain_set { self.color_pressed } else { self.color_alt_pressed };
        self.color_alt_pressed = config.get_color(section, "color_alt_pressed", fallback)?;
        Ok(())
    }

    /// Load per-state source rectangles from `section`
    pub fn load_source_rects(&mut self, config: &ConfigAsset, section: &str) -> Result<(), ConfigError> {
        let has_base = config.contains(section, "source_rect");
        self.source_rect = Self::read_rect(config, section, "source_rect", self.source_rect)?;

        let fallback = if has_base { self.source_rect } else { self.source_rect_highlight };
        self.source_rect_highlight = Self::read_rect(config, section, "source_rect_highlight", fallback)?;

        let has_highlight = has_base || config.contains(section, "source_rect_highlight");
        let fallback = if has_highlight { self.source_rect_highlight } else { self.source_rect_pressed };
        self.source_rect_pressed = Self::read_rect(config, section, "source_rect_pressed", fallback)?;
        Ok(())
    }

    /// Load the blend mode from `section`
    pub fn load_blend(&mut self, config: &ConfigAsset, section: &str) -> Result<(), ConfigError> {
        let index = config.get_option(section, "blend", &BLEND_OPTIONS, self.blend as usize)?;
        self.blend = BlendMode::from_index(index).unwrap_or_default();
        Ok(())
    }

    fn read_rect(config: &ConfigAsset, section: &str, key: &str, default: RectI) -> Result<RectI, ConfigError> {
        Ok(config.get_rectangle_f(section, key, RectF::from(default))?.to_rect_i())
    }
}

/// Shared record of every element in the UI tree
///
/// Geometry setters mark the destination rectangle dirty; it is recomputed on
/// the next update of the element.
#[derive(Debug, Clone)]
pub struct UIElement {
    element_type: UIElementType,
    offset: PointI,
    size: UICoords,
    anchor: PointF,
    origin: PointF,
    padding: UISides,
    flags: UIElementFlags,
    /// Drawing style
    pub style: UIStyle,
    pub(crate) state: UIElementState,
    pub(crate) prev_state: UIElementState,
    pub(crate) parent: Option<UINodeId>,
    pub(crate) children: Vec<UINodeId>,
    pub(crate) dragging: bool,
    dest_rect: RectI,
    dest_dirty: bool,
    last_region: Option<RectI>,
}

impl UIElement {
    /// Create an element of the given type with default geometry and flags
    pub fn new(element_type: UIElementType) -> Self {
        Self {
            element_type,
            offset: PointI::zeros(),
            size: UICoords::default(),
            anchor: PointF::zeros(),
            origin: PointF::zeros(),
            padding: UISides::default(),
            flags: UIElementFlags::default(),
            style: UIStyle::default(),
            state: UIElementState::Idle,
            prev_state: UIElementState::Idle,
            parent: None,
            children: Vec::new(),
            dragging: false,
            dest_rect: RectI::zero(),
            dest_dirty: true,
            last_region: None,
        }
    }

    /// Element type
    pub const fn element_type(&self) -> UIElementType {
        self.element_type
    }

    /// Offset from the anchored position, in pixels
    pub const fn offset(&self) -> PointI {
        self.offset
    }

    /// Set offset
    pub fn set_offset(&mut self, offset: PointI) {
        if self.offset != offset {
            self.offset = offset;
            self.mark_as_dirty();
        }
    }

    /// Size
    pub const fn size(&self) -> UICoords {
        self.size
    }

    /// Set size
    pub fn set_size(&mut self, size: UICoords) {
        if self.size != size {
            self.size = size;
            self.mark_as_dirty();
        }
    }

    /// Set size in pixels
    pub fn set_size_in_pixels(&mut self, width: i32, height: i32) {
        self.set_size(UICoords::pixels(width, height));
    }

    /// Anchor point, normalized within the parent region
    pub const fn anchor(&self) -> PointF {
        self.anchor
    }

    /// Set anchor
    pub fn set_anchor(&mut self, anchor: PointF) {
        if self.anchor != anchor {
            self.anchor = anchor;
            self.mark_as_dirty();
        }
    }

    /// Origin, normalized within the element's own size
    pub const fn origin(&self) -> PointF {
        self.origin
    }

    /// Set origin
    pub fn set_origin(&mut self, origin: PointF) {
        if self.origin != origin {
            self.origin = origin;
            self.mark_as_dirty();
        }
    }

    /// Internal padding
    pub const fn padding(&self) -> UISides {
        self.padding
    }

    /// Set internal padding
    pub fn set_padding(&mut self, padding: UISides) {
        if self.padding != padding {
            self.padding = padding;
            self.mark_as_dirty();
        }
    }

    /// Behavior flags
    pub const fn flags(&self) -> UIElementFlags {
        self.flags
    }

    /// Check a flag
    pub const fn has_flag(&self, flag: UIElementFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Set or clear a flag
    pub fn set_flag(&mut self, flag: UIElementFlags, value: bool) {
        if flag.contains(UIElementFlags::IGNORE_PARENT_PADDING) && self.has_flag(flag) != value {
            self.mark_as_dirty();
        }
        self.flags.set(flag, value);
    }

    /// Check if the element (and its subtree) is drawn
    pub const fn is_visible(&self) -> bool {
        self.has_flag(UIElementFlags::VISIBLE)
    }

    /// Show or hide the element
    pub fn set_visible(&mut self, visible: bool) {
        self.set_flag(UIElementFlags::VISIBLE, visible);
    }

    /// Current input state
    pub const fn state(&self) -> UIElementState {
        self.state
    }

    /// Input state of the previous input update
    pub const fn prev_state(&self) -> UIElementState {
        self.prev_state
    }

    /// State used for drawing
    pub const fn display_state(&self) -> UIElementState {
        if self.has_flag(UIElementFlags::FORCE_ACTIVE_STATE) {
            UIElementState::PressedDown
        } else {
            self.state
        }
    }

    /// Parent element
    pub const fn parent(&self) -> Option<UINodeId> {
        self.parent
    }

    /// Child elements, in draw order
    pub fn children(&self) -> &[UINodeId] {
        &self.children
    }

    /// Last calculated destination rectangle
    pub const fn dest_rect(&self) -> RectI {
        self.dest_rect
    }

    /// Force the destination rectangle to be recalculated
    pub fn mark_as_dirty(&mut self) {
        self.dest_dirty = true;
    }

    /// Check if the destination rectangle needs recalculating
    pub const fn is_dirty(&self) -> bool {
        self.dest_dirty
    }

    /// Color for the current display state
    pub const fn current_state_color(&self) -> Color {
        match self.display_state() {
            UIElementState::Idle => self.style.color,
            UIElementState::PointedOn => self.style.color_highlight,
            UIElementState::PressedDown => self.style.color_pressed,
            UIElementState::AltPressedDown => self.style.color_alt_pressed,
        }
    }

    /// Source rectangle for the current display state
    pub const fn current_state_source_rect(&self) -> RectI {
        match self.display_state() {
            UIElementState::Idle => self.style.source_rect,
            UIElementState::PointedOn => self.style.source_rect_highlight,
            UIElementState::PressedDown | UIElementState::AltPressedDown => self.style.source_rect_pressed,
        }
    }

    /// Compute the destination rectangle inside a parent region
    pub fn calc_dest_rect(&self, region: RectI) -> RectI {
        let size = self.size.calc(region.size());
        let anchored = to_point_f(region.size()).component_mul(&self.anchor);
        let origin = to_point_f(size).component_mul(&self.origin);
        let position = region.position() + to_point_i(anchored) + self.offset - to_point_i(origin);
        RectI::new(position.x, position.y, size.x, size.y)
    }

    /// Recalculate the destination rectangle if dirty or if the region changed
    ///
    /// Returns true if it was recalculated.
    pub(crate) fn update_dest_rect(&mut self, region: RectI) -> bool {
        if !self.dest_dirty && self.last_region == Some(region) {
            return false;
        }
        self.dest_rect = self.calc_dest_rect(region);
        self.dest_dirty = false;
        self.last_region = Some(region);
        true
    }

    /// Region children of this element are laid out in
    pub const fn child_region(&self, ignore_padding: bool) -> RectI {
        if ignore_padding {
            self.dest_rect
        } else {
            self.padding.shrink(self.dest_rect)
        }
    }

    /// Offset that keeps this element inside `region`
    ///
    /// An element larger than the region sticks to its top-left corner.
    pub fn offset_inside(&self, region: RectI) -> PointI {
        let rect = self.calc_dest_rect(region);
        let mut shift = PointI::zeros();
        if rect.right() > region.right() {
            shift.x = region.right() - rect.right();
        }
        if rect.x + shift.x < region.x {
            shift.x = region.x - rect.x;
        }
        if rect.bottom() > region.bottom() {
            shift.y = region.bottom() - rect.bottom();
        }
        if rect.y + shift.y < region.y {
            shift.y = region.y - rect.y;
        }
        self.offset + shift
    }

    /// Load the base `[style]` section
    ///
    /// Keys that are not set keep their current values.
    pub fn load_style(&mut self, config: &ConfigAsset) -> Result<(), ConfigError> {
        const SECTION: &str = "style";

        let width = Self::read_axis(config, "width", (self.size.x, self.size.x_type))?;
        let height = Self::read_axis(config, "height", (self.size.y, self.size.y_type))?;
        self.set_size(UICoords::new(width.0, width.1, height.0, height.1));

        let padding = self.padding;
        let padding_rect = RectF::new(
            padding.left as f32,
            padding.top as f32,
            padding.right as f32,
            padding.bottom as f32,
        );
        self.set_padding(UISides::from_rect(config.get_rectangle_f(SECTION, "padding", padding_rect)?));

        self.set_origin(config.get_point_f(SECTION, "origin", self.origin)?);
        self.set_anchor(config.get_point_f(SECTION, "anchor", self.anchor)?);
        let offset = config.get_point_f(SECTION, "offset", to_point_f(self.offset))?;
        self.set_offset(to_point_i(offset));

        let flag_keys = [
            ("interactive", UIElementFlags::INTERACTIVE),
            ("capture_input", UIElementFlags::CAPTURE_INPUT),
            ("draggable", UIElementFlags::DRAGGABLE),
            ("limit_drag_to_parent", UIElementFlags::LIMIT_DRAG_TO_PARENT),
            ("copy_parent_state", UIElementFlags::COPY_PARENT_STATE),
            ("visible", UIElementFlags::VISIBLE),
            ("ignore_parent_padding", UIElementFlags::IGNORE_PARENT_PADDING),
        ];
        for (key, flag) in flag_keys {
            let value = config.get_bool(SECTION, key, self.has_flag(flag))?;
            self.set_flag(flag, value);
        }
        Ok(())
    }

    fn read_axis(
        config: &ConfigAsset,
        key: &'static str,
        current: (i32, UICoordsType),
    ) -> Result<(i32, UICoordsType), ConfigError> {
        match config.get_str_opt("style", key) {
            None => Ok(current),
            Some(raw) => UICoords::parse_axis(raw).ok_or_else(|| ConfigError::AssetLoad {
                section: "style".to_string(),
                key: key.to_string(),
                value: raw.to_string(),
                reason: "must be a number followed by 'p' or '%'",
            }),
        }
    }
}
