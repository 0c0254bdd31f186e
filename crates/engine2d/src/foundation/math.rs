//! Math utilities and types
//!
//! Provides the 2D math types used by the UI and rendering layers.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Point with float components (render-target pixels or normalized values)
pub type PointF = Vector2<f32>;

/// Point with integer components (render-target pixels)
pub type PointI = Vector2<i32>;

/// RGBA color with components in 0..=1
pub type Color = Vector4<f32>;

/// Opaque white
pub fn white() -> Color {
    Color::new(1.0, 1.0, 1.0, 1.0)
}

/// Opaque black
pub fn black() -> Color {
    Color::new(0.0, 0.0, 0.0, 1.0)
}

/// Build a color from 0..=255 byte components
pub fn color_from_bytes(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

/// Convert a float point to integer pixels (truncating)
pub fn to_point_i(point: PointF) -> PointI {
    PointI::new(point.x as i32, point.y as i32)
}

/// Convert an integer point to floats
pub fn to_point_f(point: PointI) -> PointF {
    PointF::new(point.x as f32, point.y as f32)
}

/// Axis-aligned rectangle in integer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl RectI {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Empty rectangle at the origin
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn position(&self) -> PointI {
        PointI::new(self.x, self.y)
    }

    /// Width and height
    pub fn size(&self) -> PointI {
        PointI::new(self.width, self.height)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: PointI) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle with float components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl RectF {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Empty rectangle at the origin
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert to integer pixels (truncating)
    pub fn to_rect_i(self) -> RectI {
        RectI::new(self.x as i32, self.y as i32, self.width as i32, self.height as i32)
    }
}

impl From<RectI> for RectF {
    fn from(rect: RectI) -> Self {
        Self::new(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32)
    }
}
