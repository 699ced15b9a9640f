//! Points, sizes, rectangles and insets in a top-left origin coordinate space.

use serde::{Deserialize, Serialize};

/// A point, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle at `origin` with `size`.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Whether `point` lies inside, edges on the left and top included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.max_x()
            && point.y >= self.origin.y
            && point.y < self.max_y()
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.origin.x + dx, self.origin.y + dy, self.size.width, self.size.height)
    }
}

/// Insets from each edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset
    pub top: f64,
    /// Left inset
    pub left: f64,
    /// Bottom inset
    pub bottom: f64,
    /// Right inset
    pub right: f64,
}

impl EdgeInsets {
    /// Creates insets.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}
