//! Integer pixel geometry
//!
//! Rectangles are point pairs (`min` inclusive, `max` exclusive), not
//! origin + extent. Native platforms usually report origin + extent; use
//! [`Rect::from_origin_size`] to convert, never reinterpret the fields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in area-local pixel coordinates (top-left origin)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this point lies inside `rect` (half-open on the max edges)
    pub fn is_in(&self, rect: Rect) -> bool {
        rect.min.x <= self.x && self.x < rect.max.x && rect.min.y <= self.y && self.y < rect.max.y
    }
}

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle described by two corner points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (exclusive)
    pub max: Point,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Create a rectangle from its corner coordinates
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Convert an origin + extent rectangle to corner form
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// The rectangle `(0, 0)-(width, height)`
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, clamp_to_i32(size.width), clamp_to_i32(size.height))
    }

    pub fn dx(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn dy(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// A rectangle with no interior pixels
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Largest rectangle contained in both `self` and `other`
    ///
    /// Returns [`Rect::ZERO`] when the two do not overlap, so callers can
    /// test the result with [`Rect::is_empty`].
    pub fn intersect(&self, other: Rect) -> Rect {
        let r = Rect::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if r.is_empty() {
            Rect::ZERO
        } else {
            r
        }
    }
}

fn clamp_to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
