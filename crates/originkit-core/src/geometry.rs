//! Plane geometry primitives: points, rectangles, bounding boxes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully-resolved point in a 2D plane.
///
/// Unlike [`crate::data::MachinePoint`], both coordinates are always
/// present. This is the type coordinate transforms and the overlay
/// geometry operate on once axis selection is done.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanePoint {
    /// Horizontal coordinate (linear X or rotary B, caller's choice)
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl PlanePoint {
    /// Create a new plane point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Axis-aligned rectangle described by its minimum corner and extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X of the rectangle
    pub min_x: f64,
    /// Minimum Y of the rectangle
    pub min_y: f64,
    /// Horizontal extent, `>= 0` for finite input
    pub width: f64,
    /// Vertical extent, `>= 0` for finite input
    pub height: f64,
}

impl Rect {
    /// Maximum X of the rectangle
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Maximum Y of the rectangle
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Center of the rectangle
    pub fn center(&self) -> PlanePoint {
        PlanePoint::new(self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }
}

/// Minimum of two values, propagating NaN like `Math.min` rather than
/// discarding it like `f64::min`.
fn min_preserving_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Compute the axis-aligned bounding box spanned by two points.
///
/// Pure and symmetric in its arguments. There are no error conditions:
/// NaN coordinates propagate into the result, and callers are responsible
/// for validating completeness before using the rectangle.
pub fn bounding_box(p1: PlanePoint, p2: PlanePoint) -> Rect {
    Rect {
        min_x: min_preserving_nan(p1.x, p2.x),
        min_y: min_preserving_nan(p1.y, p2.y),
        width: (p1.x - p2.x).abs(),
        height: (p1.y - p2.y).abs(),
    }
}
