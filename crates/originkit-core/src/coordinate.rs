//! Coordinate transforms between material, overlay, and machine space.
//!
//! Three conventions meet here:
//! - *material space*: origin at the stock's bottom-left, Y up
//! - *overlay space*: origin at the top-left, Y down (renderer convention)
//! - *machine space*: absolute work positions reported by the controller
//!
//! Axis substitution for rotary setups is centralized in
//! [`active_horizontal`]; every other component routes axis selection
//! through it instead of re-deriving the rotary/linear branch.

use crate::data::{MachinePoint, StockDimensions};
use crate::geometry::PlanePoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single axis-substitution point: the horizontal coordinate of a
/// measurement is B on rotary stock and X otherwise.
pub fn active_horizontal(point: &MachinePoint, is_rotate: bool) -> Option<f64> {
    if is_rotate {
        point.b
    } else {
        point.x
    }
}

/// Map a material-space point into overlay space by flipping the
/// vertical axis: `overlay_y = stock.height - material_y`. The
/// horizontal coordinate passes through unchanged; axis selection is the
/// caller's responsibility.
pub fn to_overlay_space(point: PlanePoint, stock: &StockDimensions) -> PlanePoint {
    PlanePoint::new(point.x, stock.height - point.y)
}

/// Declared origin reference on the stock.
///
/// Names the point of the stock rectangle the operator declared as the
/// job origin when the work coordinate system was set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginReference {
    Center,
    BottomLeft,
    BottomCenter,
    BottomRight,
    CenterLeft,
    CenterRight,
    TopLeft,
    TopCenter,
    TopRight,
}

impl OriginReference {
    /// The stock-space offset of this reference, measured from the
    /// stock's bottom-left corner.
    pub fn stock_offset(&self, stock: &StockDimensions) -> PlanePoint {
        let (w, h) = (stock.width, stock.height);
        match self {
            Self::Center => PlanePoint::new(w / 2.0, h / 2.0),
            Self::BottomLeft => PlanePoint::new(0.0, 0.0),
            Self::BottomCenter => PlanePoint::new(w / 2.0, 0.0),
            Self::BottomRight => PlanePoint::new(w, 0.0),
            Self::CenterLeft => PlanePoint::new(0.0, h / 2.0),
            Self::CenterRight => PlanePoint::new(w, h / 2.0),
            Self::TopLeft => PlanePoint::new(0.0, h),
            Self::TopCenter => PlanePoint::new(w / 2.0, h),
            Self::TopRight => PlanePoint::new(w, h),
        }
    }
}

impl fmt::Display for OriginReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::BottomLeft => write!(f, "bottom-left"),
            Self::BottomCenter => write!(f, "bottom-center"),
            Self::BottomRight => write!(f, "bottom-right"),
            Self::CenterLeft => write!(f, "center-left"),
            Self::CenterRight => write!(f, "center-right"),
            Self::TopLeft => write!(f, "top-left"),
            Self::TopCenter => write!(f, "top-center"),
            Self::TopRight => write!(f, "top-right"),
        }
    }
}

/// Round to the millimeter-scale precision measurements are stored at.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Project an absolute machine work position into material space by
/// subtracting the work-origin offset, rounding each axis to 3 decimals.
/// Axes the work position never measured stay unset.
pub fn project_to_material(work_position: &MachinePoint, origin_offset: &MachinePoint) -> MachinePoint {
    let project = |axis: Option<f64>, offset: Option<f64>| {
        axis.map(|v| round3(v - offset.unwrap_or(0.0)))
    };
    MachinePoint {
        x: project(work_position.x, origin_offset.x),
        y: project(work_position.y, origin_offset.y),
        z: project(work_position.z, origin_offset.z),
        b: project(work_position.b, origin_offset.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_horizontal() {
        let point = MachinePoint {
            x: Some(12.0),
            y: Some(3.0),
            z: None,
            b: Some(90.0),
        };
        assert_eq!(active_horizontal(&point, false), Some(12.0));
        assert_eq!(active_horizontal(&point, true), Some(90.0));

        let unset = MachinePoint::new();
        assert_eq!(active_horizontal(&unset, false), None);
        assert_eq!(active_horizontal(&unset, true), None);
    }

    #[test]
    fn test_to_overlay_space_flips_y() {
        let stock = StockDimensions::flat(100.0, 60.0);
        let flipped = to_overlay_space(PlanePoint::new(40.0, 25.0), &stock);
        assert_eq!(flipped, PlanePoint::new(40.0, 35.0));

        // overlay-space flip is an involution
        assert_eq!(
            to_overlay_space(flipped, &stock),
            PlanePoint::new(40.0, 25.0)
        );
    }

    #[test]
    fn test_origin_reference_offsets() {
        let stock = StockDimensions::flat(100.0, 60.0);
        assert_eq!(
            OriginReference::Center.stock_offset(&stock),
            PlanePoint::new(50.0, 30.0)
        );
        assert_eq!(
            OriginReference::BottomLeft.stock_offset(&stock),
            PlanePoint::new(0.0, 0.0)
        );
        assert_eq!(
            OriginReference::BottomCenter.stock_offset(&stock),
            PlanePoint::new(50.0, 0.0)
        );
        assert_eq!(
            OriginReference::TopRight.stock_offset(&stock),
            PlanePoint::new(100.0, 60.0)
        );
    }

    #[test]
    fn test_project_to_material_rounds_to_micron() {
        let work = MachinePoint {
            x: Some(102.30041),
            y: Some(55.9996),
            z: Some(10.0),
            b: None,
        };
        let offset = MachinePoint {
            x: Some(100.0),
            y: Some(50.0),
            z: None,
            b: None,
        };
        let material = project_to_material(&work, &offset);
        assert_eq!(material.x, Some(2.3));
        assert_eq!(material.y, Some(6.0));
        assert_eq!(material.z, Some(10.0));
        assert_eq!(material.b, None);
    }
}
