//! Data models for measured points, stock, and calibration sessions
//!
//! This module provides:
//! - Measured machine points with explicit per-axis set/unset state
//! - Stock (workpiece) dimensions with the rotary flag
//! - Calibration pairs and their completeness rules
//! - Work ranges and the enums that parameterize boundary verification

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point measured on the machine, one `Option` per axis.
///
/// `None` means the axis was never measured. This replaces implicit
/// NaN/absent checks with an explicit tagged state, removing the
/// ambiguity between "not measured" and "measured as zero". A coordinate
/// only counts as *set* when it is both present and finite; `Some(NAN)`
/// is treated as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MachinePoint {
    /// Linear X-axis position (if measured)
    pub x: Option<f64>,
    /// Y-axis position (if measured)
    pub y: Option<f64>,
    /// Z-axis position (if measured)
    pub z: Option<f64>,
    /// Rotary B-axis position (if measured); the angular analogue of X
    pub b: Option<f64>,
}

impl MachinePoint {
    /// Create a new empty point (all axes unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a point with X and Y set (linear stock measurement)
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Create a point with B and Y set (rotary stock measurement)
    pub fn by(b: f64, y: f64) -> Self {
        Self {
            b: Some(b),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Whether an axis value counts as set: present and finite
    pub fn axis_is_set(value: Option<f64>) -> bool {
        value.is_some_and(f64::is_finite)
    }

    /// Whether this point carries everything a calibration in the given
    /// mode needs: finite Y plus finite B (rotary) or finite X (linear).
    pub fn is_position_complete(&self, is_rotate: bool) -> bool {
        let horizontal = if is_rotate { self.b } else { self.x };
        Self::axis_is_set(self.y) && Self::axis_is_set(horizontal)
    }

    /// Check if no axis is set at all
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none() && self.b.is_none()
    }
}

impl fmt::Display for MachinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = |v: Option<f64>| match v {
            Some(v) => format!("{v:.3}"),
            None => "-".to_string(),
        };
        write!(
            f,
            "X:{} Y:{} Z:{} B:{}",
            axis(self.x),
            axis(self.y),
            axis(self.z),
            axis(self.b)
        )
    }
}

/// Physical extent of the material being worked on, in material space.
///
/// Immutable for the duration of one calibration session; the operator
/// changing material settings replaces it wholesale. For rotary stock the
/// width is the unrolled circumference and the B axis substitutes for X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockDimensions {
    /// Horizontal extent of the stock
    pub width: f64,
    /// Vertical extent of the stock
    pub height: f64,
    /// Whether the machine is in rotary (chuck) configuration
    pub is_rotate: bool,
}

impl StockDimensions {
    /// Create stock dimensions for a flat (linear) setup
    pub fn flat(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            is_rotate: false,
        }
    }

    /// Create stock dimensions for a rotary setup
    pub fn rotary(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            is_rotate: true,
        }
    }
}

/// The two operator-measured reference points of one calibration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPair {
    /// Reference point A
    pub a: MachinePoint,
    /// Reference point B
    pub b: MachinePoint,
}

impl CalibrationPair {
    /// A pair is complete iff both points are complete for the given
    /// mode: finite Y and B on rotary stock, finite X and Y otherwise.
    /// An incomplete pair must never reach bounding-box or overlay
    /// computation.
    pub fn is_complete(&self, is_rotate: bool) -> bool {
        self.a.is_position_complete(is_rotate) && self.b.is_position_complete(is_rotate)
    }
}

/// The rectangular extent of a job in machine axis terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkRange {
    /// Minimum corner
    pub min: MachinePoint,
    /// Maximum corner
    pub max: MachinePoint,
}

/// How the machine shows the traced boundary to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// Visual crosshair indicator
    Crosshair,
    /// Zero-power laser spot
    LaserSpot,
}

impl fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crosshair => write!(f, "crosshair"),
            Self::LaserSpot => write!(f, "laser spot"),
        }
    }
}

/// How the working origin was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupMethod {
    /// Operator jogged the tool head to the origin by hand
    Manual,
    /// Control-panel-driven positioning already zeroed the origin
    ByControlPanel,
}

impl fmt::Display for SetupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::ByControlPanel => write!(f, "by control panel"),
        }
    }
}
