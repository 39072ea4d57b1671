//! # OriginKit Core
//!
//! Core types and utilities for work-origin calibration:
//! - Measured machine points with explicit per-axis set/unset state
//! - Stock dimensions and calibration pairs
//! - Coordinate transforms between material, overlay, and machine space
//! - Axis-aligned bounding boxes
//! - Error taxonomy shared by all OriginKit crates

pub mod coordinate;
pub mod data;
pub mod error;
pub mod geometry;

pub use coordinate::{
    active_horizontal, project_to_material, to_overlay_space, OriginReference,
};
pub use data::{
    CalibrationPair, MachinePoint, SetupMethod, StockDimensions, VerificationMode, WorkRange,
};
pub use error::{Error, Result, TransportError, WorkRangeError};
pub use geometry::{bounding_box, PlanePoint, Rect};
