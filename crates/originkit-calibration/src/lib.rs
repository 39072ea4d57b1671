//! # OriginKit Calibration
//!
//! The authoritative store for one calibration session and the overlay
//! geometry derived from it:
//! - `CalibrationSession` holds the committed and provisional reference
//!   pairs and gates whether a calibration is usable
//! - `OverlayGeometryBuilder` turns a complete pair into declarative
//!   mask/marker geometry for an external renderer
//! - `OverlayRenderer`/`OverlayController` form the seam to that renderer

pub mod overlay;
pub mod session;

pub use overlay::{
    OverlayController, OverlayGeometry, OverlayGeometryBuilder, OverlayRenderer,
    HIGHLIGHT_COLOR, MARKER_COLOR, PROVISIONAL_MARKER_COLOR,
};
pub use session::{CalibrationSession, OverlayUpdate, Slot};
