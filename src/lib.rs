//! # OriginKit
//!
//! Work-origin calibration and boundary verification for laser machines.
//! The operator measures two reference points ("A" and "B") against the
//! physical workpiece; OriginKit reconciles them across material, overlay,
//! and machine space, previews the measured region, and generates the
//! command program that traces the job's rectangular boundary on the
//! machine before anything is cut or etched.
//!
//! ## Architecture
//!
//! OriginKit is organized as a workspace with multiple crates:
//!
//! 1. **originkit-core** - Points, stock, coordinate transforms, errors
//! 2. **originkit-calibration** - Calibration session and overlay geometry
//! 3. **originkit-boundary** - Boundary program generation and transport
//! 4. **originkit-settings** - Job configuration persistence
//! 5. **originkit** - Binary that wires configuration to the generator

pub use originkit_boundary::{
    generate_boundary_program, BoundaryCommand, BoundaryProgram, BoundaryRequest, BoundaryRunner,
    BoundaryTransport, FileTransport, HorizontalAxis, RunOutcome, BOUNDARY_FEED_RATE,
};
pub use originkit_calibration::{
    CalibrationSession, OverlayController, OverlayGeometry, OverlayGeometryBuilder,
    OverlayRenderer, OverlayUpdate, Slot,
};
pub use originkit_core::{
    active_horizontal, bounding_box, project_to_material, to_overlay_space, CalibrationPair,
    Error, MachinePoint, OriginReference, PlanePoint, Rect, Result, SetupMethod, StockDimensions,
    TransportError, VerificationMode, WorkRange, WorkRangeError,
};
pub use originkit_settings::{JobConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();

    Ok(())
}
