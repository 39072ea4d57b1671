//! Deterministic boundary program generation.
//!
//! The emission order is fixed; no conditional is reordered at runtime
//! and no pass rewrites the command list afterwards, so identical
//! requests yield byte-identical programs.

use crate::program::{BoundaryCommand, BoundaryProgram, HorizontalAxis};
use originkit_core::coordinate::active_horizontal;
use originkit_core::data::{MachinePoint, SetupMethod, VerificationMode, WorkRange};
use originkit_core::error::{Result, WorkRangeError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything that determines one boundary program. No hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRequest {
    /// The job's rectangular work range, if one is known
    pub work_range: Option<WorkRange>,
    /// How the traced boundary is shown to the operator
    pub verification_mode: VerificationMode,
    /// Whether the job targets rotary stock (B substitutes for X)
    pub is_rotate: bool,
    /// How the working origin was established
    pub setup_method: SetupMethod,
}

/// A finite work-range bound, or the error naming the bad bound.
fn bound(
    point: &MachinePoint,
    is_rotate: bool,
    which: &'static str,
) -> std::result::Result<(f64, f64), WorkRangeError> {
    let axis = if is_rotate { "B" } else { "X" };
    let horizontal = active_horizontal(point, is_rotate)
        .filter(|v| v.is_finite())
        .ok_or(WorkRangeError::NonFiniteBound { axis, bound: which })?;
    let y = point
        .y
        .filter(|v| v.is_finite())
        .ok_or(WorkRangeError::NonFiniteBound {
            axis: "Y",
            bound: which,
        })?;
    Ok((horizontal, y))
}

/// Generate the program tracing the rectangle `[work_range.min, work_range.max]`.
///
/// Rejects absent or non-finite work ranges outright: a plausible-looking
/// program with wrong travel limits is worse than a loud failure, so no
/// partial program is ever produced.
pub fn generate_boundary_program(request: &BoundaryRequest) -> Result<BoundaryProgram> {
    let work_range = request.work_range.as_ref().ok_or(WorkRangeError::Missing)?;
    let (h_min, y_min) = bound(&work_range.min, request.is_rotate, "min")?;
    let (h_max, y_max) = bound(&work_range.max, request.is_rotate, "max")?;

    let axis = if request.is_rotate {
        HorizontalAxis::B
    } else {
        HorizontalAxis::X
    };
    let power = match request.verification_mode {
        VerificationMode::Crosshair => 0,
        VerificationMode::LaserSpot => 10,
    };
    let travel = |horizontal: f64, y: f64| BoundaryCommand::Travel {
        axis,
        power,
        horizontal,
        y,
    };

    let mut commands = Vec::with_capacity(12);

    if request.setup_method == SetupMethod::ByControlPanel {
        commands.push(BoundaryCommand::MotorHoldMode { mode: 3 });
    }

    match request.verification_mode {
        VerificationMode::Crosshair => commands.push(BoundaryCommand::CrosshairOn),
        VerificationMode::LaserSpot => {
            commands.push(BoundaryCommand::LaserOn { power: 0 });
            commands.push(BoundaryCommand::TravelPrime { power });
        }
    }

    commands.push(BoundaryCommand::AbsoluteMode);

    // The current position becomes the origin, unless the control panel
    // already established one the operator deliberately set.
    if request.setup_method != SetupMethod::ByControlPanel {
        commands.push(BoundaryCommand::ZeroWorkOrigin);
    }

    commands.push(travel(h_min, y_min));
    commands.push(travel(h_max, y_min));
    commands.push(travel(h_max, y_max));
    commands.push(travel(h_min, y_max));
    commands.push(travel(h_min, y_min));

    // Rest position: the zeroed origin when there is one; otherwise the
    // rectangle's own center is the only always-valid place to stop.
    match request.setup_method {
        SetupMethod::ByControlPanel => commands.push(travel(
            h_min + (h_max - h_min) / 2.0,
            y_min + (y_max - y_min) / 2.0,
        )),
        SetupMethod::Manual => commands.push(travel(0.0, 0.0)),
    }

    if request.verification_mode == VerificationMode::LaserSpot {
        commands.push(BoundaryCommand::LaserOff);
    }

    commands.push(BoundaryCommand::End);

    debug!(
        lines = commands.len(),
        mode = %request.verification_mode,
        setup = %request.setup_method,
        "generated boundary program"
    );
    Ok(BoundaryProgram::new(commands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use originkit_core::error::Error;

    fn flat_range() -> WorkRange {
        WorkRange {
            min: MachinePoint::xy(0.0, 0.0),
            max: MachinePoint::xy(100.0, 50.0),
        }
    }

    fn request() -> BoundaryRequest {
        BoundaryRequest {
            work_range: Some(flat_range()),
            verification_mode: VerificationMode::Crosshair,
            is_rotate: false,
            setup_method: SetupMethod::Manual,
        }
    }

    #[test]
    fn test_missing_work_range_is_rejected() {
        let request = BoundaryRequest {
            work_range: None,
            ..request()
        };
        let err = generate_boundary_program(&request).unwrap_err();
        assert!(matches!(
            err,
            Error::WorkRange(WorkRangeError::Missing)
        ));
    }

    #[test]
    fn test_non_finite_bound_is_rejected() {
        let mut bad = flat_range();
        bad.max.x = Some(f64::NAN);
        let request = BoundaryRequest {
            work_range: Some(bad),
            ..request()
        };
        let err = generate_boundary_program(&request).unwrap_err();
        assert!(matches!(
            err,
            Error::WorkRange(WorkRangeError::NonFiniteBound {
                axis: "X",
                bound: "max"
            })
        ));
    }

    #[test]
    fn test_rotary_range_without_b_is_rejected() {
        // an X-only range cannot drive a rotary trace
        let request = BoundaryRequest {
            is_rotate: true,
            ..request()
        };
        let err = generate_boundary_program(&request).unwrap_err();
        assert!(matches!(
            err,
            Error::WorkRange(WorkRangeError::NonFiniteBound {
                axis: "B",
                bound: "min"
            })
        ));
    }

    #[test]
    fn test_determinism() {
        let a = generate_boundary_program(&request()).unwrap();
        let b = generate_boundary_program(&request()).unwrap();
        assert_eq!(a.to_text(), b.to_text());
    }
}
