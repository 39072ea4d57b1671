//! Typed boundary command records and their on-wire text form.
//!
//! A boundary program is an ordered, immutable sequence of commands,
//! serialized to newline-joined text only when the downstream transport
//! asks for it. The text form is consumed byte-for-byte by the machine
//! controller, so every `Display` impl here reproduces the exact command
//! verbs, parameter words, and comment syntax the firmware expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed traversal feed rate for boundary moves, in mm/min.
pub const BOUNDARY_FEED_RATE: u32 = 6000;

/// Which word carries the horizontal coordinate of a travel move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAxis {
    /// Linear X axis
    X,
    /// Rotary B axis, substituting for X on rotary stock
    B,
}

impl fmt::Display for HorizontalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Coordinate formatter matching the controller's expected number form:
/// shortest decimal representation, with zero (including negative zero
/// and anything that collapses to it) written as `0`.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One line of a boundary program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BoundaryCommand {
    /// Marker comment telling the controller positioning came from
    /// direct jogging with held motors rather than homing
    MotorHoldMode {
        mode: u8,
    },
    /// Turn the visual crosshair indicator on
    CrosshairOn,
    /// Arm the laser at the given power
    LaserOn {
        power: u32,
    },
    /// Prime linear-move mode at spot power before tracing
    TravelPrime {
        power: u32,
    },
    /// Switch to absolute positioning
    AbsoluteMode,
    /// Zero the work origin on X, Y, and B at the current position
    ZeroWorkOrigin,
    /// Traverse to a corner (or rest position) of the boundary
    Travel {
        axis: HorizontalAxis,
        power: u32,
        horizontal: f64,
        y: f64,
    },
    /// Disarm the laser
    LaserOff,
    /// End-of-program marker
    End,
}

impl fmt::Display for BoundaryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotorHoldMode { mode } => write!(f, ";motor_mode: {mode}"),
            Self::CrosshairOn => write!(f, "M2000 L13 P1"),
            Self::LaserOn { power } => write!(f, "M3 S{power}"),
            Self::TravelPrime { power } => write!(f, "G1 S{power} F{BOUNDARY_FEED_RATE}"),
            Self::AbsoluteMode => write!(f, "G90"),
            Self::ZeroWorkOrigin => write!(f, "G92 X0 Y0 B0"),
            Self::Travel {
                axis,
                power,
                horizontal,
                y,
            } => write!(
                f,
                "G1 S{power} {axis}{} Y{} F{BOUNDARY_FEED_RATE}",
                Coord(*horizontal),
                Coord(*y)
            ),
            Self::LaserOff => write!(f, "M5 S0"),
            Self::End => write!(f, ";End"),
        }
    }
}

/// An ordered, immutable boundary program.
///
/// Never mutated after generation; a new request produces a new program.
/// Identical inputs serialize to byte-identical text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryProgram {
    commands: Vec<BoundaryCommand>,
}

impl BoundaryProgram {
    /// Wrap a finished command sequence
    pub fn new(commands: Vec<BoundaryCommand>) -> Self {
        Self { commands }
    }

    /// The command records, in emission order
    pub fn commands(&self) -> &[BoundaryCommand] {
        &self.commands
    }

    /// Serialize to the newline-joined text the controller consumes.
    /// No reordering, deduplication, or optimization is applied.
    pub fn to_text(&self) -> String {
        self.commands
            .iter()
            .map(|command| command.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for BoundaryProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_text() {
        assert_eq!(
            BoundaryCommand::MotorHoldMode { mode: 3 }.to_string(),
            ";motor_mode: 3"
        );
        assert_eq!(BoundaryCommand::CrosshairOn.to_string(), "M2000 L13 P1");
        assert_eq!(BoundaryCommand::LaserOn { power: 0 }.to_string(), "M3 S0");
        assert_eq!(
            BoundaryCommand::TravelPrime { power: 10 }.to_string(),
            "G1 S10 F6000"
        );
        assert_eq!(BoundaryCommand::AbsoluteMode.to_string(), "G90");
        assert_eq!(BoundaryCommand::ZeroWorkOrigin.to_string(), "G92 X0 Y0 B0");
        assert_eq!(BoundaryCommand::LaserOff.to_string(), "M5 S0");
        assert_eq!(BoundaryCommand::End.to_string(), ";End");
    }

    #[test]
    fn test_travel_text() {
        let travel = BoundaryCommand::Travel {
            axis: HorizontalAxis::X,
            power: 0,
            horizontal: 100.0,
            y: 50.5,
        };
        assert_eq!(travel.to_string(), "G1 S0 X100 Y50.5 F6000");

        let travel = BoundaryCommand::Travel {
            axis: HorizontalAxis::B,
            power: 10,
            horizontal: 0.0,
            y: -12.25,
        };
        assert_eq!(travel.to_string(), "G1 S10 B0 Y-12.25 F6000");
    }

    #[test]
    fn test_coord_zero_forms() {
        assert_eq!(Coord(0.0).to_string(), "0");
        assert_eq!(Coord(-0.0).to_string(), "0");
        assert_eq!(Coord(0.5).to_string(), "0.5");
        assert_eq!(Coord(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_program_join() {
        let program = BoundaryProgram::new(vec![
            BoundaryCommand::AbsoluteMode,
            BoundaryCommand::End,
        ]);
        // newline-joined, no trailing newline
        assert_eq!(program.to_text(), "G90\n;End");
        assert_eq!(program.to_string(), program.to_text());
    }
}
