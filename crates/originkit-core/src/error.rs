//! Error handling for OriginKit
//!
//! Provides error types for the calibration and boundary layers:
//! - Work-range errors (boundary generation rejected invalid input)
//! - Transport errors (uploading a program to the machine failed)
//!
//! An incomplete calibration pair is deliberately *not* an error: a pair
//! that is still missing coordinates is a normal, representable state, and
//! dependent operations no-op or clear their output instead of failing.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Work-range error type
///
/// Raised when boundary-program generation is asked to trace a work range
/// that is absent or carries non-finite bounds. Generation fails loudly
/// rather than substituting zeros: emitting plausible-looking but wrong
/// travel limits is worse than failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkRangeError {
    /// No work range was provided at all
    #[error("No work range available to trace")]
    Missing,

    /// One of the four scalar bounds is unset or non-finite
    #[error("Work range {bound} bound on {axis} is missing or not finite")]
    NonFiniteBound {
        /// The axis word the bound belongs to ("X", "Y" or "B").
        axis: &'static str,
        /// Which bound is bad ("min" or "max").
        bound: &'static str,
    },
}

/// Transport error type
///
/// Represents failures while uploading a boundary program to the physical
/// controller. Calibration/session state is unaffected by these; the
/// operator may retry the same request as-is.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// The controller rejected the uploaded program
    #[error("Upload rejected: {message}")]
    Rejected {
        /// The reason reported by the controller.
        message: String,
    },

    /// I/O failure while transferring the program
    #[error("Upload I/O failure: {message}")]
    Io {
        /// Description of the underlying I/O failure.
        message: String,
    },
}

/// Main error type for OriginKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Work-range validation error
    #[error(transparent)]
    WorkRange(#[from] WorkRangeError),

    /// Transport error
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Check if this is a work-range error
    pub fn is_work_range_error(&self) -> bool {
        matches!(self, Error::WorkRange(_))
    }

    /// Check if this is a transport error
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
