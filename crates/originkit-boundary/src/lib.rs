//! # OriginKit Boundary
//!
//! Boundary verification: given the rectangular work range of a job,
//! deterministically emit the command program that traces it on the
//! physical machine, and ship that program to the controller.
//!
//! - `program`: typed command records and their byte-exact text form
//! - `generator`: the fixed-order boundary program generator
//! - `transport`: async upload seam to the controller
//! - `runner`: generate-then-upload with newest-request-wins semantics

pub mod generator;
pub mod program;
pub mod runner;
pub mod transport;

pub use generator::{generate_boundary_program, BoundaryRequest};
pub use program::{BoundaryCommand, BoundaryProgram, HorizontalAxis, BOUNDARY_FEED_RATE};
pub use runner::{BoundaryRunner, RunOutcome};
pub use transport::{BoundaryTransport, FileTransport};
