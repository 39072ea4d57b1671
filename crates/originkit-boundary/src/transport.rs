//! Transport seam between boundary generation and the physical machine.
//!
//! The controller consumes boundary programs as opaque files, so the
//! provided transport persists the program text to a path and lets the
//! surrounding system forward it. Anything that can ship a program
//! (serial bridge, network uploader, test double) implements
//! [`BoundaryTransport`].

use crate::program::BoundaryProgram;
use async_trait::async_trait;
use originkit_core::error::{Result, TransportError};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Asynchronous upload seam to the machine controller.
///
/// One upload has a single eventual completion: `Ok(())` when the
/// controller accepted the program, an error otherwise. Implementations
/// must not hold calibration state; a failed upload leaves the session
/// retryable as-is.
#[async_trait]
pub trait BoundaryTransport: Send + Sync {
    /// Ship a program to the controller
    async fn upload(&self, program: &BoundaryProgram) -> Result<()>;
}

/// Transport that persists the program text to a file.
#[derive(Debug, Clone)]
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    /// Write uploaded programs to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path for uploaded programs
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BoundaryTransport for FileTransport {
    async fn upload(&self, program: &BoundaryProgram) -> Result<()> {
        let text = program.to_text();
        trace!(path = %self.path.display(), bytes = text.len(), "writing boundary program");
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|err| TransportError::Io {
                message: err.to_string(),
            })?;
        Ok(())
    }
}
