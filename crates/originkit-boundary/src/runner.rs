//! Generate-then-upload orchestration with newest-request-wins semantics.

use crate::generator::{generate_boundary_program, BoundaryRequest};
use crate::transport::BoundaryTransport;
use originkit_core::error::Result;
use parking_lot::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

/// How one boundary run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program was uploaded and is the machine's current boundary
    Uploaded,
    /// The upload completed, but a newer request had already superseded
    /// this one; its result must not be treated as current
    Superseded,
}

/// Runs boundary verifications against a transport.
///
/// There is no cancellation primitive for an in-flight upload; issuing a
/// new request simply supersedes the old one logically. Each run takes a
/// generation number under the lock, and a completion whose generation is
/// no longer the latest is reported as [`RunOutcome::Superseded`] so
/// callers never overwrite state derived from a newer request.
pub struct BoundaryRunner<T> {
    transport: T,
    latest_generation: Mutex<u64>,
}

impl<T: BoundaryTransport> BoundaryRunner<T> {
    /// Create a runner around a transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            latest_generation: Mutex::new(0),
        }
    }

    /// Access the wrapped transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generate the program for `request` and upload it.
    ///
    /// Generation failures (invalid work range) and transport failures
    /// both surface as errors; neither touches any calibration state, so
    /// the operator may retry as-is.
    pub async fn run(&self, request: &BoundaryRequest) -> Result<RunOutcome> {
        info!(work_range = ?request.work_range, rotate = request.is_rotate, "running boundary");
        let program = generate_boundary_program(request)?;

        let request_id = Uuid::new_v4();
        let generation = {
            let mut latest = self.latest_generation.lock();
            *latest += 1;
            *latest
        };

        info!(%request_id, generation, "uploading boundary program");
        match self.transport.upload(&program).await {
            Ok(()) => {
                if *self.latest_generation.lock() != generation {
                    info!(%request_id, "boundary upload finished after being superseded");
                    Ok(RunOutcome::Superseded)
                } else {
                    info!(%request_id, "boundary program uploaded");
                    Ok(RunOutcome::Uploaded)
                }
            }
            Err(err) => {
                warn!(%request_id, error = %err, "boundary upload failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::BoundaryProgram;
    use async_trait::async_trait;
    use originkit_core::data::{MachinePoint, SetupMethod, VerificationMode, WorkRange};
    use originkit_core::error::TransportError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn request() -> BoundaryRequest {
        BoundaryRequest {
            work_range: Some(WorkRange {
                min: MachinePoint::xy(0.0, 0.0),
                max: MachinePoint::xy(100.0, 50.0),
            }),
            verification_mode: VerificationMode::Crosshair,
            is_rotate: false,
            setup_method: SetupMethod::Manual,
        }
    }

    #[derive(Default)]
    struct CountingTransport {
        uploads: AtomicUsize,
    }

    #[async_trait]
    impl BoundaryTransport for CountingTransport {
        async fn upload(&self, _program: &BoundaryProgram) -> Result<()> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl BoundaryTransport for FailingTransport {
        async fn upload(&self, _program: &BoundaryProgram) -> Result<()> {
            Err(TransportError::Rejected {
                message: "firmware busy".to_string(),
            }
            .into())
        }
    }

    /// Blocks the first upload until released; later uploads pass through.
    struct GatedTransport {
        gate: Notify,
        gated: AtomicUsize,
    }

    #[async_trait]
    impl BoundaryTransport for GatedTransport {
        async fn upload(&self, _program: &BoundaryProgram) -> Result<()> {
            if self.gated.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_uploads_once() {
        let runner = BoundaryRunner::new(CountingTransport::default());
        let outcome = runner.run(&request()).await.unwrap();
        assert_eq!(outcome, RunOutcome::Uploaded);
        assert_eq!(runner.transport().uploads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_range_never_reaches_transport() {
        let runner = BoundaryRunner::new(CountingTransport::default());
        let bad = BoundaryRequest {
            work_range: None,
            ..request()
        };
        assert!(runner.run(&bad).await.unwrap_err().is_work_range_error());
        assert_eq!(runner.transport().uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let runner = BoundaryRunner::new(FailingTransport);
        let err = runner.run(&request()).await.unwrap_err();
        assert!(err.is_transport_error());
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_in_flight_upload() {
        let runner = Arc::new(BoundaryRunner::new(GatedTransport {
            gate: Notify::new(),
            gated: AtomicUsize::new(0),
        }));

        let first = {
            let runner = runner.clone();
            tokio::spawn(async move { runner.run(&request()).await })
        };
        // wait until the first upload is parked on the gate
        while runner.transport().gated.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // the second request completes immediately and becomes current
        assert_eq!(runner.run(&request()).await.unwrap(), RunOutcome::Uploaded);

        runner.transport().gate.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), RunOutcome::Superseded);
    }
}
