use std::path::PathBuf;

use anyhow::Context;
use originkit::{
    init_logging, BoundaryRequest, BoundaryRunner, FileTransport, JobConfig, RunOutcome,
};
use tracing::{error, info};

/// Generate the boundary program for the configured job and write it to
/// a file the machine transport can pick up.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = originkit::VERSION, built = originkit::BUILD_DATE, "originkit");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("boundary.nc"));

    let config = match &config_path {
        Some(path) => JobConfig::load_from_file(path)
            .with_context(|| format!("loading job config from {}", path.display()))?,
        None => JobConfig::load_or_default().context("loading default job config")?,
    };

    if config.work_range.is_none() {
        error!("no work range configured; load a job before running its boundary");
    }

    let request = BoundaryRequest {
        work_range: config.work_range,
        verification_mode: config.verification_mode,
        is_rotate: config.stock.is_rotate,
        setup_method: config.setup_method,
    };

    let runner = BoundaryRunner::new(FileTransport::new(&output_path));
    match runner.run(&request).await? {
        RunOutcome::Uploaded => {
            info!(path = %output_path.display(), "boundary program written");
        }
        RunOutcome::Superseded => {
            info!("boundary program superseded before completion");
        }
    }

    Ok(())
}
