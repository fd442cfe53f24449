use std::io;
use thiserror::Error;

use crate::io::WriteError;
use crate::stats::StatsError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    #[error("Output error: {0}")]
    Write(#[from] WriteError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
