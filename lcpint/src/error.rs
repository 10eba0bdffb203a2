//! Fatal pipeline errors

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use lcpint_core::LcpError;
use thiserror::Error;

/// Errors that abort a run
///
/// Per-core encoding failures are not represented here; they are logged and
/// skipped by the encoder.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot open input file {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("cannot read input file {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("could not open output file '{}' for writing: {source}", path.display())]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error("failed writing to '{target}': {source}")]
    WriteOutput { target: String, source: io::Error },

    #[error("memory allocation failed for {what} ({bytes} bytes)")]
    Allocation { what: &'static str, bytes: usize },

    #[error("cannot load alphabet from {}: {reason}", path.display())]
    AlphabetConfig { path: PathBuf, reason: String },

    #[error(transparent)]
    Lcp(#[from] LcpError),
}

impl PipelineError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
