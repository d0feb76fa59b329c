//! CLI error type.

use hobart_data::DataError;
use hobart_output::{ExportError, ReportError};
use std::path::PathBuf;
use thiserror::Error;

/// Anything that ends a command with exit status 1.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Snapshot loading failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Report rendering or writing failed
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Config file could not be parsed
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory held no snapshots
    #[error("No snapshots found in {}", .0.display())]
    EmptyDirectory(PathBuf),
}
