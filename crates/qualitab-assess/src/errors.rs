use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output path could not be created or written.
    #[error("cannot write report to {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output path has no usable file name.
    #[error("invalid report path: {}", .path.display())]
    InvalidPath { path: PathBuf },
}
