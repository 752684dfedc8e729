use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading a delimited file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A data row's field count does not match the header.
    #[error("malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The header contains an empty column name.
    #[error("empty column name at position {0}")]
    EmptyColumnName(usize),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Core(#[from] qualitab_core::Error),
}
