use thiserror::Error;

/// Core error type shared across Qualitab crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The table violates internal invariants.
    #[error("invalid table: {0}")]
    InvalidTable(String),
    /// Two columns share the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// Convenience alias for results returned by Qualitab crates.
pub type Result<T> = std::result::Result<T, Error>;
