//! Core contracts and helpers for Qualitab.
//!
//! This crate defines the canonical table model shared by the loader, the
//! metrics engine, and the CLI: tagged cell values, inferred column kinds,
//! and the rectangular [`Table`] container.

pub mod error;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use table::{Column, Table};
pub use value::{CellValue, ColumnKind};
