//! Quality assessment engine for Qualitab.
//!
//! [`assess`] derives a fixed-shape [`QualityReport`] from an in-memory
//! table: structural counts, missing-value density, duplicate rows,
//! per-column type classification, and IQR outlier counts for numeric
//! columns. [`render_report`] and [`write_report`] turn the report into the
//! human-readable text document.

pub mod engine;
pub mod errors;
pub mod metrics;
pub mod report;

pub use engine::assess;
pub use errors::ReportError;
pub use metrics::{Assessment, ColumnTypeEntry, OutlierEntry, QualityReport, WarningItem};
pub use report::{render_report, write_report};
