use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::ReportError;
use crate::metrics::QualityReport;

/// Title line of the rendered report.
pub const REPORT_TITLE: &str = "Data Quality Report";

/// Render the fixed text layout: title line, then each field in declaration
/// order; mapping fields as a name line plus one indented `key: value` line
/// per entry in column order; blank line between fields.
pub fn render_report(report: &QualityReport) -> String {
    let mut lines = Vec::new();

    lines.push(REPORT_TITLE.to_string());
    lines.push(String::new());
    lines.push(format!("total_rows: {}", report.total_rows));
    lines.push(String::new());
    lines.push(format!("total_columns: {}", report.total_columns));
    lines.push(String::new());
    lines.push(format!("missing_values: {}", report.missing_values));
    lines.push(String::new());
    lines.push(format!("duplicate_rows: {}", report.duplicate_rows));
    lines.push(String::new());

    lines.push("data_types:".to_string());
    for entry in &report.data_types {
        lines.push(format!("  {}: {}", entry.column, entry.kind));
    }
    lines.push(String::new());

    lines.push("outliers:".to_string());
    for entry in &report.outliers {
        lines.push(format!("  {}: {}", entry.column, entry.count));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Render and persist the report.
///
/// The write is atomic (temp file, fsync, rename): the destination either
/// keeps its previous content or receives the complete new report, never a
/// partial file.
pub fn write_report(path: &Path, report: &QualityReport) -> Result<(), ReportError> {
    let rendered = render_report(report);
    write_bytes_atomic(path, rendered.as_bytes())
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|source| unwritable(path, source))?;
        }
    }

    let tmp_path = temp_path(path)?;
    let result: io::Result<()> = (|| {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, path)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                sync_dir(parent)?;
            }
        }
        Ok(())
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result.map_err(|source| unwritable(path, source))
}

fn unwritable(path: &Path, source: io::Error) -> ReportError {
    ReportError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    }
}

fn temp_path(path: &Path) -> Result<PathBuf, ReportError> {
    let file_name = path.file_name().ok_or_else(|| ReportError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}
