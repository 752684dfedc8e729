use serde::{Deserialize, Serialize};

use qualitab_core::ColumnKind;

/// Fixed-shape quality report for one table.
///
/// `data_types` holds exactly one entry per column and `outliers` exactly
/// one entry per numeric column, both in table column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_rows: u64,
    pub total_columns: u64,
    pub missing_values: u64,
    pub duplicate_rows: u64,
    pub data_types: Vec<ColumnTypeEntry>,
    pub outliers: Vec<OutlierEntry>,
}

/// Inferred type tag for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTypeEntry {
    pub column: String,
    pub kind: ColumnKind,
}

/// Outlier count for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierEntry {
    pub column: String,
    pub count: u64,
}

/// Structured warning entry for diagnostics that did not block the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningItem {
    pub code: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Complete output of one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub report: QualityReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningItem>,
}
