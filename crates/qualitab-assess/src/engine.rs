use std::cmp::Ordering;
use std::collections::HashSet;

use qualitab_core::{CellValue, Column, ColumnKind, Table};

use crate::metrics::{Assessment, ColumnTypeEntry, OutlierEntry, QualityReport, WarningItem};

/// Multiplier applied to the IQR when placing outlier fences.
const FENCE_MULTIPLIER: f64 = 1.5;

/// Assess a table and produce its quality report.
///
/// Total for every well-formed table, including zero rows and zero columns.
/// A numeric column containing a value that cannot be ordered (NaN) is
/// skipped with a `type_mismatch` warning instead of failing the report.
/// The five metrics are independent, so the result is identical across
/// repeated invocations on the same table.
pub fn assess(table: &Table) -> Assessment {
    let mut warnings = Vec::new();

    let data_types: Vec<ColumnTypeEntry> = table
        .columns()
        .iter()
        .map(|column| ColumnTypeEntry {
            column: column.name.clone(),
            kind: infer_column_kind(column),
        })
        .collect();

    let outliers = table
        .columns()
        .iter()
        .zip(&data_types)
        .filter(|(_, entry)| entry.kind.is_numeric())
        .map(|(column, _)| OutlierEntry {
            column: column.name.clone(),
            count: count_outliers(column, &mut warnings),
        })
        .collect();

    let report = QualityReport {
        total_rows: table.num_rows() as u64,
        total_columns: table.num_columns() as u64,
        missing_values: count_missing(table),
        duplicate_rows: count_duplicate_rows(table),
        data_types,
        outliers,
    };

    Assessment { report, warnings }
}

/// Total count of missing markers, visiting every cell exactly once.
fn count_missing(table: &Table) -> u64 {
    table
        .columns()
        .iter()
        .flat_map(|column| column.cells.iter())
        .filter(|cell| cell.is_missing())
        .count() as u64
}

/// Count rows that repeat an earlier row, in a single hashed pass.
///
/// Rows are grouped by a structural key over their cell tuple; each group
/// of k identical rows contributes k - 1.
fn count_duplicate_rows(table: &Table) -> u64 {
    if table.num_columns() == 0 || table.num_rows() == 0 {
        return 0;
    }

    let mut seen = HashSet::with_capacity(table.num_rows());
    let mut duplicates = 0u64;

    for row in 0..table.num_rows() {
        let key = table
            .columns()
            .iter()
            .map(|column| escape_key_component(&cell_key(&column.cells[row])))
            .collect::<Vec<_>>()
            .join("|");
        if !seen.insert(key) {
            duplicates += 1;
        }
    }

    duplicates
}

/// Type-tagged key component so cells of different tags never compare
/// equal (`Int(1)` vs `Text("1")`) and missing only matches missing.
fn cell_key(cell: &CellValue) -> String {
    match cell {
        CellValue::Missing => "m:".to_string(),
        CellValue::Bool(value) => format!("b:{value}"),
        CellValue::Int(value) => format!("i:{value}"),
        CellValue::Float(value) => format!("f:{value}"),
        CellValue::Text(value) => format!("t:{value}"),
    }
}

fn escape_key_component(value: &str) -> String {
    value.replace('\\', "\\\\").replace('|', "\\|")
}

/// Classify a column from the tags of its non-missing cells.
///
/// All integers -> integer; integers mixed with floats -> float; all
/// booleans -> boolean; anything else, including an all-missing column,
/// carries no usable numeric evidence and classifies as text.
fn infer_column_kind(column: &Column) -> ColumnKind {
    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    let mut has_text = false;

    for cell in &column.cells {
        match cell {
            CellValue::Missing => {}
            CellValue::Int(_) => has_int = true,
            CellValue::Float(_) => has_float = true,
            CellValue::Bool(_) => has_bool = true,
            CellValue::Text(_) => has_text = true,
        }
    }

    if has_text {
        return ColumnKind::Text;
    }
    if has_bool {
        if has_int || has_float {
            return ColumnKind::Text;
        }
        return ColumnKind::Boolean;
    }
    if has_float {
        return ColumnKind::Float;
    }
    if has_int {
        return ColumnKind::Integer;
    }
    ColumnKind::Text
}

/// IQR fence outlier count for a numeric column.
///
/// Fewer than two non-missing values leaves the quantiles undefined and
/// yields zero. When the fences collapse (IQR = 0) nothing is strictly
/// outside them, so the count is zero as well.
fn count_outliers(column: &Column, warnings: &mut Vec<WarningItem>) -> u64 {
    let values: Vec<f64> = column
        .cells
        .iter()
        .filter_map(|cell| cell.as_f64())
        .collect();

    if values.len() < 2 {
        return 0;
    }

    if values.iter().any(|value| value.is_nan()) {
        warnings.push(WarningItem {
            code: "type_mismatch".to_string(),
            path: column.name.clone(),
            message: "numeric column contains a value that cannot be ordered".to_string(),
            hint: Some("add the token to the missing-value list or clean the source".to_string()),
        });
        return 0;
    }

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - FENCE_MULTIPLIER * iqr;
    let upper = q3 + FENCE_MULTIPLIER * iqr;

    values
        .iter()
        .filter(|&&value| value < lower || value > upper)
        .count() as u64
}

/// Linear-interpolation quantile over a sorted, non-empty sequence:
/// rank = p * (n - 1), interpolated between the bracketing order statistics.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        return sorted[low];
    }
    sorted[low] + (sorted[high] - sorted[low]) * (rank - low as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
    }

    #[test]
    fn quantile_of_single_value_is_that_value() {
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
        assert_eq!(quantile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn cell_keys_distinguish_tags() {
        assert_ne!(
            cell_key(&CellValue::Int(1)),
            cell_key(&CellValue::Text("1".to_string()))
        );
        assert_ne!(
            cell_key(&CellValue::Int(1)),
            cell_key(&CellValue::Float(1.0))
        );
        assert_ne!(
            cell_key(&CellValue::Missing),
            cell_key(&CellValue::Text(String::new()))
        );
    }

    #[test]
    fn key_components_escape_the_separator() {
        assert_eq!(escape_key_component("a|b"), "a\\|b");
        assert_eq!(escape_key_component("a\\b"), "a\\\\b");
    }
}
