use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use qualitab_core::{CellValue, Column, Table};

use crate::errors::IngestError;
use crate::options::LoadOptions;

/// Load a delimited file into a [`Table`].
///
/// The first record is the header; every following record must carry the
/// same field count. An empty file loads as the empty table, a header-only
/// file as a zero-row table with declared columns.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Table, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(Table::empty()),
    };

    let names: Vec<String> = header
        .iter()
        .map(|field| field.trim().to_string())
        .collect();
    for (position, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(IngestError::EmptyColumnName(position + 1));
        }
    }

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];
    for (index, record) in records.enumerate() {
        let record = record?;
        if record.len() != names.len() {
            return Err(IngestError::MalformedRow {
                row: index + 1,
                expected: names.len(),
                found: record.len(),
            });
        }
        for (column, field) in record.iter().enumerate() {
            cells[column].push(parse_cell(field, options));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();

    Ok(Table::from_columns(columns)?)
}

/// Tag one field: missing token, boolean literal, integer, float, then text.
fn parse_cell(field: &str, options: &LoadOptions) -> CellValue {
    let trimmed = field.trim();
    if options.is_missing_token(trimmed) {
        return CellValue::Missing;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return CellValue::Int(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return CellValue::Float(value);
    }
    CellValue::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_tagged_in_precedence_order() {
        let options = LoadOptions::default();

        assert_eq!(parse_cell("NA", &options), CellValue::Missing);
        assert_eq!(parse_cell("  ", &options), CellValue::Missing);
        assert_eq!(parse_cell("TRUE", &options), CellValue::Bool(true));
        assert_eq!(parse_cell("-42", &options), CellValue::Int(-42));
        assert_eq!(parse_cell("2.5", &options), CellValue::Float(2.5));
        assert_eq!(
            parse_cell("hello", &options),
            CellValue::Text("hello".to_string())
        );
    }

    #[test]
    fn custom_token_list_replaces_defaults() {
        let options = LoadOptions {
            missing_tokens: vec!["-".to_string()],
            ..LoadOptions::default()
        };

        assert_eq!(parse_cell("-", &options), CellValue::Missing);
        // "NA" is a literal string once the default list is replaced.
        assert_eq!(parse_cell("NA", &options), CellValue::Text("NA".to_string()));
        // "NaN" now parses as a float rather than a missing marker.
        match parse_cell("NaN", &options) {
            CellValue::Float(value) => assert!(value.is_nan()),
            other => panic!("expected float, got {other:?}"),
        }
    }
}
