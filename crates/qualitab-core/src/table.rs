use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Rectangular in-memory dataset: ordered columns with rows aligned by index.
///
/// The shape is validated once at construction; afterwards the table is
/// read-only, so it can be assessed concurrently from multiple threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, enforcing rectangularity and unique column names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.clone()) {
                return Err(Error::DuplicateColumn(column.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns[1..] {
                if column.cells.len() != expected {
                    return Err(Error::InvalidTable(format!(
                        "column '{}' has {} cells, expected {}",
                        column.name,
                        column.cells.len(),
                        expected
                    )));
                }
            }
        }

        Ok(Self { columns })
    }

    /// A table with no columns and therefore no rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Row count, derived from the first column.
    pub fn num_rows(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.cells.len())
            .unwrap_or(0)
    }

    /// Column count.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Cell at (row, column position), if in bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.columns
            .get(column)
            .and_then(|column| column.cells.get(row))
    }
}
