// SPDX-License-Identifier: PMPL-1.0-or-later

//! Minimal column-oriented table.

use indexmap::IndexMap;
use serde::Serialize;

use super::DataError;

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Number(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(values) => values.len(),
            Column::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell(&self, row: usize) -> Option<Cell> {
        match self {
            Column::Text(values) => values.get(row).cloned().map(Cell::Text),
            Column::Number(values) => values.get(row).copied().map(Cell::Number),
        }
    }

    fn select(&self, rows: &[usize]) -> Column {
        match self {
            Column::Text(values) => {
                Column::Text(rows.iter().filter_map(|&r| values.get(r).cloned()).collect())
            }
            Column::Number(values) => {
                Column::Number(rows.iter().filter_map(|&r| values.get(r).copied()).collect())
            }
        }
    }
}

/// A single table value, as exported in raw data views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{:.2}", n),
        }
    }
}

/// Named columns of equal length, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: IndexMap<String, Column>,
    rows: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn numbers(&self, name: &str) -> Result<&[f64], DataError> {
        match self.columns.get(name) {
            Some(Column::Number(values)) => Ok(values),
            Some(Column::Text(_)) => Err(DataError::NotNumeric(name.to_string())),
            None => Err(DataError::MissingColumn(name.to_string())),
        }
    }

    pub fn text(&self, name: &str) -> Result<&[String], DataError> {
        match self.columns.get(name) {
            Some(Column::Text(values)) => Ok(values),
            Some(Column::Number(_)) => Err(DataError::NotNumeric(name.to_string())),
            None => Err(DataError::MissingColumn(name.to_string())),
        }
    }

    /// Names of all numeric columns, in order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, column)| matches!(column, Column::Number(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Append (or replace) a column. The first column fixes the row count.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self, DataError> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(DataError::ColumnLength {
                column: name,
                expected: self.rows,
                actual: column.len(),
            });
        }
        self.rows = column.len();
        self.columns.insert(name, column);
        Ok(self)
    }

    /// A new frame holding only `rows`, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Frame {
        let rows: Vec<usize> = rows.iter().copied().filter(|&r| r < self.rows).collect();
        Frame {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.select(&rows)))
                .collect(),
            rows: rows.len(),
        }
    }

    /// Rows as ordered `column → value` records.
    pub fn records(&self) -> Vec<IndexMap<String, Cell>> {
        (0..self.rows)
            .map(|row| {
                self.columns
                    .iter()
                    .filter_map(|(name, column)| column.cell(row).map(|cell| (name.clone(), cell)))
                    .collect()
            })
            .collect()
    }
}
