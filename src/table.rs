//! Row-oriented table assembled from heterogeneous JSON records.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Column used for flattened records that are not key/value mappings.
const SCALAR_COLUMN: &str = "value";

/// Rows printed by the `Display` impl before eliding the rest.
const HEAD_ROWS: usize = 5;

/// A table whose columns are the union of keys observed across all records.
///
/// Every row has exactly `columns.len()` cells; a record that lacks a column
/// holds `Value::Null` there. Row order equals record order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from a flat record sequence.
    ///
    /// Object records contribute their keys to the column union in the order
    /// they are first observed. A non-object record keeps its value under a
    /// single `value` column, so row count always equals record count. An
    /// empty input yields a table with zero rows and zero columns.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            match record {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !columns.iter().any(|column| column == key) {
                            columns.push(key.clone());
                        }
                    }
                }
                _ => {
                    if !columns.iter().any(|column| column == SCALAR_COLUMN) {
                        columns.push(SCALAR_COLUMN.to_string());
                    }
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|record| match record {
                Value::Object(mut map) => columns
                    .iter()
                    .map(|column| map.remove(column).unwrap_or(Value::Null))
                    .collect(),
                other => columns
                    .iter()
                    .map(|column| {
                        if column == SCALAR_COLUMN {
                            other.clone()
                        } else {
                            Value::Null
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// (rows, columns), like a dataframe shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` under the named column, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "(empty table)");
        }

        let head: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(HEAD_ROWS)
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                head.iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, name) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:<width$}", name, width = widths[i])?;
        }
        for row in &head {
            writeln!(f)?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:<width$}", cell, width = widths[i])?;
            }
        }
        if self.rows.len() > HEAD_ROWS {
            writeln!(f)?;
            write!(f, "... {} more rows", self.rows.len() - HEAD_ROWS)?;
        }
        Ok(())
    }
}
