//! Ordered collections of rows sharing one set of columns.

use serde::Serialize;

use super::row::Row;
use crate::error::PrintError;
use crate::Result;

/// An ordered sequence of rows.
///
/// Zero rows is a valid state: it stands for a table that is empty or does
/// not exist, and renders as a notice box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names of the first row, or none when the table has no rows.
    pub fn column_names(&self) -> &[String] {
        self.rows
            .first()
            .map(|row| row.column_names())
            .unwrap_or(&[])
    }

    /// Check that every row carries the first row's columns, in order.
    pub fn validate(&self) -> Result<()> {
        let expected = self.column_names();

        for (idx, row) in self.rows.iter().enumerate().skip(1) {
            let found = row.column_names();
            if found.len() != expected.len() {
                return Err(PrintError::MalformedTable {
                    row: idx,
                    reason: format!(
                        "expected {} columns, found {}",
                        expected.len(),
                        found.len()
                    ),
                });
            }
            if let Some((want, got)) = expected.iter().zip(found).find(|(w, g)| w != g) {
                return Err(PrintError::MalformedTable {
                    row: idx,
                    reason: format!("expected column '{}', found '{}'", want, got),
                });
            }
        }

        Ok(())
    }

    /// Longest text, in characters, over all column names and all values.
    ///
    /// Returns 0 for a table without rows.
    pub fn max_content_width(&self) -> usize {
        let names = self
            .column_names()
            .iter()
            .map(|name| name.chars().count());
        let values = self
            .rows
            .iter()
            .flat_map(|row| row.values().iter().map(|v| v.text_width()));

        names.chain(values).max().unwrap_or(0)
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table { rows }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
