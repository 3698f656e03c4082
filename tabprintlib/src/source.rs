//! Data access: where tables come from.
//!
//! The renderer never touches storage directly. Callers hand a
//! [`DataSource`] to the command layer, which asks it for a table by name.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::data::{Row, Table};
use crate::error::PrintError;
use crate::Result;

/// Something that can look up a table's rows by name.
///
/// A table that does not exist comes back as an empty [`Table`], not as an
/// error; errors are reserved for failures of the source itself.
pub trait DataSource {
    fn table_data(&self, name: &str) -> Result<Table>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn table_data(&self, name: &str) -> Result<Table> {
        (**self).table_data(name)
    }
}

/// In-memory set of named tables.
///
/// Can be filled by hand or loaded from a JSON document shaped as
/// `{ "<table>": [ { "<column>": <value>, ... }, ... ] }`. Column order
/// follows key order in the document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    /// Builder: same as [`MemoryStore::insert`].
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }

    /// Table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load a store from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PrintError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let store = Self::from_json(&content)?;
        debug!(path = %path.display(), tables = store.tables.len(), "loaded data file");
        Ok(store)
    }

    /// Parse a store from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(entries) = document else {
            return Err(PrintError::InvalidData(
                "top level must be an object of tables".to_string(),
            ));
        };

        let mut store = MemoryStore::new();
        for (name, rows) in entries {
            let table = parse_table(&name, rows)?;
            store.insert(name, table);
        }
        Ok(store)
    }
}

impl DataSource for MemoryStore {
    fn table_data(&self, name: &str) -> Result<Table> {
        Ok(self.tables.get(name).cloned().unwrap_or_default())
    }
}

/// Convert one table's JSON array into rows.
fn parse_table(name: &str, rows: serde_json::Value) -> Result<Table> {
    let serde_json::Value::Array(items) = rows else {
        return Err(PrintError::InvalidData(format!(
            "table '{}' must be an array of rows",
            name
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            serde_json::Value::Object(fields) => Ok(fields.into_iter().collect::<Row>()),
            _ => Err(PrintError::InvalidData(format!(
                "row {} of table '{}' must be an object",
                idx, name
            ))),
        })
        .collect()
}
