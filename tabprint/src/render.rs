//! Output modes for the CLI

use anyhow::Context;
use tabprintlib::{parse_print, DataSource, Table};

/// How fetched tables are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Box-drawing table through the print command
    #[default]
    Table,
    /// Rows as a pretty-printed JSON array
    Json,
}

impl OutputMode {
    /// Parse the `--output` value. Unknown names fall back to table output.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputMode::Json,
            _ => OutputMode::Table,
        }
    }
}

/// Render a table as a JSON array of row objects, keeping column order
pub fn render_json(table: &Table) -> anyhow::Result<String> {
    let mut output = serde_json::to_string_pretty(table).context("serializing table")?;
    output.push('\n');
    Ok(output)
}

/// Fetch the table named by a `print <table>` line and render it as JSON
pub fn print_json(source: &impl DataSource, line: &str) -> anyhow::Result<String> {
    let table_name = parse_print(line)?;
    let table = source.table_data(table_name)?;
    table.validate()?;
    render_json(&table)
}
