//! The table layout routine.
//!
//! Rendering runs in four stages:
//! 1. Measure: find the longest text and derive one uniform cell width
//! 2. Header: top border, centered column names, then a separator
//! 3. Body: centered values, separators between rows, bottom border
//! 4. Empty tables skip all of the above and render a notice box

use tracing::debug;

use super::border::{BorderChars, LineType};
use super::layout::{cell_width, push_centered};
use crate::data::{Row, Table};
use crate::Result;

/// Renders [`Table`]s as double-line box-drawing text.
///
/// The renderer holds no state between calls; rendering the same table twice
/// yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    chars: BorderChars,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `table` under the name `table_name`.
    ///
    /// Fails with [`PrintError::MalformedTable`](crate::PrintError::MalformedTable)
    /// before producing any text if the rows disagree on their columns.
    pub fn render(&self, table_name: &str, table: &Table) -> Result<String> {
        table.validate()?;

        let max_width = table.max_content_width();
        if max_width == 0 {
            debug!(table = table_name, "rendering empty table notice");
            return Ok(self.render_empty(table_name));
        }

        let width = cell_width(max_width);
        let columns = table.column_names();
        debug!(
            table = table_name,
            columns = columns.len(),
            rows = table.len(),
            cell_width = width,
            "rendering table"
        );

        let mut output = self.render_header(columns, width, !table.is_empty());
        output.push_str(&self.render_body(table.rows(), columns.len(), width));
        Ok(output)
    }

    /// Notice box for a table that is empty or missing.
    pub fn render_empty(&self, table_name: &str) -> String {
        let text = format!(
            "{v} Table '{}' is empty or does not exist {v}",
            table_name,
            v = self.chars.vertical
        );
        let inner = text.chars().count() - 2;

        let mut output = self.chars.plain_line(LineType::Top, inner);
        output.push_str(&text);
        output.push('\n');
        output.push_str(&self.chars.plain_line(LineType::Bottom, inner));
        output
    }

    /// Top border, column names and the line below them.
    ///
    /// The line below is a separator when body rows follow, otherwise it
    /// closes the table.
    pub fn render_header<S: AsRef<str>>(
        &self,
        columns: &[S],
        cell_width: usize,
        has_body: bool,
    ) -> String {
        let mut output = self
            .chars
            .horizontal_line(LineType::Top, columns.len(), cell_width);

        for name in columns {
            output.push(self.chars.vertical);
            push_centered(&mut output, name.as_ref(), cell_width);
        }
        output.push(self.chars.vertical);
        output.push('\n');

        let closing = if has_body {
            LineType::Middle
        } else {
            LineType::Bottom
        };
        output.push_str(
            &self
                .chars
                .horizontal_line(closing, columns.len(), cell_width),
        );
        output
    }

    /// Data rows with separators between them and the bottom border.
    pub fn render_body(&self, rows: &[Row], columns: usize, cell_width: usize) -> String {
        let separator = self
            .chars
            .horizontal_line(LineType::Middle, columns, cell_width);
        let mut output = String::new();

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                output.push_str(&separator);
            }
            output.push(self.chars.vertical);
            for value in row.values().iter().take(columns) {
                push_centered(&mut output, &value.to_string(), cell_width);
                output.push(self.chars.vertical);
            }
            output.push('\n');
        }

        output.push_str(
            &self
                .chars
                .horizontal_line(LineType::Bottom, columns, cell_width),
        );
        output
    }
}

/// Render `table` with the default renderer.
pub fn render_table(table_name: &str, table: &Table) -> Result<String> {
    TableRenderer::new().render(table_name, table)
}
