//! Command surface: the `print <table>` command.
//!
//! A [`Command`] first says whether it recognises an input line, then
//! processes it. [`PrintCommand`] fetches the named table from its
//! [`DataSource`], renders it and hands the text to its [`View`].

use tracing::{debug, warn};

use crate::error::PrintError;
use crate::render::TableRenderer;
use crate::source::DataSource;
use crate::view::View;
use crate::Result;

/// Keyword that starts a print command.
pub const PRINT_KEYWORD: &str = "print";

/// A command that can be dispatched from a line of input.
pub trait Command {
    /// Whether this command handles `input`.
    fn can_process(&self, input: &str) -> bool;

    /// Run the command for `input`.
    fn process(&mut self, input: &str) -> Result<()>;
}

/// Split on single spaces, dropping trailing empty tokens.
fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = input.split(' ').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Extract the table name from a `print <table>` line.
///
/// Exactly one argument is accepted; anything else is
/// [`PrintError::InvalidArguments`].
pub fn parse_print(input: &str) -> Result<&str> {
    let tokens = tokenize(input);
    match tokens.as_slice() {
        [_, table_name] => Ok(*table_name),
        _ => {
            let actual = tokens.len().saturating_sub(1);
            warn!(input, actual, "rejected print command");
            Err(PrintError::InvalidArguments {
                expected: 1,
                actual,
            })
        }
    }
}

/// Prints a table from `source` to `view`.
#[derive(Debug)]
pub struct PrintCommand<V, D> {
    view: V,
    source: D,
    renderer: TableRenderer,
}

impl<V: View, D: DataSource> PrintCommand<V, D> {
    pub fn new(view: V, source: D) -> Self {
        Self {
            view,
            source,
            renderer: TableRenderer::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Give back the view and the data source.
    pub fn into_parts(self) -> (V, D) {
        (self.view, self.source)
    }
}

impl<V: View, D: DataSource> Command for PrintCommand<V, D> {
    fn can_process(&self, input: &str) -> bool {
        input
            .strip_prefix(PRINT_KEYWORD)
            .is_some_and(|rest| rest.starts_with(' '))
    }

    fn process(&mut self, input: &str) -> Result<()> {
        let table_name = parse_print(input)?;
        debug!(table = table_name, "processing print command");

        let table = self.source.table_data(table_name)?;
        let rendered = self.renderer.render(table_name, &table)?;
        self.view.write(&rendered)
    }
}
