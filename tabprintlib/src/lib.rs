//! # tabprintlib
//!
//! Renders tabular data as fixed-width, box-drawing tables for terminal
//! output.
//!
//! ## Overview
//!
//! A [`Table`] is an ordered list of [`Row`]s sharing the same columns. The
//! [`TableRenderer`] lays it out with one uniform cell width, derived from
//! the longest column name or value anywhere in the table, and centers every
//! cell inside double-line borders:
//!
//! ```text
//! ╔════════════════╦════════════════╦════════════════╗
//! ║       id       ║      name      ║    password    ║
//! ╠════════════════╬════════════════╬════════════════╣
//! ║       1        ║ Steven Seagal  ║     123456     ║
//! ╠════════════════╬════════════════╬════════════════╣
//! ║       2        ║    Eva Song    ║     789456     ║
//! ╚════════════════╩════════════════╩════════════════╝
//! ```
//!
//! A table with no rows renders as a notice box instead.
//!
//! ## Features
//!
//! - **Pure rendering**: `render` is a function of its input, no I/O
//! - **Pluggable collaborators**: [`DataSource`] and [`View`] traits keep
//!   storage and display out of the renderer
//! - **Command surface**: [`PrintCommand`] handles `print <table>` lines
//! - **JSON data**: [`MemoryStore`] loads tables from a JSON document
//!
//! ## Example
//!
//! ```rust
//! use tabprintlib::{BufferView, Command, MemoryStore, PrintCommand, Row, Table};
//!
//! let users = Table::from(vec![
//!     Row::new().with("id", 1).with("name", "Eva Song"),
//! ]);
//! let store = MemoryStore::new().with_table("users", users);
//!
//! let mut print = PrintCommand::new(BufferView::new(), store);
//! assert!(print.can_process("print users"));
//! print.process("print users").unwrap();
//!
//! let (view, _) = print.into_parts();
//! assert!(view.contents().contains("Eva Song"));
//! ```

pub mod command;
pub mod data;
pub mod error;
pub mod render;
pub mod source;
pub mod view;

pub use command::{parse_print, Command, PrintCommand};
pub use data::{Row, Table, Value};
pub use error::PrintError;
pub use render::{render_table, TableRenderer};
pub use source::{DataSource, MemoryStore};
pub use view::{BufferView, View, WriterView};

/// Result type for tabprintlib operations
pub type Result<T> = std::result::Result<T, PrintError>;
