//! Table rendering: turn a [`Table`](crate::Table) into box-drawing text.
//!
//! - **layout**: cell width measurement and centering arithmetic
//! - **border**: glyph set and horizontal lines
//! - **renderer**: the `TableRenderer` that ties them together
//!
//! ## Example
//!
//! ```rust
//! use tabprintlib::{render_table, Row, Table};
//!
//! let table = Table::from(vec![Row::new().with("id", 1)]);
//! let text = render_table("test", &table).unwrap();
//! assert_eq!(text, "╔════╗\n║ id ║\n╠════╣\n║ 1  ║\n╚════╝\n");
//! ```

pub mod border;
pub mod layout;
pub mod renderer;

pub use border::{BorderChars, LineType};
pub use layout::{cell_width, padding};
pub use renderer::{render_table, TableRenderer};
