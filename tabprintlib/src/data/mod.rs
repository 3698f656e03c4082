//! Data model: values, rows and tables.
//!
//! A [`Table`] is an ordered list of [`Row`]s that all share the same column
//! names in the same order. Each cell holds a [`Value`] whose `Display` text
//! is what ends up on screen.

pub mod row;
pub mod table;
pub mod value;

pub use row::Row;
pub use table::Table;
pub use value::Value;
