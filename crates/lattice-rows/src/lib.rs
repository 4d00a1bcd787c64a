//! Lattice Rows - generic list-to-view bindings.
//!
//! This is the main crate that re-exports the core APIs and provides the
//! model/view binding layer.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lattice_rows::prelude::*;
//!
//! let binding = Arc::new(ListBinding::new());
//! binding.set_host_view(&table_view);
//! binding.set_row_factory(|_view, record: &Record| {
//!     TextRow::new("UITableViewCell", format!("CustomModel: {}", record.id))
//! });
//! binding.set_items(Record::sequence(10));
//!
//! assert_eq!(binding.row_count(0), 10);
//! ```

pub use lattice_rows_core::*;

pub mod config;
pub mod model;
pub mod prelude;
pub mod screen;
