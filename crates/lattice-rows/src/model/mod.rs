//! Model/View binding for Lattice Rows.
//!
//! This module separates the data a screen holds from the widget that
//! displays it. The widget (the *host view*) only knows how to ask a
//! [`DataProvider`] for counts and rows; a [`ListBinding`] answers those
//! questions from a plain `Vec` and a row factory closure.
//!
//! # Core Types
//!
//! - `RowIndex`: identifies a row by section and row
//! - `DataProvider`: the queries a host view makes
//! - `HostView`: the hooks a binding calls on its view
//! - `ListBinding`: the generic `Vec`-backed provider
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  set_items   ┌─────────────┐  reload_data  ┌─────────────┐
//! │ Screen owner │─────────────>│ ListBinding │──────────────>│  Host view  │
//! └──────────────┘              └─────────────┘               └─────────────┘
//!                                      ^    row_count / row_at      │
//!                                      └────────────────────────────┘
//! ```
//!
//! The binding and the view reference each other weakly; the screen owner
//! holds both strongly.

mod binding;
mod index;
mod traits;

pub use binding::{ListBinding, RowFactory, SECTION_COUNT};
pub use index::RowIndex;
pub use traits::{DataProvider, HostView};
