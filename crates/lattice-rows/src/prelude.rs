//! Prelude module for Lattice Rows.
//!
//! ```ignore
//! use lattice_rows::prelude::*;
//! ```

pub use crate::config::ScreenConfig;
pub use crate::model::{DataProvider, HostView, ListBinding, RowIndex};
pub use crate::screen::{Record, RecordScreen, TextRow};
pub use crate::{BindingError, BindingResult, ErrorKind, Signal};
