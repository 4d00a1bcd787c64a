//! Core systems for Lattice Rows.
//!
//! This crate provides the pieces a list binding is built from:
//!
//! - **Errors**: [`BindingError`] and its [`ErrorKind`] classification
//! - **Signal/Slot System**: direct, type-safe change notification
//! - **Thread Affinity**: debug checks that a binding stays on its view's thread
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal Example
//!
//! ```
//! use lattice_rows_core::Signal;
//!
//! let items_replaced = Signal::<usize>::new();
//!
//! let conn_id = items_replaced.connect(|count| {
//!     println!("Binding now holds {} items", count);
//! });
//!
//! items_replaced.emit(10);
//! items_replaced.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{BindingError, BindingResult, ErrorKind};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
