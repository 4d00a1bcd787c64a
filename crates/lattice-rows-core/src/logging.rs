//! Logging facilities for Lattice Rows.
//!
//! Lattice Rows uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_rows=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a filter such as
//! `lattice_rows::binding=trace` narrows output to a single subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_rows_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_rows_core::signal";
    /// List binding target.
    pub const BINDING: &str = "lattice_rows::binding";
    /// Screen configuration target.
    pub const CONFIG: &str = "lattice_rows::config";
    /// Screen wiring target.
    pub const SCREEN: &str = "lattice_rows::screen";
    /// Performance spans.
    pub const PERF: &str = "lattice_rows::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time host view refreshes.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_rows::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
