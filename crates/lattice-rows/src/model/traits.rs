//! Core traits connecting a list binding to its host view.
//!
//! The host view (a list or table widget owned by the UI toolkit) and the
//! binding meet at two traits:
//!
//! - [`DataProvider`]: what the view calls to learn how many rows there are
//!   and to obtain a rendered row for a given index.
//! - [`HostView`]: what the binding calls to register itself as the view's
//!   provider and to ask the view to refresh.

use std::sync::Weak;

use lattice_rows_core::BindingResult;

use super::index::RowIndex;

/// The capability a host view queries to populate itself.
///
/// # Example
///
/// ```ignore
/// use lattice_rows::model::{DataProvider, RowIndex};
/// use lattice_rows_core::{BindingError, BindingResult};
///
/// struct Names(Vec<String>);
///
/// impl DataProvider for Names {
///     type Row = String;
///
///     fn section_count(&self) -> usize {
///         1
///     }
///
///     fn row_count(&self, _section: usize) -> usize {
///         self.0.len()
///     }
///
///     fn row_at(&self, index: RowIndex) -> BindingResult<String> {
///         self.0
///             .get(index.row())
///             .cloned()
///             .ok_or(BindingError::row_out_of_range(index.row(), self.0.len()))
///     }
/// }
/// ```
pub trait DataProvider: Send + Sync {
    /// The toolkit's rendered row type.
    type Row;

    /// Returns the number of sections.
    fn section_count(&self) -> usize;

    /// Returns the number of rows in `section`.
    fn row_count(&self, section: usize) -> usize;

    /// Returns the rendered row at `index`.
    fn row_at(&self, index: RowIndex) -> BindingResult<Self::Row>;

    /// Returns the total number of rows across all sections.
    fn total_row_count(&self) -> usize {
        (0..self.section_count())
            .map(|section| self.row_count(section))
            .sum()
    }
}

/// The list-rendering widget a binding feeds.
///
/// The view keeps only a weak reference to its provider and the binding
/// keeps only a weak reference to the view; the screen owner holds both.
pub trait HostView: Send + Sync {
    /// The rendered row type this view displays.
    type Row;

    /// Registers the provider the view pulls counts and rows from.
    fn set_data_provider(&self, provider: Weak<dyn DataProvider<Row = Self::Row>>);

    /// Discards every visible row and queries the provider again.
    fn reload_data(&self);
}
