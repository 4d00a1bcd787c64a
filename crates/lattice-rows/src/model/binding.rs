//! Generic list binding.
//!
//! `ListBinding<Item, V>` adapts an in-memory, ordered collection of
//! arbitrary items to the [`DataProvider`] queries a host list view makes,
//! and tells the view to refresh whenever the collection is replaced.
//!
//! Rows are produced by a caller-supplied row factory, a closure receiving
//! the host view and one item. The binding never inspects rows; it hands
//! back whatever the factory returns.

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use lattice_rows_core::logging::targets;
use lattice_rows_core::{BindingError, BindingResult, PerfSpan, Signal, ThreadAffinity};

use super::index::RowIndex;
use super::traits::{DataProvider, HostView};

/// A list binding always presents a single flat section.
pub const SECTION_COUNT: usize = 1;

/// Type alias for a row factory.
pub type RowFactory<V, Item> = Arc<dyn Fn(&V, &Item) -> <V as HostView>::Row + Send + Sync>;

/// Binds a list of items to a host view.
///
/// The binding is created once per screen and shared through an `Arc`:
/// the screen owner holds it strongly, the host view holds it weakly as
/// its data provider, and the binding holds the view weakly. Dropping the
/// screen tears everything down without reference cycles.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use lattice_rows::model::{DataProvider, ListBinding, RowIndex};
///
/// let binding = Arc::new(ListBinding::new());
/// binding.set_host_view(&table_view);
/// binding.set_row_factory(|view: &TableView, name: &String| view.text_row(name));
/// binding.set_items(vec!["Apple".to_string(), "Banana".to_string()]);
///
/// assert_eq!(binding.row_count(0), 2);
/// let row = binding.row_at(RowIndex::new(0, 1))?;
/// ```
///
/// All operations must run on the thread that created the binding; debug
/// builds assert this.
pub struct ListBinding<Item, V: HostView> {
    items: RwLock<Arc<Vec<Item>>>,
    host_view: RwLock<Option<Weak<V>>>,
    row_factory: RwLock<Option<RowFactory<V, Item>>>,
    items_replaced: Signal<usize>,
    affinity: ThreadAffinity,
}

impl<Item, V> ListBinding<Item, V>
where
    Item: Send + Sync + 'static,
    V: HostView + 'static,
{
    /// Creates an empty, unconfigured binding.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a binding holding `items`.
    ///
    /// No refresh is issued since no view can be bound yet.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(Arc::new(items)),
            host_view: RwLock::new(None),
            row_factory: RwLock::new(None),
            items_replaced: Signal::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Replaces the entire collection and refreshes the host view.
    ///
    /// The new items are stored and every internal lock is released before
    /// the view's [`reload_data`](HostView::reload_data) runs, so the view
    /// observes the new collection when it queries back. The view is
    /// refreshed exactly once. Afterwards [`items_replaced`](Self::items_replaced)
    /// is emitted with the new item count.
    ///
    /// If no view is bound, or the view has been dropped, the items are
    /// still stored and only the signal fires.
    pub fn set_items(&self, items: Vec<Item>) {
        self.affinity
            .debug_assert_same_thread_with_msg("ListBinding::set_items called off the view thread");

        let count = items.len();
        let previous = std::mem::replace(&mut *self.items.write(), Arc::new(items));
        drop(previous);
        tracing::debug!(target: targets::BINDING, count, "items replaced");

        match self.host_view() {
            Some(view) => {
                let _perf = PerfSpan::new("ListBinding::reload_data");
                view.reload_data();
            }
            None => {
                tracing::debug!(target: targets::BINDING, "no live host view, skipping refresh");
            }
        }

        self.items_replaced.emit(count);
    }

    /// Binds the view this binding feeds.
    ///
    /// Only a weak reference to `view` is kept. As a side effect the
    /// binding registers itself as the view's data provider, so the view
    /// calls back into it for counts and rows.
    pub fn set_host_view(self: &Arc<Self>, view: &Arc<V>) {
        self.affinity.debug_assert_same_thread_with_msg(
            "ListBinding::set_host_view called off the view thread",
        );

        *self.host_view.write() = Some(Arc::downgrade(view));

        let this: Weak<Self> = Arc::downgrade(self);
        let provider: Weak<dyn DataProvider<Row = V::Row>> = this;
        view.set_data_provider(provider);
        tracing::debug!(target: targets::BINDING, "host view bound");
    }

    /// Installs the row factory.
    ///
    /// The factory is called from [`row_at`](DataProvider::row_at) with the
    /// host view and the item at the requested row. The factory may replace
    /// this binding's items; the row being built keeps the collection it was
    /// requested from.
    pub fn set_row_factory<F>(&self, factory: F)
    where
        F: Fn(&V, &Item) -> V::Row + Send + Sync + 'static,
    {
        self.affinity.debug_assert_same_thread();
        *self.row_factory.write() = Some(Arc::new(factory));
    }

    /// Returns `true` once a row factory is installed.
    pub fn has_row_factory(&self) -> bool {
        self.row_factory.read().is_some()
    }

    /// Returns the bound view if it is still alive.
    pub fn host_view(&self) -> Option<Arc<V>> {
        self.host_view.read().as_ref().and_then(Weak::upgrade)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the binding holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a snapshot of the current items.
    ///
    /// The snapshot is unaffected by later calls to [`set_items`](Self::set_items).
    pub fn items(&self) -> Arc<Vec<Item>> {
        Arc::clone(&self.items.read())
    }

    /// Signal emitted with the new item count after every [`set_items`](Self::set_items).
    pub fn items_replaced(&self) -> &Signal<usize> {
        &self.items_replaced
    }

    fn reject(&self, err: BindingError, index: RowIndex) -> BindingError {
        tracing::debug!(target: targets::BINDING, %index, error = %err, "row request rejected");
        err
    }
}

impl<Item, V> Default for ListBinding<Item, V>
where
    Item: Send + Sync + 'static,
    V: HostView + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Item, V> DataProvider for ListBinding<Item, V>
where
    Item: Send + Sync + 'static,
    V: HostView + 'static,
{
    type Row = V::Row;

    fn section_count(&self) -> usize {
        self.affinity.debug_assert_same_thread();
        SECTION_COUNT
    }

    /// Returns the item count. `section` is accepted for interface
    /// compatibility and ignored.
    fn row_count(&self, _section: usize) -> usize {
        self.affinity.debug_assert_same_thread();
        self.items.read().len()
    }

    fn row_at(&self, index: RowIndex) -> BindingResult<V::Row> {
        self.affinity
            .debug_assert_same_thread_with_msg("ListBinding::row_at called off the view thread");

        let factory = self
            .row_factory
            .read()
            .clone()
            .ok_or_else(|| self.reject(BindingError::RowFactoryUnset, index))?;

        if index.section() >= SECTION_COUNT {
            return Err(self.reject(
                BindingError::section_out_of_range(index.section(), SECTION_COUNT),
                index,
            ));
        }

        // Snapshot so no lock is held while the factory runs.
        let items = self.items();
        let Some(item) = items.get(index.row()) else {
            let rows = items.len();
            return Err(self.reject(BindingError::row_out_of_range(index.row(), rows), index));
        };

        let Some(view) = self.host_view() else {
            return Err(self.reject(BindingError::HostViewUnset, index));
        };

        tracing::trace!(target: targets::BINDING, %index, "configuring row");
        Ok(factory(&*view, item))
    }
}

impl<Item, V: HostView> std::fmt::Debug for ListBinding<Item, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListBinding")
            .field("len", &self.items.read().len())
            .field(
                "host_view_bound",
                &self
                    .host_view
                    .read()
                    .as_ref()
                    .is_some_and(|view| view.strong_count() > 0),
            )
            .field("has_row_factory", &self.row_factory.read().is_some())
            .finish()
    }
}
