//! A record list screen.
//!
//! `RecordScreen` is the screen owner for the simplest useful list: a run
//! of [`Record`]s, each shown as a [`TextRow`] labelled with its id. It
//! creates the binding, points it at the host view, installs the row
//! factory, and assigns the records.

use std::sync::Arc;

use lattice_rows_core::logging::targets;

use crate::config::ScreenConfig;
use crate::model::{HostView, ListBinding};

/// A record identified by a single integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: u32,
}

impl Record {
    /// Creates a record.
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Creates records with ids `1..=count`.
    pub fn sequence(count: u32) -> Vec<Self> {
        (1..=count).map(Self::new).collect()
    }
}

/// A rendered row holding a single text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    /// Identifier of the row kind, used by hosts that pool rows.
    pub identifier: String,
    /// The label text.
    pub label: String,
}

impl TextRow {
    /// Creates a row.
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }
}

/// Owns the binding behind a list of records.
///
/// # Example
///
/// ```ignore
/// use lattice_rows::screen::RecordScreen;
/// use lattice_rows::config::ScreenConfig;
///
/// let screen = RecordScreen::new(ScreenConfig::default());
/// screen.load(&table_view);
/// // table_view now shows "CustomModel: 1" through "CustomModel: 10"
/// ```
pub struct RecordScreen<V: HostView<Row = TextRow>> {
    config: ScreenConfig,
    binding: Arc<ListBinding<Record, V>>,
}

impl<V> RecordScreen<V>
where
    V: HostView<Row = TextRow> + 'static,
{
    /// Creates the screen and its (still unbound) binding.
    pub fn new(config: ScreenConfig) -> Self {
        Self {
            config,
            binding: Arc::new(ListBinding::new()),
        }
    }

    /// Wires the binding to `view` and assigns the configured records.
    ///
    /// The view is bound first and the factory installed before any data
    /// arrives, so the refresh triggered by the assignment can already
    /// render rows.
    pub fn load(&self, view: &Arc<V>) {
        self.binding.set_host_view(view);

        let config = self.config.clone();
        self.binding.set_row_factory(move |_view, record: &Record| {
            TextRow::new(config.row_identifier.as_str(), config.label_for(record.id))
        });

        self.binding.set_items(Record::sequence(self.config.record_count));
        tracing::info!(
            target: targets::SCREEN,
            records = self.config.record_count,
            "record screen loaded"
        );
    }

    /// Replaces the records shown on the screen.
    pub fn show(&self, records: Vec<Record>) {
        self.binding.set_items(records);
    }

    /// Returns the screen's binding.
    pub fn binding(&self) -> &Arc<ListBinding<Record, V>> {
        &self.binding
    }

    /// Returns the screen's configuration.
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }
}

impl<V: HostView<Row = TextRow>> std::fmt::Debug for RecordScreen<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordScreen")
            .field("config", &self.config)
            .field("binding", &self.binding)
            .finish()
    }
}
