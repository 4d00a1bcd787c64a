//! Record list demo.
//!
//! Binds ten records to a console "table view" that logs every row it
//! renders through `tracing`. Pass a TOML file path to override the screen
//! configuration.
//!
//! ```text
//! RUST_LOG=lattice_rows=debug cargo run --example record_list -- screen.toml
//! ```

use std::sync::{Arc, Weak};

use lattice_rows::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// Logs every row whenever it is asked to reload.
#[derive(Default)]
struct ConsoleListView {
    provider: Mutex<Option<Weak<dyn DataProvider<Row = TextRow>>>>,
}

impl HostView for ConsoleListView {
    type Row = TextRow;

    fn set_data_provider(&self, provider: Weak<dyn DataProvider<Row = TextRow>>) {
        *self.provider.lock() = Some(provider);
    }

    fn reload_data(&self) {
        let Some(provider) = self.provider.lock().as_ref().and_then(Weak::upgrade) else {
            return;
        };

        let rows = provider.row_count(0);
        tracing::info!(rows, "reloading list");
        for row in 0..rows {
            match provider.row_at(RowIndex::new(0, row)) {
                Ok(text_row) => {
                    tracing::info!(row, identifier = %text_row.identifier, label = %text_row.label, "row");
                }
                Err(err) => tracing::error!(row, %err, "failed to render row"),
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ScreenConfig::from_file(path)?,
        None => ScreenConfig::default(),
    };

    let view = Arc::new(ConsoleListView::default());
    let screen = RecordScreen::new(config);
    screen.load(&view);

    screen.show(vec![Record::new(100), Record::new(200)]);
    Ok(())
}
