//! FILENAME: grid-io/src/lib.rs
//! Record grid input and output.
//!
//! Reads record snapshots and grid definitions from JSON and writes CSV
//! exports to disk. Fetching the catalog is the host's job; this crate
//! starts from the fetched text.

mod error;
mod export_writer;
mod snapshot_reader;

pub use error::ExchangeError;
pub use export_writer::save_export;
pub use snapshot_reader::{
    load_catalog_details, load_snapshot, parse_catalog_details, parse_snapshot,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use grid_engine::{GridDefinition, GridError, GridSession};

/// Parses a grid definition. Omitted fields take their defaults.
pub fn parse_definition(json: &str) -> Result<GridDefinition, ExchangeError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_definition(path: &Path) -> Result<GridDefinition, ExchangeError> {
    let json = fs::read_to_string(path)?;
    parse_definition(&json)
}

pub fn save_definition(definition: &GridDefinition, path: &Path) -> Result<(), ExchangeError> {
    let json = serde_json::to_string_pretty(definition)?;
    fs::write(path, json)?;
    Ok(())
}

/// Exports the session's selection into `dir`.
/// Returns `Ok(None)` and writes nothing when the selection is empty.
pub fn export_selection(
    session: &GridSession,
    dir: &Path,
) -> Result<Option<PathBuf>, ExchangeError> {
    match session.export() {
        Ok(export) => save_export(&export, dir).map(Some),
        Err(GridError::EmptySelection) => {
            log::debug!("export skipped: selection is empty");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Opens a session from a snapshot file and a definition file.
pub fn open_session(snapshot: &Path, definition: &Path) -> Result<GridSession, ExchangeError> {
    let definition = load_definition(definition)?;
    let store = load_snapshot(snapshot)?;
    Ok(GridSession::new(Arc::new(store), definition))
}
