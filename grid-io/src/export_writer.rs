//! FILENAME: grid-io/src/export_writer.rs

use std::fs;
use std::path::{Path, PathBuf};

use grid_engine::CsvExport;

use crate::ExchangeError;

/// Writes the export into `dir` under its own filename and returns the path.
pub fn save_export(export: &CsvExport, dir: &Path) -> Result<PathBuf, ExchangeError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(&export.filename);
    fs::write(&path, export.content.as_bytes())?;
    log::info!("wrote {} rows to {:?}", export.row_count, path);
    Ok(path)
}
