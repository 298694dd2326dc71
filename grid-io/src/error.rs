//! FILENAME: grid-io/src/error.rs

use catalog::CatalogError;
use grid_engine::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Export failed: {0}")]
    Grid(#[from] GridError),
}
