//! FILENAME: grid-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("No records selected")]
    EmptySelection,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export encoding error: {0}")]
    Encoding(String),
}
