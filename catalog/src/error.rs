//! FILENAME: catalog/src/error.rs

use thiserror::Error;

use crate::record::RecordId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    #[error("Record {0} has no categories")]
    NoCategories(RecordId),
}
