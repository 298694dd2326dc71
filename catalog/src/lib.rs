//! FILENAME: catalog/src/lib.rs
//! PURPOSE: Main library entry point for the record catalog.
//! CONTEXT: Shared record types and the immutable snapshot consumed by
//! `grid-engine` and `grid-io`.

pub mod error;
pub mod record;
pub mod store;
pub mod value;

pub use error::CatalogError;
pub use record::{Categories, FieldKey, Record, RecordId};
pub use store::RecordStore;
pub use value::{format_number, FieldValue};

// Re-exported so downstream crates name the same hasher.
pub use rustc_hash::{FxHashMap, FxHashSet};
