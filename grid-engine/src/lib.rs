//! FILENAME: grid-engine/src/lib.rs
//! Record grid engine.
//!
//! Turns an immutable record snapshot into a filtered, sorted, paginated,
//! selectable and exportable view, plus statistics over a selection that is
//! tracked independently of what is on screen.
//!
//! Layers:
//! - `definition`: Serializable configuration and view state (what the grid IS)
//! - `filter`, `sort`, `paginate`: Pure pipeline stages (HOW rows are derived)
//! - `selection`: The session's selected ids
//! - `aggregate`, `export`: Readers of snapshot ∩ selection
//! - `view`: Renderable output for the host (WHAT we display)
//! - `engine`: Stateless entry point and the cached session

pub mod aggregate;
pub mod definition;
pub mod engine;
pub mod error;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod sort;
pub mod view;

pub use aggregate::{summarize, MetricMean, SelectionSummary, TotalValue};
pub use definition::*;
pub use engine::{calculate_view, GridSession};
pub use error::GridError;
pub use export::{export_csv, CsvExport, CSV_MIME_TYPE};
pub use filter::apply_filter;
pub use paginate::{page_slice, total_pages, PageInfo};
pub use selection::{SelectionCoverage, SelectionTracker, SharedSelection};
pub use sort::apply_sort;
pub use view::{GridView, ViewRow};
