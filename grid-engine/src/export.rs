//! FILENAME: grid-engine/src/export.rs
//! PURPOSE: Serializes the selected records to CSV text.
//! CONTEXT: Row order is the snapshot's insertion order restricted to the
//! selection, independent of the current sort, filter or page. Multi-value
//! fields are joined with the configured delimiter; fields containing the
//! field delimiter, quotes or newlines are quoted.

use catalog::{FxHashSet, Record, RecordId, RecordStore};
use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::definition::ExportDefinition;
use crate::error::GridError;

/// MIME type of the export blob.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// A finished export, ready to be handed to a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    /// `<entity>-export.csv`
    pub filename: String,
    pub mime_type: String,
    pub content: String,
    /// Data rows, excluding the header.
    pub row_count: usize,
}

/// Exports the selected records.
/// Fails with `EmptySelection` when no selected id resolves to a record.
pub fn export_csv(
    store: &RecordStore,
    selection: &FxHashSet<RecordId>,
    definition: &ExportDefinition,
) -> Result<CsvExport, GridError> {
    let rows: Vec<&Record> = store.restrict_to(selection).collect();
    if rows.is_empty() {
        return Err(GridError::EmptySelection);
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(definition.columns.iter().map(|column| column.header.as_str()))?;
    for record in &rows {
        writer.write_record(
            definition
                .columns
                .iter()
                .map(|column| record.display(&column.field, &definition.category_delimiter)),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GridError::Encoding(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| GridError::Encoding(e.to_string()))?;

    log::info!("exported {} records to {}", rows.len(), definition.filename());

    Ok(CsvExport {
        filename: definition.filename(),
        mime_type: CSV_MIME_TYPE.to_string(),
        content,
        row_count: rows.len(),
    })
}
