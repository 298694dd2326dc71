//! FILENAME: grid-io/src/snapshot_reader.rs
//! PURPOSE: Builds a record snapshot from already-fetched JSON.
//! CONTEXT: Two shapes are accepted. A plain snapshot is an array of
//! records as serialized by `catalog::Record`. A catalog-detail payload is
//! an array of per-entry documents from the remote catalog, with typed
//! slots, named stats, sprite links and size fields.

use std::fs;
use std::path::Path;

use catalog::{Record, RecordId, RecordStore};
use grid_engine::GridDefinition;
use serde::Deserialize;

use crate::ExchangeError;

// ============================================================================
// CATALOG DETAIL PAYLOAD
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogDetail {
    id: RecordId,
    name: String,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    stats: Vec<StatSlot>,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: f64,
    stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

impl CatalogDetail {
    /// Maps the payload onto a record. Configured metrics the payload
    /// lacks are recorded as 0; stats outside the metric set are dropped.
    fn into_record(self, definition: &GridDefinition) -> Record {
        let unmapped = self.unmapped_stats(definition);
        if !unmapped.is_empty() {
            log::debug!("record {}: ignoring stats {:?}", self.id, unmapped);
        }

        let categories = self.types.into_iter().map(|slot| slot.kind.name);
        let mut record = Record::new(self.id, self.name, categories);

        for metric in &definition.metrics {
            let value = self
                .stats
                .iter()
                .find(|slot| slot.stat.name == metric.key)
                .map(|slot| slot.base_stat)
                .unwrap_or(0.0);
            record.metrics.insert(metric.key.clone(), value);
        }

        if let Some(weight) = self.weight {
            record = record.with_auxiliary("weight", weight);
        }
        if let Some(height) = self.height {
            record = record.with_auxiliary("height", height);
        }
        if let Some(sprite) = self.sprites.front_default {
            record = record.with_auxiliary("sprite", sprite);
        }
        record
    }

    /// Stat names the definition has no metric for.
    fn unmapped_stats(&self, definition: &GridDefinition) -> Vec<&str> {
        self.stats
            .iter()
            .map(|slot| slot.stat.name.as_str())
            .filter(|name| !definition.metrics.iter().any(|m| m.key == *name))
            .collect()
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a plain snapshot: a JSON array of records.
pub fn parse_snapshot(json: &str) -> Result<RecordStore, ExchangeError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    let store = RecordStore::from_records(records)?;
    log::info!("loaded snapshot with {} records", store.len());
    Ok(store)
}

pub fn load_snapshot(path: &Path) -> Result<RecordStore, ExchangeError> {
    let json = fs::read_to_string(path)?;
    parse_snapshot(&json)
}

/// Parses a JSON array of catalog-detail documents.
pub fn parse_catalog_details(
    json: &str,
    definition: &GridDefinition,
) -> Result<RecordStore, ExchangeError> {
    let details: Vec<CatalogDetail> = serde_json::from_str(json)?;
    let records: Vec<Record> = details
        .into_iter()
        .map(|detail| detail.into_record(definition))
        .collect();
    let store = RecordStore::from_records(records)?;
    log::info!("loaded {} catalog entries", store.len());
    Ok(store)
}

pub fn load_catalog_details(
    path: &Path,
    definition: &GridDefinition,
) -> Result<RecordStore, ExchangeError> {
    let json = fs::read_to_string(path)?;
    parse_catalog_details(&json, definition)
}
