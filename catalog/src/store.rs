//! FILENAME: catalog/src/store.rs
//! PURPOSE: Holds the immutable snapshot of fetched records.
//! CONTEXT: The store is built once per session from an already-fetched
//! collection. Insertion order is the natural order of the catalog and is
//! what exports follow. Records are never mutated after construction.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::CatalogError;
use crate::record::{Record, RecordId};

/// The immutable record snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in insertion order.
    records: Vec<Record>,

    /// Maps a record id to its position in `records`.
    positions: FxHashMap<RecordId, usize>,
}

impl RecordStore {
    /// Builds a snapshot, rejecting duplicate ids and records without categories.
    pub fn from_records(records: Vec<Record>) -> Result<Self, CatalogError> {
        let mut positions = FxHashMap::default();
        positions.reserve(records.len());

        let mut records = records;
        for (position, record) in records.iter_mut().enumerate() {
            record.dedup_categories();
            if record.categories.is_empty() {
                return Err(CatalogError::NoCategories(record.id));
            }
            if positions.insert(record.id, position).is_some() {
                log::warn!("rejecting snapshot: record id {} appears twice", record.id);
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        log::debug!("record snapshot built with {} records", records.len());
        Ok(RecordStore { records, positions })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// O(1) lookup by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    /// Records whose id is in `ids`, in insertion order.
    /// Ids with no matching record are ignored.
    pub fn restrict_to<'a>(
        &'a self,
        ids: &'a FxHashSet<RecordId>,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |record| ids.contains(&record.id))
    }

    /// Sorted, de-duplicated list of every category present in the snapshot.
    pub fn categories(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .records
            .iter()
            .flat_map(|record| record.categories.iter().cloned())
            .collect();
        all.sort();
        all.dedup();
        all
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(4, "charmander", ["fire"]),
            Record::new(1, "bulbasaur", ["grass", "poison"]),
            Record::new(7, "squirtle", ["water"]),
        ]
    }

    #[test]
    fn test_preserves_insertion_order() {
        let store = RecordStore::from_records(sample()).unwrap();
        let ids: Vec<RecordId> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 1, 7]);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = RecordStore::from_records(sample()).unwrap();
        assert_eq!(store.get(7).map(|r| r.name.as_str()), Some("squirtle"));
        assert!(store.get(150).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut records = sample();
        records.push(Record::new(4, "charmander-copy", ["fire"]));
        assert_eq!(
            RecordStore::from_records(records).unwrap_err(),
            CatalogError::DuplicateId(4)
        );
    }

    #[test]
    fn test_rejects_records_without_categories() {
        let records = vec![Record::new(9, "missingno", Vec::<String>::new())];
        assert_eq!(
            RecordStore::from_records(records).unwrap_err(),
            CatalogError::NoCategories(9)
        );
    }

    #[test]
    fn test_restrict_to_follows_store_order() {
        let store = RecordStore::from_records(sample()).unwrap();
        let ids: FxHashSet<RecordId> = [7, 4, 999].into_iter().collect();
        let names: Vec<&str> = store.restrict_to(&ids).map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["charmander", "squirtle"]);
    }

    #[test]
    fn test_categories_listing() {
        let store = RecordStore::from_records(sample()).unwrap();
        assert_eq!(store.categories(), vec!["fire", "grass", "poison", "water"]);
    }
}
