//! FILENAME: catalog/src/record.rs
//! PURPOSE: Defines the catalog record, the atomic unit of the grid.
//! CONTEXT: A record carries a stable id, a display name, a set of category
//! tags, a map of named numeric metrics (sortable, aggregatable) and a map of
//! auxiliary fields that the grid treats as opaque payload.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::value::{format_number, FieldValue};

/// Unique, stable identifier of a record within a snapshot.
pub type RecordId = u32;

/// Category tags of a record. Most catalog entries carry one or two.
pub type Categories = SmallVec<[String; 2]>;

/// Addresses one field of a record.
/// Used by export columns and anywhere a field is chosen by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum FieldKey {
    Id,
    Name,
    Categories,
    Metric(String),
    Auxiliary(String),
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    /// Ordered set of category tags (duplicates are collapsed).
    pub categories: Categories,
    /// Named numeric metrics used for sorting and aggregation.
    #[serde(default)]
    pub metrics: FxHashMap<String, f64>,
    /// Additional fields not used by filtering or sorting.
    #[serde(default)]
    pub auxiliary: FxHashMap<String, FieldValue>,
}

impl Record {
    pub fn new<I, S>(id: RecordId, name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Record {
            id,
            name: name.into(),
            categories: SmallVec::new(),
            metrics: FxHashMap::default(),
            auxiliary: FxHashMap::default(),
        };
        for category in categories {
            record.push_category(category.into());
        }
        record
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn with_auxiliary(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.auxiliary.insert(name.into(), value.into());
        self
    }

    fn push_category(&mut self, category: String) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Collapses duplicate category tags, keeping first occurrences.
    pub(crate) fn dedup_categories(&mut self) {
        let tags = std::mem::take(&mut self.categories);
        for tag in tags {
            self.push_category(tag);
        }
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn auxiliary(&self, name: &str) -> Option<&FieldValue> {
        self.auxiliary.get(name)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns the numeric value of a field, if it has one.
    pub fn numeric(&self, key: &FieldKey) -> Option<f64> {
        match key {
            FieldKey::Id => Some(self.id as f64),
            FieldKey::Metric(name) => self.metric(name),
            FieldKey::Auxiliary(name) => self.auxiliary(name).and_then(FieldValue::as_number),
            FieldKey::Name | FieldKey::Categories => None,
        }
    }

    /// Returns the display text of a field.
    /// Missing metrics and auxiliary fields render as an empty string.
    pub fn display(&self, key: &FieldKey, category_delimiter: &str) -> String {
        match key {
            FieldKey::Id => self.id.to_string(),
            FieldKey::Name => self.name.clone(),
            FieldKey::Categories => self.categories.join(category_delimiter),
            FieldKey::Metric(name) => self.metric(name).map(format_number).unwrap_or_default(),
            FieldKey::Auxiliary(name) => self
                .auxiliary(name)
                .map(FieldValue::display_value)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charizard() -> Record {
        Record::new(6, "charizard", ["fire", "flying"])
            .with_metric("hp", 78.0)
            .with_metric("attack", 84.0)
            .with_auxiliary("weight", 905.0)
            .with_auxiliary("sprite", "6.png")
    }

    #[test]
    fn test_new_collapses_duplicate_categories() {
        let record = Record::new(1, "bulbasaur", ["grass", "poison", "grass"]);
        assert_eq!(record.categories.as_slice(), ["grass", "poison"]);
    }

    #[test]
    fn test_numeric_fields() {
        let record = charizard();
        assert_eq!(record.numeric(&FieldKey::Id), Some(6.0));
        assert_eq!(record.numeric(&FieldKey::Metric("attack".into())), Some(84.0));
        assert_eq!(record.numeric(&FieldKey::Auxiliary("weight".into())), Some(905.0));
        assert_eq!(record.numeric(&FieldKey::Auxiliary("sprite".into())), None);
        assert_eq!(record.numeric(&FieldKey::Name), None);
    }

    #[test]
    fn test_display_fields() {
        let record = charizard();
        assert_eq!(record.display(&FieldKey::Categories, "/"), "fire/flying");
        assert_eq!(record.display(&FieldKey::Metric("hp".into()), "/"), "78");
        assert_eq!(record.display(&FieldKey::Metric("speed".into()), "/"), "");
        assert_eq!(record.display(&FieldKey::Auxiliary("sprite".into()), "/"), "6.png");
    }

    #[test]
    fn test_deserialize_without_optional_maps() {
        let json = r#"{"id": 25, "name": "pikachu", "categories": ["electric"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 25);
        assert!(record.metrics.is_empty());
        assert!(record.has_category("electric"));
    }

    #[test]
    fn test_field_key_json_shape() {
        let key: FieldKey = serde_json::from_str(r#"{"kind": "metric", "name": "hp"}"#).unwrap();
        assert_eq!(key, FieldKey::Metric("hp".to_string()));
        let key: FieldKey = serde_json::from_str(r#"{"kind": "id"}"#).unwrap();
        assert_eq!(key, FieldKey::Id);
    }
}
