//! FILENAME: grid-engine/src/definition.rs
//! Grid Definition - The serializable configuration and view state.
//!
//! This module contains all the types needed to DESCRIBE a grid view.
//! These structures are designed to be:
//! - Serializable (for loading configuration and handing state to a host)
//! - Cheap to compare (the session cache is keyed by them)
//! - Immutable snapshots of user intent

use std::collections::BTreeSet;

use catalog::{FieldKey, Record};
use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// FILTER STATE
// ============================================================================

/// Text search plus categorical filter.
/// An empty query and an empty category set mean "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring matched against the record name.
    pub query: String,

    /// A record passes if it carries any of these categories.
    pub categories: BTreeSet<String>,
}

impl FilterState {
    pub fn new(query: impl Into<String>) -> Self {
        FilterState {
            query: query.into(),
            categories: BTreeSet::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// True when neither predicate is active.
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty()
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Evaluates both predicates against one record.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_query(record) && self.matches_categories(record)
    }

    fn matches_query(&self, record: &Record) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        record
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_categories(&self, record: &Record) -> bool {
        self.categories.is_empty()
            || record
                .categories
                .iter()
                .any(|category| self.categories.contains(category))
    }
}

// ============================================================================
// SORT STATE
// ============================================================================

/// Field a view is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum SortField {
    Id,
    Name,
    Metric(String),
}

impl Default for SortField {
    fn default() -> Self {
        SortField::Id
    }
}

impl SortField {
    pub fn metric(name: impl Into<String>) -> Self {
        SortField::Metric(name.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort field and direction. Defaults to id ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortState { field, direction }
    }

    /// Column-header behaviour: the active field flips direction,
    /// any other field becomes active in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Replaces a field the definition does not offer with the default sort.
    pub fn resolve(&self, definition: &GridDefinition) -> SortState {
        if definition.sort_fields().contains(&self.field) {
            return self.clone();
        }
        log::warn!("unknown sort field {:?}, falling back to id ascending", self.field);
        SortState::default()
    }
}

// ============================================================================
// PAGE STATE
// ============================================================================

/// One-based page index and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// First page of the given size. A zero size is raised to one.
    pub fn new(page_size: usize) -> Self {
        PageState {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn at(page_index: usize, page_size: usize) -> Self {
        PageState {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Clamps the index into `[1, max(total_pages, 1)]`.
    pub fn clamped(self, total_pages: usize) -> Self {
        PageState {
            page_index: self.page_index.clamp(1, total_pages.max(1)),
            page_size: self.page_size.max(1),
        }
    }
}

// ============================================================================
// SUMMARY DEFINITION
// ============================================================================

/// An additive aggregate over the selection (e.g. total weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalDefinition {
    /// Display label (e.g., "Total Weight").
    pub label: String,

    /// Numeric field summed over the selection.
    pub field: FieldKey,

    /// Factor applied to the sum (unit conversion).
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// Which statistics a selection summary reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryDefinition {
    /// Metrics reported as rounded means.
    pub means: Vec<String>,

    /// Additive totals reported with one decimal place.
    pub totals: Vec<TotalDefinition>,
}

// ============================================================================
// EXPORT DEFINITION
// ============================================================================

/// One CSV column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportColumn {
    pub header: String,
    pub field: FieldKey,
}

impl ExportColumn {
    pub fn new(header: impl Into<String>, field: FieldKey) -> Self {
        ExportColumn {
            header: header.into(),
            field,
        }
    }
}

/// Layout of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefinition {
    /// Used for the `<entity>-export.csv` filename.
    pub entity_name: String,

    pub columns: Vec<ExportColumn>,

    /// Joins multi-value fields; must differ from the field delimiter.
    pub category_delimiter: String,
}

impl Default for ExportDefinition {
    fn default() -> Self {
        ExportDefinition {
            entity_name: "record".to_string(),
            columns: vec![
                ExportColumn::new("ID", FieldKey::Id),
                ExportColumn::new("Name", FieldKey::Name),
                ExportColumn::new("Categories", FieldKey::Categories),
            ],
            category_delimiter: "/".to_string(),
        }
    }
}

impl ExportDefinition {
    pub fn filename(&self) -> String {
        format!("{}-export.csv", self.entity_name)
    }
}

// ============================================================================
// GRID DEFINITION
// ============================================================================

/// A sortable, aggregatable metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Key into `Record::metrics`.
    pub key: String,
    /// Column title.
    pub label: String,
}

impl MetricDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        MetricDefinition {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Complete configuration of one admin grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDefinition {
    /// The configurable metric set (sort fields beyond id and name).
    pub metrics: Vec<MetricDefinition>,

    /// Category vocabulary offered as filter toggles.
    pub categories: Vec<String>,

    pub default_page_size: usize,

    pub page_size_options: Vec<usize>,

    pub summary: SummaryDefinition,

    pub export: ExportDefinition,
}

impl Default for GridDefinition {
    fn default() -> Self {
        GridDefinition {
            metrics: Vec::new(),
            categories: Vec::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            summary: SummaryDefinition::default(),
            export: ExportDefinition::default(),
        }
    }
}

impl GridDefinition {
    /// Configuration of the creature catalog admin panel.
    pub fn creature_catalog() -> Self {
        let metrics = vec![
            MetricDefinition::new("hp", "HP"),
            MetricDefinition::new("attack", "Attack"),
            MetricDefinition::new("defense", "Defense"),
            MetricDefinition::new("speed", "Speed"),
        ];

        let mut columns = vec![
            ExportColumn::new("ID", FieldKey::Id),
            ExportColumn::new("Name", FieldKey::Name),
            ExportColumn::new("Types", FieldKey::Categories),
        ];
        columns.extend(
            metrics
                .iter()
                .map(|m| ExportColumn::new(m.label.clone(), FieldKey::Metric(m.key.clone()))),
        );
        columns.push(ExportColumn::new("Weight", FieldKey::Auxiliary("weight".to_string())));
        columns.push(ExportColumn::new("Height", FieldKey::Auxiliary("height".to_string())));

        GridDefinition {
            summary: SummaryDefinition {
                means: metrics.iter().map(|m| m.key.clone()).collect(),
                totals: vec![TotalDefinition {
                    label: "Total Weight".to_string(),
                    field: FieldKey::Auxiliary("weight".to_string()),
                    // hectograms to kilograms
                    scale: 0.1,
                }],
            },
            export: ExportDefinition {
                entity_name: "pokemon".to_string(),
                columns,
                category_delimiter: "/".to_string(),
            },
            metrics,
            categories: [
                "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison",
                "ground", "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel",
                "fairy",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
        }
    }

    /// Every field a view can be sorted by: id, name, then the metrics.
    pub fn sort_fields(&self) -> Vec<SortField> {
        let mut fields = vec![SortField::Id, SortField::Name];
        fields.extend(self.metrics.iter().map(|m| SortField::Metric(m.key.clone())));
        fields
    }
}
