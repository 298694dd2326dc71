//! FILENAME: grid-engine/src/aggregate.rs
//! PURPOSE: Summary statistics over the full selection.
//! CONTEXT: Reads the snapshot restricted to the selected ids, never the
//! filtered or paginated view, so records selected on other pages or
//! hidden by the current filter still count.

use catalog::{FxHashSet, RecordId, RecordStore};
use serde::{Deserialize, Serialize};

use crate::definition::SummaryDefinition;

/// Rounded mean of one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMean {
    pub metric: String,
    pub value: i64,
}

/// One additive total, already scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalValue {
    pub label: String,
    pub value: f64,
}

/// Statistics for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Selected records found in the snapshot.
    pub count: usize,
    pub means: Vec<MetricMean>,
    pub totals: Vec<TotalValue>,
}

impl SelectionSummary {
    pub fn mean(&self, metric: &str) -> Option<i64> {
        self.means.iter().find(|m| m.metric == metric).map(|m| m.value)
    }

    pub fn total(&self, label: &str) -> Option<f64> {
        self.totals.iter().find(|t| t.label == label).map(|t| t.value)
    }

    /// Total formatted with one decimal place (e.g. "99.4").
    pub fn display_total(&self, label: &str) -> Option<String> {
        self.total(label).map(|value| format!("{:.1}", value))
    }
}

/// Summarizes the selected records, or returns None when none are selected.
///
/// Means accumulate in f64 and round half away from zero. Missing metric
/// values count as 0; totals skip non-numeric values.
pub fn summarize(
    store: &RecordStore,
    selection: &FxHashSet<RecordId>,
    definition: &SummaryDefinition,
) -> Option<SelectionSummary> {
    if selection.is_empty() {
        return None;
    }

    let mut count = 0usize;
    let mut metric_sums = vec![0.0f64; definition.means.len()];
    let mut total_sums = vec![0.0f64; definition.totals.len()];

    for record in store.restrict_to(selection) {
        count += 1;
        for (sum, metric) in metric_sums.iter_mut().zip(&definition.means) {
            *sum += record.metric(metric).unwrap_or(0.0);
        }
        for (sum, total) in total_sums.iter_mut().zip(&definition.totals) {
            *sum += numeric_or_zero(record.numeric(&total.field));
        }
    }

    if count == 0 {
        return None;
    }

    let means = definition
        .means
        .iter()
        .zip(metric_sums)
        .map(|(metric, sum)| MetricMean {
            metric: metric.clone(),
            value: (sum / count as f64).round() as i64,
        })
        .collect();

    let totals = definition
        .totals
        .iter()
        .zip(total_sums)
        .map(|(total, sum)| TotalValue {
            label: total.label.clone(),
            value: round_to_tenth(sum * total.scale),
        })
        .collect();

    Some(SelectionSummary {
        count,
        means,
        totals,
    })
}

fn numeric_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
