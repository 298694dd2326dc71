//! FILENAME: grid-engine/src/filter.rs
//! PURPOSE: Applies the text search and category filter to a record sequence.
//! CONTEXT: First stage of the view pipeline. Order preserving; a record
//! must satisfy both the query and the category predicate to remain.

use catalog::Record;

use crate::definition::FilterState;

/// Returns the records that pass `filter`, in input order.
pub fn apply_filter<'a, I>(records: I, filter: &FilterState) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if filter.is_identity() {
        return records.into_iter().collect();
    }

    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect()
}

/// Positions (into `records`) of the records that pass `filter`.
pub fn filter_positions(records: &[Record], filter: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(position, _)| position)
        .collect()
}
