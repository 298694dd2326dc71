//! FILENAME: grid-engine/src/sort.rs
//! PURPOSE: Orders filtered records by a field and direction.
//! CONTEXT: Second stage of the view pipeline. The sort is stable: records
//! with equal keys keep their filter-output order in both directions, which
//! keeps pagination deterministic across re-renders. Descending reverses
//! the comparator, never the order of ties.

use std::cmp::Ordering;

use catalog::Record;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::definition::{SortDirection, SortField, SortState};

/// Sorts `rows` in place.
pub fn apply_sort(rows: &mut [&Record], sort: &SortState) {
    rows.sort_by(|a, b| compare_directed(a, b, sort));
}

/// Sorts positions into `records` in place.
pub fn sort_positions(records: &[Record], positions: &mut [usize], sort: &SortState) {
    positions.sort_by(|&a, &b| compare_directed(&records[a], &records[b], sort));
}

fn compare_directed(a: &Record, b: &Record, sort: &SortState) -> Ordering {
    let ordering = compare_records(a, b, &sort.field);
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Ascending comparison of two records on one field.
/// A record missing the metric sorts as 0.
pub fn compare_records(a: &Record, b: &Record, field: &SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => locale_compare(&a.name, &b.name),
        SortField::Metric(name) => {
            let va = a.metric(name).unwrap_or(0.0);
            let vb = b.metric(name).unwrap_or(0.0);
            va.total_cmp(&vb)
        }
    }
}

/// Locale-style string comparison.
///
/// Levels, each consulted only when the previous one ties:
/// 1. base letters, case-folded with accents removed ("éclair" < "zubat")
/// 2. accents, unaccented first ("flabebe" < "flabébé")
/// 3. case, lower case first ("abra" < "Abra")
/// 4. code points
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .flat_map(char::to_lowercase)
        .cmp(base_letters(b).flat_map(char::to_lowercase))
        .then_with(|| accent_marks(a).cmp(&accent_marks(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|&c| !is_combining_mark(c))
}

/// Combining marks attached to each base letter, in order.
fn accent_marks(s: &str) -> Vec<Vec<char>> {
    let mut marks: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        if !is_combining_mark(c) {
            marks.push(Vec::new());
        } else if let Some(last) = marks.last_mut() {
            last.push(c);
        } else {
            marks.push(vec![c]);
        }
    }
    marks
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in base_letters(a).zip(base_letters(b)) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
