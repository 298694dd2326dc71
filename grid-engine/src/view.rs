//! FILENAME: grid-engine/src/view.rs
//! Grid View - Renderable output for the host.
//!
//! A view is the current page of the filtered and sorted result, with each
//! row flagged by selection membership, plus the pagination status and the
//! counts a toolbar shows. It borrows records from the snapshot.

use catalog::{Record, RecordId};

use crate::definition::PageState;
use crate::paginate::PageInfo;
use crate::selection::{SelectionCoverage, SelectionTracker};

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRow<'a> {
    pub record: &'a Record,
    pub selected: bool,
}

/// The current page plus status for the controls around it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    pub rows: Vec<ViewRow<'a>>,

    pub page: PageInfo,

    /// Records in the snapshot, before filtering.
    pub total_records: usize,

    /// Size of the whole selection, including ids outside this view.
    pub selected_count: usize,

    /// Selection state of the visible rows (drives the header checkbox).
    pub page_coverage: SelectionCoverage,
}

impl<'a> GridView<'a> {
    pub(crate) fn build(
        page_rows: impl IntoIterator<Item = &'a Record>,
        filtered_rows: usize,
        page: &PageState,
        total_records: usize,
        selection: &SelectionTracker,
    ) -> Self {
        let rows: Vec<ViewRow<'a>> = page_rows
            .into_iter()
            .map(|record| ViewRow {
                record,
                selected: selection.is_selected(record.id),
            })
            .collect();
        let page_coverage = selection.coverage(rows.iter().map(|row| row.record.id));

        GridView {
            rows,
            page: PageInfo::new(page, filtered_rows),
            total_records,
            selected_count: selection.len(),
            page_coverage,
        }
    }

    /// Ids of the visible rows, in display order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|row| row.record.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
