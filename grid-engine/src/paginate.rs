//! FILENAME: grid-engine/src/paginate.rs
//! PURPOSE: Slices the sorted result into fixed-size pages.
//! CONTEXT: Last stage of the view pipeline. Page indexes are one-based.

use serde::{Deserialize, Serialize};

use crate::definition::PageState;

/// Number of pages needed for `len` rows. Zero rows means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Returns rows `[start, start + page_size)` clipped to `rows`,
/// or an empty slice when the page starts past the end.
pub fn page_slice<'a, T>(rows: &'a [T], page: &PageState) -> &'a [T] {
    let page_size = page.page_size.max(1);
    let start = page.page_index.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// The page after `page`, staying on the last page.
pub fn next_page(page: PageState, total_pages: usize) -> PageState {
    PageState {
        page_index: page.page_index.saturating_add(1),
        ..page
    }
    .clamped(total_pages)
}

/// The page before `page`, staying on the first page.
pub fn previous_page(page: PageState, total_pages: usize) -> PageState {
    PageState {
        page_index: page.page_index.saturating_sub(1),
        ..page
    }
    .clamped(total_pages)
}

/// Pagination status shown next to the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Rows in the filtered (unpaginated) result.
    pub total_rows: usize,
}

impl PageInfo {
    pub fn new(page: &PageState, total_rows: usize) -> Self {
        PageInfo {
            page_index: page.page_index,
            page_size: page.page_size,
            total_pages: total_pages(total_rows, page.page_size),
            total_rows,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}
