//! FILENAME: grid-engine/src/engine.rs
//! Grid Engine - Turns a record snapshot and view state into a rendered page.
//!
//! Pipeline: snapshot -> filter -> sort -> paginate. The selection is keyed
//! by record id and read against the snapshot, so it survives any change
//! of filter, sort or page.
//!
//! `calculate_view` is the stateless entry point. `GridSession` owns the
//! view state and the selection for one session and caches the filtered,
//! sorted row order: the cache is rebuilt whenever the filter or sort
//! changes and page navigation only re-slices it.
//!
//! Page policy:
//! 1. Any filter change resets to page 1
//! 2. Any page size change resets to page 1
//! 3. Sort changes keep the page; the index is clamped to the new range

use std::sync::Arc;

use catalog::{Record, RecordId, RecordStore};

use crate::aggregate::{summarize, SelectionSummary};
use crate::definition::{FilterState, GridDefinition, PageState, SortField, SortState};
use crate::error::GridError;
use crate::export::{export_csv, CsvExport};
use crate::filter::{apply_filter, filter_positions};
use crate::paginate::{self, page_slice, total_pages, PageInfo};
use crate::selection::SelectionTracker;
use crate::sort::{apply_sort, sort_positions};
use crate::view::GridView;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Calculates a view without any cached state.
/// The page index is clamped to the available range before slicing.
pub fn calculate_view<'a>(
    store: &'a RecordStore,
    filter: &FilterState,
    sort: &SortState,
    page: &PageState,
    selection: &SelectionTracker,
) -> GridView<'a> {
    let mut rows = apply_filter(store, filter);
    apply_sort(&mut rows, sort);
    let page = page.clamped(total_pages(rows.len(), page.page_size));
    GridView::build(
        page_slice(&rows, &page).iter().copied(),
        rows.len(),
        &page,
        store.len(),
        selection,
    )
}

// ============================================================================
// GRID SESSION
// ============================================================================

/// One admin-panel session over an immutable snapshot.
#[derive(Debug, Clone)]
pub struct GridSession {
    store: Arc<RecordStore>,
    definition: GridDefinition,

    filter: FilterState,
    sort: SortState,
    page: PageState,
    selection: SelectionTracker,

    /// Cached filter + sort result: positions into the snapshot.
    ordered: Vec<usize>,
}

impl GridSession {
    pub fn new(store: Arc<RecordStore>, definition: GridDefinition) -> Self {
        let page = PageState::new(definition.default_page_size);
        let mut session = GridSession {
            store,
            definition,
            filter: FilterState::default(),
            sort: SortState::default(),
            page,
            selection: SelectionTracker::new(),
            ordered: Vec::new(),
        };
        session.rebuild_order();
        session
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Category toggles to offer: the configured vocabulary, or every
    /// category present in the snapshot when none is configured.
    pub fn category_options(&self) -> Vec<String> {
        if self.definition.categories.is_empty() {
            self.store.categories()
        } else {
            self.definition.categories.clone()
        }
    }

    // ------------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------------

    /// Replaces the search text. Takes effect immediately; debouncing is the host's concern.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let mut filter = self.filter.clone();
        filter.query = query.into();
        self.set_filter(filter);
    }

    pub fn toggle_category(&mut self, category: &str) {
        let mut filter = self.filter.clone();
        filter.toggle_category(category);
        self.set_filter(filter);
    }

    pub fn clear_categories(&mut self) {
        let mut filter = self.filter.clone();
        filter.categories.clear();
        self.set_filter(filter);
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        if filter == self.filter {
            return;
        }
        log::debug!(
            "filter changed: query={:?} categories={:?}",
            filter.query,
            filter.categories
        );
        self.filter = filter;
        self.page.page_index = 1;
        self.rebuild_order();
    }

    // ------------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------------

    /// Column-header click: flips the active field, or activates a new one ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        let mut sort = self.sort.clone();
        sort.toggle(field);
        self.set_sort(sort);
    }

    /// Sets the sort. A metric outside the configured set falls back to id ascending.
    pub fn set_sort(&mut self, sort: SortState) {
        let sort = sort.resolve(&self.definition);
        if sort == self.sort {
            return;
        }
        log::debug!("sort changed: {:?} {:?}", sort.field, sort.direction);
        self.sort = sort;
        self.rebuild_order();
    }

    // ------------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------------

    /// Moves to `page_index`, clamped to the available pages.
    pub fn set_page(&mut self, page_index: usize) {
        self.page = PageState {
            page_index,
            ..self.page
        }
        .clamped(self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.page = paginate::next_page(self.page, self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.page = paginate::previous_page(self.page, self.total_pages());
    }

    /// Changes the page size and returns to page 1. A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("ignoring page size 0");
            return;
        }
        if page_size == self.page.page_size {
            return;
        }
        self.page = PageState::new(page_size);
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.ordered.len(), self.page.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(&self.page, self.ordered.len())
    }

    /// Number of records passing the current filter.
    pub fn filtered_count(&self) -> usize {
        self.ordered.len()
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn select(&mut self, id: RecordId) {
        self.selection.select(id);
    }

    pub fn deselect(&mut self, id: RecordId) {
        self.selection.deselect(id);
    }

    pub fn toggle_selection(&mut self, id: RecordId) -> bool {
        self.selection.toggle(id)
    }

    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.selection.select_all(ids);
    }

    /// Adds every row on the current page to the selection.
    pub fn select_page(&mut self) {
        let ids = self.page_ids();
        self.selection.select_all(ids);
    }

    /// Removes every row on the current page from the selection.
    pub fn deselect_page(&mut self) {
        let ids = self.page_ids();
        self.selection.deselect_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.is_selected(id)
    }

    // ------------------------------------------------------------------------
    // Derived output
    // ------------------------------------------------------------------------

    /// Records on the current page, in display order.
    pub fn current_page(&self) -> Vec<&Record> {
        let records = self.store.records();
        page_slice(&self.ordered, &self.page)
            .iter()
            .map(|&position| &records[position])
            .collect()
    }

    /// Ids of every record passing the filter, in sorted order.
    pub fn filtered_ids(&self) -> Vec<RecordId> {
        let records = self.store.records();
        self.ordered.iter().map(|&position| records[position].id).collect()
    }

    pub fn view(&self) -> GridView<'_> {
        GridView::build(
            self.current_page(),
            self.ordered.len(),
            &self.page,
            self.store.len(),
            &self.selection,
        )
    }

    /// Statistics over the whole selection; None when nothing is selected.
    pub fn summary(&self) -> Option<SelectionSummary> {
        summarize(
            &self.store,
            self.selection.selected_ids(),
            &self.definition.summary,
        )
    }

    /// CSV of the whole selection in snapshot order.
    pub fn export(&self) -> Result<CsvExport, GridError> {
        export_csv(
            &self.store,
            self.selection.selected_ids(),
            &self.definition.export,
        )
    }

    // ------------------------------------------------------------------------
    // Cache
    // ------------------------------------------------------------------------

    fn page_ids(&self) -> Vec<RecordId> {
        self.current_page().iter().map(|record| record.id).collect()
    }

    fn rebuild_order(&mut self) {
        let records = self.store.records();
        let mut ordered = filter_positions(records, &self.filter);
        sort_positions(records, &mut ordered, &self.sort);
        self.ordered = ordered;
        self.page = self.page.clamped(self.total_pages());
        log::debug!(
            "view order rebuilt: {} of {} records, page {}/{}",
            self.ordered.len(),
            self.store.len(),
            self.page.page_index,
            self.total_pages()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SortDirection;
    use crate::selection::SelectionCoverage;

    fn session() -> GridSession {
        let records = (1..=45u32)
            .map(|id| {
                let category = if id % 3 == 0 { "water" } else { "fire" };
                Record::new(id, format!("mon{:02}", id), [category])
                    .with_metric("hp", (id % 10) as f64)
                    .with_metric("attack", id as f64)
            })
            .collect();
        let store = RecordStore::from_records(records).unwrap();
        GridSession::new(Arc::new(store), GridDefinition::creature_catalog())
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.page().page_index, 1);
        assert_eq!(session.page().page_size, 20);
        assert_eq!(session.total_pages(), 3);
        assert_eq!(session.view().ids(), (1..=20u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_category_options() {
        let session = session();
        assert_eq!(session.category_options().len(), 18);

        let bare = GridSession::new(session.store.clone(), GridDefinition::default());
        assert_eq!(bare.category_options(), vec!["fire", "water"]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut session = session();
        session.set_page(3);
        session.toggle_category("water");
        assert_eq!(session.page().page_index, 1);
        assert_eq!(session.filtered_count(), 15);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut session = session();
        session.set_page(2);
        session.set_query("");
        assert_eq!(session.page().page_index, 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut session = session();
        session.set_page(2);
        session.set_page_size(10);
        assert_eq!(session.page(), PageState::at(1, 10));
        session.set_page_size(0);
        assert_eq!(session.page().page_size, 10);
    }

    #[test]
    fn test_sort_change_keeps_page_in_range() {
        let mut session = session();
        session.set_page(3);
        session.toggle_sort(SortField::metric("attack"));
        session.toggle_sort(SortField::metric("attack"));
        assert_eq!(session.sort().direction, SortDirection::Descending);
        assert_eq!(session.page().page_index, 3);
        assert_eq!(session.view().ids(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut session = session();
        session.set_page(99);
        assert_eq!(session.page().page_index, 3);
        session.set_page(0);
        assert_eq!(session.page().page_index, 1);
    }

    #[test]
    fn test_navigation() {
        let mut session = session();
        session.previous_page();
        assert_eq!(session.page().page_index, 1);
        session.next_page();
        session.next_page();
        session.next_page();
        assert_eq!(session.page().page_index, 3);
        assert!(!session.page_info().has_next());
    }

    #[test]
    fn test_unknown_sort_field_falls_back() {
        let mut session = session();
        session.set_sort(SortState::new(SortField::Id, SortDirection::Descending));
        session.set_sort(SortState::new(SortField::metric("luck"), SortDirection::Descending));
        assert_eq!(session.sort(), &SortState::default());
    }

    #[test]
    fn test_select_page_and_deselect_page() {
        let mut session = session();
        session.select(44);
        session.select_page();
        assert_eq!(session.selection().len(), 21);
        assert_eq!(session.view().page_coverage, SelectionCoverage::All);

        session.deselect_page();
        assert_eq!(session.selection().len(), 1);
        assert!(session.is_selected(44));
    }

    #[test]
    fn test_view_flags_selected_rows() {
        let mut session = session();
        session.toggle_selection(2);
        let view = session.view();
        assert!(view.rows[1].selected);
        assert!(!view.rows[0].selected);
        assert_eq!(view.selected_count, 1);
        assert_eq!(view.page_coverage, SelectionCoverage::Partial);
    }

    #[test]
    fn test_calculate_view_matches_session() {
        let mut session = session();
        session.set_query("mon1");
        session.set_sort(SortState::new(SortField::metric("hp"), SortDirection::Descending));
        session.select_all([10, 11]);
        let stateless = calculate_view(
            session.store(),
            session.filter(),
            session.sort(),
            &session.page(),
            session.selection(),
        );
        assert_eq!(stateless, session.view());
    }

    #[test]
    fn test_calculate_view_clamps_page() {
        let session = session();
        let view = calculate_view(
            session.store(),
            &FilterState::default(),
            &SortState::default(),
            &PageState::at(50, 20),
            &SelectionTracker::new(),
        );
        assert_eq!(view.page.page_index, 3);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn test_summary_and_export_follow_selection() {
        let mut session = session();
        assert!(session.summary().is_none());
        assert!(matches!(session.export(), Err(GridError::EmptySelection)));

        session.select_all([1, 3]);
        let summary = session.summary().unwrap();
        assert_eq!(summary.mean("attack"), Some(2));
        assert_eq!(session.export().unwrap().row_count, 2);
    }
}
