//! FILENAME: grid-engine/src/selection.rs
//! PURPOSE: Tracks the set of selected record ids for a session.
//! CONTEXT: Membership is independent of filter, sort and page state. A
//! record stays selected when it falls out of the current view; only the
//! explicit operations below change the set. Ids are not validated
//! against the snapshot; unknown ids are skipped when read back through it.

use std::sync::{Arc, Mutex, MutexGuard};

use catalog::{FxHashSet, RecordId};
use serde::{Deserialize, Serialize};

/// How much of a set of ids (usually the visible page) is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionCoverage {
    None,
    Partial,
    All,
}

/// The session's selection set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: FxHashSet<RecordId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: RecordId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: RecordId) {
        self.selected.remove(&id);
    }

    /// Flips membership of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Unions `ids` into the selection. Existing selections are kept.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.selected.extend(ids);
    }

    /// Removes `ids` from the selection, leaving everything else selected.
    pub fn deselect_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        for id in ids {
            self.selected.remove(&id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_ids(&self) -> &FxHashSet<RecordId> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Coverage of `ids` by the selection. An empty `ids` is `None`.
    pub fn coverage<I>(&self, ids: I) -> SelectionCoverage
    where
        I: IntoIterator<Item = RecordId>,
    {
        let mut seen = 0usize;
        let mut hit = 0usize;
        for id in ids {
            seen += 1;
            if self.selected.contains(&id) {
                hit += 1;
            }
        }
        match hit {
            0 => SelectionCoverage::None,
            _ if hit == seen => SelectionCoverage::All,
            _ => SelectionCoverage::Partial,
        }
    }
}

impl FromIterator<RecordId> for SelectionTracker {
    fn from_iter<T: IntoIterator<Item = RecordId>>(iter: T) -> Self {
        SelectionTracker {
            selected: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// SHARED SELECTION
// ============================================================================

/// A selection shared between threads behind a single lock.
/// Hosts that drive the grid from one event loop use `SelectionTracker` directly.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    inner: Arc<Mutex<SelectionTracker>>,
}

impl SharedSelection {
    pub fn new(tracker: SelectionTracker) -> Self {
        SharedSelection {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Locks the selection, ignoring poisoning.
    /// Every mutation is a single set operation.
    pub fn lock(&self) -> MutexGuard<'_, SelectionTracker> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn toggle(&self, id: RecordId) -> bool {
        self.lock().toggle(id)
    }

    pub fn select_all<I>(&self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.lock().select_all(ids);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.lock().is_selected(id)
    }

    /// Copy of the current selection.
    pub fn snapshot(&self) -> SelectionTracker {
        self.lock().clone()
    }
}
