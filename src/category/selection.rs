//! Selection state for the category panel.
//!
//! Browse pages run with a cap of 1, assign pages with a cap of 3 (both
//! supplied by the hosting page; 0 means unlimited). Hitting the cap is a
//! user notice, not a failure, so `toggle` reports an outcome instead of
//! returning an error.

use super::types::{CategoryId, SelectionLimit};

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The id was appended to the selection.
    Added,
    /// The id was removed from the selection. Removal never fails.
    Removed,
    /// The selection was already at the cap; nothing changed. The hosting
    /// page surfaces a "max N reached" notice.
    CapacityExceeded { max: usize },
}

/// Insertion-ordered category selection with an optional cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<CategoryId>,
    limit: SelectionLimit,
}

impl SelectionState {
    pub fn new(limit: SelectionLimit) -> Self {
        Self {
            selected: Vec::new(),
            limit,
        }
    }

    /// Toggle an id in or out of the selection.
    ///
    /// Present → removed, unconditionally. Absent → appended in insertion
    /// order, unless the cap is reached, in which case the selection is
    /// untouched and `CapacityExceeded` is reported. A remove-then-re-add
    /// of the same id therefore restores membership but places the id at
    /// the end of the insertion order.
    pub fn toggle(&mut self, id: &CategoryId) -> SelectionChange {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            return SelectionChange::Removed;
        }
        if self.limit.is_full(self.selected.len()) {
            let SelectionLimit::Max(max) = self.limit else {
                unreachable!("unlimited selection is never full");
            };
            return SelectionChange::CapacityExceeded { max: max.get() };
        }
        self.selected.push(id.clone());
        SelectionChange::Added
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Selected ids in insertion order (not tree order).
    pub fn as_slice(&self) -> &[CategoryId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn limit(&self) -> SelectionLimit {
        self.limit
    }

    /// Deselect everything (navigation reset).
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
