//! Expansion state: which category branches render their children.
//!
//! A pure set toggle, independent of selection. Categories start collapsed;
//! the hosting page toggles branches open as the user drills in.

use std::collections::HashSet;

use super::types::CategoryId;

/// Set of currently expanded category ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<CategoryId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a branch: add if absent, remove if present.
    ///
    /// Returns whether the branch is expanded after the toggle.
    pub fn toggle(&mut self, id: &CategoryId) -> bool {
        if self.expanded.contains(id) {
            self.expanded.remove(id);
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &CategoryId) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Collapse every branch (navigation reset).
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// The full expanded set, for change notifications.
    pub fn snapshot(&self) -> HashSet<CategoryId> {
        self.expanded.clone()
    }
}
