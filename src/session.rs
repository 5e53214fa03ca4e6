//! Per-page session state.
//!
//! Each hosting page owns one [`ArchiveSession`] for the duration of a page
//! load: the flat category list fetched from the backend, the derived forest,
//! and the transient selection/expansion state. Nothing here is shared across
//! pages; navigation throws the session away.
//!
//! Hosting pages drive the session synchronously and drain change
//! notifications from an internal queue. Notifications always carry the full
//! updated state, never deltas, so a page can re-render from the event alone.

use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};

use crate::category::{
    CategoryForest, CategoryId, CategoryRecord, CategoryTreeItem, DisplayMode, ExpansionState,
    OwnerGroup, SelectionChange, SelectionLimit, SelectionState,
};
use crate::config::ArchiveConfig;

// ============================================================================
// Session Events
// ============================================================================

/// Change notification for the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A fresh flat list was loaded and the forest rebuilt.
    CategoriesLoaded { count: usize },
    /// The selection changed; carries the full updated selection in
    /// insertion order.
    SelectionChanged(Vec<CategoryId>),
    /// A selection attempt hit the cap; the page shows a "max N reached"
    /// notice. State did not change.
    SelectionRejected { max: usize },
    /// The expansion set changed; carries the full updated set.
    ExpansionChanged(HashSet<CategoryId>),
}

// ============================================================================
// ArchiveSession
// ============================================================================

/// Category panel state for one page load.
pub struct ArchiveSession {
    mode: DisplayMode,
    forest: CategoryForest,
    selection: SelectionState,
    expansion: ExpansionState,
    /// Cached display rows; invalidated whenever records or expansion
    /// change. Selection does not affect row structure, so toggling a
    /// selection keeps the cache.
    cached_display: Option<Vec<CategoryTreeItem>>,
    events: VecDeque<SessionEvent>,
}

impl ArchiveSession {
    /// Create a session for a display mode, taking the mode's selection cap
    /// from config (browse pages 1, assign pages 3 by default).
    pub fn new(mode: DisplayMode, config: &ArchiveConfig) -> Self {
        let raw_cap = match mode {
            DisplayMode::Browse => config.browse_max_selection,
            DisplayMode::Assign => config.assign_max_selection,
        };
        Self::with_limit(mode, SelectionLimit::from_raw(raw_cap))
    }

    /// Create a session with an explicit selection cap, for hosting pages
    /// that pass their own value instead of the config default.
    pub fn with_limit(mode: DisplayMode, limit: SelectionLimit) -> Self {
        Self {
            mode,
            forest: CategoryForest::default(),
            selection: SelectionState::new(limit),
            expansion: ExpansionState::new(),
            cached_display: None,
            events: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn forest(&self) -> &CategoryForest {
        &self.forest
    }

    /// Selected category ids in insertion order.
    pub fn selection(&self) -> &[CategoryId] {
        self.selection.as_slice()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Replace the flat category list and rebuild the forest.
    ///
    /// Selection and expansion are transient page state: both reset here, as
    /// they do on navigation.
    pub fn load_categories(&mut self, records: &[CategoryRecord]) {
        self.forest = CategoryForest::build(records);
        self.selection.clear();
        self.expansion.clear();
        self.invalidate_display();
        tracing::info!(count = self.forest.len(), "Loaded category list");
        self.events.push_back(SessionEvent::CategoriesLoaded {
            count: self.forest.len(),
        });
    }

    /// Build the visible tree rows, caching the result.
    ///
    /// The cache is invalidated by `load_categories` and expansion toggles.
    pub fn build_display_items(&mut self) -> Vec<CategoryTreeItem> {
        if let Some(ref cached) = self.cached_display {
            return cached.clone();
        }
        tracing::debug!("Rebuilding display tree");
        let items = self.forest.display_items(&self.expansion);
        self.cached_display = Some(items.clone());
        items
    }

    /// Get the cached display rows, or build them fresh.
    ///
    /// For read-only callers (render paths) that cannot mutate the session.
    pub fn display_items(&self) -> Cow<'_, [CategoryTreeItem]> {
        match &self.cached_display {
            Some(cached) => Cow::Borrowed(cached.as_slice()),
            None => Cow::Owned(self.forest.display_items(&self.expansion)),
        }
    }

    /// Visible rows for one owner group's collection (uncached; these lists
    /// are small and per-group panels render independently).
    pub fn display_items_for(&self, group: OwnerGroup) -> Vec<CategoryTreeItem> {
        self.forest.display_items_for(group, &self.expansion)
    }

    /// Aggregate count for a group header, using the count kind paired with
    /// this session's display mode.
    pub fn group_count(&self, group: OwnerGroup) -> u64 {
        self.forest.aggregate_count(group, self.mode.count_kind())
    }

    /// Toggle a category in the selection and queue the matching event.
    pub fn toggle_selection(&mut self, id: &CategoryId) -> SelectionChange {
        let change = self.selection.toggle(id);
        match change {
            SelectionChange::Added | SelectionChange::Removed => {
                self.events.push_back(SessionEvent::SelectionChanged(
                    self.selection.as_slice().to_vec(),
                ));
            }
            SelectionChange::CapacityExceeded { max } => {
                tracing::debug!(id = %id, max, "Selection rejected at cap");
                self.events
                    .push_back(SessionEvent::SelectionRejected { max });
            }
        }
        change
    }

    /// Toggle a branch open or closed and queue the expansion event.
    ///
    /// Returns whether the branch is expanded after the toggle.
    pub fn toggle_expansion(&mut self, id: &CategoryId) -> bool {
        let expanded = self.expansion.toggle(id);
        self.invalidate_display(); // Row structure changed
        self.events
            .push_back(SessionEvent::ExpansionChanged(self.expansion.snapshot()));
        expanded
    }

    /// Next queued change notification, if any.
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    fn invalidate_display(&mut self) {
        self.cached_display = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
