use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque category identifier as issued by the category-listing API.
///
/// Backend ids are strings (the API does not promise numeric ids), so the
/// wrapper keeps comparisons and map keys honest without committing to a
/// numeric representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        CategoryId(s.to_owned())
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Wire Records
// ============================================================================

/// Top-level institutional partition a category belongs to.
///
/// Every category belongs to exactly one group; the archive renders the two
/// groups as separate top-level collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerGroup {
    Holding,
    Bank,
}

/// Flat category record as delivered by the category-listing API.
///
/// `content_count` / `project_count` are pre-aggregated by the backend
/// (children already folded into the parent's figure) and are never
/// recomputed here. Either may be absent for categories with no assets yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    /// Parent category, or None for a root. A reference to a nonexistent
    /// id is tolerated: the record is treated as a root.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    pub owner_group: OwnerGroup,
    /// Sort key among siblings, ascending. Applied at the presentation
    /// boundary, not during tree construction.
    pub order: i64,
    #[serde(default)]
    pub content_count: Option<u64>,
    #[serde(default)]
    pub project_count: Option<u64>,
}

impl CategoryRecord {
    /// The count shown for the given kind, 0 when the backend sent none.
    pub fn count(&self, kind: CountKind) -> u64 {
        match kind {
            CountKind::Contents => self.content_count.unwrap_or(0),
            CountKind::Projects => self.project_count.unwrap_or(0),
        }
    }
}

// ============================================================================
// Display Modes
// ============================================================================

/// Which pre-aggregated count a page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Contents,
    Projects,
}

/// How a hosting page uses the category tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Content browsing: one category at a time.
    Browse,
    /// Assigning categories to an upload: multiple, up to a cap.
    Assign,
}

impl DisplayMode {
    /// The count kind the archive pages pair with this mode: browse pages
    /// show content counts, assign pages show project counts.
    pub fn count_kind(self) -> CountKind {
        match self {
            DisplayMode::Browse => CountKind::Contents,
            DisplayMode::Assign => CountKind::Projects,
        }
    }
}

// ============================================================================
// Selection Limit
// ============================================================================

/// Maximum number of simultaneously selected categories.
///
/// Hosting pages supply a raw integer: 0 (or absent) means unlimited,
/// anything else is a positive cap. Observed values in this system are 1
/// (browse) and 3 (assign).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLimit {
    Unlimited,
    Max(NonZeroUsize),
}

impl SelectionLimit {
    /// Interpret a raw config value: 0 = unlimited.
    pub fn from_raw(raw: usize) -> Self {
        match NonZeroUsize::new(raw) {
            None => SelectionLimit::Unlimited,
            Some(n) => SelectionLimit::Max(n),
        }
    }

    /// Whether a selection of `len` items is already at the cap.
    pub fn is_full(self, len: usize) -> bool {
        match self {
            SelectionLimit::Unlimited => false,
            SelectionLimit::Max(n) => len >= n.get(),
        }
    }
}

impl Default for SelectionLimit {
    fn default() -> Self {
        SelectionLimit::Unlimited
    }
}
