//! Per-user bookmark state for the "my bookmarks" page.
//!
//! The same toggle idiom as branch expansion, but with a timestamp per entry
//! so the bookmarks page can list newest first. No cap applies.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::content::ContentId;

/// Set of bookmarked contents with the instant each was bookmarked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSet {
    entries: HashMap<ContentId, DateTime<Utc>>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a bookmark at the given instant.
    ///
    /// Returns whether the content is bookmarked after the toggle.
    /// Re-bookmarking after removal gets a fresh timestamp.
    pub fn toggle(&mut self, id: &ContentId, now: DateTime<Utc>) -> bool {
        if self.entries.remove(id).is_some() {
            false
        } else {
            self.entries.insert(id.clone(), now);
            true
        }
    }

    pub fn contains(&self, id: &ContentId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bookmarked contents, most recent first. Equal timestamps fall back to
    /// id order so the listing is stable.
    pub fn recent_first(&self) -> Vec<(&ContentId, DateTime<Utc>)> {
        let mut entries: Vec<(&ContentId, DateTime<Utc>)> =
            self.entries.iter().map(|(id, at)| (id, *at)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
