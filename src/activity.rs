//! In-memory activity log for the admin activity page.
//!
//! The backend keeps the durable audit trail; this ring only backs the
//! page's "recent activity" panel, so it is bounded and drops oldest first.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::content::ContentId;

// ============================================================================
// Entries
// ============================================================================

/// What a user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    View,
    Download,
    Bookmark,
    Share,
    Upload,
    Search,
}

impl ActivityAction {
    /// Label shown in the activity table.
    pub fn label(self) -> &'static str {
        match self {
            ActivityAction::View => "view",
            ActivityAction::Download => "download",
            ActivityAction::Bookmark => "bookmark",
            ActivityAction::Share => "share",
            ActivityAction::Upload => "upload",
            ActivityAction::Search => "search",
        }
    }
}

/// One row of the activity panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    /// Internal user id of the actor.
    pub actor: String,
    pub action: ActivityAction,
    /// Target asset, when the action has one (searches do not).
    pub target: Option<ContentId>,
    pub occurred_at: DateTime<Utc>,
}

// ============================================================================
// Log
// ============================================================================

/// Bounded ring of recent activity, oldest entries dropped first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Capacity 0 is clamped to 1 so `record` always retains something.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries newest first, as the activity page lists them.
    pub fn recent_first(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().rev()
    }
}
