//! Content records as the browsing pages receive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{CategoryId, OwnerGroup};

/// Opaque content (asset) identifier issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        ContentId(s.to_owned())
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Listing row for an archived asset, as delivered by the content API.
///
/// Upload transport and file bytes stay with the backend; pages only ever
/// hold these summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub id: ContentId,
    pub title: String,
    pub owner_group: OwnerGroup,
    /// Categories the asset is assigned to (up to the assign-page cap).
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    pub registered_at: DateTime<Utc>,
}
