//! Category tree core: forest construction, selection, expansion, counts.
//!
//! The backend delivers categories as a flat list; hosting pages hand that
//! list to [`CategoryForest::build`] and render [`CategoryForest::display_items`].
//! Selection and expansion are independent pieces of transient UI state,
//! reset on navigation.

mod expansion;
mod forest;
mod selection;
mod types;

pub use expansion::ExpansionState;
pub use forest::{CategoryForest, CategoryNode, CategoryTreeItem};
pub use selection::{SelectionChange, SelectionState};
pub use types::{
    CategoryId, CategoryRecord, CountKind, DisplayMode, OwnerGroup, SelectionLimit,
};
