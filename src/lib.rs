//! In-memory domain core for a financial group's advertising-asset archive.
//!
//! The archive is an internal CRUD web application; this crate is its pure
//! state layer. Hosting pages fetch flat data over their own transport and
//! drive the structures here synchronously:
//!
//! - [`category`] — the core: flat category records → forest, selection with
//!   a per-mode cap, branch expansion, per-group count aggregation.
//! - [`session`] — one [`session::ArchiveSession`] per page load, with
//!   change notifications carrying full updated state.
//! - [`bookmarks`], [`share`], [`activity`] — the small domain pieces behind
//!   the bookmark, external-sharing, and activity pages.
//! - [`config`] — optional TOML configuration (selection caps, share TTL).
//!
//! No transport, persistence, or rendering lives here.
//!
//! # Example
//!
//! ```
//! use adarc::category::{CategoryForest, CategoryId, ExpansionState};
//! # use adarc::category::{CategoryRecord, OwnerGroup};
//! # let records = vec![CategoryRecord {
//! #     id: CategoryId::from("tv"),
//! #     name: "TV".to_string(),
//! #     parent_id: None,
//! #     owner_group: OwnerGroup::Holding,
//! #     order: 0,
//! #     content_count: Some(3),
//! #     project_count: None,
//! # }];
//!
//! let forest = CategoryForest::build(&records);
//! let mut expansion = ExpansionState::new();
//! expansion.toggle(&CategoryId::from("tv"));
//! for row in forest.display_items(&expansion) {
//!     println!("{}{}", "  ".repeat(row.depth), row.name);
//! }
//! ```

pub mod activity;
pub mod bookmarks;
pub mod category;
pub mod config;
pub mod content;
pub mod session;
pub mod share;

pub use config::{ArchiveConfig, ConfigError};
pub use session::{ArchiveSession, SessionEvent};
