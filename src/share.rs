//! Time-limited external share links.
//!
//! Internal users hand selected assets to outside partners via an opaque
//! link that stops working after a configured TTL. This module issues the
//! link and answers "is it still valid" — delivering the link (messenger,
//! mail) is the hosting page's business.

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

use crate::content::ContentId;

// ============================================================================
// Share Links
// ============================================================================

/// Validity of a link at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareLinkState {
    Active { remaining: Duration },
    Expired,
}

/// An issued share link over a set of archived assets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLink {
    /// Opaque URL token the backend resolves back to the asset set.
    pub token: String,
    pub content_ids: Vec<ContentId>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShareLink {
    /// Issue a link over the given assets, valid for `ttl` from `now`.
    ///
    /// The token is a SHA-256 over the asset ids and the issue instant, so
    /// re-sharing the same assets later yields a distinct link.
    pub fn issue(content_ids: &[ContentId], ttl: Duration, now: DateTime<Utc>) -> Result<Self> {
        if content_ids.is_empty() {
            bail!("Cannot issue a share link over an empty asset set");
        }
        if ttl <= Duration::zero() {
            bail!("Share link TTL must be positive");
        }

        let mut hasher = Sha256::new();
        for id in content_ids {
            hasher.update(id.as_str().as_bytes());
            hasher.update([0]); // separator so ["ab","c"] != ["a","bc"]
        }
        hasher.update(now.timestamp_micros().to_be_bytes());
        let token = format!("{:x}", hasher.finalize());

        let link = Self {
            token,
            content_ids: content_ids.to_vec(),
            issued_at: now,
            expires_at: now + ttl,
        };
        tracing::info!(
            token = %&link.token[..12],
            assets = link.content_ids.len(),
            expires_at = %link.expires_at,
            "Issued share link"
        );
        Ok(link)
    }

    /// Validity at the given instant. Expiry is exclusive: a link checked
    /// exactly at `expires_at` is already expired.
    pub fn state(&self, now: DateTime<Utc>) -> ShareLinkState {
        if now < self.expires_at {
            ShareLinkState::Active {
                remaining: self.expires_at - now,
            }
        } else {
            ShareLinkState::Expired
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        matches!(self.state(now), ShareLinkState::Active { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
