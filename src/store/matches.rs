//! Mutual matches and their in-memory cache

use crate::store::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mutual match between the viewer and another user
///
/// Fetched, never mutated locally. The matching endpoints serve camelCase
/// keys and stringified ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Match id (stringified server id)
    pub id: String,
    /// First participant's user id
    pub user1_id: String,
    /// Second participant's user id
    pub user2_id: String,
    /// Compatibility percentage (0-100)
    pub compatibility_score: f64,
    /// Match status, `"mutual"` for everything this client sees
    pub status: String,
    /// When the match was created; activity fallback for empty conversations
    pub created_at: DateTime<Utc>,
    /// The participant who is not the viewer
    pub other_user: User,
}

/// In-memory cache of the viewer's mutual matches
///
/// Populated by a single fetch. Loads are guarded by a monotonically
/// increasing ticket so a stale response resolving late cannot overwrite a
/// newer one.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    matches: Vec<Match>,
    load_seq: u64,
}

impl MatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a load and return its ticket
    ///
    /// The ticket must be handed back to [`complete_load`](Self::complete_load)
    /// together with the fetched data.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Apply a fetched match list if the ticket is still current
    ///
    /// # Returns
    /// `true` if the data was applied, `false` if a newer load superseded it
    pub fn complete_load(&mut self, ticket: u64, matches: Vec<Match>) -> bool {
        if ticket != self.load_seq {
            tracing::debug!(ticket, current = self.load_seq, "dropping stale match load");
            return false;
        }
        self.matches = matches;
        true
    }

    /// Replace the cached list unconditionally
    pub fn set_matches(&mut self, matches: Vec<Match>) {
        self.matches = matches;
    }

    /// All cached matches in server order
    pub fn all(&self) -> &[Match] {
        &self.matches
    }

    /// Number of cached matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
