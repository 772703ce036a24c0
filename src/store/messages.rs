//! Message records and the per-match message cache

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single chat message as served by the messaging endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message id
    pub id: String,
    /// Author's user id
    pub sender_id: String,
    /// Addressee's user id
    pub receiver_id: String,
    /// Message text
    pub content: String,
    /// Server-side creation time
    pub timestamp: DateTime<Utc>,
    /// Whether the addressee has read the message
    #[serde(default)]
    pub read_status: bool,
}

impl Message {
    /// Whether this message counts as unread for the given viewer
    pub fn is_unread_for(&self, viewer_id: &str) -> bool {
        !self.read_status && self.receiver_id == viewer_id
    }
}

/// Per-match message lists, keyed by match id
///
/// Populated by per-conversation fetches and appended to after a confirmed
/// send. Each match id carries its own load ticket so a slow fetch for a
/// conversation the user has already refreshed is dropped instead of
/// clobbering the newer list.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    threads: HashMap<String, Vec<Message>>,
    load_seq: HashMap<String, u64>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a load for one conversation and return its ticket
    pub fn begin_load(&mut self, match_id: &str) -> u64 {
        let seq = self.load_seq.entry(match_id.to_string()).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Apply a fetched message list if the ticket is still current
    ///
    /// # Returns
    /// `true` if the data was applied, `false` if a newer load superseded it
    pub fn complete_load(&mut self, match_id: &str, ticket: u64, messages: Vec<Message>) -> bool {
        let current = self.load_seq.get(match_id).copied().unwrap_or(0);
        if ticket != current {
            tracing::debug!(
                match_id,
                ticket,
                current,
                "dropping stale message load"
            );
            return false;
        }
        self.threads.insert(match_id.to_string(), messages);
        true
    }

    /// Replace one conversation's list unconditionally
    pub fn set_messages(&mut self, match_id: &str, messages: Vec<Message>) {
        self.threads.insert(match_id.to_string(), messages);
    }

    /// Append a confirmed message to its conversation
    pub fn append(&mut self, match_id: &str, message: Message) {
        self.threads
            .entry(match_id.to_string())
            .or_default()
            .push(message);
    }

    /// Messages for a conversation, oldest first; empty slice when none cached
    pub fn thread(&self, match_id: &str) -> &[Message] {
        self.threads.get(match_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any messages are cached for a conversation
    pub fn has_thread(&self, match_id: &str) -> bool {
        self.threads.contains_key(match_id)
    }

    /// Unread message count for a conversation from the viewer's perspective
    ///
    /// Counts messages addressed to the viewer with `read_status` false.
    /// Always recomputed from the list, never cached.
    pub fn unread_count(&self, match_id: &str, viewer_id: &str) -> usize {
        self.thread(match_id)
            .iter()
            .filter(|m| m.is_unread_for(viewer_id))
            .count()
    }

    /// Locally mark every message addressed to the viewer as read
    ///
    /// Messages the viewer sent are untouched. Used when a conversation is
    /// opened; the server keeps its own read state.
    pub fn mark_read_for(&mut self, match_id: &str, viewer_id: &str) {
        if let Some(messages) = self.threads.get_mut(match_id) {
            for message in messages.iter_mut() {
                if message.receiver_id == viewer_id {
                    message.read_status = true;
                }
            }
        }
    }
}
