//! Conversation projections derived from the match and message stores

use crate::store::matches::Match;
use crate::store::messages::{Message, MessageStore};
use chrono::{DateTime, Utc};

/// A conversation as shown in the messages list
///
/// A view projection, not an entity: borrows the match and last message from
/// the stores and is rebuilt on every recompute. Never persisted.
#[derive(Debug, Clone)]
pub struct Conversation<'a> {
    /// The match this conversation belongs to
    pub match_info: &'a Match,
    /// Most recent message, if any exist yet
    pub last_message: Option<&'a Message>,
    /// Messages addressed to the viewer and not yet read
    pub unread_count: usize,
    /// Timestamp of the last message, or the match creation time when the
    /// conversation is still empty
    pub last_activity: DateTime<Utc>,
}

/// Join the match list and message store into a sorted conversation list
///
/// Produces one entry per match, ordered by most-recent activity descending.
/// Ties keep the order matches appear in the input (stable sort). Absent
/// data yields an empty output; there are no error conditions.
///
/// # Arguments
/// * `matches` - the viewer's mutual matches
/// * `messages` - per-match message lists
/// * `viewer_id` - the authenticated user's id, for the unread rule
pub fn build_conversations<'a>(
    matches: &'a [Match],
    messages: &'a MessageStore,
    viewer_id: &str,
) -> Vec<Conversation<'a>> {
    let mut conversations: Vec<Conversation<'a>> = matches
        .iter()
        .map(|m| {
            let thread = messages.thread(&m.id);
            let last_message = thread.last();
            let last_activity = last_message.map(|msg| msg.timestamp).unwrap_or(m.created_at);
            Conversation {
                match_info: m,
                last_message,
                unread_count: messages.unread_count(&m.id, viewer_id),
                last_activity,
            }
        })
        .collect();

    conversations.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
    conversations
}

/// Total unread messages across all conversations
pub fn total_unread(matches: &[Match], messages: &MessageStore, viewer_id: &str) -> usize {
    matches
        .iter()
        .map(|m| messages.unread_count(&m.id, viewer_id))
        .sum()
}
