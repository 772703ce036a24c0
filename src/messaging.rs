//! High-level messaging flows
//!
//! This module combines the API client and the message store into the
//! user-facing messaging operations: refreshing a conversation with
//! stale-guarding, and the write-then-append send flow.

use crate::api::ApiClient;
use crate::store::{Message, MessageStore};
use crate::Result;

/// Validate outgoing message text
///
/// # Returns
/// The trimmed text, or `None` when the input is empty or whitespace-only
/// and must not produce a network call.
pub fn prepare_message(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Refresh one conversation from the server
///
/// Takes a load ticket before the fetch and applies the result only if no
/// newer load started in the meantime, so out-of-order responses cannot
/// overwrite fresher data.
///
/// # Returns
/// * `Ok(true)` - fetched and applied
/// * `Ok(false)` - fetched but superseded by a newer load
pub async fn refresh_conversation(
    api: &ApiClient,
    store: &mut MessageStore,
    match_id: &str,
) -> Result<bool> {
    let ticket = store.begin_load(match_id);
    let messages = api.get_messages(match_id).await?;
    Ok(store.complete_load(match_id, ticket, messages))
}

/// Send a message and append the confirmed record to the store
///
/// Write-then-append: nothing is added to the store until the server returns
/// the created record. Empty or whitespace-only input short-circuits before
/// any network traffic.
///
/// # Arguments
/// * `api` - the API client
/// * `store` - the per-match message cache
/// * `match_id` - conversation to send into
/// * `content` - raw input text; trimmed before sending
///
/// # Returns
/// * `Ok(Some(message))` - sent and appended
/// * `Ok(None)` - input was blank, nothing sent
///
/// # Example
/// ```rust,no_run
/// use pairpad::api::ApiClient;
/// use pairpad::messaging::send_message;
/// use pairpad::store::{MessageStore, Settings};
///
/// # async fn example() -> pairpad::Result<()> {
/// let api = ApiClient::new(&Settings::default())?;
/// let mut store = MessageStore::new();
///
/// if let Some(sent) = send_message(&api, &mut store, "42", "hello there").await? {
///     println!("delivered as {}", sent.id);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn send_message(
    api: &ApiClient,
    store: &mut MessageStore,
    match_id: &str,
    content: &str,
) -> Result<Option<Message>> {
    let content = match prepare_message(content) {
        Some(content) => content,
        None => {
            tracing::debug!(match_id, "ignoring blank message");
            return Ok(None);
        }
    };

    let message = api.send_message(match_id, content).await?;
    store.append(match_id, message.clone());
    Ok(Some(message))
}
