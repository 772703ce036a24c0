//! Runtime application state container

use crate::store::matches::MatchStore;
use crate::store::messages::MessageStore;
use crate::store::session::Session;

/// All client-side state for a signed-in (or signed-out) client
///
/// Held by the UI layer and mutated only on its thread; background fetches
/// hand their results back through the store update operations. Nothing here
/// is persisted except the session token, which has its own file.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The authenticated session, if signed in
    pub session: Option<Session>,
    /// Cached mutual matches
    pub matches: MatchStore,
    /// Cached per-match message lists
    pub messages: MessageStore,
}

impl AppState {
    /// Create a signed-out state with empty caches
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The signed-in user's id as it appears in message fields
    pub fn viewer_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.viewer_id())
    }

    /// Drop the session and all cached data (sign-out)
    pub fn reset(&mut self) {
        self.session = None;
        self.matches = MatchStore::new();
        self.messages = MessageStore::new();
    }
}
