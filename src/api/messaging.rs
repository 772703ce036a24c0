//! Messaging endpoints: conversation fetch and send

use crate::api::ApiClient;
use crate::store::Message;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Envelope returned by the conversation endpoint
///
/// The client only keeps the message list; the conversation id is a
/// server-side detail.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationEnvelope {
    /// Server-side conversation id
    pub conversation_id: i64,
    /// Messages in the conversation, oldest first
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    match_id: &'a str,
    content: &'a str,
}

impl ApiClient {
    /// Fetch the message list for a match
    ///
    /// Unwraps the conversation envelope and returns only the messages.
    pub async fn get_messages(&self, match_id: &str) -> Result<Vec<Message>> {
        let response = self
            .authed(self.http.get(self.url(&format!("/messaging/{}/", match_id))))
            .send()
            .await?;

        let envelope: ConversationEnvelope = Self::parse_json(response).await?;
        Ok(envelope.messages)
    }

    /// Send a message and return the confirmed record
    ///
    /// Callers append the returned record to their local list; nothing is
    /// appended optimistically before the server confirms.
    pub async fn send_message(&self, match_id: &str, content: &str) -> Result<Message> {
        let response = self
            .authed(self.http.post(self.url("/messaging/send/")))
            .json(&SendMessageRequest { match_id, content })
            .send()
            .await?;

        let message: Message = Self::parse_json(response).await?;
        info!(match_id, message_id = %message.id, "message sent");
        Ok(message)
    }
}
