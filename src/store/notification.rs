//! Space-dashboard notification records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-issued event record surfaced on the space dashboard
///
/// Mutated only via a server round-trip that flips `is_read`; the only
/// client-side state is the in-flight dismissal marker kept by the screen.
/// These endpoints serve snake_case keys and integer ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification id
    pub id: i64,
    /// Event kind, e.g. `"task_assigned"`
    pub notification_type: String,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Whether the notification has been dismissed
    pub is_read: bool,
    /// Server-side creation time
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Icon for the notification kind, matching the web client's glyphs
    pub fn icon(&self) -> &str {
        match self.notification_type.as_str() {
            "task_assigned" => "📋",
            "task_completed" => "✅",
            "task_due_soon" => "⏰",
            "expense_added" => "💰",
            "expense_settled" => "✔️",
            "bill_due_soon" => "📄",
            "shopping_item_added" => "🛒",
            _ => "📬",
        }
    }
}
