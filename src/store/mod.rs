//! Client-side stores and domain records
//!
//! This module holds everything the client caches or persists locally:
//! - `user` - account records and roles
//! - `matches` - match records and their in-memory cache
//! - `messages` - message records and the per-match message cache
//! - `conversation` - the derived conversation projection
//! - `notification` - space-dashboard notification records
//! - `space` - living spaces, members, tasks, house rules
//! - `session` - the persisted token and the runtime session
//! - `settings` - application configuration
//! - `app_state` - the runtime state container

// Submodules
pub mod app_state;
pub mod conversation;
pub mod matches;
pub mod messages;
pub mod notification;
pub mod session;
pub mod settings;
pub mod space;
pub mod user;

// Re-export commonly used types
pub use app_state::AppState;
pub use conversation::{build_conversations, total_unread, Conversation};
pub use matches::{Match, MatchStore};
pub use messages::{Message, MessageStore};
pub use notification::Notification;
pub use session::{Session, StoredSession};
pub use settings::Settings;
pub use space::{
    HouseRules, LivingSpaceSummary, MemberRole, SpaceDashboard, SpaceListResponse, SpaceMember,
    SpaceTask,
};
pub use user::{Suggestion, User, UserRole};
