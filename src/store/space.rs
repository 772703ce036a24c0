//! Living spaces, members, and the space-dashboard payload

use crate::store::notification::Notification;
use serde::{Deserialize, Serialize};

/// Role of a member within a living space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Can manage members and delete the space
    Admin,
    /// Regular member
    Member,
    /// Temporary guest
    Guest,
}

impl MemberRole {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
            MemberRole::Guest => "guest",
        }
    }
}

/// A living space as listed on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivingSpaceSummary {
    /// Space id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Number of members
    #[serde(default)]
    pub member_count: u32,
    /// The viewer's role in this space
    #[serde(default)]
    pub role: Option<MemberRole>,
}

/// A member of a living space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceMember {
    /// Membership record id
    pub id: i64,
    /// The member's user id
    pub user: i64,
    /// The member's handle
    pub username: String,
    /// Combined first + last name, may be absent
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role within the space
    pub role: MemberRole,
}

impl SpaceMember {
    /// Name to show in the members panel
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A household task shown on the space dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceTask {
    /// Task id
    pub id: i64,
    /// Task title
    pub title: String,
    /// Category, e.g. `"cleaning"`
    #[serde(default)]
    pub category: String,
    /// Username the task is assigned to
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Due date as served (date string), if set
    #[serde(default)]
    pub due_date: Option<String>,
    /// Task status, e.g. `"pending"` or `"completed"`
    #[serde(default)]
    pub status: String,
}

impl SpaceTask {
    /// Whether the task has been completed
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// House rules agreed by the space's members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseRules {
    /// Quiet hours start (e.g. `"22:00"`), if set
    #[serde(default)]
    pub quiet_hours_start: Option<String>,
    /// Quiet hours end, if set
    #[serde(default)]
    pub quiet_hours_end: Option<String>,
    /// Whether guests are allowed
    #[serde(default)]
    pub guests_allowed: bool,
    /// Guest cap when guests are allowed
    #[serde(default)]
    pub max_guests: Option<u32>,
    /// Whether smoking is allowed
    #[serde(default)]
    pub smoking_allowed: bool,
    /// Whether pets are allowed
    #[serde(default)]
    pub pets_allowed: bool,
    /// Free-form additional rules
    #[serde(default)]
    pub custom_rules: String,
}

/// Full dashboard payload for one living space
///
/// Sections this client does not render (expenses, bills, calendar) are
/// ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceDashboard {
    /// The space being viewed
    pub living_space: LivingSpaceSummary,
    /// Unread notifications for the viewer
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Household tasks
    #[serde(default)]
    pub tasks: Vec<SpaceTask>,
    /// Agreed house rules, once created
    #[serde(default)]
    pub house_rules: Option<HouseRules>,
}

/// Response shape of the space list endpoint
///
/// The server returns either a bare array or a DRF pagination envelope
/// depending on configuration; both decode to the same list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpaceListResponse {
    /// Bare array
    Plain(Vec<LivingSpaceSummary>),
    /// DRF pagination envelope
    Paginated {
        /// The current page of spaces
        results: Vec<LivingSpaceSummary>,
    },
}

impl SpaceListResponse {
    /// Unwrap either shape into the space list
    pub fn into_spaces(self) -> Vec<LivingSpaceSummary> {
        match self {
            SpaceListResponse::Plain(spaces) => spaces,
            SpaceListResponse::Paginated { results } => results,
        }
    }
}
