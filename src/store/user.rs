//! User account records as served by the API

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Student account
    Student,
    /// Young professional account
    Professional,
    /// Administrator account
    Admin,
    /// Housing coordinator account
    Coordinator,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Student
    }
}

impl UserRole {
    /// Roles offered on the registration form
    pub fn registration_roles() -> Vec<UserRole> {
        vec![UserRole::Student, UserRole::Professional]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Professional => "Young Professional",
            UserRole::Admin => "Administrator",
            UserRole::Coordinator => "Housing Coordinator",
        }
    }

    /// Wire value sent to the registration endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Professional => "professional",
            UserRole::Admin => "admin",
            UserRole::Coordinator => "coordinator",
        }
    }
}

/// A user account as returned by the profile and auth endpoints
///
/// The upstream serializer mixes camelCase computed fields with snake_case
/// model fields; the renames below reproduce the wire exactly. Fields the
/// client never reads are left out (serde ignores unknowns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric account id
    pub id: i64,
    /// Login email
    pub email: String,
    /// Display handle
    pub username: String,
    /// Account role
    #[serde(default)]
    pub role: UserRole,
    /// Combined first + last name, may be empty
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    /// Present once the assessment has been completed; its presence drives
    /// the post-login destination
    #[serde(rename = "personalityProfile", default)]
    pub personality_profile: Option<serde_json::Value>,
    /// Current city of residence
    #[serde(default)]
    pub current_city: Option<String>,
    /// City the user wants to live in
    #[serde(default)]
    pub preferred_city: Option<String>,
    /// Monthly budget lower bound
    #[serde(default)]
    pub budget_min: Option<f64>,
    /// Monthly budget upper bound
    #[serde(default)]
    pub budget_max: Option<f64>,
    /// Free-form profile text
    #[serde(default)]
    pub bio: Option<String>,
    /// Occupation line shown on profile cards
    #[serde(default)]
    pub occupation: Option<String>,
}

impl User {
    /// Whether the personality assessment has been completed
    pub fn has_personality_profile(&self) -> bool {
        match &self.personality_profile {
            Some(serde_json::Value::Null) | None => false,
            Some(_) => true,
        }
    }

    /// Name to show in headers: full name when set, username otherwise
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A suggested roommate candidate with a computed compatibility score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// The candidate's account record
    #[serde(flatten)]
    pub user: User,
    /// Compatibility percentage (0-100) against the viewer
    #[serde(default)]
    pub compatibility_score: f64,
}
