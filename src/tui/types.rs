//! Core types for TUI screens and navigation

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in form
    Login,
    /// Account creation form
    Register,
    /// Personality assessment questionnaire
    Assessment,
    /// Main menu shown after sign-in
    Dashboard,
    /// Roommate suggestions with accept/reject
    Suggestions,
    /// List of conversations with matched users
    Conversations,
    /// Individual conversation view
    Chat,
    /// List of living spaces the user belongs to
    Spaces,
    /// Dashboard for a single living space
    SpaceDashboard,
    /// Account profile view
    Profile,
}

/// Main menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Navigate to roommate suggestions
    FindRoommates,
    /// Navigate to conversations
    Messages,
    /// Navigate to living spaces
    LivingSpaces,
    /// Navigate to profile
    Profile,
    /// Redo the personality assessment
    RetakeAssessment,
    /// Sign out of the account
    Logout,
    /// Exit application
    Exit,
}

impl MenuItem {
    /// Get all menu items in order
    pub fn all() -> Vec<Self> {
        vec![
            Self::FindRoommates,
            Self::Messages,
            Self::LivingSpaces,
            Self::Profile,
            Self::RetakeAssessment,
            Self::Logout,
            Self::Exit,
        ]
    }

    /// Get display label for menu item
    pub fn label(&self) -> &'static str {
        match self {
            Self::FindRoommates => "Find Roommates",
            Self::Messages => "Messages",
            Self::LivingSpaces => "Living Spaces",
            Self::Profile => "Profile",
            Self::RetakeAssessment => "Retake Assessment",
            Self::Logout => "Log Out",
            Self::Exit => "Exit",
        }
    }

    /// Get description for menu item
    pub fn description(&self) -> &'static str {
        match self {
            Self::FindRoommates => "Browse compatible roommate suggestions",
            Self::Messages => "View conversations with your matches",
            Self::LivingSpaces => "Manage your shared living spaces",
            Self::Profile => "View your account and personality profile",
            Self::RetakeAssessment => "Answer the personality questionnaire again",
            Self::Logout => "Sign out and return to the login screen",
            Self::Exit => "Exit PairPad",
        }
    }
}
