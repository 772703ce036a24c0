//! Screen state structures for TUI

use arboard::Clipboard;
use crate::api::{AssessmentAnswer, AssessmentQuestion};
use crate::store::{
    LivingSpaceSummary, Notification, SpaceDashboard, SpaceMember, Suggestion, UserRole,
};
use std::collections::HashSet;

/// Login screen state
#[derive(Debug)]
pub struct LoginScreen {
    /// Email input buffer
    pub email: String,
    /// Password input buffer
    pub password: String,
    /// Currently focused field (0 = email, 1 = password)
    pub focused_field: usize,
    /// Whether a sign-in request is in flight
    pub is_submitting: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl LoginScreen {
    /// Create new login screen
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focused_field: 0,
            is_submitting: false,
            status_message: Some("Enter your credentials and press Enter to sign in".to_string()),
            is_error: false,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.focused_field {
            0 => self.email.push(c),
            _ => self.password.push(c),
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            0 => self.email.pop(),
            _ => self.password.pop(),
        };
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % 2;
    }

    /// Paste clipboard contents into the focused field
    pub fn paste_from_clipboard(&mut self) {
        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => {
                    let text = text.trim().to_string();
                    match self.focused_field {
                        0 => self.email = text,
                        _ => self.password = text,
                    }
                    self.status_message = Some("Pasted from clipboard".to_string());
                    self.is_error = false;
                }
                Err(e) => {
                    self.status_message = Some(format!("Failed to paste: {}", e));
                    self.is_error = true;
                }
            },
            Err(e) => {
                self.status_message = Some(format!("Clipboard error: {}", e));
                self.is_error = true;
            }
        }
    }

    /// Validate the form before submitting
    pub fn validate(&mut self) -> bool {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.status_message = Some("Error: Email and password are required".to_string());
            self.is_error = true;
            return false;
        }
        true
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_submitting = false;
    }
}

/// Registration screen state
#[derive(Debug)]
pub struct RegisterScreen {
    /// Email input buffer
    pub email: String,
    /// Username input buffer
    pub username: String,
    /// Password input buffer
    pub password: String,
    /// Password confirmation buffer
    pub password_confirm: String,
    /// Roles offered at registration
    pub roles: Vec<UserRole>,
    /// Index of the selected role
    pub role_index: usize,
    /// Currently focused field (0 = email, 1 = username, 2 = password,
    /// 3 = confirm, 4 = role selector)
    pub focused_field: usize,
    /// Whether a registration request is in flight
    pub is_submitting: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl RegisterScreen {
    /// Number of focusable fields
    const FIELD_COUNT: usize = 5;

    /// Create new registration screen
    pub fn new() -> Self {
        Self {
            email: String::new(),
            username: String::new(),
            password: String::new(),
            password_confirm: String::new(),
            roles: UserRole::registration_roles(),
            role_index: 0,
            focused_field: 0,
            is_submitting: false,
            status_message: Some("Fill in the form and press Enter to create an account".to_string()),
            is_error: false,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.focused_field {
            0 => self.email.push(c),
            1 => self.username.push(c),
            2 => self.password.push(c),
            3 => self.password_confirm.push(c),
            _ => {} // Role row is cycled, not typed
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.focused_field {
            0 => self.email.pop(),
            1 => self.username.pop(),
            2 => self.password.pop(),
            3 => self.password_confirm.pop(),
            _ => None,
        };
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::FIELD_COUNT;
    }

    /// Move focus to the previous field
    pub fn previous_field(&mut self) {
        if self.focused_field > 0 {
            self.focused_field -= 1;
        } else {
            self.focused_field = Self::FIELD_COUNT - 1;
        }
    }

    /// Cycle to the next role option
    pub fn cycle_role(&mut self) {
        self.role_index = (self.role_index + 1) % self.roles.len();
    }

    /// Currently selected role
    pub fn selected_role(&self) -> UserRole {
        self.roles[self.role_index]
    }

    /// Validate the form before submitting
    pub fn validate(&mut self) -> bool {
        if self.email.trim().is_empty()
            || self.username.trim().is_empty()
            || self.password.is_empty()
        {
            self.status_message = Some("Error: Email, username and password are required".to_string());
            self.is_error = true;
            return false;
        }

        if self.password != self.password_confirm {
            self.status_message = Some("Error: Passwords do not match".to_string());
            self.is_error = true;
            return false;
        }

        true
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_submitting = false;
    }
}

/// Personality assessment screen state
#[derive(Debug)]
pub struct AssessmentScreen {
    /// Questions in presentation order
    pub questions: Vec<AssessmentQuestion>,
    /// Recorded response per question (1-5 Likert scale)
    pub responses: Vec<Option<u8>>,
    /// Index of the question being shown
    pub current: usize,
    /// Whether the questions are still loading
    pub is_loading: bool,
    /// Whether a submission is in flight
    pub is_submitting: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl AssessmentScreen {
    /// Create new assessment screen in its loading state
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            responses: Vec::new(),
            current: 0,
            is_loading: true,
            is_submitting: false,
            status_message: Some("Loading assessment questions...".to_string()),
            is_error: false,
        }
    }

    /// Install the loaded questions
    pub fn set_questions(&mut self, questions: Vec<AssessmentQuestion>) {
        self.responses = vec![None; questions.len()];
        self.questions = questions;
        self.current = 0;
        self.is_loading = false;
        self.status_message =
            Some("Answer with 1-5, arrows to move between questions".to_string());
        self.is_error = false;
    }

    /// Question currently being shown
    pub fn current_question(&self) -> Option<&AssessmentQuestion> {
        self.questions.get(self.current)
    }

    /// Record a response for the current question and advance
    pub fn record_response(&mut self, value: u8) {
        if !(1..=5).contains(&value) {
            return;
        }
        if let Some(slot) = self.responses.get_mut(self.current) {
            *slot = Some(value);
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the next question
    pub fn next_question(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question
    pub fn previous_question(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Number of answered questions
    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_some()).count()
    }

    /// Whether every question has a response
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.answered_count() == self.questions.len()
    }

    /// Get progress percentage
    pub fn progress_percentage(&self) -> u16 {
        if self.questions.is_empty() {
            0
        } else {
            ((self.answered_count() as f64 / self.questions.len() as f64) * 100.0) as u16
        }
    }

    /// Collect answers for submission, or None while incomplete
    pub fn collect_answers(&self) -> Option<Vec<AssessmentAnswer>> {
        if !self.is_complete() {
            return None;
        }

        Some(
            self.questions
                .iter()
                .zip(&self.responses)
                .filter_map(|(question, response)| {
                    response.map(|value| AssessmentAnswer {
                        question: question.id,
                        response_value: value,
                    })
                })
                .collect(),
        )
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_loading = false;
        self.is_submitting = false;
    }
}

/// Roommate suggestions screen state
#[derive(Debug)]
pub struct SuggestionsScreen {
    /// Loaded suggestions
    pub suggestions: Vec<Suggestion>,
    /// Selected suggestion index
    pub selected_index: usize,
    /// Whether suggestions are being loaded
    pub is_loading: bool,
    /// Whether an accept/reject request is in flight
    pub is_interacting: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl SuggestionsScreen {
    /// Create new suggestions screen in its loading state
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: 0,
            is_loading: true,
            is_interacting: false,
            status_message: Some("Loading suggestions...".to_string()),
            is_error: false,
        }
    }

    /// Install the loaded suggestions
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        if self.selected_index >= self.suggestions.len() {
            self.selected_index = self.suggestions.len().saturating_sub(1);
        }
        self.is_loading = false;
        self.is_interacting = false;
    }

    /// Currently selected suggestion
    pub fn selected(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.selected_index)
    }

    /// Move to next suggestion
    pub fn next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.suggestions.len();
        }
    }

    /// Move to previous suggestion
    pub fn previous(&mut self) {
        if !self.suggestions.is_empty() {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = self.suggestions.len() - 1;
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = false;
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_loading = false;
        self.is_interacting = false;
    }
}

/// Conversations list screen state
#[derive(Debug)]
pub struct ConversationsScreen {
    /// Selected conversation index
    pub selected_index: usize,
    /// Whether a refresh is in flight
    pub is_refreshing: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl ConversationsScreen {
    /// Create new conversations screen
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            is_refreshing: false,
            status_message: None,
        }
    }

    /// Move to next conversation
    pub fn next(&mut self, conversation_count: usize) {
        if conversation_count > 0 {
            self.selected_index = (self.selected_index + 1) % conversation_count;
        }
    }

    /// Move to previous conversation
    pub fn previous(&mut self, conversation_count: usize) {
        if conversation_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = conversation_count - 1;
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

/// Chat screen state
#[derive(Debug)]
pub struct ChatScreen {
    /// Identifier of the match being chatted in
    pub match_id: String,
    /// Display name of the other participant
    pub title: String,
    /// Input buffer for message composition
    pub input: String,
    /// Scroll offset for message history
    pub scroll_offset: usize,
    /// Whether a send request is in flight
    pub is_sending: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl ChatScreen {
    /// Create new chat screen
    pub fn new(match_id: String, title: String) -> Self {
        Self {
            match_id,
            title,
            input: String::new(),
            scroll_offset: 0,
            is_sending: false,
            status_message: None,
        }
    }

    /// Add character to input
    pub fn add_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove last character from input
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clear input buffer
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Scroll message history up towards older messages
    ///
    /// The offset counts back from the latest message, so 0 keeps the
    /// view pinned to the bottom.
    pub fn scroll_up(&mut self, max_offset: usize) {
        if self.scroll_offset < max_offset {
            self.scroll_offset += 1;
        }
    }

    /// Scroll message history down towards the latest message
    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    /// Append clipboard contents to the input buffer
    pub fn paste_from_clipboard(&mut self) {
        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => {
                    self.input.push_str(text.trim());
                    self.status_message = Some("Pasted from clipboard".to_string());
                }
                Err(e) => {
                    self.status_message = Some(format!("Failed to paste: {}", e));
                }
            },
            Err(e) => {
                self.status_message = Some(format!("Clipboard error: {}", e));
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Living spaces list screen state
#[derive(Debug)]
pub struct SpacesScreen {
    /// Spaces the user belongs to
    pub spaces: Vec<LivingSpaceSummary>,
    /// Selected space index
    pub selected_index: usize,
    /// Whether spaces are being loaded
    pub is_loading: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl SpacesScreen {
    /// Create new spaces screen in its loading state
    pub fn new() -> Self {
        Self {
            spaces: Vec::new(),
            selected_index: 0,
            is_loading: true,
            status_message: Some("Loading living spaces...".to_string()),
            is_error: false,
        }
    }

    /// Install the loaded spaces
    pub fn set_spaces(&mut self, spaces: Vec<LivingSpaceSummary>) {
        self.spaces = spaces;
        if self.selected_index >= self.spaces.len() {
            self.selected_index = self.spaces.len().saturating_sub(1);
        }
        self.is_loading = false;
        self.status_message = None;
    }

    /// Currently selected space
    pub fn selected(&self) -> Option<&LivingSpaceSummary> {
        self.spaces.get(self.selected_index)
    }

    /// Move to next space
    pub fn next(&mut self) {
        if !self.spaces.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.spaces.len();
        }
    }

    /// Move to previous space
    pub fn previous(&mut self) {
        if !self.spaces.is_empty() {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = self.spaces.len() - 1;
            }
        }
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_loading = false;
    }
}

/// Living space dashboard screen state
#[derive(Debug)]
pub struct SpaceDashboardScreen {
    /// Identifier of the space being shown
    pub space_id: i64,
    /// Name of the space, shown while the dashboard loads
    pub space_name: String,
    /// Loaded dashboard payload
    pub dashboard: Option<SpaceDashboard>,
    /// Members of the space
    pub members: Vec<SpaceMember>,
    /// Selected notification index (within unread notifications)
    pub selected_notification: usize,
    /// Notification ids with a dismissal in flight
    pub dismissing: HashSet<i64>,
    /// Whether the dashboard is being loaded
    pub is_loading: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl SpaceDashboardScreen {
    /// Create new space dashboard screen in its loading state
    pub fn new(space_id: i64, space_name: String) -> Self {
        Self {
            space_id,
            space_name,
            dashboard: None,
            members: Vec::new(),
            selected_notification: 0,
            dismissing: HashSet::new(),
            is_loading: true,
            status_message: None,
            is_error: false,
        }
    }

    /// Install a loaded dashboard payload
    pub fn set_dashboard(&mut self, dashboard: SpaceDashboard) {
        self.space_name = dashboard.living_space.name.clone();
        self.dashboard = Some(dashboard);
        self.is_loading = false;

        let count = self.unread_notifications().len();
        if self.selected_notification >= count {
            self.selected_notification = count.saturating_sub(1);
        }
    }

    /// Install the loaded member list
    pub fn set_members(&mut self, members: Vec<SpaceMember>) {
        self.members = members;
    }

    /// Unread notifications from the loaded dashboard
    pub fn unread_notifications(&self) -> Vec<&Notification> {
        self.dashboard
            .as_ref()
            .map(|d| d.notifications.iter().filter(|n| !n.is_read).collect())
            .unwrap_or_default()
    }

    /// Identifier of the selected notification
    pub fn selected_notification_id(&self) -> Option<i64> {
        self.unread_notifications()
            .get(self.selected_notification)
            .map(|n| n.id)
    }

    /// Move to next notification
    pub fn next_notification(&mut self) {
        let count = self.unread_notifications().len();
        if count > 0 {
            self.selected_notification = (self.selected_notification + 1) % count;
        }
    }

    /// Move to previous notification
    pub fn previous_notification(&mut self) {
        let count = self.unread_notifications().len();
        if count > 0 {
            if self.selected_notification > 0 {
                self.selected_notification -= 1;
            } else {
                self.selected_notification = count - 1;
            }
        }
    }

    /// Record a dismissal as in flight
    ///
    /// Returns false if a dismissal for this notification is already running.
    pub fn begin_dismiss(&mut self, notification_id: i64) -> bool {
        self.dismissing.insert(notification_id)
    }

    /// Record a dismissal as finished
    pub fn finish_dismiss(&mut self, notification_id: i64) {
        self.dismissing.remove(&notification_id);
    }

    /// Whether a dismissal for this notification is in flight
    pub fn is_dismissing(&self, notification_id: i64) -> bool {
        self.dismissing.contains(&notification_id)
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_loading = false;
    }
}

/// Profile screen state
#[derive(Debug)]
pub struct ProfileScreen {
    /// Whether a profile refresh is in flight
    pub is_refreshing: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl ProfileScreen {
    /// Create new profile screen
    pub fn new() -> Self {
        Self {
            is_refreshing: false,
            status_message: None,
            is_error: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = false;
    }

    /// Set an error status
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
        self.is_refreshing = false;
    }
}
