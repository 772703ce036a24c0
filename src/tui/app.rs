//! Main TUI application state and logic

use crate::api::{AcceptMatchResponse, ApiClient, AssessmentQuestion};
use crate::auth::{self, Destination};
use crate::store::{
    AppState, LivingSpaceSummary, Match, Message, Session, Settings, SpaceDashboard, SpaceMember,
    Suggestion, User,
};
use crate::tui::screens::*;
use crate::tui::types::{MenuItem, Screen};
use crate::Result;
use std::path::PathBuf;
use std::thread::JoinHandle;

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Currently selected menu item
    pub selected_index: usize,
    /// Menu items
    pub menu_items: Vec<MenuItem>,
    /// Should quit
    pub should_quit: bool,
    /// Client-side state (session, matches, message threads)
    pub app_state: AppState,
    /// API client, cloned into background workers
    pub api: ApiClient,
    /// Path of the persisted session file
    session_path: PathBuf,
    /// Login screen (when active)
    pub login_screen: Option<LoginScreen>,
    /// Registration screen (when active)
    pub register_screen: Option<RegisterScreen>,
    /// Assessment screen (when active)
    pub assessment_screen: Option<AssessmentScreen>,
    /// Suggestions screen (when active)
    pub suggestions_screen: Option<SuggestionsScreen>,
    /// Conversations screen (when active)
    pub conversations_screen: Option<ConversationsScreen>,
    /// Chat screen (when active)
    pub chat_screen: Option<ChatScreen>,
    /// Spaces screen (when active)
    pub spaces_screen: Option<SpacesScreen>,
    /// Space dashboard screen (when active)
    pub space_dashboard_screen: Option<SpaceDashboardScreen>,
    /// Profile screen (when active)
    pub profile_screen: Option<ProfileScreen>,
    /// Session restore running at startup
    restore_task: Option<JoinHandle<Result<Option<Session>>>>,
    /// Sign-in or registration in flight
    auth_task: Option<JoinHandle<Result<(Session, Destination)>>>,
    /// Match list refresh in flight, keyed by its load ticket
    matches_task: Option<(u64, JoinHandle<Result<Vec<Match>>>)>,
    /// Bulk refresh of every message thread, one ticket per thread
    threads_task: Option<JoinHandle<Vec<(String, u64, Result<Vec<Message>>)>>>,
    /// Single thread refresh in flight
    thread_task: Option<(String, u64, JoinHandle<Result<Vec<Message>>>)>,
    /// Message send in flight
    send_task: Option<(String, JoinHandle<Result<Message>>)>,
    /// Suggestions load in flight
    suggestions_task: Option<JoinHandle<Result<Vec<Suggestion>>>>,
    /// Accept/reject request in flight (accept carries a response body)
    interaction_task: Option<(i64, JoinHandle<Result<Option<AcceptMatchResponse>>>)>,
    /// Assessment questions load in flight
    assessment_load_task: Option<JoinHandle<Result<Vec<AssessmentQuestion>>>>,
    /// Assessment submission in flight
    assessment_submit_task: Option<JoinHandle<Result<serde_json::Value>>>,
    /// Spaces list load in flight
    spaces_task: Option<JoinHandle<Result<Vec<LivingSpaceSummary>>>>,
    /// Space dashboard load in flight
    dashboard_task: Option<(i64, JoinHandle<Result<SpaceDashboard>>)>,
    /// Space member list load in flight
    members_task: Option<(i64, JoinHandle<Result<Vec<SpaceMember>>>)>,
    /// Whether a dashboard refresh was requested while one was running
    dashboard_refresh_queued: bool,
    /// Notification dismissals in flight, several ids may run at once
    dismiss_tasks: Vec<(i64, JoinHandle<Result<()>>)>,
    /// Profile refresh in flight
    profile_task: Option<JoinHandle<Result<User>>>,
}

impl App {
    /// Create new application
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding `settings.json` and `session.json`.
    ///                Tests pass a temporary directory to avoid polluting
    ///                the user's state.
    pub fn new<P: AsRef<std::path::Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let settings = Settings::load(data_dir.join("settings.json"))?;
        let api = ApiClient::new(&settings)?;

        Ok(Self {
            current_screen: Screen::Login,
            selected_index: 0,
            menu_items: MenuItem::all(),
            should_quit: false,
            app_state: AppState::new(),
            api,
            session_path: data_dir.join("session.json"),
            login_screen: Some(LoginScreen::new()),
            register_screen: None,
            assessment_screen: None,
            suggestions_screen: None,
            conversations_screen: None,
            chat_screen: None,
            spaces_screen: None,
            space_dashboard_screen: None,
            profile_screen: None,
            restore_task: None,
            auth_task: None,
            matches_task: None,
            threads_task: None,
            thread_task: None,
            send_task: None,
            suggestions_task: None,
            interaction_task: None,
            assessment_load_task: None,
            assessment_submit_task: None,
            spaces_task: None,
            dashboard_task: None,
            members_task: None,
            dashboard_refresh_queued: false,
            dismiss_tasks: Vec::new(),
            profile_task: None,
        })
    }

    /// Poll every background task once
    ///
    /// Called from the event loop on each tick so completed workers can
    /// apply their results on the UI thread.
    pub fn poll_background_tasks(&mut self) {
        self.poll_session_restore();
        self.poll_auth();
        self.poll_matches_refresh();
        self.poll_threads_refresh();
        self.poll_thread_refresh();
        self.poll_send();
        self.poll_suggestions();
        self.poll_interaction();
        self.poll_assessment_questions();
        self.poll_assessment_submit();
        self.poll_spaces();
        self.poll_space_dashboard();
        self.poll_space_members();
        self.poll_dismissals();
        self.poll_profile();
    }

    // ------------------------------------------------------------------
    // Session restore
    // ------------------------------------------------------------------

    /// Trigger session restore from the persisted token (non-blocking)
    ///
    /// Should be called after App::new() so a saved session skips the
    /// login form.
    pub fn trigger_session_restore(&mut self) {
        if self.restore_task.is_some() {
            return;
        }

        if let Some(screen) = &mut self.login_screen {
            screen.status_message = Some("Checking for a saved session...".to_string());
            screen.is_error = false;
        }

        let api = self.api.clone();
        let session_path = self.session_path.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { auth::restore_session(&api, &session_path).await })
        });

        self.restore_task = Some(handle);
    }

    /// Poll for session restore completion
    ///
    /// Returns true if the restore completed this call.
    pub fn poll_session_restore(&mut self) -> bool {
        if let Some(handle) = self.restore_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(Some(session))) => {
                        let destination = auth::destination_for(&session.user);
                        self.app_state.session = Some(session);
                        self.enter_destination(destination);
                    }
                    Ok(Ok(None)) => {
                        if let Some(screen) = &mut self.login_screen {
                            screen.status_message = Some(
                                "Enter your credentials and press Enter to sign in".to_string(),
                            );
                            screen.is_error = false;
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.login_screen {
                            screen.set_error(format!("Session restore failed: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.login_screen {
                            screen.set_error(format!("Session restore panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                // Thread still running, put it back
                self.restore_task = Some(handle);
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Login and registration
    // ------------------------------------------------------------------

    /// Submit the login form
    pub fn submit_login(&mut self) {
        if self.auth_task.is_some() {
            return;
        }

        // Extract the form first to avoid borrow conflicts
        let (email, password) = match &mut self.login_screen {
            Some(screen) => {
                if !screen.validate() {
                    return;
                }
                screen.is_submitting = true;
                screen.status_message = Some("Signing in...".to_string());
                screen.is_error = false;
                (screen.email.trim().to_string(), screen.password.clone())
            }
            None => return,
        };

        let api = self.api.clone();
        let session_path = self.session_path.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { auth::sign_in(&api, &session_path, &email, &password).await })
        });

        self.auth_task = Some(handle);
    }

    /// Submit the registration form
    pub fn submit_registration(&mut self) {
        if self.auth_task.is_some() {
            return;
        }

        let (email, username, password, role) = match &mut self.register_screen {
            Some(screen) => {
                if !screen.validate() {
                    return;
                }
                screen.is_submitting = true;
                screen.status_message = Some("Creating account...".to_string());
                screen.is_error = false;
                (
                    screen.email.trim().to_string(),
                    screen.username.trim().to_string(),
                    screen.password.clone(),
                    screen.selected_role(),
                )
            }
            None => return,
        };

        let api = self.api.clone();
        let session_path = self.session_path.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move {
                auth::register(&api, &session_path, &username, &email, &password, role).await
            })
        });

        self.auth_task = Some(handle);
    }

    /// Poll for sign-in or registration completion
    ///
    /// Returns true if an authentication request completed this call.
    pub fn poll_auth(&mut self) -> bool {
        if let Some(handle) = self.auth_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok((session, destination))) => {
                        self.app_state.session = Some(session);
                        self.enter_destination(destination);
                    }
                    Ok(Err(e)) => {
                        let message = format!("{}", e);
                        if let Some(screen) = &mut self.login_screen {
                            screen.set_error(message.clone());
                        }
                        if let Some(screen) = &mut self.register_screen {
                            screen.set_error(message);
                        }
                    }
                    Err(e) => {
                        let message = format!("Request thread panicked: {:?}", e);
                        if let Some(screen) = &mut self.login_screen {
                            screen.set_error(message.clone());
                        }
                        if let Some(screen) = &mut self.register_screen {
                            screen.set_error(message);
                        }
                    }
                }
                return true;
            } else {
                self.auth_task = Some(handle);
            }
        }
        false
    }

    /// Route to the screen an authenticated user should land on
    fn enter_destination(&mut self, destination: Destination) {
        match destination {
            Destination::Dashboard => self.show_dashboard(),
            Destination::Assessment => self.show_assessment_screen(),
        }
    }

    /// Show the login screen, clearing all authenticated screens
    pub fn show_login_screen(&mut self) {
        self.current_screen = Screen::Login;
        self.selected_index = 0;
        self.login_screen = Some(LoginScreen::new());
        self.register_screen = None;
        self.assessment_screen = None;
        self.suggestions_screen = None;
        self.conversations_screen = None;
        self.chat_screen = None;
        self.spaces_screen = None;
        self.space_dashboard_screen = None;
        self.profile_screen = None;
    }

    /// Show the registration screen
    pub fn show_register_screen(&mut self) {
        self.register_screen = Some(RegisterScreen::new());
        self.login_screen = None;
        self.current_screen = Screen::Register;
    }

    /// Switch from registration back to login
    pub fn back_to_login(&mut self) {
        if self.auth_task.is_some() {
            return;
        }
        self.show_login_screen();
    }

    /// Sign out and return to the login screen
    ///
    /// Local state is cleared immediately; the server call runs in the
    /// background and failures only produce a log line.
    pub fn sign_out(&mut self) {
        let api = self.api.clone();
        let session_path = self.session_path.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move {
                if let Err(e) = auth::sign_out(&api, &session_path).await {
                    tracing::warn!("sign-out cleanup failed: {}", e);
                }
            });
        });

        self.abandon_background_tasks();
        self.app_state.reset();
        self.show_login_screen();
    }

    /// Drop every in-flight task handle
    ///
    /// Late results from before a sign-out must not land in the stores of
    /// the next session.
    fn abandon_background_tasks(&mut self) {
        self.restore_task = None;
        self.auth_task = None;
        self.matches_task = None;
        self.threads_task = None;
        self.thread_task = None;
        self.send_task = None;
        self.suggestions_task = None;
        self.interaction_task = None;
        self.assessment_load_task = None;
        self.assessment_submit_task = None;
        self.spaces_task = None;
        self.dashboard_task = None;
        self.members_task = None;
        self.dashboard_refresh_queued = false;
        self.dismiss_tasks.clear();
        self.profile_task = None;
    }

    // ------------------------------------------------------------------
    // Dashboard and menu
    // ------------------------------------------------------------------

    /// Show the dashboard and refresh matches and threads
    pub fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.selected_index = 0;
        self.login_screen = None;
        self.register_screen = None;
        self.assessment_screen = None;
        self.suggestions_screen = None;
        self.conversations_screen = None;
        self.chat_screen = None;
        self.spaces_screen = None;
        self.space_dashboard_screen = None;
        self.profile_screen = None;

        self.trigger_matches_refresh();
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.menu_items[self.selected_index]
    }

    /// Move to next menu item
    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.menu_items.len();
    }

    /// Move to previous menu item
    pub fn previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.menu_items.len() - 1;
        }
    }

    /// Select current menu item
    pub fn select(&mut self) {
        match self.selected_item() {
            MenuItem::FindRoommates => self.show_suggestions_screen(),
            MenuItem::Messages => self.show_conversations_screen(),
            MenuItem::LivingSpaces => self.show_spaces_screen(),
            MenuItem::Profile => self.show_profile_screen(),
            MenuItem::RetakeAssessment => self.show_assessment_screen(),
            MenuItem::Logout => self.sign_out(),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    // ------------------------------------------------------------------
    // Matches and conversations
    // ------------------------------------------------------------------

    /// Trigger a match list refresh (non-blocking)
    pub fn trigger_matches_refresh(&mut self) {
        if !self.app_state.is_authenticated() || self.matches_task.is_some() {
            return;
        }

        if let Some(screen) = &mut self.conversations_screen {
            screen.is_refreshing = true;
        }

        let ticket = self.app_state.matches.begin_load();
        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_matches().await })
        });

        self.matches_task = Some((ticket, handle));
    }

    /// Poll for match list refresh completion
    ///
    /// A completed load chains into a thread refresh so conversation
    /// previews and unread counts follow the new list.
    pub fn poll_matches_refresh(&mut self) -> bool {
        if let Some((ticket, handle)) = self.matches_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(matches)) => {
                        if self.app_state.matches.complete_load(ticket, matches) {
                            self.trigger_threads_refresh();
                        }
                    }
                    Ok(Err(e)) => {
                        tracing::warn!("match refresh failed: {}", e);
                        if let Some(screen) = &mut self.conversations_screen {
                            screen.is_refreshing = false;
                            screen.set_status(format!("Failed to load matches: {}", e));
                        }
                    }
                    Err(e) => {
                        tracing::error!("match refresh worker panicked: {:?}", e);
                        if let Some(screen) = &mut self.conversations_screen {
                            screen.is_refreshing = false;
                        }
                    }
                }
                return true;
            } else {
                self.matches_task = Some((ticket, handle));
            }
        }
        false
    }

    /// Trigger a refresh of every known message thread (non-blocking)
    pub fn trigger_threads_refresh(&mut self) {
        if !self.app_state.is_authenticated() || self.threads_task.is_some() {
            return;
        }

        // Take tickets up front so stale responses can be dropped later
        let ids: Vec<String> = self
            .app_state
            .matches
            .all()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        if ids.is_empty() {
            if let Some(screen) = &mut self.conversations_screen {
                screen.is_refreshing = false;
            }
            return;
        }
        let jobs: Vec<(String, u64)> = ids
            .into_iter()
            .map(|id| {
                let ticket = self.app_state.messages.begin_load(&id);
                (id, ticket)
            })
            .collect();

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move {
                let mut results = Vec::with_capacity(jobs.len());
                for (match_id, ticket) in jobs {
                    let fetched = api.get_messages(&match_id).await;
                    results.push((match_id, ticket, fetched));
                }
                results
            })
        });

        self.threads_task = Some(handle);
    }

    /// Poll for bulk thread refresh completion
    pub fn poll_threads_refresh(&mut self) -> bool {
        if let Some(handle) = self.threads_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(results) => {
                        for (match_id, ticket, fetched) in results {
                            match fetched {
                                Ok(messages) => {
                                    self.app_state
                                        .messages
                                        .complete_load(&match_id, ticket, messages);
                                }
                                Err(e) => {
                                    tracing::debug!(%match_id, "thread fetch failed: {}", e);
                                }
                            }
                        }
                        self.mark_open_chat_read();
                        if let Some(screen) = &mut self.conversations_screen {
                            screen.is_refreshing = false;
                        }
                    }
                    Err(e) => {
                        tracing::error!("conversation refresh worker panicked: {:?}", e);
                        if let Some(screen) = &mut self.conversations_screen {
                            screen.is_refreshing = false;
                        }
                    }
                }
                return true;
            } else {
                self.threads_task = Some(handle);
            }
        }
        false
    }

    /// Show the conversations screen
    pub fn show_conversations_screen(&mut self) {
        self.conversations_screen = Some(ConversationsScreen::new());
        self.current_screen = Screen::Conversations;

        // Refresh so previews reflect anything sent since the last visit
        self.trigger_matches_refresh();
        self.trigger_threads_refresh();
    }

    /// Open the conversation currently selected in the list
    pub fn open_selected_conversation(&mut self) {
        let viewer_id = match self.app_state.viewer_id() {
            Some(id) => id,
            None => return,
        };
        let index = match &self.conversations_screen {
            Some(screen) => screen.selected_index,
            None => return,
        };

        let conversations = crate::store::build_conversations(
            self.app_state.matches.all(),
            &self.app_state.messages,
            &viewer_id,
        );
        let (match_id, title) = match conversations.get(index) {
            Some(conversation) => (
                conversation.match_info.id.clone(),
                conversation.match_info.other_user.display_name().to_string(),
            ),
            None => return,
        };

        self.open_chat(match_id, title);
    }

    /// Open a chat, marking its thread read for the viewer
    pub fn open_chat(&mut self, match_id: String, title: String) {
        if let Some(viewer_id) = self.app_state.viewer_id() {
            self.app_state.messages.mark_read_for(&match_id, &viewer_id);
        }

        self.chat_screen = Some(ChatScreen::new(match_id.clone(), title));
        self.current_screen = Screen::Chat;
        self.trigger_thread_refresh(match_id);
    }

    /// Return from a chat to the conversations list
    pub fn back_to_conversations(&mut self) {
        self.chat_screen = None;
        self.current_screen = Screen::Conversations;
        if self.conversations_screen.is_none() {
            self.conversations_screen = Some(ConversationsScreen::new());
        }

        // Pick up anything that arrived while the chat was open
        self.trigger_matches_refresh();
    }

    /// Trigger a refresh of a single message thread (non-blocking)
    pub fn trigger_thread_refresh(&mut self, match_id: String) {
        if !self.app_state.is_authenticated() || self.thread_task.is_some() {
            return;
        }

        let ticket = self.app_state.messages.begin_load(&match_id);
        let api = self.api.clone();
        let id_for_fetch = match_id.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_messages(&id_for_fetch).await })
        });

        self.thread_task = Some((match_id, ticket, handle));
    }

    /// Poll for single thread refresh completion
    pub fn poll_thread_refresh(&mut self) -> bool {
        if let Some((match_id, ticket, handle)) = self.thread_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(messages)) => {
                        if self
                            .app_state
                            .messages
                            .complete_load(&match_id, ticket, messages)
                        {
                            self.mark_open_chat_read();
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(chat) = &mut self.chat_screen {
                            if chat.match_id == match_id {
                                chat.set_status(format!("Failed to load messages: {}", e));
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("thread refresh worker panicked: {:?}", e);
                    }
                }
                return true;
            } else {
                self.thread_task = Some((match_id, ticket, handle));
            }
        }
        false
    }

    /// Re-mark the open chat's thread as read
    ///
    /// Refreshes land messages with their server-side read flags, so a
    /// thread being looked at has to be flipped back.
    fn mark_open_chat_read(&mut self) {
        let open_match_id = match &self.chat_screen {
            Some(chat) => chat.match_id.clone(),
            None => return,
        };
        if let Some(viewer_id) = self.app_state.viewer_id() {
            self.app_state
                .messages
                .mark_read_for(&open_match_id, &viewer_id);
        }
    }

    /// Send the message currently drafted in the chat screen
    ///
    /// Blank drafts never reach the network, and a second submit while a
    /// send is in flight is ignored.
    pub fn submit_chat_message(&mut self) {
        if self.send_task.is_some() {
            return;
        }

        // Extract the draft first to avoid borrow conflicts
        let (match_id, draft) = match &self.chat_screen {
            Some(chat) => (chat.match_id.clone(), chat.input.clone()),
            None => return,
        };

        let content = match crate::messaging::prepare_message(&draft) {
            Some(content) => content.to_string(),
            None => return,
        };

        if let Some(chat) = &mut self.chat_screen {
            chat.is_sending = true;
            chat.set_status("Sending...".to_string());
        }

        let api = self.api.clone();
        let id_for_send = match_id.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.send_message(&id_for_send, &content).await })
        });

        self.send_task = Some((match_id, handle));
    }

    /// Poll for send completion
    ///
    /// On success the server's copy of the message is appended and the
    /// composer cleared; on failure the draft stays for another attempt.
    pub fn poll_send(&mut self) -> bool {
        if let Some((match_id, handle)) = self.send_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(message)) => {
                        self.app_state.messages.append(&match_id, message);
                        if let Some(chat) = &mut self.chat_screen {
                            if chat.match_id == match_id {
                                chat.clear_input();
                                chat.is_sending = false;
                                chat.clear_status();
                                chat.scroll_offset = 0;
                            }
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(chat) = &mut self.chat_screen {
                            if chat.match_id == match_id {
                                chat.is_sending = false;
                                chat.set_status(format!("Send failed: {}", e));
                            }
                        }
                    }
                    Err(e) => {
                        if let Some(chat) = &mut self.chat_screen {
                            chat.is_sending = false;
                            chat.set_status(format!("Send thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.send_task = Some((match_id, handle));
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Suggestions
    // ------------------------------------------------------------------

    /// Show the suggestions screen
    pub fn show_suggestions_screen(&mut self) {
        self.suggestions_screen = Some(SuggestionsScreen::new());
        self.current_screen = Screen::Suggestions;
        self.trigger_suggestions_refresh();
    }

    /// Trigger a suggestions load (non-blocking)
    pub fn trigger_suggestions_refresh(&mut self) {
        if !self.app_state.is_authenticated() || self.suggestions_task.is_some() {
            return;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_suggestions().await })
        });

        self.suggestions_task = Some(handle);
    }

    /// Poll for suggestions load completion
    pub fn poll_suggestions(&mut self) -> bool {
        if let Some(handle) = self.suggestions_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(suggestions)) => {
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.set_suggestions(suggestions);
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.set_error(format!("Failed to load suggestions: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.set_error(format!("Suggestions thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.suggestions_task = Some(handle);
            }
        }
        false
    }

    /// Accept the selected suggestion
    pub fn accept_selected_suggestion(&mut self) {
        if self.interaction_task.is_some() {
            return;
        }

        let user_id = match self.suggestions_screen.as_ref().and_then(|s| s.selected()) {
            Some(suggestion) => suggestion.user.id,
            None => return,
        };

        if let Some(screen) = &mut self.suggestions_screen {
            screen.is_interacting = true;
            screen.set_status("Sending response...".to_string());
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.accept_match(user_id).await.map(Some) })
        });

        self.interaction_task = Some((user_id, handle));
    }

    /// Reject the selected suggestion
    pub fn reject_selected_suggestion(&mut self) {
        if self.interaction_task.is_some() {
            return;
        }

        let user_id = match self.suggestions_screen.as_ref().and_then(|s| s.selected()) {
            Some(suggestion) => suggestion.user.id,
            None => return,
        };

        if let Some(screen) = &mut self.suggestions_screen {
            screen.is_interacting = true;
            screen.set_status("Sending response...".to_string());
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.reject_match(user_id).await.map(|_| None) })
        });

        self.interaction_task = Some((user_id, handle));
    }

    /// Poll for accept/reject completion
    ///
    /// The interacted suggestion is removed from the list either way; a
    /// mutual accept also refreshes the match list so the new match shows
    /// up in conversations.
    pub fn poll_interaction(&mut self) -> bool {
        if let Some((user_id, handle)) = self.interaction_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(response)) => {
                        let mut mutual = false;
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.suggestions.retain(|s| s.user.id != user_id);
                            if screen.selected_index >= screen.suggestions.len() {
                                screen.selected_index =
                                    screen.suggestions.len().saturating_sub(1);
                            }
                            screen.is_interacting = false;

                            match response {
                                Some(accepted) if accepted.is_mutual() => {
                                    mutual = true;
                                    screen.set_status(match accepted.compatibility_score {
                                        Some(score) => {
                                            format!("✓ It's a match! Compatibility {:.0}%", score)
                                        }
                                        None => "✓ It's a match!".to_string(),
                                    });
                                }
                                Some(_) => screen.set_status("✓ Interest sent".to_string()),
                                None => screen.set_status("Suggestion dismissed".to_string()),
                            }
                        }
                        if mutual {
                            self.trigger_matches_refresh();
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.set_error(format!("Response failed: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.suggestions_screen {
                            screen.set_error(format!("Response thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.interaction_task = Some((user_id, handle));
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Personality assessment
    // ------------------------------------------------------------------

    /// Show the assessment screen and load its questions
    pub fn show_assessment_screen(&mut self) {
        self.current_screen = Screen::Assessment;
        self.login_screen = None;
        self.register_screen = None;
        self.assessment_screen = Some(AssessmentScreen::new());
        self.trigger_assessment_load();
    }

    /// Trigger an assessment questions load (non-blocking)
    pub fn trigger_assessment_load(&mut self) {
        if self.assessment_load_task.is_some() {
            return;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_assessment().await })
        });

        self.assessment_load_task = Some(handle);
    }

    /// Poll for assessment questions load completion
    pub fn poll_assessment_questions(&mut self) -> bool {
        if let Some(handle) = self.assessment_load_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(questions)) => {
                        if let Some(screen) = &mut self.assessment_screen {
                            screen.set_questions(questions);
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.assessment_screen {
                            screen.set_error(format!("Failed to load questions: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.assessment_screen {
                            screen.set_error(format!("Question load panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.assessment_load_task = Some(handle);
            }
        }
        false
    }

    /// Submit the completed assessment
    pub fn submit_assessment(&mut self) {
        if self.assessment_submit_task.is_some() {
            return;
        }

        let answers = match &mut self.assessment_screen {
            Some(screen) => match screen.collect_answers() {
                Some(answers) => {
                    screen.is_submitting = true;
                    screen.status_message = Some("Submitting...".to_string());
                    screen.is_error = false;
                    answers
                }
                None => {
                    screen.status_message =
                        Some("Error: Answer every question before submitting".to_string());
                    screen.is_error = true;
                    return;
                }
            },
            None => return,
        };

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.submit_assessment(&answers).await })
        });

        self.assessment_submit_task = Some(handle);
    }

    /// Poll for assessment submission completion
    ///
    /// A computed profile is stored on the session user, which opens the
    /// dashboard to accounts that were gated on the assessment.
    pub fn poll_assessment_submit(&mut self) -> bool {
        if let Some(handle) = self.assessment_submit_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(profile)) => {
                        if let Some(session) = &mut self.app_state.session {
                            session.user.personality_profile = Some(profile);
                        }
                        self.show_dashboard();
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.assessment_screen {
                            screen.set_error(format!("Submission failed: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.assessment_screen {
                            screen.set_error(format!("Submission thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.assessment_submit_task = Some(handle);
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Living spaces
    // ------------------------------------------------------------------

    /// Show the living spaces screen
    pub fn show_spaces_screen(&mut self) {
        self.spaces_screen = Some(SpacesScreen::new());
        self.current_screen = Screen::Spaces;
        self.trigger_spaces_refresh();
    }

    /// Trigger a spaces list load (non-blocking)
    pub fn trigger_spaces_refresh(&mut self) {
        if !self.app_state.is_authenticated() || self.spaces_task.is_some() {
            return;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_my_spaces().await })
        });

        self.spaces_task = Some(handle);
    }

    /// Poll for spaces list load completion
    pub fn poll_spaces(&mut self) -> bool {
        if let Some(handle) = self.spaces_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(spaces)) => {
                        if let Some(screen) = &mut self.spaces_screen {
                            screen.set_spaces(spaces);
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.spaces_screen {
                            screen.set_error(format!("Failed to load spaces: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.spaces_screen {
                            screen.set_error(format!("Spaces thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.spaces_task = Some(handle);
            }
        }
        false
    }

    /// Open the dashboard of the selected living space
    pub fn open_selected_space(&mut self) {
        let (space_id, space_name) = match self.spaces_screen.as_ref().and_then(|s| s.selected()) {
            Some(space) => (space.id, space.name.clone()),
            None => return,
        };

        self.space_dashboard_screen = Some(SpaceDashboardScreen::new(space_id, space_name));
        self.current_screen = Screen::SpaceDashboard;
        self.trigger_space_dashboard_refresh();
        self.trigger_space_members_refresh();
    }

    /// Return from a space dashboard to the spaces list
    pub fn back_to_spaces(&mut self) {
        self.space_dashboard_screen = None;
        self.current_screen = Screen::Spaces;
        if self.spaces_screen.is_none() {
            self.spaces_screen = Some(SpacesScreen::new());
            self.trigger_spaces_refresh();
        }
    }

    /// Trigger a space dashboard load (non-blocking)
    ///
    /// A request arriving while one is running is queued so the panel
    /// still ends up reflecting the latest server state.
    pub fn trigger_space_dashboard_refresh(&mut self) {
        let space_id = match &self.space_dashboard_screen {
            Some(screen) => screen.space_id,
            None => return,
        };

        if self.dashboard_task.is_some() {
            self.dashboard_refresh_queued = true;
            return;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_space_dashboard(space_id).await })
        });

        self.dashboard_task = Some((space_id, handle));
    }

    /// Poll for space dashboard load completion
    pub fn poll_space_dashboard(&mut self) -> bool {
        if let Some((space_id, handle)) = self.dashboard_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(dashboard)) => {
                        if let Some(screen) = &mut self.space_dashboard_screen {
                            if screen.space_id == space_id {
                                screen.set_dashboard(dashboard);
                            }
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.space_dashboard_screen {
                            if screen.space_id == space_id {
                                screen.set_error(format!("Failed to load dashboard: {}", e));
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("space dashboard worker panicked: {:?}", e);
                    }
                }

                if self.dashboard_refresh_queued {
                    self.dashboard_refresh_queued = false;
                    self.trigger_space_dashboard_refresh();
                }
                return true;
            } else {
                self.dashboard_task = Some((space_id, handle));
            }
        }
        false
    }

    /// Trigger a space member list load (non-blocking)
    pub fn trigger_space_members_refresh(&mut self) {
        let space_id = match &self.space_dashboard_screen {
            Some(screen) => screen.space_id,
            None => return,
        };

        if self.members_task.is_some() {
            return;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_space_members(space_id).await })
        });

        self.members_task = Some((space_id, handle));
    }

    /// Poll for space member list load completion
    pub fn poll_space_members(&mut self) -> bool {
        if let Some((space_id, handle)) = self.members_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(members)) => {
                        if let Some(screen) = &mut self.space_dashboard_screen {
                            if screen.space_id == space_id {
                                screen.set_members(members);
                            }
                        }
                    }
                    Ok(Err(e)) => {
                        // Member list is a side panel, keep the dashboard usable
                        tracing::warn!("member list load failed: {}", e);
                    }
                    Err(e) => {
                        tracing::error!("member list worker panicked: {:?}", e);
                    }
                }
                return true;
            } else {
                self.members_task = Some((space_id, handle));
            }
        }
        false
    }

    /// Dismiss the selected notification
    ///
    /// Each notification gets at most one in-flight dismissal, but
    /// different notifications can be dismissed concurrently.
    pub fn dismiss_selected_notification(&mut self) {
        let notification_id = match self
            .space_dashboard_screen
            .as_ref()
            .and_then(|s| s.selected_notification_id())
        {
            Some(id) => id,
            None => return,
        };

        if let Some(screen) = &mut self.space_dashboard_screen {
            if !screen.begin_dismiss(notification_id) {
                return;
            }
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.mark_notification_read(notification_id).await })
        });

        self.dismiss_tasks.push((notification_id, handle));
    }

    /// Poll for dismissal completions
    ///
    /// Every finished dismissal refreshes the dashboard, success or not,
    /// so the panel converges on what the server has.
    pub fn poll_dismissals(&mut self) -> bool {
        if self.dismiss_tasks.is_empty() {
            return false;
        }

        let mut finished = Vec::new();
        let mut still_running = Vec::new();
        for (notification_id, handle) in self.dismiss_tasks.drain(..) {
            if handle.is_finished() {
                finished.push((notification_id, handle.join()));
            } else {
                still_running.push((notification_id, handle));
            }
        }
        self.dismiss_tasks = still_running;

        if finished.is_empty() {
            return false;
        }

        for (notification_id, outcome) in finished {
            if let Some(screen) = &mut self.space_dashboard_screen {
                screen.finish_dismiss(notification_id);
                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        screen.set_error(format!("Failed to dismiss notification: {}", e));
                    }
                    Err(e) => {
                        screen.set_error(format!("Dismiss thread panicked: {:?}", e));
                    }
                }
            }
            self.trigger_space_dashboard_refresh();
        }
        true
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    /// Show the profile screen and refresh the account data
    pub fn show_profile_screen(&mut self) {
        self.profile_screen = Some(ProfileScreen::new());
        self.current_screen = Screen::Profile;
        self.trigger_profile_refresh();
    }

    /// Trigger a profile refresh (non-blocking)
    pub fn trigger_profile_refresh(&mut self) {
        if !self.app_state.is_authenticated() || self.profile_task.is_some() {
            return;
        }

        if let Some(screen) = &mut self.profile_screen {
            screen.is_refreshing = true;
        }

        let api = self.api.clone();

        let handle = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move { api.get_profile().await })
        });

        self.profile_task = Some(handle);
    }

    /// Poll for profile refresh completion
    pub fn poll_profile(&mut self) -> bool {
        if let Some(handle) = self.profile_task.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(Ok(user)) => {
                        if let Some(session) = &mut self.app_state.session {
                            session.user = user;
                        }
                        if let Some(screen) = &mut self.profile_screen {
                            screen.is_refreshing = false;
                            screen.status_message = None;
                        }
                    }
                    Ok(Err(e)) => {
                        if let Some(screen) = &mut self.profile_screen {
                            screen.set_error(format!("Failed to refresh profile: {}", e));
                        }
                    }
                    Err(e) => {
                        if let Some(screen) = &mut self.profile_screen {
                            screen.set_error(format!("Profile thread panicked: {:?}", e));
                        }
                    }
                }
                return true;
            } else {
                self.profile_task = Some(handle);
            }
        }
        false
    }

    /// Return to the dashboard from a sub-screen
    pub fn back_to_dashboard(&mut self) {
        self.show_dashboard();
    }
}
