// TUI tests - exercising the public tui module without a terminal

use crate::api::AssessmentQuestion;
use crate::store::{
    LivingSpaceSummary, Match, Message, Notification, Session, Settings, SpaceDashboard, User,
    UserRole,
};
use crate::tui::screens::*;
use crate::tui::{App, MenuItem, Screen};
use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

fn sample_user(id: i64, username: &str, with_profile: bool) -> User {
    User {
        id,
        email: format!("{}@example.com", username),
        username: username.to_string(),
        role: UserRole::Student,
        full_name: None,
        personality_profile: with_profile.then(|| serde_json::json!({"openness": 0.5})),
        current_city: None,
        preferred_city: None,
        budget_min: None,
        budget_max: None,
        bio: None,
        occupation: None,
    }
}

fn sample_match(id: &str, viewer_id: &str, other: User, created_at: DateTime<Utc>) -> Match {
    Match {
        id: id.to_string(),
        user1_id: viewer_id.to_string(),
        user2_id: other.id.to_string(),
        compatibility_score: 82.0,
        status: "mutual".to_string(),
        created_at,
        other_user: other,
    }
}

fn sample_message(
    id: &str,
    sender: &str,
    receiver: &str,
    timestamp: DateTime<Utc>,
    read: bool,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender.to_string(),
        receiver_id: receiver.to_string(),
        content: format!("message {}", id),
        timestamp,
        read_status: read,
    }
}

fn sample_question(id: i64) -> AssessmentQuestion {
    AssessmentQuestion {
        id,
        question_text: format!("Question {}", id),
        trait_name: "openness".to_string(),
        question_type: "likert".to_string(),
        reverse_scored: false,
        order: id,
    }
}

fn sample_notification(id: i64, is_read: bool) -> Notification {
    Notification {
        id,
        notification_type: "task_assigned".to_string(),
        title: format!("Notification {}", id),
        message: "Something happened".to_string(),
        is_read,
        created_at: Utc::now(),
    }
}

fn sample_dashboard(space_id: i64, notifications: Vec<Notification>) -> SpaceDashboard {
    SpaceDashboard {
        living_space: LivingSpaceSummary {
            id: space_id,
            name: "Sunny Flat".to_string(),
            address: String::new(),
            description: String::new(),
            member_count: 2,
            role: None,
        },
        notifications,
        tasks: Vec::new(),
        house_rules: None,
    }
}

/// App wired to a closed port, so any stray network call fails fast
fn test_app() -> (App, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    Settings {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout_secs: 1,
    }
    .save(dir.path().join("settings.json"))
    .expect("Failed to seed settings");

    let app = App::new(dir.path()).expect("Failed to create app");
    (app, dir)
}

fn signed_in_app() -> (App, TempDir) {
    let (mut app, dir) = test_app();
    app.app_state.session = Some(Session {
        user: sample_user(10, "vi", true),
        access_token: "token".to_string(),
    });
    (app, dir)
}

// -------------------------------------------------------------------
// App navigation
// -------------------------------------------------------------------

#[test]
fn test_app_starts_on_login_screen() {
    let (app, _dir) = test_app();
    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.login_screen.is_some());
    assert!(app.app_state.session.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_menu_items_cover_all_actions() {
    let (app, _dir) = test_app();
    assert_eq!(app.menu_items, MenuItem::all());
    assert_eq!(app.menu_items.len(), 7);
    assert_eq!(MenuItem::FindRoommates.label(), "Find Roommates");
    assert_eq!(MenuItem::Logout.label(), "Log Out");
    for item in MenuItem::all() {
        assert!(!item.description().is_empty());
    }
}

#[test]
fn test_menu_navigation_wraps() {
    let (mut app, _dir) = test_app();
    let count = app.menu_items.len();

    assert_eq!(app.selected_index, 0);
    for _ in 0..count {
        app.next();
    }
    assert_eq!(app.selected_index, 0);

    app.previous();
    assert_eq!(app.selected_index, count - 1);
}

#[test]
fn test_select_exit_requests_quit() {
    let (mut app, _dir) = signed_in_app();
    app.selected_index = app
        .menu_items
        .iter()
        .position(|item| *item == MenuItem::Exit)
        .expect("Exit should be in the menu");

    app.select();
    assert!(app.should_quit);
}

#[test]
fn test_show_register_screen_swaps_forms() {
    let (mut app, _dir) = test_app();
    app.show_register_screen();
    assert_eq!(app.current_screen, Screen::Register);
    assert!(app.register_screen.is_some());
    assert!(app.login_screen.is_none());

    app.back_to_login();
    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.login_screen.is_some());
    assert!(app.register_screen.is_none());
}

#[test]
fn test_session_restore_without_file_stays_on_login() {
    let (mut app, _dir) = test_app();
    app.trigger_session_restore();

    let mut completed = false;
    for _ in 0..100 {
        if app.poll_session_restore() {
            completed = true;
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    assert!(completed, "Session restore should finish");
    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.app_state.session.is_none());
}

#[test]
fn test_poll_background_tasks_with_nothing_pending() {
    let (mut app, _dir) = test_app();
    // No tasks in flight: polling must be a harmless no-op
    app.poll_background_tasks();
    assert_eq!(app.current_screen, Screen::Login);
}

#[test]
fn test_sign_out_resets_to_login() {
    let (mut app, _dir) = signed_in_app();
    let now = Utc::now();
    app.app_state
        .matches
        .set_matches(vec![sample_match("1", "10", sample_user(20, "ana", true), now)]);
    app.app_state
        .messages
        .append("1", sample_message("a", "20", "10", now, false));
    app.show_dashboard();

    app.sign_out();

    assert_eq!(app.current_screen, Screen::Login);
    assert!(app.app_state.session.is_none());
    assert!(app.app_state.matches.is_empty());
    assert!(app.app_state.messages.thread("1").is_empty());
}

// -------------------------------------------------------------------
// Chat flows
// -------------------------------------------------------------------

#[test]
fn test_open_chat_marks_thread_read() {
    let (mut app, _dir) = signed_in_app();
    let now = Utc::now();
    app.app_state
        .matches
        .set_matches(vec![sample_match("1", "10", sample_user(20, "ana", true), now)]);
    app.app_state.messages.set_messages(
        "1",
        vec![
            sample_message("a", "20", "10", now - Duration::minutes(2), false),
            sample_message("b", "20", "10", now - Duration::minutes(1), false),
        ],
    );
    assert_eq!(app.app_state.messages.unread_count("1", "10"), 2);

    app.open_chat("1".to_string(), "Ana".to_string());

    assert_eq!(app.current_screen, Screen::Chat);
    assert_eq!(
        app.chat_screen.as_ref().map(|c| c.match_id.as_str()),
        Some("1")
    );
    assert_eq!(app.app_state.messages.unread_count("1", "10"), 0);
}

#[test]
fn test_open_selected_conversation_follows_sorted_order() {
    let (mut app, _dir) = signed_in_app();
    let now = Utc::now();
    app.app_state.matches.set_matches(vec![
        sample_match("old", "10", sample_user(20, "ana", true), now - Duration::days(2)),
        sample_match("new", "10", sample_user(21, "bo", true), now - Duration::days(2)),
    ]);
    app.app_state.messages.set_messages(
        "new",
        vec![sample_message("m", "21", "10", now - Duration::minutes(1), true)],
    );

    app.show_conversations_screen();
    // The most recently active conversation sorts first, so index 0 is "new"
    app.open_selected_conversation();

    assert_eq!(
        app.chat_screen.as_ref().map(|c| c.match_id.as_str()),
        Some("new")
    );
    assert_eq!(
        app.chat_screen.as_ref().map(|c| c.title.as_str()),
        Some("bo")
    );
}

#[test]
fn test_submit_chat_message_ignores_blank_draft() {
    let (mut app, _dir) = signed_in_app();
    app.chat_screen = Some(ChatScreen::new("1".to_string(), "Ana".to_string()));
    app.current_screen = Screen::Chat;

    if let Some(chat) = &mut app.chat_screen {
        chat.input = "   ".to_string();
    }
    app.submit_chat_message();

    let chat = app.chat_screen.as_ref().unwrap();
    assert!(!chat.is_sending, "Blank drafts must not start a send");
    assert_eq!(chat.input, "   ");
    assert!(app.app_state.messages.thread("1").is_empty());
}

#[test]
fn test_second_submit_while_sending_is_suppressed() {
    let (mut app, _dir) = signed_in_app();
    app.chat_screen = Some(ChatScreen::new("1".to_string(), "Ana".to_string()));
    app.current_screen = Screen::Chat;

    if let Some(chat) = &mut app.chat_screen {
        chat.input = "hello".to_string();
    }
    app.submit_chat_message();
    assert!(app.chat_screen.as_ref().unwrap().is_sending);

    // Typing continues while the first send is in flight; submitting again
    // must not start a second request or disturb the draft
    if let Some(chat) = &mut app.chat_screen {
        chat.input = "hello there".to_string();
    }
    app.submit_chat_message();
    assert_eq!(app.chat_screen.as_ref().unwrap().input, "hello there");

    // The send fails against the closed port; the draft survives for a retry
    for _ in 0..250 {
        if app.poll_send() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    let chat = app.chat_screen.as_ref().unwrap();
    assert!(!chat.is_sending);
    assert_eq!(chat.input, "hello there");
    assert!(app.app_state.messages.thread("1").is_empty());
}

#[test]
fn test_back_to_conversations_closes_chat() {
    let (mut app, _dir) = signed_in_app();
    app.chat_screen = Some(ChatScreen::new("1".to_string(), "Ana".to_string()));
    app.current_screen = Screen::Chat;

    app.back_to_conversations();

    assert_eq!(app.current_screen, Screen::Conversations);
    assert!(app.chat_screen.is_none());
    assert!(app.conversations_screen.is_some());
}

// -------------------------------------------------------------------
// Assessment flows
// -------------------------------------------------------------------

#[test]
fn test_assessment_submit_requires_all_answers() {
    let (mut app, _dir) = signed_in_app();
    let mut screen = AssessmentScreen::new();
    screen.set_questions(vec![sample_question(1), sample_question(2)]);
    screen.record_response(4);
    app.assessment_screen = Some(screen);
    app.current_screen = Screen::Assessment;

    app.submit_assessment();

    let screen = app.assessment_screen.as_ref().unwrap();
    assert!(screen.is_error);
    assert_eq!(
        screen.status_message.as_deref(),
        Some("Error: Answer every question before submitting")
    );
    assert!(!screen.is_submitting);
}

// -------------------------------------------------------------------
// Notification dismissal
// -------------------------------------------------------------------

#[test]
fn test_dismissals_run_one_per_notification() {
    let (mut app, _dir) = test_app();
    let mut screen = SpaceDashboardScreen::new(5, "Sunny Flat".to_string());
    screen.set_dashboard(sample_dashboard(
        5,
        vec![sample_notification(1, false), sample_notification(2, false)],
    ));
    app.space_dashboard_screen = Some(screen);
    app.current_screen = Screen::SpaceDashboard;

    // First dismissal of notification 1 starts
    app.dismiss_selected_notification();
    assert!(app
        .space_dashboard_screen
        .as_ref()
        .unwrap()
        .is_dismissing(1));

    // A second dismissal of the same notification is a no-op
    app.dismiss_selected_notification();
    assert_eq!(app.space_dashboard_screen.as_ref().unwrap().dismissing.len(), 1);

    // A different notification can be dismissed concurrently
    if let Some(screen) = &mut app.space_dashboard_screen {
        screen.next_notification();
    }
    app.dismiss_selected_notification();
    let screen = app.space_dashboard_screen.as_ref().unwrap();
    assert!(screen.is_dismissing(1));
    assert!(screen.is_dismissing(2));

    // Both dismissals fail against the closed port and get cleaned up
    for _ in 0..250 {
        app.poll_dismissals();
        let screen = app.space_dashboard_screen.as_ref().unwrap();
        if !screen.is_dismissing(1) && !screen.is_dismissing(2) {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(20));
    }

    let screen = app.space_dashboard_screen.as_ref().unwrap();
    assert!(screen.dismissing.is_empty(), "Dismissals should settle");
    assert!(screen.is_error, "A failed dismissal should surface an error");
}

// -------------------------------------------------------------------
// Screen state units
// -------------------------------------------------------------------

#[test]
fn test_login_screen_input_routing() {
    let mut screen = LoginScreen::new();
    screen.add_char('a');
    screen.next_field();
    screen.add_char('b');
    assert_eq!(screen.email, "a");
    assert_eq!(screen.password, "b");

    screen.backspace();
    assert!(screen.password.is_empty());

    screen.next_field();
    assert_eq!(screen.focused_field, 0);
}

#[test]
fn test_login_screen_validates_required_fields() {
    let mut screen = LoginScreen::new();
    assert!(!screen.validate());
    assert!(screen.is_error);

    screen.email = "sam@example.com".to_string();
    screen.password = "hunter2".to_string();
    assert!(screen.validate());
}

#[test]
fn test_register_screen_role_cycling() {
    let mut screen = RegisterScreen::new();
    assert_eq!(screen.selected_role(), UserRole::Student);

    screen.cycle_role();
    assert_eq!(screen.selected_role(), UserRole::Professional);

    screen.cycle_role();
    assert_eq!(screen.selected_role(), UserRole::Student);
}

#[test]
fn test_register_screen_role_label_outlives_the_role_value() {
    // The renderer reads the label straight off the value selected_role()
    // returns; the label must not borrow from that temporary
    let label = RegisterScreen::new().selected_role().label();
    assert_eq!(label, "Student");
}

#[test]
fn test_register_screen_ignores_typing_on_role_row() {
    let mut screen = RegisterScreen::new();
    screen.focused_field = 4;
    screen.add_char('x');
    screen.backspace();
    assert!(screen.email.is_empty());
    assert!(screen.username.is_empty());
    assert!(screen.password.is_empty());
}

#[test]
fn test_register_screen_rejects_password_mismatch() {
    let mut screen = RegisterScreen::new();
    screen.email = "sam@example.com".to_string();
    screen.username = "sam".to_string();
    screen.password = "hunter2".to_string();
    screen.password_confirm = "hunter3".to_string();

    assert!(!screen.validate());
    assert_eq!(
        screen.status_message.as_deref(),
        Some("Error: Passwords do not match")
    );

    screen.password_confirm = "hunter2".to_string();
    assert!(screen.validate());
}

#[test]
fn test_register_screen_field_focus_wraps() {
    let mut screen = RegisterScreen::new();
    for _ in 0..5 {
        screen.next_field();
    }
    assert_eq!(screen.focused_field, 0);

    screen.previous_field();
    assert_eq!(screen.focused_field, 4);
}

#[test]
fn test_assessment_screen_records_and_advances() {
    let mut screen = AssessmentScreen::new();
    screen.set_questions(vec![sample_question(1), sample_question(2), sample_question(3)]);
    assert!(!screen.is_loading);
    assert_eq!(screen.progress_percentage(), 0);

    screen.record_response(4);
    assert_eq!(screen.current, 1);
    assert_eq!(screen.answered_count(), 1);

    // Out-of-range values are ignored
    screen.record_response(0);
    screen.record_response(6);
    assert_eq!(screen.answered_count(), 1);

    screen.record_response(2);
    screen.record_response(5);
    assert!(screen.is_complete());
    assert_eq!(screen.progress_percentage(), 100);

    // The last question keeps focus once reached
    assert_eq!(screen.current, 2);

    let answers = screen.collect_answers().expect("Complete set should collect");
    assert_eq!(answers.len(), 3);
    assert_eq!(answers[0].question, 1);
    assert_eq!(answers[0].response_value, 4);
    assert_eq!(answers[2].response_value, 5);
}

#[test]
fn test_assessment_screen_incomplete_collects_nothing() {
    let mut screen = AssessmentScreen::new();
    screen.set_questions(vec![sample_question(1), sample_question(2)]);
    screen.record_response(3);

    assert!(!screen.is_complete());
    assert!(screen.collect_answers().is_none());
    assert_eq!(screen.progress_percentage(), 50);
}

#[test]
fn test_assessment_screen_navigation_bounds() {
    let mut screen = AssessmentScreen::new();
    screen.set_questions(vec![sample_question(1), sample_question(2)]);

    screen.previous_question();
    assert_eq!(screen.current, 0);

    screen.next_question();
    screen.next_question();
    assert_eq!(screen.current, 1);
}

#[test]
fn test_chat_screen_scroll_bounds() {
    let mut screen = ChatScreen::new("1".to_string(), "Ana".to_string());
    assert_eq!(screen.scroll_offset, 0);

    screen.scroll_down();
    assert_eq!(screen.scroll_offset, 0);

    screen.scroll_up(2);
    screen.scroll_up(2);
    screen.scroll_up(2);
    assert_eq!(screen.scroll_offset, 2);

    screen.scroll_down();
    assert_eq!(screen.scroll_offset, 1);
}

#[test]
fn test_chat_screen_input_editing() {
    let mut screen = ChatScreen::new("1".to_string(), "Ana".to_string());
    screen.add_char('h');
    screen.add_char('i');
    assert_eq!(screen.input, "hi");

    screen.backspace();
    assert_eq!(screen.input, "h");

    screen.clear_input();
    assert!(screen.input.is_empty());
}

#[test]
fn test_suggestions_screen_selection_clamps_on_reload() {
    let mut screen = SuggestionsScreen::new();
    screen.set_suggestions(vec![
        crate::store::Suggestion {
            user: sample_user(20, "ana", true),
            compatibility_score: 90.0,
        },
        crate::store::Suggestion {
            user: sample_user(21, "bo", true),
            compatibility_score: 80.0,
        },
    ]);
    screen.next();
    assert_eq!(screen.selected_index, 1);

    // Reload with fewer entries pulls the selection back in range
    screen.set_suggestions(vec![crate::store::Suggestion {
        user: sample_user(20, "ana", true),
        compatibility_score: 90.0,
    }]);
    assert_eq!(screen.selected_index, 0);
    assert_eq!(screen.selected().map(|s| s.user.id), Some(20));
}

#[test]
fn test_suggestions_screen_navigation_wraps() {
    let mut screen = SuggestionsScreen::new();
    screen.set_suggestions(vec![
        crate::store::Suggestion {
            user: sample_user(20, "ana", true),
            compatibility_score: 90.0,
        },
        crate::store::Suggestion {
            user: sample_user(21, "bo", true),
            compatibility_score: 80.0,
        },
    ]);

    screen.previous();
    assert_eq!(screen.selected_index, 1);
    screen.next();
    assert_eq!(screen.selected_index, 0);
}

#[test]
fn test_conversations_screen_navigation_handles_empty_list() {
    let mut screen = ConversationsScreen::new();
    screen.next(0);
    screen.previous(0);
    assert_eq!(screen.selected_index, 0);

    screen.next(3);
    assert_eq!(screen.selected_index, 1);
    screen.previous(3);
    screen.previous(3);
    assert_eq!(screen.selected_index, 2);
}

#[test]
fn test_space_dashboard_screen_filters_unread() {
    let mut screen = SpaceDashboardScreen::new(5, "Sunny Flat".to_string());
    screen.set_dashboard(sample_dashboard(
        5,
        vec![
            sample_notification(1, true),
            sample_notification(2, false),
            sample_notification(3, false),
        ],
    ));

    let unread = screen.unread_notifications();
    assert_eq!(unread.len(), 2);
    assert_eq!(screen.selected_notification_id(), Some(2));

    screen.next_notification();
    assert_eq!(screen.selected_notification_id(), Some(3));
    screen.next_notification();
    assert_eq!(screen.selected_notification_id(), Some(2));
}

#[test]
fn test_space_dashboard_screen_clamps_selection_on_reload() {
    let mut screen = SpaceDashboardScreen::new(5, "Sunny Flat".to_string());
    screen.set_dashboard(sample_dashboard(
        5,
        vec![sample_notification(1, false), sample_notification(2, false)],
    ));
    screen.next_notification();
    assert_eq!(screen.selected_notification, 1);

    // The dashboard comes back with one notification dismissed
    screen.set_dashboard(sample_dashboard(5, vec![sample_notification(2, false)]));
    assert_eq!(screen.selected_notification, 0);
    assert_eq!(screen.selected_notification_id(), Some(2));
}

#[test]
fn test_space_dashboard_screen_tracks_dismissals() {
    let mut screen = SpaceDashboardScreen::new(5, "Sunny Flat".to_string());

    assert!(screen.begin_dismiss(7));
    assert!(!screen.begin_dismiss(7), "Duplicate dismissal should be refused");
    assert!(screen.begin_dismiss(8));

    screen.finish_dismiss(7);
    assert!(!screen.is_dismissing(7));
    assert!(screen.is_dismissing(8));
}

#[test]
fn test_space_dashboard_set_dashboard_updates_name() {
    let mut screen = SpaceDashboardScreen::new(5, "Loading...".to_string());
    screen.set_dashboard(sample_dashboard(5, Vec::new()));
    assert_eq!(screen.space_name, "Sunny Flat");
    assert!(!screen.is_loading);
}
