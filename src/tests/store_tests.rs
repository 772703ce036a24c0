use crate::api::{AcceptMatchResponse, ConversationEnvelope};
use crate::store::*;
use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

fn sample_user(id: i64, username: &str) -> User {
    User {
        id,
        email: format!("{}@example.com", username),
        username: username.to_string(),
        role: UserRole::Student,
        full_name: None,
        personality_profile: None,
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

// -------------------------------------------------------------------
// MatchStore
// -------------------------------------------------------------------

#[test]
fn test_match_store_starts_empty() {
    let store = MatchStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.all().is_empty());
}

#[test]
fn test_match_store_load_ticket_applies() {
    let mut store = MatchStore::new();
    let ticket = store.begin_load();

    let matches = vec![sample_match("1", "10", sample_user(20, "ana"), Utc::now())];
    assert!(store.complete_load(ticket, matches));
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].id, "1");
}

#[test]
fn test_match_store_stale_load_dropped() {
    let mut store = MatchStore::new();
    let first = store.begin_load();
    let second = store.begin_load();

    let newer = vec![sample_match("2", "10", sample_user(21, "bo"), Utc::now())];
    assert!(store.complete_load(second, newer));

    // The older fetch resolves late and must not overwrite the newer one
    let older = vec![sample_match("1", "10", sample_user(20, "ana"), Utc::now())];
    assert!(!store.complete_load(first, older));

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].id, "2");
}

// -------------------------------------------------------------------
// MessageStore
// -------------------------------------------------------------------

#[test]
fn test_message_store_thread_empty_for_unknown() {
    let store = MessageStore::new();
    assert!(store.thread("42").is_empty());
    assert!(!store.has_thread("42"));
}

#[test]
fn test_message_store_append_keeps_order() {
    let mut store = MessageStore::new();
    let now = Utc::now();
    store.append("1", sample_message("a", "10", "20", now, false));
    store.append("1", sample_message("b", "20", "10", now + Duration::minutes(1), false));

    let thread = store.thread("1");
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].id, "a");
    assert_eq!(thread[1].id, "b");
}

#[test]
fn test_message_store_stale_load_dropped_per_match() {
    let mut store = MessageStore::new();
    let now = Utc::now();

    let first = store.begin_load("1");
    let second = store.begin_load("1");

    assert!(store.complete_load("1", second, vec![sample_message("new", "10", "20", now, false)]));
    assert!(!store.complete_load("1", first, vec![sample_message("old", "10", "20", now, false)]));

    assert_eq!(store.thread("1").len(), 1);
    assert_eq!(store.thread("1")[0].id, "new");
}

#[test]
fn test_message_store_tickets_independent_across_matches() {
    let mut store = MessageStore::new();
    let now = Utc::now();

    let ticket_a = store.begin_load("a");
    let ticket_b = store.begin_load("b");

    // A refresh of one conversation does not invalidate another's ticket
    assert!(store.complete_load("b", ticket_b, vec![sample_message("b1", "1", "2", now, false)]));
    assert!(store.complete_load("a", ticket_a, vec![sample_message("a1", "2", "1", now, false)]));

    assert_eq!(store.thread("a").len(), 1);
    assert_eq!(store.thread("b").len(), 1);
}

#[test]
fn test_message_unread_rule() {
    let now = Utc::now();

    let incoming_unread = sample_message("1", "20", "10", now, false);
    assert!(incoming_unread.is_unread_for("10"));

    // The sender never counts their own message as unread
    assert!(!incoming_unread.is_unread_for("20"));

    let incoming_read = sample_message("2", "20", "10", now, true);
    assert!(!incoming_read.is_unread_for("10"));
}

#[test]
fn test_message_store_unread_count_scoped_to_viewer() {
    let mut store = MessageStore::new();
    let now = Utc::now();
    store.set_messages(
        "1",
        vec![
            sample_message("a", "20", "10", now, false),
            sample_message("b", "20", "10", now, true),
            sample_message("c", "10", "20", now, false),
        ],
    );

    assert_eq!(store.unread_count("1", "10"), 1);
    assert_eq!(store.unread_count("1", "20"), 1);
    assert_eq!(store.unread_count("1", "99"), 0);
}

#[test]
fn test_message_store_mark_read_for() {
    let mut store = MessageStore::new();
    let now = Utc::now();
    store.set_messages(
        "1",
        vec![
            sample_message("a", "20", "10", now, false),
            sample_message("b", "10", "20", now, false),
        ],
    );

    store.mark_read_for("1", "10");

    assert_eq!(store.unread_count("1", "10"), 0);
    // The outgoing message stays unread for its addressee
    assert_eq!(store.unread_count("1", "20"), 1);
}

// -------------------------------------------------------------------
// Conversation aggregation
// -------------------------------------------------------------------

#[test]
fn test_conversations_one_entry_per_match() {
    let now = Utc::now();
    let matches = vec![
        sample_match("1", "10", sample_user(20, "ana"), now),
        sample_match("2", "10", sample_user(21, "bo"), now),
        sample_match("3", "10", sample_user(22, "cy"), now),
    ];
    let mut messages = MessageStore::new();
    messages.set_messages("2", vec![sample_message("a", "21", "10", now, false)]);

    let conversations = build_conversations(&matches, &messages, "10");
    assert_eq!(conversations.len(), matches.len());
}

#[test]
fn test_conversations_sorted_by_recent_activity() {
    let now = Utc::now();
    let matches = vec![
        sample_match("old", "10", sample_user(20, "ana"), now - Duration::days(3)),
        sample_match("new", "10", sample_user(21, "bo"), now - Duration::days(3)),
    ];
    let mut messages = MessageStore::new();
    messages.set_messages(
        "old",
        vec![sample_message("a", "20", "10", now - Duration::hours(5), true)],
    );
    messages.set_messages(
        "new",
        vec![sample_message("b", "21", "10", now - Duration::minutes(1), true)],
    );

    let conversations = build_conversations(&matches, &messages, "10");
    assert_eq!(conversations[0].match_info.id, "new");
    assert_eq!(conversations[1].match_info.id, "old");
}

#[test]
fn test_conversations_fall_back_to_match_creation_time() {
    let now = Utc::now();
    let created = now - Duration::days(2);
    let matches = vec![sample_match("1", "10", sample_user(20, "ana"), created)];
    let messages = MessageStore::new();

    let conversations = build_conversations(&matches, &messages, "10");
    assert_eq!(conversations[0].last_activity, created);
    assert!(conversations[0].last_message.is_none());
    assert_eq!(conversations[0].unread_count, 0);
}

#[test]
fn test_conversations_tie_keeps_input_order() {
    let created = Utc::now() - Duration::days(1);
    let matches = vec![
        sample_match("first", "10", sample_user(20, "ana"), created),
        sample_match("second", "10", sample_user(21, "bo"), created),
    ];
    let messages = MessageStore::new();

    let conversations = build_conversations(&matches, &messages, "10");
    assert_eq!(conversations[0].match_info.id, "first");
    assert_eq!(conversations[1].match_info.id, "second");
}

#[test]
fn test_conversations_carry_unread_counts() {
    let now = Utc::now();
    let matches = vec![sample_match("1", "10", sample_user(20, "ana"), now)];
    let mut messages = MessageStore::new();
    messages.set_messages(
        "1",
        vec![
            sample_message("a", "20", "10", now, false),
            sample_message("b", "20", "10", now, false),
            sample_message("c", "10", "20", now, false),
        ],
    );

    let conversations = build_conversations(&matches, &messages, "10");
    assert_eq!(conversations[0].unread_count, 2);
    assert_eq!(conversations[0].last_message.map(|m| m.id.as_str()), Some("c"));
}

#[test]
fn test_total_unread_sums_across_matches() {
    let now = Utc::now();
    let matches = vec![
        sample_match("1", "10", sample_user(20, "ana"), now),
        sample_match("2", "10", sample_user(21, "bo"), now),
    ];
    let mut messages = MessageStore::new();
    messages.set_messages("1", vec![sample_message("a", "20", "10", now, false)]);
    messages.set_messages(
        "2",
        vec![
            sample_message("b", "21", "10", now, false),
            sample_message("c", "21", "10", now, false),
        ],
    );

    assert_eq!(total_unread(&matches, &messages, "10"), 3);
    assert_eq!(total_unread(&matches, &messages, "21"), 0);
}

// -------------------------------------------------------------------
// Wire formats
// -------------------------------------------------------------------

#[test]
fn test_message_decodes_camel_case() {
    let json = r#"{
        "id": "7",
        "senderId": "1",
        "receiverId": "2",
        "content": "hey there",
        "timestamp": "2025-06-01T12:00:00Z",
        "readStatus": true
    }"#;

    let message: Message = serde_json::from_str(json).expect("Failed to decode message");
    assert_eq!(message.sender_id, "1");
    assert_eq!(message.receiver_id, "2");
    assert!(message.read_status);
}

#[test]
fn test_message_read_status_defaults_to_false() {
    let json = r#"{
        "id": "7",
        "senderId": "1",
        "receiverId": "2",
        "content": "hey",
        "timestamp": "2025-06-01T12:00:00Z"
    }"#;

    let message: Message = serde_json::from_str(json).expect("Failed to decode message");
    assert!(!message.read_status);
}

#[test]
fn test_user_decodes_mixed_casing() {
    // The server mixes camelCase computed fields with snake_case columns
    let json = r#"{
        "id": 3,
        "email": "mia@example.com",
        "username": "mia",
        "role": "professional",
        "fullName": "Mia Park",
        "personalityProfile": {"openness": 0.7},
        "current_city": "Berlin",
        "budget_min": 400.0,
        "budget_max": 700.0,
        "unknown_field": "ignored"
    }"#;

    let user: User = serde_json::from_str(json).expect("Failed to decode user");
    assert_eq!(user.role, UserRole::Professional);
    assert_eq!(user.full_name.as_deref(), Some("Mia Park"));
    assert_eq!(user.current_city.as_deref(), Some("Berlin"));
    assert!(user.has_personality_profile());
}

#[test]
fn test_user_null_profile_counts_as_missing() {
    let json = r#"{"id": 3, "email": "a@b.c", "username": "mia", "personalityProfile": null}"#;
    let user: User = serde_json::from_str(json).expect("Failed to decode user");
    assert!(!user.has_personality_profile());

    let json = r#"{"id": 3, "email": "a@b.c", "username": "mia"}"#;
    let user: User = serde_json::from_str(json).expect("Failed to decode user");
    assert!(!user.has_personality_profile());
}

#[test]
fn test_user_display_name_falls_back_to_username() {
    let mut user = sample_user(1, "sam");
    assert_eq!(user.display_name(), "sam");

    user.full_name = Some("   ".to_string());
    assert_eq!(user.display_name(), "sam");

    user.full_name = Some("Sam Jones".to_string());
    assert_eq!(user.display_name(), "Sam Jones");
}

#[test]
fn test_suggestion_decodes_flattened_user() {
    let json = r#"{
        "id": 9,
        "email": "kai@example.com",
        "username": "kai",
        "compatibility_score": 91.5
    }"#;

    let suggestion: Suggestion = serde_json::from_str(json).expect("Failed to decode suggestion");
    assert_eq!(suggestion.user.id, 9);
    assert_eq!(suggestion.compatibility_score, 91.5);
}

#[test]
fn test_space_list_decodes_both_shapes() {
    let bare = r#"[{"id": 1, "name": "Sunny Flat"}]"#;
    let decoded: SpaceListResponse = serde_json::from_str(bare).expect("Failed to decode array");
    assert_eq!(decoded.into_spaces().len(), 1);

    let paginated = r#"{"count": 1, "results": [{"id": 1, "name": "Sunny Flat"}]}"#;
    let decoded: SpaceListResponse =
        serde_json::from_str(paginated).expect("Failed to decode envelope");
    let spaces = decoded.into_spaces();
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0].name, "Sunny Flat");
}

#[test]
fn test_conversation_envelope_defaults_messages() {
    let json = r#"{"conversation_id": 5}"#;
    let envelope: ConversationEnvelope =
        serde_json::from_str(json).expect("Failed to decode envelope");
    assert_eq!(envelope.conversation_id, 5);
    assert!(envelope.messages.is_empty());
}

#[test]
fn test_accept_match_response_mutuality() {
    let mutual: AcceptMatchResponse =
        serde_json::from_str(r#"{"message": "Match created!", "match_id": 12}"#).unwrap();
    assert!(mutual.is_mutual());

    let pending: AcceptMatchResponse =
        serde_json::from_str(r#"{"message": "Interest recorded"}"#).unwrap();
    assert!(!pending.is_mutual());
}

#[test]
fn test_notification_icons() {
    let json = r#"{
        "id": 1,
        "notification_type": "task_assigned",
        "title": "Dishes",
        "message": "Your turn",
        "is_read": false,
        "created_at": "2025-06-01T12:00:00Z"
    }"#;
    let notification: Notification = serde_json::from_str(json).unwrap();
    assert_eq!(notification.icon(), "📋");

    let json = r#"{
        "id": 2,
        "notification_type": "something_else",
        "title": "Hm",
        "message": "?",
        "is_read": false,
        "created_at": "2025-06-01T12:00:00Z"
    }"#;
    let notification: Notification = serde_json::from_str(json).unwrap();
    assert_eq!(notification.icon(), "📬");
}

#[test]
fn test_user_role_wire_values() {
    assert_eq!(UserRole::Student.as_str(), "student");
    assert_eq!(UserRole::Professional.as_str(), "professional");
    assert_eq!(
        serde_json::to_string(&UserRole::Professional).unwrap(),
        "\"professional\""
    );

    // Only the two self-service roles are offered at registration
    assert_eq!(
        UserRole::registration_roles(),
        vec![UserRole::Student, UserRole::Professional]
    );
}

// -------------------------------------------------------------------
// Session persistence
// -------------------------------------------------------------------

#[test]
fn test_stored_session_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");

    let stored = StoredSession {
        access_token: "token-abc".to_string(),
    };
    stored.save(&path).expect("Failed to save session");

    let loaded = StoredSession::load(&path)
        .expect("Failed to load session")
        .expect("Session file should exist");
    assert_eq!(loaded.access_token, "token-abc");
}

#[test]
fn test_stored_session_load_missing_returns_none() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let loaded = StoredSession::load(dir.path().join("missing.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_stored_session_load_empty_file_returns_none() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, "  \n").unwrap();

    let loaded = StoredSession::load(&path).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_stored_session_clear() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");

    StoredSession {
        access_token: "t".to_string(),
    }
    .save(&path)
    .unwrap();
    assert!(path.exists());

    StoredSession::clear(&path).unwrap();
    assert!(!path.exists());

    // Clearing an already-missing file is fine
    StoredSession::clear(&path).unwrap();
}

#[test]
fn test_session_viewer_id_is_stringified_user_id() {
    let session = Session {
        user: sample_user(42, "vi"),
        access_token: "t".to_string(),
    };
    assert_eq!(session.viewer_id(), "42");
}

// -------------------------------------------------------------------
// Settings
// -------------------------------------------------------------------

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.api_base_url, "http://localhost:8000/api");
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn test_settings_load_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load(dir.path().join("settings.json")).unwrap();
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn test_settings_load_corrupt_file_errors() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(Settings::load(&path).is_err());
}

#[test]
fn test_settings_save_load_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");

    let settings = Settings {
        api_base_url: "https://pairpad.example.com/api".to_string(),
        request_timeout_secs: 30,
    };
    settings.save(&path).expect("Failed to save settings");

    let loaded = Settings::load(&path).expect("Failed to load settings");
    assert_eq!(loaded.request_timeout_secs, 30);
}

#[test]
fn test_settings_env_override() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    Settings::default().save(&path).unwrap();

    unsafe { std::env::set_var(crate::store::settings::API_URL_ENV, "http://10.0.0.5:9000/api/") };
    let settings = Settings::load(&path).unwrap();
    unsafe { std::env::remove_var(crate::store::settings::API_URL_ENV) };

    // Trailing slash is stripped along the way
    assert_eq!(settings.api_base_url, "http://10.0.0.5:9000/api");
}

// -------------------------------------------------------------------
// AppState
// -------------------------------------------------------------------

#[test]
fn test_app_state_viewer_id() {
    let mut state = AppState::new();
    assert!(state.viewer_id().is_none());
    assert!(!state.is_authenticated());

    state.session = Some(Session {
        user: sample_user(7, "vi"),
        access_token: "t".to_string(),
    });
    assert_eq!(state.viewer_id().as_deref(), Some("7"));
    assert!(state.is_authenticated());
}

#[test]
fn test_app_state_reset_clears_everything() {
    let now = Utc::now();
    let mut state = AppState::new();
    state.session = Some(Session {
        user: sample_user(10, "vi"),
        access_token: "t".to_string(),
    });
    state
        .matches
        .set_matches(vec![sample_match("1", "10", sample_user(20, "ana"), now)]);
    state
        .messages
        .append("1", sample_message("a", "20", "10", now, false));

    state.reset();

    assert!(state.session.is_none());
    assert!(state.matches.is_empty());
    assert!(state.messages.thread("1").is_empty());
}
