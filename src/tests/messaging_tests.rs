use crate::api::ApiClient;
use crate::messaging::{prepare_message, refresh_conversation, send_message};
use crate::store::{MessageStore, Settings};

fn unreachable_settings() -> Settings {
    Settings {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout_secs: 2,
    }
}

#[test]
fn test_prepare_message_trims_whitespace() {
    assert_eq!(prepare_message("  hello  "), Some("hello"));
    assert_eq!(prepare_message("hi"), Some("hi"));
}

#[test]
fn test_prepare_message_rejects_blank_input() {
    assert_eq!(prepare_message(""), None);
    assert_eq!(prepare_message("   "), None);
    assert_eq!(prepare_message("\n\t"), None);
}

#[test]
fn test_prepare_message_keeps_inner_whitespace() {
    assert_eq!(prepare_message(" see you  tomorrow "), Some("see you  tomorrow"));
}

#[tokio::test]
async fn test_send_message_blank_input_skips_network() {
    // The API points nowhere; a blank send must not even try to reach it
    let api = ApiClient::new(&unreachable_settings()).unwrap();
    let mut store = MessageStore::new();

    let sent = send_message(&api, &mut store, "1", "   ")
        .await
        .expect("Blank input should short-circuit, not error");

    assert!(sent.is_none());
    assert!(store.thread("1").is_empty());
}

#[tokio::test]
async fn test_send_message_failure_leaves_store_unchanged() {
    let api = ApiClient::new(&unreachable_settings()).unwrap();
    let mut store = MessageStore::new();

    let result = send_message(&api, &mut store, "1", "hello").await;

    // Write-then-append: nothing lands locally without a server confirmation
    assert!(result.is_err());
    assert!(store.thread("1").is_empty());
}

#[tokio::test]
async fn test_refresh_conversation_failure_leaves_store_unchanged() {
    let api = ApiClient::new(&unreachable_settings()).unwrap();
    let mut store = MessageStore::new();

    let result = refresh_conversation(&api, &mut store, "1").await;

    assert!(result.is_err());
    assert!(store.thread("1").is_empty());
}
