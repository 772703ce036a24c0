//! REST API client
//!
//! This module owns all HTTP traffic to the PairPad backend:
//! - `auth` - login, registration, profile, logout
//! - `matching` - suggestions, accept/reject, the match list
//! - `messaging` - conversation fetch and send
//! - `spaces` - living spaces, dashboards, members, notifications
//! - `personality` - assessment questions and submission
//!
//! One [`ApiClient`] is shared by every screen; it carries the base URL,
//! the request timeout, and the bearer token installed after login.

use crate::store::Settings;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::debug;

pub mod auth;
pub mod matching;
pub mod messaging;
pub mod personality;
pub mod spaces;

pub use auth::{LoginResponse, RegisterResponse, TokenPair};
pub use matching::AcceptMatchResponse;
pub use messaging::ConversationEnvelope;
pub use personality::{AssessmentAnswer, AssessmentQuestion};

/// Longest slice of a non-JSON error body kept in an error message
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the PairPad REST API
///
/// Cheap to clone; clones share the underlying connection pool and token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a client from settings
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            http,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install the bearer token used for subsequent requests
    pub fn set_token(&self, token: &str) {
        let mut guard = self.token.write().unwrap();
        *guard = Some(token.to_string());
    }

    /// Drop the bearer token (sign-out)
    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap();
        *guard = None;
    }

    /// Whether a bearer token is installed
    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token to a request when one is installed
    pub(crate) fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().unwrap();
        match token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Decode a JSON response, mapping non-2xx statuses to [`Error::Api`]
    pub(crate) async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Check a response for success, discarding the body
    pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Build an [`Error::Api`] from a failed response
    ///
    /// The backend reports failures as `{"error": ...}` or `{"detail": ...}`;
    /// anything else falls back to a truncated body or the status text.
    async fn api_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) if !body.trim().is_empty() => extract_error_message(body.trim()),
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        debug!(status = status.as_u16(), %message, "API request failed");
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "detail", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    let mut message = body.to_string();
    if message.len() > ERROR_BODY_LIMIT {
        // Back off to a char boundary so multi-byte text cannot panic
        let mut cut = ERROR_BODY_LIMIT;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
        message.push_str("...");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_error_key() {
        assert_eq!(
            extract_error_message(r#"{"error": "Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_extract_error_message_detail_key() {
        assert_eq!(
            extract_error_message(r#"{"detail": "Authentication credentials were not provided."}"#),
            "Authentication credentials were not provided."
        );
    }

    #[test]
    fn test_extract_error_message_plain_body() {
        assert_eq!(extract_error_message("boom"), "boom");
    }

    #[test]
    fn test_extract_error_message_truncates_long_bodies() {
        let body = "x".repeat(500);
        let message = extract_error_message(&body);
        assert!(message.len() <= ERROR_BODY_LIMIT + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_extract_error_message_truncates_multibyte_bodies() {
        // 300 bytes of 3-byte chars: byte 200 is mid-character
        let body = "€".repeat(100);
        let message = extract_error_message(&body);
        assert!(message.ends_with("..."));
        assert!(message.len() <= ERROR_BODY_LIMIT + 3);
        assert!(message.trim_end_matches("...").chars().all(|c| c == '€'));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let settings = Settings {
            api_base_url: "http://localhost:8000/api/".to_string(),
            ..Settings::default()
        };
        let client = ApiClient::new(&settings).unwrap();
        assert_eq!(
            client.url("/auth/login/"),
            "http://localhost:8000/api/auth/login/"
        );
    }

    #[test]
    fn test_token_install_and_clear() {
        let client = ApiClient::new(&Settings::default()).unwrap();
        assert!(!client.has_token());
        client.set_token("abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }
}
