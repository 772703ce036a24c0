//! PairPad - terminal client for the PairPad roommate-matching service
//!
//! This library provides the client-side core for PairPad: the REST API
//! client, local stores for matches and messages, the conversation
//! aggregator, session and settings handling, and the terminal UI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod auth;
pub mod messaging;
pub mod store;
pub mod tui;

#[cfg(test)]
mod tests;

/// Result type alias for PairPad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PairPad operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server rejected a request (non-2xx status)
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Session/authentication error
    #[error("Auth error: {0}")]
    Auth(String),

    /// Local file storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize the PairPad library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
