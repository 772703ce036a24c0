//! Login session handling
//!
//! Only the access token is persisted (the cookie analog); the user profile
//! is re-fetched from the server on startup.

use crate::store::user::User;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The token file written after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token for the API
    pub access_token: String,
}

impl StoredSession {
    /// Load the stored session from a file
    ///
    /// # Returns
    /// `Ok(None)` if no session file exists (signed out)
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("Failed to read session file: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(None);
        }

        let stored: Self = serde_json::from_str(&data)?;
        Ok(Some(stored))
    }

    /// Save the stored session to a file
    ///
    /// # Arguments
    /// * `path` - Path to the session file (e.g., "session.json")
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create session directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write session file: {}", e)))?;

        Ok(())
    }

    /// Remove the session file if it exists
    pub fn clear<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            std::fs::remove_file(path)
                .map_err(|e| Error::Storage(format!("Failed to remove session file: {}", e)))?;
        }
        Ok(())
    }
}

/// An authenticated session held in memory
#[derive(Debug, Clone)]
pub struct Session {
    /// The signed-in user
    pub user: User,
    /// Bearer token for the API
    pub access_token: String,
}

impl Session {
    /// The viewer's id as it appears in message sender/receiver fields
    pub fn viewer_id(&self) -> String {
        self.user.id.to_string()
    }
}
