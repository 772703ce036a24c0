//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PAIRPAD_API_URL";

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Application settings
///
/// Persistent configuration for the PairPad client, stored as JSON.
///
/// # Example
/// ```rust,no_run
/// use pairpad::store::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let settings = Settings::load("settings.json").expect("Failed to load");
/// println!("API: {}", settings.api_base_url);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the PairPad API, without a trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds for all API calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// The `PAIRPAD_API_URL` environment variable, when set and non-empty,
    /// overrides the file's base URL.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut settings = if !path.exists() {
            Self::default()
        } else {
            let data = std::fs::read_to_string(path)
                .map_err(|e| Error::Storage(format!("Failed to read settings: {}", e)))?;

            // Handle empty file (return defaults)
            if data.trim().is_empty() {
                Self::default()
            } else {
                serde_json::from_str(&data)
                    .map_err(|e| Error::Storage(format!("Failed to parse settings: {}", e)))?
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url.trim().trim_end_matches('/').to_string();
            }
        }

        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to save the settings file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Storage(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
