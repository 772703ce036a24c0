//! Matching endpoints: suggestions, accept/reject, the match list

use crate::api::ApiClient;
use crate::store::{Match, Suggestion};
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Response of the accept endpoint
///
/// `match_id` is present only when the like was mutual and a match was
/// created on the spot.
#[derive(Debug, Clone, Deserialize)]
pub struct AcceptMatchResponse {
    /// Server message, e.g. `"Match created!"`
    pub message: String,
    /// Id of the newly created match when the like was mutual
    #[serde(default)]
    pub match_id: Option<i64>,
    /// Compatibility score of the new match when mutual
    #[serde(default)]
    pub compatibility_score: Option<f64>,
}

impl AcceptMatchResponse {
    /// Whether the like was mutual and produced a match
    pub fn is_mutual(&self) -> bool {
        self.match_id.is_some()
    }
}

#[derive(Debug, Serialize)]
struct InteractionRequest {
    user_id: i64,
}

impl ApiClient {
    /// Fetch compatibility-scored roommate suggestions
    pub async fn get_suggestions(&self) -> Result<Vec<Suggestion>> {
        let response = self
            .authed(self.http.get(self.url("/matching/suggestions/")))
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Like a suggested user; a mutual like creates a match
    pub async fn accept_match(&self, user_id: i64) -> Result<AcceptMatchResponse> {
        let response = self
            .authed(self.http.post(self.url("/matching/accept/")))
            .json(&InteractionRequest { user_id })
            .send()
            .await?;

        let accepted: AcceptMatchResponse = Self::parse_json(response).await?;
        if accepted.is_mutual() {
            info!(user_id, match_id = ?accepted.match_id, "mutual match created");
        }
        Ok(accepted)
    }

    /// Pass on a suggested user
    pub async fn reject_match(&self, user_id: i64) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url("/matching/reject/")))
            .json(&InteractionRequest { user_id })
            .send()
            .await?;
        Self::ensure_success(response).await
    }

    /// Fetch the viewer's mutual matches
    pub async fn get_matches(&self) -> Result<Vec<Match>> {
        let response = self
            .authed(self.http.get(self.url("/matching/matches/")))
            .send()
            .await?;
        Self::parse_json(response).await
    }
}
