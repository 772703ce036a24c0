//! Personality assessment endpoints

use crate::api::ApiClient;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A question on the personality assessment
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentQuestion {
    /// Question id
    pub id: i64,
    /// Prompt text shown to the user
    pub question_text: String,
    /// Personality trait the question measures
    #[serde(rename = "trait", default)]
    pub trait_name: String,
    /// Question type, `"likert"` for everything this client renders
    #[serde(default)]
    pub question_type: String,
    /// Whether a high answer lowers the trait score
    #[serde(default)]
    pub reverse_scored: bool,
    /// Display order
    #[serde(default)]
    pub order: i64,
}

/// A single answer submitted with the assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentAnswer {
    /// Id of the question being answered
    pub question: i64,
    /// Likert response, 1 through 5
    pub response_value: u8,
}

#[derive(Debug, Serialize)]
struct SubmitAssessmentRequest<'a> {
    responses: &'a [AssessmentAnswer],
}

#[derive(Debug, Deserialize)]
struct SubmitAssessmentResponse {
    profile: serde_json::Value,
}

impl ApiClient {
    /// Fetch the assessment questions in display order
    pub async fn get_assessment(&self) -> Result<Vec<AssessmentQuestion>> {
        let response = self
            .authed(self.http.get(self.url("/personality/assessment/")))
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Submit completed assessment answers
    ///
    /// # Returns
    /// The computed personality profile, stored on the session user so the
    /// post-login gate opens.
    pub async fn submit_assessment(
        &self,
        answers: &[AssessmentAnswer],
    ) -> Result<serde_json::Value> {
        let response = self
            .authed(self.http.post(self.url("/personality/submit/")))
            .json(&SubmitAssessmentRequest { responses: answers })
            .send()
            .await?;

        let submitted: SubmitAssessmentResponse = Self::parse_json(response).await?;
        info!(answer_count = answers.len(), "assessment submitted");
        Ok(submitted.profile)
    }
}
