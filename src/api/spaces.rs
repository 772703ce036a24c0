//! Living-space endpoints: space list, dashboard, members, notifications

use crate::api::ApiClient;
use crate::store::{LivingSpaceSummary, SpaceDashboard, SpaceListResponse, SpaceMember};
use crate::Result;
use tracing::info;

impl ApiClient {
    /// Fetch the living spaces the viewer belongs to
    ///
    /// Tolerates both a bare array and a DRF pagination envelope.
    pub async fn get_my_spaces(&self) -> Result<Vec<LivingSpaceSummary>> {
        let response = self
            .authed(self.http.get(self.url("/coliving/spaces/")))
            .send()
            .await?;

        let page: SpaceListResponse = Self::parse_json(response).await?;
        Ok(page.into_spaces())
    }

    /// Fetch the full dashboard payload for one living space
    pub async fn get_space_dashboard(&self, space_id: i64) -> Result<SpaceDashboard> {
        let response = self
            .authed(
                self.http
                    .get(self.url("/coliving/dashboard/"))
                    .query(&[("space_id", space_id)]),
            )
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Fetch the members of one living space
    pub async fn get_space_members(&self, space_id: i64) -> Result<Vec<SpaceMember>> {
        let response = self
            .authed(
                self.http
                    .get(self.url(&format!("/coliving/spaces/{}/members/", space_id))),
            )
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// Flip a notification's read flag on the server
    ///
    /// The authoritative list is always the next dashboard fetch; nothing is
    /// removed locally.
    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url(&format!(
                "/coliving/notifications/{}/read/",
                notification_id
            ))))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        info!(notification_id, "notification marked read");
        Ok(())
    }
}
