//! Authenticated user operations

use crate::client::GitHubClient;
use crate::transport::ApiRequest;
use anyhow::Result;

impl GitHubClient {
    /// Check that the API accepts the configured credential
    ///
    /// Calls `GET /user`. The profile in the response is not inspected and no
    /// particular token scope is required.
    ///
    /// # Errors
    /// Returns an [`crate::ApiError`] if the credential is rejected.
    pub async fn check_login(&self) -> Result<()> {
        self.execute(ApiRequest::get("/user")).await?;
        Ok(())
    }
}
