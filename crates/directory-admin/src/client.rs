//! Directory API client for community admins.
//!
//! HTTP client for the three community admin endpoints:
//! - `GET    /api/community_admin/all`
//! - `PUT    /api/community_admin/update/{id}`
//! - `DELETE /api/community_admin/delete/{id}`

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use crate::config::DirectoryConfig;
use crate::error::{AdminError, AdminResult};
use crate::record::{AdminId, CommunityAdmin};

/// Backend that stores community admins.
///
/// Implemented by [`CommunityAdminClient`]; sessions and the roster only
/// talk to this trait.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Fetch every community admin.
    async fn list_admins(&self) -> AdminResult<Vec<CommunityAdmin>>;

    /// Replace a community admin record.
    async fn update_admin(&self, admin: &CommunityAdmin) -> AdminResult<()>;

    /// Delete a community admin.
    async fn delete_admin(&self, id: &AdminId) -> AdminResult<()>;
}

/// Directory API client.
#[derive(Clone)]
pub struct CommunityAdminClient {
    /// HTTP client instance.
    client: Client,

    /// API configuration.
    config: DirectoryConfig,
}

impl CommunityAdminClient {
    /// Create a new client.
    pub fn new(config: DirectoryConfig) -> AdminResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key {
            Some(ref api_key) => request.header("Authorization", format!("Bearer {}", api_key)),
            None => request,
        }
    }

    /// Check the status of a response, mapping failures to [`AdminError`].
    async fn check_status(
        &self,
        response: reqwest::Response,
        id: Option<&AdminId>,
    ) -> AdminResult<reqwest::Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            error!("Directory API authentication failed");
            return Err(AdminError::AuthenticationFailed);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                warn!(admin_id = %id, "Community admin not found");
                return Err(AdminError::AdminNotFound(id.clone()));
            }
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Directory API error ({}): {}", status.as_u16(), message);
            return Err(AdminError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Check status and parse the JSON body.
    async fn handle_response<T>(&self, response: reqwest::Response) -> AdminResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.check_status(response, None)
            .await?
            .json()
            .await
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AdminDirectory for CommunityAdminClient {
    #[instrument(skip(self))]
    async fn list_admins(&self) -> AdminResult<Vec<CommunityAdmin>> {
        debug!("Fetching community admins");

        let url = self.config.url("/api/community_admin/all");
        let response = self.authorize(self.client.get(&url)).send().await?;
        let admins: Vec<CommunityAdmin> = self.handle_response(response).await?;

        debug!("Fetched {} community admins", admins.len());
        Ok(admins)
    }

    #[instrument(skip(self, admin), fields(admin_id = %admin.id))]
    async fn update_admin(&self, admin: &CommunityAdmin) -> AdminResult<()> {
        debug!("Updating community admin {}", admin.id);

        let url = self
            .config
            .url(&format!("/api/community_admin/update/{}", admin.id));
        let response = self
            .authorize(self.client.put(&url).json(admin))
            .send()
            .await?;

        self.check_status(response, Some(&admin.id)).await?;
        Ok(())
    }

    #[instrument(skip(self, id), fields(admin_id = %id))]
    async fn delete_admin(&self, id: &AdminId) -> AdminResult<()> {
        debug!("Deleting community admin {}", id);

        let url = self
            .config
            .url(&format!("/api/community_admin/delete/{}", id));
        let response = self.authorize(self.client.delete(&url)).send().await?;

        self.check_status(response, Some(id)).await?;
        Ok(())
    }
}
