//! Octocrab implementation of the GitHub gateway.

use async_trait::async_trait;
use http::{Method, Request};
use octocrab::Octocrab;
use url::Url;

use crate::github::error::UpstreamError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiCommit, ApiRepository, CommitMetadata, RepositoryMetadata};

use super::GitHubGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::extract_github_message;

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway talking to `api_base`, authenticated when a token is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Client` when the base URI cannot be parsed or
    /// Octocrab fails to construct a client.
    pub fn for_api_base(
        token: Option<&PersonalAccessToken>,
        api_base: &Url,
    ) -> Result<Self, UpstreamError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl GitHubGateway for OctocrabGateway {
    async fn repository(
        &self,
        repository: &RepositoryLocator,
    ) -> Result<RepositoryMetadata, UpstreamError> {
        tracing::debug!(repository = %repository.full_name(), "fetching repository");
        self.client
            .get::<ApiRepository, _, _>(repository.repository_path(), None::<&()>)
            .await
            .map(ApiRepository::into)
            .map_err(|error| map_octocrab_error("repository", &error))
    }

    async fn tag_exists(
        &self,
        repository: &RepositoryLocator,
        tag: &str,
    ) -> Result<(), UpstreamError> {
        tracing::debug!(repository = %repository.full_name(), tag, "probing tag reference");
        let builder = Request::builder()
            .method(Method::HEAD)
            .uri(repository.tag_ref_path(tag));
        let request = self
            .client
            .build_request(builder, None::<&()>)
            .map_err(|error| map_octocrab_error("tag probe", &error))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|error| map_octocrab_error("tag probe", &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_default();
        Err(map_http_error(status, extract_github_message(&body)))
    }

    async fn commit(
        &self,
        repository: &RepositoryLocator,
        sha: &str,
    ) -> Result<CommitMetadata, UpstreamError> {
        tracing::debug!(repository = %repository.full_name(), sha, "fetching commit");
        self.client
            .get::<ApiCommit, _, _>(repository.commit_path(sha), None::<&()>)
            .await
            .map(ApiCommit::into)
            .map_err(|error| map_octocrab_error("commit", &error))
    }
}
