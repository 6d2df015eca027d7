//! Gateways for reading repository data from the GitHub REST API.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests. Transport failures are mapped
//! into [`UpstreamError`] here and nowhere else.

mod client;
mod error_mapping;
mod http_utils;
mod rest;

pub use rest::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::UpstreamError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{CommitMetadata, RepositoryMetadata};

/// Read-only access to the GitHub resources behind a link summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubGateway: Send + Sync {
    /// Fetch repository metadata (`GET /repos/{owner}/{repo}`).
    async fn repository(
        &self,
        repository: &RepositoryLocator,
    ) -> Result<RepositoryMetadata, UpstreamError>;

    /// Probe that a tag reference exists without downloading it
    /// (`HEAD /repos/{owner}/{repo}/git/refs/tags/{tag}`).
    async fn tag_exists(
        &self,
        repository: &RepositoryLocator,
        tag: &str,
    ) -> Result<(), UpstreamError>;

    /// Fetch a commit (`GET /repos/{owner}/{repo}/commits/{sha}`).
    async fn commit(
        &self,
        repository: &RepositoryLocator,
        sha: &str,
    ) -> Result<CommitMetadata, UpstreamError>;
}
