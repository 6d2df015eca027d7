//! GitHub link summaries.
//!
//! This module maps GitHub web URLs onto an ordered route table, fetches the
//! matching repository, release, commit, or subsection data through an
//! Octocrab gateway, and shapes it into Open Graph style summaries. Upstream
//! failures are normalized into a single "summarizer not found" error so
//! callers can handle unsummarizable URLs uniformly.

pub mod error;
pub mod fallback;
pub mod fetchers;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod routes;
pub mod summarizer;

pub use error::{SummaryError, UpstreamError};
pub use fallback::{FallbackSummarizer, StaticFallbackSummarizer};
pub use fetchers::{KNOWN_SUBSECTIONS, ResourceFetcher};
pub use gateway::{GitHubGateway, OctocrabGateway};
pub use locator::{
    CommitParams, PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner,
    RepositoryParams, ResourceRequest, SubsectionParams, TagParams,
};
pub use models::{CommitMetadata, RepositoryMetadata, Summary};
pub use routes::{PathPattern, Route, RouteTable, RouteTarget};
pub use summarizer::{GITHUB_API_BASE, GITHUB_WEB_BASE, GitHubSummarizer, summarize_url};
