//! gh-unfurl library crate producing link previews for GitHub URLs.
//!
//! The library routes a GitHub web URL to the resource it names, reads that
//! resource through Octocrab, and returns a [`Summary`] with title,
//! description, canonical URL, and image suitable for rendering a rich
//! preview.

pub mod config;
pub mod github;

pub use config::UnfurlConfig;
pub use github::{
    FallbackSummarizer, GitHubGateway, GitHubSummarizer, OctocrabGateway, PersonalAccessToken,
    StaticFallbackSummarizer, Summary, SummaryError, summarize_url,
};
