//! Test helpers for constructing GitHub API fixtures.
//!
//! The JSON builders mirror the subset of the REST API payloads the gateway
//! reads, so mock servers in tests stay consistent with the deserialisers.
//!
//! # Examples
//!
//! ```
//! use gh_unfurl::github::models::test_support::repository_json;
//!
//! let body = repository_json("octo/repo", Some("A repo"), "https://github.com/octo/repo");
//! assert_eq!(body["full_name"], "octo/repo");
//! ```

use serde_json::{Value, json};

use super::{CommitMetadata, RepositoryMetadata};

/// Avatar URL used by the fixtures for repository owners.
pub const OWNER_AVATAR: &str = "https://avatars.githubusercontent.com/u/1?v=4";

/// Avatar URL used by the fixtures for commit authors.
pub const AUTHOR_AVATAR: &str = "https://avatars.githubusercontent.com/u/2?v=4";

/// Builds a `GET /repos/{owner}/{repo}` response body.
#[must_use]
pub fn repository_json(full_name: &str, description: Option<&str>, html_url: &str) -> Value {
    json!({
        "full_name": full_name,
        "description": description,
        "html_url": html_url,
        "owner": { "avatar_url": OWNER_AVATAR }
    })
}

/// Builds a `GET /repos/{owner}/{repo}/commits/{sha}` response body.
#[must_use]
pub fn commit_json(message: &str, html_url: &str) -> Value {
    json!({
        "html_url": html_url,
        "author": { "avatar_url": AUTHOR_AVATAR },
        "commit": { "message": message }
    })
}

/// Repository metadata matching [`repository_json`].
#[must_use]
pub fn repository_metadata(full_name: &str, description: Option<&str>) -> RepositoryMetadata {
    RepositoryMetadata {
        full_name: full_name.to_owned(),
        description: description.map(ToOwned::to_owned),
        html_url: format!("https://github.com/{full_name}"),
        owner_avatar_url: Some(OWNER_AVATAR.to_owned()),
    }
}

/// Commit metadata matching [`commit_json`].
#[must_use]
pub fn commit_metadata(message: &str, html_url: &str) -> CommitMetadata {
    CommitMetadata {
        message: message.to_owned(),
        html_url: html_url.to_owned(),
        author_avatar_url: Some(AUTHOR_AVATAR.to_owned()),
    }
}
