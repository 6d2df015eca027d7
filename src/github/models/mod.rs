//! Data models for link summaries and the GitHub resources behind them.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Resource type tag carried by every GitHub summary.
pub const OBJECT_TYPE: &str = "object";

/// Language emitted on every successful summary.
pub const SITE_LANG: &str = "en";

/// Favicon emitted on every successful summary.
pub const SITE_ICON: &str = "https://assets-cdn.github.com/favicon.ico";

/// Site name emitted on every successful summary.
pub const SITE_NAME: &str = "GitHub";

/// Link preview metadata for a GitHub URL, shaped like Open Graph tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Human-readable label for the resource.
    pub title: String,
    /// Free text describing the resource.
    pub description: String,
    /// Absolute URL uniquely identifying the resource.
    pub canonical: String,
    /// Representative image, usually an avatar.
    pub image: String,
    /// Resource type tag, [`OBJECT_TYPE`] for GitHub resources.
    #[serde(rename = "type")]
    pub kind: String,
    /// Content language, filled in by decoration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Site icon, filled in by decoration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Site name, filled in by decoration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl Summary {
    /// Creates an undecorated summary of type [`OBJECT_TYPE`].
    #[must_use]
    pub fn object(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: canonical.into(),
            image: image.into(),
            kind: OBJECT_TYPE.to_owned(),
            lang: None,
            icon: None,
            site_name: None,
        }
    }

    /// Merges the GitHub site constants underneath the existing fields.
    ///
    /// Fields already set by the producer of the summary win.
    #[must_use]
    pub fn decorate(mut self) -> Self {
        self.lang.get_or_insert_with(|| SITE_LANG.to_owned());
        self.icon.get_or_insert_with(|| SITE_ICON.to_owned());
        self.site_name.get_or_insert_with(|| SITE_NAME.to_owned());
        self
    }
}

/// Repository fields needed to summarize a repository page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// `owner/name` as reported by GitHub.
    pub full_name: String,
    /// Repository description, if one is set.
    pub description: Option<String>,
    /// Public web URL of the repository.
    pub html_url: String,
    /// Avatar of the owning user or organisation.
    pub owner_avatar_url: Option<String>,
}

/// Commit fields needed to summarize a commit page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMetadata {
    /// Full commit message.
    pub message: String,
    /// Permalink to the commit page.
    pub html_url: String,
    /// Avatar of the linked GitHub author, absent for unlinked emails.
    pub author_avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) full_name: String,
    pub(crate) description: Option<String>,
    pub(crate) html_url: String,
    pub(crate) owner: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommit {
    pub(crate) html_url: String,
    pub(crate) author: Option<ApiUser>,
    pub(crate) commit: ApiGitCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiGitCommit {
    pub(crate) message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) avatar_url: Option<String>,
}

impl From<ApiRepository> for RepositoryMetadata {
    fn from(value: ApiRepository) -> Self {
        Self {
            full_name: value.full_name,
            description: value.description,
            html_url: value.html_url,
            owner_avatar_url: value.owner.and_then(|owner| owner.avatar_url),
        }
    }
}

impl From<ApiCommit> for CommitMetadata {
    fn from(value: ApiCommit) -> Self {
        Self {
            message: value.commit.message,
            html_url: value.html_url,
            author_avatar_url: value.author.and_then(|author| author.avatar_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        ApiCommit, ApiRepository, CommitMetadata, RepositoryMetadata, SITE_ICON, Summary,
    };

    #[test]
    fn api_repository_converts_into_metadata() {
        let value = json!({
            "id": 1,
            "full_name": "octo/repo",
            "description": null,
            "html_url": "https://github.com/octo/repo",
            "owner": { "login": "octo", "avatar_url": "https://avatars.example/octo" }
        });

        let api: ApiRepository =
            serde_json::from_value(value).expect("ApiRepository should deserialize");
        let metadata: RepositoryMetadata = api.into();

        assert_eq!(metadata.full_name, "octo/repo");
        assert_eq!(metadata.description, None);
        assert_eq!(
            metadata.owner_avatar_url.as_deref(),
            Some("https://avatars.example/octo")
        );
    }

    #[test]
    fn api_commit_without_linked_author_converts() {
        let value = json!({
            "sha": "abc123",
            "html_url": "https://github.com/octo/repo/commit/abc123",
            "author": null,
            "commit": { "message": "Fix bug\n\nDetails here" }
        });

        let api: ApiCommit = serde_json::from_value(value).expect("ApiCommit should deserialize");
        let metadata: CommitMetadata = api.into();

        assert_eq!(metadata.message, "Fix bug\n\nDetails here");
        assert_eq!(metadata.author_avatar_url, None);
    }

    #[rstest]
    fn decorate_fills_site_constants() {
        let summary = Summary::object("t", "d", "https://github.com/o/r", "img").decorate();

        assert_eq!(summary.lang.as_deref(), Some("en"));
        assert_eq!(summary.icon.as_deref(), Some(SITE_ICON));
        assert_eq!(summary.site_name.as_deref(), Some("GitHub"));
        assert_eq!(summary.kind, "object");
    }

    #[rstest]
    fn decorate_keeps_fields_set_by_producer() {
        let mut summary = Summary::object("t", "d", "https://github.com", "img");
        summary.lang = Some("de".to_owned());

        let decorated = summary.decorate();

        assert_eq!(decorated.lang.as_deref(), Some("de"));
        assert_eq!(decorated.site_name.as_deref(), Some("GitHub"));
    }

    #[rstest]
    fn serialises_kind_as_type() {
        let summary = Summary::object("t", "d", "c", "i").decorate();

        let value = serde_json::to_value(&summary).expect("summary should serialise");

        assert_eq!(value.get("type"), Some(&json!("object")));
        assert_eq!(value.get("site_name"), Some(&json!("GitHub")));
        assert!(value.get("kind").is_none(), "kind should be renamed");
    }
}
