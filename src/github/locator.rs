//! Identity wrappers and per-resource parameter structs.
//!
//! Route matching yields loosely ordered path segments; these types bind them
//! to named fields so a tag name can never be passed where a commit SHA is
//! expected.

use url::Url;

use super::error::SummaryError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner segment is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] for an empty segment.
    pub fn new(value: &str) -> Result<Self, SummaryError> {
        if value.is_empty() {
            return Err(SummaryError::not_found(value));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository segment is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] for an empty segment.
    pub fn new(value: &str) -> Result<Self, SummaryError> {
        if value.is_empty() {
            return Err(SummaryError::not_found(value));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims whitespace and returns `None` for a blank token.
    ///
    /// Anonymous requests work against public repositories, so a missing
    /// token is not an error here.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub REST API base from a web base URL.
///
/// `github.com` maps to `https://api.github.com`; any other host is treated as
/// GitHub Enterprise and served from `/api/v3` on the same authority.
///
/// # Errors
///
/// Returns [`SummaryError::Configuration`] when the web base has no host.
pub fn derive_api_base(web_base: &Url) -> Result<Url, SummaryError> {
    let host = web_base.host_str().ok_or_else(|| SummaryError::Configuration {
        message: format!("web base {web_base} must include a host"),
    })?;

    if host.eq_ignore_ascii_case("github.com") {
        return Url::parse("https://api.github.com").map_err(|error| {
            SummaryError::Configuration {
                message: error.to_string(),
            }
        });
    }

    let mut api_url = web_base.clone();
    api_url.set_path("api/v3");
    api_url.set_query(None);
    api_url.set_fragment(None);
    Ok(api_url)
}

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositoryLocator {
    /// Builds a locator from raw owner and repository segments.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] when either segment is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use gh_unfurl::github::locator::RepositoryLocator;
    ///
    /// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
    ///     .expect("should build locator");
    /// assert_eq!(locator.full_name(), "octo/repo");
    /// ```
    pub fn from_owner_repo(owner: &str, name: &str) -> Result<Self, SummaryError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            name: RepositoryName::new(name)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// `owner/name` as written in GitHub URLs.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.name.as_str())
    }

    /// Reconstructs the github.com URL for a path below the repository.
    ///
    /// An empty `suffix` yields the repository page itself.
    #[must_use]
    pub fn web_url(&self, web_base: &Url, suffix: &str) -> String {
        let base = web_base.as_str().trim_end_matches('/');
        if suffix.is_empty() {
            format!("{base}/{}", self.full_name())
        } else {
            format!("{base}/{}/{suffix}", self.full_name())
        }
    }

    pub(crate) fn repository_path(&self) -> String {
        format!("/repos/{}/{}", self.owner.as_str(), self.name.as_str())
    }

    pub(crate) fn tag_ref_path(&self, tag: &str) -> String {
        format!("{}/git/refs/tags/{tag}", self.repository_path())
    }

    pub(crate) fn commit_path(&self, sha: &str) -> String {
        format!("{}/commits/{sha}", self.repository_path())
    }
}

/// Arguments for the repository page fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryParams {
    /// Repository being summarized.
    pub repository: RepositoryLocator,
}

/// Arguments for the tagged release fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParams {
    /// Repository that owns the tag.
    pub repository: RepositoryLocator,
    /// Tag name as it appears in `releases/tag/<tag>`.
    pub tag: String,
}

/// Arguments for the commit fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitParams {
    /// Repository containing the commit.
    pub repository: RepositoryLocator,
    /// Commit SHA (full or abbreviated).
    pub sha: String,
}

/// Arguments for the repository subsection fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionParams {
    /// Repository the subsection belongs to.
    pub repository: RepositoryLocator,
    /// Remainder of the path after `owner/repo`, possibly containing slashes.
    pub section: String,
}

/// A matched route with its arguments bound to the fetcher they feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRequest {
    /// The site root, summarized by the fallback collaborator.
    Root,
    /// `/:owner/:repo`
    Repository(RepositoryParams),
    /// `/:owner/:repo/releases/tag/:tag`
    Tag(TagParams),
    /// `/:owner/:repo/commit/:sha`
    Commit(CommitParams),
    /// `/:owner/:repo/<section...>`
    Subsection(SubsectionParams),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use url::Url;

    use super::{PersonalAccessToken, RepositoryLocator, derive_api_base};
    use crate::github::error::SummaryError;

    fn web_base() -> Url {
        Url::parse("https://github.com").expect("web base should parse")
    }

    #[rstest]
    fn builds_api_paths() {
        let locator =
            RepositoryLocator::from_owner_repo("octo", "repo").expect("locator should build");

        assert_eq!(locator.repository_path(), "/repos/octo/repo");
        assert_eq!(
            locator.tag_ref_path("v1.0"),
            "/repos/octo/repo/git/refs/tags/v1.0"
        );
        assert_eq!(locator.commit_path("abc123"), "/repos/octo/repo/commits/abc123");
    }

    #[rstest]
    #[case::repository_page("", "https://github.com/octo/repo")]
    #[case::subsection("issues", "https://github.com/octo/repo/issues")]
    #[case::nested("graphs/contributors", "https://github.com/octo/repo/graphs/contributors")]
    fn reconstructs_web_urls(#[case] suffix: &str, #[case] expected: &str) {
        let locator =
            RepositoryLocator::from_owner_repo("octo", "repo").expect("locator should build");

        assert_eq!(locator.web_url(&web_base(), suffix), expected);
    }

    #[rstest]
    #[case::empty_owner("", "repo")]
    #[case::empty_name("octo", "")]
    fn rejects_empty_segments(#[case] owner: &str, #[case] name: &str) {
        let result = RepositoryLocator::from_owner_repo(owner, name);

        assert!(
            matches!(result, Err(SummaryError::SummarizerNotFound { .. })),
            "expected SummarizerNotFound, got {result:?}"
        );
    }

    #[rstest]
    #[case::public("https://github.com", "https://api.github.com/")]
    #[case::enterprise("https://ghe.example.com/", "https://ghe.example.com/api/v3")]
    #[case::enterprise_with_port("http://127.0.0.1:8080", "http://127.0.0.1:8080/api/v3")]
    fn derives_api_base_from_web_base(#[case] web: &str, #[case] expected: &str) {
        let web_base = Url::parse(web).expect("web base should parse");

        let api_base = derive_api_base(&web_base).expect("api base should derive");

        assert_eq!(api_base.as_str(), expected);
    }

    #[rstest]
    #[case::blank("   ", None)]
    #[case::padded("  ghp_token\n", Some("ghp_token"))]
    fn token_trims_and_rejects_blank(#[case] raw: &str, #[case] expected: Option<&str>) {
        let token = PersonalAccessToken::new(raw);

        assert_eq!(token.as_ref().map(PersonalAccessToken::value), expected);
    }
}
