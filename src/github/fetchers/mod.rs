//! Resource fetchers that turn route arguments into link summaries.
//!
//! Each fetcher performs the GitHub lookups its resource needs and normalizes
//! any upstream failure into [`SummaryError::SummarizerNotFound`] carrying the
//! web URL of the resource that could not be summarized.

use url::Url;

use super::error::{SummaryError, UpstreamError};
use super::gateway::GitHubGateway;
use super::locator::{
    CommitParams, RepositoryLocator, RepositoryParams, SubsectionParams, TagParams,
};
use super::models::{RepositoryMetadata, Summary};

/// Repository subsections that can be summarized from repository metadata.
pub const KNOWN_SUBSECTIONS: [&str; 17] = [
    "pulls",
    "issues",
    "projects",
    "wiki",
    "releases",
    "tags",
    "branches",
    "milestones",
    "labels",
    "pulse",
    "graphs/contributors",
    "community",
    "graphs/commit-activity",
    "graphs/code-frequency",
    "network/dependencies",
    "network",
    "members",
];

const PARAGRAPH_BREAK: &str = "\n\n";

/// Runs fetchers against a gateway.
pub struct ResourceFetcher<'a, Gateway>
where
    Gateway: GitHubGateway + ?Sized,
{
    gateway: &'a Gateway,
    web_base: &'a Url,
}

impl<'a, Gateway> ResourceFetcher<'a, Gateway>
where
    Gateway: GitHubGateway + ?Sized,
{
    /// Creates a fetcher that reconstructs web URLs below `web_base`.
    #[must_use]
    pub const fn new(gateway: &'a Gateway, web_base: &'a Url) -> Self {
        Self { gateway, web_base }
    }

    /// Summarizes a repository page.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] when the repository lookup
    /// fails.
    pub async fn repository(&self, params: &RepositoryParams) -> Result<Summary, SummaryError> {
        self.repository_summary(&params.repository).await
    }

    /// Summarizes a tagged release.
    ///
    /// The repository lookup and the tag existence probe run concurrently;
    /// the first failure aborts the other.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] when either lookup fails,
    /// including when the tag does not exist.
    pub async fn tag(&self, params: &TagParams) -> Result<Summary, SummaryError> {
        let suffix = format!("releases/tag/{}", params.tag);
        let probe = async {
            self.gateway
                .tag_exists(&params.repository, &params.tag)
                .await
                .map_err(|error| self.normalize(&params.repository, &suffix, &error))
        };

        let (summary, ()) = tokio::try_join!(self.repository_summary(&params.repository), probe)?;

        Ok(Summary {
            canonical: format!("{}/{suffix}", summary.canonical),
            ..summary
        })
    }

    /// Summarizes a commit.
    ///
    /// The first paragraph of the commit message becomes the title and the
    /// remaining paragraphs the description, falling back to the repository
    /// description for single-paragraph messages.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] when the commit or the
    /// repository lookup fails.
    pub async fn commit(&self, params: &CommitParams) -> Result<Summary, SummaryError> {
        let commit = async {
            self.gateway
                .commit(&params.repository, &params.sha)
                .await
                .map_err(|error| {
                    self.normalize(&params.repository, &format!("commit/{}", params.sha), &error)
                })
        };

        let (metadata, repository) =
            tokio::try_join!(commit, self.repository_summary(&params.repository))?;

        let (title, body) = metadata
            .message
            .split_once(PARAGRAPH_BREAK)
            .unwrap_or((metadata.message.as_str(), ""));
        let description = if body.is_empty() {
            repository.description
        } else {
            body.to_owned()
        };

        Ok(Summary::object(
            title,
            description,
            metadata.html_url,
            metadata.author_avatar_url.unwrap_or(repository.image),
        ))
    }

    /// Summarizes a repository subsection such as `issues` or
    /// `graphs/contributors`.
    ///
    /// Top-level sections prefix the title with their capitalized name;
    /// nested sections keep the repository title.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] for sections outside
    /// [`KNOWN_SUBSECTIONS`] without calling GitHub, or when the repository
    /// lookup fails.
    pub async fn subsection(&self, params: &SubsectionParams) -> Result<Summary, SummaryError> {
        let section = params.section.as_str();
        if !KNOWN_SUBSECTIONS.contains(&section) {
            return Err(SummaryError::not_found(
                params.repository.web_url(self.web_base, section),
            ));
        }

        let summary = self.repository_summary(&params.repository).await?;
        let title = if section.contains('/') {
            summary.title
        } else {
            format!("{} · {}", capitalize(section), summary.title)
        };

        Ok(Summary {
            title,
            canonical: format!("{}/{section}", summary.canonical),
            ..summary
        })
    }

    async fn repository_summary(
        &self,
        repository: &RepositoryLocator,
    ) -> Result<Summary, SummaryError> {
        self.gateway
            .repository(repository)
            .await
            .map(summarize_repository)
            .map_err(|error| self.normalize(repository, "", &error))
    }

    fn normalize(
        &self,
        repository: &RepositoryLocator,
        suffix: &str,
        error: &UpstreamError,
    ) -> SummaryError {
        let url = repository.web_url(self.web_base, suffix);
        tracing::warn!(url = %url, %error, "GitHub lookup failed");
        SummaryError::from_upstream(url, error)
    }
}

fn summarize_repository(metadata: RepositoryMetadata) -> Summary {
    let description = match metadata.description.as_deref() {
        Some(text) if !text.is_empty() => format!("{} - {text}", metadata.full_name),
        _ => format!(
            "Contribute to {} development by creating an account on GitHub.",
            metadata.full_name
        ),
    };

    Summary::object(
        metadata.full_name,
        description,
        metadata.html_url,
        metadata.owner_avatar_url.unwrap_or_default(),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
