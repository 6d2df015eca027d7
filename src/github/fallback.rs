//! Summarizer used for pages that are not repository resources.

use async_trait::async_trait;
use url::Url;

use super::error::SummaryError;
use super::models::Summary;

/// Path summarized in place of the GitHub home page.
pub const HUMANS_TXT: &str = "humans.txt";

/// Locale passed to the fallback summarizer.
pub const FALLBACK_LOCALE: &str = "en";

/// Generic summarizer for URLs that have no GitHub-specific fetcher.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FallbackSummarizer: Send + Sync {
    /// Produce a summary for `url` in `locale`.
    async fn summarize(&self, url: &Url, locale: &str) -> Result<Summary, SummaryError>;
}

/// Fallback that describes the GitHub home page without any network access.
#[derive(Debug, Clone, Default)]
pub struct StaticFallbackSummarizer;

#[async_trait]
impl FallbackSummarizer for StaticFallbackSummarizer {
    async fn summarize(&self, url: &Url, locale: &str) -> Result<Summary, SummaryError> {
        tracing::debug!(url = %url, locale, "using static fallback summary");
        let mut home = url.clone();
        home.set_path("/");
        home.set_query(None);
        home.set_fragment(None);

        Ok(Summary::object(
            "GitHub",
            "GitHub is where people build software. More than 100 million people use GitHub \
             to discover, fork, and contribute to over 420 million projects.",
            home.as_str(),
            "https://github.githubassets.com/images/modules/open_graph/github-logo.png",
        ))
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{FallbackSummarizer, StaticFallbackSummarizer};

    #[tokio::test]
    async fn static_fallback_points_at_site_root() {
        let url = Url::parse("https://github.com/humans.txt").expect("url should parse");

        let summary = StaticFallbackSummarizer
            .summarize(&url, "en")
            .await
            .expect("static fallback should not fail");

        assert_eq!(summary.title, "GitHub");
        assert_eq!(summary.canonical, "https://github.com/");
        assert!(summary.lang.is_none(), "decoration belongs to the dispatcher");
    }
}
