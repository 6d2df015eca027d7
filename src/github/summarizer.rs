//! Dispatcher that routes a GitHub URL to exactly one fetcher.

use url::Url;

use super::error::SummaryError;
use super::fallback::{FALLBACK_LOCALE, FallbackSummarizer, HUMANS_TXT, StaticFallbackSummarizer};
use super::fetchers::ResourceFetcher;
use super::gateway::{GitHubGateway, OctocrabGateway};
use super::locator::ResourceRequest;
use super::models::Summary;
use super::routes::RouteTable;

/// Public GitHub web root.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Public GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Turns GitHub web URLs into decorated link summaries.
///
/// The route table is walked in order and the first matching route selects
/// the single fetcher that runs. A fetcher failure is final; no later route
/// is tried.
pub struct GitHubSummarizer<Gateway, Fallback>
where
    Gateway: GitHubGateway,
    Fallback: FallbackSummarizer,
{
    gateway: Gateway,
    fallback: Fallback,
    routes: RouteTable,
    web_base: Url,
}

impl<Gateway, Fallback> GitHubSummarizer<Gateway, Fallback>
where
    Gateway: GitHubGateway,
    Fallback: FallbackSummarizer,
{
    /// Creates a summarizer using the built-in GitHub routes.
    ///
    /// `web_base` is used to resolve path-only input and to reconstruct the
    /// URLs reported in errors.
    #[must_use]
    pub fn new(gateway: Gateway, fallback: Fallback, web_base: Url) -> Self {
        Self {
            gateway,
            fallback,
            routes: RouteTable::github(),
            web_base,
        }
    }

    /// Replaces the route table.
    #[must_use]
    pub fn with_routes(self, routes: RouteTable) -> Self {
        Self { routes, ..self }
    }

    /// Summarizes `input`, a GitHub web URL or a path below the web base.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] carrying `input` when no
    /// route matches, or carrying the resource URL when the selected fetcher
    /// fails.
    pub async fn summarize(&self, input: &str) -> Result<Summary, SummaryError> {
        let Some(path) = self.path_of(input) else {
            tracing::warn!(input, "URL could not be parsed");
            return Err(SummaryError::not_found(input));
        };

        let Some(resolved) = self.routes.resolve(&path) else {
            tracing::warn!(input, path = %path, "no route matched");
            return Err(SummaryError::not_found(input));
        };
        let request = resolved.map_err(|_| SummaryError::not_found(input))?;

        let summary = self.fetch(request).await?;
        Ok(summary.decorate())
    }

    async fn fetch(&self, request: ResourceRequest) -> Result<Summary, SummaryError> {
        let fetcher = ResourceFetcher::new(&self.gateway, &self.web_base);
        match request {
            ResourceRequest::Root => {
                let humans = self
                    .web_base
                    .join(HUMANS_TXT)
                    .map_err(|_| SummaryError::not_found(self.web_base.as_str()))?;
                self.fallback.summarize(&humans, FALLBACK_LOCALE).await
            }
            ResourceRequest::Repository(params) => fetcher.repository(&params).await,
            ResourceRequest::Tag(params) => fetcher.tag(&params).await,
            ResourceRequest::Commit(params) => fetcher.commit(&params).await,
            ResourceRequest::Subsection(params) => fetcher.subsection(&params).await,
        }
    }

    fn path_of(&self, input: &str) -> Option<String> {
        let parsed = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => self.web_base.join(input).ok()?,
            Err(_) => return None,
        };
        let path = parsed.path();
        if path.is_empty() {
            Some("/".to_owned())
        } else {
            Some(path.to_owned())
        }
    }
}

/// Summarizes a public github.com URL with an anonymous client.
///
/// # Errors
///
/// Returns [`SummaryError::Configuration`] when the HTTP client cannot be
/// built, otherwise any error from [`GitHubSummarizer::summarize`].
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> Result<(), gh_unfurl::SummaryError> {
/// let summary = gh_unfurl::summarize_url("https://github.com/rust-lang/rust").await?;
/// assert_eq!(summary.site_name.as_deref(), Some("GitHub"));
/// # Ok(())
/// # }
/// ```
pub async fn summarize_url(input: &str) -> Result<Summary, SummaryError> {
    let configuration = |message: String| SummaryError::Configuration { message };
    let web_base = Url::parse(GITHUB_WEB_BASE).map_err(|error| configuration(error.to_string()))?;
    let api_base = Url::parse(GITHUB_API_BASE).map_err(|error| configuration(error.to_string()))?;
    let gateway = OctocrabGateway::for_api_base(None, &api_base)
        .map_err(|error| configuration(error.to_string()))?;

    GitHubSummarizer::new(gateway, StaticFallbackSummarizer, web_base)
        .summarize(input)
        .await
}
