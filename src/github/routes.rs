//! Ordered route table mapping GitHub web paths to resource fetchers.
//!
//! Routes are tried strictly in declaration order and the first match wins,
//! so specific shapes such as `commit/:sha` must precede the catch-all
//! subsection route.

use super::error::SummaryError;
use super::locator::{
    CommitParams, RepositoryLocator, RepositoryParams, ResourceRequest, SubsectionParams,
    TagParams,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Rest,
}

/// A path-matching rule such as `/:owner/:repo/commit/:sha`.
///
/// `:name` segments capture exactly one non-empty path segment, a trailing
/// `*` captures the non-empty remainder of the path including slashes, and
/// anything else must match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles a pattern string.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|segment| {
                if segment == "*" {
                    Segment::Rest
                } else if let Some(name) = segment.strip_prefix(':') {
                    Segment::Param(name.to_owned())
                } else {
                    Segment::Literal(segment.to_owned())
                }
            })
            .collect();

        Self {
            source: pattern.to_owned(),
            segments,
        }
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    /// Matches `path` and returns the captured arguments in pattern order.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let mut parts = split_path(path).into_iter();
        let mut captured = Vec::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    if parts.next()? != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(_) => {
                    let value = parts.next().filter(|part| !part.is_empty())?;
                    captured.push(value.to_owned());
                }
                Segment::Rest => {
                    let rest = parts.by_ref().collect::<Vec<_>>().join("/");
                    if rest.is_empty() {
                        return None;
                    }
                    captured.push(rest);
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(captured)
    }
}

/// Fetcher a route is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Site root, delegated to the fallback summarizer.
    Root,
    /// Repository page.
    Repository,
    /// Tagged release page.
    Tag,
    /// Commit page.
    Commit,
    /// Any other repository subsection.
    Subsection,
}

/// A pattern bound to the fetcher that handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    target: RouteTarget,
}

impl Route {
    /// Binds `pattern` to `target`.
    #[must_use]
    pub fn new(pattern: &str, target: RouteTarget) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            target,
        }
    }

    /// The route's path pattern.
    #[must_use]
    pub const fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The fetcher this route dispatches to.
    #[must_use]
    pub const fn target(&self) -> RouteTarget {
        self.target
    }

    fn bind(&self, arguments: Vec<String>) -> Result<ResourceRequest, SummaryError> {
        let mut values = arguments.into_iter();
        let mut next = || {
            values
                .next()
                .ok_or_else(|| SummaryError::not_found(self.pattern.as_str()))
        };

        let request = match self.target {
            RouteTarget::Root => ResourceRequest::Root,
            RouteTarget::Repository => ResourceRequest::Repository(RepositoryParams {
                repository: RepositoryLocator::from_owner_repo(&next()?, &next()?)?,
            }),
            RouteTarget::Tag => ResourceRequest::Tag(TagParams {
                repository: RepositoryLocator::from_owner_repo(&next()?, &next()?)?,
                tag: next()?,
            }),
            RouteTarget::Commit => ResourceRequest::Commit(CommitParams {
                repository: RepositoryLocator::from_owner_repo(&next()?, &next()?)?,
                sha: next()?,
            }),
            RouteTarget::Subsection => ResourceRequest::Subsection(SubsectionParams {
                repository: RepositoryLocator::from_owner_repo(&next()?, &next()?)?,
                section: next()?,
            }),
        };
        Ok(request)
    }
}

/// Ordered collection of routes, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table that tries `routes` in the given order.
    #[must_use]
    pub const fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The built-in GitHub routes.
    #[must_use]
    pub fn github() -> Self {
        Self::new(vec![
            Route::new("/", RouteTarget::Root),
            Route::new("/:owner/:repo", RouteTarget::Repository),
            Route::new("/:owner/:repo/releases/tag/:tag", RouteTarget::Tag),
            Route::new("/:owner/:repo/commit/:sha", RouteTarget::Commit),
            Route::new("/:owner/:repo/*", RouteTarget::Subsection),
        ])
    }

    /// Routes in evaluation order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Selects the first route matching `path` and binds its arguments.
    ///
    /// Returns `None` when no route matches. Once a route matches, its
    /// binding result is final; later routes are never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::SummarizerNotFound`] when the matched route's
    /// arguments cannot be bound to its fetcher parameters.
    pub fn resolve(&self, path: &str) -> Option<Result<ResourceRequest, SummaryError>> {
        self.routes.iter().find_map(|route| {
            let arguments = route.pattern.captures(path)?;
            tracing::debug!(path, pattern = route.pattern.as_str(), "route matched");
            Some(route.bind(arguments))
        })
    }
}

/// Splits a path into segments, ignoring the leading slash and a single
/// trailing slash. Only `/` and the empty path have no segments; `//` is one
/// empty segment.
fn split_path(path: &str) -> Vec<&str> {
    let without_leading = path.strip_prefix('/').unwrap_or(path);
    if without_leading.is_empty() {
        return Vec::new();
    }
    without_leading
        .strip_suffix('/')
        .unwrap_or(without_leading)
        .split('/')
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PathPattern, RouteTable, RouteTarget};
    use crate::github::locator::ResourceRequest;

    fn target_for(path: &str) -> Option<RouteTarget> {
        let table = RouteTable::github();
        table
            .routes()
            .iter()
            .find(|route| route.pattern().captures(path).is_some())
            .map(|route| route.target())
    }

    #[rstest]
    #[case::root("/", Some(RouteTarget::Root))]
    #[case::empty("", Some(RouteTarget::Root))]
    #[case::repository("/octo/repo", Some(RouteTarget::Repository))]
    #[case::repository_trailing_slash("/octo/repo/", Some(RouteTarget::Repository))]
    #[case::tag("/octo/repo/releases/tag/v1.0", Some(RouteTarget::Tag))]
    #[case::commit("/o/r/commit/abc123", Some(RouteTarget::Commit))]
    #[case::subsection("/octo/repo/issues", Some(RouteTarget::Subsection))]
    #[case::nested_subsection("/octo/repo/graphs/contributors", Some(RouteTarget::Subsection))]
    #[case::commit_with_extra_segment("/o/r/commit/abc/extra", Some(RouteTarget::Subsection))]
    #[case::releases_listing("/octo/repo/releases", Some(RouteTarget::Subsection))]
    #[case::owner_only("/octo", None)]
    #[case::empty_owner("//repo", None)]
    #[case::double_slash("//", None)]
    fn selects_most_specific_route(#[case] path: &str, #[case] expected: Option<RouteTarget>) {
        assert_eq!(target_for(path), expected, "unexpected route for {path}");
    }

    #[rstest]
    fn captures_rest_with_slashes() {
        let pattern = PathPattern::new("/:owner/:repo/*");

        let captures = pattern.captures("/octo/repo/graphs/commit-activity");

        assert_eq!(
            captures,
            Some(vec![
                "octo".to_owned(),
                "repo".to_owned(),
                "graphs/commit-activity".to_owned()
            ])
        );
    }

    #[rstest]
    fn rest_requires_at_least_one_segment() {
        let pattern = PathPattern::new("/:owner/:repo/*");

        assert_eq!(pattern.captures("/octo/repo"), None);
    }

    #[rstest]
    fn params_reject_empty_segments() {
        let pattern = PathPattern::new("/:owner/:repo/commit/:sha");

        assert_eq!(pattern.captures("/octo/repo/commit//"), None);
    }

    #[rstest]
    fn resolve_binds_commit_params() {
        let request = RouteTable::github()
            .resolve("/o/r/commit/abc123")
            .expect("route should match")
            .expect("arguments should bind");

        let ResourceRequest::Commit(params) = request else {
            panic!("expected commit request, got {request:?}");
        };
        assert_eq!(params.repository.full_name(), "o/r");
        assert_eq!(params.sha, "abc123");
    }

    #[rstest]
    fn resolve_binds_tag_params() {
        let request = RouteTable::github()
            .resolve("/octo/repo/releases/tag/v1.0")
            .expect("route should match")
            .expect("arguments should bind");

        let ResourceRequest::Tag(params) = request else {
            panic!("expected tag request, got {request:?}");
        };
        assert_eq!(params.tag, "v1.0");
    }

    #[rstest]
    fn resolve_returns_none_for_unroutable_path() {
        assert!(RouteTable::github().resolve("/octocat").is_none());
    }

    #[rstest]
    fn catch_all_is_last() {
        let table = RouteTable::github();
        let last = table.routes().last().expect("table should not be empty");

        assert_eq!(last.target(), RouteTarget::Subsection);
        assert_eq!(last.pattern().as_str(), "/:owner/:repo/*");
    }
}
