//! Error types exposed by the GitHub summary layer.

use thiserror::Error;

/// Failures reported by the GitHub API gateway.
///
/// Each variant carries the human-readable `message` GitHub returned in its
/// JSON error body when one was available. The decision is made once, when
/// the transport error is mapped, so fetchers never inspect response bodies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// GitHub answered 404 for the requested resource.
    #[error("GitHub resource not found{}", describe(.message.as_deref()))]
    NotFound {
        /// Message from the GitHub error body, if structured.
        message: Option<String>,
    },

    /// GitHub answered with another non-success status.
    #[error("GitHub API returned {status}{}", describe(.message.as_deref()))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message from the GitHub error body, if structured.
        message: Option<String>,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The HTTP client could not be built or the response could not be read.
    #[error("GitHub client error: {message}")]
    Client {
        /// Error detail from the client.
        message: String,
    },
}

impl UpstreamError {
    /// Message GitHub supplied in a structured error body.
    ///
    /// Transport and client failures never carry a GitHub message, so they
    /// report `None` and are surfaced as a generic not-found signal.
    #[must_use]
    pub fn github_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Api { message, .. } => message.as_deref(),
            Self::Network { .. } | Self::Client { .. } => None,
        }
    }
}

/// Errors surfaced while summarizing a GitHub URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// No summary could be produced for the URL.
    ///
    /// Unroutable paths, unknown repository subsections, and failed upstream
    /// lookups all converge here so callers can treat "could not summarize
    /// this URL" uniformly.
    #[error("no summarizer found for {url}{}", describe(.message.as_deref()))]
    SummarizerNotFound {
        /// The input URL, or the GitHub URL reconstructed from the route.
        url: String,
        /// Upstream message explaining the failure, when GitHub gave one.
        message: Option<String>,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl SummaryError {
    /// Builds a not-found error for `url` without an upstream message.
    #[must_use]
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::SummarizerNotFound {
            url: url.into(),
            message: None,
        }
    }

    /// Normalizes an upstream failure into a not-found error for `url`.
    ///
    /// The GitHub message is kept as context when the failure carried one;
    /// otherwise the error is a bare not-found signal.
    #[must_use]
    pub fn from_upstream(url: impl Into<String>, error: &UpstreamError) -> Self {
        Self::SummarizerNotFound {
            url: url.into(),
            message: error.github_message().map(ToOwned::to_owned),
        }
    }

    /// Returns `true` when this error means no summary exists for the URL.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SummarizerNotFound { .. })
    }
}

fn describe(message: Option<&str>) -> String {
    message.map_or_else(String::new, |text| format!(": {text}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{SummaryError, UpstreamError};

    #[rstest]
    #[case::not_found_with_message(
        UpstreamError::NotFound { message: Some("Not Found".to_owned()) },
        Some("Not Found")
    )]
    #[case::api_with_message(
        UpstreamError::Api { status: 500, message: Some("boom".to_owned()) },
        Some("boom")
    )]
    #[case::api_without_message(UpstreamError::Api { status: 502, message: None }, None)]
    #[case::network(UpstreamError::Network { message: "reset".to_owned() }, None)]
    fn from_upstream_keeps_only_github_messages(
        #[case] upstream: UpstreamError,
        #[case] expected: Option<&str>,
    ) {
        let error = SummaryError::from_upstream("https://github.com/o/r", &upstream);

        assert_eq!(
            error,
            SummaryError::SummarizerNotFound {
                url: "https://github.com/o/r".to_owned(),
                message: expected.map(ToOwned::to_owned),
            }
        );
    }

    #[rstest]
    fn display_includes_message_when_present() {
        let error = SummaryError::SummarizerNotFound {
            url: "https://github.com/o/r".to_owned(),
            message: Some("Not Found".to_owned()),
        };

        assert_eq!(
            error.to_string(),
            "no summarizer found for https://github.com/o/r: Not Found"
        );
    }

    #[rstest]
    fn display_omits_missing_message() {
        let error = SummaryError::not_found("https://github.com/o");

        assert_eq!(error.to_string(), "no summarizer found for https://github.com/o");
        assert!(error.is_not_found());
    }
}
