//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – anonymous access to github.com
//! 2. **Configuration file** – `.gh-unfurl.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GH_UNFURL_URL`, `GH_UNFURL_TOKEN`, or
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--url`/`-u` and `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! web_base = "https://ghe.example.com"
//! api_base = "https://ghe.example.com/api/v3"
//! pretty = true
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::SummaryError;
use crate::github::locator::{PersonalAccessToken, derive_api_base};
use crate::github::summarizer::GITHUB_WEB_BASE;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gh_unfurl::UnfurlConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = UnfurlConfig::load().expect("failed to load configuration");
/// let url = config.require_url().expect("URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GH_UNFURL",
    discovery(
        dotfile_name = ".gh-unfurl.toml",
        config_file_name = "gh-unfurl.toml",
        app_name = "gh-unfurl"
    )
)]
pub struct UnfurlConfig {
    /// GitHub URL to summarize.
    ///
    /// Can be provided via:
    /// - CLI: `--url <URL>` or `-u <URL>`
    /// - Environment: `GH_UNFURL_URL`
    /// - Config file: `url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional; public repositories can be summarized anonymously at a
    /// lower rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GH_UNFURL_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Web root that input URLs and reported URLs are relative to.
    ///
    /// Defaults to `https://github.com`.
    pub web_base: Option<String>,

    /// REST API root.
    ///
    /// Defaults to `https://api.github.com` for github.com and to
    /// `<web_base>/api/v3` for GitHub Enterprise hosts.
    pub api_base: Option<String>,

    /// Pretty-prints the JSON summary.
    ///
    /// Can be provided via:
    /// - CLI: `--pretty` / `-p`
    /// - Config file: `pretty = true`
    #[ortho_config(cli_short = 'p')]
    pub pretty: bool,
}

impl UnfurlConfig {
    /// Returns the URL to summarize or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Configuration`] when no URL is configured.
    pub fn require_url(&self) -> Result<&str, SummaryError> {
        self.url
            .as_deref()
            .ok_or_else(|| SummaryError::Configuration {
                message: "a GitHub URL is required (use --url or -u)".to_owned(),
            })
    }

    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable. Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .and_then(PersonalAccessToken::new)
    }

    /// Parsed web base, defaulting to github.com.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Configuration`] when the configured value is
    /// not an absolute URL.
    pub fn web_base(&self) -> Result<Url, SummaryError> {
        parse_base("web_base", self.web_base.as_deref().unwrap_or(GITHUB_WEB_BASE))
    }

    /// Parsed API base, derived from the web base when not configured.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Configuration`] when either base is invalid.
    pub fn api_base(&self) -> Result<Url, SummaryError> {
        match self.api_base.as_deref() {
            Some(raw) => parse_base("api_base", raw),
            None => derive_api_base(&self.web_base()?),
        }
    }
}

fn parse_base(field: &str, raw: &str) -> Result<Url, SummaryError> {
    Url::parse(raw).map_err(|error| SummaryError::Configuration {
        message: format!("{field} `{raw}` is not a valid URL: {error}"),
    })
}
