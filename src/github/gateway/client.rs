//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::UpstreamError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL.
///
/// Requests are anonymous unless a token is supplied.
///
/// # Errors
///
/// Returns `UpstreamError::Client` when the base URI cannot be parsed or
/// Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &Url,
) -> Result<Octocrab, UpstreamError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| UpstreamError::Client {
            message: format!("invalid API base {api_base}: {error}"),
        })?;

    let builder = match token {
        Some(personal_token) => Octocrab::builder().personal_token(personal_token.as_ref()),
        None => Octocrab::builder(),
    };

    builder
        .base_uri(base_uri)
        .map_err(|error| UpstreamError::Client {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
