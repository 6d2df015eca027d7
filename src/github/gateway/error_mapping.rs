//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::UpstreamError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> UpstreamError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return UpstreamError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    UpstreamError::Client {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(status: StatusCode, maybe_message: Option<String>) -> UpstreamError {
    let message = maybe_message.filter(|text| !text.is_empty());
    if status == StatusCode::NOT_FOUND {
        UpstreamError::NotFound { message }
    } else {
        UpstreamError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::map_http_error;
    use crate::github::error::UpstreamError;

    #[rstest]
    fn not_found_status_maps_to_not_found() {
        let error = map_http_error(StatusCode::NOT_FOUND, Some("Not Found".to_owned()));

        assert_eq!(
            error,
            UpstreamError::NotFound {
                message: Some("Not Found".to_owned())
            }
        );
    }

    #[rstest]
    #[case::forbidden(StatusCode::FORBIDDEN, 403)]
    #[case::server_error(StatusCode::BAD_GATEWAY, 502)]
    fn other_statuses_map_to_api_errors(#[case] status: StatusCode, #[case] expected: u16) {
        let error = map_http_error(status, None);

        assert_eq!(
            error,
            UpstreamError::Api {
                status: expected,
                message: None
            }
        );
    }

    #[rstest]
    fn empty_message_is_treated_as_absent() {
        let error = map_http_error(StatusCode::NOT_FOUND, Some(String::new()));

        assert_eq!(error, UpstreamError::NotFound { message: None });
    }
}
