use std::{error::Error as StdError, fmt};

use axum::{Json, http::StatusCode, response::IntoResponse};
use lens_common::views::ApiErrorResponse;
use thiserror::Error;

use crate::profile::ProfileError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Profile(ProfileError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Profile(ProfileError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            Self::Profile(ProfileError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        let message = match &err {
            ApiError::Profile(ProfileError::NotFound(username)) => {
                format!("User not found: {username}")
            }
            ApiError::Profile(ProfileError::Upstream(_)) => "GitHub API error".into(),
            ApiError::Profile(ProfileError::Unexpected(_)) => "internal server error".into(),
        };

        ApiErrorResponse::new(err.status_code().as_u16(), message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            Self::Profile(ProfileError::NotFound(username)) => {
                tracing::warn!(username, "User not found");
            }
            Self::Profile(ProfileError::Upstream(_)) => {
                tracing::error!(error = %ErrorChain(&self), "GitHub API error");
            }
            Self::Profile(ProfileError::Unexpected(_)) => {
                tracing::error!(error = %ErrorChain(&self), "Unexpected error occurred");
            }
        }

        let status_code = self.status_code();
        (status_code, Json(ApiErrorResponse::from(self))).into_response()
    }
}

/// Displays an error followed by each of its sources: `outer: inner: root`.
pub(crate) struct ErrorChain<'a>(pub &'a (dyn StdError + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lens_github::UpstreamError;

    use super::*;

    #[test]
    fn not_found_maps_to_404_with_username() {
        let err = ApiError::from(ProfileError::NotFound("bogususer".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiErrorResponse::from(err),
            ApiErrorResponse::new(404, "User not found: bogususer")
        );
    }

    #[test]
    fn upstream_maps_to_502_without_detail() {
        let cause = UpstreamError::api("secret internal detail", std::io::Error::other("boom"));
        let err = ApiError::from(ProfileError::upstream(cause));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ApiErrorResponse::from(err),
            ApiErrorResponse::new(502, "GitHub API error")
        );
    }

    #[test]
    fn unexpected_maps_to_500() {
        let err = ApiError::from(ProfileError::unexpected("task cancelled"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiErrorResponse::from(err),
            ApiErrorResponse::new(500, "internal server error")
        );
    }

    #[test]
    fn error_chain_walks_sources() {
        let cause = UpstreamError::api(
            "Failed to fetch user info for user [octocat]",
            std::io::Error::other("connection refused"),
        );
        let err = ProfileError::upstream(cause);

        assert_eq!(
            ErrorChain(&err).to_string(),
            "GitHub API error: Failed to fetch user info for user [octocat]: connection refused"
        );
    }
}
