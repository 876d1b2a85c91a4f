use lens_github::BoxError;
use thiserror::Error;

/// Why a profile could not be assembled.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The user does not exist upstream.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A call to GitHub failed for any reason other than a missing user.
    #[error("GitHub API error")]
    Upstream(#[source] BoxError),

    #[error("Unexpected error while building profile")]
    Unexpected(#[source] BoxError),
}

impl ProfileError {
    pub fn upstream(source: impl Into<BoxError>) -> Self {
        Self::Upstream(source.into())
    }

    pub fn unexpected(source: impl Into<BoxError>) -> Self {
        Self::Unexpected(source.into())
    }
}
