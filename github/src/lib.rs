//! Read-only access to the GitHub users API.
//!
//! [`GitHubApi`] is the capability the rest of Lens depends on. It exposes the
//! two lookups a profile needs and reports failures with [`UpstreamError`],
//! which keeps "this user does not exist" apart from every other way a call
//! can fail. [`GitHubClient`] is the HTTP implementation.

use async_trait::async_trait;
use thiserror::Error;

mod client;
mod models;

pub use client::GitHubClient;
pub use models::{RepoRecord, UserRecord};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("{context}")]
    Api {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl UpstreamError {
    pub fn not_found(username: &str) -> Self {
        Self::NotFound(username.to_string())
    }

    pub fn api(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Api {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// The two user lookups a profile is assembled from.
///
/// Implementations must be safe to call from many in-flight requests at once;
/// callers share a single handle behind an `Arc`.
#[async_trait]
pub trait GitHubApi: Send + Sync + 'static {
    /// Fetch the account record for `username`.
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, UpstreamError>;

    /// Fetch the repositories owned by `username`, in upstream order.
    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoRecord>, UpstreamError>;
}
