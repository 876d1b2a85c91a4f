//! Profile aggregation.
//!
//! A profile is built from two independent GitHub lookups: the user record
//! and the user's repositories. Both lookups are started on the runtime's
//! worker pool before either is awaited, so a request costs as much as the
//! slower of the two. The service always waits for both to settle and only
//! then decides the outcome, which keeps the failure priority stable no
//! matter which call finishes first:
//!
//! 1. either call reports a missing user: [`ProfileError::NotFound`]
//! 2. either call fails in any other way: [`ProfileError::Upstream`]
//! 3. both succeed: the merged [`ProfileDocument`]
//!
//! Every failure is logged, including the one that is not returned.

use std::sync::Arc;

use lens_common::views::{ProfileDocument, RepoSummary, UserSummary};
use lens_github::{GitHubApi, RepoRecord, UpstreamError, UserRecord};
use tokio::task::JoinError;
use tracing::{Instrument, debug, error, instrument, warn};

use crate::error::ErrorChain;

pub mod date;
mod error;

pub use error::ProfileError;

#[cfg(test)]
pub(crate) mod stub;

#[derive(Clone)]
pub struct ProfileService {
    github: Arc<dyn GitHubApi>,
}

impl ProfileService {
    pub fn new(github: Arc<dyn GitHubApi>) -> Self {
        Self { github }
    }

    /// Fetch `username`'s account and repositories concurrently and merge
    /// them into a single document.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, username: &str) -> Result<ProfileDocument, ProfileError> {
        debug!("Fetching profile data");

        let user_task = tokio::spawn({
            let github = Arc::clone(&self.github);
            let username = username.to_string();
            async move { github.fetch_user(&username).await }.in_current_span()
        });

        let repos_task = tokio::spawn({
            let github = Arc::clone(&self.github);
            let username = username.to_string();
            async move { github.fetch_repos(&username).await }.in_current_span()
        });

        // Neither task is cancelled when the other fails.
        let (user, repos) = tokio::join!(user_task, repos_task);

        let user = CallFailure::settle("user", user);
        let repos = CallFailure::settle("repos", repos);

        match (user, repos) {
            (Ok(user), Ok(repos)) => Ok(compose(user, repos)),
            (user, repos) => Err(classify(username, [user.err(), repos.err()])),
        }
    }
}

/// A lookup that did not produce a value.
#[derive(Debug)]
enum CallFailure {
    /// The client returned an error.
    Upstream(UpstreamError),

    /// The task never returned: it panicked or the runtime cancelled it.
    Aborted(JoinError),
}

impl CallFailure {
    fn settle<T>(
        call: &'static str,
        joined: Result<Result<T, UpstreamError>, JoinError>,
    ) -> Result<T, CallFailure> {
        let failure = match joined {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => CallFailure::Upstream(e),
            Err(e) => CallFailure::Aborted(e),
        };

        match &failure {
            CallFailure::Upstream(e) if e.is_not_found() => {
                warn!(call, "User not found on GitHub")
            }
            CallFailure::Upstream(e) => {
                error!(call, error = %ErrorChain(e), "GitHub call failed")
            }
            CallFailure::Aborted(e) => {
                error!(call, error = %e, "GitHub call did not complete")
            }
        }

        Err(failure)
    }

    /// Lower wins when both calls fail.
    fn priority(&self) -> u8 {
        match self {
            CallFailure::Upstream(UpstreamError::NotFound(_)) => 0,
            CallFailure::Upstream(UpstreamError::Api { .. }) => 1,
            CallFailure::Aborted(e) if e.is_panic() => 1,
            CallFailure::Aborted(_) => 2,
        }
    }

    fn into_profile_error(self, username: &str) -> ProfileError {
        match self {
            CallFailure::Upstream(UpstreamError::NotFound(_)) => {
                ProfileError::NotFound(username.to_string())
            }
            CallFailure::Upstream(e) => ProfileError::upstream(e),
            CallFailure::Aborted(e) if e.is_panic() => ProfileError::upstream(e),
            CallFailure::Aborted(e) => ProfileError::unexpected(e),
        }
    }
}

/// Pick the highest-priority failure. On a tie the user lookup is reported.
fn classify<const N: usize>(username: &str, failures: [Option<CallFailure>; N]) -> ProfileError {
    failures
        .into_iter()
        .flatten()
        .min_by_key(CallFailure::priority)
        .map(|failure| failure.into_profile_error(username))
        .unwrap_or_else(|| {
            ProfileError::unexpected(format!(
                "profile for [{username}] failed without a recorded cause"
            ))
        })
}

fn compose(user: UserRecord, repos: Vec<RepoRecord>) -> ProfileDocument {
    let created_at = date::reformat(user.created_at.as_deref());

    let summary = UserSummary {
        user_name: user.login,
        display_name: user.name,
        avatar: user.avatar_url,
        geo_location: user.location,
        email: user.email,
        url: user.url,
        created_at,
    };

    let repos = repos
        .into_iter()
        .map(|repo| RepoSummary::new(repo.name, repo.url))
        .collect();

    ProfileDocument::new(summary, repos)
}
