use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use lens_github::{GitHubApi, RepoRecord, UpstreamError, UserRecord};

/// What a stubbed lookup does once its delay has elapsed.
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Ok(T),
    NotFound,
    Fail(&'static str),
    Panic,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self, username: &str) -> Result<T, UpstreamError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::NotFound => Err(UpstreamError::not_found(username)),
            Reply::Fail(reason) => Err(UpstreamError::api(
                format!("Failed to fetch data for user [{username}]"),
                std::io::Error::other(*reason),
            )),
            Reply::Panic => panic!("stubbed lookup panicked"),
        }
    }
}

/// In-process [`GitHubApi`] with scripted replies and artificial latency.
#[derive(Debug, Clone)]
pub(crate) struct StubGitHub {
    user: Reply<UserRecord>,
    user_delay: Duration,
    repos: Reply<Vec<RepoRecord>>,
    repos_delay: Duration,
    finished: Arc<AtomicUsize>,
}

impl StubGitHub {
    pub(crate) fn new(user: Reply<UserRecord>, repos: Reply<Vec<RepoRecord>>) -> Self {
        Self {
            user,
            user_delay: Duration::ZERO,
            repos,
            repos_delay: Duration::ZERO,
            finished: Arc::default(),
        }
    }

    pub(crate) fn octocat() -> Self {
        Self::new(Reply::Ok(octocat_user()), Reply::Ok(octocat_repos()))
    }

    pub(crate) fn with_delays(mut self, user: Duration, repos: Duration) -> Self {
        self.user_delay = user;
        self.repos_delay = repos;
        self
    }

    /// Number of lookups that ran to completion, successful or not.
    pub(crate) fn finished(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.finished)
    }
}

#[async_trait]
impl GitHubApi for StubGitHub {
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, UpstreamError> {
        tokio::time::sleep(self.user_delay).await;
        let reply = self.user.resolve(username);
        self.finished.fetch_add(1, Ordering::SeqCst);
        reply
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoRecord>, UpstreamError> {
        tokio::time::sleep(self.repos_delay).await;
        let reply = self.repos.resolve(username);
        self.finished.fetch_add(1, Ordering::SeqCst);
        reply
    }
}

pub(crate) fn octocat_user() -> UserRecord {
    UserRecord {
        login: "octocat".into(),
        name: Some("The Octocat".into()),
        avatar_url: Some("https://avatars.githubusercontent.com/u/583231".into()),
        location: Some("San Francisco".into()),
        email: Some("octocat@github.com".into()),
        url: Some("https://api.github.com/users/octocat".into()),
        html_url: Some("https://github.com/octocat".into()),
        created_at: Some("2011-01-25T18:44:36Z".into()),
        public_repos: 2,
        ..Default::default()
    }
}

pub(crate) fn octocat_repos() -> Vec<RepoRecord> {
    vec![
        RepoRecord {
            name: "hello-world".into(),
            url: "https://github.com/octocat/hello-world".into(),
        },
        RepoRecord {
            name: "spoon-knife".into(),
            url: "https://github.com/octocat/spoon-knife".into(),
        },
    ]
}
