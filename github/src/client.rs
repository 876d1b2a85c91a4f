use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{GitHubApi, RepoRecord, UpstreamError, UserRecord};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
///
/// Built once at startup and shared; `reqwest::Client` pools connections
/// internally, so clones are cheap and safe to use concurrently.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: Url,
    client: Client,
}

impl GitHubClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.github.com`).
    /// Every call is abandoned after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid GitHub API URL: {base_url}"))?;

        if base_url.cannot_be_a_base() {
            bail!("GitHub API URL cannot carry a path: {base_url}");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(format!("lens-github/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UpstreamError::api(
                    format!("Cannot build a request path on {}", self.base_url),
                    anyhow!("cannot-be-a-base URL"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<TResult>(
        &self,
        url: Url,
        username: &str,
        what: &str,
    ) -> Result<TResult, UpstreamError>
    where
        TResult: DeserializeOwned,
    {
        debug!(%url, "Calling GitHub API");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            UpstreamError::api(format!("Failed to fetch {what} for user [{username}]"), e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "GitHub returned 404");
            return Err(UpstreamError::not_found(username));
        }

        let response = response.error_for_status().map_err(|e| {
            UpstreamError::api(
                format!("GitHub returned {status} fetching {what} for user [{username}]"),
                e,
            )
        })?;

        response.json::<TResult>().await.map_err(|e| {
            UpstreamError::api(format!("Failed to decode {what} for user [{username}]"), e)
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    #[instrument(skip(self))]
    async fn fetch_user(&self, username: &str) -> Result<UserRecord, UpstreamError> {
        let url = self.endpoint(&["users", username])?;
        self.get(url, username, "user info").await
    }

    #[instrument(skip(self))]
    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoRecord>, UpstreamError> {
        let url = self.endpoint(&["users", username, "repos"])?;
        self.get(url, username, "repos").await
    }
}
