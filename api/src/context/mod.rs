use std::sync::Arc;

use lens_github::{GitHubApi, GitHubClient};

use crate::{config::LensApiConfig, profile::ProfileService};

#[derive(Clone)]
pub struct ApiContext {
    pub config: LensApiConfig,
    pub profiles: ProfileService,
}

impl ApiContext {
    pub fn new(config: LensApiConfig) -> anyhow::Result<Self> {
        let github = GitHubClient::new(&config.github_api_url, config.github_timeout())?;
        Ok(Self::with_github(config, Arc::new(github)))
    }

    pub fn with_github(config: LensApiConfig, github: Arc<dyn GitHubApi>) -> Self {
        Self {
            config,
            profiles: ProfileService::new(github),
        }
    }
}
