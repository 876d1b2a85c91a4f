use std::{net::SocketAddr, time::Duration};

use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct LensApiConfig {
    #[clap(
        short,
        long,
        env = "LENS_API_BIND_ADDR",
        default_value = "0.0.0.0:8080"
    )]
    pub bind_addr: SocketAddr,

    /// Origin allowed to call the API from a browser.
    #[clap(
        long,
        env = "LENS_API_PUBLIC_URL",
        default_value = "http://localhost:8080"
    )]
    pub public_url: String,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    /// Base URL of the GitHub REST API. Point this at a GitHub Enterprise
    /// instance (e.g. `https://ghe.example.com/api/v3`) or a local stub.
    #[clap(
        long,
        env = "LENS_GITHUB_API_URL",
        default_value = "https://api.github.com"
    )]
    pub github_api_url: String,

    /// Per-call timeout for requests to GitHub, in seconds.
    #[clap(long, env = "LENS_GITHUB_TIMEOUT_SECS", default_value_t = 10)]
    pub github_timeout_secs: u64,
}

impl LensApiConfig {
    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }
}
