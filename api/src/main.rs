use anyhow::Context;
use clap::Parser;
use lens_api::{config::LensApiConfig, context::ApiContext, server};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LensApiConfig::parse();

    let context = ApiContext::new(config.clone())?;
    let (router, api) = server::make(context)?;

    if config.dump_openapi {
        let json = api.to_pretty_json().context("Failed to render OpenAPI document")?;
        print!("{}", json);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or("lens_api=info,lens_github=info".into()),
        )
        .pretty()
        .init();

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!(github = %config.github_api_url, "Listening on http://{:?}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")
}
