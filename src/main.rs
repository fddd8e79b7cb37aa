use std::sync::Arc;

use anyhow::{Context, Result};
use github_repos_login::{
    config::Config, routes::app, services::oauth::github::GitHubOAuthClient, state::AppState,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env().context("failed to load configuration")?);
    info!(client_id = %config.github.client_id, "loaded GitHub OAuth configuration");

    let github_oauth = Arc::new(GitHubOAuthClient::new(
        Client::new(),
        config.github.clone(),
    ));

    let state = AppState {
        config: config.clone(),
        github_oauth,
    };

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
