// services/oauth/github/errors.rs
use thiserror::Error;

/// Transport-level failures talking to GitHub. Response shapes are
/// reported through `TokenExchange` and `RepositoryListing` instead.
#[derive(Debug, Error)]
pub enum GitHubAuthError {
    #[error("GitHub token exchange request failed: {0}")]
    TokenExchangeFailed(#[source] reqwest::Error),
    #[error("GitHub repository request failed: {0}")]
    RepositoryFetchFailed(#[source] reqwest::Error),
}
