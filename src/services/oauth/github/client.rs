// services/oauth/github/client.rs

use crate::config::GitHubOAuthConfig;
use crate::services::oauth::github::errors::GitHubAuthError;
use crate::services::oauth::github::models::{GitHubToken, RepositoryListing, TokenExchange};
use async_trait::async_trait;
use reqwest::{header, Client};

use super::service::GitHubOAuthService;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GitHubOAuthClient {
    pub client: Client,
    pub config: GitHubOAuthConfig,
}

impl GitHubOAuthClient {
    pub fn new(client: Client, config: GitHubOAuthConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GitHubOAuthService for GitHubOAuthClient {
    async fn exchange_code_for_token(&self, code: &str) -> Result<TokenExchange, GitHubAuthError> {
        let res = self
            .client
            .post(&self.config.token_url)
            .header(header::ACCEPT, "application/json") // GitHub answers form-encoded otherwise
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(GitHubAuthError::TokenExchangeFailed)?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(GitHubAuthError::TokenExchangeFailed)?;

        let outcome = TokenExchange::from_body(&body);
        if let TokenExchange::Denied { reason } = &outcome {
            tracing::debug!(%status, reason = ?reason, "GitHub token endpoint returned no token");
        }
        Ok(outcome)
    }

    async fn list_repositories(
        &self,
        token: &GitHubToken,
    ) -> Result<RepositoryListing, GitHubAuthError> {
        let url = format!("{}/user/repos", self.config.api_base_url);

        let res = self
            .client
            .get(url)
            .bearer_auth(token.secret())
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(GitHubAuthError::RepositoryFetchFailed)?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(GitHubAuthError::RepositoryFetchFailed)?;

        let listing = RepositoryListing::from_body(&body);
        if listing == RepositoryListing::UnexpectedShape {
            tracing::debug!(%status, "GitHub repository list had an unexpected shape");
        }
        Ok(listing)
    }
}
