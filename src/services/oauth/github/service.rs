// services/oauth/github/service.rs

use super::{
    errors::GitHubAuthError,
    models::{GitHubToken, RepositoryListing, TokenExchange},
};
use async_trait::async_trait;

#[async_trait]
pub trait GitHubOAuthService: Send + Sync {
    async fn exchange_code_for_token(&self, code: &str) -> Result<TokenExchange, GitHubAuthError>;
    async fn list_repositories(
        &self,
        access_token: &GitHubToken,
    ) -> Result<RepositoryListing, GitHubAuthError>;
}
