use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::services::oauth::github::{
    errors::GitHubAuthError,
    models::{GitHubToken, RepositoryListing, TokenExchange},
    service::GitHubOAuthService,
};

/// Canned responses for handler tests. Counts calls so tests can assert
/// that a short-circuited request never reached GitHub.
pub struct MockGitHubOAuth {
    pub token: TokenExchange,
    pub repositories: RepositoryListing,
    pub exchange_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
}

impl MockGitHubOAuth {
    pub fn new(token: TokenExchange, repositories: RepositoryListing) -> Self {
        Self {
            token,
            repositories,
            exchange_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn granting(token: &str, names: &[&str]) -> Self {
        Self::new(
            TokenExchange::Granted(GitHubToken::new(token)),
            RepositoryListing::Repositories(names.iter().map(|n| n.to_string()).collect()),
        )
    }

    pub fn exchange_count(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGitHubOAuth {
    fn default() -> Self {
        Self::granting("mock-token", &[])
    }
}

#[async_trait]
impl GitHubOAuthService for MockGitHubOAuth {
    async fn exchange_code_for_token(&self, _code: &str) -> Result<TokenExchange, GitHubAuthError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }

    async fn list_repositories(
        &self,
        _token: &GitHubToken,
    ) -> Result<RepositoryListing, GitHubAuthError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repositories.clone())
    }
}
