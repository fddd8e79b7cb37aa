pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock_github_oauth;
pub mod models;
pub mod service;

pub use client::GitHubOAuthClient;
pub use errors::GitHubAuthError;
pub use models::{AuthorizeParams, GitHubToken, RepositoryListing, TokenExchange};
pub use service::GitHubOAuthService;
