use std::{env, fmt, net::SocketAddr};

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is not a valid socket address: {value}")]
    InvalidBindAddr { key: &'static str, value: String },
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: Url,
    pub token_url: String,
    pub api_base_url: String,
}

impl fmt::Debug for GitHubOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github: GitHubOAuthConfig,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok(); // Load .env file

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::Missing(key));

        let client_id = required("API_KEY")?;
        let client_secret = required("SECRET_KEY")?;

        let authorize_raw = var("GITHUB_OAUTH_AUTHORIZE_URL")
            .unwrap_or_else(|| DEFAULT_AUTHORIZE_URL.to_string());
        let authorize_url = Url::parse(&authorize_raw).map_err(|_| ConfigError::InvalidUrl {
            key: "GITHUB_OAUTH_AUTHORIZE_URL",
            value: authorize_raw.clone(),
        })?;
        let token_url =
            var("GITHUB_OAUTH_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api_base_url = var("GITHUB_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let bind_raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        Ok(Config {
            github: GitHubOAuthConfig {
                client_id,
                client_secret,
                authorize_url,
                token_url,
                api_base_url,
            },
            bind_addr,
        })
    }
}
