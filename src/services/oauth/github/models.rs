// services/oauth/github/models.rs
use std::fmt;

use serde::Deserialize;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AuthorizeParams {
    pub code: Option<String>,
    /// Set by GitHub instead of `code` when the user denies access.
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl AuthorizeParams {
    /// Keeps the first occurrence of each parameter; repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = AuthorizeParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut params.code,
                "error" => &mut params.error,
                "error_description" => &mut params.error_description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

/// Bearer credential for a single callback request. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken {
    access_token: String,
}

impl GitHubToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenExchange {
    Granted(GitHubToken),
    /// No usable `access_token` in the response. `reason` carries GitHub's `error` code.
    Denied { reason: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryListing {
    Repositories(Vec<String>),
    UnexpectedShape,
}

#[derive(Deserialize)]
struct TokenResponseBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct RepositoryEntry {
    name: String,
}

impl TokenExchange {
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<TokenResponseBody>(body) {
            Ok(TokenResponseBody {
                access_token: Some(token),
                ..
            }) if !token.is_empty() => TokenExchange::Granted(GitHubToken::new(token)),
            Ok(parsed) => TokenExchange::Denied {
                reason: parsed.error,
            },
            Err(_) => TokenExchange::Denied { reason: None },
        }
    }
}

impl RepositoryListing {
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Vec<RepositoryEntry>>(body) {
            Ok(entries) => {
                RepositoryListing::Repositories(entries.into_iter().map(|e| e.name).collect())
            }
            Err(_) => RepositoryListing::UnexpectedShape,
        }
    }
}
