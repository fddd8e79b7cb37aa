use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    responses::{
        PageResponse, AUTHORIZATION_FAILED, MISSING_CODE, REPOSITORIES_FAILED,
        UPSTREAM_UNREACHABLE,
    },
    services::oauth::github::models::{AuthorizeParams, RepositoryListing, TokenExchange},
    state::AppState,
};

/// Login page linking to GitHub's OAuth authorization page
pub async fn github_login(State(state): State<AppState>) -> impl IntoResponse {
    let github = &state.config.github;
    let mut github_url = github.authorize_url.clone();
    github_url
        .query_pairs_mut()
        .append_pair("client_id", &github.client_id);

    PageResponse::ok(format!(r#"<a href="{github_url}">Login with GitHub</a>"#))
}

/// Handles the GitHub OAuth callback and lists the user's repositories
pub async fn github_callback(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(pairs)) => AuthorizeParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable callback query string");
            AuthorizeParams::default()
        }
    };
    let Some(code) = params.code() else {
        if let Some(error) = &params.error {
            tracing::warn!(
                error = %error,
                description = params.error_description.as_deref().unwrap_or(""),
                "GitHub redirected without a code"
            );
        }
        return PageResponse::bad_request(MISSING_CODE).into_response();
    };

    let token = match state.github_oauth.exchange_code_for_token(code).await {
        Ok(TokenExchange::Granted(token)) => token,
        Ok(TokenExchange::Denied { reason }) => {
            tracing::warn!(reason = ?reason, "GitHub token exchange returned no access token");
            return PageResponse::unauthorized(AUTHORIZATION_FAILED).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "GitHub token exchange error");
            return PageResponse::bad_gateway(UPSTREAM_UNREACHABLE).into_response();
        }
    };

    let names = match state.github_oauth.list_repositories(&token).await {
        Ok(RepositoryListing::Repositories(names)) => names,
        Ok(RepositoryListing::UnexpectedShape) => {
            tracing::warn!("GitHub repository list was not an array of repositories");
            return PageResponse::bad_request(REPOSITORIES_FAILED).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "GitHub repository fetch error");
            return PageResponse::bad_gateway(UPSTREAM_UNREACHABLE).into_response();
        }
    };

    tracing::info!(count = names.len(), "listed GitHub repositories");
    PageResponse::ok(names.join("<br>")).into_response()
}
