pub mod auth;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use auth::github_login::{github_callback, github_login};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(github_login))
        .route("/authorize", get(github_callback))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
