use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

pub const MISSING_CODE: &str = "Missing code";
pub const AUTHORIZATION_FAILED: &str = "Authorization failed";
pub const REPOSITORIES_FAILED: &str = "Failed to fetch repositories";
pub const UPSTREAM_UNREACHABLE: &str = "Failed to reach GitHub";

/// Plain HTML page bodies, one constructor per status the service emits.
pub struct PageResponse;

impl PageResponse {
    pub fn ok(body: String) -> impl IntoResponse {
        (StatusCode::OK, Html(body))
    }

    pub fn bad_request(msg: &'static str) -> impl IntoResponse {
        (StatusCode::BAD_REQUEST, Html(msg))
    }

    pub fn unauthorized(msg: &'static str) -> impl IntoResponse {
        (StatusCode::UNAUTHORIZED, Html(msg))
    }

    pub fn bad_gateway(msg: &'static str) -> impl IntoResponse {
        (StatusCode::BAD_GATEWAY, Html(msg))
    }
}
