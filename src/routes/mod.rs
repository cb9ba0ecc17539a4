//! Router assembly: HTTP endpoints, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::codeforces::ProblemSource;
use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - health probe at `/api/v1/health`
/// - `/api/user/:handle` and `/api/recommend/:handle`, with or without a trailing slash
/// - CORS (allow any origin/method/headers); the frontend is served elsewhere
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router<S: ProblemSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route("/api/user/:handle", get(http::http_user_info::<S>))
        .route("/api/user/:handle/", get(http::http_user_info::<S>))
        .route("/api/recommend/:handle", get(http::http_recommend::<S>))
        .route("/api/recommend/:handle/", get(http::http_recommend::<S>))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
