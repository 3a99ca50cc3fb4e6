//! Axum router wiring.
//!
//! The reverse proxy in front forwards `/api/*` here unchanged and serves
//! static assets itself; the CORS layer mirrors the permissive stance the
//! service has always had for direct (non-proxied) access.

use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(api::home))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/api/counter", get(api::counter_get).post(api::counter_post))
        .route("/api/info", get(api::info))
        .layer(cors)
        .with_state(state)
}
