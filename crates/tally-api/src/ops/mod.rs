//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness plus store reachability indicator
//! - `/metrics` : Prometheus text format

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tally_core::wire::HealthBody;

use crate::app_state::AppState;

/// `GET /health` : one PING round trip to the store.
///
/// Always HTTP 200. The process is alive even when the store is down;
/// reporting a failure status here would make orchestration liveness
/// probes restart a healthy process during a store outage.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthBody>) {
    let m = state.metrics();
    m.http_requests.inc(&[("route", "/health"), ("method", "GET")]);

    let started = Instant::now();
    let body = match state.store().ping().await {
        Ok(()) => {
            m.store_roundtrip.observe(&[("op", "ping")], started.elapsed());
            HealthBody::healthy()
        }
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            m.store_failures.inc(&[("op", "ping")]);
            HealthBody::degraded()
        }
    };

    (StatusCode::OK, Json(body))
}

/// `GET /metrics` : Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}
