//! REST handlers for the counter surface.
//!
//! Handlers return concrete `Json<T>` bodies so integration tests can call
//! them directly and inspect the typed payload. A store failure never maps
//! to an HTTP failure status here: it is logged, counted, and downgraded
//! to the documented zero/error body. The client is expected to re-poll.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use tally_core::wire::{CounterBody, DebugInfo, ServiceInfo};

use crate::app_state::AppState;

/// `GET /` : static service metadata.
pub async fn home(State(state): State<AppState>) -> Json<ServiceInfo> {
    state.metrics().http_requests.inc(&[("route", "/"), ("method", "GET")]);

    Json(ServiceInfo {
        app: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/health".into(),
            "/api/counter".into(),
            "/api/info".into(),
            "/metrics".into(),
        ],
    })
}

/// `GET /api/counter` : read the current value.
pub async fn counter_get(State(state): State<AppState>) -> Json<CounterBody> {
    let m = state.metrics();
    m.http_requests.inc(&[("route", "/api/counter"), ("method", "GET")]);

    let started = Instant::now();
    match state.store().fetch().await {
        Ok(count) => {
            m.store_roundtrip.observe(&[("op", "get")], started.elapsed());
            Json(CounterBody::read(count))
        }
        Err(e) => {
            tracing::warn!(error = %e, "counter read failed");
            m.store_failures.inc(&[("op", "get")]);
            Json(CounterBody::unavailable())
        }
    }
}

/// `POST /api/counter` : atomically add one and return the new value.
pub async fn counter_post(State(state): State<AppState>) -> Json<CounterBody> {
    let m = state.metrics();
    m.http_requests.inc(&[("route", "/api/counter"), ("method", "POST")]);

    let started = Instant::now();
    match state.store().increment().await {
        Ok(count) => {
            m.store_roundtrip.observe(&[("op", "incr")], started.elapsed());
            m.counter_increments.inc(&[]);
            Json(CounterBody::incremented(count))
        }
        Err(e) => {
            tracing::warn!(error = %e, "counter increment failed");
            m.store_failures.inc(&[("op", "incr")]);
            Json(CounterBody::unavailable())
        }
    }
}

/// `GET /api/info` : process identity and the resolved store endpoint.
pub async fn info(State(state): State<AppState>) -> Json<DebugInfo> {
    state
        .metrics()
        .http_requests
        .inc(&[("route", "/api/info"), ("method", "GET")]);

    Json(DebugInfo {
        hostname: state.hostname().to_string(),
        redis_host: state.cfg().store.host.clone(),
        redis_port: state.cfg().store.port,
    })
}
