#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;

use tally_api::app_state::AppState;
use tally_api::config::ApiConfig;
use tally_api::store::Store;
use tally_api::{api, ops};
use tally_core::error::{Result, TallyError};
use tally_core::wire::CounterBody;

/// In-memory stand-in for a reachable store.
#[derive(Default)]
struct MemoryStore {
    value: AtomicU64,
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn fetch(&self) -> Result<u64> {
        Ok(self.value.load(Ordering::SeqCst))
    }

    async fn increment(&self) -> Result<u64> {
        Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Stand-in for an unreachable store: every round trip fails.
struct DeadStore;

#[async_trait]
impl Store for DeadStore {
    async fn ping(&self) -> Result<()> {
        Err(unreachable())
    }

    async fn fetch(&self) -> Result<u64> {
        Err(unreachable())
    }

    async fn increment(&self) -> Result<u64> {
        Err(unreachable())
    }
}

fn unreachable() -> TallyError {
    TallyError::StoreUnavailable("connection refused".into())
}

#[test]
fn store_errors_are_classified() {
    assert!(unreachable().is_store_unavailable());
}

fn live_state() -> AppState {
    AppState::with_store(ApiConfig::default(), Arc::new(MemoryStore::default()))
}

fn dead_state() -> AppState {
    AppState::with_store(ApiConfig::default(), Arc::new(DeadStore))
}

#[tokio::test]
async fn three_posts_from_empty_store() {
    let state = live_state();

    for _ in 0..2 {
        api::counter_post(State(state.clone())).await;
    }
    let third = api::counter_post(State(state.clone())).await.0;
    assert_eq!(
        serde_json::to_value(&third).unwrap(),
        json!({"count": 3, "message": "Counter incremented"})
    );

    let read = api::counter_get(State(state)).await.0;
    assert_eq!(serde_json::to_value(&read).unwrap(), json!({"count": 3}));
}

#[tokio::test]
async fn n_posts_read_back_as_n() {
    let state = live_state();
    let n = 25;

    for _ in 0..n {
        let body = api::counter_post(State(state.clone())).await.0;
        assert!(body.error.is_none());
    }

    let read = api::counter_get(State(state)).await.0;
    assert_eq!(read, CounterBody::read(n));
}

#[tokio::test]
async fn get_is_idempotent_between_posts() {
    let state = live_state();
    api::counter_post(State(state.clone())).await;

    let first = api::counter_get(State(state.clone())).await.0;
    let second = api::counter_get(State(state)).await.0;
    assert_eq!(first, second);
    assert_eq!(first.count, 1);
}

#[tokio::test]
async fn concurrent_posts_all_land() {
    let state = live_state();

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let st = state.clone();
        tasks.push(tokio::spawn(async move {
            api::counter_post(State(st)).await.0
        }));
    }
    for t in tasks {
        assert!(t.await.unwrap().error.is_none());
    }

    let read = api::counter_get(State(state)).await.0;
    assert_eq!(read.count, 16);
}

#[tokio::test]
async fn unreachable_store_degrades_counter_routes() {
    let state = dead_state();

    let got = api::counter_get(State(state.clone())).await.0;
    assert_eq!(
        serde_json::to_value(&got).unwrap(),
        json!({"count": 0, "error": "Redis unavailable"})
    );

    let posted = api::counter_post(State(state)).await.0;
    assert_eq!(
        serde_json::to_value(&posted).unwrap(),
        json!({"count": 0, "error": "Redis unavailable"})
    );
}

#[tokio::test]
async fn health_is_200_when_store_is_up() {
    let (status, body) = ops::health(State(live_state())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.0.status, "healthy");
    assert_eq!(body.0.redis, "connected");
}

#[tokio::test]
async fn health_is_still_200_when_store_is_down() {
    let (status, body) = ops::health(State(dead_state())).await;
    assert_eq!(status, StatusCode::OK, "liveness must not fail on a store outage");
    assert_eq!(body.0.status, "degraded");
    assert_eq!(body.0.redis, "disconnected");
}

#[tokio::test]
async fn home_lists_endpoints() {
    let body = api::home(State(live_state())).await.0;
    assert_eq!(body.app, "tally-api");
    assert!(!body.version.is_empty());
    assert!(body.endpoints.contains(&"/health".to_string()));
    assert!(body.endpoints.contains(&"/api/counter".to_string()));
}

#[tokio::test]
async fn info_echoes_configured_store_endpoint() {
    let mut cfg = ApiConfig::default();
    cfg.store.host = "redis.cache.svc".to_string();
    cfg.store.port = 6380;
    let state = AppState::with_store(cfg, Arc::new(MemoryStore::default()));

    let body = api::info(State(state)).await.0;
    assert_eq!(body.redis_host, "redis.cache.svc");
    assert_eq!(body.redis_port, 6380);
    assert!(!body.hostname.is_empty());
}

#[tokio::test]
async fn router_wires_without_panicking() {
    let _app = tally_api::router::build_router(live_state());
}

#[tokio::test]
async fn metrics_record_traffic_and_failures() {
    let state = dead_state();
    api::counter_get(State(state.clone())).await;
    api::counter_post(State(state.clone())).await;

    assert_eq!(state.metrics().http_requests.total(), 2);
    assert_eq!(state.metrics().store_failures.total(), 2);

    let rendered = state.metrics().render();
    assert!(rendered.contains("tally_http_requests_total"));
    assert!(rendered.contains("tally_store_failures_total"));
    assert!(rendered.contains("op=\"get\""));
}
