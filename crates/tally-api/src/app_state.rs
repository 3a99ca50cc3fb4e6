//! Shared application state for the tally API service.
//!
//! Holds the resolved config, the store handle, the metrics registry, and
//! the process identity. No counter value lives here: the store is the
//! single source of truth, so any number of replicas stay consistent.

use std::sync::Arc;

use tally_core::error::Result;

use crate::config::ApiConfig;
use crate::obs::ApiMetrics;
use crate::store::{RedisStore, Store};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    store: Arc<dyn Store>,
    metrics: ApiMetrics,
    hostname: String,
}

impl AppState {
    /// Build production state: a Redis store wired from config.
    /// Note this does not touch the network; the first round trip happens
    /// on the first request, and a dead store only degrades responses.
    pub fn new(cfg: ApiConfig) -> Result<Self> {
        let store = Arc::new(RedisStore::connect(&cfg.store)?);
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an arbitrary store implementation (tests).
    pub fn with_store(cfg: ApiConfig, store: Arc<dyn Store>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: ApiMetrics::default(),
                hostname: resolve_hostname(),
            }),
        }
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn hostname(&self) -> &str {
        &self.inner.hostname
    }
}

/// Process identity for `/api/info`. Kubernetes sets `HOSTNAME` on every
/// pod; outside a pod, fall back to the kernel hostname, then a marker.
fn resolve_hostname() -> String {
    if let Ok(h) = std::env::var("HOSTNAME") {
        let h = h.trim().to_string();
        if !h.is_empty() {
            return h;
        }
    }
    if let Ok(h) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
        let h = h.trim().to_string();
        if !h.is_empty() {
            return h;
        }
    }
    "unknown".to_string()
}
