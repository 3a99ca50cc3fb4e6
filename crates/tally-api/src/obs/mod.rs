//! Observability: metrics registry rendered at `/metrics`.

pub mod metrics;

pub use metrics::ApiMetrics;
