//! tally API service library entry.
//!
//! This crate wires the config layer, the Redis-backed store client, the
//! REST handlers, and the metrics registry into a runnable service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
