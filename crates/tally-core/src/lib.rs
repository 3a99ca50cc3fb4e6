//! tally core: counter domain rules, error types, and JSON wire contracts.
//!
//! This crate defines the response shapes and error surface shared by the
//! API service and tooling. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so production
//! processes do not crash on malformed input or a degraded store.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod wire;

/// Shared result type.
pub use error::{Result, TallyError};
