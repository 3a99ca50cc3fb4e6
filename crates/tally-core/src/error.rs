//! Shared error type across tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and the API service.
///
/// The REST surface deliberately never maps `StoreUnavailable` to an HTTP
/// failure status; handlers downgrade it to a zero-value body with an
/// `error` field. `Config` only occurs during startup.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("config: {0}")]
    Config(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// True when the error means the backing store could not be reached.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, TallyError::StoreUnavailable(_))
    }
}
