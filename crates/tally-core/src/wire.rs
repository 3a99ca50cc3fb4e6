//! JSON bodies of the REST surface.
//!
//! Optional fields are omitted (not null) when absent, so the serialized
//! shapes match the documented contract byte-for-byte. Constructors keep
//! the status strings and the degrade-to-zero policy in one place.

use serde::{Deserialize, Serialize};

/// Error string returned when the store cannot be reached.
pub const STORE_UNAVAILABLE_MSG: &str = "Redis unavailable";

/// `GET /health` body. Always paired with HTTP 200: a degraded store must
/// not make orchestration liveness probes restart the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub redis: String,
}

impl HealthBody {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
            redis: "connected".into(),
        }
    }

    pub fn degraded() -> Self {
        Self {
            status: "degraded".into(),
            redis: "disconnected".into(),
        }
    }
}

/// `GET /` body: static service metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub app: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// `GET|POST /api/counter` body.
///
/// `message` is present only on a successful increment; `error` only when
/// the store was unreachable (in which case `count` is the safe zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterBody {
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CounterBody {
    /// Successful read.
    pub fn read(count: u64) -> Self {
        Self {
            count,
            message: None,
            error: None,
        }
    }

    /// Successful increment.
    pub fn incremented(count: u64) -> Self {
        Self {
            count,
            message: Some("Counter incremented".into()),
            error: None,
        }
    }

    /// Store unreachable: zero value plus an explicit error field.
    pub fn unavailable() -> Self {
        Self {
            count: 0,
            message: None,
            error: Some(STORE_UNAVAILABLE_MSG.into()),
        }
    }
}

/// `GET /api/info` body: process identity and resolved store endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub hostname: String,
    pub redis_host: String,
    pub redis_port: u16,
}
