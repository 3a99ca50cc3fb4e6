//! Service config loader (strict parsing, env overrides).
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults (service must run locally with zero config),
//! 2. an optional YAML file (`TALLY_CONFIG`, default `tally.yaml`),
//! 3. `MY_REDIS_HOST` / `MY_REDIS_PORT` environment overrides.
//!
//! The `MY_` prefix is deliberate: a Kubernetes service named after the
//! store auto-injects `<NAME>_PORT=tcp://host:port`, which breaks naive
//! integer parsing. Overrides are parsed defensively; a malformed value is
//! logged and ignored rather than crashing the process.

pub mod schema;

use std::fs;
use std::path::Path;

use tally_core::error::{Result, TallyError};

pub use schema::{ApiConfig, ServerSection, StoreSection};

/// Env var naming the config file path.
pub const CONFIG_PATH_VAR: &str = "TALLY_CONFIG";
/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

/// Store host override.
pub const STORE_HOST_VAR: &str = "MY_REDIS_HOST";
/// Store port override.
pub const STORE_PORT_VAR: &str = "MY_REDIS_PORT";

pub fn load_from_file(path: &str) -> Result<ApiConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    let cfg: ApiConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the file named by `path` when it exists, defaults otherwise.
/// A present-but-broken file is a hard startup error.
pub fn load_or_default(path: &str) -> Result<ApiConfig> {
    if Path::new(path).exists() {
        tracing::info!(%path, "loading config file");
        load_from_file(path)
    } else {
        tracing::info!(%path, "config file not found, using defaults");
        Ok(ApiConfig::default())
    }
}

/// Full startup resolution: file (or defaults) plus process env overrides.
pub fn load() -> Result<ApiConfig> {
    let path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut cfg = load_or_default(&path)?;
    cfg.apply_store_env(std::env::vars());
    cfg.validate()?;
    Ok(cfg)
}
