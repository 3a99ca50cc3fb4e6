use serde::Deserialize;
use tally_core::counter::DEFAULT_COUNTER_KEY;
use tally_core::error::{Result, TallyError};

use super::{STORE_HOST_VAR, STORE_PORT_VAR};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.store.validate()?;
        Ok(())
    }

    /// Apply `MY_REDIS_HOST` / `MY_REDIS_PORT` overrides from an arbitrary
    /// var iterator (the process env in production, a fixture in tests).
    ///
    /// Malformed values are ignored with a warning; the previous value
    /// stands. This is the fail-soft contract for platform-shaped garbage
    /// like `tcp://10.0.0.1:6379` landing where an integer is expected.
    pub fn apply_store_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                STORE_HOST_VAR => {
                    let v = value.trim();
                    if v.is_empty() {
                        tracing::warn!(var = STORE_HOST_VAR, "empty override ignored");
                    } else {
                        self.store.host = v.to_string();
                    }
                }
                STORE_PORT_VAR => match value.trim().parse::<u16>() {
                    Ok(0) => {
                        tracing::warn!(var = STORE_PORT_VAR, %value, "port 0 ignored");
                    }
                    Ok(p) => self.store.port = p,
                    Err(e) => {
                        tracing::warn!(
                            var = STORE_PORT_VAR,
                            %value,
                            error = %e,
                            "malformed port override ignored"
                        );
                    }
                },
                _ => {}
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_store_host")]
    pub host: String,

    #[serde(default = "default_store_port")]
    pub port: u16,

    #[serde(default = "default_counter_key")]
    pub key: String,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            host: default_store_host(),
            port: default_store_port(),
            key: default_counter_key(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(TallyError::Config("store.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(TallyError::Config("store.port must not be 0".into()));
        }
        if self.key.trim().is_empty() {
            return Err(TallyError::Config("store.key must not be empty".into()));
        }
        if !(100..=30000).contains(&self.connect_timeout_ms) {
            return Err(TallyError::Config(
                "store.connect_timeout_ms must be between 100 and 30000".into(),
            ));
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_store_host() -> String {
    "localhost".into()
}
fn default_store_port() -> u16 {
    6379
}
fn default_counter_key() -> String {
    DEFAULT_COUNTER_KEY.into()
}
fn default_connect_timeout_ms() -> u64 {
    2000
}
