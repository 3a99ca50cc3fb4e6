//! Redis-backed store client.
//!
//! Holds a `redis::Client` (no I/O at construction) and obtains a
//! multiplexed async connection per operation, bounded by the configured
//! timeout. There is no retry and no circuit breaker: a failed round trip
//! maps straight to `StoreUnavailable` and the caller degrades. The store
//! is assumed to recover on its own and clients re-poll.

use std::time::Duration;

use redis::aio::MultiplexedConnection;
use redis::Client;

use tally_core::counter::{clamp_count, parse_count};
use tally_core::error::{Result, TallyError};

use crate::config::StoreSection;
use crate::store::Store;

pub struct RedisStore {
    client: Client,
    key: String,
    timeout: Duration,
}

impl RedisStore {
    pub fn connect(store: &StoreSection) -> Result<Self> {
        let url = format!("redis://{}:{}/", store.host, store.port);
        let client = Client::open(url)
            .map_err(|e| TallyError::Config(format!("invalid store endpoint: {e}")))?;

        Ok(Self {
            client,
            key: store.key.clone(),
            timeout: Duration::from_millis(store.connect_timeout_ms),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection_with_timeouts(self.timeout, self.timeout)
            .await
            .map_err(store_err)
    }
}

#[async_trait::async_trait]
impl Store for RedisStore {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn fetch(&self) -> Result<u64> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = redis::cmd("GET")
            .arg(&self.key)
            .query_async(&mut conn)
            .await
            .map_err(store_err)?;
        Ok(parse_count(raw.as_deref()))
    }

    async fn increment(&self) -> Result<u64> {
        let mut conn = self.connection().await?;
        let n: i64 = redis::cmd("INCR")
            .arg(&self.key)
            .query_async(&mut conn)
            .await
            .map_err(store_err)?;
        Ok(clamp_count(n))
    }
}

fn store_err(e: redis::RedisError) -> TallyError {
    TallyError::StoreUnavailable(e.to_string())
}
