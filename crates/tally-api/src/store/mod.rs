//! Counter store access.
//!
//! The trait is the seam between the REST handlers and the backing store:
//! production wires in [`RedisStore`], tests wire in in-memory fakes. All
//! failures surface as `TallyError::StoreUnavailable`; handlers decide how
//! to degrade.

pub mod redis;

use async_trait::async_trait;
use tally_core::error::Result;

pub use self::redis::RedisStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// One lightweight round trip to probe reachability.
    async fn ping(&self) -> Result<()>;

    /// Current counter value; a missing key reads as zero.
    async fn fetch(&self) -> Result<u64>;

    /// Atomically add one and return the new value.
    async fn increment(&self) -> Result<u64>;
}
