use crate::error::Result;
use async_trait::async_trait;

/// A read-only view of a key-value store.
///
/// This trait provides only the read operation from [`Store`], allowing
/// services like the redirector to have read-only access.
#[async_trait]
pub trait ReadStore: Send + Sync + 'static {
    /// Retrieves the value stored under `key`.
    /// Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// A string-keyed store with plain writes and an atomic counter.
#[async_trait]
pub trait Store: ReadStore {
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Atomically increments the integer stored under `key` and returns the
    /// new value. A missing key counts as zero, so the first call returns 1.
    ///
    /// Concurrent callers never observe the same value.
    async fn incr(&self, key: &str) -> Result<u64>;
}
