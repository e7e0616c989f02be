use async_trait::async_trait;
use dashmap::DashMap;
use shortify_core::error::{Result, StorageError};
use shortify_core::store::{ReadStore, Store};

/// In-memory implementation of the [`Store`] trait using DashMap.
///
/// Counters are stored as decimal strings next to ordinary values, like
/// Redis does. An increment holds the shard lock of its key for the whole
/// read-modify-write, which makes it atomic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held, counters included.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<u64> {
        let mut entry = self
            .storage
            .entry(key.to_owned())
            .or_insert_with(|| "0".to_owned());

        let current = entry.parse::<u64>().map_err(|e| {
            StorageError::InvalidData(format!("value at '{key}' is not a counter: {e}"))
        })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StorageError::Operation(format!("counter at '{key}' overflowed")))?;

        *entry = next.to_string();
        Ok(next)
    }
}
