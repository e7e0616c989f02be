use async_trait::async_trait;
use shortify_core::error::Result;
use shortify_core::keys::COUNTER_KEY;
use shortify_core::{Slug, Store};
use std::sync::Arc;
use tracing::trace;

/// Trait for minting slugs.
///
/// Implementations must never hand out the same slug twice.
#[async_trait]
pub trait Generator: Send + Sync + 'static {
    /// Mints a slug no previous call has returned.
    async fn generate(&self) -> Result<Slug>;
}

/// A generator backed by an atomic counter in the store.
///
/// Each call increments the counter and base62-encodes the new value, so
/// uniqueness rests entirely on the store's increment being atomic. Any
/// number of service instances can share one counter.
#[derive(Debug)]
pub struct CounterGenerator<S> {
    store: Arc<S>,
    key: String,
}

impl<S> Clone for CounterGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<S: Store> CounterGenerator<S> {
    /// Creates a generator using the default counter key.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, COUNTER_KEY)
    }

    /// Creates a generator incrementing a custom counter key.
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl<S: Store> Generator for CounterGenerator<S> {
    async fn generate(&self) -> Result<Slug> {
        let value = self.store.incr(&self.key).await?;
        let slug = Slug::from_counter(value);
        trace!(counter = value, slug = %slug, "minted slug");
        Ok(slug)
    }
}
