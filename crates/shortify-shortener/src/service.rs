use crate::error::ShortenerError;
use crate::generator::{CounterGenerator, Generator};
use crate::shortener::{ShortenedUrl, Shortener};
use crate::validation::validate_url;
use async_trait::async_trait;
use shortify_core::keys::slug_key;
use shortify_core::Store;
use std::sync::Arc;
use tracing::{debug, warn};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`Store`] and a [`Generator`] to handle:
/// - URL validation
/// - slug minting
/// - persisting the `slug -> URL` mapping
///
/// The generator is responsible for uniqueness; no collision check is
/// performed before writing.
#[derive(Debug)]
pub struct ShortenerService<S, G = CounterGenerator<S>> {
    store: Arc<S>,
    generator: G,
}

impl<S: Store> ShortenerService<S> {
    /// Creates a service minting slugs from the store's default counter.
    pub fn new(store: Arc<S>) -> Self {
        let generator = CounterGenerator::new(Arc::clone(&store));
        Self { store, generator }
    }
}

impl<S: Store, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with a custom generator.
    pub fn with_generator(store: Arc<S>, generator: G) -> Self {
        Self { store, generator }
    }
}

#[async_trait]
impl<S: Store, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortenedUrl, ShortenerError> {
        validate_url(original_url)?;

        let slug = self.generator.generate().await?;

        // A failed write leaves the minted slug unused for good.
        if let Err(e) = self.store.set(&slug_key(&slug), original_url).await {
            warn!(slug = %slug, error = %e, "failed to store mapping, slug is consumed");
            return Err(e.into());
        }

        debug!(slug = %slug, url = %original_url, "stored new mapping");
        Ok(ShortenedUrl {
            slug,
            original_url: original_url.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortify_core::error::Result;
    use shortify_core::{ReadStore, Slug, StorageError};
    use shortify_storage::InMemoryStore;

    fn test_service() -> (Arc<InMemoryStore>, ShortenerService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = ShortenerService::new(Arc::clone(&store));
        (store, service)
    }

    /// Counts increments like a real store but refuses every write.
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl ReadStore for ReadOnlyStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key).await
        }
    }

    #[async_trait]
    impl Store for ReadOnlyStore {
        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Rejected("READONLY".to_string()))
        }

        async fn incr(&self, key: &str) -> Result<u64> {
            self.inner.incr(key).await
        }
    }

    /// A store that is down entirely.
    struct DownStore;

    #[async_trait]
    impl ReadStore for DownStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl Store for DownStore {
        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        async fn incr(&self, _key: &str) -> Result<u64> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn shorten_stores_mapping() {
        let (store, service) = test_service();

        let shortened = service.shorten("https://example.com").await.unwrap();

        assert_eq!(shortened.slug.as_str(), "1");
        assert_eq!(shortened.original_url, "https://example.com");
        assert_eq!(
            store.get("shortify:slug:1").await.unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn shorten_same_url_twice_mints_distinct_slugs() {
        let (store, service) = test_service();

        let first = service.shorten("https://example.com").await.unwrap();
        let second = service.shorten("https://example.com").await.unwrap();

        assert_ne!(first.slug, second.slug);
        for shortened in [first, second] {
            assert_eq!(
                store.get(&slug_key(&shortened.slug)).await.unwrap().as_deref(),
                Some("https://example.com")
            );
        }
    }

    #[tokio::test]
    async fn shorten_keeps_url_verbatim() {
        let (_store, service) = test_service();
        let url = "HTTPS://Example.com/Path?b=2&a=1";

        let shortened = service.shorten(url).await.unwrap();

        assert_eq!(shortened.original_url, url);
    }

    #[tokio::test]
    async fn shorten_with_invalid_url_fails_without_touching_store() {
        let (store, service) = test_service();

        let err = service.shorten("not-a-valid-url").await.unwrap_err();

        assert!(matches!(err, ShortenerError::InvalidUrl(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn counter_gap_after_failed_write() {
        let store = Arc::new(ReadOnlyStore::default());
        let service = ShortenerService::new(Arc::clone(&store));

        let err = service.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, ShortenerError::Storage(StorageError::Rejected(_))));

        // The increment went through, so the next slug skips the lost one.
        assert_eq!(store.incr("shortify:counter").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn store_down_surfaces_storage_error() {
        let service = ShortenerService::new(Arc::new(DownStore));

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::Storage(StorageError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn shorten_with_custom_generator() {
        struct Fixed;

        #[async_trait]
        impl Generator for Fixed {
            async fn generate(&self) -> Result<Slug> {
                Ok(Slug::new("custom").unwrap())
            }
        }

        let store = Arc::new(InMemoryStore::new());
        let service = ShortenerService::with_generator(Arc::clone(&store), Fixed);

        let shortened = service.shorten("https://example.com").await.unwrap();

        assert_eq!(shortened.slug.as_str(), "custom");
        assert!(store.get("shortify:counter").await.unwrap().is_none());
    }
}
