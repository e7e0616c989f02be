use std::sync::Arc;

use crate::redirector::{Redirector, Resolution};
use async_trait::async_trait;
use shortify_core::keys::slug_key;
use shortify_core::{ReadStore, Slug};
use tracing::{debug, trace, warn};

/// Service for handling URL redirects.
///
/// Uses a read-only store to fetch the URL behind a slug. Each resolution is
/// a single store read with no retry.
#[derive(Debug)]
pub struct RedirectorService<S> {
    store: Arc<S>,
}

impl<S> Clone for RedirectorService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ReadStore> RedirectorService<S> {
    /// Creates a new RedirectorService reading from the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ReadStore> Redirector for RedirectorService<S> {
    async fn resolve(&self, slug: &Slug) -> Resolution {
        trace!(slug = %slug, "resolving slug");

        match self.store.get(&slug_key(slug)).await {
            Ok(Some(url)) if !url.is_empty() => {
                debug!(slug = %slug, url = %url, "resolved slug");
                Resolution::Found(url)
            }
            Ok(Some(_)) => {
                debug!(slug = %slug, "slug maps to an empty value, treating as missing");
                Resolution::Missing
            }
            Ok(None) => {
                trace!(slug = %slug, "slug not found");
                Resolution::Missing
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "store lookup failed, treating slug as missing");
                Resolution::Missing
            }
        }
    }
}
