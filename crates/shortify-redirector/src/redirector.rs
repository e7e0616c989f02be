use async_trait::async_trait;
use shortify_core::Slug;

/// Outcome of resolving a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The slug maps to this URL.
    Found(String),
    /// The slug is unknown, or the store could not answer.
    Missing,
}

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a slug to the URL it points at.
    ///
    /// Infallible by contract: store errors are reported as
    /// [`Resolution::Missing`].
    async fn resolve(&self, slug: &Slug) -> Resolution;
}
