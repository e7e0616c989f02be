use crate::error::ShortenerError;
use async_trait::async_trait;
use shortify_core::Slug;

type Result<T> = std::result::Result<T, ShortenerError>;

/// A freshly created mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    /// The minted slug.
    pub slug: Slug,
    /// The URL the slug now points at, exactly as submitted.
    pub original_url: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Mints a new slug for `original_url` and stores the mapping.
    ///
    /// Every call mints a new slug, even for a URL that was shortened before.
    async fn shorten(&self, original_url: &str) -> Result<ShortenedUrl>;
}
