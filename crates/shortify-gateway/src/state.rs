use std::sync::Arc;

use shortify_core::Slug;
use shortify_redirector::Redirector;
use shortify_shortener::Shortener;
use url::Url;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    public_base_url: Option<Url>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        public_base_url: Option<Url>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            public_base_url,
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn public_base_url(&self) -> Option<&Url> {
        self.public_base_url.as_ref()
    }

    /// The public link for `slug`, root-relative when no base URL is set.
    ///
    /// Only the origin of the base URL is used, since slugs are served at
    /// the root.
    pub fn short_url(&self, slug: &Slug) -> String {
        let base = self
            .public_base_url
            .as_ref()
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_default();
        slug.to_url(&base)
    }
}
