//! Key layout of the backing store.

use crate::slug::Slug;

/// Prefix shared by every key the service writes.
pub const NAMESPACE: &str = "shortify";

/// Key of the global counter slugs are minted from.
pub const COUNTER_KEY: &str = "shortify:counter";

/// Returns the key holding the original URL for `slug`.
pub fn slug_key(slug: &Slug) -> String {
    format!("{NAMESPACE}:slug:{}", slug.as_str())
}
