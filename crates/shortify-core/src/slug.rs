use crate::base62;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated slug identifying a shortened URL.
///
/// Slugs are non-empty and contain only ASCII letters and digits. There is
/// no length bound: generated slugs grow with the counter they encode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Creates a new `Slug` after validating the input.
    pub fn new(slug: impl Into<String>) -> Result<Self, CoreError> {
        let slug = slug.into();
        Self::validate(&slug)?;
        Ok(Self(slug))
    }

    /// Creates the slug for a counter value by base62-encoding it.
    ///
    /// Distinct counter values always yield distinct slugs.
    pub fn from_counter(value: u64) -> Self {
        Self(base62::encode(value))
    }

    /// Generates the full shortened URL based on the provided base URL.
    ///
    /// An empty base yields a root-relative path such as `/g8`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(slug: &str) -> Result<(), CoreError> {
        if slug.is_empty() {
            return Err(CoreError::InvalidSlug("slug cannot be empty".to_string()));
        }

        if !slug.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidSlug(format!(
                "must contain only ASCII letters and digits: '{}'",
                slug
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for Slug {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        assert!(Slug::new("g8").is_ok());
        assert!(Slug::new("a").is_ok());
        assert!(Slug::new("AbC123xyz").is_ok());
        assert!(Slug::new("z".repeat(128)).is_ok());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(Slug::new(""), Err(CoreError::InvalidSlug(_))));
    }

    #[test]
    fn invalid_characters() {
        assert!(Slug::new("a/b").is_err());
        assert!(Slug::new("a b").is_err());
        assert!(Slug::new("abc-def").is_err());
        assert!(Slug::new("abc_def").is_err());
        assert!(Slug::new("ab.c").is_err());
        assert!(Slug::new("é").is_err());
    }

    #[test]
    fn from_counter_encodes_base62() {
        assert_eq!(Slug::from_counter(1).as_str(), "1");
        assert_eq!(Slug::from_counter(1000).as_str(), "g8");
    }

    #[test]
    fn generated_slugs_pass_validation() {
        for value in [0, 1, 61, 62, 1000, u64::MAX] {
            let slug = Slug::from_counter(value);
            assert!(Slug::new(slug.as_str()).is_ok());
        }
    }

    #[test]
    fn to_url() {
        let slug = Slug::new("g8").unwrap();
        assert_eq!(slug.to_url("https://short.ify"), "https://short.ify/g8");
        assert_eq!(slug.to_url("https://short.ify/"), "https://short.ify/g8");
        assert_eq!(slug.to_url(""), "/g8");
    }

    #[test]
    fn deserialize_validates() {
        let slug: Slug = serde_json::from_str("\"g8\"").unwrap();
        assert_eq!(slug.as_str(), "g8");
        assert!(serde_json::from_str::<Slug>("\"a/b\"").is_err());
    }
}
