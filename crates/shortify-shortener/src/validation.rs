//! Validation of submitted URLs.

use crate::error::ShortenerError;
use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2083;

/// Checks that `raw` is an absolute `http`/`https` URL with a host.
///
/// The URL is stored verbatim and later sent back as a `Location` header,
/// so whitespace and control characters are refused even where the URL
/// parser would strip them.
pub fn validate_url(raw: &str) -> Result<(), ShortenerError> {
    if raw.is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    let length = raw.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must be at most {MAX_URL_LENGTH} characters, got {length}"
        )));
    }

    if raw
        .chars()
        .any(|c| c.is_ascii_control() || c.is_ascii_whitespace())
    {
        return Err(ShortenerError::InvalidUrl(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| ShortenerError::InvalidUrl(format!("{e}: {raw}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {scheme}"
            )))
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {raw}"
        )));
    }

    Ok(())
}
