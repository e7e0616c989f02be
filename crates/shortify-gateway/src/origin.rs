//! Fallback redirect target for unknown slugs.

use axum::http::header::HOST;
use axum::http::HeaderMap;
use url::Url;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const DEFAULT_SCHEME: &str = "http";

/// Computes the origin root (`scheme://host/`) a missed lookup redirects to.
///
/// A configured public base URL wins. Otherwise the `Host` header is used,
/// with the scheme taken from the first `X-Forwarded-Proto` entry. Without a
/// usable `Host` the root-relative `/` is returned.
pub fn origin_root(public_base_url: Option<&Url>, headers: &HeaderMap) -> String {
    if let Some(base) = public_base_url {
        return format!("{}/", base.origin().ascii_serialization());
    }

    let Some(host) = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
    else {
        return "/".to_string();
    };

    format!("{}://{}/", forwarded_scheme(headers), host)
}

fn forwarded_scheme(headers: &HeaderMap) -> &'static str {
    let proto = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);

    match proto {
        Some(p) if p.eq_ignore_ascii_case("https") => "https",
        _ => DEFAULT_SCHEME,
    }
}
