//! HTTP(S) URL syntax validation.

use url::Url;

/// Returns true if `candidate` is an absolute URL with an `http` or `https` scheme.
///
/// Parse failures (relative references, malformed input, the empty string)
/// yield `false`. The parser lower-cases the scheme, so `HTTP://…` is accepted
/// while look-alikes such as `httpx:` are not.
///
/// # Examples
///
/// ```
/// use url_shortener_client::utils::url_validator::is_valid_http_url;
///
/// assert!(is_valid_http_url("https://example.com"));
/// assert!(!is_valid_http_url("ftp://example.com"));
/// assert!(!is_valid_http_url("not a url"));
/// ```
pub fn is_valid_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
