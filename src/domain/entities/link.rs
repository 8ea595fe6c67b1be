//! Link entities exchanged with the shortening service.

/// A link the service has shortened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    /// Full display URL of the short link, e.g. `https://s.example.com/abcde`.
    pub shortened_url: String,
}

impl ShortenedLink {
    /// Creates a new ShortenedLink instance.
    pub fn new(shortened_url: String) -> Self {
        Self { shortened_url }
    }

    /// Returns the last path segment of the short URL, if there is one.
    pub fn path(&self) -> Option<&str> {
        self.shortened_url
            .trim_end_matches('/')
            .rsplit_once('/')
            .map(|(_, path)| path)
            .filter(|path| !path.is_empty())
    }
}

/// Builds the display URL of a short link: `{base_url}/{path}`.
///
/// A single trailing `/` on the base is dropped so the result never contains `//`
/// at the join.
pub fn short_link_url(base_url: &str, path: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base}/{path}")
}

/// Input data for creating a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    /// Requested path; the service picks one when `None`.
    pub custom_url_path: Option<String>,
}
