//! Repository trait for the remote short-link store.

use crate::domain::entities::{LinkStatistics, NewLink, ShortenedLink};
use crate::error::ApiError;
use async_trait::async_trait;

/// Interface to the service that stores short links.
///
/// Implementations report failures as raw [`ApiError`]s; classifying them
/// into user-facing errors is the job of the application services.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkRepository`] - JSON-over-HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Asks the service to shorten a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with message `id-reserved` if the
    /// requested custom path is already taken, and other [`ApiError`]s on
    /// transport or decoding failures.
    async fn create(&self, new_link: NewLink) -> Result<ShortenedLink, ApiError>;

    /// Fetches usage statistics for a short path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with message `not-found` if the path
    /// does not exist.
    async fn find_statistics(&self, path: &str) -> Result<LinkStatistics, ApiError>;
}
