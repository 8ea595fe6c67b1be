//! Link statistics service.

use std::sync::Arc;

use crate::domain::entities::{LinkStatistics, short_link_url};
use crate::domain::form::validate_path;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, NOT_FOUND};

/// Service implementing the "fetch statistics" flow.
pub struct StatsService<L: LinkRepository> {
    repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> StatsService<L> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Retrieves usage statistics for a short path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPath`] if the path fails local validation
    /// (no request is made).
    /// Returns [`AppError::NotFound`] if the service does not know the path.
    /// Returns [`AppError::Unhandled`] for every other remote failure.
    pub async fn get_statistics(&self, path: &str) -> Result<LinkStatistics, AppError> {
        validate_path(path)?;

        tracing::debug!(%path, "Fetching statistics");

        match self.repository.find_statistics(path).await {
            Ok(stats) => {
                tracing::info!(%path, visit_count = stats.visit_count, "Statistics fetched");
                Ok(stats)
            }
            Err(e) if e.has_message(NOT_FOUND) => {
                tracing::warn!(%path, "Short path not found");
                Err(AppError::NotFound {
                    path: path.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "Statistics request failed");
                Err(AppError::Unhandled(e))
            }
        }
    }

    /// Returns the display URL of `path` under the configured base URL.
    pub fn short_url(&self, path: &str) -> String {
        short_link_url(&self.base_url, path)
    }
}
