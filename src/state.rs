//! Shared service wiring for the client.

use std::sync::Arc;

use url::Url;

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::http::HttpLinkRepository;

/// Services backed by the remote shortening API.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<HttpLinkRepository>>,
    pub stats_service: Arc<StatsService<HttpLinkRepository>>,
}

impl AppState {
    /// Wires the services against the API named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid API_BASE_URL '{}': {e}", config.api_base_url))
        })?;

        let repository = Arc::new(HttpLinkRepository::new(base_url, config.http_timeout())?);

        Ok(Self {
            link_service: Arc::new(LinkService::new(repository.clone(), &config.api_base_url)),
            stats_service: Arc::new(StatsService::new(repository, &config.api_base_url)),
        })
    }
}
