//! HTTP implementation of the link repository.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::dto::shorten::{CreateShortUrlRequest, ShortenedUrlData};
use crate::api::dto::stats::StatisticsData;
use crate::api::dto::{DataEnvelope, ErrorBody};
use crate::domain::entities::{LinkStatistics, NewLink, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{ApiError, AppError};

/// Path segments of the create endpoint, relative to the API base URL.
const CREATE_SEGMENTS: &[&str] = &["api", "urls"];

/// Trailing segment of the statistics endpoint (`api/urls/{path}/statistics`).
const STATISTICS_SEGMENT: &str = "statistics";

/// Link repository backed by the shortening service's JSON API.
///
/// Issues exactly one request per call; there is no retry on failure.
#[derive(Debug, Clone)]
pub struct HttpLinkRepository {
    base_url: Url,
    client: Client,
}

impl HttpLinkRepository {
    /// Creates a repository for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the base URL cannot carry a
    /// path or the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "API base URL cannot be a base: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Builds an endpoint URL by appending percent-encoded segments to the base.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a request and unwraps the `data` envelope of a success response.
    ///
    /// Non-success responses become [`ApiError::Rejected`] carrying
    /// `error.message`, or the raw body when it is not an error body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            let envelope: DataEnvelope<T> =
                serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
            return Ok(envelope.data);
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|error_body| error_body.error.message)
            .unwrap_or(body);

        tracing::debug!(status = status.as_u16(), %message, "API rejected request");

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl LinkRepository for HttpLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<ShortenedLink, ApiError> {
        let url = self.endpoint(CREATE_SEGMENTS);
        tracing::debug!(%url, "POST create short URL");

        let body = CreateShortUrlRequest::from(new_link);
        let data: ShortenedUrlData = self.send(self.client.post(url).json(&body)).await?;

        Ok(data.into())
    }

    async fn find_statistics(&self, path: &str) -> Result<LinkStatistics, ApiError> {
        let mut segments: Vec<&str> = CREATE_SEGMENTS.to_vec();
        segments.extend([path, STATISTICS_SEGMENT]);

        let url = self.endpoint(&segments);
        tracing::debug!(%url, "GET short URL statistics");

        let data: StatisticsData = self.send(self.client.get(url)).await?;

        Ok(data.into())
    }
}
