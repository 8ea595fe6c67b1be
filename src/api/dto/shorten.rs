//! DTOs for the create-short-URL endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewLink, ShortenedLink};

/// Request body of `POST /api/urls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    pub original_url: String,

    /// Omitted from the body when the service should pick the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url_path: Option<String>,
}

impl From<NewLink> for CreateShortUrlRequest {
    fn from(new_link: NewLink) -> Self {
        Self {
            original_url: new_link.original_url,
            custom_url_path: new_link.custom_url_path,
        }
    }
}

/// `data` payload of a successful create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrlData {
    pub shortened_url: String,
}

impl From<ShortenedUrlData> for ShortenedLink {
    fn from(data: ShortenedUrlData) -> Self {
        ShortenedLink::new(data.shortened_url)
    }
}
