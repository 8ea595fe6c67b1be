//! DTOs for the statistics endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::LinkStatistics;

/// `data` payload of a successful statistics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub created_at: String,
    pub is_custom: bool,
    pub original_url: String,
    pub short_url: String,
    pub visit_count: u64,
}

impl From<StatisticsData> for LinkStatistics {
    fn from(data: StatisticsData) -> Self {
        LinkStatistics {
            created_at: data.created_at,
            is_custom: data.is_custom,
            original_url: data.original_url,
            short_url: data.short_url,
            visit_count: data.visit_count,
        }
    }
}

impl From<LinkStatistics> for StatisticsData {
    fn from(stats: LinkStatistics) -> Self {
        StatisticsData {
            created_at: stats.created_at,
            is_custom: stats.is_custom,
            original_url: stats.original_url,
            short_url: stats.short_url,
            visit_count: stats.visit_count,
        }
    }
}
