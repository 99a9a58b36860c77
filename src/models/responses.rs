use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, SkillMatchTrace};

/// Response for the rank matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesResponse {
    pub matches: Vec<MatchResult>,
    pub pagination: Pagination,
}

/// Page metadata attached to a ranked slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit as usize) as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
            has_more: page < total_pages,
        }
    }

    /// Index range of this page within the full ranked list.
    pub fn bounds(&self) -> std::ops::Range<usize> {
        let start = (self.page.saturating_sub(1) as usize)
            .saturating_mul(self.limit as usize)
            .min(self.total);
        let end = start.saturating_add(self.limit as usize).min(self.total);
        start..end
    }
}

/// Response for the match detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub result: MatchResult,
    pub trace: SkillMatchTrace,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
