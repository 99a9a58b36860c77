use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateFilters, UserProfile};

/// Request to rank a candidate set for the current user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankMatchesRequest {
    #[serde(alias = "current_user")]
    pub current_user: Option<UserProfile>,
    #[serde(default)]
    pub candidates: Vec<UserProfile>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size; falls back to the configured default when absent.
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub filters: CandidateFilters,
    /// Evaluation time for activity scoring; defaults to the server clock.
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
}

fn default_page() -> u32 {
    1
}

/// Request to score a single candidate with a full explanation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailRequest {
    #[serde(alias = "current_user")]
    pub current_user: Option<UserProfile>,
    pub candidate: Option<UserProfile>,
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
}
