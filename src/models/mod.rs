// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, AvailabilityFilter, CandidateFilters, MatchResult, OfferedSkill, ScoreBreakdown,
    ScoreCaps, ScoringConfig, ScoringWeights, SharedSkill, SkillLevel, SkillMatchTrace,
    SkillPriority, TeachingMatch, UserProfile, WantedSkill,
};
pub use requests::{MatchDetailRequest, RankMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchDetailResponse, Pagination, RankMatchesResponse};
