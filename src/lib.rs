//! SkillSwap Algo - compatibility scoring and matching for the SkillSwap platform
//!
//! This library scores how well two users of a skill-exchange platform fit
//! each other (what each can teach the other, reputation, activity and
//! location) and ranks candidate sets for presentation.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{explain_skill_match, calculate_match_score, Matcher, MatchError};
pub use crate::models::{UserProfile, MatchResult, ScoreBreakdown, ScoringConfig, SkillMatchTrace, RankMatchesRequest, RankMatchesResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Default weighting tops out at 18.5
        let matcher = Matcher::default();
        assert!((matcher.config().max_total() - 18.5).abs() < 1e-9);
    }
}
