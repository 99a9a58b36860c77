// Core algorithm exports
pub mod error;
pub mod explain;
pub mod filters;
pub mod location;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use error::MatchError;
pub use explain::explain_skill_match;
pub use filters::{apply_candidate_filters, matches_candidate_filters};
pub use location::{LocationScorer, TextLocationScorer};
pub use matcher::Matcher;
pub use scoring::{calculate_match_score, CompatibilityScore, SubScore};
pub use skills::{level_compatibility, SkillIndex};
