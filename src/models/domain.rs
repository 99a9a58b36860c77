use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Proficiency of an offered skill.
///
/// Parsed case-insensitively; anything unrecognized lands in `Unknown` and
/// scores with the neutral defaults instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[default]
    Unknown,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
            SkillLevel::Unknown => "unknown",
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Unknown,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        SkillLevel::from(value.as_str())
    }
}

impl From<SkillLevel> for String {
    fn from(value: SkillLevel) -> Self {
        value.as_str().to_string()
    }
}

/// How badly a user wants to learn a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillPriority {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl SkillPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillPriority::Low => "low",
            SkillPriority::Medium => "medium",
            SkillPriority::High => "high",
            SkillPriority::Unknown => "unknown",
        }
    }
}

impl From<&str> for SkillPriority {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => SkillPriority::Low,
            "medium" => SkillPriority::Medium,
            "high" => SkillPriority::High,
            _ => SkillPriority::Unknown,
        }
    }
}

impl From<String> for SkillPriority {
    fn from(value: String) -> Self {
        SkillPriority::from(value.as_str())
    }
}

impl From<SkillPriority> for String {
    fn from(value: SkillPriority) -> Self {
        value.as_str().to_string()
    }
}

/// A skill the user can teach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferedSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub description: Option<String>,
}

/// A skill the user wants to learn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WantedSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: SkillPriority,
    #[serde(default)]
    pub description: Option<String>,
}

/// Weekly availability flags advertised on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub weekdays: bool,
    pub weekends: bool,
    pub evenings: bool,
    pub mornings: bool,
}

/// Availability slot a caller can filter candidates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    Weekdays,
    Weekends,
    Evenings,
    Mornings,
}

impl AvailabilityFilter {
    /// Resolve the filter against a profile's availability flags.
    pub fn is_satisfied_by(&self, availability: &Availability) -> bool {
        match self {
            AvailabilityFilter::Weekdays => availability.weekdays,
            AvailabilityFilter::Weekends => availability.weekends,
            AvailabilityFilter::Evenings => availability.evenings,
            AvailabilityFilter::Mornings => availability.mornings,
        }
    }
}

/// User profile as materialized by the platform, read-only to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(min = 1))]
    #[serde(alias = "userId")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills_offered: Vec<OfferedSkill>,
    #[serde(default)]
    pub skills_wanted: Vec<WantedSkill>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl UserProfile {
    /// Location text with surrounding whitespace removed; blank counts as missing.
    pub fn location_text(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }
}

fn default_true() -> bool { true }

/// The five unweighted sub-scores behind a compatibility score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub mutual_benefit: f64,
    pub reputation_bonus: f64,
    pub activity_bonus: f64,
    pub location_bonus: f64,
}

/// Scored candidate produced by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate: UserProfile,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    /// Skills the candidate can teach that the current user wants.
    pub matched_skills: Vec<String>,
}

/// One skill one party can teach and the other wants to learn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingMatch {
    pub skill: String,
    pub teacher_level: SkillLevel,
    pub learner_priority: SkillPriority,
}

/// A skill both parties already teach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSkill {
    pub skill: String,
    pub current_user_level: SkillLevel,
    pub candidate_level: SkillLevel,
}

/// Explanation of what each side of a match brings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchTrace {
    /// Current user teaches, candidate wants.
    pub you_can_teach: Vec<TeachingMatch>,
    /// Candidate teaches, current user wants.
    pub they_can_teach: Vec<TeachingMatch>,
    pub both_teach: Vec<SharedSkill>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub mutual_benefit: f64,
    pub reputation: f64,
    pub activity: f64,
    pub location: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill_match + self.mutual_benefit + self.reputation + self.activity + self.location
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.40,
            mutual_benefit: 0.30,
            reputation: 0.15,
            activity: 0.10,
            location: 0.05,
        }
    }
}

/// Upper bound of each sub-score before weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCaps {
    pub skill_match: f64,
    pub mutual_benefit: f64,
    pub reputation: f64,
    pub activity: f64,
    pub location: f64,
}

impl Default for ScoreCaps {
    fn default() -> Self {
        Self {
            skill_match: 20.0,
            mutual_benefit: 25.0,
            reputation: 10.0,
            activity: 10.0,
            location: 10.0,
        }
    }
}

/// Weights and caps used by the score aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub caps: ScoreCaps,
}

impl ScoringConfig {
    /// Highest total score reachable under these weights and caps.
    pub fn max_total(&self) -> f64 {
        self.caps.skill_match * self.weights.skill_match
            + self.caps.mutual_benefit * self.weights.mutual_benefit
            + self.caps.reputation * self.weights.reputation
            + self.caps.activity * self.weights.activity
            + self.caps.location * self.weights.location
    }
}

/// Caller-side pre-filters applied before candidates reach the ranker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilters {
    pub exclude_user_ids: Vec<String>,
    pub availability: Option<AvailabilityFilter>,
    pub location: Option<String>,
    pub skill: Option<String>,
}
