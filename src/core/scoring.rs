use chrono::{DateTime, Utc};

use crate::core::location::LocationScorer;
use crate::core::skills::{level_compatibility, SkillIndex};
use crate::models::{ScoreBreakdown, ScoringConfig, SkillPriority, UserProfile};

/// Base points for each skill the candidate can teach the current user
const SKILL_MATCH_BASE: f64 = 5.0;
/// Base points for each skill the current user can teach the candidate
const MUTUAL_BENEFIT_BASE: f64 = 8.0;
/// Flat bonus for every mutual match beyond the first
const MULTI_MATCH_BONUS: f64 = 5.0;
/// Reputation points per rating star
const REPUTATION_PER_STAR: f64 = 2.0;
/// Activity points available on the day of last activity, minus one per day since
const ACTIVITY_WINDOW_DAYS: f64 = 10.0;

/// A bounded sub-score together with the skills that produced it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubScore {
    pub value: f64,
    pub matched: Vec<String>,
}

/// Output of the score aggregator for one (current, candidate) pair
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityScore {
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
}

/// Calculate the compatibility score for a candidate
///
/// Scoring formula (default weights):
/// score = (
///     skill_match * 0.40 +         # Candidate teaches what I want
///     mutual_benefit * 0.30 +      # I teach what the candidate wants
///     reputation_bonus * 0.15 +    # Candidate's average rating
///     activity_bonus * 0.10 +      # Recently active
///     location_bonus * 0.05        # Same city / region
/// )
///
/// Each sub-score is clamped to its cap before weighting and the total is
/// rounded to two decimals. `now` is the evaluation time for activity scoring.
pub fn calculate_match_score(
    current: &UserProfile,
    candidate: &UserProfile,
    config: &ScoringConfig,
    location_scorer: &dyn LocationScorer,
    now: DateTime<Utc>,
) -> CompatibilityScore {
    let caps = &config.caps;
    let weights = &config.weights;

    let skill_match = skill_match_score(current, candidate, caps.skill_match);
    let mutual_benefit = mutual_benefit_score(current, candidate, caps.mutual_benefit);

    let breakdown = ScoreBreakdown {
        skill_match: skill_match.value,
        mutual_benefit: mutual_benefit.value,
        reputation_bonus: reputation_score(candidate, caps.reputation),
        activity_bonus: activity_score(candidate, now, caps.activity),
        location_bonus: location_score(location_scorer, current, candidate, caps.location),
    };

    let total = breakdown.skill_match * weights.skill_match
        + breakdown.mutual_benefit * weights.mutual_benefit
        + breakdown.reputation_bonus * weights.reputation
        + breakdown.activity_bonus * weights.activity
        + breakdown.location_bonus * weights.location;

    CompatibilityScore {
        total_score: round_score(total.max(0.0)),
        breakdown,
        matched_skills: skill_match.matched,
    }
}

/// Skills the candidate offers that the current user wants.
///
/// Per match: 5 base + priority bonus (high 3, medium 2, low 1) + level
/// compatibility of the candidate's level against the current user's priority.
pub fn skill_match_score(current: &UserProfile, candidate: &UserProfile, cap: f64) -> SubScore {
    let offered = SkillIndex::build(&candidate.skills_offered);
    if offered.is_empty() {
        return SubScore::default();
    }

    let mut raw = 0.0;
    let mut matched = Vec::new();

    for (_, wanted) in SkillIndex::build(&current.skills_wanted).iter() {
        if let Some(teach) = offered.get(&wanted.name) {
            raw += SKILL_MATCH_BASE
                + skill_match_priority_bonus(wanted.priority)
                + level_compatibility(teach.level, wanted.priority);
            matched.push(teach.name.trim().to_string());
        }
    }

    SubScore {
        value: bounded(raw, cap),
        matched,
    }
}

/// Skills the current user offers that the candidate wants.
///
/// Per match: 8 base + priority bonus (high 4, medium 2, low 1) + level
/// compatibility, then 5 for every match beyond the first. Only the grand
/// total is capped.
pub fn mutual_benefit_score(current: &UserProfile, candidate: &UserProfile, cap: f64) -> SubScore {
    let offered = SkillIndex::build(&current.skills_offered);
    if offered.is_empty() {
        return SubScore::default();
    }

    let mut raw = 0.0;
    let mut matched = Vec::new();

    for (_, wanted) in SkillIndex::build(&candidate.skills_wanted).iter() {
        if let Some(teach) = offered.get(&wanted.name) {
            raw += MUTUAL_BENEFIT_BASE
                + mutual_benefit_priority_bonus(wanted.priority)
                + level_compatibility(teach.level, wanted.priority);
            matched.push(teach.name.trim().to_string());
        }
    }

    if matched.len() > 1 {
        raw += (matched.len() - 1) as f64 * MULTI_MATCH_BONUS;
    }

    SubScore {
        value: bounded(raw, cap),
        matched,
    }
}

/// Two points per rating star
#[inline]
pub fn reputation_score(candidate: &UserProfile, cap: f64) -> f64 {
    bounded(candidate.average_rating * REPUTATION_PER_STAR, cap)
}

/// Ten points for activity today, one fewer per whole day since.
///
/// Profiles that never recorded activity score zero. Timestamps ahead of
/// `now` count as active today.
#[inline]
pub fn activity_score(candidate: &UserProfile, now: DateTime<Utc>, cap: f64) -> f64 {
    let Some(last_active) = candidate.last_active_at else {
        return 0.0;
    };

    let days_inactive = (now - last_active).num_days().max(0) as f64;
    bounded(ACTIVITY_WINDOW_DAYS - days_inactive, cap)
}

#[inline]
pub fn location_score(
    scorer: &dyn LocationScorer,
    current: &UserProfile,
    candidate: &UserProfile,
    cap: f64,
) -> f64 {
    bounded(scorer.score(current.location_text(), candidate.location_text()), cap)
}

#[inline]
fn skill_match_priority_bonus(priority: SkillPriority) -> f64 {
    match priority {
        SkillPriority::High => 3.0,
        SkillPriority::Medium => 2.0,
        SkillPriority::Low => 1.0,
        SkillPriority::Unknown => 0.0,
    }
}

#[inline]
fn mutual_benefit_priority_bonus(priority: SkillPriority) -> f64 {
    match priority {
        SkillPriority::High => 4.0,
        SkillPriority::Medium => 2.0,
        SkillPriority::Low => 1.0,
        SkillPriority::Unknown => 0.0,
    }
}

/// Clamp a raw sub-score into `0..=cap`; non-finite input scores zero.
#[inline]
fn bounded(value: f64, cap: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, cap.max(0.0))
}

/// Absorbs binary error so a decimal `x.xx5` total rounds up
const ROUNDING_EPSILON: f64 = 1e-9;

/// Round half-up to two decimal places
#[inline]
pub fn round_score(value: f64) -> f64 {
    (value * 100.0 + ROUNDING_EPSILON).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::TextLocationScorer;
    use crate::models::{Availability, OfferedSkill, SkillLevel, WantedSkill};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn create_test_profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: format!("User {}", id),
            skills_offered: vec![],
            skills_wanted: vec![],
            average_rating: 0.0,
            last_active_at: None,
            location: None,
            availability: Availability::default(),
            is_active: true,
        }
    }

    fn offer(name: &str, level: &str) -> OfferedSkill {
        OfferedSkill {
            name: name.to_string(),
            level: SkillLevel::from(level),
            description: None,
        }
    }

    fn want(name: &str, priority: &str) -> WantedSkill {
        WantedSkill {
            name: name.to_string(),
            priority: SkillPriority::from(priority),
            description: None,
        }
    }

    #[test]
    fn test_skill_match_single_expert_high_priority() {
        let mut current = create_test_profile("me");
        current.skills_wanted = vec![want("Python", "high")];
        let mut candidate = create_test_profile("them");
        candidate.skills_offered = vec![offer("python", "expert")];

        let score = skill_match_score(&current, &candidate, 20.0);

        assert_eq!(score.value, 14.0);
        assert_eq!(score.matched, vec!["python"]);
    }

    #[test]
    fn test_skill_match_is_capped() {
        let mut current = create_test_profile("me");
        current.skills_wanted = vec![want("Python", "high"), want("Rust", "high")];
        let mut candidate = create_test_profile("them");
        candidate.skills_offered = vec![offer("Python", "expert"), offer("Rust", "expert")];

        let score = skill_match_score(&current, &candidate, 20.0);

        assert_eq!(score.value, 20.0);
        assert_eq!(score.matched.len(), 2);
    }

    #[test]
    fn test_mutual_benefit_single_match() {
        let mut current = create_test_profile("me");
        current.skills_offered = vec![offer("JavaScript", "advanced")];
        let mut candidate = create_test_profile("them");
        candidate.skills_wanted = vec![want("javascript", "medium")];

        let score = mutual_benefit_score(&current, &candidate, 25.0);

        assert_eq!(score.value, 13.0);
    }

    #[test]
    fn test_mutual_benefit_multi_match_bonus() {
        let mut current = create_test_profile("me");
        current.skills_offered = vec![offer("Guitar", "beginner"), offer("Chess", "beginner")];
        let mut candidate = create_test_profile("them");
        candidate.skills_wanted = vec![want("Guitar", "low"), want("Chess", "low")];

        // (8 + 1 + 0.5) * 2 + 5
        let score = mutual_benefit_score(&current, &candidate, 25.0);

        assert_eq!(score.value, 24.0);
    }

    #[test]
    fn test_mutual_benefit_is_capped() {
        let mut current = create_test_profile("me");
        current.skills_offered = vec![offer("Guitar", "expert"), offer("Chess", "expert")];
        let mut candidate = create_test_profile("them");
        candidate.skills_wanted = vec![want("Guitar", "high"), want("Chess", "high")];

        let score = mutual_benefit_score(&current, &candidate, 25.0);

        assert_eq!(score.value, 25.0);
    }

    #[test]
    fn test_unknown_priority_gets_no_bonus() {
        let mut current = create_test_profile("me");
        current.skills_wanted = vec![want("Python", "someday")];
        let mut candidate = create_test_profile("them");
        candidate.skills_offered = vec![offer("Python", "wizard")];

        // 5 base + 0 bonus + 1 * 1
        let score = skill_match_score(&current, &candidate, 20.0);

        assert_eq!(score.value, 6.0);
    }

    #[test]
    fn test_empty_skill_lists_score_zero() {
        let current = create_test_profile("me");
        let candidate = create_test_profile("them");

        assert_eq!(skill_match_score(&current, &candidate, 20.0).value, 0.0);
        assert_eq!(mutual_benefit_score(&current, &candidate, 25.0).value, 0.0);
    }

    #[test]
    fn test_reputation_score() {
        let mut candidate = create_test_profile("them");
        assert_eq!(reputation_score(&candidate, 10.0), 0.0);

        candidate.average_rating = 3.5;
        assert_eq!(reputation_score(&candidate, 10.0), 7.0);

        candidate.average_rating = 5.0;
        assert_eq!(reputation_score(&candidate, 10.0), 10.0);

        candidate.average_rating = f64::NAN;
        assert_eq!(reputation_score(&candidate, 10.0), 0.0);
    }

    #[test]
    fn test_activity_score() {
        let now = fixed_now();
        let mut candidate = create_test_profile("them");
        assert_eq!(activity_score(&candidate, now, 10.0), 0.0);

        candidate.last_active_at = Some(now);
        assert_eq!(activity_score(&candidate, now, 10.0), 10.0);

        candidate.last_active_at = Some(now - Duration::hours(36));
        assert_eq!(activity_score(&candidate, now, 10.0), 9.0);

        candidate.last_active_at = Some(now - Duration::days(15));
        assert_eq!(activity_score(&candidate, now, 10.0), 0.0);

        candidate.last_active_at = Some(now + Duration::days(3));
        assert_eq!(activity_score(&candidate, now, 10.0), 10.0);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(11.499_999_999), 11.5);
        assert_eq!(round_score(3.125), 3.13);
        assert_eq!(round_score(0.0), 0.0);
        assert_eq!(round_score(0.225), 0.23);
        assert_eq!(round_score(0.224), 0.22);
    }

    #[test]
    fn test_rating_totals_round_half_up() {
        let now = fixed_now();
        let current = create_test_profile("me");
        let cases = [(0.75, 0.23), (2.15, 0.65), (3.35, 1.01), (3.45, 1.04), (4.05, 1.22), (4.25, 1.28)];

        for (rating, expected) in cases {
            let mut candidate = create_test_profile("them");
            candidate.average_rating = rating;

            let score = calculate_match_score(
                &current,
                &candidate,
                &ScoringConfig::default(),
                &TextLocationScorer,
                now,
            );

            assert_eq!(score.total_score, expected, "rating {}", rating);
        }
    }

    #[test]
    fn test_calculate_match_score_combines_all_factors() {
        let now = fixed_now();
        let mut current = create_test_profile("me");
        current.skills_wanted = vec![want("Python", "high")];
        current.skills_offered = vec![offer("JavaScript", "advanced")];
        current.location = Some("New York, NY".to_string());

        let mut candidate = create_test_profile("them");
        candidate.skills_offered = vec![offer("Python", "expert")];
        candidate.skills_wanted = vec![want("JavaScript", "medium")];
        candidate.average_rating = 5.0;
        candidate.last_active_at = Some(now - Duration::days(15));
        candidate.location = Some("New York, NY".to_string());

        let score = calculate_match_score(
            &current,
            &candidate,
            &ScoringConfig::default(),
            &TextLocationScorer,
            now,
        );

        assert_eq!(
            score.breakdown,
            ScoreBreakdown {
                skill_match: 14.0,
                mutual_benefit: 13.0,
                reputation_bonus: 10.0,
                activity_bonus: 0.0,
                location_bonus: 10.0,
            }
        );
        assert!((score.total_score - 11.5).abs() < 1e-9);
        assert_eq!(score.matched_skills, vec!["Python"]);
    }

    #[test]
    fn test_score_is_direction_sensitive() {
        let now = fixed_now();
        let mut a = create_test_profile("a");
        a.skills_wanted = vec![want("Python", "high")];
        let mut b = create_test_profile("b");
        b.skills_offered = vec![offer("Python", "expert")];

        let config = ScoringConfig::default();
        let ab = calculate_match_score(&a, &b, &config, &TextLocationScorer, now);
        let ba = calculate_match_score(&b, &a, &config, &TextLocationScorer, now);

        assert_eq!(ab.breakdown.skill_match, 14.0);
        assert_eq!(ab.breakdown.mutual_benefit, 0.0);
        assert_eq!(ba.breakdown.skill_match, 0.0);
        assert_eq!(ba.breakdown.mutual_benefit, 18.0);
        assert_ne!(ab.total_score, ba.total_score);
    }
}
