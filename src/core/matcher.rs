use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::{
    error::MatchError,
    explain::explain_skill_match,
    location::{LocationScorer, TextLocationScorer},
    scoring::calculate_match_score,
};
use crate::models::{MatchResult, ScoringConfig, SkillMatchTrace, UserProfile};

/// Main matching orchestrator - scores and ranks candidates for a user
///
/// The matcher holds only immutable configuration, so one instance can be
/// shared across concurrent requests. Every call is a pure function of its
/// inputs and the supplied evaluation time.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: ScoringConfig,
    location_scorer: Arc<dyn LocationScorer>,
}

impl Matcher {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            location_scorer: Arc::new(TextLocationScorer),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Swap in a different location strategy
    pub fn with_location_scorer(mut self, scorer: Arc<dyn LocationScorer>) -> Self {
        self.location_scorer = scorer;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single candidate against the current user
    pub fn score(
        &self,
        current: &UserProfile,
        candidate: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<MatchResult, MatchError> {
        ensure_profile(current, "current user")?;
        ensure_profile(&candidate, "candidate")?;

        Ok(self.score_unchecked(current, candidate, now))
    }

    /// Score a single candidate and explain the skill overlap (detail view)
    pub fn explain(
        &self,
        current: &UserProfile,
        candidate: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<(MatchResult, SkillMatchTrace), MatchError> {
        ensure_profile(current, "current user")?;
        ensure_profile(&candidate, "candidate")?;

        let trace = explain_skill_match(current, &candidate);
        Ok((self.score_unchecked(current, candidate, now), trace))
    }

    /// Rank candidates for the current user
    ///
    /// Every candidate is scored, then sorted by total score descending. The
    /// sort is stable, so candidates with equal scores keep their input order
    /// and identical inputs always produce identical pages.
    ///
    /// # Arguments
    /// * `current` - The requesting user's profile
    /// * `candidates` - Pre-filtered candidates, excluding the current user
    /// * `now` - Evaluation time used for activity scoring
    pub fn rank(
        &self,
        current: &UserProfile,
        candidates: Vec<UserProfile>,
        now: DateTime<Utc>,
    ) -> Result<Vec<MatchResult>, MatchError> {
        ensure_profile(current, "current user")?;
        for candidate in &candidates {
            ensure_profile(candidate, "candidate")?;
        }

        let total_candidates = candidates.len();

        let mut results: Vec<MatchResult> = candidates
            .into_iter()
            .map(|candidate| self.score_unchecked(current, candidate, now))
            .collect();

        results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        tracing::debug!(
            "Ranked {} candidates for user {}",
            total_candidates,
            current.id
        );

        Ok(results)
    }

    fn score_unchecked(
        &self,
        current: &UserProfile,
        candidate: UserProfile,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let score = calculate_match_score(
            current,
            &candidate,
            &self.config,
            self.location_scorer.as_ref(),
            now,
        );

        tracing::trace!(
            "Scored {} -> {}: {:.2}",
            current.id,
            candidate.id,
            score.total_score
        );

        MatchResult {
            candidate,
            total_score: score.total_score,
            breakdown: score.breakdown,
            matched_skills: score.matched_skills,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// A profile without an id is treated as absent.
fn ensure_profile(profile: &UserProfile, role: &str) -> Result<(), MatchError> {
    if profile.id.trim().is_empty() {
        return Err(MatchError::missing_profile(role));
    }
    Ok(())
}
