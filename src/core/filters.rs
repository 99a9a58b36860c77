use crate::core::skills::{normalize_skill_name, SkillIndex};
use crate::models::{CandidateFilters, UserProfile};

/// Check if a candidate survives the caller-side pre-filters
///
/// Runs before scoring so the ranker only sees visible, eligible profiles:
/// the current user, explicitly excluded ids and inactive profiles are
/// dropped, then the optional availability, location and skill filters apply.
#[inline]
pub fn matches_candidate_filters(
    profile: &UserProfile,
    current_user_id: &str,
    filters: &CandidateFilters,
) -> bool {
    if !profile.is_active {
        return false;
    }

    if profile.id == current_user_id || filters.exclude_user_ids.contains(&profile.id) {
        return false;
    }

    if let Some(slot) = filters.availability {
        if !slot.is_satisfied_by(&profile.availability) {
            return false;
        }
    }

    if let Some(wanted_location) = non_blank(filters.location.as_deref()) {
        let matches_location = profile
            .location_text()
            .map(|loc| loc.to_lowercase().contains(&wanted_location.to_lowercase()))
            .unwrap_or(false);
        if !matches_location {
            return false;
        }
    }

    if let Some(skill) = filters.skill.as_deref().and_then(normalize_skill_name) {
        if !SkillIndex::build(&profile.skills_offered).contains(&skill) {
            return false;
        }
    }

    true
}

/// Apply the pre-filters to a candidate set, keeping input order
pub fn apply_candidate_filters(
    current_user_id: &str,
    candidates: Vec<UserProfile>,
    filters: &CandidateFilters,
) -> Vec<UserProfile> {
    candidates
        .into_iter()
        .filter(|profile| matches_candidate_filters(profile, current_user_id, filters))
        .collect()
}

#[inline]
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
