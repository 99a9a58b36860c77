use std::collections::HashSet;

use crate::core::skills::SkillIndex;
use crate::models::{SharedSkill, SkillMatchTrace, TeachingMatch, UserProfile};

/// Enumerate what each side of a pairing can teach the other.
///
/// Runs its own pass over the skill lists, separate from scoring, and
/// produces three categories:
/// - skills the current user offers that the candidate wants
/// - skills the candidate offers that the current user wants
/// - skills both users offer that neither side wants from the other
///
/// The three lists are disjoint: a shared skill already listed as teachable in
/// either direction is left out of `both_teach`.
pub fn explain_skill_match(current: &UserProfile, candidate: &UserProfile) -> SkillMatchTrace {
    let current_offered = SkillIndex::build(&current.skills_offered);
    let current_wanted = SkillIndex::build(&current.skills_wanted);
    let candidate_offered = SkillIndex::build(&candidate.skills_offered);
    let candidate_wanted = SkillIndex::build(&candidate.skills_wanted);

    let mut taught: HashSet<&str> = HashSet::new();

    let you_can_teach = current_offered
        .iter()
        .filter_map(|(key, teach)| {
            candidate_wanted.get(key).map(|learn| {
                taught.insert(key);
                TeachingMatch {
                    skill: teach.name.trim().to_string(),
                    teacher_level: teach.level,
                    learner_priority: learn.priority,
                }
            })
        })
        .collect();

    let they_can_teach = candidate_offered
        .iter()
        .filter_map(|(key, teach)| {
            current_wanted.get(key).map(|learn| {
                taught.insert(key);
                TeachingMatch {
                    skill: teach.name.trim().to_string(),
                    teacher_level: teach.level,
                    learner_priority: learn.priority,
                }
            })
        })
        .collect();

    let both_teach = current_offered
        .iter()
        .filter(|(key, _)| !taught.contains(key))
        .filter_map(|(key, mine)| {
            candidate_offered.get(key).map(|theirs| SharedSkill {
                skill: mine.name.trim().to_string(),
                current_user_level: mine.level,
                candidate_level: theirs.level,
            })
        })
        .collect();

    SkillMatchTrace {
        you_can_teach,
        they_can_teach,
        both_teach,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, OfferedSkill, SkillLevel, SkillPriority, WantedSkill};

    fn create_test_profile(id: &str, offered: &[(&str, &str)], wanted: &[(&str, &str)]) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: format!("User {}", id),
            skills_offered: offered
                .iter()
                .map(|(name, level)| OfferedSkill {
                    name: name.to_string(),
                    level: SkillLevel::from(*level),
                    description: None,
                })
                .collect(),
            skills_wanted: wanted
                .iter()
                .map(|(name, priority)| WantedSkill {
                    name: name.to_string(),
                    priority: SkillPriority::from(*priority),
                    description: None,
                })
                .collect(),
            average_rating: 0.0,
            last_active_at: None,
            location: None,
            availability: Availability::default(),
            is_active: true,
        }
    }

    #[test]
    fn test_explains_all_three_categories() {
        let current = create_test_profile(
            "me",
            &[("JavaScript", "advanced"), ("Cooking", "expert")],
            &[("Python", "high")],
        );
        let candidate = create_test_profile(
            "them",
            &[("python", "expert"), ("cooking", "beginner")],
            &[("javascript", "medium")],
        );

        let trace = explain_skill_match(&current, &candidate);

        assert_eq!(
            trace.you_can_teach,
            vec![TeachingMatch {
                skill: "JavaScript".to_string(),
                teacher_level: SkillLevel::Advanced,
                learner_priority: SkillPriority::Medium,
            }]
        );
        assert_eq!(
            trace.they_can_teach,
            vec![TeachingMatch {
                skill: "python".to_string(),
                teacher_level: SkillLevel::Expert,
                learner_priority: SkillPriority::High,
            }]
        );
        assert_eq!(
            trace.both_teach,
            vec![SharedSkill {
                skill: "Cooking".to_string(),
                current_user_level: SkillLevel::Expert,
                candidate_level: SkillLevel::Beginner,
            }]
        );
    }

    #[test]
    fn test_trace_lists_are_disjoint() {
        let current = create_test_profile("me", &[("Python", "expert"), ("Chess", "advanced")], &[]);
        let candidate = create_test_profile(
            "them",
            &[("Python", "beginner"), ("chess", "beginner")],
            &[("python", "high")],
        );

        let trace = explain_skill_match(&current, &candidate);

        let you: HashSet<String> = trace.you_can_teach.iter().map(|m| m.skill.to_lowercase()).collect();
        let they: HashSet<String> = trace.they_can_teach.iter().map(|m| m.skill.to_lowercase()).collect();
        let both: HashSet<String> = trace.both_teach.iter().map(|s| s.skill.to_lowercase()).collect();

        assert_eq!(trace.you_can_teach.len(), 1);
        assert_eq!(trace.you_can_teach[0].skill, "Python");
        assert!(you.is_disjoint(&they));
        assert!(you.is_disjoint(&both));
        assert!(they.is_disjoint(&both));
        assert_eq!(
            trace.both_teach,
            vec![SharedSkill {
                skill: "Chess".to_string(),
                current_user_level: SkillLevel::Advanced,
                candidate_level: SkillLevel::Beginner,
            }]
        );
    }

    #[test]
    fn test_no_overlap_gives_empty_trace() {
        let current = create_test_profile("me", &[("Chess", "expert")], &[("Piano", "low")]);
        let candidate = create_test_profile("them", &[("Drums", "advanced")], &[("Go", "high")]);

        assert_eq!(explain_skill_match(&current, &candidate), SkillMatchTrace::default());
    }

    #[test]
    fn test_empty_profiles() {
        let current = create_test_profile("me", &[], &[]);
        let candidate = create_test_profile("them", &[], &[]);

        let trace = explain_skill_match(&current, &candidate);

        assert!(trace.you_can_teach.is_empty());
        assert!(trace.they_can_teach.is_empty());
        assert!(trace.both_teach.is_empty());
    }
}
