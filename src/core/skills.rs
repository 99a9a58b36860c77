use std::collections::HashMap;

use crate::models::{OfferedSkill, SkillLevel, SkillPriority, WantedSkill};

/// Anything with a skill name that can be indexed for lookup
pub trait NamedSkill {
    fn skill_name(&self) -> &str;
}

impl NamedSkill for OfferedSkill {
    fn skill_name(&self) -> &str {
        &self.name
    }
}

impl NamedSkill for WantedSkill {
    fn skill_name(&self) -> &str {
        &self.name
    }
}

/// Normalize a skill name for comparison.
///
/// Returns `None` for blank names, which never match anything.
#[inline]
pub fn normalize_skill_name(name: &str) -> Option<String> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Case-insensitive index over one of a user's skill lists.
///
/// Iteration follows the original list order. When a name appears more than
/// once only the first record is kept.
#[derive(Debug)]
pub struct SkillIndex<'a, T> {
    entries: Vec<(String, &'a T)>,
    by_name: HashMap<String, usize>,
}

impl<'a, T: NamedSkill> SkillIndex<'a, T> {
    pub fn build(skills: &'a [T]) -> Self {
        let mut entries = Vec::with_capacity(skills.len());
        let mut by_name = HashMap::with_capacity(skills.len());

        for skill in skills {
            let Some(key) = normalize_skill_name(skill.skill_name()) else {
                continue;
            };
            if by_name.contains_key(&key) {
                continue;
            }
            by_name.insert(key.clone(), entries.len());
            entries.push((key, skill));
        }

        Self { entries, by_name }
    }

    /// Look up a skill by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&'a T> {
        let key = normalize_skill_name(name)?;
        self.by_name.get(&key).map(|&idx| self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Unique skills in list order, paired with their normalized names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a T)> + '_ {
        self.entries.iter().map(|(key, skill)| (key.as_str(), *skill))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Numeric weight of a proficiency level
#[inline]
pub fn level_score(level: SkillLevel) -> f64 {
    match level {
        SkillLevel::Beginner => 1.0,
        SkillLevel::Intermediate => 2.0,
        SkillLevel::Advanced => 3.0,
        SkillLevel::Expert => 4.0,
        SkillLevel::Unknown => 1.0,
    }
}

/// Multiplier applied to the level score for a learner's priority
#[inline]
pub fn priority_multiplier(priority: SkillPriority) -> f64 {
    match priority {
        SkillPriority::Low => 0.5,
        SkillPriority::Medium => 1.0,
        SkillPriority::High => 1.5,
        SkillPriority::Unknown => 1.0,
    }
}

/// Bonus for pairing a teacher's level with a learner's priority
#[inline]
pub fn level_compatibility(level: SkillLevel, priority: SkillPriority) -> f64 {
    level_score(level) * priority_multiplier(priority)
}
