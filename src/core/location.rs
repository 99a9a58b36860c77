/// Strategy for scoring how close two free-text locations are.
///
/// Implementations return a value in `0.0..=10.0`; a missing location on
/// either side scores `0.0`. The aggregator clamps whatever comes back to the
/// configured location cap, so a replacement strategy cannot inflate totals.
pub trait LocationScorer: std::fmt::Debug + Send + Sync {
    fn score(&self, current: Option<&str>, candidate: Option<&str>) -> f64;
}

/// Score for identical location strings
pub const EXACT_MATCH_SCORE: f64 = 10.0;
/// Score when one city segment contains the other
pub const SAME_CITY_SCORE: f64 = 8.0;
/// Score when only the region segment agrees
pub const SAME_REGION_SCORE: f64 = 5.0;

/// Coarse "City, Region" text comparison.
///
/// No geocoding happens here: strings are lowercased, split on commas and
/// compared segment by segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLocationScorer;

impl LocationScorer for TextLocationScorer {
    fn score(&self, current: Option<&str>, candidate: Option<&str>) -> f64 {
        let (Some(current), Some(candidate)) = (current, candidate) else {
            return 0.0;
        };

        let current = current.trim().to_lowercase();
        let candidate = candidate.trim().to_lowercase();
        if current.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        if current == candidate {
            return EXACT_MATCH_SCORE;
        }

        let current_parts: Vec<&str> = current.split(',').map(str::trim).collect();
        let candidate_parts: Vec<&str> = candidate.split(',').map(str::trim).collect();

        let current_city = current_parts[0];
        let candidate_city = candidate_parts[0];
        if !current_city.is_empty()
            && !candidate_city.is_empty()
            && (current_city.contains(candidate_city) || candidate_city.contains(current_city))
        {
            return SAME_CITY_SCORE;
        }

        if current_parts.len() >= 2
            && candidate_parts.len() >= 2
            && !current_parts[1].is_empty()
            && current_parts[1] == candidate_parts[1]
        {
            return SAME_REGION_SCORE;
        }

        0.0
    }
}
