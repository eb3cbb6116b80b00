use crate::selector::Selector;
use crate::types::{DashboardQuery, RecommendationCandidate};

/// Orders recommendations by priority score and keeps all of them.
pub struct PrioritySelector;

impl Selector<DashboardQuery, RecommendationCandidate> for PrioritySelector {
    fn score(&self, candidate: &RecommendationCandidate) -> f64 {
        candidate.score.unwrap_or(f64::NEG_INFINITY)
    }
}
