use async_trait::async_trait;

use sme_core::insights::Priority;

use crate::scorer::Scorer;
use crate::types::{DashboardQuery, RecommendationCandidate};

/// Scores recommendations by priority alone: high 3, medium 2, low 1.
pub struct PriorityScorer;

pub fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::High => 3.0,
        Priority::Medium => 2.0,
        Priority::Low => 1.0,
    }
}

#[async_trait]
impl Scorer<DashboardQuery, RecommendationCandidate> for PriorityScorer {
    async fn score(
        &self,
        _query: &DashboardQuery,
        candidates: &[RecommendationCandidate],
    ) -> Result<Vec<RecommendationCandidate>, String> {
        Ok(candidates
            .iter()
            .map(|c| RecommendationCandidate {
                score: Some(priority_weight(c.recommendation.priority)),
                ..c.clone()
            })
            .collect())
    }

    fn update(&self, candidate: &mut RecommendationCandidate, scored: RecommendationCandidate) {
        candidate.score = scored.score;
    }
}
