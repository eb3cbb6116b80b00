use async_trait::async_trait;

use sme_core::dataset;
use sme_core::insights::Recommendation;

use crate::source::Source;
use crate::types::{DashboardQuery, RecommendationCandidate};

/// Serves a fixed list of recommendations, in their published order.
pub struct SampleRecommendationSource {
    recommendations: Vec<Recommendation>,
}

impl SampleRecommendationSource {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self { recommendations }
    }
}

impl Default for SampleRecommendationSource {
    fn default() -> Self {
        Self::new(dataset::recommendations())
    }
}

#[async_trait]
impl Source<DashboardQuery, RecommendationCandidate> for SampleRecommendationSource {
    fn enable(&self, _query: &DashboardQuery) -> bool {
        !self.recommendations.is_empty()
    }

    async fn get_candidates(
        &self,
        _query: &DashboardQuery,
    ) -> Result<Vec<RecommendationCandidate>, String> {
        Ok(self
            .recommendations
            .iter()
            .cloned()
            .map(RecommendationCandidate::from)
            .collect())
    }
}
