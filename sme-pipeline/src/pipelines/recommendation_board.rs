use async_trait::async_trait;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

use sme_core::insights::{
    CategoryFilter, Effort, Priority, Recommendation, RecommendationCategory,
};

use crate::candidate_pipeline::CandidatePipeline;
use crate::components::log_side_effect::LogSideEffect;
use crate::components::priority_scorer::PriorityScorer;
use crate::components::priority_selector::PrioritySelector;
use crate::components::recommendation_filters::{
    RecommendationCategoryFilter, RecommendationStatusFilter,
};
use crate::components::request_id_query_hydrator::RequestIdQueryHydrator;
use crate::components::sample_recommendation_source::SampleRecommendationSource;
use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::SideEffect;
use crate::source::Source;
use crate::types::{DashboardQuery, RecommendationCandidate};

/// Recommendations page pipeline: category and status filters, then
/// priority order with the published order kept between equals. Nothing
/// is truncated.
pub struct RecommendationBoardPipeline {
    query_hydrators: Vec<Box<dyn QueryHydrator<DashboardQuery>>>,
    sources: Vec<Box<dyn Source<DashboardQuery, RecommendationCandidate>>>,
    filters: Vec<Box<dyn Filter<DashboardQuery, RecommendationCandidate>>>,
    scorers: Vec<Box<dyn Scorer<DashboardQuery, RecommendationCandidate>>>,
    selector: PrioritySelector,
    no_hydrators: Vec<Box<dyn Hydrator<DashboardQuery, RecommendationCandidate>>>,
    no_filters: Vec<Box<dyn Filter<DashboardQuery, RecommendationCandidate>>>,
    side_effects: Arc<Vec<Box<dyn SideEffect<DashboardQuery, RecommendationCandidate>>>>,
    result_size: usize,
}

impl RecommendationBoardPipeline {
    pub fn new() -> Self {
        Self::with_recommendations(sme_core::dataset::recommendations())
    }

    pub fn with_recommendations(recommendations: Vec<Recommendation>) -> Self {
        let result_size = recommendations.len();
        Self {
            query_hydrators: vec![Box::new(RequestIdQueryHydrator::new("recommendations"))],
            sources: vec![Box::new(SampleRecommendationSource::new(recommendations))],
            filters: vec![
                Box::new(RecommendationCategoryFilter),
                Box::new(RecommendationStatusFilter),
            ],
            scorers: vec![Box::new(PriorityScorer)],
            selector: PrioritySelector,
            no_hydrators: Vec::new(),
            no_filters: Vec::new(),
            side_effects: Arc::new(vec![Box::new(LogSideEffect)]),
            result_size,
        }
    }
}

impl Default for RecommendationBoardPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidatePipeline<DashboardQuery, RecommendationCandidate> for RecommendationBoardPipeline {
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<DashboardQuery>>] {
        &self.query_hydrators
    }

    fn sources(&self) -> &[Box<dyn Source<DashboardQuery, RecommendationCandidate>>] {
        &self.sources
    }

    fn hydrators(&self) -> &[Box<dyn Hydrator<DashboardQuery, RecommendationCandidate>>] {
        &self.no_hydrators
    }

    fn filters(&self) -> &[Box<dyn Filter<DashboardQuery, RecommendationCandidate>>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn Scorer<DashboardQuery, RecommendationCandidate>>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn Selector<DashboardQuery, RecommendationCandidate> {
        &self.selector
    }

    fn post_selection_hydrators(
        &self,
    ) -> &[Box<dyn Hydrator<DashboardQuery, RecommendationCandidate>>] {
        &self.no_hydrators
    }

    fn post_selection_filters(
        &self,
    ) -> &[Box<dyn Filter<DashboardQuery, RecommendationCandidate>>] {
        &self.no_filters
    }

    fn side_effects(
        &self,
    ) -> Arc<Vec<Box<dyn SideEffect<DashboardQuery, RecommendationCandidate>>>> {
        Arc::clone(&self.side_effects)
    }

    fn result_size(&self) -> usize {
        self.result_size
    }
}

// ---------------------------------------------------------------------------
// Board summaries
// ---------------------------------------------------------------------------

/// One category button and how many recommendations it would show.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

/// Counts for the category buttons: "All Recommendations" first, then each
/// category in button order. Categories with no items are still listed.
pub fn category_counts(recommendations: &[Recommendation]) -> Vec<CategoryCount> {
    let mut counts = Vec::with_capacity(RecommendationCategory::ALL.len() + 1);
    counts.push(CategoryCount {
        filter: CategoryFilter::All,
        label: "All Recommendations",
        count: recommendations.len(),
    });
    for category in RecommendationCategory::ALL {
        counts.push(CategoryCount {
            filter: CategoryFilter::Only(category),
            label: category.button_label(),
            count: recommendations
                .iter()
                .filter(|r| r.category == category)
                .count(),
        });
    }
    counts
}

/// Low-effort recommendations that are not low priority, largest RM
/// impact first.
pub fn quick_wins(recommendations: &[Recommendation]) -> Vec<&Recommendation> {
    let mut wins: Vec<&Recommendation> = recommendations
        .iter()
        .filter(|r| r.effort == Effort::Low && r.priority != Priority::Low)
        .collect();
    wins.sort_by(|a, b| {
        b.impact
            .amount
            .partial_cmp(&a.impact.amount)
            .unwrap_or(Ordering::Equal)
    });
    wins
}
