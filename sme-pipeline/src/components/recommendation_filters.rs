use async_trait::async_trait;

use sme_core::insights::CategoryFilter;

use crate::filter::{Filter, FilterResult};
use crate::types::{DashboardQuery, RecommendationCandidate};

/// The category buttons: `All` lets everything through.
pub struct RecommendationCategoryFilter;

#[async_trait]
impl Filter<DashboardQuery, RecommendationCandidate> for RecommendationCategoryFilter {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.recommendation_category != CategoryFilter::All
    }

    async fn filter(
        &self,
        query: &DashboardQuery,
        candidates: Vec<RecommendationCandidate>,
    ) -> Result<FilterResult<RecommendationCandidate>, String> {
        Ok(FilterResult::partition(candidates, |c| {
            query
                .recommendation_category
                .matches(c.recommendation.category)
        }))
    }
}

/// Only runs when the query names a status.
pub struct RecommendationStatusFilter;

#[async_trait]
impl Filter<DashboardQuery, RecommendationCandidate> for RecommendationStatusFilter {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.recommendation_status.is_some()
    }

    async fn filter(
        &self,
        query: &DashboardQuery,
        candidates: Vec<RecommendationCandidate>,
    ) -> Result<FilterResult<RecommendationCandidate>, String> {
        let wanted = query
            .recommendation_status
            .ok_or_else(|| "status filter ran without a status".to_string())?;
        Ok(FilterResult::partition(candidates, |c| {
            c.recommendation.status == wanted
        }))
    }
}
