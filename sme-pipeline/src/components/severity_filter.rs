use async_trait::async_trait;

use sme_core::insights::Severity;

use crate::filter::{Filter, FilterResult};
use crate::types::{DashboardQuery, RiskCandidate};

/// Drops alerts below the query's minimum severity.
pub struct SeverityFilter;

#[async_trait]
impl Filter<DashboardQuery, RiskCandidate> for SeverityFilter {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.min_severity > Severity::Low
    }

    async fn filter(
        &self,
        query: &DashboardQuery,
        candidates: Vec<RiskCandidate>,
    ) -> Result<FilterResult<RiskCandidate>, String> {
        Ok(FilterResult::partition(candidates, |c| {
            c.alert.severity >= query.min_severity
        }))
    }
}
