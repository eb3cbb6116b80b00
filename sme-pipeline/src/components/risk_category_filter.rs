use async_trait::async_trait;

use crate::filter::{Filter, FilterResult};
use crate::types::{DashboardQuery, RiskCandidate};

/// Keeps alerts whose own category, or whose risk group, is one the query
/// asked for. Names compare case-insensitively; a group matches with or
/// without the trailing "Risk".
pub struct RiskCategoryFilter;

fn matches(candidate: &RiskCandidate, wanted: &str) -> bool {
    let wanted = wanted.trim();
    if candidate.alert.category.eq_ignore_ascii_case(wanted) {
        return true;
    }
    match candidate.group {
        Some(group) => {
            let label = group.label();
            label.eq_ignore_ascii_case(wanted)
                || label
                    .strip_suffix(" Risk")
                    .is_some_and(|short| short.eq_ignore_ascii_case(wanted))
        }
        None => false,
    }
}

#[async_trait]
impl Filter<DashboardQuery, RiskCandidate> for RiskCategoryFilter {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.risk_categories.as_ref().is_some_and(|c| !c.is_empty())
    }

    async fn filter(
        &self,
        query: &DashboardQuery,
        candidates: Vec<RiskCandidate>,
    ) -> Result<FilterResult<RiskCandidate>, String> {
        let wanted = query.risk_categories.as_deref().unwrap_or_default();
        Ok(FilterResult::partition(candidates, |c| {
            wanted.iter().any(|w| matches(c, w))
        }))
    }
}
