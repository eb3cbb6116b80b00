use async_trait::async_trait;

use crate::hydrator::Hydrator;
use crate::types::{DashboardQuery, RiskCandidate, RiskGroup};

/// Tags each alert with the overview bucket its category belongs to.
pub struct RiskGroupHydrator;

#[async_trait]
impl Hydrator<DashboardQuery, RiskCandidate> for RiskGroupHydrator {
    async fn hydrate(
        &self,
        _query: &DashboardQuery,
        candidates: &[RiskCandidate],
    ) -> Result<Vec<RiskCandidate>, String> {
        Ok(candidates
            .iter()
            .map(|c| RiskCandidate {
                group: Some(RiskGroup::of_category(c.alert.category)),
                ..c.clone()
            })
            .collect())
    }

    fn update(&self, candidate: &mut RiskCandidate, hydrated: RiskCandidate) {
        candidate.group = hydrated.group;
    }
}
