use async_trait::async_trait;

use sme_core::dataset;
use sme_core::insights::RiskAlert;

use crate::source::Source;
use crate::types::{DashboardQuery, RiskCandidate};

/// Serves a fixed list of risk alerts.
pub struct SampleRiskSource {
    alerts: Vec<RiskAlert>,
}

impl SampleRiskSource {
    pub fn new(alerts: Vec<RiskAlert>) -> Self {
        Self { alerts }
    }
}

impl Default for SampleRiskSource {
    fn default() -> Self {
        Self::new(dataset::risk_alerts())
    }
}

#[async_trait]
impl Source<DashboardQuery, RiskCandidate> for SampleRiskSource {
    fn enable(&self, _query: &DashboardQuery) -> bool {
        !self.alerts.is_empty()
    }

    async fn get_candidates(&self, _query: &DashboardQuery) -> Result<Vec<RiskCandidate>, String> {
        Ok(self.alerts.iter().cloned().map(RiskCandidate::from).collect())
    }
}
