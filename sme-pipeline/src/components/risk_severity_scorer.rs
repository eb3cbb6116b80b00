use async_trait::async_trait;

use sme_core::insights::{RiskTrend, Severity};

use crate::scorer::Scorer;
use crate::types::{DashboardQuery, RiskCandidate};

/// severity weight × ln(RM impact + 1) × trend multiplier.
///
/// The log keeps one very large amount from drowning out severity.
pub struct RiskSeverityScorer;

pub fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::High => 3.0,
        Severity::Medium => 2.0,
        Severity::Low => 1.0,
    }
}

pub fn trend_multiplier(trend: RiskTrend) -> f64 {
    match trend {
        RiskTrend::Increasing => 1.5,
        RiskTrend::Declining => 1.3,
        RiskTrend::Seasonal => 1.1,
        RiskTrend::Stable => 1.0,
    }
}

/// Score one alert. Negative impacts count as zero.
pub fn risk_score(candidate: &RiskCandidate) -> f64 {
    let alert = &candidate.alert;
    let impact = alert.impact.amount.max(0.0);
    severity_weight(alert.severity) * (impact + 1.0).ln() * trend_multiplier(alert.trend)
}

#[async_trait]
impl Scorer<DashboardQuery, RiskCandidate> for RiskSeverityScorer {
    async fn score(
        &self,
        _query: &DashboardQuery,
        candidates: &[RiskCandidate],
    ) -> Result<Vec<RiskCandidate>, String> {
        Ok(candidates
            .iter()
            .map(|c| RiskCandidate {
                score: Some(risk_score(c)),
                ..c.clone()
            })
            .collect())
    }

    fn update(&self, candidate: &mut RiskCandidate, scored: RiskCandidate) {
        candidate.score = scored.score;
    }
}
