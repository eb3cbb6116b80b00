use async_trait::async_trait;
use std::sync::Arc;

use sme_core::format::format_ringgit;

use crate::side_effect::{SideEffect, SideEffectInput};
use crate::types::{DashboardQuery, RecommendationCandidate, RiskCandidate};

/// Logs a one-line digest of what was selected.
pub struct LogSideEffect;

#[async_trait]
impl SideEffect<DashboardQuery, RiskCandidate> for LogSideEffect {
    async fn run(
        &self,
        input: Arc<SideEffectInput<DashboardQuery, RiskCandidate>>,
    ) -> Result<(), String> {
        let exposure: f64 = input
            .selected_candidates
            .iter()
            .map(|c| c.alert.impact.amount)
            .sum();
        log::info!(
            "request_id={} risk digest: {} alerts, {} exposure",
            input.query.request_id,
            input.selected_candidates.len(),
            format_ringgit(exposure)
        );
        Ok(())
    }
}

#[async_trait]
impl SideEffect<DashboardQuery, RecommendationCandidate> for LogSideEffect {
    async fn run(
        &self,
        input: Arc<SideEffectInput<DashboardQuery, RecommendationCandidate>>,
    ) -> Result<(), String> {
        log::info!(
            "request_id={} recommendation board: {} items for {:?}",
            input.query.request_id,
            input.selected_candidates.len(),
            input.query.recommendation_category
        );
        Ok(())
    }
}
