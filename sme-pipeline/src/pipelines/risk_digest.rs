use async_trait::async_trait;
use std::sync::Arc;

use sme_core::insights::RiskAlert;

use crate::candidate_pipeline::CandidatePipeline;
use crate::components::log_side_effect::LogSideEffect;
use crate::components::request_id_query_hydrator::RequestIdQueryHydrator;
use crate::components::risk_category_filter::RiskCategoryFilter;
use crate::components::risk_group_hydrator::RiskGroupHydrator;
use crate::components::risk_severity_scorer::RiskSeverityScorer;
use crate::components::sample_risk_source::SampleRiskSource;
use crate::components::severity_filter::SeverityFilter;
use crate::components::top_k_selector::TopKSelector;
use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::SideEffect;
use crate::source::Source;
use crate::types::{DashboardQuery, RiskCandidate};

/// Risk page pipeline.
///
/// 1. RequestIdQueryHydrator names the run
/// 2. SampleRiskSource yields the alerts
/// 3. RiskGroupHydrator tags each with its overview bucket
/// 4. SeverityFilter and RiskCategoryFilter apply the query
/// 5. RiskSeverityScorer ranks by severity, impact and trend
/// 6. TopKSelector keeps the K most pressing
/// 7. LogSideEffect logs the digest
pub struct RiskDigestPipeline {
    query_hydrators: Vec<Box<dyn QueryHydrator<DashboardQuery>>>,
    sources: Vec<Box<dyn Source<DashboardQuery, RiskCandidate>>>,
    hydrators: Vec<Box<dyn Hydrator<DashboardQuery, RiskCandidate>>>,
    filters: Vec<Box<dyn Filter<DashboardQuery, RiskCandidate>>>,
    scorers: Vec<Box<dyn Scorer<DashboardQuery, RiskCandidate>>>,
    selector: TopKSelector,
    post_selection_hydrators: Vec<Box<dyn Hydrator<DashboardQuery, RiskCandidate>>>,
    post_selection_filters: Vec<Box<dyn Filter<DashboardQuery, RiskCandidate>>>,
    side_effects: Arc<Vec<Box<dyn SideEffect<DashboardQuery, RiskCandidate>>>>,
    result_size: usize,
}

impl RiskDigestPipeline {
    /// The sample alerts, top five.
    pub fn new() -> Self {
        Self::with_alerts_and_size(sme_core::dataset::risk_alerts(), 5)
    }

    pub fn with_alerts_and_size(alerts: Vec<RiskAlert>, result_size: usize) -> Self {
        Self {
            query_hydrators: vec![Box::new(RequestIdQueryHydrator::new("risks"))],
            sources: vec![Box::new(SampleRiskSource::new(alerts))],
            hydrators: vec![Box::new(RiskGroupHydrator)],
            filters: vec![Box::new(SeverityFilter), Box::new(RiskCategoryFilter)],
            scorers: vec![Box::new(RiskSeverityScorer)],
            selector: TopKSelector { k: result_size },
            post_selection_hydrators: Vec::new(),
            post_selection_filters: Vec::new(),
            side_effects: Arc::new(vec![Box::new(LogSideEffect)]),
            result_size,
        }
    }
}

impl Default for RiskDigestPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidatePipeline<DashboardQuery, RiskCandidate> for RiskDigestPipeline {
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<DashboardQuery>>] {
        &self.query_hydrators
    }

    fn sources(&self) -> &[Box<dyn Source<DashboardQuery, RiskCandidate>>] {
        &self.sources
    }

    fn hydrators(&self) -> &[Box<dyn Hydrator<DashboardQuery, RiskCandidate>>] {
        &self.hydrators
    }

    fn filters(&self) -> &[Box<dyn Filter<DashboardQuery, RiskCandidate>>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn Scorer<DashboardQuery, RiskCandidate>>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn Selector<DashboardQuery, RiskCandidate> {
        &self.selector
    }

    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<DashboardQuery, RiskCandidate>>] {
        &self.post_selection_hydrators
    }

    fn post_selection_filters(&self) -> &[Box<dyn Filter<DashboardQuery, RiskCandidate>>] {
        &self.post_selection_filters
    }

    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<DashboardQuery, RiskCandidate>>>> {
        Arc::clone(&self.side_effects)
    }

    fn result_size(&self) -> usize {
        self.result_size
    }
}
