use std::fmt;

use serde::Serialize;
use sme_core::insights::{
    CategoryFilter, Recommendation, RecommendationStatus, RiskAlert, Severity,
};

use crate::candidate_pipeline::HasRequestId;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// What a page asks the pipelines for.
#[derive(Clone, Debug)]
pub struct DashboardQuery {
    /// Filled in by `RequestIdQueryHydrator` when left empty.
    pub request_id: String,
    /// Risk alerts below this severity are dropped.
    pub min_severity: Severity,
    /// Keep only risks whose category or risk group matches one of these.
    pub risk_categories: Option<Vec<String>>,
    pub recommendation_category: CategoryFilter,
    pub recommendation_status: Option<RecommendationStatus>,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            request_id: String::new(),
            min_severity: Severity::Low,
            risk_categories: None,
            recommendation_category: CategoryFilter::All,
            recommendation_status: None,
        }
    }
}

impl HasRequestId for DashboardQuery {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

// ---------------------------------------------------------------------------
// Risk candidates
// ---------------------------------------------------------------------------

/// The four buckets of the risk category overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RiskGroup {
    Financial,
    Operational,
    Market,
    Compliance,
}

impl RiskGroup {
    /// Which bucket an alert category falls into.
    pub fn of_category(category: &str) -> Self {
        match category.to_ascii_lowercase().as_str() {
            "cost management" | "cash flow" => RiskGroup::Financial,
            "seasonality" | "competition" => RiskGroup::Market,
            "compliance" | "regulatory" | "tax" => RiskGroup::Compliance,
            _ => RiskGroup::Operational,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskGroup::Financial => "Financial Risk",
            RiskGroup::Operational => "Operational Risk",
            RiskGroup::Market => "Market Risk",
            RiskGroup::Compliance => "Compliance Risk",
        }
    }
}

impl fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RiskCandidate {
    pub alert: RiskAlert,
    /// Populated by `RiskGroupHydrator`.
    pub group: Option<RiskGroup>,
    /// Populated by `RiskSeverityScorer`.
    pub score: Option<f64>,
}

impl From<RiskAlert> for RiskCandidate {
    fn from(alert: RiskAlert) -> Self {
        Self {
            alert,
            group: None,
            score: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation candidates
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub struct RecommendationCandidate {
    pub recommendation: Recommendation,
    /// Populated by `PriorityScorer`.
    pub score: Option<f64>,
}

impl From<Recommendation> for RecommendationCandidate {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            recommendation,
            score: None,
        }
    }
}
