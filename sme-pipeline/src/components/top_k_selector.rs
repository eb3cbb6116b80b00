use crate::selector::Selector;
use crate::types::{DashboardQuery, RiskCandidate};

/// The K highest-scoring risk alerts. Unscored alerts rank last.
pub struct TopKSelector {
    pub k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self { k: 5 }
    }
}

impl Selector<DashboardQuery, RiskCandidate> for TopKSelector {
    fn score(&self, candidate: &RiskCandidate) -> f64 {
        candidate.score.unwrap_or(f64::NEG_INFINITY)
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
