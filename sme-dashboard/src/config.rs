use std::fs;
use std::path::Path;

use serde::Deserialize;
use sme_core::format::CURRENCY;
use sme_core::insights::{CategoryFilter, Severity};
use sme_core::visuals::{ChartMetric, ChartPeriod};

use crate::error::{CliError, CliResult};

/// Display defaults, optionally loaded from a JSON file. Command-line
/// flags override whatever the file says.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Replaces the `RM` prefix in text output only.
    pub currency_label: String,
    pub risk_top_k: usize,
    pub risk_min_severity: Severity,
    /// Alert categories or risk groups to keep; empty keeps all.
    pub risk_categories: Vec<String>,
    pub recommendation_category: CategoryFilter,
    pub visualization_period: ChartPeriod,
    pub visualization_metric: ChartMetric,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_label: CURRENCY.to_string(),
            risk_top_k: 5,
            risk_min_severity: Severity::Low,
            risk_categories: Vec::new(),
            recommendation_category: CategoryFilter::All,
            visualization_period: ChartPeriod::default(),
            visualization_metric: ChartMetric::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> CliResult<Self> {
        let config: DashboardConfig = serde_json::from_str(raw).map_err(CliError::Config)?;
        if config.risk_top_k == 0 {
            return Err(CliError::Usage("risk_top_k must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Swap the currency prefix of an already formatted amount.
    pub fn money(&self, formatted: String) -> String {
        if self.currency_label == CURRENCY {
            formatted
        } else {
            formatted.replacen(CURRENCY, &self.currency_label, 1)
        }
    }
}
