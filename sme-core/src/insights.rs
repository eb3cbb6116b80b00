//! Risk alerts and recommendations.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::format::format_ringgit;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// A money figure with what it measures, e.g. `RM 12,000 monthly`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Impact {
    /// Amount in RM.
    pub amount: f64,
    /// What the amount means: "monthly", "annual savings", ...
    pub basis: &'static str,
}

impl Impact {
    pub fn new(amount: f64, basis: &'static str) -> Self {
        Self { amount, basis }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_ringgit(self.amount), self.basis)
    }
}

// ---------------------------------------------------------------------------
// Risk alerts
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(CoreError::UnknownOption {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

/// How a risk is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    Increasing,
    Declining,
    Seasonal,
    Stable,
}

impl fmt::Display for RiskTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTrend::Increasing => write!(f, "\u{2191} increasing"),
            RiskTrend::Declining => write!(f, "\u{2193} declining"),
            RiskTrend::Seasonal => write!(f, "\u{21bb} seasonal"),
            RiskTrend::Stable => write!(f, "\u{2192} stable"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAlert {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub impact: Impact,
    pub recommendation: &'static str,
    pub trend: RiskTrend,
    pub detected: NaiveDate,
}

/// The short alert cards on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Success,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub description: &'static str,
    pub severity_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Medium,
    Poor,
}

/// A headline score out of 10 on the risk page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskMetric {
    pub title: &'static str,
    pub score: f64,
    pub status: HealthStatus,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskCategorySummary {
    pub category: &'static str,
    pub count: u32,
    pub high_risk: u32,
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::Low => write!(f, "Low"),
            Effort::Medium => write!(f, "Medium"),
            Effort::High => write!(f, "High"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationStatus {
    New,
    InProgress,
    Completed,
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationStatus::New => write!(f, "New"),
            RecommendationStatus::InProgress => write!(f, "In Progress"),
            RecommendationStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for RecommendationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
            "new" => Ok(RecommendationStatus::New),
            "in-progress" => Ok(RecommendationStatus::InProgress),
            "completed" => Ok(RecommendationStatus::Completed),
            _ => Err(CoreError::UnknownOption {
                kind: "recommendation status",
                value: s.to_string(),
            }),
        }
    }
}

/// Recommendation categories, in the order the filter buttons show them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Marketing,
    #[serde(rename = "Cost Reduction")]
    CostReduction,
    Revenue,
    Funding,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 5] = [
        RecommendationCategory::Marketing,
        RecommendationCategory::CostReduction,
        RecommendationCategory::Revenue,
        RecommendationCategory::Funding,
        RecommendationCategory::HumanResources,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecommendationCategory::Marketing => "Marketing",
            RecommendationCategory::CostReduction => "Cost Reduction",
            RecommendationCategory::Revenue => "Revenue",
            RecommendationCategory::Funding => "Funding",
            RecommendationCategory::HumanResources => "Human Resources",
        }
    }

    /// Short label used on the filter button.
    pub fn button_label(self) -> &'static str {
        match self {
            RecommendationCategory::HumanResources => "HR",
            other => other.name(),
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category filter: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RecommendationCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: RecommendationCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        RecommendationCategory::ALL
            .into_iter()
            .find(|c| {
                c.name().eq_ignore_ascii_case(wanted)
                    || c.button_label().eq_ignore_ascii_case(wanted)
                    || c.name().replace(' ', "-").eq_ignore_ascii_case(wanted)
            })
            .map(CategoryFilter::Only)
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "recommendation category",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub impact: Impact,
    pub effort: Effort,
    pub timeline: &'static str,
    pub action_steps: Vec<&'static str>,
    pub resources: Vec<Resource>,
    pub status: RecommendationStatus,
}

impl Recommendation {
    /// Buttons offered for the recommendation's current status.
    pub fn available_actions(&self) -> &'static [&'static str] {
        match self.status {
            RecommendationStatus::New => &["Not Interested", "Start Implementation"],
            RecommendationStatus::InProgress => &["View Progress", "Mark Complete"],
            RecommendationStatus::Completed => &["Completed"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_display() {
        let impact = Impact::new(12_000.0, "monthly");
        assert_eq!(impact.to_string(), "RM 12,000 monthly");
    }

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn category_filter_parses_labels() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "hr".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(RecommendationCategory::HumanResources)
        );
        assert_eq!(
            "cost-reduction".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(RecommendationCategory::CostReduction)
        );
        assert!("logistics".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn status_parses_with_spaces_or_dashes() {
        assert_eq!(
            "in progress".parse::<RecommendationStatus>().unwrap(),
            RecommendationStatus::InProgress
        );
        assert_eq!(
            "in-progress".parse::<RecommendationStatus>().unwrap(),
            RecommendationStatus::InProgress
        );
    }
}
