//! Chart data for the visualizations page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyFigures {
    pub month: &'static str,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Trailing window selected above the trend chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[default]
    #[serde(rename = "12months")]
    TwelveMonths,
    #[serde(rename = "24months")]
    TwentyFourMonths,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 4] = [
        ChartPeriod::ThreeMonths,
        ChartPeriod::SixMonths,
        ChartPeriod::TwelveMonths,
        ChartPeriod::TwentyFourMonths,
    ];

    pub fn months(self) -> usize {
        match self {
            ChartPeriod::ThreeMonths => 3,
            ChartPeriod::SixMonths => 6,
            ChartPeriod::TwelveMonths => 12,
            ChartPeriod::TwentyFourMonths => 24,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ChartPeriod::ThreeMonths => "3months",
            ChartPeriod::SixMonths => "6months",
            ChartPeriod::TwelveMonths => "12months",
            ChartPeriod::TwentyFourMonths => "24months",
        }
    }

    pub fn label(self) -> String {
        format!("Last {} Months", self.months())
    }

    /// The most recent `months()` entries. The sample only holds twelve
    /// months, so longer windows return everything there is.
    pub fn window(self, series: &[MonthlyFigures]) -> &[MonthlyFigures] {
        let take = self.months().min(series.len());
        &series[series.len() - take..]
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ChartPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartPeriod::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted) || p.months().to_string() == wanted)
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "chart period",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    #[default]
    Revenue,
    Expenses,
    Profit,
}

impl ChartMetric {
    pub fn of(self, figures: &MonthlyFigures) -> f64 {
        match self {
            ChartMetric::Revenue => figures.revenue,
            ChartMetric::Expenses => figures.expenses,
            ChartMetric::Profit => figures.profit,
        }
    }
}

impl std::str::FromStr for ChartMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenue" => Ok(ChartMetric::Revenue),
            "expenses" => Ok(ChartMetric::Expenses),
            "profit" => Ok(ChartMetric::Profit),
            _ => Err(CoreError::UnknownOption {
                kind: "chart metric",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseCategory {
    pub category: &'static str,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Above,
    Below,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndustryComparison {
    pub metric: &'static str,
    pub your_business: f64,
    pub industry_avg: f64,
    pub status: Standing,
}

/// A single headline figure with a caption, as shown on KPI cards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndustryBenchmark {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline card on the home page. `change` is pre-formatted because
/// the cards mix units (percent, days).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Vec<MonthlyFigures> {
        (0..n)
            .map(|i| MonthlyFigures {
                month: "x",
                revenue: i as f64,
                expenses: 0.0,
                profit: 0.0,
            })
            .collect()
    }

    #[test]
    fn window_takes_most_recent_months() {
        let s = series(12);
        let w = ChartPeriod::ThreeMonths.window(&s);
        assert_eq!(w.len(), 3);
        assert_eq!(w[0].revenue, 9.0);
        assert_eq!(w[2].revenue, 11.0);
    }

    #[test]
    fn window_longer_than_series_returns_all() {
        let s = series(12);
        assert_eq!(ChartPeriod::TwentyFourMonths.window(&s).len(), 12);
        assert!(ChartPeriod::SixMonths.window(&[]).is_empty());
    }

    #[test]
    fn period_parses_id_or_count() {
        assert_eq!("6months".parse::<ChartPeriod>().unwrap(), ChartPeriod::SixMonths);
        assert_eq!("24".parse::<ChartPeriod>().unwrap(), ChartPeriod::TwentyFourMonths);
        assert!("5months".parse::<ChartPeriod>().is_err());
        assert_eq!(ChartPeriod::default().label(), "Last 12 Months");
    }
}
