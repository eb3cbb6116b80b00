use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Scenario types
// ---------------------------------------------------------------------------

/// The fixed reference snapshot every scenario is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialBaseline {
    /// Monthly revenue (RM).
    pub monthly_revenue: f64,
    /// Monthly costs (RM).
    pub monthly_costs: f64,
    /// Monthly profit (RM).
    pub monthly_profit: f64,
    /// Profit margin in percent.
    pub profit_margin: f64,
    /// Days of the month needed to cover costs.
    pub break_even_days: f64,
    /// Cash flow (RM).
    pub cash_flow: f64,
    pub employees: u32,
}

impl FinancialBaseline {
    /// The snapshot the simulator ships with.
    pub fn sample() -> Self {
        Self {
            monthly_revenue: 85_000.0,
            monthly_costs: 68_000.0,
            monthly_profit: 17_000.0,
            profit_margin: 20.0,
            break_even_days: 23.0,
            cash_flow: 45_800.0,
            employees: 12,
        }
    }
}

/// Hypothetical adjustments chosen by the operator.
///
/// `staff_increase` and `price_increase_pct` are collected but do not
/// participate in the projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub revenue_change_pct: f64,
    pub cost_reduction_pct: f64,
    pub staff_increase: f64,
    /// Additional marketing spend (RM), added to costs as-is.
    pub marketing_spend: f64,
    pub price_increase_pct: f64,
}

impl ScenarioInput {
    pub fn is_zero(&self) -> bool {
        *self == ScenarioInput::default()
    }
}

/// Projected snapshot plus percent changes against the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub cash_flow: f64,
    pub break_even_days: f64,
    pub revenue_change_pct: f64,
    pub profit_change_pct: f64,
    pub cash_flow_change_pct: f64,
}

// ---------------------------------------------------------------------------
// Comparison types
// ---------------------------------------------------------------------------

/// Whether a projected change is good or bad news for the business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Favourable,
    Unfavourable,
}

impl Direction {
    pub fn from_bool(favourable: bool) -> Self {
        if favourable {
            Direction::Favourable
        } else {
            Direction::Unfavourable
        }
    }
}

/// One row of the "Current vs Projected" panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub projected: f64,
    /// Change against baseline. Percent for money rows, points for the
    /// margin row, days for the break-even row.
    pub delta: f64,
    pub direction: Direction,
}

/// The projected snapshot laid out against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub revenue: ComparisonRow,
    pub profit: ComparisonRow,
    pub profit_margin: ComparisonRow,
    pub cash_flow: ComparisonRow,
    pub break_even_days: ComparisonRow,
}

impl ScenarioComparison {
    pub fn rows(&self) -> [&ComparisonRow; 5] {
        [
            &self.revenue,
            &self.profit,
            &self.profit_margin,
            &self.cash_flow,
            &self.break_even_days,
        ]
    }
}

/// Human-readable summary of what a scenario changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub positive: Vec<String>,
    pub concerns: Vec<String>,
}
