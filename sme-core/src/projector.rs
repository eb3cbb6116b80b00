//! Scenario projection.
//!
//! `project` is a pure function of (baseline, input). It never validates
//! and never fails: degenerate inputs such as zero revenue surface as
//! NaN or infinity in the result.

use crate::bounds::DAYS_PER_MONTH;
use crate::format::format_ringgit;
use crate::math::{pct_change, pct_of, round_half_up};
use crate::types::{
    ComparisonRow, Direction, FinancialBaseline, ImpactSummary, ScenarioComparison,
    ScenarioInput, ScenarioResult,
};

/// Project the baseline through the scenario adjustments.
pub fn project(baseline: &FinancialBaseline, input: &ScenarioInput) -> ScenarioResult {
    let revenue = baseline.monthly_revenue * (1.0 + input.revenue_change_pct / 100.0);
    let costs = baseline.monthly_costs * (1.0 - input.cost_reduction_pct / 100.0)
        + input.marketing_spend;
    let profit = revenue - costs;
    let profit_margin = pct_of(profit, revenue);
    let cash_flow = baseline.cash_flow + (profit - baseline.monthly_profit);
    let break_even_days = round_half_up(costs / revenue * DAYS_PER_MONTH);

    ScenarioResult {
        revenue,
        costs,
        profit,
        profit_margin,
        cash_flow,
        break_even_days,
        revenue_change_pct: pct_change(revenue, baseline.monthly_revenue),
        profit_change_pct: pct_change(profit, baseline.monthly_profit),
        cash_flow_change_pct: pct_change(cash_flow, baseline.cash_flow),
    }
}

/// Lay a projection out against the baseline, row by row.
pub fn compare(baseline: &FinancialBaseline, result: &ScenarioResult) -> ScenarioComparison {
    let margin_delta = result.profit_margin - baseline.profit_margin;
    let days_delta = result.break_even_days - baseline.break_even_days;

    ScenarioComparison {
        revenue: ComparisonRow {
            label: "Monthly Revenue",
            projected: result.revenue,
            delta: result.revenue_change_pct,
            direction: Direction::from_bool(result.revenue_change_pct >= 0.0),
        },
        profit: ComparisonRow {
            label: "Monthly Profit",
            projected: result.profit,
            delta: result.profit_change_pct,
            direction: Direction::from_bool(result.profit_change_pct >= 0.0),
        },
        profit_margin: ComparisonRow {
            label: "Profit Margin",
            projected: result.profit_margin,
            delta: margin_delta,
            direction: Direction::from_bool(result.profit_margin >= baseline.profit_margin),
        },
        cash_flow: ComparisonRow {
            label: "Cash Flow",
            projected: result.cash_flow,
            delta: result.cash_flow_change_pct,
            direction: Direction::from_bool(result.cash_flow_change_pct >= 0.0),
        },
        break_even_days: ComparisonRow {
            label: "Break-even Days",
            projected: result.break_even_days,
            delta: days_delta,
            direction: Direction::from_bool(result.break_even_days <= baseline.break_even_days),
        },
    }
}

/// Summarize the gains and the concerns a projection implies.
///
/// Concerns are only listed when profit or revenue went down; a later
/// break-even on its own does not raise the concerns panel.
pub fn impact_summary(baseline: &FinancialBaseline, result: &ScenarioResult) -> ImpactSummary {
    let mut summary = ImpactSummary::default();
    let profit_delta = result.profit - baseline.monthly_profit;
    let revenue_delta = result.revenue - baseline.monthly_revenue;
    let days_delta = result.break_even_days - baseline.break_even_days;

    if result.profit_change_pct > 0.0 {
        summary
            .positive
            .push(format!("Profit increased by {}", format_ringgit(profit_delta)));
    }
    if result.revenue_change_pct > 0.0 {
        summary
            .positive
            .push(format!("Revenue increased by {}", format_ringgit(revenue_delta)));
    }
    if days_delta < 0.0 {
        summary
            .positive
            .push(format!("Break-even achieved {} days faster", -days_delta));
    }

    if result.profit_change_pct < 0.0 || result.revenue_change_pct < 0.0 {
        if result.profit_change_pct < 0.0 {
            summary.concerns.push(format!(
                "Profit decreased by {}",
                format_ringgit(profit_delta.abs())
            ));
        }
        if result.revenue_change_pct < 0.0 {
            summary.concerns.push(format!(
                "Revenue decreased by {}",
                format_ringgit(revenue_delta.abs())
            ));
        }
        if days_delta > 0.0 {
            summary
                .concerns
                .push(format!("Break-even delayed by {} days", days_delta));
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_input_reproduces_baseline() {
        let b = FinancialBaseline::sample();
        let r = project(&b, &ScenarioInput::default());
        assert!(close(r.revenue, b.monthly_revenue));
        assert!(close(r.costs, b.monthly_costs));
        assert!(close(r.profit, b.monthly_profit));
        assert!(close(r.cash_flow, b.cash_flow));
        assert!(close(r.profit_margin, 20.0));
        assert_eq!(r.break_even_days, 24.0); // 68000 / 85000 × 30 = 24
        assert_eq!(r.revenue_change_pct, 0.0);
        assert_eq!(r.profit_change_pct, 0.0);
        assert_eq!(r.cash_flow_change_pct, 0.0);
    }

    #[test]
    fn marketing_spend_is_added_to_costs() {
        let b = FinancialBaseline::sample();
        let input = ScenarioInput {
            marketing_spend: 5_000.0,
            ..ScenarioInput::default()
        };
        let r = project(&b, &input);
        assert!(close(r.costs, 73_000.0));
        assert!(close(r.profit, 12_000.0));
        assert!(close(r.cash_flow, 40_800.0));
    }

    #[test]
    fn staff_and_price_do_not_move_the_projection() {
        let b = FinancialBaseline::sample();
        let plain = project(&b, &ScenarioInput::default());
        let with_ignored = project(
            &b,
            &ScenarioInput {
                staff_increase: 3.0,
                price_increase_pct: 10.0,
                ..ScenarioInput::default()
            },
        );
        assert_eq!(plain, with_ignored);
    }

    #[test]
    fn zero_revenue_is_not_guarded() {
        let b = FinancialBaseline::sample();
        let input = ScenarioInput {
            revenue_change_pct: -100.0,
            ..ScenarioInput::default()
        };
        let r = project(&b, &input);
        assert_eq!(r.revenue, 0.0);
        assert!(r.profit_margin.is_infinite());
        assert!(r.break_even_days.is_infinite());
    }

    #[test]
    fn comparison_directions_follow_baseline() {
        let b = FinancialBaseline::sample();
        let r = project(
            &b,
            &ScenarioInput {
                revenue_change_pct: 25.0,
                ..ScenarioInput::default()
            },
        );
        let cmp = compare(&b, &r);
        assert_eq!(cmp.revenue.direction, Direction::Favourable);
        assert_eq!(cmp.profit.direction, Direction::Favourable);
        assert_eq!(cmp.profit_margin.direction, Direction::Favourable);
        assert!(close(cmp.profit_margin.delta, 36.0 - 20.0));
        // 68000 / 106250 × 30 = 19.2 → 19 days vs 23 baseline
        assert_eq!(cmp.break_even_days.projected, 19.0);
        assert_eq!(cmp.break_even_days.delta, -4.0);
        assert_eq!(cmp.break_even_days.direction, Direction::Favourable);
    }

    #[test]
    fn zero_input_break_even_is_unfavourable_against_baseline() {
        // The baseline record says 23 days but its own figures round to 24.
        let b = FinancialBaseline::sample();
        let r = project(&b, &ScenarioInput::default());
        let cmp = compare(&b, &r);
        assert_eq!(cmp.break_even_days.delta, 1.0);
        assert_eq!(cmp.break_even_days.direction, Direction::Unfavourable);
    }

    #[test]
    fn impact_summary_lists_gains() {
        let b = FinancialBaseline::sample();
        let r = project(
            &b,
            &ScenarioInput {
                revenue_change_pct: 25.0,
                ..ScenarioInput::default()
            },
        );
        let s = impact_summary(&b, &r);
        assert_eq!(
            s.positive,
            vec![
                "Profit increased by RM 21,250".to_string(),
                "Revenue increased by RM 21,250".to_string(),
                "Break-even achieved 4 days faster".to_string(),
            ]
        );
        assert!(s.concerns.is_empty());
    }

    #[test]
    fn impact_summary_lists_concerns_on_decline() {
        let b = FinancialBaseline::sample();
        let r = project(
            &b,
            &ScenarioInput {
                revenue_change_pct: -10.0,
                ..ScenarioInput::default()
            },
        );
        // revenue 76500, profit 8500, break-even round(26.67) = 27
        let s = impact_summary(&b, &r);
        assert!(s.positive.is_empty());
        assert_eq!(
            s.concerns,
            vec![
                "Profit decreased by RM 8,500".to_string(),
                "Revenue decreased by RM 8,500".to_string(),
                "Break-even delayed by 4 days".to_string(),
            ]
        );
    }

    #[test]
    fn later_break_even_alone_raises_no_concern() {
        let b = FinancialBaseline::sample();
        let r = project(&b, &ScenarioInput::default());
        let s = impact_summary(&b, &r);
        assert!(s.positive.is_empty());
        assert!(s.concerns.is_empty());
    }
}
