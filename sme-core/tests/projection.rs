//! Projection tests for sme-core.
//!
//! Checks that:
//! 1. A zero scenario reproduces the baseline
//! 2. Revenue and cost adjustments move the figures by the documented formulas
//! 3. Break-even days stay non-negative for positive revenue and costs
//! 4. Identical inputs always give identical results
//! 5. Presets project to in-range inputs with the expected figures

use sme_core::bounds::ScenarioField;
use sme_core::{find_preset, presets, project, CoreError, FinancialBaseline, ScenarioInput};

const EPS: f64 = 1e-9;

fn baseline() -> FinancialBaseline {
    FinancialBaseline::sample()
}

fn with_revenue(pct: f64) -> ScenarioInput {
    ScenarioInput {
        revenue_change_pct: pct,
        ..ScenarioInput::default()
    }
}

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

#[test]
fn zero_scenario_matches_baseline() {
    let b = baseline();
    let r = project(&b, &ScenarioInput::default());

    assert!((r.revenue - b.monthly_revenue).abs() < EPS);
    assert!((r.profit - b.monthly_profit).abs() < EPS);
    assert!((r.cash_flow - b.cash_flow).abs() < EPS);
    assert_eq!(r.revenue_change_pct, 0.0);
    assert_eq!(r.profit_change_pct, 0.0);
    assert_eq!(r.cash_flow_change_pct, 0.0);
}

#[test]
fn revenue_up_a_quarter() {
    let r = project(&baseline(), &with_revenue(25.0));

    assert!((r.revenue - 106_250.0).abs() < EPS);
    assert!((r.costs - 68_000.0).abs() < EPS);
    assert!((r.profit - 38_250.0).abs() < EPS);
    assert!((r.profit_change_pct - 125.0).abs() < EPS);
    assert!((r.revenue_change_pct - 25.0).abs() < EPS);
    // 45800 + (38250 - 17000)
    assert!((r.cash_flow - 67_050.0).abs() < EPS);
}

#[test]
fn cost_reduction_fifteen_percent() {
    let input = ScenarioInput {
        cost_reduction_pct: 15.0,
        ..ScenarioInput::default()
    };
    let r = project(&baseline(), &input);

    assert!((r.costs - 57_800.0).abs() < EPS);
    assert!((r.profit - 27_200.0).abs() < EPS);
    assert!((r.revenue - 85_000.0).abs() < EPS);
}

#[test]
fn break_even_is_non_negative_across_slider_range() {
    let b = baseline();
    for revenue in (-30..=50).step_by(5) {
        for cost in 0..=25 {
            let input = ScenarioInput {
                revenue_change_pct: revenue as f64,
                cost_reduction_pct: cost as f64,
                ..ScenarioInput::default()
            };
            let r = project(&b, &input);
            assert!(
                r.break_even_days >= 0.0,
                "revenue {revenue} cost {cost} gave {}",
                r.break_even_days
            );
            assert_eq!(r.break_even_days, r.break_even_days.round());
        }
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let b = baseline();
    let input = ScenarioInput {
        revenue_change_pct: 12.0,
        cost_reduction_pct: 7.0,
        marketing_spend: 2_500.0,
        staff_increase: 4.0,
        price_increase_pct: 3.0,
    };
    let first = project(&b, &input);
    for _ in 0..10 {
        assert_eq!(project(&b, &input), first);
    }
}

// ---------------------------------------------------------------------------
// Presets and bounds
// ---------------------------------------------------------------------------

#[test]
fn presets_are_valid_inputs() {
    for preset in presets() {
        preset
            .input()
            .validate()
            .unwrap_or_else(|e| panic!("{}: {e}", preset.name));
    }
}

#[test]
fn ramadan_boost_projection() {
    let input = find_preset("Ramadan Boost").unwrap().input();
    let r = project(&baseline(), &input);

    // 106250 revenue against 68000 + 5000 costs
    assert!((r.profit - 33_250.0).abs() < EPS);
    assert_eq!(r.break_even_days, 21.0);
}

#[test]
fn out_of_range_input_is_rejected() {
    let err = with_revenue(60.0).validate().unwrap_err();
    assert_eq!(
        err,
        CoreError::OutOfRange {
            field: ScenarioField::RevenueChange.key(),
            value: 60.0,
            min: -30.0,
            max: 50.0,
        }
    );

    let nan = ScenarioInput {
        marketing_spend: f64::NAN,
        ..ScenarioInput::default()
    };
    assert!(matches!(nan.validate(), Err(CoreError::NotFinite { .. })));
}
