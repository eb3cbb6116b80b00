//! Quick scenarios offered by the simulator.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::ScenarioInput;

/// A named set of adjustments. Fields left as `None` are applied as zero.
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub revenue_change_pct: Option<f64>,
    pub cost_reduction_pct: Option<f64>,
    pub staff_increase: Option<f64>,
    pub marketing_spend: Option<f64>,
    pub price_increase_pct: Option<f64>,
}

impl ScenarioPreset {
    /// The full scenario input this preset stands for.
    pub fn input(&self) -> ScenarioInput {
        ScenarioInput {
            revenue_change_pct: self.revenue_change_pct.unwrap_or(0.0),
            cost_reduction_pct: self.cost_reduction_pct.unwrap_or(0.0),
            staff_increase: self.staff_increase.unwrap_or(0.0),
            marketing_spend: self.marketing_spend.unwrap_or(0.0),
            price_increase_pct: self.price_increase_pct.unwrap_or(0.0),
        }
    }
}

pub fn presets() -> Vec<ScenarioPreset> {
    vec![
        ScenarioPreset {
            name: "Ramadan Boost",
            description: "Seasonal promotion with increased marketing",
            revenue_change_pct: Some(25.0),
            cost_reduction_pct: Some(0.0),
            staff_increase: None,
            marketing_spend: Some(5_000.0),
            price_increase_pct: Some(0.0),
        },
        ScenarioPreset {
            name: "Cost Optimization",
            description: "Focus on reducing operational costs",
            revenue_change_pct: Some(0.0),
            cost_reduction_pct: Some(15.0),
            staff_increase: None,
            marketing_spend: Some(0.0),
            price_increase_pct: Some(0.0),
        },
        ScenarioPreset {
            name: "Expansion Plan",
            description: "Hire more staff and increase marketing",
            revenue_change_pct: Some(30.0),
            cost_reduction_pct: Some(0.0),
            staff_increase: Some(3.0),
            marketing_spend: Some(8_000.0),
            price_increase_pct: None,
        },
        ScenarioPreset {
            name: "Price Increase",
            description: "Strategic price increase with quality focus",
            revenue_change_pct: Some(12.0),
            cost_reduction_pct: Some(0.0),
            staff_increase: None,
            marketing_spend: Some(2_000.0),
            price_increase_pct: Some(10.0),
        },
    ]
}

/// Look a preset up by name, ignoring case and surrounding whitespace.
pub fn find_preset(name: &str) -> CoreResult<ScenarioPreset> {
    let wanted = name.trim();
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownOption {
            kind: "preset",
            value: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_in_range() {
        for preset in presets() {
            assert!(
                preset.input().validate().is_ok(),
                "preset {} out of range",
                preset.name
            );
        }
    }

    #[test]
    fn missing_fields_become_zero() {
        let expansion = find_preset("Expansion Plan").unwrap().input();
        assert_eq!(expansion.price_increase_pct, 0.0);
        assert_eq!(expansion.staff_increase, 3.0);
        assert_eq!(expansion.marketing_spend, 8_000.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find_preset("  ramadan boost ").is_ok());
        assert!(find_preset("Hyper Growth").is_err());
    }
}
