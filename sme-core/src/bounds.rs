//! Centralized input bounds for the scenario simulator.
//!
//! These mirror the ranges of the simulator controls. The projector never
//! checks them; inputs are validated before they are stored in a session.

use crate::error::{CoreError, CoreResult};
use crate::types::ScenarioInput;

/// Days in the month used to express break-even as a day count.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Revenue change slider, in percent.
pub const REVENUE_CHANGE_MIN: f64 = -30.0;
pub const REVENUE_CHANGE_MAX: f64 = 50.0;

/// Cost reduction slider, in percent.
pub const COST_REDUCTION_MIN: f64 = 0.0;
pub const COST_REDUCTION_MAX: f64 = 25.0;

/// Additional staff slider, in people.
pub const STAFF_INCREASE_MIN: f64 = 0.0;
pub const STAFF_INCREASE_MAX: f64 = 10.0;

/// Price increase slider, in percent.
pub const PRICE_INCREASE_MIN: f64 = 0.0;
pub const PRICE_INCREASE_MAX: f64 = 20.0;

/// Additional marketing spend (RM). Free numeric entry with no upper bound.
pub const MARKETING_SPEND_MIN: f64 = 0.0;
pub const MARKETING_SPEND_MAX: f64 = f64::INFINITY;

/// The editable scenario fields, in the order the simulator shows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioField {
    RevenueChange,
    CostReduction,
    MarketingSpend,
    StaffIncrease,
    PriceIncrease,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 5] = [
        ScenarioField::RevenueChange,
        ScenarioField::CostReduction,
        ScenarioField::MarketingSpend,
        ScenarioField::StaffIncrease,
        ScenarioField::PriceIncrease,
    ];

    /// Stable field name used in errors and JSON.
    pub fn key(self) -> &'static str {
        match self {
            ScenarioField::RevenueChange => "revenue_change_pct",
            ScenarioField::CostReduction => "cost_reduction_pct",
            ScenarioField::MarketingSpend => "marketing_spend",
            ScenarioField::StaffIncrease => "staff_increase",
            ScenarioField::PriceIncrease => "price_increase_pct",
        }
    }

    /// Inclusive (min, max) range for this field.
    pub fn range(self) -> (f64, f64) {
        match self {
            ScenarioField::RevenueChange => (REVENUE_CHANGE_MIN, REVENUE_CHANGE_MAX),
            ScenarioField::CostReduction => (COST_REDUCTION_MIN, COST_REDUCTION_MAX),
            ScenarioField::MarketingSpend => (MARKETING_SPEND_MIN, MARKETING_SPEND_MAX),
            ScenarioField::StaffIncrease => (STAFF_INCREASE_MIN, STAFF_INCREASE_MAX),
            ScenarioField::PriceIncrease => (PRICE_INCREASE_MIN, PRICE_INCREASE_MAX),
        }
    }

    /// Whether the field is a slider moving in whole steps.
    pub fn is_slider(self) -> bool {
        !matches!(self, ScenarioField::MarketingSpend)
    }

    /// Check a single value against this field's range and step.
    pub fn check(self, value: f64) -> CoreResult<f64> {
        if !value.is_finite() {
            return Err(CoreError::NotFinite {
                field: self.key(),
                value,
            });
        }
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(CoreError::OutOfRange {
                field: self.key(),
                value,
                min,
                max,
            });
        }
        if self.is_slider() && value.fract() != 0.0 {
            return Err(CoreError::OffStep {
                field: self.key(),
                value,
            });
        }
        Ok(value)
    }
}

impl std::str::FromStr for ScenarioField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "scenario field",
                value: s.to_string(),
            })
    }
}

impl ScenarioInput {
    /// Validate every field, reporting the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        for field in ScenarioField::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }

    pub fn get(&self, field: ScenarioField) -> f64 {
        match field {
            ScenarioField::RevenueChange => self.revenue_change_pct,
            ScenarioField::CostReduction => self.cost_reduction_pct,
            ScenarioField::MarketingSpend => self.marketing_spend,
            ScenarioField::StaffIncrease => self.staff_increase,
            ScenarioField::PriceIncrease => self.price_increase_pct,
        }
    }

    /// Set a field after checking it against its range.
    pub fn set(&mut self, field: ScenarioField, value: f64) -> CoreResult<()> {
        let value = field.check(value)?;
        match field {
            ScenarioField::RevenueChange => self.revenue_change_pct = value,
            ScenarioField::CostReduction => self.cost_reduction_pct = value,
            ScenarioField::MarketingSpend => self.marketing_spend = value,
            ScenarioField::StaffIncrease => self.staff_increase = value,
            ScenarioField::PriceIncrease => self.price_increase_pct = value,
        }
        Ok(())
    }
}
