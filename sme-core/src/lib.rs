//! Data model, scenario projector and sample datasets for the SME analytics
//! dashboard.

pub mod bounds;
pub mod dataset;
pub mod error;
pub mod format;
pub mod insights;
pub mod math;
pub mod presets;
pub mod profile;
pub mod projector;
pub mod reports;
pub mod types;
pub mod uploads;
pub mod visuals;

pub use error::{CoreError, CoreResult};
pub use presets::{find_preset, presets, ScenarioPreset};
pub use profile::{BusinessProfile, SelectOption};
pub use projector::{compare, impact_summary, project};
pub use types::{
    ComparisonRow, Direction, FinancialBaseline, ImpactSummary, ScenarioComparison,
    ScenarioInput, ScenarioResult,
};
