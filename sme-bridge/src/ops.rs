//! Dashboard actions: everything an operator can do, as one closed enum.
//!
//! A request either parses into one of these variants or is rejected.
//! Every variant has a handler in `protocol`, so adding one means handling
//! it there too.

use std::fmt;

use serde::{Deserialize, Serialize};
use sme_core::bounds::ScenarioField;
use sme_core::profile::ProfileField;
use sme_core::reports::{ReportFormat, ReportPeriod, ReportSection};
use sme_core::visuals::{ChartMetric, ChartPeriod};
use sme_core::CoreError;

/// The pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Profile,
    Upload,
    Visualizations,
    Risks,
    Recommendations,
    Simulator,
    Export,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Profile,
        Page::Upload,
        Page::Visualizations,
        Page::Risks,
        Page::Recommendations,
        Page::Simulator,
        Page::Export,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Profile => "profile",
            Page::Upload => "upload",
            Page::Visualizations => "visualizations",
            Page::Risks => "risks",
            Page::Recommendations => "recommendations",
            Page::Simulator => "simulator",
            Page::Export => "export",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Profile => "Business Profile",
            Page::Upload => "Upload Data",
            Page::Visualizations => "Visualizations",
            Page::Risks => "Risk Analysis",
            Page::Recommendations => "Recommendations",
            Page::Simulator => "Scenario Simulator",
            Page::Export => "Export & Reports",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "page",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "params")]
pub enum DashboardAction {
    // ----------------------------------------
    // Navigation
    // ----------------------------------------
    Navigate { page: Page },

    // ----------------------------------------
    // Scenario simulator
    // ----------------------------------------
    /// Move one slider (or the marketing spend box).
    SetScenarioField { field: ScenarioField, value: f64 },
    /// Replace the whole input with a quick scenario. Does not run it.
    ApplyPreset { name: String },
    RunSimulation,
    /// Zero the input and discard the last result.
    ResetScenario,

    // ----------------------------------------
    // Recommendations
    // ----------------------------------------
    /// "all", a category name, or a button label such as "HR".
    SelectCategory { category: String },

    // ----------------------------------------
    // Visualizations
    // ----------------------------------------
    SelectPeriod { period: ChartPeriod },
    SelectMetric { metric: ChartMetric },

    // ----------------------------------------
    // Business profile
    // ----------------------------------------
    EditProfile,
    UpdateProfileField { field: ProfileField, value: String },
    SaveProfile,
    CancelEdit,

    // ----------------------------------------
    // Upload
    // ----------------------------------------
    /// Logged only; nothing is read.
    UploadFiles { names: Vec<String> },
    RemoveUpload { name: String },
    /// Header row of a data template as CSV.
    DownloadTemplate { name: String },

    // ----------------------------------------
    // Export
    // ----------------------------------------
    SelectFormat { format: ReportFormat },
    SelectReportPeriod { period: ReportPeriod },
    ToggleSection { section: ReportSection },
    ApplyReportTemplate { name: String },
    /// Logged only; no report is rendered.
    GenerateReport,
}

impl DashboardAction {
    /// Variant name, as it appears in the `op` tag.
    pub fn op_name(&self) -> &'static str {
        match self {
            DashboardAction::Navigate { .. } => "Navigate",
            DashboardAction::SetScenarioField { .. } => "SetScenarioField",
            DashboardAction::ApplyPreset { .. } => "ApplyPreset",
            DashboardAction::RunSimulation => "RunSimulation",
            DashboardAction::ResetScenario => "ResetScenario",
            DashboardAction::SelectCategory { .. } => "SelectCategory",
            DashboardAction::SelectPeriod { .. } => "SelectPeriod",
            DashboardAction::SelectMetric { .. } => "SelectMetric",
            DashboardAction::EditProfile => "EditProfile",
            DashboardAction::UpdateProfileField { .. } => "UpdateProfileField",
            DashboardAction::SaveProfile => "SaveProfile",
            DashboardAction::CancelEdit => "CancelEdit",
            DashboardAction::UploadFiles { .. } => "UploadFiles",
            DashboardAction::RemoveUpload { .. } => "RemoveUpload",
            DashboardAction::DownloadTemplate { .. } => "DownloadTemplate",
            DashboardAction::SelectFormat { .. } => "SelectFormat",
            DashboardAction::SelectReportPeriod { .. } => "SelectReportPeriod",
            DashboardAction::ToggleSection { .. } => "ToggleSection",
            DashboardAction::ApplyReportTemplate { .. } => "ApplyReportTemplate",
            DashboardAction::GenerateReport => "GenerateReport",
        }
    }

    /// Actions that leave the session exactly as it was.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            DashboardAction::UploadFiles { .. }
                | DashboardAction::DownloadTemplate { .. }
                | DashboardAction::GenerateReport
        )
    }

    pub fn is_mutation(&self) -> bool {
        !self.is_read_only()
    }

    /// The page whose state this action touches, if it belongs to one.
    pub fn page(&self) -> Option<Page> {
        match self {
            DashboardAction::Navigate { .. } => None,
            DashboardAction::SetScenarioField { .. }
            | DashboardAction::ApplyPreset { .. }
            | DashboardAction::RunSimulation
            | DashboardAction::ResetScenario => Some(Page::Simulator),
            DashboardAction::SelectCategory { .. } => Some(Page::Recommendations),
            DashboardAction::SelectPeriod { .. } | DashboardAction::SelectMetric { .. } => {
                Some(Page::Visualizations)
            }
            DashboardAction::EditProfile
            | DashboardAction::UpdateProfileField { .. }
            | DashboardAction::SaveProfile
            | DashboardAction::CancelEdit => Some(Page::Profile),
            DashboardAction::UploadFiles { .. }
            | DashboardAction::RemoveUpload { .. }
            | DashboardAction::DownloadTemplate { .. } => Some(Page::Upload),
            DashboardAction::SelectFormat { .. }
            | DashboardAction::SelectReportPeriod { .. }
            | DashboardAction::ToggleSection { .. }
            | DashboardAction::ApplyReportTemplate { .. }
            | DashboardAction::GenerateReport => Some(Page::Export),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DashboardAction::Navigate { page } => format!("Open {}", page.label()),
            DashboardAction::SetScenarioField { field, value } => {
                format!("Set {} = {}", field.key(), value)
            }
            DashboardAction::ApplyPreset { name } => format!("Apply preset '{name}'"),
            DashboardAction::RunSimulation => "Run simulation".into(),
            DashboardAction::ResetScenario => "Reset scenario".into(),
            DashboardAction::SelectCategory { category } => {
                format!("Show {category} recommendations")
            }
            DashboardAction::SelectPeriod { period } => format!("Chart {}", period.label()),
            DashboardAction::SelectMetric { metric } => format!("Chart metric {metric:?}"),
            DashboardAction::EditProfile => "Edit profile".into(),
            DashboardAction::UpdateProfileField { field, value } => {
                format!("Profile {field:?} = '{value}'")
            }
            DashboardAction::SaveProfile => "Save profile".into(),
            DashboardAction::CancelEdit => "Cancel profile edit".into(),
            DashboardAction::UploadFiles { names } => format!("Upload {} file(s)", names.len()),
            DashboardAction::RemoveUpload { name } => format!("Remove upload '{name}'"),
            DashboardAction::DownloadTemplate { name } => format!("Download template '{name}'"),
            DashboardAction::SelectFormat { format } => format!("Report format {format}"),
            DashboardAction::SelectReportPeriod { period } => format!("Report period {period:?}"),
            DashboardAction::ToggleSection { section } => {
                format!("Toggle section '{}'", section.label())
            }
            DashboardAction::ApplyReportTemplate { name } => {
                format!("Apply report template '{name}'")
            }
            DashboardAction::GenerateReport => "Generate report".into(),
        }
    }
}
