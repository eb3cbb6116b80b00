//! Per-page session state.
//!
//! Each page keeps its own selections. Leaving a page and coming back
//! finds them as they were.

use serde::Serialize;
use sme_core::dataset;
use sme_core::insights::CategoryFilter;
use sme_core::reports::{RecentReport, ReportConfig, ReportTemplate};
use sme_core::uploads::{DataTemplate, UploadedFile};
use sme_core::visuals::{ChartMetric, ChartPeriod};
use sme_core::{BusinessProfile, FinancialBaseline, ScenarioInput, ScenarioResult};

use crate::error::{BridgeError, BridgeResult};

/// Scenario simulator inputs and the last projection.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatorState {
    pub baseline: FinancialBaseline,
    pub input: ScenarioInput,
    /// Set by `RunSimulation`, cleared by `ResetScenario`.
    pub result: Option<ScenarioResult>,
    /// Name of the last preset applied, if the input still came from one.
    pub active_preset: Option<String>,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            baseline: FinancialBaseline::sample(),
            input: ScenarioInput::default(),
            result: None,
            active_preset: None,
        }
    }
}

impl SimulatorState {
    pub fn reset(&mut self) {
        self.input = ScenarioInput::default();
        self.result = None;
        self.active_preset = None;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationsState {
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VisualizationState {
    pub period: ChartPeriod,
    pub metric: ChartMetric,
}

/// The saved profile plus, while editing, the working copy.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileState {
    pub saved: BusinessProfile,
    pub draft: Option<BusinessProfile>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            saved: BusinessProfile::sample(),
            draft: None,
        }
    }
}

impl ProfileState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Start editing from the saved profile. Editing twice keeps the
    /// existing draft.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    pub fn draft_mut(&mut self) -> BridgeResult<&mut BusinessProfile> {
        self.draft.as_mut().ok_or(BridgeError::NotEditing)
    }

    /// Promote the draft and leave edit mode.
    pub fn save(&mut self) -> BridgeResult<&BusinessProfile> {
        let draft = self.draft.take().ok_or(BridgeError::NotEditing)?;
        self.saved = draft;
        Ok(&self.saved)
    }

    /// Drop the draft. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// What the form shows: the draft while editing, else the saved profile.
    pub fn current(&self) -> &BusinessProfile {
        self.draft.as_ref().unwrap_or(&self.saved)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadState {
    pub files: Vec<UploadedFile>,
    pub templates: Vec<DataTemplate>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self {
            files: dataset::uploaded_files(),
            templates: dataset::data_templates(),
        }
    }
}

impl UploadState {
    /// Remove a listed file by name, ignoring case.
    pub fn remove(&mut self, name: &str) -> BridgeResult<UploadedFile> {
        let wanted = name.trim();
        let index = self
            .files
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BridgeError::UnknownUpload(name.to_string()))?;
        Ok(self.files.remove(index))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportState {
    pub config: ReportConfig,
    pub templates: Vec<ReportTemplate>,
    pub recent: Vec<RecentReport>,
}

impl Default for ExportState {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
            templates: dataset::report_templates(),
            recent: dataset::recent_reports(),
        }
    }
}
