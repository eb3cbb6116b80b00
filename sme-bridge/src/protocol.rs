//! Request parsing, dispatch and audit.
//!
//! 1. Raw JSON -> `DashboardRequest` (rejected if the action is unknown)
//! 2. Parameters validated against their ranges
//! 3. The action is applied to the page state it belongs to
//! 4. Every attempt, successful or not, lands in the audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sme_core::bounds::ScenarioField;
use sme_core::insights::CategoryFilter;
use sme_core::profile::ProfileField;
use sme_core::reports::{self, ReportFormat, ReportPeriod, ReportSection};
use sme_core::uploads;
use sme_core::visuals::{ChartMetric, ChartPeriod};
use sme_core::{
    compare, find_preset, impact_summary, project, BusinessProfile, ImpactSummary,
    ScenarioComparison, ScenarioInput, ScenarioResult, SelectOption,
};

use crate::error::{BridgeError, BridgeResult};
use crate::ops::{DashboardAction, Page};
use crate::state::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub action: DashboardAction,

    /// Echoed back. Filled in from the step counter when empty.
    #[serde(default)]
    pub request_id: String,

    /// Free-text note on why the action was sent.
    #[serde(default)]
    pub context: Option<String>,
}

impl DashboardRequest {
    pub fn new(action: DashboardAction) -> Self {
        Self {
            action,
            request_id: String::new(),
            context: None,
        }
    }
}

/// What an action did, typed per action.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionResult {
    Navigated {
        page: Page,
        label: &'static str,
    },
    ScenarioUpdated {
        field: ScenarioField,
        input: ScenarioInput,
    },
    PresetApplied {
        name: String,
        input: ScenarioInput,
    },
    Simulated {
        input: ScenarioInput,
        result: ScenarioResult,
        comparison: ScenarioComparison,
        impact: ImpactSummary,
    },
    ScenarioReset,
    CategorySelected {
        category: CategoryFilter,
    },
    ChartUpdated {
        period: ChartPeriod,
        metric: ChartMetric,
    },
    ProfileEditing {
        draft: BusinessProfile,
    },
    ProfileSaved {
        profile: BusinessProfile,
    },
    ProfileEditCancelled {
        profile: BusinessProfile,
    },
    UploadsReceived {
        names: Vec<String>,
    },
    UploadRemoved {
        name: String,
        remaining: usize,
    },
    TemplateCsv {
        filename: &'static str,
        csv: String,
    },
    ReportConfigured {
        format: ReportFormat,
        period: ReportPeriod,
        sections: Vec<ReportSection>,
    },
    ReportRequested {
        format: ReportFormat,
        period: ReportPeriod,
        sections: Vec<ReportSection>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub result: ActionResult,
    pub request_id: String,
    pub read_only: bool,
    /// Page shown after the action.
    pub page: Page,
    pub step: u64,
}

/// Audit log entry, one per processed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub step: u64,
    pub timestamp: DateTime<Utc>,
    pub request_id: String,
    pub action: String,
    pub was_read_only: bool,
    pub success: bool,
    pub error: Option<String>,
}

/// One operator's dashboard: the page on screen, each page's state, and
/// the audit trail of everything sent to it.
pub struct Session {
    pub page: Page,
    pub simulator: SimulatorState,
    pub recommendations: RecommendationsState,
    pub visualizations: VisualizationState,
    pub profile: ProfileState,
    pub uploads: UploadState,
    pub export: ExportState,

    pub audit_log: Vec<AuditEntry>,

    step: u64,
}

impl Session {
    pub fn new() -> Self {
        Session {
            page: Page::default(),
            simulator: SimulatorState::default(),
            recommendations: RecommendationsState::default(),
            visualizations: VisualizationState::default(),
            profile: ProfileState::default(),
            uploads: UploadState::default(),
            export: ExportState::default(),
            audit_log: Vec::new(),
            step: 0,
        }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Parse one raw JSON request and validate its parameters.
    pub fn parse_request(&self, raw_json: &str) -> BridgeResult<DashboardRequest> {
        let request: DashboardRequest = serde_json::from_str(raw_json).map_err(|e| {
            BridgeError::UnknownAction(format!("Failed to parse request: {}", e))
        })?;

        self.validate_action(&request.action)?;

        Ok(request)
    }

    /// Parse a JSON array of requests. The first bad entry fails the batch.
    pub fn parse_requests(&self, raw_json: &str) -> BridgeResult<Vec<DashboardRequest>> {
        let requests: Vec<DashboardRequest> = serde_json::from_str(raw_json).map_err(|e| {
            BridgeError::UnknownAction(format!("Failed to parse request list: {}", e))
        })?;

        for request in &requests {
            self.validate_action(&request.action)?;
        }

        Ok(requests)
    }

    /// Checks that need no session state.
    pub fn validate_action(&self, action: &DashboardAction) -> BridgeResult<()> {
        match action {
            DashboardAction::SetScenarioField { field, value } => {
                field
                    .check(*value)
                    .map_err(|e| BridgeError::InvalidParameter {
                        action: action.op_name().into(),
                        reason: e.to_string(),
                    })?;
            }
            DashboardAction::SelectCategory { category } => {
                category
                    .parse::<CategoryFilter>()
                    .map_err(|e| BridgeError::InvalidParameter {
                        action: action.op_name().into(),
                        reason: e.to_string(),
                    })?;
            }
            DashboardAction::UploadFiles { names } => {
                if names.is_empty() || names.iter().any(|n| n.trim().is_empty()) {
                    return Err(BridgeError::InvalidParameter {
                        action: action.op_name().into(),
                        reason: "file names must be non-empty".into(),
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply a request and record it in the audit log.
    pub fn process(&mut self, request: &DashboardRequest) -> BridgeResult<DashboardResponse> {
        self.step += 1;
        let request_id = if request.request_id.is_empty() {
            format!("req-{}", self.step)
        } else {
            request.request_id.clone()
        };

        let action = &request.action;
        let result = self
            .validate_action(action)
            .and_then(|()| self.dispatch(action));

        if let Err(err) = &result {
            log::warn!("request_id={} {} failed: {}", request_id, action.op_name(), err);
        }

        self.audit_log.push(AuditEntry {
            step: self.step,
            timestamp: Utc::now(),
            request_id: request_id.clone(),
            action: action.describe(),
            was_read_only: action.is_read_only(),
            success: result.is_ok(),
            error: result.as_ref().err().map(|e| e.to_string()),
        });

        Ok(DashboardResponse {
            result: result?,
            request_id,
            read_only: action.is_read_only(),
            page: self.page,
            step: self.step,
        })
    }

    /// The audit log as pretty JSON.
    pub fn audit_json(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string_pretty(&self.audit_log)?)
    }

    fn dispatch(&mut self, action: &DashboardAction) -> BridgeResult<ActionResult> {
        match action {
            DashboardAction::Navigate { page } => {
                self.page = *page;
                Ok(ActionResult::Navigated {
                    page: *page,
                    label: page.label(),
                })
            }

            DashboardAction::SetScenarioField { field, value } => {
                self.simulator.input.set(*field, *value)?;
                self.simulator.active_preset = None;
                Ok(ActionResult::ScenarioUpdated {
                    field: *field,
                    input: self.simulator.input,
                })
            }
            DashboardAction::ApplyPreset { name } => {
                let preset = find_preset(name)?;
                let input = preset.input();
                input.validate()?;
                self.simulator.input = input;
                self.simulator.active_preset = Some(preset.name.to_string());
                Ok(ActionResult::PresetApplied {
                    name: preset.name.to_string(),
                    input,
                })
            }
            DashboardAction::RunSimulation => {
                let sim = &mut self.simulator;
                sim.input.validate()?;
                let result = project(&sim.baseline, &sim.input);
                sim.result = Some(result);
                Ok(ActionResult::Simulated {
                    input: sim.input,
                    result,
                    comparison: compare(&sim.baseline, &result),
                    impact: impact_summary(&sim.baseline, &result),
                })
            }
            DashboardAction::ResetScenario => {
                self.simulator.reset();
                Ok(ActionResult::ScenarioReset)
            }

            DashboardAction::SelectCategory { category } => {
                let category: CategoryFilter = category.parse()?;
                self.recommendations.category = category;
                Ok(ActionResult::CategorySelected { category })
            }

            DashboardAction::SelectPeriod { period } => {
                self.visualizations.period = *period;
                Ok(self.chart_updated())
            }
            DashboardAction::SelectMetric { metric } => {
                self.visualizations.metric = *metric;
                Ok(self.chart_updated())
            }

            DashboardAction::EditProfile => {
                self.profile.begin_edit();
                Ok(ActionResult::ProfileEditing {
                    draft: self.profile.current().clone(),
                })
            }
            DashboardAction::UpdateProfileField { field, value } => {
                self.update_profile_field(*field, value)
            }
            DashboardAction::SaveProfile => {
                let profile = self.profile.save()?.clone();
                log::info!(
                    "profile saved: {} ({}, {} employees)",
                    profile.company_name,
                    profile.location.label(),
                    profile.employees
                );
                Ok(ActionResult::ProfileSaved { profile })
            }
            DashboardAction::CancelEdit => {
                if !self.profile.cancel() {
                    return Err(BridgeError::NotEditing);
                }
                Ok(ActionResult::ProfileEditCancelled {
                    profile: self.profile.saved.clone(),
                })
            }

            DashboardAction::UploadFiles { names } => {
                for name in names {
                    log::info!("upload received: {}", name);
                }
                Ok(ActionResult::UploadsReceived {
                    names: names.clone(),
                })
            }
            DashboardAction::RemoveUpload { name } => {
                let removed = self.uploads.remove(name)?;
                Ok(ActionResult::UploadRemoved {
                    name: removed.name,
                    remaining: self.uploads.files.len(),
                })
            }
            DashboardAction::DownloadTemplate { name } => {
                let template = uploads::find_template(&self.uploads.templates, name)
                    .map_err(|_| BridgeError::UnknownTemplate(name.clone()))?;
                Ok(ActionResult::TemplateCsv {
                    filename: template.filename,
                    csv: template.header_csv()?,
                })
            }

            DashboardAction::SelectFormat { format } => {
                self.export.config.format = *format;
                Ok(self.report_configured())
            }
            DashboardAction::SelectReportPeriod { period } => {
                self.export.config.period = *period;
                Ok(self.report_configured())
            }
            DashboardAction::ToggleSection { section } => {
                self.export.config.toggle(*section);
                Ok(self.report_configured())
            }
            DashboardAction::ApplyReportTemplate { name } => {
                let template = reports::find_report_template(&self.export.templates, name)
                    .map_err(|_| BridgeError::UnknownTemplate(name.clone()))?
                    .clone();
                self.export.config.apply_template(&template);
                Ok(self.report_configured())
            }
            DashboardAction::GenerateReport => {
                let config = &self.export.config;
                let sections = config.selected_sections();
                if sections.is_empty() {
                    return Err(BridgeError::InvalidParameter {
                        action: action.op_name().into(),
                        reason: "select at least one report section".into(),
                    });
                }
                log::info!(
                    "report requested: format={} period={:?} sections={}",
                    config.format,
                    config.period,
                    sections.len()
                );
                Ok(ActionResult::ReportRequested {
                    format: config.format,
                    period: config.period,
                    sections,
                })
            }
        }
    }

    fn update_profile_field(
        &mut self,
        field: ProfileField,
        value: &str,
    ) -> BridgeResult<ActionResult> {
        let draft = self.profile.draft_mut()?;
        // parse into a scratch copy so a bad value leaves the draft intact
        let mut edited = draft.clone();
        edited.set_field(field, value)?;
        *draft = edited;
        Ok(ActionResult::ProfileEditing {
            draft: draft.clone(),
        })
    }

    fn chart_updated(&self) -> ActionResult {
        ActionResult::ChartUpdated {
            period: self.visualizations.period,
            metric: self.visualizations.metric,
        }
    }

    fn report_configured(&self) -> ActionResult {
        let config = &self.export.config;
        ActionResult::ReportConfigured {
            format: config.format,
            period: config.period,
            sections: config.selected_sections(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sme_core::types::Direction;

    fn make_request(action: DashboardAction) -> DashboardRequest {
        DashboardRequest {
            action,
            request_id: "test-001".into(),
            context: None,
        }
    }

    fn run(session: &mut Session, action: DashboardAction) -> BridgeResult<DashboardResponse> {
        session.process(&make_request(action))
    }

    #[test]
    fn test_parse_valid_request() {
        let session = Session::new();
        let json = r#"{
            "action": {"op": "Navigate", "params": {"page": "risks"}},
            "request_id": "req-001",
            "context": "morning check"
        }"#;
        let req = session.parse_request(json).unwrap();
        assert_eq!(req.request_id, "req-001");
    }

    #[test]
    fn test_reject_invalid_json() {
        let session = Session::new();
        assert!(matches!(
            session.parse_request("not json at all"),
            Err(BridgeError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_reject_out_of_range_slider() {
        let session = Session::new();
        let json = r#"{"action": {"op": "SetScenarioField",
                       "params": {"field": "revenue_change", "value": 80}}}"#;
        assert!(matches!(
            session.parse_request(json),
            Err(BridgeError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_reject_unknown_category() {
        let session = Session::new();
        let result = session.validate_action(&DashboardAction::SelectCategory {
            category: "Astrology".into(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_request_list() {
        let session = Session::new();
        let json = r#"[
            {"action": {"op": "ApplyPreset", "params": {"name": "Ramadan Boost"}}},
            {"action": {"op": "RunSimulation"}}
        ]"#;
        let requests = session.parse_requests(json).unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].request_id.is_empty());
    }

    #[test]
    fn test_navigation_changes_page() {
        let mut session = Session::new();
        assert_eq!(session.page, Page::Dashboard);
        let resp = run(&mut session, DashboardAction::Navigate { page: Page::Simulator }).unwrap();
        assert_eq!(resp.page, Page::Simulator);
        assert_eq!(session.page, Page::Simulator);
    }

    #[test]
    fn test_preset_then_run() {
        let mut session = Session::new();
        run(
            &mut session,
            DashboardAction::ApplyPreset {
                name: "ramadan boost".into(),
            },
        )
        .unwrap();
        assert_eq!(session.simulator.input.revenue_change_pct, 25.0);
        assert_eq!(session.simulator.input.marketing_spend, 5_000.0);
        assert!(session.simulator.result.is_none());

        let resp = run(&mut session, DashboardAction::RunSimulation).unwrap();
        match resp.result {
            ActionResult::Simulated {
                result, comparison, ..
            } => {
                assert!((result.revenue - 106_250.0).abs() < 1e-6);
                assert!((result.profit - 33_250.0).abs() < 1e-6);
                assert_eq!(comparison.profit.direction, Direction::Favourable);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(session.simulator.result.is_some());
    }

    #[test]
    fn test_slider_clears_active_preset() {
        let mut session = Session::new();
        run(
            &mut session,
            DashboardAction::ApplyPreset {
                name: "Cost Optimization".into(),
            },
        )
        .unwrap();
        assert_eq!(session.simulator.active_preset.as_deref(), Some("Cost Optimization"));
        run(
            &mut session,
            DashboardAction::SetScenarioField {
                field: ScenarioField::RevenueChange,
                value: 5.0,
            },
        )
        .unwrap();
        assert!(session.simulator.active_preset.is_none());
        assert_eq!(session.simulator.input.cost_reduction_pct, 15.0);
    }

    #[test]
    fn test_reset_clears_input_and_result() {
        let mut session = Session::new();
        run(
            &mut session,
            DashboardAction::SetScenarioField {
                field: ScenarioField::CostReduction,
                value: 10.0,
            },
        )
        .unwrap();
        run(&mut session, DashboardAction::RunSimulation).unwrap();
        run(&mut session, DashboardAction::ResetScenario).unwrap();
        assert!(session.simulator.input.is_zero());
        assert!(session.simulator.result.is_none());
    }

    #[test]
    fn test_unknown_preset_is_audited_as_failure() {
        let mut session = Session::new();
        let result = run(
            &mut session,
            DashboardAction::ApplyPreset {
                name: "Moon Landing".into(),
            },
        );
        assert!(result.is_err());
        assert_eq!(session.audit_log.len(), 1);
        assert!(!session.audit_log[0].success);
        assert!(session.audit_log[0].error.is_some());
        assert!(session.simulator.input.is_zero());
    }

    #[test]
    fn test_profile_update_requires_edit_mode() {
        let mut session = Session::new();
        let result = run(
            &mut session,
            DashboardAction::UpdateProfileField {
                field: ProfileField::CompanyName,
                value: "Kopi Baru".into(),
            },
        );
        assert!(matches!(result, Err(BridgeError::NotEditing)));

        run(&mut session, DashboardAction::EditProfile).unwrap();
        run(
            &mut session,
            DashboardAction::UpdateProfileField {
                field: ProfileField::CompanyName,
                value: "Kopi Baru".into(),
            },
        )
        .unwrap();
        run(&mut session, DashboardAction::SaveProfile).unwrap();
        assert_eq!(session.profile.saved.company_name, "Kopi Baru");
        assert!(!session.profile.is_editing());
    }

    #[test]
    fn test_bad_profile_value_keeps_draft() {
        let mut session = Session::new();
        run(&mut session, DashboardAction::EditProfile).unwrap();
        let result = run(
            &mut session,
            DashboardAction::UpdateProfileField {
                field: ProfileField::Employees,
                value: "a dozen".into(),
            },
        );
        assert!(result.is_err());
        assert_eq!(session.profile.current().employees, 12);
        assert!(session.profile.is_editing());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = Session::new();
        run(&mut session, DashboardAction::EditProfile).unwrap();
        run(
            &mut session,
            DashboardAction::UpdateProfileField {
                field: ProfileField::Employees,
                value: "40".into(),
            },
        )
        .unwrap();
        run(&mut session, DashboardAction::CancelEdit).unwrap();
        assert_eq!(session.profile.saved.employees, 12);
        assert!(run(&mut session, DashboardAction::CancelEdit).is_err());
    }

    #[test]
    fn test_report_template_sets_sections_and_format() {
        let mut session = Session::new();
        run(
            &mut session,
            DashboardAction::SelectReportPeriod {
                period: ReportPeriod::Quarterly,
            },
        )
        .unwrap();
        let resp = run(
            &mut session,
            DashboardAction::ApplyReportTemplate {
                name: "Consulting Presentation".into(),
            },
        )
        .unwrap();
        match resp.result {
            ActionResult::ReportConfigured {
                format,
                period,
                sections,
            } => {
                assert_eq!(format, ReportFormat::PowerPoint);
                assert_eq!(period, ReportPeriod::Quarterly);
                assert_eq!(
                    sections,
                    vec![
                        ReportSection::Overview,
                        ReportSection::Metrics,
                        ReportSection::Visualizations,
                        ReportSection::Recommendations,
                    ]
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_generate_report_needs_a_section() {
        let mut session = Session::new();
        for section in session.export.config.selected_sections() {
            run(&mut session, DashboardAction::ToggleSection { section }).unwrap();
        }
        let result = run(&mut session, DashboardAction::GenerateReport);
        assert!(matches!(result, Err(BridgeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_download_template_csv() {
        let mut session = Session::new();
        let resp = run(
            &mut session,
            DashboardAction::DownloadTemplate {
                name: "payroll_template.csv".into(),
            },
        )
        .unwrap();
        assert!(resp.read_only);
        match resp.result {
            ActionResult::TemplateCsv { filename, csv } => {
                assert_eq!(filename, "payroll_template.csv");
                assert_eq!(csv, "Employee ID,Salary,Benefits,Department\n");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            run(
                &mut session,
                DashboardAction::DownloadTemplate {
                    name: "nope".into()
                }
            ),
            Err(BridgeError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_audit_log_populated() {
        let mut session = Session::new();
        run(&mut session, DashboardAction::GenerateReport).unwrap();
        run(
            &mut session,
            DashboardAction::SelectCategory {
                category: "HR".into(),
            },
        )
        .unwrap();

        assert_eq!(session.audit_log.len(), 2);
        assert!(session.audit_log[0].was_read_only);
        assert!(session.audit_log[0].success);
        assert_eq!(session.audit_log[1].step, 2);
        assert_eq!(session.audit_log[1].action, "Show HR recommendations");

        let json = session.audit_json().unwrap();
        assert!(json.contains("Generate report"));
    }

    #[test]
    fn test_empty_request_id_is_filled_in() {
        let mut session = Session::new();
        let resp = session
            .process(&DashboardRequest::new(DashboardAction::RunSimulation))
            .unwrap();
        assert_eq!(resp.request_id, "req-1");
        assert_eq!(resp.step, 1);
    }
}
