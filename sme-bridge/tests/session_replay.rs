use sme_bridge::{ActionResult, BridgeError, DashboardAction, DashboardRequest, Page, Session};
use sme_core::bounds::ScenarioField;
use sme_core::insights::{CategoryFilter, RecommendationCategory};
use sme_core::reports::ReportFormat;
use sme_core::visuals::{ChartMetric, ChartPeriod};

const SCRIPT: &str = r#"[
    {"action": {"op": "Navigate", "params": {"page": "simulator"}}, "request_id": "a1"},
    {"action": {"op": "ApplyPreset", "params": {"name": "Price Increase"}}},
    {"action": {"op": "SetScenarioField", "params": {"field": "cost_reduction", "value": 10}}},
    {"action": {"op": "RunSimulation"}},
    {"action": {"op": "Navigate", "params": {"page": "recommendations"}}},
    {"action": {"op": "SelectCategory", "params": {"category": "cost-reduction"}}},
    {"action": {"op": "SelectPeriod", "params": {"period": "3months"}}},
    {"action": {"op": "SelectMetric", "params": {"metric": "profit"}}},
    {"action": {"op": "SelectFormat", "params": {"format": "excel"}}},
    {"action": {"op": "RemoveUpload", "params": {"name": "expenses_q3_2024.xlsx"}}}
]"#;

#[test]
fn replayed_script_drives_every_page() {
    let mut session = Session::new();
    let requests = session.parse_requests(SCRIPT).unwrap();
    assert_eq!(requests.len(), 10);

    let mut simulated = None;
    for request in &requests {
        let response = session.process(request).unwrap();
        if let ActionResult::Simulated { result, .. } = response.result {
            simulated = Some(result);
        }
    }

    // Price Increase: revenue +12, marketing 2000; then a 10% cost cut
    let result = simulated.unwrap();
    assert!((result.revenue - 95_200.0).abs() < 1e-6);
    assert!((result.costs - (68_000.0 * 0.9 + 2_000.0)).abs() < 1e-6);
    assert!((result.profit - (95_200.0 - 63_200.0)).abs() < 1e-6);

    assert_eq!(session.page, Page::Recommendations);
    assert_eq!(
        session.recommendations.category,
        CategoryFilter::Only(RecommendationCategory::CostReduction)
    );
    assert_eq!(session.visualizations.period, ChartPeriod::ThreeMonths);
    assert_eq!(session.visualizations.metric, ChartMetric::Profit);
    assert_eq!(session.export.config.format, ReportFormat::Excel);
    assert_eq!(session.uploads.files.len(), 1);

    assert_eq!(session.audit_log.len(), 10);
    assert_eq!(session.audit_log[0].request_id, "a1");
    assert_eq!(session.audit_log[1].request_id, "req-2");
    assert!(session.audit_log.iter().all(|e| e.success));
}

#[test]
fn bad_entry_rejects_whole_script() {
    let session = Session::new();
    let script = r#"[
        {"action": {"op": "RunSimulation"}},
        {"action": {"op": "SetScenarioField", "params": {"field": "staff_increase", "value": 11}}}
    ]"#;
    assert!(matches!(
        session.parse_requests(script),
        Err(BridgeError::InvalidParameter { .. })
    ));
}

#[test]
fn unknown_op_is_unknown_action() {
    let session = Session::new();
    let script = r#"[{"action": {"op": "Teleport"}}]"#;
    assert!(matches!(
        session.parse_requests(script),
        Err(BridgeError::UnknownAction(_))
    ));
}

#[test]
fn responses_serialize_with_kind_tag() {
    let mut session = Session::new();
    let request = session
        .parse_request(r#"{"action": {"op": "ApplyPreset", "params": {"name": "Expansion Plan"}}}"#)
        .unwrap();
    let response = session.process(&request).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"]["kind"], "preset_applied");
    assert_eq!(json["result"]["input"]["staff_increase"], 3.0);
    assert_eq!(json["result"]["input"]["price_increase_pct"], 0.0);
    assert_eq!(json["page"], "dashboard");
}

#[test]
fn fractional_slider_step_is_rejected_and_audited() {
    let mut session = Session::new();
    let request = DashboardRequest::new(DashboardAction::SetScenarioField {
        field: ScenarioField::RevenueChange,
        value: 12.5,
    });
    assert!(matches!(
        session.process(&request),
        Err(BridgeError::InvalidParameter { .. })
    ));
    assert_eq!(session.simulator.input.revenue_change_pct, 0.0);
    assert_eq!(session.audit_log.len(), 1);
    assert!(!session.audit_log[0].success);
}
