use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use sme_bridge::{
    ActionResult, AuditEntry, DashboardAction, DashboardRequest, DashboardResponse, Session,
};

mod cli;
mod config;
mod error;
mod render;
mod views;

use cli::{parse_args, CliArgs, USAGE};
use config::DashboardConfig;
use error::{CliError, CliResult};
use views::{build_view, PageView};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PageJson<'a> {
    generated_at: String,
    label: &'static str,
    render_ms: u128,
    view: &'a PageView,
}

#[derive(Serialize)]
struct ReplayOutcome {
    request_id: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<DashboardResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ReplayJson<'a> {
    responses: Vec<ReplayOutcome>,
    audit: &'a [AuditEntry],
    page: PageJson<'a>,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sme_dashboard=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then flags on top.
fn resolve_config(args: &CliArgs) -> CliResult<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(severity) = args.severity {
        config.risk_min_severity = severity;
    }
    if let Some(top) = args.top {
        config.risk_top_k = top;
    }
    if !args.risk_categories.is_empty() {
        config.risk_categories = args.risk_categories.clone();
    }
    if let Some(category) = args.category {
        config.recommendation_category = category;
    }
    if let Some(period) = args.period {
        config.visualization_period = period;
    }
    Ok(config)
}

/// The requests a set of flags stands for, in the order an operator
/// would click through them.
fn flag_requests(args: &CliArgs) -> Vec<DashboardRequest> {
    let mut actions = vec![DashboardAction::Navigate { page: args.page }];
    if let Some(name) = &args.preset {
        actions.push(DashboardAction::ApplyPreset { name: name.clone() });
    }
    for (field, value) in &args.scenario {
        actions.push(DashboardAction::SetScenarioField {
            field: *field,
            value: *value,
        });
    }
    if args.wants_simulation() {
        actions.push(DashboardAction::RunSimulation);
    }
    actions
        .into_iter()
        .enumerate()
        .map(|(i, action)| DashboardRequest {
            action,
            request_id: format!("cli-{}", i + 1),
            context: None,
        })
        .collect()
}

fn new_session(config: &DashboardConfig) -> Session {
    let mut session = Session::new();
    session.recommendations.category = config.recommendation_category;
    session.visualizations.period = config.visualization_period;
    session.visualizations.metric = config.visualization_metric;
    session
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn replay_line(outcome: &ReplayOutcome) -> String {
    match (&outcome.response, &outcome.error) {
        (Some(resp), _) => {
            let what = match &resp.result {
                ActionResult::Simulated { result, .. } => format!(
                    "profit {}",
                    sme_core::format::format_ringgit(result.profit)
                ),
                ActionResult::TemplateCsv { filename, .. } => filename.to_string(),
                other => {
                    let json = serde_json::to_value(other).unwrap_or_default();
                    json["kind"].as_str().unwrap_or("ok").to_string()
                }
            };
            format!("  #{:<3} {:<14} ok      {}", resp.step, resp.request_id, what)
        }
        (None, error) => format!(
            "  {:<4} {:<14} FAILED  {}",
            "",
            outcome.request_id,
            error.as_deref().unwrap_or("unknown error")
        ),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

async fn run(args: CliArgs) -> CliResult<bool> {
    let config = resolve_config(&args)?;
    let mut session = new_session(&config);

    for request in flag_requests(&args) {
        session.process(&request)?;
    }

    if let Some(name) = &args.template {
        let response = session.process(&DashboardRequest::new(DashboardAction::DownloadTemplate {
            name: name.clone(),
        }))?;
        if let ActionResult::TemplateCsv { csv, .. } = response.result {
            print!("{}", csv);
        }
        return Ok(true);
    }

    let mut outcomes = Vec::new();
    if let Some(path) = &args.actions {
        let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let requests = session.parse_requests(&raw)?;
        log::info!("replaying {} request(s) from {}", requests.len(), path.display());
        for request in &requests {
            let outcome = match session.process(request) {
                Ok(response) => ReplayOutcome {
                    request_id: response.request_id.clone(),
                    ok: true,
                    response: Some(response),
                    error: None,
                },
                Err(err) => ReplayOutcome {
                    request_id: session
                        .audit_log
                        .last()
                        .map(|e| e.request_id.clone())
                        .unwrap_or_default(),
                    ok: false,
                    response: None,
                    error: Some(err.to_string()),
                },
            };
            outcomes.push(outcome);
        }
    }
    let all_ok = outcomes.iter().all(|o| o.ok);

    let render_start = Instant::now();
    let view = build_view(&session, &config).await;
    let render_ms = render_start.elapsed().as_millis();

    if args.json {
        let page = PageJson {
            generated_at: Utc::now().to_rfc3339(),
            label: session.page.label(),
            render_ms,
            view: &view,
        };
        let json = if args.actions.is_some() {
            serde_json::to_string_pretty(&ReplayJson {
                responses: outcomes,
                audit: &session.audit_log,
                page,
            })?
        } else {
            serde_json::to_string_pretty(&page)?
        };
        println!("{}", json);
    } else {
        if !outcomes.is_empty() {
            println!();
            println!("  Replayed {} request(s)", outcomes.len());
            for outcome in &outcomes {
                println!("{}", replay_line(outcome));
            }
        }
        print_lines(&render::render_page(session.page, &view, &config));
    }

    Ok(all_ok)
}

#[tokio::main]
async fn main() {
    init_logging();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return;
    }

    match run(args).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
