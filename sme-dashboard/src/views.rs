//! Page views: everything one page shows, gathered from the session, the
//! sample dataset and the pipelines. Text and JSON output both render
//! from these.

use serde::Serialize;
use sme_bridge::{Page, Session};
use sme_core::dataset;
use sme_core::insights::{
    CategoryFilter, DashboardAlert, Recommendation, RiskCategorySummary, RiskMetric, Severity,
};
use sme_core::profile::BusinessProfile;
use sme_core::reports::{RecentReport, ReportFormat, ReportPeriod, ReportSection, ReportTemplate};
use sme_core::uploads::{DataTemplate, UploadedFile};
use sme_core::visuals::{
    ChartMetric, ChartPeriod, ExpenseCategory, IndustryBenchmark, IndustryComparison, KeyMetric,
    MonthlyFigures,
};
use sme_core::{
    compare, impact_summary, presets, FinancialBaseline, ImpactSummary, ScenarioComparison,
    ScenarioInput, ScenarioPreset, ScenarioResult,
};
use sme_pipeline::candidate_pipeline::CandidatePipeline;
use sme_pipeline::pipelines::recommendation_board::{
    category_counts, quick_wins, CategoryCount, RecommendationBoardPipeline,
};
use sme_pipeline::pipelines::risk_digest::RiskDigestPipeline;
use sme_pipeline::types::{DashboardQuery, RecommendationCandidate, RiskCandidate};

use crate::config::DashboardConfig;

#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Dashboard(DashboardView),
    Profile(ProfileView),
    Upload(UploadView),
    Visualizations(VisualizationView),
    Risks(RiskView),
    Recommendations(RecommendationView),
    Simulator(SimulatorView),
    Export(ExportView),
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub key_metrics: Vec<KeyMetric>,
    pub alerts: Vec<DashboardAlert>,
    pub quick_recommendations: Vec<&'static str>,
    pub benchmarks: Vec<IndustryBenchmark>,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub profile: BusinessProfile,
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadView {
    pub files: Vec<UploadedFile>,
    pub templates: Vec<DataTemplate>,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub month: &'static str,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct VisualizationView {
    pub period: ChartPeriod,
    pub period_label: String,
    pub metric: ChartMetric,
    pub series: Vec<MonthlyFigures>,
    pub chart: Vec<ChartPoint>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub expense_categories: Vec<ExpenseCategory>,
    pub industry_comparison: Vec<IndustryComparison>,
    pub kpis: Vec<IndustryBenchmark>,
}

#[derive(Debug, Serialize)]
pub struct RiskView {
    pub min_severity: Severity,
    pub top_k: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category_filter: Vec<String>,
    pub retrieved: usize,
    pub filtered: usize,
    pub alerts: Vec<RiskCandidate>,
    pub metrics: Vec<RiskMetric>,
    pub categories: Vec<RiskCategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationView {
    pub category: CategoryFilter,
    pub counts: Vec<CategoryCount>,
    pub items: Vec<RecommendationCandidate>,
    pub quick_wins: Vec<Recommendation>,
}

/// The projection laid out for the results panel.
#[derive(Debug, Serialize)]
pub struct SimulationOutcome {
    pub result: ScenarioResult,
    pub comparison: ScenarioComparison,
    pub impact: ImpactSummary,
}

#[derive(Debug, Serialize)]
pub struct SimulatorView {
    pub baseline: FinancialBaseline,
    pub input: ScenarioInput,
    pub active_preset: Option<String>,
    pub presets: Vec<ScenarioPreset>,
    pub outcome: Option<SimulationOutcome>,
}

#[derive(Debug, Serialize)]
pub struct SectionChoice {
    pub section: ReportSection,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportView {
    pub format: ReportFormat,
    pub period: ReportPeriod,
    pub sections: Vec<SectionChoice>,
    pub templates: Vec<ReportTemplate>,
    pub recent: Vec<RecentReport>,
}

/// Build the view of whichever page the session is on.
pub async fn build_view(session: &Session, config: &DashboardConfig) -> PageView {
    match session.page {
        Page::Dashboard => PageView::Dashboard(DashboardView {
            key_metrics: dataset::key_metrics(),
            alerts: dataset::dashboard_alerts(),
            quick_recommendations: dataset::quick_recommendations(),
            benchmarks: dataset::industry_benchmarks(),
        }),
        Page::Profile => PageView::Profile(ProfileView {
            profile: session.profile.current().clone(),
            editing: session.profile.is_editing(),
        }),
        Page::Upload => PageView::Upload(UploadView {
            files: session.uploads.files.clone(),
            templates: session.uploads.templates.clone(),
        }),
        Page::Visualizations => PageView::Visualizations(visualization_view(session)),
        Page::Risks => PageView::Risks(risk_view(config).await),
        Page::Recommendations => PageView::Recommendations(recommendation_view(session).await),
        Page::Simulator => PageView::Simulator(simulator_view(session)),
        Page::Export => PageView::Export(export_view(session)),
    }
}

fn visualization_view(session: &Session) -> VisualizationView {
    let state = &session.visualizations;
    let figures = dataset::monthly_figures();
    let series = state.period.window(&figures).to_vec();
    let chart = series
        .iter()
        .map(|m| ChartPoint {
            month: m.month,
            value: state.metric.of(m),
        })
        .collect();

    VisualizationView {
        period: state.period,
        period_label: state.period.label(),
        metric: state.metric,
        total_revenue: series.iter().map(|m| m.revenue).sum(),
        total_expenses: series.iter().map(|m| m.expenses).sum(),
        total_profit: series.iter().map(|m| m.profit).sum(),
        series,
        chart,
        expense_categories: dataset::expense_categories(),
        industry_comparison: dataset::industry_comparison(),
        kpis: dataset::key_performance_indicators(),
    }
}

async fn risk_view(config: &DashboardConfig) -> RiskView {
    let pipeline =
        RiskDigestPipeline::with_alerts_and_size(dataset::risk_alerts(), config.risk_top_k);
    let query = DashboardQuery {
        min_severity: config.risk_min_severity,
        risk_categories: (!config.risk_categories.is_empty())
            .then(|| config.risk_categories.clone()),
        ..DashboardQuery::default()
    };
    let result = pipeline.execute(query).await;

    RiskView {
        min_severity: config.risk_min_severity,
        top_k: config.risk_top_k,
        category_filter: config.risk_categories.clone(),
        retrieved: result.retrieved_candidates.len(),
        filtered: result.filtered_candidates.len(),
        alerts: result.selected_candidates,
        metrics: dataset::risk_metrics(),
        categories: dataset::risk_categories(),
    }
}

async fn recommendation_view(session: &Session) -> RecommendationView {
    let category = session.recommendations.category;
    let recommendations = dataset::recommendations();
    let counts = category_counts(&recommendations);
    let wins = quick_wins(&recommendations).into_iter().cloned().collect();

    let pipeline = RecommendationBoardPipeline::with_recommendations(recommendations);
    let query = DashboardQuery {
        recommendation_category: category,
        ..DashboardQuery::default()
    };
    let result = pipeline.execute(query).await;

    RecommendationView {
        category,
        counts,
        items: result.selected_candidates,
        quick_wins: wins,
    }
}

fn simulator_view(session: &Session) -> SimulatorView {
    let sim = &session.simulator;
    SimulatorView {
        baseline: sim.baseline,
        input: sim.input,
        active_preset: sim.active_preset.clone(),
        presets: presets(),
        outcome: sim.result.map(|result| SimulationOutcome {
            result,
            comparison: compare(&sim.baseline, &result),
            impact: impact_summary(&sim.baseline, &result),
        }),
    }
}

fn export_view(session: &Session) -> ExportView {
    let export = &session.export;
    ExportView {
        format: export.config.format,
        period: export.config.period,
        sections: ReportSection::ALL
            .into_iter()
            .map(|section| SectionChoice {
                section,
                label: section.label(),
                description: section.description(),
                selected: export.config.is_selected(section),
            })
            .collect(),
        templates: export.templates.clone(),
        recent: export.recent.clone(),
    }
}
