//! Human-readable page output.

use sme_bridge::Page;
use sme_core::format::{format_compact, format_number, format_pct, format_ringgit};
use sme_core::insights::{Severity, CategoryFilter};
use sme_core::types::Direction;
use sme_core::visuals::{Standing, Trend};
use sme_core::SelectOption;

use crate::config::DashboardConfig;
use crate::views::*;

const WIDTH: usize = 64;

/// Boxed page title.
pub fn banner(title: &str) -> Vec<String> {
    let bar = "\u{2550}".repeat(WIDTH);
    let inner = format!("SME ANALYTICS \u{00b7} {}", title);
    let pad = WIDTH.saturating_sub(inner.chars().count());
    let left = pad / 2;
    vec![
        String::new(),
        format!("  \u{2554}{}\u{2557}", bar),
        format!(
            "  \u{2551}{}{}{}\u{2551}",
            " ".repeat(left),
            inner,
            " ".repeat(pad - left)
        ),
        format!("  \u{255a}{}\u{255d}", bar),
        String::new(),
    ]
}

fn rule() -> String {
    format!("  {}", "\u{2500}".repeat(WIDTH))
}

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(format!("  {}", title));
    lines.push(rule());
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "\u{2191}",
        Trend::Down => "\u{2193}",
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "!!",
        Severity::Medium => "! ",
        Severity::Low => "  ",
    }
}

fn direction_mark(direction: Direction) -> &'static str {
    match direction {
        Direction::Favourable => "\u{25b2}",
        Direction::Unfavourable => "\u{25bc}",
    }
}

pub fn render_page(page: Page, view: &PageView, config: &DashboardConfig) -> Vec<String> {
    let mut lines = banner(page.label());
    match view {
        PageView::Dashboard(v) => dashboard(&mut lines, v),
        PageView::Profile(v) => profile(&mut lines, v, config),
        PageView::Upload(v) => upload(&mut lines, v),
        PageView::Visualizations(v) => visualizations(&mut lines, v, config),
        PageView::Risks(v) => risks(&mut lines, v, config),
        PageView::Recommendations(v) => recommendations(&mut lines, v, config),
        PageView::Simulator(v) => simulator(&mut lines, v, config),
        PageView::Export(v) => export(&mut lines, v),
    }
    lines.push(String::new());
    lines
}

fn dashboard(lines: &mut Vec<String>, v: &DashboardView) {
    for metric in &v.key_metrics {
        lines.push(format!(
            "  {:<24} {:>14}   {} {}",
            metric.title,
            metric.value,
            trend_arrow(metric.trend),
            metric.change
        ));
    }

    heading(lines, "Alerts");
    for alert in &v.alerts {
        lines.push(format!("  [{}] {}", alert.severity_label, alert.title));
        lines.push(format!("       {}", alert.description));
    }

    heading(lines, "Quick recommendations");
    for (i, text) in v.quick_recommendations.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, text));
    }

    heading(lines, "Industry benchmarks");
    for b in &v.benchmarks {
        lines.push(format!("  {:<24} {:>10}   {}", b.title, b.value, b.note));
    }
}

fn profile(lines: &mut Vec<String>, v: &ProfileView, config: &DashboardConfig) {
    let p = &v.profile;
    if v.editing {
        lines.push("  (editing, unsaved changes)".into());
        lines.push(String::new());
    }
    let rows = [
        ("Company name", p.company_name.clone()),
        ("Industry", p.industry.label().to_string()),
        (
            "Annual revenue",
            config.money(format_ringgit(p.annual_revenue)),
        ),
        ("Employees", p.employees.to_string()),
        ("Year established", p.year_established.to_string()),
        ("Location", p.location.label().to_string()),
        ("Business type", p.business_type.label().to_string()),
    ];
    for (label, value) in rows {
        lines.push(format!("  {:<18} {}", label, value));
    }
}

fn upload(lines: &mut Vec<String>, v: &UploadView) {
    heading(lines, "Uploaded files");
    if v.files.is_empty() {
        lines.push("  No files uploaded.".into());
    }
    for f in &v.files {
        lines.push(format!(
            "  {:<28} {:<14} {:>6} KB  {:?}  {}",
            f.name, f.kind, f.size_kb, f.status, f.upload_date
        ));
    }

    heading(lines, "Data templates");
    for t in &v.templates {
        lines.push(format!("  {} ({})", t.name, t.filename));
        lines.push(format!("       {}", t.description));
        lines.push(format!("       fields: {}", t.fields.join(", ")));
    }
}

fn visualizations(lines: &mut Vec<String>, v: &VisualizationView, config: &DashboardConfig) {
    lines.push(format!(
        "  {}  \u{00b7}  {:?}  \u{00b7}  revenue {}  \u{00b7}  profit {}",
        v.period_label,
        v.metric,
        config.money(format_compact(v.total_revenue)),
        config.money(format_compact(v.total_profit)),
    ));

    heading(lines, "Monthly trend");
    for point in &v.chart {
        lines.push(format!(
            "  {:<6} {:>14}",
            point.month,
            config.money(format_ringgit(point.value))
        ));
    }

    heading(lines, "Expense breakdown");
    for e in &v.expense_categories {
        lines.push(format!(
            "  {:<22} {:>14}  {:>5}%",
            e.category,
            config.money(format_ringgit(e.amount)),
            format_number(e.percentage, 0)
        ));
    }

    heading(lines, "Industry comparison");
    for c in &v.industry_comparison {
        let standing = match c.status {
            Standing::Above => "above",
            Standing::Below => "below",
        };
        lines.push(format!(
            "  {:<22} you {:>6}  industry {:>6}  ({})",
            c.metric,
            format_number(c.your_business, 1),
            format_number(c.industry_avg, 1),
            standing
        ));
    }

    heading(lines, "Key performance indicators");
    for k in &v.kpis {
        lines.push(format!("  {:<24} {:>10}   {}", k.title, k.value, k.note));
    }
}

fn risks(lines: &mut Vec<String>, v: &RiskView, config: &DashboardConfig) {
    lines.push(format!(
        "  {} alerts  \u{00b7}  {} filtered (min severity {})  \u{00b7}  top {} shown",
        v.retrieved, v.filtered, v.min_severity, v.top_k
    ));
    if !v.category_filter.is_empty() {
        lines.push(format!("  categories: {}", v.category_filter.join(", ")));
    }

    heading(lines, "Risk alerts");
    if v.alerts.is_empty() {
        lines.push("  No risks at this severity. All clear!".into());
    }
    for (i, c) in v.alerts.iter().enumerate() {
        let a = &c.alert;
        lines.push(format!(
            "  {} {}. {:<34} {:<8} score {}",
            severity_icon(a.severity),
            i + 1,
            a.title,
            a.severity,
            format_number(c.score.unwrap_or(0.0), 1)
        ));
        lines.push(format!(
            "       {} \u{00b7} {} \u{00b7} {}",
            c.group.map(|g| g.label()).unwrap_or(a.category),
            config.money(a.impact.to_string()),
            a.trend
        ));
        lines.push(format!("       \u{2192} {}", a.recommendation));
    }

    heading(lines, "Risk scores");
    for m in &v.metrics {
        lines.push(format!(
            "  {:<26} {:>4}/10  {:?}",
            m.title,
            format_number(m.score, 1),
            m.status
        ));
    }

    heading(lines, "Risk categories");
    for c in &v.categories {
        lines.push(format!(
            "  {:<26} {} risks ({} high)",
            c.category, c.count, c.high_risk
        ));
    }
}

fn recommendations(lines: &mut Vec<String>, v: &RecommendationView, config: &DashboardConfig) {
    let buttons: Vec<String> = v
        .counts
        .iter()
        .map(|c| {
            let marker = if c.filter == v.category { "*" } else { "" };
            format!("{}{} ({})", marker, c.label, c.count)
        })
        .collect();
    lines.push(format!("  {}", buttons.join("  ")));

    let title = match v.category {
        CategoryFilter::All => "All recommendations".to_string(),
        CategoryFilter::Only(cat) => format!("{} recommendations", cat),
    };
    heading(lines, &title);
    for c in &v.items {
        let r = &c.recommendation;
        lines.push(format!(
            "  [{}] {}  ({}, {} priority)",
            r.status, r.title, r.category, r.priority
        ));
        lines.push(format!(
            "       impact {} \u{00b7} effort {} \u{00b7} {}",
            config.money(r.impact.to_string()),
            r.effort,
            r.timeline
        ));
        for (i, step) in r.action_steps.iter().enumerate() {
            lines.push(format!("       {}. {}", i + 1, step));
        }
        lines.push(format!("       actions: {}", r.available_actions().join(" | ")));
    }

    heading(lines, "Quick wins");
    for r in &v.quick_wins {
        lines.push(format!(
            "  {}  {}",
            r.title,
            config.money(format_ringgit(r.impact.amount))
        ));
    }
}

fn simulator(lines: &mut Vec<String>, v: &SimulatorView, config: &DashboardConfig) {
    let b = &v.baseline;
    heading(lines, "Current position");
    lines.push(format!(
        "  revenue {}  \u{00b7}  costs {}  \u{00b7}  profit {}",
        config.money(format_ringgit(b.monthly_revenue)),
        config.money(format_ringgit(b.monthly_costs)),
        config.money(format_ringgit(b.monthly_profit)),
    ));
    lines.push(format!(
        "  margin {}%  \u{00b7}  break-even {} days  \u{00b7}  cash flow {}",
        format_number(b.profit_margin, 1),
        format_number(b.break_even_days, 0),
        config.money(format_ringgit(b.cash_flow)),
    ));

    heading(lines, "Scenario");
    if let Some(name) = &v.active_preset {
        lines.push(format!("  preset: {}", name));
    }
    let i = &v.input;
    lines.push(format!(
        "  revenue {}  \u{00b7}  cost reduction {}%  \u{00b7}  staff +{}",
        format_pct(i.revenue_change_pct, 0),
        format_number(i.cost_reduction_pct, 0),
        format_number(i.staff_increase, 0),
    ));
    lines.push(format!(
        "  marketing {}  \u{00b7}  price {}",
        config.money(format_ringgit(i.marketing_spend)),
        format_pct(i.price_increase_pct, 0),
    ));

    let Some(outcome) = &v.outcome else {
        heading(lines, "Quick scenarios");
        for p in &v.presets {
            lines.push(format!("  {:<20} {}", p.name, p.description));
        }
        lines.push(String::new());
        lines.push("  Run with --preset or any scenario flag to project.".into());
        return;
    };

    heading(lines, "Current vs projected");
    let c = &outcome.comparison;
    let money_rows = [&c.revenue, &c.profit, &c.cash_flow];
    for row in money_rows {
        lines.push(format!(
            "  {} {:<16} {:>14}  {}",
            direction_mark(row.direction),
            row.label,
            config.money(format_ringgit(row.projected)),
            format_pct(row.delta, 1)
        ));
    }
    lines.push(format!(
        "  {} {:<16} {:>13}%  {} pts",
        direction_mark(c.profit_margin.direction),
        c.profit_margin.label,
        format_number(c.profit_margin.projected, 1),
        format_number(c.profit_margin.delta, 1)
    ));
    lines.push(format!(
        "  {} {:<16} {:>9} days  {} days",
        direction_mark(c.break_even_days.direction),
        c.break_even_days.label,
        format_number(c.break_even_days.projected, 0),
        format_number(c.break_even_days.delta, 0)
    ));

    heading(lines, "Impact");
    if outcome.impact.positive.is_empty() && outcome.impact.concerns.is_empty() {
        lines.push("  No change against the current position.".into());
    }
    for text in &outcome.impact.positive {
        lines.push(format!("  + {}", config.money(text.clone())));
    }
    for text in &outcome.impact.concerns {
        lines.push(format!("  - {}", config.money(text.clone())));
    }
}

fn export(lines: &mut Vec<String>, v: &ExportView) {
    lines.push(format!("  format {}  \u{00b7}  period {:?}", v.format, v.period));

    heading(lines, "Sections");
    for s in &v.sections {
        let mark = if s.selected { "[x]" } else { "[ ]" };
        lines.push(format!("  {} {:<20} {}", mark, s.label, s.description));
    }

    heading(lines, "Templates");
    for t in &v.templates {
        lines.push(format!("  {:<28} {} \u{00b7} {}", t.name, t.format, t.length));
        lines.push(format!("       {}", t.description));
    }

    heading(lines, "Recent reports");
    for r in &v.recent {
        lines.push(format!(
            "  {:<42} {} \u{00b7} {} MB \u{00b7} {}",
            r.name, r.format, r.size_mb, r.generated
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sme_bridge::{DashboardAction, DashboardRequest, Session};

    use crate::views::build_view;

    async fn rendered(session: &Session, config: &DashboardConfig) -> String {
        let view = build_view(session, config).await;
        render_page(session.page, &view, config).join("\n")
    }

    #[test]
    fn banner_is_boxed() {
        let lines = banner("Dashboard");
        assert!(lines[1].starts_with("  \u{2554}"));
        assert!(lines[2].contains("SME ANALYTICS \u{00b7} Dashboard"));
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }

    #[tokio::test]
    async fn simulator_without_run_lists_presets() {
        let mut session = Session::new();
        session.page = Page::Simulator;
        let text = rendered(&session, &DashboardConfig::default()).await;
        assert!(text.contains("Ramadan Boost"));
        assert!(text.contains("Run with --preset"));
    }

    #[tokio::test]
    async fn simulator_shows_projection() {
        let mut session = Session::new();
        session.page = Page::Simulator;
        session
            .process(&DashboardRequest::new(DashboardAction::ApplyPreset {
                name: "Ramadan Boost".into(),
            }))
            .unwrap();
        session
            .process(&DashboardRequest::new(DashboardAction::RunSimulation))
            .unwrap();
        let text = rendered(&session, &DashboardConfig::default()).await;
        assert!(text.contains("RM 106,250"));
        assert!(text.contains("RM 33,250"));
        assert!(text.contains("preset: Ramadan Boost"));
    }

    #[tokio::test]
    async fn currency_label_applies_to_text() {
        let mut session = Session::new();
        session.page = Page::Profile;
        let config = DashboardConfig {
            currency_label: "MYR".into(),
            ..DashboardConfig::default()
        };
        let text = rendered(&session, &config).await;
        assert!(text.contains("MYR 850,000"));
        assert!(!text.contains("RM 850,000"));
    }

    #[tokio::test]
    async fn every_page_renders() {
        let config = DashboardConfig::default();
        for page in Page::ALL {
            let mut session = Session::new();
            session.page = page;
            let text = rendered(&session, &config).await;
            assert!(text.contains(page.label()), "{page} header missing");
            assert!(!text.contains("NaN"));
        }
    }
}
