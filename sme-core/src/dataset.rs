//! The sample business every page renders.
//!
//! All figures belong to one fictional Kuala Lumpur coffee shop. Nothing is
//! loaded from disk; each accessor builds a fresh copy.

use chrono::NaiveDate;

use crate::insights::{
    AlertKind, DashboardAlert, Effort, HealthStatus, Impact, Priority, Recommendation,
    RecommendationCategory, RecommendationStatus, Resource, RiskAlert, RiskCategorySummary,
    RiskMetric, RiskTrend, Severity,
};
use crate::reports::{RecentReport, ReportFormat, ReportSection, ReportStatus, ReportTemplate};
use crate::uploads::{DataTemplate, UploadStatus, UploadedFile};
use crate::visuals::{
    ExpenseCategory, IndustryBenchmark, IndustryComparison, KeyMetric, MonthlyFigures, Standing,
    Trend,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            title: "Monthly Revenue",
            value: "RM 71,250",
            change: "+12.5%",
            trend: Trend::Up,
        },
        KeyMetric {
            title: "Net Profit Margin",
            value: "18.2%",
            change: "+2.1%",
            trend: Trend::Up,
        },
        KeyMetric {
            title: "Cash Flow",
            value: "RM 45,800",
            change: "-5.3%",
            trend: Trend::Down,
        },
        // fewer days is an improvement
        KeyMetric {
            title: "Break-even Days",
            value: "23 days",
            change: "-2 days",
            trend: Trend::Up,
        },
    ]
}

pub fn dashboard_alerts() -> Vec<DashboardAlert> {
    vec![
        DashboardAlert {
            kind: AlertKind::Warning,
            title: "Inventory Costs Rising",
            description: "Coffee bean costs increased 15% above industry average",
            severity_label: "Medium",
        },
        DashboardAlert {
            kind: AlertKind::Success,
            title: "Strong Revenue Growth",
            description: "Q3 revenue exceeded Malaysian F&B SME benchmark by 8%",
            severity_label: "Positive",
        },
    ]
}

pub fn quick_recommendations() -> Vec<&'static str> {
    vec![
        "Launch Ramadan promotional menu to boost Q2 sales",
        "Negotiate bulk coffee bean purchase to reduce costs by 12%",
        "Apply for SME Digital Grant (RM 5,000 available)",
    ]
}

// ---------------------------------------------------------------------------
// Profile page
// ---------------------------------------------------------------------------

pub fn industry_benchmarks() -> Vec<IndustryBenchmark> {
    vec![
        IndustryBenchmark {
            title: "Average Revenue",
            value: "RM 720K",
            note: "Malaysian F&B SMEs",
        },
        IndustryBenchmark {
            title: "Profit Margin",
            value: "15.8%",
            note: "Industry Average",
        },
        IndustryBenchmark {
            title: "Growth Rate",
            value: "8.2%",
            note: "Annual Growth",
        },
    ]
}

// ---------------------------------------------------------------------------
// Risk page
// ---------------------------------------------------------------------------

pub fn risk_alerts() -> Vec<RiskAlert> {
    vec![
        RiskAlert {
            id: 1,
            title: "Inventory Costs Spike",
            description: "Coffee bean costs increased 20% above average in June. This impacts your profit margin significantly.",
            severity: Severity::High,
            category: "Cost Management",
            impact: Impact::new(12_000.0, "monthly"),
            recommendation: "Consider negotiating bulk purchase agreements with suppliers or exploring alternative suppliers.",
            trend: RiskTrend::Increasing,
            detected: date(2024, 1, 15),
        },
        RiskAlert {
            id: 2,
            title: "Cash Flow Declining",
            description: "Monthly cash flow has decreased by 15% over the last 3 months, indicating potential liquidity issues.",
            severity: Severity::Medium,
            category: "Cash Flow",
            impact: Impact::new(8_500.0, "shortfall"),
            recommendation: "Implement faster payment collection processes and review payment terms with customers.",
            trend: RiskTrend::Declining,
            detected: date(2024, 1, 12),
        },
        RiskAlert {
            id: 3,
            title: "Seasonal Revenue Drop",
            description: "Revenue typically drops 25% during monsoon season (Nov-Jan). Plan accordingly for cash reserves.",
            severity: Severity::Medium,
            category: "Seasonality",
            impact: Impact::new(18_000.0, "revenue drop"),
            recommendation: "Build cash reserves during peak months and consider monsoon-friendly menu items.",
            trend: RiskTrend::Seasonal,
            detected: date(2024, 1, 8),
        },
        RiskAlert {
            id: 4,
            title: "High Staff Turnover",
            description: "Employee turnover rate is 35% higher than industry average, increasing recruitment and training costs.",
            severity: Severity::Low,
            category: "Human Resources",
            impact: Impact::new(5_200.0, "additional costs"),
            recommendation: "Review compensation packages and implement employee retention programs.",
            trend: RiskTrend::Stable,
            detected: date(2024, 1, 5),
        },
    ]
}

/// Category tallies as published with the sample. They are not derived
/// from `risk_alerts()`.
pub fn risk_categories() -> Vec<RiskCategorySummary> {
    vec![
        RiskCategorySummary {
            category: "Financial Risk",
            count: 3,
            high_risk: 1,
        },
        RiskCategorySummary {
            category: "Operational Risk",
            count: 2,
            high_risk: 0,
        },
        RiskCategorySummary {
            category: "Market Risk",
            count: 1,
            high_risk: 0,
        },
        RiskCategorySummary {
            category: "Compliance Risk",
            count: 0,
            high_risk: 0,
        },
    ]
}

pub fn risk_metrics() -> Vec<RiskMetric> {
    vec![
        RiskMetric {
            title: "Overall Risk Score",
            score: 6.8,
            status: HealthStatus::Medium,
            description: "Moderate risk level requiring attention",
        },
        RiskMetric {
            title: "Financial Health",
            score: 7.2,
            status: HealthStatus::Good,
            description: "Strong financial position with minor concerns",
        },
        RiskMetric {
            title: "Cash Flow Risk",
            score: 5.5,
            status: HealthStatus::Medium,
            description: "Monitor cash flow patterns closely",
        },
        RiskMetric {
            title: "Market Position",
            score: 8.1,
            status: HealthStatus::Good,
            description: "Strong competitive position in local market",
        },
    ]
}

// ---------------------------------------------------------------------------
// Recommendations page
// ---------------------------------------------------------------------------

fn resource(name: &'static str) -> Resource {
    Resource { name, url: "#" }
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: 1,
            title: "Launch Ramadan Digital Promotions",
            description: "Capitalize on the upcoming Ramadan season with targeted digital marketing campaigns. Historical data shows 40% revenue increase during this period for F&B businesses.",
            category: RecommendationCategory::Marketing,
            priority: Priority::High,
            impact: Impact::new(25_000.0, "potential revenue increase"),
            effort: Effort::Medium,
            timeline: "2-3 weeks",
            action_steps: vec![
                "Create Ramadan-themed menu items",
                "Design social media campaign",
                "Partner with food delivery platforms",
                "Offer iftar catering packages",
            ],
            resources: vec![
                resource("Malaysia Digital Marketing Guide"),
                resource("Ramadan F&B Trends 2024"),
            ],
            status: RecommendationStatus::New,
        },
        Recommendation {
            id: 2,
            title: "Negotiate Bulk Coffee Bean Purchase",
            description: "Your coffee bean costs are 20% above industry average. Negotiating bulk purchase agreements could reduce costs by 12-15%.",
            category: RecommendationCategory::CostReduction,
            priority: Priority::High,
            impact: Impact::new(18_000.0, "annual savings"),
            effort: Effort::Low,
            timeline: "1-2 weeks",
            action_steps: vec![
                "Research alternative suppliers",
                "Calculate bulk purchase requirements",
                "Negotiate payment terms",
                "Secure storage arrangements",
            ],
            resources: vec![
                resource("Malaysian Coffee Suppliers Directory"),
                resource("Bulk Purchase Contract Template"),
            ],
            status: RecommendationStatus::InProgress,
        },
        Recommendation {
            id: 3,
            title: "Apply for SME Digital Grant",
            description: "You're eligible for the Malaysian SME Digital Grant offering up to RM 5,000 for digital transformation initiatives.",
            category: RecommendationCategory::Funding,
            priority: Priority::Medium,
            impact: Impact::new(5_000.0, "grant funding"),
            effort: Effort::Medium,
            timeline: "4-6 weeks",
            action_steps: vec![
                "Prepare business documentation",
                "Submit online application",
                "Attend grant interview",
                "Implement approved digital initiatives",
            ],
            resources: vec![
                resource("SME Digital Grant Application"),
                resource("Grant Application Checklist"),
            ],
            status: RecommendationStatus::New,
        },
        Recommendation {
            id: 4,
            title: "Implement Staff Retention Program",
            description: "Your staff turnover is 35% above industry average. A retention program could reduce recruitment costs and improve service quality.",
            category: RecommendationCategory::HumanResources,
            priority: Priority::Medium,
            impact: Impact::new(8_000.0, "cost savings"),
            effort: Effort::High,
            timeline: "6-8 weeks",
            action_steps: vec![
                "Conduct employee satisfaction survey",
                "Design competitive benefits package",
                "Implement performance recognition system",
                "Create career development pathways",
            ],
            resources: vec![
                resource("Employee Retention Best Practices"),
                resource("Malaysian Labor Law Guide"),
            ],
            status: RecommendationStatus::New,
        },
        Recommendation {
            id: 5,
            title: "Optimize Menu Pricing Strategy",
            description: "Analysis shows you can increase prices by 8-12% on high-demand items without significant customer loss, based on local market data.",
            category: RecommendationCategory::Revenue,
            priority: Priority::Medium,
            impact: Impact::new(12_000.0, "additional revenue"),
            effort: Effort::Low,
            timeline: "1 week",
            action_steps: vec![
                "Analyze item-level profitability",
                "Research competitor pricing",
                "Test price increases on select items",
                "Monitor customer response",
            ],
            resources: vec![
                resource("Menu Engineering Guide"),
                resource("Pricing Psychology Tips"),
            ],
            status: RecommendationStatus::Completed,
        },
    ]
}

// ---------------------------------------------------------------------------
// Visualizations page
// ---------------------------------------------------------------------------

pub fn monthly_figures() -> Vec<MonthlyFigures> {
    const ROWS: [(&str, f64, f64, f64); 12] = [
        ("Jan", 65_000.0, 45_000.0, 20_000.0),
        ("Feb", 72_000.0, 48_000.0, 24_000.0),
        ("Mar", 68_000.0, 46_000.0, 22_000.0),
        ("Apr", 75_000.0, 50_000.0, 25_000.0),
        ("May", 82_000.0, 52_000.0, 30_000.0),
        ("Jun", 78_000.0, 49_000.0, 29_000.0),
        ("Jul", 85_000.0, 53_000.0, 32_000.0),
        ("Aug", 88_000.0, 55_000.0, 33_000.0),
        ("Sep", 92_000.0, 57_000.0, 35_000.0),
        ("Oct", 89_000.0, 56_000.0, 33_000.0),
        ("Nov", 95_000.0, 58_000.0, 37_000.0),
        ("Dec", 98_000.0, 60_000.0, 38_000.0),
    ];
    ROWS.iter()
        .map(|&(month, revenue, expenses, profit)| MonthlyFigures {
            month,
            revenue,
            expenses,
            profit,
        })
        .collect()
}

pub fn expense_categories() -> Vec<ExpenseCategory> {
    const ROWS: [(&str, f64, f64); 6] = [
        ("Raw Materials", 180_000.0, 35.0),
        ("Staff Salaries", 120_000.0, 23.0),
        ("Rent & Utilities", 72_000.0, 14.0),
        ("Marketing", 48_000.0, 9.0),
        ("Equipment", 36_000.0, 7.0),
        ("Other", 60_000.0, 12.0),
    ];
    ROWS.iter()
        .map(|&(category, amount, percentage)| ExpenseCategory {
            category,
            amount,
            percentage,
        })
        .collect()
}

pub fn industry_comparison() -> Vec<IndustryComparison> {
    vec![
        IndustryComparison {
            metric: "Revenue Growth",
            your_business: 12.5,
            industry_avg: 8.2,
            status: Standing::Above,
        },
        IndustryComparison {
            metric: "Profit Margin",
            your_business: 18.2,
            industry_avg: 15.8,
            status: Standing::Above,
        },
        IndustryComparison {
            metric: "Cash Flow Ratio",
            your_business: 0.85,
            industry_avg: 0.92,
            status: Standing::Below,
        },
        IndustryComparison {
            metric: "Inventory Turnover",
            your_business: 6.2,
            industry_avg: 7.1,
            status: Standing::Below,
        },
    ]
}

pub fn key_performance_indicators() -> Vec<IndustryBenchmark> {
    vec![
        IndustryBenchmark {
            title: "Revenue Growth",
            value: "+12.5%",
            note: "vs last year",
        },
        IndustryBenchmark {
            title: "Profit Margin",
            value: "18.2%",
            note: "current month",
        },
        IndustryBenchmark {
            title: "Cash Flow",
            value: "RM 45.8K",
            note: "monthly average",
        },
        IndustryBenchmark {
            title: "Break-even",
            value: "23 days",
            note: "current month",
        },
    ]
}

// ---------------------------------------------------------------------------
// Upload page
// ---------------------------------------------------------------------------

pub fn uploaded_files() -> Vec<UploadedFile> {
    vec![
        UploadedFile {
            name: "monthly_revenue_2024.csv".into(),
            kind: "Revenue Data".into(),
            size_kb: 2.3,
            status: UploadStatus::Processed,
            upload_date: date(2024, 1, 15),
        },
        UploadedFile {
            name: "expenses_q3_2024.xlsx".into(),
            kind: "Expense Data".into(),
            size_kb: 5.7,
            status: UploadStatus::Processed,
            upload_date: date(2024, 1, 10),
        },
    ]
}

pub fn data_templates() -> Vec<DataTemplate> {
    vec![
        DataTemplate {
            name: "Monthly Revenue Template",
            description: "Track monthly sales, revenue streams, and seasonal patterns",
            fields: vec!["Date", "Revenue", "Product Category", "Payment Method"],
            filename: "revenue_template.csv",
        },
        DataTemplate {
            name: "Expense Tracking Template",
            description: "Monitor operational costs, supplier payments, and overhead",
            fields: vec!["Date", "Category", "Amount", "Vendor", "Description"],
            filename: "expenses_template.csv",
        },
        DataTemplate {
            name: "Payroll Data Template",
            description: "Employee salaries, benefits, and HR-related costs",
            fields: vec!["Employee ID", "Salary", "Benefits", "Department"],
            filename: "payroll_template.csv",
        },
        DataTemplate {
            name: "Inventory Template",
            description: "Stock levels, purchase costs, and inventory turnover",
            fields: vec!["Item", "Quantity", "Cost Price", "Selling Price", "Supplier"],
            filename: "inventory_template.csv",
        },
    ]
}

// ---------------------------------------------------------------------------
// Export page
// ---------------------------------------------------------------------------

pub fn report_templates() -> Vec<ReportTemplate> {
    use ReportSection::*;
    vec![
        ReportTemplate {
            name: "Executive Summary",
            description: "High-level overview for stakeholders and investors",
            sections: vec![Overview, Metrics, Risks],
            format: ReportFormat::Pdf,
            length: "3-4 pages",
        },
        ReportTemplate {
            name: "Detailed Financial Analysis",
            description: "Comprehensive report with all metrics and visualizations",
            sections: vec![Overview, Metrics, Visualizations, Risks, Recommendations],
            format: ReportFormat::Pdf,
            length: "8-12 pages",
        },
        ReportTemplate {
            name: "Risk Assessment Report",
            description: "Focus on risk analysis and mitigation strategies",
            sections: vec![Overview, Risks, Recommendations],
            format: ReportFormat::Pdf,
            length: "5-6 pages",
        },
        ReportTemplate {
            name: "Consulting Presentation",
            description: "PowerPoint deck for client presentations",
            sections: vec![Overview, Metrics, Visualizations, Recommendations],
            format: ReportFormat::PowerPoint,
            length: "15-20 slides",
        },
    ]
}

pub fn recent_reports() -> Vec<RecentReport> {
    vec![
        RecentReport {
            name: "Monthly Financial Report - December 2024",
            kind: "Detailed Analysis",
            format: ReportFormat::Pdf,
            size_mb: 2.3,
            generated: date(2024, 1, 15),
            status: ReportStatus::Ready,
        },
        RecentReport {
            name: "Q4 2024 Executive Summary",
            kind: "Executive Summary",
            format: ReportFormat::Pdf,
            size_mb: 1.1,
            generated: date(2024, 1, 10),
            status: ReportStatus::Ready,
        },
        RecentReport {
            name: "Risk Assessment - January 2024",
            kind: "Risk Report",
            format: ReportFormat::Pdf,
            size_mb: 1.8,
            generated: date(2024, 1, 8),
            status: ReportStatus::Ready,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_profit_is_revenue_minus_expenses() {
        for m in monthly_figures() {
            assert_eq!(m.revenue - m.expenses, m.profit, "{}", m.month);
        }
    }

    #[test]
    fn expense_shares_sum_to_hundred() {
        let total: f64 = expense_categories().iter().map(|c| c.percentage).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn risk_alerts_are_newest_first() {
        let alerts = risk_alerts();
        assert_eq!(alerts.len(), 4);
        assert!(alerts.windows(2).all(|w| w[0].detected > w[1].detected));
    }

    #[test]
    fn dates_are_real() {
        assert!(uploaded_files().iter().all(|f| f.upload_date != NaiveDate::MIN));
        assert!(recent_reports().iter().all(|r| r.generated != NaiveDate::MIN));
    }

    #[test]
    fn recommendation_ids_are_unique() {
        let mut ids: Vec<u32> = recommendations().iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
