use sme_core::dataset;
use sme_core::insights::{
    CategoryFilter, Priority, RecommendationCategory, RecommendationStatus, Severity,
};
use sme_pipeline::candidate_pipeline::CandidatePipeline;
use sme_pipeline::components::risk_category_filter::RiskCategoryFilter;
use sme_pipeline::components::risk_severity_scorer::RiskSeverityScorer;
use sme_pipeline::components::severity_filter::SeverityFilter;
use sme_pipeline::components::top_k_selector::TopKSelector;
use sme_pipeline::filter::Filter;
use sme_pipeline::pipelines::recommendation_board::{
    category_counts, quick_wins, RecommendationBoardPipeline,
};
use sme_pipeline::pipelines::risk_digest::RiskDigestPipeline;
use sme_pipeline::scorer::Scorer;
use sme_pipeline::selector::Selector;
use sme_pipeline::types::*;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn risk_candidates() -> Vec<RiskCandidate> {
    dataset::risk_alerts()
        .into_iter()
        .map(RiskCandidate::from)
        .collect()
}

fn query() -> DashboardQuery {
    DashboardQuery {
        request_id: "test".into(),
        ..DashboardQuery::default()
    }
}

fn risk_ids(candidates: &[RiskCandidate]) -> Vec<u32> {
    candidates.iter().map(|c| c.alert.id).collect()
}

fn rec_ids(candidates: &[RecommendationCandidate]) -> Vec<u32> {
    candidates.iter().map(|c| c.recommendation.id).collect()
}

// ---------------------------------------------------------------------------
// Risk components
// ---------------------------------------------------------------------------

#[tokio::test]
async fn severity_filter_keeps_at_or_above_minimum() {
    let q = DashboardQuery {
        min_severity: Severity::Medium,
        ..query()
    };
    assert!(SeverityFilter.enable(&q));

    let result = SeverityFilter.filter(&q, risk_candidates()).await.unwrap();
    assert_eq!(risk_ids(&result.kept), vec![1, 2, 3]);
    assert_eq!(risk_ids(&result.removed), vec![4]);
}

#[test]
fn severity_filter_idle_at_low() {
    assert!(!SeverityFilter.enable(&query()));
}

#[tokio::test]
async fn category_filter_needs_group_tags_for_group_names() {
    let q = DashboardQuery {
        risk_categories: Some(vec!["financial".into()]),
        ..query()
    };
    // untagged candidates only match on their own category
    let untagged = RiskCategoryFilter.filter(&q, risk_candidates()).await.unwrap();
    assert!(untagged.kept.is_empty());

    let tagged: Vec<RiskCandidate> = risk_candidates()
        .into_iter()
        .map(|c| RiskCandidate {
            group: Some(RiskGroup::of_category(c.alert.category)),
            ..c
        })
        .collect();
    let result = RiskCategoryFilter.filter(&q, tagged).await.unwrap();
    assert_eq!(risk_ids(&result.kept), vec![1, 2]);
}

#[tokio::test]
async fn scorer_ranks_high_increasing_risk_first() {
    let scored = RiskSeverityScorer
        .score(&query(), &risk_candidates())
        .await
        .unwrap();
    let scores: Vec<f64> = scored.iter().map(|c| c.score.unwrap()).collect();

    assert!(scores.windows(2).all(|w| w[0] > w[1]), "{scores:?}");
    // 3 × ln(12001) × 1.5
    assert!((scores[0] - 3.0 * 12_001f64.ln() * 1.5).abs() < 1e-9);
}

#[test]
fn top_k_selector_truncates_and_orders() {
    let mut candidates = risk_candidates();
    for (c, s) in candidates.iter_mut().zip([1.0, 4.0, f64::NAN, 3.0]) {
        c.score = Some(s);
    }
    let selected = TopKSelector { k: 3 }.select(&query(), candidates);
    assert_eq!(risk_ids(&selected), vec![2, 4, 1]);
}

// ---------------------------------------------------------------------------
// Risk pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn risk_digest_end_to_end() {
    let result = RiskDigestPipeline::new().execute(query()).await;

    assert_eq!(result.retrieved_candidates.len(), 4);
    assert!(result.filtered_candidates.is_empty());
    assert_eq!(risk_ids(&result.selected_candidates), vec![1, 2, 3, 4]);
    for c in &result.selected_candidates {
        assert!(c.score.is_some());
        assert!(c.group.is_some());
    }
}

#[tokio::test]
async fn risk_digest_respects_result_size() {
    let pipeline = RiskDigestPipeline::with_alerts_and_size(dataset::risk_alerts(), 2);
    let result = pipeline.execute(query()).await;
    assert_eq!(risk_ids(&result.selected_candidates), vec![1, 2]);
}

#[tokio::test]
async fn risk_digest_applies_query_filters() {
    let q = DashboardQuery {
        min_severity: Severity::Medium,
        risk_categories: Some(vec!["Market Risk".into(), "Cash Flow".into()]),
        ..query()
    };
    let result = RiskDigestPipeline::new().execute(q).await;

    assert_eq!(risk_ids(&result.selected_candidates), vec![2, 3]);
    assert_eq!(result.filtered_candidates.len(), 2);
}

#[tokio::test]
async fn risk_digest_with_no_alerts_is_empty() {
    let pipeline = RiskDigestPipeline::with_alerts_and_size(Vec::new(), 5);
    let result = pipeline.execute(query()).await;
    assert!(result.retrieved_candidates.is_empty());
    assert!(result.selected_candidates.is_empty());
}

#[tokio::test]
async fn empty_request_id_is_filled_in() {
    let pipeline = RiskDigestPipeline::new();
    let first = pipeline.execute(DashboardQuery::default()).await;
    let second = pipeline.execute(DashboardQuery::default()).await;
    assert_eq!(first.query.request_id, "risks-1");
    assert_eq!(second.query.request_id, "risks-2");

    let kept = pipeline.execute(query()).await;
    assert_eq!(kept.query.request_id, "test");
}

// ---------------------------------------------------------------------------
// Recommendation pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn board_keeps_everything_by_default() {
    let result = RecommendationBoardPipeline::new().execute(query()).await;
    assert_eq!(rec_ids(&result.selected_candidates), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn board_orders_by_priority_and_keeps_ties_stable() {
    let mut recs = dataset::recommendations();
    recs[4].priority = Priority::High;
    recs[0].priority = Priority::Low;

    let result = RecommendationBoardPipeline::with_recommendations(recs)
        .execute(query())
        .await;
    assert_eq!(rec_ids(&result.selected_candidates), vec![2, 5, 3, 4, 1]);
}

#[tokio::test]
async fn board_category_filter() {
    let q = DashboardQuery {
        recommendation_category: CategoryFilter::Only(RecommendationCategory::CostReduction),
        ..query()
    };
    let result = RecommendationBoardPipeline::new().execute(q).await;
    assert_eq!(rec_ids(&result.selected_candidates), vec![2]);
    assert_eq!(result.filtered_candidates.len(), 4);
}

#[tokio::test]
async fn board_status_filter() {
    let q = DashboardQuery {
        recommendation_status: Some(RecommendationStatus::New),
        ..query()
    };
    let result = RecommendationBoardPipeline::new().execute(q).await;
    assert_eq!(rec_ids(&result.selected_candidates), vec![1, 3, 4]);
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

#[test]
fn category_counts_in_button_order() {
    let counts = category_counts(&dataset::recommendations());
    let labels: Vec<&str> = counts.iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        vec!["All Recommendations", "Marketing", "Cost Reduction", "Revenue", "Funding", "HR"]
    );
    assert_eq!(counts[0].count, 5);
    assert!(counts[1..].iter().all(|c| c.count == 1));
}

#[test]
fn category_counts_list_empty_categories() {
    let only_marketing: Vec<_> = dataset::recommendations()
        .into_iter()
        .filter(|r| r.category == RecommendationCategory::Marketing)
        .collect();
    let counts = category_counts(&only_marketing);
    assert_eq!(counts.len(), 6);
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[5].count, 0);
}

#[test]
fn quick_wins_are_low_effort_by_impact() {
    let recs = dataset::recommendations();
    let wins: Vec<u32> = quick_wins(&recs).iter().map(|r| r.id).collect();
    // coffee beans RM 18,000 before menu pricing RM 12,000
    assert_eq!(wins, vec![2, 5]);
}

#[test]
fn quick_wins_skip_low_priority() {
    let mut recs = dataset::recommendations();
    recs[1].priority = Priority::Low;
    let wins: Vec<u32> = quick_wins(&recs).iter().map(|r| r.id).collect();
    assert_eq!(wins, vec![5]);
}
