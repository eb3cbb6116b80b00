pub mod log_side_effect;
pub mod priority_scorer;
pub mod priority_selector;
pub mod recommendation_filters;
pub mod request_id_query_hydrator;
pub mod risk_category_filter;
pub mod risk_group_hydrator;
pub mod risk_severity_scorer;
pub mod sample_recommendation_source;
pub mod sample_risk_source;
pub mod severity_filter;
pub mod top_k_selector;
