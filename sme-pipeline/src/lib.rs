//! Staged candidate pipelines for the dashboard's risk and recommendation
//! pages.

pub mod candidate_pipeline;
pub mod components;
pub mod filter;
pub mod hydrator;
pub mod pipelines;
pub mod query_hydrator;
pub mod scorer;
pub mod selector;
pub mod side_effect;
pub mod source;
pub mod types;
pub mod util;
