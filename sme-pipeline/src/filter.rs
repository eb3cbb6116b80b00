use async_trait::async_trait;

use crate::util;

/// Outcome of one filter: what continues down the pipeline and what was
/// dropped.
pub struct FilterResult<C> {
    pub kept: Vec<C>,
    pub removed: Vec<C>,
}

impl<C> FilterResult<C> {
    /// Split candidates on a predicate, preserving order on both sides.
    pub fn partition(candidates: Vec<C>, keep: impl FnMut(&C) -> bool) -> Self {
        let (kept, removed) = candidates.into_iter().partition(keep);
        Self { kept, removed }
    }
}

/// Filters run one after another. A candidate removed by an earlier filter
/// is never seen by a later one.
#[async_trait]
pub trait Filter<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Filters that have nothing to do for this query return `false`.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    async fn filter(&self, query: &Q, candidates: Vec<C>) -> Result<FilterResult<C>, String>;

    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
