//! The staged candidate pipeline.
//!
//! A pipeline is a bundle of stage components plus a default `execute`
//! that drives them in a fixed order:
//!
//! 1. query hydrators
//! 2. sources
//! 3. hydrators
//! 4. filters
//! 5. scorers
//! 6. selector
//! 7. post-selection hydrators and filters
//! 8. side effects
//!
//! A failing stage is logged and contributes nothing. `execute` itself
//! never fails.

use async_trait::async_trait;
use std::sync::Arc;

use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::{SideEffect, SideEffectInput};
use crate::source::Source;

/// Queries carry a request id so every log line of one run can be joined.
pub trait HasRequestId {
    fn request_id(&self) -> &str;
}

pub struct PipelineResult<Q, C> {
    /// The query after hydration.
    pub query: Arc<Q>,
    /// Everything the sources produced.
    pub retrieved_candidates: Vec<C>,
    /// Candidates any filter removed, pre- or post-selection.
    pub filtered_candidates: Vec<C>,
    pub selected_candidates: Vec<C>,
}

#[async_trait]
pub trait CandidatePipeline<Q, C>: Send + Sync
where
    Q: HasRequestId + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<Q>>];
    fn sources(&self) -> &[Box<dyn Source<Q, C>>];
    fn hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn scorers(&self) -> &[Box<dyn Scorer<Q, C>>];
    fn selector(&self) -> &dyn Selector<Q, C>;
    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn post_selection_filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<Q, C>>>>;

    /// Hard cap on the selected candidates, applied after the selector.
    fn result_size(&self) -> usize;

    async fn execute(&self, query: Q) -> PipelineResult<Q, C> {
        let query = self.hydrate_query(query).await;

        let retrieved = self.fetch_candidates(&query).await;
        let hydrated = self
            .hydrate(&query, retrieved.clone(), self.hydrators())
            .await;
        let (kept, mut filtered) = self.filter(&query, hydrated, self.filters()).await;
        let scored = self.score(&query, kept).await;

        let selected = self.select(&query, scored);
        let selected = self
            .hydrate(&query, selected, self.post_selection_hydrators())
            .await;
        let (mut selected, removed) = self
            .filter(&query, selected, self.post_selection_filters())
            .await;
        filtered.extend(removed);
        selected.truncate(self.result_size());

        log::debug!(
            "request_id={} retrieved={} filtered={} selected={}",
            query.request_id(),
            retrieved.len(),
            filtered.len(),
            selected.len()
        );

        let query = Arc::new(query);
        self.run_side_effects(Arc::new(SideEffectInput {
            query: Arc::clone(&query),
            selected_candidates: selected.clone(),
        }))
        .await;

        PipelineResult {
            query,
            retrieved_candidates: retrieved,
            filtered_candidates: filtered,
            selected_candidates: selected,
        }
    }

    async fn hydrate_query(&self, query: Q) -> Q {
        let mut query = query;
        for hydrator in self.query_hydrators() {
            if !hydrator.enable(&query) {
                continue;
            }
            match hydrator.hydrate(&query).await {
                Ok(hydrated) => hydrator.update(&mut query, hydrated),
                Err(err) => log::warn!(
                    "request_id={} query hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    err
                ),
            }
        }
        query
    }

    async fn fetch_candidates(&self, query: &Q) -> Vec<C> {
        let mut candidates = Vec::new();
        for source in self.sources() {
            if !source.enable(query) {
                continue;
            }
            match source.get_candidates(query).await {
                Ok(found) => {
                    log::debug!(
                        "request_id={} source {} fetched {}",
                        query.request_id(),
                        source.name(),
                        found.len()
                    );
                    candidates.extend(found);
                }
                Err(err) => log::warn!(
                    "request_id={} source {} failed: {}",
                    query.request_id(),
                    source.name(),
                    err
                ),
            }
        }
        candidates
    }

    async fn hydrate(
        &self,
        query: &Q,
        candidates: Vec<C>,
        hydrators: &[Box<dyn Hydrator<Q, C>>],
    ) -> Vec<C> {
        let mut candidates = candidates;
        for hydrator in hydrators {
            if !hydrator.enable(query) {
                continue;
            }
            match hydrator.hydrate(query, &candidates).await {
                Ok(hydrated) if hydrated.len() == candidates.len() => {
                    hydrator.update_all(&mut candidates, hydrated)
                }
                Ok(hydrated) => log::warn!(
                    "request_id={} hydrator {} returned {} values for {} candidates",
                    query.request_id(),
                    hydrator.name(),
                    hydrated.len(),
                    candidates.len()
                ),
                Err(err) => log::warn!(
                    "request_id={} hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    err
                ),
            }
        }
        candidates
    }

    /// Returns (kept, removed). A failing filter keeps everything it saw.
    async fn filter(
        &self,
        query: &Q,
        candidates: Vec<C>,
        filters: &[Box<dyn Filter<Q, C>>],
    ) -> (Vec<C>, Vec<C>) {
        let mut kept = candidates;
        let mut removed = Vec::new();
        for filter in filters {
            if !filter.enable(query) {
                continue;
            }
            let backup = kept.clone();
            match filter.filter(query, kept).await {
                Ok(result) => {
                    log::debug!(
                        "request_id={} filter {} removed {}",
                        query.request_id(),
                        filter.name(),
                        result.removed.len()
                    );
                    kept = result.kept;
                    removed.extend(result.removed);
                }
                Err(err) => {
                    log::warn!(
                        "request_id={} filter {} failed: {}",
                        query.request_id(),
                        filter.name(),
                        err
                    );
                    kept = backup;
                }
            }
        }
        (kept, removed)
    }

    async fn score(&self, query: &Q, candidates: Vec<C>) -> Vec<C> {
        let mut candidates = candidates;
        for scorer in self.scorers() {
            if !scorer.enable(query) {
                continue;
            }
            match scorer.score(query, &candidates).await {
                Ok(scored) if scored.len() == candidates.len() => {
                    scorer.update_all(&mut candidates, scored)
                }
                Ok(scored) => log::warn!(
                    "request_id={} scorer {} returned {} values for {} candidates",
                    query.request_id(),
                    scorer.name(),
                    scored.len(),
                    candidates.len()
                ),
                Err(err) => log::warn!(
                    "request_id={} scorer {} failed: {}",
                    query.request_id(),
                    scorer.name(),
                    err
                ),
            }
        }
        candidates
    }

    fn select(&self, query: &Q, candidates: Vec<C>) -> Vec<C> {
        let selector = self.selector();
        if selector.enable(query) {
            selector.select(query, candidates)
        } else {
            candidates
        }
    }

    async fn run_side_effects(&self, input: Arc<SideEffectInput<Q, C>>) {
        let side_effects = self.side_effects();
        for effect in side_effects.iter() {
            if !effect.enable(Arc::clone(&input.query)) {
                continue;
            }
            if let Err(err) = effect.run(Arc::clone(&input)).await {
                log::warn!(
                    "request_id={} side effect {} failed: {}",
                    input.query.request_id(),
                    effect.name(),
                    err
                );
            }
        }
    }
}
