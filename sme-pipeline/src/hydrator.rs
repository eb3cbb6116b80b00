use async_trait::async_trait;

use crate::util;

/// Enriches candidates with derived fields.
///
/// `hydrate` returns one value per input candidate, in the same order;
/// `update` copies just the fields this hydrator owns onto the original.
/// A hydrator that returns the wrong number of values is skipped.
#[async_trait]
pub trait Hydrator<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    async fn hydrate(&self, query: &Q, candidates: &[C]) -> Result<Vec<C>, String>;

    fn update(&self, candidate: &mut C, hydrated: C);

    fn update_all(&self, candidates: &mut [C], hydrated: Vec<C>) {
        for (candidate, h) in candidates.iter_mut().zip(hydrated) {
            self.update(candidate, h);
        }
    }

    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
