use async_trait::async_trait;

use crate::util;

/// Fills in query fields before any candidate is fetched.
#[async_trait]
pub trait QueryHydrator<Q>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
{
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Return a copy of the query with this hydrator's fields populated.
    async fn hydrate(&self, query: &Q) -> Result<Q, String>;

    /// Copy only the fields this hydrator owns.
    fn update(&self, query: &mut Q, hydrated: Q);

    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
