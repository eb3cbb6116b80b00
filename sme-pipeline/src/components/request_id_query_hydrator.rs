use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::query_hydrator::QueryHydrator;
use crate::types::DashboardQuery;

/// Gives queries without a request id a sequential one, e.g. `risks-3`.
pub struct RequestIdQueryHydrator {
    prefix: &'static str,
    next: AtomicU64,
}

impl RequestIdQueryHydrator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl QueryHydrator<DashboardQuery> for RequestIdQueryHydrator {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.request_id.is_empty()
    }

    async fn hydrate(&self, query: &DashboardQuery) -> Result<DashboardQuery, String> {
        let seq = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(DashboardQuery {
            request_id: format!("{}-{}", self.prefix, seq),
            ..query.clone()
        })
    }

    fn update(&self, query: &mut DashboardQuery, hydrated: DashboardQuery) {
        query.request_id = hydrated.request_id;
    }
}
