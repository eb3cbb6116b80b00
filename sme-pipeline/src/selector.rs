use std::cmp::Ordering;

use crate::util;

/// Orders scored candidates and optionally truncates them.
pub trait Selector<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn select(&self, _query: &Q, candidates: Vec<C>) -> Vec<C> {
        let mut sorted = self.sort(candidates);
        if let Some(limit) = self.size() {
            sorted.truncate(limit);
        }
        sorted
    }

    fn enable(&self, _query: &Q) -> bool {
        true
    }

    fn score(&self, candidate: &C) -> f64;

    /// Highest score first. The sort is stable, so equal scores keep their
    /// incoming order, and NaN scores always sink to the bottom.
    fn sort(&self, candidates: Vec<C>) -> Vec<C> {
        let mut sorted = candidates;
        sorted.sort_by(|a, b| descending_nan_last(self.score(a), self.score(b)));
        sorted
    }

    /// Maximum number of candidates to keep; `None` keeps all of them.
    fn size(&self) -> Option<usize> {
        None
    }

    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_sorts_after_everything() {
        let mut v = vec![1.0, f64::NAN, 3.0, f64::NEG_INFINITY, 2.0];
        v.sort_by(|a, b| descending_nan_last(*a, *b));
        assert_eq!(&v[..4], &[3.0, 2.0, 1.0, f64::NEG_INFINITY]);
        assert!(v[4].is_nan());
    }
}
