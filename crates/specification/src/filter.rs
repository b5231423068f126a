//! The specification-driven filter.
//!
//! `BetterFilter` knows nothing about colors, sizes or any other criterion.
//! It scans a slice once and keeps what the specification accepts.

use crate::traits::{Filter, Specification, TrySpecification};
use rayon::prelude::*;

/// Generic, stateless filter.
///
/// ## Guarantees
/// - Result order is the input order
/// - Duplicates are kept (no deduplication)
/// - `result.len() <= items.len()`
/// - The input is only borrowed, never modified
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl BetterFilter {
    pub fn new() -> Self {
        Self
    }

    /// Same result as `Filter::filter`, evaluated on the rayon thread pool.
    ///
    /// Specifications are pure, so evaluating them from several threads is
    /// safe; `collect` keeps the original order.
    pub fn par_filter<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        T: Sync,
        S: Specification<T> + Sync + ?Sized,
    {
        let selected: Vec<&T> = items
            .par_iter()
            .filter(|item| spec.is_satisfied(*item))
            .collect();

        tracing::debug!(
            "Parallel filter applied: {} (input count: {}, output count: {})",
            spec.name(),
            items.len(),
            selected.len()
        );
        selected
    }

    /// Filter with a fallible specification.
    ///
    /// Stops at the first item whose evaluation fails and returns that error
    /// unchanged.
    pub fn try_filter<'a, T, S>(&self, items: &'a [T], spec: &S) -> Result<Vec<&'a T>, S::Error>
    where
        S: TrySpecification<T> + ?Sized,
    {
        let mut selected = Vec::new();
        for item in items {
            if spec.try_is_satisfied(item)? {
                selected.push(item);
            }
        }
        Ok(selected)
    }
}

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let selected: Vec<&T> = items
            .iter()
            .filter(|item| spec.is_satisfied(*item))
            .collect();

        tracing::debug!(
            "Filter applied: {} (input count: {}, output count: {})",
            spec.name(),
            items.len(),
            selected.len()
        );
        selected
    }
}
