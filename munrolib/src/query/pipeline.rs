//! Query evaluation: filter, sort, limit.
//!
//! The pipeline is:
//! 1. Filter: keep records matching every predicate of the query
//! 2. Sort: stable sort by the key chain, primary key first
//! 3. Limit: keep the first `n` records
//!
//! Each stage works on borrowed records and never reorders anything it was
//! not asked to, so the same dataset and query always give the same result.

use std::cmp::Ordering;

use crate::data::munro::Munro;

use super::builder::Query;
use super::options::{Filter, SortKey};

/// Run the whole pipeline over a dataset.
pub fn evaluate<'a>(munros: &'a [Munro], query: &Query) -> Vec<&'a Munro> {
    let mut results = filter(munros, &query.filters());
    let matched = results.len();

    sort(&mut results, query.sort_keys());
    limit(&mut results, query.limit());

    tracing::debug!(
        criteria = ?query,
        matched,
        returned = results.len(),
        "evaluated query"
    );
    results
}

/// Keep the records satisfying all filters, in their original order.
pub fn filter<'a>(munros: &'a [Munro], filters: &[Filter]) -> Vec<&'a Munro> {
    munros
        .iter()
        .filter(|munro| filters.iter().all(|f| f.matches(munro)))
        .collect()
}

/// Stable sort by the key chain. Records equal on every key keep their order.
pub fn sort(munros: &mut [&Munro], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    munros.sort_by(|a, b| compare_chain(keys, a, b));
}

/// Truncate to at most `n` records; `None` keeps everything.
pub fn limit(munros: &mut Vec<&Munro>, n: Option<usize>) {
    if let Some(n) = n {
        munros.truncate(n);
    }
}

fn compare_chain(keys: &[SortKey], a: &Munro, b: &Munro) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
