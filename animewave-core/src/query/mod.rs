//! The catalog search pipeline.
//!
//! `search` is a pure function of the catalog snapshot and the criteria:
//! it never mutates either, and repeated invocation with identical inputs
//! yields identical output regardless of favorites state or prior
//! searches. Zero matches is a valid result, not an error; the caller is
//! responsible for distinguishing "searched with zero results" from "no
//! search performed" and for suppressing invocation while the query is
//! empty.

pub mod sorting;

use animewave_model::{AnimeEntry, Catalog, FilterCriteria};

pub use sorting::{compare_entries, sort_entries};

/// Narrow the catalog by the criteria, then apply the chosen ordering.
///
/// Filter stages, in order: case-insensitive substring match on the
/// title, genre membership (OR over the selected set; an empty selection
/// matches everything), inclusive release-year range, rating floor. The
/// sort is stable, so ties keep catalog iteration order.
pub fn search(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<AnimeEntry> {
    let needle = criteria.query.to_lowercase();

    let mut results: Vec<AnimeEntry> = catalog
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .filter(|entry| {
            criteria.genres.is_empty()
                || entry.genres.iter().any(|g| criteria.genres.contains(g))
        })
        .filter(|entry| {
            (criteria.year_from..=criteria.year_to).contains(&entry.year)
        })
        .filter(|entry| entry.rating >= criteria.min_rating)
        .cloned()
        .collect();

    sorting::sort_entries(&mut results, criteria.sort);

    tracing::debug!(
        query = %criteria.query,
        matches = results.len(),
        sort = %criteria.sort,
        "catalog search"
    );

    results
}
