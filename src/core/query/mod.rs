//! Query engine: filter selections + search text → ordered matches.
//!
//! Pure over its inputs. Every call rebuilds the full result; matched
//! records are copies so renderers cannot touch the shared catalog.

pub mod matchers;
pub mod similarity;

use crate::core::catalog::{Catalog, ItemId, ItemRecord};
use crate::core::dimension::Dimension;
use crate::core::filter::FilterSet;

/// Default cut-off: results scoring at or below this are dropped.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Search tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Results with similarity `<= min_score` are dropped.
    pub min_score: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// One matched item.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: ItemId,
    pub record: ItemRecord,
    /// Similarity to the search text; `None` when no search was given.
    pub score: Option<u8>,
}

/// Run a query with default search options.
pub fn query(catalog: &Catalog, filters: &FilterSet, search: &str) -> Vec<Match> {
    query_with(catalog, filters, search, &SearchOptions::default())
}

/// Run a query.
///
/// Nothing is returned while no filter is set and the search is empty.
pub fn query_with(
    catalog: &Catalog,
    filters: &FilterSet,
    search: &str,
    options: &SearchOptions,
) -> Vec<Match> {
    if filters.is_unconstrained() && search.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<Match> = catalog
        .iter()
        .filter(|(_, record)| admits(filters, record))
        .map(|(id, record)| Match {
            id: id.clone(),
            record: record.clone(),
            score: None,
        })
        .collect();

    if search.is_empty() {
        log::debug!(
            "Query with {} active filters matched {} items",
            filters.active_count(),
            matches.len()
        );
        return matches;
    }

    let needle = search.to_lowercase();
    for m in &mut matches {
        m.score = Some(similarity::ratio(&needle, &m.id.to_lowercase()));
    }

    // Stable: equal scores keep catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    let filtered = matches.len();
    matches.retain(|m| m.score.is_some_and(|s| s > options.min_score));

    log::debug!(
        "Search {search:?} kept {} of {filtered} filtered items",
        matches.len()
    );
    matches
}

/// Whether `record` satisfies every active filter.
pub fn admits(filters: &FilterSet, record: &ItemRecord) -> bool {
    filters
        .active()
        .all(|(dim, selected)| dimension_admits(dim, selected, record))
}

fn dimension_admits(dim: Dimension, selected: &str, record: &ItemRecord) -> bool {
    match dim {
        Dimension::GatherableType => record
            .gatherable_type
            .is_some_and(|g| g.as_str() == selected),
        _ => record
            .quality
            .get(dim.key())
            .is_some_and(|stored| matchers::accepts(dim, selected, stored)),
    }
}
