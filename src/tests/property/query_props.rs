//! Property-based tests for the query engine
//!
//! Tests invariants:
//! - Filtering agrees with a hand-written reading of the matching rules
//! - Unconstrained filters with an empty search return nothing
//! - Search results score above the cut-off, best first
//! - An empty search never reorders the catalog

use proptest::prelude::*;

use crate::core::catalog::{Catalog, GatherableType, ItemRecord};
use crate::core::dimension::Dimension;
use crate::core::filter::FilterSet;
use crate::core::query::{query, query_with, SearchOptions, DEFAULT_MIN_SCORE};
use crate::tests::common::ItemBuilder;

// ============================================================================
// Strategies
// ============================================================================

fn arb_option(dim: Dimension) -> impl Strategy<Value = String> {
    prop::sample::select(dim.options()).prop_map(str::to_string)
}

fn arb_values(dim: Dimension) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_option(dim), 1..3)
}

fn arb_record() -> impl Strategy<Value = ItemRecord> {
    (
        prop::option::of(prop::sample::select(GatherableType::ALL.to_vec())),
        0i64..500,
        prop::option::of(arb_values(Dimension::Season)),
        prop::option::of(arb_values(Dimension::Tool)),
        prop::option::of(arb_values(Dimension::Weather)),
        prop::option::of(arb_values(Dimension::Time)),
        prop::option::of(arb_values(Dimension::Trait)),
    )
        .prop_map(|(gatherable, price, season, tool, weather, time, trait_values)| {
            let mut builder = ItemBuilder::new(price);
            if let Some(g) = gatherable {
                builder = builder.gatherable(g);
            }
            for (dim, values) in [
                (Dimension::Season, season),
                (Dimension::Tool, tool),
                (Dimension::Weather, weather),
                (Dimension::Time, time),
                (Dimension::Trait, trait_values),
            ] {
                if let Some(values) = values {
                    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
                    builder = builder.quality(dim.key(), &refs);
                }
            }
            builder.build()
        })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[A-Z][a-z]{2,9}", arb_record()), 1..12)
        .prop_map(|items| items.into_iter().collect())
}

fn arb_filters() -> impl Strategy<Value = FilterSet> {
    (
        prop::option::of(arb_option(Dimension::GatherableType)),
        prop::option::of(arb_option(Dimension::Season)),
        prop::option::of(arb_option(Dimension::Tool)),
        prop::option::of(arb_option(Dimension::Weather)),
        prop::option::of(arb_option(Dimension::Time)),
    )
        .prop_map(|(gatherable, season, tool, weather, time)| {
            let mut filters = FilterSet::new();
            for (dim, value) in [
                (Dimension::GatherableType, gatherable),
                (Dimension::Season, season),
                (Dimension::Tool, tool),
                (Dimension::Weather, weather),
                (Dimension::Time, time),
            ] {
                if let Some(value) = value {
                    filters.set(dim, value);
                }
            }
            filters
        })
}

// ============================================================================
// Reference predicate
// ============================================================================

/// Tool tiers lowest first, written out here so the check does not lean on
/// the dimension table.
const TIER_ORDER: [&str; 8] = [
    "Apprentice+",
    "Journeyman+",
    "Craftsman+",
    "Artisan+",
    "Adept+",
    "Expert+",
    "Master+",
    "Legendary+",
];

fn tier(value: &str) -> Option<usize> {
    TIER_ORDER.iter().position(|t| *t == value)
}

/// The filtering rules, spelled out member by member.
fn expected_admits(filters: &FilterSet, record: &ItemRecord) -> bool {
    filters.active().all(|(dim, selected)| {
        if dim == Dimension::GatherableType {
            return record.gatherable_type.map(|g| g.as_str()) == Some(selected);
        }
        let Some(stored) = record.quality.get(dim.key()) else {
            return false;
        };
        stored.iter().any(|value| {
            if value == selected {
                return true;
            }
            match dim {
                Dimension::Season => selected.len() > 6 && value.get(..6) == selected.get(..6),
                Dimension::Tool => matches!(
                    (tier(value), tier(selected)),
                    (Some(item), Some(chosen)) if item < chosen
                ),
                Dimension::Time => stored.iter().any(|v| v == selected),
                Dimension::Weather => value == "Not Rain" && selected != "Rain",
                _ => false,
            }
        })
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_no_false_positives(catalog in arb_catalog(), filters in arb_filters()) {
        for m in query(&catalog, &filters, "") {
            prop_assert!(expected_admits(&filters, &m.record), "{} slipped through", m.id);
        }
    }

    #[test]
    fn prop_filtering_is_complete(catalog in arb_catalog(), filters in arb_filters()) {
        prop_assume!(!filters.is_unconstrained());
        let result = query(&catalog, &filters, "");
        let expected = catalog.iter().filter(|(_, r)| expected_admits(&filters, r)).count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn prop_unconstrained_empty_search_is_empty(catalog in arb_catalog()) {
        prop_assert!(query(&catalog, &FilterSet::new(), "").is_empty());
    }

    #[test]
    fn prop_empty_search_keeps_catalog_order(catalog in arb_catalog(), filters in arb_filters()) {
        let result = query(&catalog, &filters, "");
        let ids: Vec<&String> = result.iter().map(|m| &m.id).collect();
        let expected: Vec<&String> = catalog
            .iter()
            .filter(|(_, r)| expected_admits(&filters, r))
            .map(|(id, _)| id)
            .collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(result.iter().all(|m| m.score.is_none()));
    }

    #[test]
    fn prop_search_scores_above_cutoff_and_sorted(
        catalog in arb_catalog(),
        search in "[a-zA-Z]{1,10}",
    ) {
        let result = query(&catalog, &FilterSet::new(), &search);
        let scores: Vec<u8> = result.iter().filter_map(|m| m.score).collect();
        prop_assert_eq!(scores.len(), result.len());
        prop_assert!(scores.iter().all(|s| *s > DEFAULT_MIN_SCORE));
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_raising_cutoff_only_removes(
        catalog in arb_catalog(),
        search in "[a-z]{1,8}",
        cutoff in 50u8..100,
    ) {
        let loose = query(&catalog, &FilterSet::new(), &search);
        let strict = query_with(
            &catalog,
            &FilterSet::new(),
            &search,
            &SearchOptions { min_score: cutoff },
        );
        prop_assert!(strict.len() <= loose.len());
        for m in &strict {
            prop_assert!(loose.iter().any(|l| l.id == m.id));
        }
    }

    #[test]
    fn prop_exact_name_is_found(catalog in arb_catalog()) {
        let Some(id) = catalog.ids().next().cloned() else {
            return Ok(());
        };
        let result = query(&catalog, &FilterSet::new(), &id);
        prop_assert!(result.iter().any(|m| m.id == id && m.score == Some(100)));
    }
}
