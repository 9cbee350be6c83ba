//! Query engine tests over the shared sample catalog.

use rstest::rstest;

use crate::core::catalog::{Catalog, GatherableType};
use crate::core::dimension::Dimension;
use crate::core::filter::FilterSet;
use crate::core::query::{query, Match};
use crate::tests::common::{catalog_of, sample_catalog, ItemBuilder};

fn ids(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.id.as_str()).collect()
}

fn filtered(dim: Dimension, value: &str) -> Vec<String> {
    let mut filters = FilterSet::new();
    filters.set(dim, value);
    query(&sample_catalog(), &filters, "")
        .into_iter()
        .map(|m| m.id)
        .collect()
}

#[rstest]
#[case::membership(Dimension::Season, "Spring", &["Apple"])]
#[case::week_selection_admits_base(Dimension::Season, "Spring w2", &["Apple"])]
#[case::base_selection_skips_weeks(Dimension::Season, "Winter", &[])]
#[case::week_to_week_same_base(Dimension::Season, "Winter w1", &["Snowdrop"])]
#[case::tool_equality(Dimension::Tool, "Journeyman+", &["Copper"])]
#[case::tool_lower_tier(Dimension::Tool, "Master+", &["Copper"])]
#[case::tool_lowest_tier(Dimension::Tool, "Apprentice+", &[])]
#[case::time_membership(Dimension::Time, "Dusk", &["GoldenCarp"])]
#[case::time_no_partial(Dimension::Time, "Dawn/Dusk", &[])]
#[case::weather_not_rain(Dimension::Weather, "Foggy", &["GoldenCarp"])]
#[case::weather_rain(Dimension::Weather, "Rain", &[])]
#[case::weather_exact(Dimension::Weather, "Snow", &["GoldenCarp", "Snowdrop"])]
#[case::follower(Dimension::Follower, "Dog", &["Pigeon"])]
#[case::trait_in_set(Dimension::Trait, "Agility", &["Pigeon"])]
#[case::gatherable(Dimension::GatherableType, "Fishing", &["GoldenCarp"])]
fn test_single_dimension(
    #[case] dim: Dimension,
    #[case] value: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(filtered(dim, value), expected);
}

/// Spawn conditions never take part in filtering.
#[test]
fn test_spawn_attributes_are_not_filtered() {
    assert!(filtered(Dimension::Season, "Summer").is_empty());
}

/// Any weather except rain passes a "Not Rain" item, including Sunny.
#[test]
fn test_sunny_admits_not_rain() {
    assert_eq!(filtered(Dimension::Weather, "Sunny"), vec!["GoldenCarp"]);
}

#[test]
fn test_dimensions_are_conjunctive() {
    let mut filters = FilterSet::new();
    filters.set(Dimension::Weather, "Snow");
    filters.set(Dimension::GatherableType, "Gathering");
    assert_eq!(ids(&query(&sample_catalog(), &filters, "")), vec!["Snowdrop"]);

    filters.set(Dimension::Season, "Spring");
    assert!(query(&sample_catalog(), &filters, "").is_empty());
}

#[test]
fn test_search_within_filter() {
    let mut filters = FilterSet::new();
    filters.set(Dimension::Weather, "Snow");
    let matches = query(&sample_catalog(), &filters, "snowdrp");
    assert_eq!(ids(&matches), vec!["Snowdrop"]);
    assert!(matches[0].score.is_some_and(|s| s > 50));
}

#[test]
fn test_search_ranks_by_score() {
    let catalog = catalog_of(vec![
        ("Carrot", ItemBuilder::new(1).build()),
        ("Carp", ItemBuilder::new(2).build()),
        ("Cart", ItemBuilder::new(3).build()),
    ]);
    let matches = query(&catalog, &FilterSet::new(), "carp");
    assert_eq!(ids(&matches)[0], "Carp");
    let scores: Vec<u8> = matches.iter().filter_map(|m| m.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

/// Equal scores keep catalog order.
#[test]
fn test_search_ties_keep_catalog_order() {
    let catalog = catalog_of(vec![
        ("Bat", ItemBuilder::new(1).build()),
        ("Cat", ItemBuilder::new(1).build()),
        ("Rat", ItemBuilder::new(1).build()),
    ]);
    let matches = query(&catalog, &FilterSet::new(), "at");
    assert_eq!(ids(&matches), vec!["Bat", "Cat", "Rat"]);
}

#[test]
fn test_end_to_end_apple() {
    let catalog = Catalog::from_json_str(
        r#"{"Apple": {"gatherable_type": "Growing", "price": 5,
                      "location": ["Meadow"], "quality": {"season": "Spring"}}}"#,
    )
    .unwrap();

    let matches = query(&catalog, &FilterSet::new(), "Aple");
    assert_eq!(ids(&matches), vec!["Apple"]);
    assert_eq!(matches[0].record.gatherable_type, Some(GatherableType::Growing));
    assert_eq!(matches[0].record.price, 5);

    let mut fishing = FilterSet::new();
    fishing.set(Dimension::GatherableType, "Fishing");
    assert!(query(&catalog, &fishing, "").is_empty());
}

/// Results are copies; the catalog is untouched by what callers do with them.
#[test]
fn test_matches_are_independent_copies() {
    let catalog = sample_catalog();
    let mut matches = query(&catalog, &FilterSet::new(), "Apple");
    matches[0].record.price = 999;
    assert_eq!(catalog.get("Apple").map(|r| r.price), Some(5));
}
