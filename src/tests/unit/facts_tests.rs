//! Fact extraction over builder-made records.

use rstest::rstest;

use crate::core::catalog::GatherableType;
use crate::core::facts::{extract_facts, ColorHint, Fact, FactCategory, BROWN, GREY, PALE_GREY};
use crate::core::icons::IconKey;
use crate::tests::common::{sample_catalog, ItemBuilder};

fn labels(facts: &[Fact]) -> Vec<&str> {
    facts.iter().map(|f| f.label.as_str()).collect()
}

#[test]
fn test_sample_items_start_with_price_and_locations() {
    let catalog = sample_catalog();
    for (id, record) in catalog.iter() {
        let facts = extract_facts(record);
        assert_eq!(facts[0].category, FactCategory::Price, "{id}");
        assert_eq!(facts[0].label, record.price.to_string());
        assert_eq!(facts[1].label, "Location");

        let locations: Vec<&str> = facts
            .iter()
            .filter(|f| f.category == FactCategory::Location)
            .map(|f| f.label.as_str())
            .collect();
        let expected: Vec<&str> = record.location.iter().map(String::as_str).collect();
        assert_eq!(locations, expected, "{id}");
    }
}

#[test]
fn test_spawn_facts_precede_quality_header() {
    let catalog = sample_catalog();
    let facts = extract_facts(catalog.get("Pigeon").unwrap());
    assert_eq!(
        labels(&facts),
        vec![
            "8",
            "Location",
            "Bramblewood",
            "Spawn Info",
            "Area: North",
            "Season: Summer",
            "Item Quality",
            "Follower: Dog",
            "Trait: Bravery",
            "Trait: Agility",
        ]
    );
}

#[test]
fn test_no_spawn_header_without_spawn_data() {
    let facts = extract_facts(&ItemBuilder::new(1).quality("time", &["Night"]).build());
    assert!(facts.iter().all(|f| f.category != FactCategory::SpawnHeader));
}

#[rstest]
#[case::mining(Some(GatherableType::Mining), "Pickaxe: Adept+")]
#[case::fishing(Some(GatherableType::Fishing), "Rod: Adept+")]
#[case::growing(Some(GatherableType::Growing), "Sickle: Adept+")]
#[case::gathering(Some(GatherableType::Gathering), "Sickle: Adept+")]
#[case::shooting(Some(GatherableType::Shooting), "Slingshot: Adept+")]
#[case::untyped(None, "Tool: Adept+")]
fn test_tool_fact_names_the_tool(
    #[case] gatherable: Option<GatherableType>,
    #[case] expected: &str,
) {
    let mut builder = ItemBuilder::new(1).quality("tool", &["Adept+"]);
    if let Some(g) = gatherable {
        builder = builder.gatherable(g);
    }
    let facts = extract_facts(&builder.build());
    let tool = facts.last().unwrap();
    assert_eq!(tool.label, expected);
    assert_eq!(tool.color, ColorHint::Fixed(GREY));
}

#[test]
fn test_poo_fact_uses_poo_icon() {
    let catalog = sample_catalog();
    let facts = extract_facts(catalog.get("Snowdrop").unwrap());
    let poo = facts.last().unwrap();
    assert_eq!(poo.label, "Fertilizer: 2 Poo");
    assert_eq!(poo.icon, Some(IconKey::Poo));
    assert_eq!(poo.color, ColorHint::Fixed(BROWN));
}

#[test]
fn test_misc_emits_one_fact_per_value() {
    let facts = extract_facts(
        &ItemBuilder::new(1)
            .quality("misc", &["Wet", "Shiny", "Cold"])
            .build(),
    );
    let misc: Vec<&Fact> = facts
        .iter()
        .filter(|f| f.label.starts_with("Misc"))
        .collect();
    assert_eq!(misc.len(), 3);
    assert!(misc.iter().all(|f| f.color == ColorHint::Fixed(PALE_GREY)));
}

#[test]
fn test_week_season_shares_base_icon() {
    let catalog = sample_catalog();
    let facts = extract_facts(catalog.get("Snowdrop").unwrap());
    let season = facts
        .iter()
        .find(|f| f.label.starts_with("Season"))
        .unwrap();
    assert_eq!(season.label, "Season: Winter w2");
    assert_eq!(season.icon, Some(IconKey::Season("winter".into())));
}
