//! Fact extraction: one item record → flat, ordered display facts.
//!
//! Order is fixed: price, location label and locations, then (when the
//! item has spawn data) a "Spawn Info" header and spawn facts, then an
//! "Item Quality" header and quality facts. Attribute facts follow the
//! record's key order. Keys with no rule below produce nothing.

use crate::core::catalog::{Attributes, GatherableType, ItemRecord, ValueSet};
use crate::core::dimension::Dimension;
use crate::core::icons::{IconKey, Rgb};

pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
pub const GREY: Rgb = Rgb(0xbe, 0xbe, 0xbe);
pub const LIGHT_GREEN: Rgb = Rgb(0x90, 0xee, 0x90);
pub const LIGHT_RED: Rgb = Rgb(0xff, 0x66, 0x66);
pub const PALE_GREY: Rgb = Rgb(0xe5, 0xe8, 0xe8);
pub const PINK: Rgb = Rgb(0xff, 0xc0, 0xcb);
pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
pub const BROWN: Rgb = Rgb(0xa5, 0x2a, 0x2a);

/// Fallback tool name for items without a gatherable type.
const GENERIC_TOOL: &str = "Tool";

/// Where a fact sits in the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactCategory {
    Price,
    LocationHeader,
    Location,
    SpawnHeader,
    Spawn,
    QualityHeader,
    Quality,
}

impl FactCategory {
    pub fn is_header(self) -> bool {
        matches!(
            self,
            Self::LocationHeader | Self::SpawnHeader | Self::QualityHeader
        )
    }
}

/// How a renderer should color a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHint {
    Fixed(Rgb),
    /// Average color of the fact's icon.
    FromIcon,
}

/// One display-worthy piece of information about an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub category: FactCategory,
    pub label: String,
    pub color: ColorHint,
    pub icon: Option<IconKey>,
}

impl Fact {
    fn new(category: FactCategory, label: impl Into<String>, color: Rgb) -> Self {
        Self {
            category,
            label: label.into(),
            color: ColorHint::Fixed(color),
            icon: None,
        }
    }

    fn with_icon(category: FactCategory, label: impl Into<String>, icon: IconKey) -> Self {
        Self {
            category,
            label: label.into(),
            color: ColorHint::FromIcon,
            icon: Some(icon),
        }
    }
}

/// Build the ordered fact list for one record.
pub fn extract_facts(record: &ItemRecord) -> Vec<Fact> {
    let mut facts = vec![Fact::with_icon(
        FactCategory::Price,
        record.price.to_string(),
        IconKey::Brass,
    )];

    facts.push(Fact::new(FactCategory::LocationHeader, "Location", WHITE));
    facts.extend(
        record
            .location
            .iter()
            .map(|loc| Fact::new(FactCategory::Location, loc.as_str(), LIGHT_GREEN)),
    );

    if let Some(spawn) = &record.spawn {
        facts.push(Fact::new(FactCategory::SpawnHeader, "Spawn Info", LIGHT_RED));
        push_attribute_facts(&mut facts, FactCategory::Spawn, spawn, record.gatherable_type);
    }

    let mut header = Fact::new(FactCategory::QualityHeader, "Item Quality", BLACK);
    header.icon = Some(IconKey::Star);
    facts.push(header);
    push_attribute_facts(
        &mut facts,
        FactCategory::Quality,
        &record.quality,
        record.gatherable_type,
    );

    facts
}

fn push_attribute_facts(
    facts: &mut Vec<Fact>,
    category: FactCategory,
    attributes: &Attributes,
    gatherable: Option<GatherableType>,
) {
    for (key, values) in attributes {
        match Dimension::from_key(key) {
            Some(dim) => push_dimension_facts(facts, category, dim, values, gatherable),
            None => push_extra_facts(facts, category, key, values),
        }
    }
}

/// One fact per member of a filterable dimension.
fn push_dimension_facts(
    facts: &mut Vec<Fact>,
    category: FactCategory,
    dim: Dimension,
    values: &ValueSet,
    gatherable: Option<GatherableType>,
) {
    for value in values.iter() {
        let fact = match dim {
            Dimension::Season => {
                Fact::with_icon(category, format!("Season: {value}"), IconKey::season(value))
            }
            Dimension::Trait => {
                Fact::with_icon(category, format!("Trait: {value}"), IconKey::trait_icon(value))
            }
            Dimension::Tool => {
                let tool = gatherable.map_or(GENERIC_TOOL, GatherableType::tool_name);
                Fact::new(category, format!("{tool}: {value}"), GREY)
            }
            Dimension::Time => Fact::new(category, format!("Time: {value}"), WHITE),
            other => Fact::new(category, format!("{}: {value}", other.title()), WHITE),
        };
        facts.push(fact);
    }
}

/// Non-dimension keys: `misc`, `ride`, `has`, `poo`, `area`.
fn push_extra_facts(facts: &mut Vec<Fact>, category: FactCategory, key: &str, values: &ValueSet) {
    match key {
        "misc" => facts.extend(
            values
                .iter()
                .map(|v| Fact::new(category, format!("Misc: {v}"), PALE_GREY)),
        ),
        "ride" => facts.push(Fact::new(category, format!("Ride: {}", values.joined(", ")), PINK)),
        "has" => facts.push(Fact::new(category, format!("Has: {}", values.joined(", ")), RED)),
        "area" => facts.push(Fact::new(category, format!("Area: {}", values.joined(", ")), WHITE)),
        "poo" => {
            let mut fact = Fact::new(
                category,
                format!("Fertilizer: {} Poo", values.joined(", ")),
                BROWN,
            );
            fact.icon = Some(IconKey::Poo);
            facts.push(fact);
        }
        _ => log::trace!("No fact rule for attribute {key:?}"),
    }
}

/// Split a PascalCase identifier into words: `GoldenCarp` → `Golden Carp`.
pub fn display_name(id: &str) -> String {
    let mut name = String::with_capacity(id.len() + 4);
    for (i, c) in id.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            name.push(' ');
        }
        name.push(c);
    }
    name
}
