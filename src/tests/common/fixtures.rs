//! Test Fixtures
//!
//! Builders for item records and small in-memory catalogs.

use crate::core::catalog::{Catalog, GatherableType, ItemRecord, ValueSet};

// =============================================================================
// Item builder
// =============================================================================

/// Fluent builder for [`ItemRecord`]s.
pub struct ItemBuilder {
    record: ItemRecord,
}

impl ItemBuilder {
    pub fn new(price: i64) -> Self {
        Self {
            record: ItemRecord {
                gatherable_type: None,
                price,
                location: Vec::new(),
                quality: Default::default(),
                spawn: None,
            },
        }
    }

    pub fn gatherable(mut self, gatherable: GatherableType) -> Self {
        self.record.gatherable_type = Some(gatherable);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.record.location.push(location.to_string());
        self
    }

    pub fn quality(mut self, key: &str, values: &[&str]) -> Self {
        self.record
            .quality
            .insert(key.to_string(), values.iter().copied().collect::<ValueSet>());
        self
    }

    pub fn spawn(mut self, key: &str, values: &[&str]) -> Self {
        self.record
            .spawn
            .get_or_insert_with(Default::default)
            .insert(key.to_string(), values.iter().copied().collect::<ValueSet>());
        self
    }

    pub fn build(self) -> ItemRecord {
        self.record
    }
}

// =============================================================================
// Catalogs
// =============================================================================

pub fn catalog_of(items: Vec<(&str, ItemRecord)>) -> Catalog {
    items
        .into_iter()
        .map(|(id, record)| (id.to_string(), record))
        .collect()
}

/// Small catalog covering every filter dimension.
pub fn sample_catalog() -> Catalog {
    catalog_of(vec![
        (
            "Apple",
            ItemBuilder::new(5)
                .gatherable(GatherableType::Growing)
                .location("Meadow")
                .quality("season", &["Spring"])
                .build(),
        ),
        (
            "GoldenCarp",
            ItemBuilder::new(40)
                .gatherable(GatherableType::Fishing)
                .location("Lake")
                .quality("weather", &["Not Rain"])
                .quality("time", &["Dawn", "Dusk"])
                .build(),
        ),
        (
            "Copper",
            ItemBuilder::new(12)
                .gatherable(GatherableType::Mining)
                .location("Quarry")
                .quality("tool", &["Journeyman+"])
                .build(),
        ),
        (
            "Pigeon",
            ItemBuilder::new(8)
                .gatherable(GatherableType::Shooting)
                .location("Bramblewood")
                .spawn("area", &["North"])
                .spawn("season", &["Summer"])
                .quality("follower", &["Dog"])
                .quality("trait", &["Bravery", "Agility"])
                .build(),
        ),
        (
            "Snowdrop",
            ItemBuilder::new(3)
                .gatherable(GatherableType::Gathering)
                .location("Meadow")
                .location("Bramblewood")
                .quality("season", &["Winter w2"])
                .quality("weather", &["Snow"])
                .quality("poo", &["2"])
                .build(),
        ),
    ])
}
