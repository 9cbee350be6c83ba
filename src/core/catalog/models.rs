//! Item record types.
//!
//! Every attribute value is held as a [`ValueSet`]: scalars from the
//! catalog file become one-element sets at load time, so matching and fact
//! extraction never branch on the value's shape.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

/// Unique item identifier (PascalCase item name, e.g. `GoldenCarp`).
pub type ItemId = String;

/// Attribute name → values, in catalog file order.
pub type Attributes = IndexMap<String, ValueSet>;

// ============================================================================
// Gatherable type
// ============================================================================

/// How an item is obtained in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatherableType {
    Growing,
    Fishing,
    Mining,
    Shooting,
    Gathering,
}

impl GatherableType {
    pub const ALL: [GatherableType; 5] = [
        Self::Growing,
        Self::Fishing,
        Self::Mining,
        Self::Shooting,
        Self::Gathering,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Growing => "Growing",
            Self::Fishing => "Fishing",
            Self::Mining => "Mining",
            Self::Shooting => "Shooting",
            Self::Gathering => "Gathering",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == name)
    }

    /// Tool whose proficiency tier governs this kind of item.
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::Mining => "Pickaxe",
            Self::Fishing => "Rod",
            Self::Growing | Self::Gathering => "Sickle",
            Self::Shooting => "Slingshot",
        }
    }
}

impl fmt::Display for GatherableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Value set
// ============================================================================

/// Ordered, duplicate-free set of attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet(IndexSet<String>);

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(value: impl Into<String>) -> Self {
        let mut set = IndexSet::with_capacity(1);
        set.insert(value.into());
        Self(set)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All members joined with `sep`, in insertion order.
    pub fn joined(&self, sep: &str) -> String {
        self.iter().collect::<Vec<_>>().join(sep)
    }
}

impl<S: Into<String>> FromIterator<S> for ValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Item record
// ============================================================================

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub gatherable_type: Option<GatherableType>,
    /// Sell price in brass.
    pub price: i64,
    pub location: Vec<String>,
    /// Conditions under which the item's higher-quality variant applies.
    pub quality: Attributes,
    /// Conditions under which the item spawns; may also carry `area`.
    pub spawn: Option<Attributes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gatherable_type_names_round_trip() {
        for g in GatherableType::ALL {
            assert_eq!(GatherableType::from_name(g.as_str()), Some(g));
        }
        assert_eq!(GatherableType::from_name("Farming"), None);
        assert_eq!(GatherableType::from_name("growing"), None);
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(GatherableType::Mining.tool_name(), "Pickaxe");
        assert_eq!(GatherableType::Fishing.tool_name(), "Rod");
        assert_eq!(GatherableType::Growing.tool_name(), "Sickle");
        assert_eq!(GatherableType::Shooting.tool_name(), "Slingshot");
        assert_eq!(GatherableType::Gathering.tool_name(), "Sickle");
    }

    #[test]
    fn test_value_set_dedups_and_keeps_order() {
        let set: ValueSet = ["Night", "Dawn", "Night"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Night", "Dawn"]);
        assert_eq!(set.joined(", "), "Night, Dawn");
    }

    #[test]
    fn test_value_set_single() {
        let set = ValueSet::single("Spring");
        assert!(set.contains("Spring"));
        assert!(!set.contains("Spring w2"));
        assert_eq!(set.len(), 1);
    }
}
