//! Static item catalog.
//!
//! Loaded once at startup from a JSON file and read-only afterwards.

mod error;
mod loader;
mod models;

pub use error::{CatalogError, Result};
pub use models::{Attributes, GatherableType, ItemId, ItemRecord, ValueSet};

use std::path::Path;

use indexmap::IndexMap;

/// Identifier → record mapping, iterated in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: IndexMap<ItemId, ItemRecord>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a catalog file.
    ///
    /// A file with zero items is rejected: the tool has nothing to show.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse_non_empty(&json, &path.display().to_string())?;
        log::info!(
            "Loaded {} catalog items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog JSON held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse_non_empty(json, "<inline>")
    }

    fn parse_non_empty(json: &str, origin: &str) -> Result<Self> {
        let items = loader::parse(json, origin)?;
        if items.is_empty() {
            return Err(CatalogError::Empty {
                origin: origin.to_string(),
            });
        }
        Ok(Self { items })
    }

    pub fn get(&self, id: &str) -> Option<&ItemRecord> {
        self.items.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &ItemRecord)> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemId, ItemRecord)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (ItemId, ItemRecord)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
