//! JSON catalog parsing.
//!
//! The file format allows a value to be a string, a number, or a list of
//! either. Everything is normalized into [`ValueSet`]s here.

use indexmap::IndexMap;
use serde::Deserialize;

use super::error::{CatalogError, Result};
use super::models::{Attributes, GatherableType, ItemId, ItemRecord, ValueSet};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Number(serde_json::Number),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(RawScalar),
    Many(Vec<RawScalar>),
}

impl RawValue {
    fn into_set(self) -> ValueSet {
        match self {
            RawValue::One(v) => ValueSet::single(v.into_text()),
            RawValue::Many(vs) => vs.into_iter().map(RawScalar::into_text).collect(),
        }
    }
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    gatherable_type: Option<String>,
    price: i64,
    #[serde(default)]
    location: Vec<String>,
    #[serde(default)]
    quality: IndexMap<String, RawValue>,
    #[serde(default)]
    spawn: Option<IndexMap<String, RawValue>>,
}

fn normalize(raw: IndexMap<String, RawValue>) -> Attributes {
    raw.into_iter().map(|(k, v)| (k, v.into_set())).collect()
}

fn into_record(id: &str, raw: RawItem) -> Result<ItemRecord> {
    let gatherable_type = match raw.gatherable_type {
        None => None,
        Some(name) => Some(GatherableType::from_name(&name).ok_or_else(|| {
            CatalogError::UnknownGatherableType {
                item: id.to_string(),
                value: name,
            }
        })?),
    };

    Ok(ItemRecord {
        gatherable_type,
        price: raw.price,
        location: raw.location,
        quality: normalize(raw.quality),
        spawn: raw.spawn.map(normalize),
    })
}

/// Parse catalog JSON into records, preserving file order.
///
/// `origin` names the source in error messages.
pub(super) fn parse(json: &str, origin: &str) -> Result<IndexMap<ItemId, ItemRecord>> {
    let raw: IndexMap<ItemId, RawItem> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let mut items = IndexMap::with_capacity(raw.len());
    for (id, item) in raw {
        let record = into_record(&id, item)?;
        items.insert(id, record);
    }
    Ok(items)
}
