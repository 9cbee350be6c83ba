//! Current filter selections, one slot per dimension.

use super::dimension::Dimension;

/// Selected value per dimension; `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    slots: [Option<String>; Dimension::COUNT],
}

impl FilterSet {
    /// All dimensions unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `dim` to `value`. Selecting the sentinel label clears it.
    pub fn set(&mut self, dim: Dimension, value: impl Into<String>) {
        let value = value.into();
        self.slots[dim.index()] = if value == dim.sentinel() {
            None
        } else {
            Some(value)
        };
    }

    pub fn clear(&mut self, dim: Dimension) {
        self.slots[dim.index()] = None;
    }

    /// Clear every dimension.
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }

    pub fn get(&self, dim: Dimension) -> Option<&str> {
        self.slots[dim.index()].as_deref()
    }

    /// Set by catalog key name. Unknown keys are ignored; returns whether
    /// the key named a dimension.
    pub fn set_by_key(&mut self, key: &str, value: &str) -> bool {
        match Dimension::from_key(key) {
            Some(dim) => {
                self.set(dim, value);
                true
            }
            None => {
                log::debug!("Ignoring unknown filter dimension {key:?}");
                false
            }
        }
    }

    /// Constrained dimensions, in [`Dimension::ALL`] order.
    pub fn active(&self) -> impl Iterator<Item = (Dimension, &str)> {
        Dimension::ALL
            .into_iter()
            .filter_map(|dim| self.get(dim).map(|v| (dim, v)))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
