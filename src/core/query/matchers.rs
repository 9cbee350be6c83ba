//! Per-dimension matching rules.
//!
//! A stored value set admits a selection when it contains the selection.
//! Some dimensions add a looser rule, looked up in [`MATCHERS`], that is
//! consulted when plain membership fails.

use crate::core::catalog::ValueSet;
use crate::core::dimension::{season_prefix, tool_rank, Dimension, SEASON_PREFIX_LEN};

/// Looser rule for one dimension: `(selected, stored) -> admitted`.
pub type Matcher = fn(&str, &ValueSet) -> bool;

/// Weather value that stands for every weather except rain.
pub const NOT_RAIN: &str = "Not Rain";
const RAIN: &str = "Rain";

pub static MATCHERS: [(Dimension, Matcher); 4] = [
    (Dimension::Season, season_matches),
    (Dimension::Tool, tool_matches),
    (Dimension::Time, time_matches),
    (Dimension::Weather, weather_matches),
];

pub fn matcher_for(dim: Dimension) -> Option<Matcher> {
    MATCHERS
        .iter()
        .find(|(d, _)| *d == dim)
        .map(|(_, matcher)| *matcher)
}

/// Whether `stored` admits `selected` for quality dimension `dim`.
pub fn accepts(dim: Dimension, selected: &str, stored: &ValueSet) -> bool {
    stored.contains(selected) || matcher_for(dim).is_some_and(|matcher| matcher(selected, stored))
}

/// A week-qualified selection ("Spring w2") admits its base season.
/// A bare season selection never uses this rule.
fn season_matches(selected: &str, stored: &ValueSet) -> bool {
    if selected.chars().count() <= SEASON_PREFIX_LEN {
        return false;
    }
    let base = season_prefix(selected);
    stored.iter().any(|v| season_prefix(v) == base)
}

/// Item tier rank strictly below the selected rank.
///
/// Strict `<` means the lowest tier only matches by equality.
fn tool_matches(selected: &str, stored: &ValueSet) -> bool {
    let Some(selected_rank) = tool_rank(selected) else {
        return false;
    };
    stored
        .iter()
        .filter_map(tool_rank)
        .any(|rank| rank < selected_rank)
}

fn time_matches(selected: &str, stored: &ValueSet) -> bool {
    stored.contains(selected)
}

fn weather_matches(selected: &str, stored: &ValueSet) -> bool {
    selected != RAIN && stored.contains(NOT_RAIN)
}
