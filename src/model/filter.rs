//! FilterState and the pure filtering functions over a record slice.

use std::collections::BTreeSet;

use super::enums::{Era, PlayerFilter};
use super::season::SeasonRecord;

/// Session filter state. Exactly one value per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub player: PlayerFilter,
    pub era: Era,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Search match: empty query, or a case-insensitive hit on player or
    /// team, or an exact substring of the season string.
    pub fn matches_search(&self, record: &SeasonRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.player.to_lowercase().contains(&needle)
            || record.season.contains(&self.search)
            || record.team.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, record: &SeasonRecord) -> bool {
        self.matches_search(record)
            && self.player.matches(&record.player)
            && self.era.contains(record.year())
    }
}

/// Records matching `state`, in their original order.
pub fn filtered_records<'a>(state: &FilterState, all: &'a [SeasonRecord]) -> Vec<&'a SeasonRecord> {
    all.iter().filter(|r| state.matches(r)).collect()
}

/// Positions in `all` of the records matching `state`, in order.
pub fn filtered_indices(state: &FilterState, all: &[SeasonRecord]) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter(|(_, r)| state.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// `"All"` followed by every distinct player name, sorted ascending. A player
/// literally named `"All"` collapses into the sentinel.
pub fn distinct_players(all: &[SeasonRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = all
        .iter()
        .map(|r| r.player.as_str())
        .filter(|name| *name != PlayerFilter::ALL_LABEL)
        .collect();
    std::iter::once(PlayerFilter::ALL_LABEL.to_string())
        .chain(names.into_iter().map(str::to_string))
        .collect()
}
