//! SeasonBrowser: filter state, the filtered view, and the detail panel
//! state machine. No terminal types live here.

use tracing::debug;

use crate::model::{distinct_players, filtered_indices, Era, FilterState, PlayerFilter, SeasonRecord};
use crate::view::{formula_toggle_label, DetailView, RowView};

/// Detail panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    /// Open on the record at this position in the full record list.
    Open(usize),
}

/// How the detail panel was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseIcon,
    CloseButton,
    Scrim,
    Escape,
}

#[derive(Debug, Clone)]
pub struct SeasonBrowser {
    records: Vec<SeasonRecord>,
    players: Vec<String>,
    filter: FilterState,
    filtered: Vec<usize>,
    panel: Panel,
    formula_visible: bool,
}

impl SeasonBrowser {
    pub fn new(records: Vec<SeasonRecord>) -> Self {
        Self::with_filter(records, FilterState::default())
    }

    pub fn with_filter(records: Vec<SeasonRecord>, filter: FilterState) -> Self {
        let players = distinct_players(&records);
        let mut browser = Self {
            records,
            players,
            filter,
            filtered: Vec::new(),
            panel: Panel::Closed,
            formula_visible: false,
        };
        browser.recompute();
        browser
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn records(&self) -> &[SeasonRecord] {
        &self.records
    }

    /// Player selector options, `"All"` first.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        matches!(self.panel, Panel::Open(_))
    }

    pub fn selected(&self) -> Option<&SeasonRecord> {
        match self.panel {
            Panel::Open(i) => self.records.get(i),
            Panel::Closed => None,
        }
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &SeasonRecord> {
        self.filtered.iter().map(move |&i| &self.records[i])
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.filtered().map(RowView::from_record).collect()
    }

    pub fn detail(&self) -> Option<DetailView> {
        self.selected().map(DetailView::from_record)
    }

    pub fn formula_visible(&self) -> bool {
        self.formula_visible
    }

    pub fn formula_toggle_label(&self) -> &'static str {
        formula_toggle_label(self.formula_visible)
    }

    // ─────────────────────────────────────────────────────────
    // Filter transitions
    // ─────────────────────────────────────────────────────────

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.recompute();
    }

    pub fn push_search(&mut self, c: char) {
        self.filter.search.push(c);
        self.recompute();
    }

    pub fn pop_search(&mut self) {
        self.filter.search.pop();
        self.recompute();
    }

    pub fn set_player(&mut self, player: PlayerFilter) {
        self.filter.player = player;
        self.recompute();
    }

    /// Step through the player selector. Wraps in both directions.
    pub fn cycle_player(&mut self, forward: bool) {
        let len = self.players.len();
        let current = self
            .players
            .iter()
            .position(|p| p.as_str() == self.filter.player.label())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_player(PlayerFilter::from_label(&self.players[next]));
    }

    pub fn set_era(&mut self, era: Era) {
        self.filter.era = era;
        self.recompute();
    }

    pub fn cycle_era(&mut self, forward: bool) {
        let era = if forward {
            self.filter.era.next()
        } else {
            self.filter.era.prev()
        };
        self.set_era(era);
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filtered_indices(&self.filter, &self.records);
        debug!(
            search = %self.filter.search,
            player = %self.filter.player,
            era = %self.filter.era,
            matched = self.filtered.len(),
            "filter recomputed"
        );
    }

    // ─────────────────────────────────────────────────────────
    // Detail panel
    // ─────────────────────────────────────────────────────────

    /// Open the panel on a row of the filtered view. Ignored while the panel
    /// is already open or when the row is out of range. Returns whether the
    /// panel opened.
    pub fn activate(&mut self, row: usize) -> bool {
        if self.is_panel_open() {
            return false;
        }
        let Some(&index) = self.filtered.get(row) else {
            return false;
        };
        self.panel = Panel::Open(index);
        debug!(rank = self.records[index].rank, "detail panel opened");
        true
    }

    /// Close the panel and clear the selection. Filters are untouched.
    pub fn dismiss(&mut self, reason: DismissReason) {
        if self.panel != Panel::Closed {
            debug!(?reason, "detail panel dismissed");
        }
        self.panel = Panel::Closed;
    }

    pub fn toggle_formula(&mut self) {
        self.formula_visible = !self.formula_visible;
    }
}
