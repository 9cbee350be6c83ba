//! Root layout: results + filter panel, search bar, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the filter panel on wide terminals.
pub const FILTER_PANEL_WIDTH: u16 = 34;
/// Below this width the filter panel takes half the row instead.
pub const NARROW_THRESHOLD: u16 = 68;
/// Search bar height including its border.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Result cards.
    pub results: Rect,
    /// One row per filter dimension.
    pub filters: Rect,
    /// Search text input.
    pub search: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),                    // Results + filters
            Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
            Constraint::Length(1),                 // Status bar
        ])
        .split(area);

        let panel_width = if area.width < NARROW_THRESHOLD {
            area.width / 2
        } else {
            FILTER_PANEL_WIDTH
        };

        let cols = Layout::horizontal([Constraint::Min(1), Constraint::Length(panel_width)])
            .split(rows[0]);

        AppLayout {
            results: cols[0],
            filters: cols[1],
            search: rows[1],
            status: rows[2],
        }
    }
}
