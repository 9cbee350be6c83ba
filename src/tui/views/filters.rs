//! Filter panel: one row per dimension.
//!
//! Each row shows the selected value, or the dimension's sentinel label
//! when it is unconstrained. `h`/`l` step through the option list with the
//! sentinel as the slot before the first option.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::dimension::Dimension;
use crate::core::filter::FilterSet;
use crate::tui::events::Action;
use crate::tui::theme;

/// Result of handling a key in the filter panel.
#[derive(Debug, PartialEq, Eq)]
pub enum PanelResult {
    /// Handled locally (row movement).
    Consumed,
    /// Handled; the app should run this action.
    Dispatch(Action),
    /// Not a panel key; try the global bindings.
    Ignored,
}

#[derive(Debug, Default)]
pub struct FilterPanelState {
    selected: usize,
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_dimension(&self) -> Dimension {
        Dimension::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Dimension::COUNT;
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Dimension::COUNT - 1) % Dimension::COUNT;
    }

    pub fn handle_input(&mut self, event: &Event, filters: &FilterSet) -> PanelResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return PanelResult::Ignored;
        };

        let dim = self.selected_dimension();
        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
                self.select_next();
                PanelResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
                self.select_prev();
                PanelResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('l')) | (KeyModifiers::NONE, KeyCode::Right) => {
                PanelResult::Dispatch(step_action(dim, filters.get(dim), true))
            }
            (KeyModifiers::NONE, KeyCode::Char('h')) | (KeyModifiers::NONE, KeyCode::Left) => {
                PanelResult::Dispatch(step_action(dim, filters.get(dim), false))
            }
            (KeyModifiers::NONE, KeyCode::Enter) => PanelResult::Dispatch(Action::OpenPicker(dim)),
            (KeyModifiers::NONE, KeyCode::Char('x')) | (KeyModifiers::NONE, KeyCode::Delete) => {
                PanelResult::Dispatch(Action::ClearFilter(dim))
            }
            _ => PanelResult::Ignored,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, filters: &FilterSet, focused: bool) {
        let title = match filters.active_count() {
            0 => "Filters".to_string(),
            n => format!("Filters ({n})"),
        };
        let block = theme::block(&title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = Dimension::ALL
            .iter()
            .enumerate()
            .map(|(i, &dim)| {
                let is_selected = focused && i == self.selected;
                let marker = if is_selected { "▸ " } else { "  " };
                let value = match filters.get(dim) {
                    Some(value) => Span::styled(value.to_string(), theme::highlight()),
                    None => Span::styled(dim.sentinel(), theme::dim()),
                };
                let marker_style = if is_selected {
                    theme::highlight()
                } else {
                    Style::default()
                };
                Line::from(vec![Span::styled(marker, marker_style), value])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Next (or previous) value after `current` in the dimension's option
/// list; stepping off either end returns to the sentinel.
pub fn step_option(dim: Dimension, current: Option<&str>, forward: bool) -> Option<&'static str> {
    let options = dim.options();
    let position = current.and_then(|value| options.iter().position(|o| *o == value));
    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => options.len().checked_sub(1),
        (Some(i), true) => (i + 1 < options.len()).then_some(i + 1),
        (Some(i), false) => i.checked_sub(1),
    };
    next.map(|i| options[i])
}

fn step_action(dim: Dimension, current: Option<&str>, forward: bool) -> Action {
    match step_option(dim, current, forward) {
        Some(value) => Action::SetFilter(dim, value.to_string()),
        None => Action::ClearFilter(dim),
    }
}
