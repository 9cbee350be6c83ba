//! Option picker: fuzzy-searchable list of one dimension's values.
//!
//! Opens on Enter in the filter panel. The sentinel label is listed first
//! and selecting it clears the dimension.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nucleo::{
    pattern::{Atom, AtomKind, CaseMatching, Normalization},
    Matcher, Utf32Str,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::dimension::Dimension;
use crate::tui::events::Action;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

/// An option that matched the current query, with score and match indices.
struct FilteredOption {
    option_index: usize,
    score: u16,
    indices: Vec<u32>,
}

/// Result of handling a picker input event.
pub enum PickerResult {
    /// Event consumed, picker stays open.
    Consumed,
    /// User picked a value: close and dispatch this action.
    Select(Action),
    /// User pressed Esc: close without action.
    Close,
}

pub struct OptionPickerState {
    dimension: Dimension,
    input: InputBuffer,
    /// Sentinel first, then the dimension's options in menu order.
    options: Vec<&'static str>,
    filtered: Vec<FilteredOption>,
    selected: usize,
    matcher: Matcher,
}

impl OptionPickerState {
    /// Open a picker for `dimension` with `current` preselected.
    pub fn new(dimension: Dimension, current: Option<&str>) -> Self {
        let options: Vec<&'static str> = std::iter::once(dimension.sentinel())
            .chain(dimension.options().iter().copied())
            .collect();
        let selected = current
            .and_then(|value| options.iter().position(|o| *o == value))
            .unwrap_or(0);

        let mut state = Self {
            dimension,
            input: InputBuffer::new(),
            filtered: Vec::with_capacity(options.len()),
            options,
            selected,
            matcher: Matcher::default(),
        };
        state.refilter();
        state
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Re-run fuzzy matching against all options using current input.
    fn refilter(&mut self) {
        self.filtered.clear();
        let query = self.input.text();

        if query.trim().is_empty() {
            self.filtered
                .extend((0..self.options.len()).map(|option_index| FilteredOption {
                    option_index,
                    score: 0,
                    indices: Vec::new(),
                }));
        } else {
            let atom = Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            );

            let mut buf = Vec::new();
            for (i, option) in self.options.iter().enumerate() {
                let haystack = Utf32Str::new(option, &mut buf);
                let mut indices = Vec::new();
                if let Some(score) = atom.indices(haystack, &mut self.matcher, &mut indices) {
                    self.filtered.push(FilteredOption {
                        option_index: i,
                        score,
                        indices,
                    });
                }
            }

            // Stable: ties keep menu order
            self.filtered.sort_by(|a, b| b.score.cmp(&a.score));
            self.selected = 0;
        }

        if self.filtered.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.filtered.len() - 1);
        }
    }

    pub fn select_next(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1) % self.filtered.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + self.filtered.len() - 1) % self.filtered.len();
        }
    }

    pub fn selected_value(&self) -> Option<&'static str> {
        self.filtered
            .get(self.selected)
            .map(|fo| self.options[fo.option_index])
    }

    // ── Input handling ──────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> PickerResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return PickerResult::Consumed;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Esc) => PickerResult::Close,
            (KeyModifiers::NONE, KeyCode::Enter) => match self.selected_value() {
                Some(value) => PickerResult::Select(Action::SetFilter(
                    self.dimension,
                    value.to_string(),
                )),
                None => PickerResult::Close,
            },
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::CONTROL, KeyCode::Char('p')) => {
                self.select_prev();
                PickerResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::CONTROL, KeyCode::Char('n')) => {
                self.select_next();
                PickerResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
                self.refilter();
                PickerResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
                PickerResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
                PickerResult::Consumed
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input.clear();
                self.refilter();
                PickerResult::Consumed
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
                self.refilter();
                PickerResult::Consumed
            }
            _ => PickerResult::Consumed,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal = picker_rect(area, self.options.len());

        frame.render_widget(Clear, modal);

        let block = Block::default()
            .title(format!(" {} ", self.dimension.sentinel()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        if inner.height < 3 || inner.width < 10 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Query
            Constraint::Length(1), // Separator
            Constraint::Min(1),    // Options
        ])
        .split(inner);

        let line = self.input.to_line(
            Span::styled("> ", Style::default().fg(theme::PRIMARY_LIGHT)),
            "Type to filter...",
            Style::default().fg(theme::TEXT),
            Style::default().bg(theme::TEXT).fg(theme::BG_BASE),
            theme::dim(),
        );
        frame.render_widget(Paragraph::new(line), chunks[0]);

        let sep = Line::styled("─".repeat(chunks[1].width as usize), theme::dim());
        frame.render_widget(Paragraph::new(sep), chunks[1]);

        self.render_options(frame, chunks[2]);
    }

    fn render_options(&self, frame: &mut Frame, area: Rect) {
        if self.filtered.is_empty() {
            let no_match = Line::styled("  No matching options", theme::dim());
            frame.render_widget(Paragraph::new(no_match), area);
            return;
        }

        // Keep the selection on screen
        let visible = area.height as usize;
        let offset = (self.selected + 1).saturating_sub(visible);

        let lines: Vec<Line> = self
            .filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, fo)| self.option_line(fo, i == self.selected))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn option_line(&self, fo: &FilteredOption, is_selected: bool) -> Line<'static> {
        let label = self.options[fo.option_index];
        let is_sentinel = fo.option_index == 0;

        let prefix_style = if is_selected {
            theme::highlight()
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(
            if is_selected { "▸ " } else { "  " },
            prefix_style,
        )];

        let base_style = match (is_sentinel, is_selected) {
            (true, _) => theme::muted().add_modifier(Modifier::ITALIC),
            (false, true) => Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(theme::TEXT),
        };
        let match_style = Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        for (i, ch) in label.chars().enumerate() {
            let style = if fo.indices.contains(&(i as u32)) {
                match_style
            } else {
                base_style
            };
            spans.push(Span::styled(ch.to_string(), style));
        }

        if is_sentinel {
            spans.push(Span::styled("  (any)", theme::dim()));
        }

        Line::from(spans)
    }
}

/// Top-center modal sized to the option count.
fn picker_rect(area: Rect, options: usize) -> Rect {
    let width = 36.min(area.width);
    let height = (options as u16 + 4).min(area.height * 3 / 4).max(6).min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 4;

    Rect::new(area.x + x, area.y + y, width, height)
}
