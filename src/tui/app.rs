use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notice};
use super::layout::AppLayout;
use super::theme;
use super::views::filters::{FilterPanelState, PanelResult};
use super::views::option_picker::{OptionPickerState, PickerResult};
use super::views::results::{self, ResultCard};
use super::widgets::input_buffer::InputBuffer;
use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::core::filter::FilterSet;
use crate::core::icons::IconCache;
use crate::core::query::{self, Match, SearchOptions};

/// Ticks a status notice stays visible.
const NOTICE_TTL_TICKS: u32 = 60;

/// Central application state (Elm architecture).
///
/// Owns the catalog, the current selections and every cache; the query
/// engine is called with borrowed views of these.
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    pub focus: Focus,
    catalog: Catalog,
    pub filters: FilterSet,
    pub search: InputBuffer,
    search_options: SearchOptions,
    max_results: usize,
    icons: IconCache,
    pub filter_panel: FilterPanelState,
    /// Every match of the current query.
    pub matches: Vec<Match>,
    /// Cards for the first `max_results` matches.
    pub cards: Vec<ResultCard>,
    pub notice: Option<Notice>,
    pub show_help: bool,
    /// Option picker state (Some when open).
    pub picker: Option<OptionPickerState>,
    /// Receiver for out-of-band events (signals).
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let notice = Notice {
            message: format!("Loaded {} items", catalog.len()),
            ttl_ticks: NOTICE_TTL_TICKS,
        };

        Self {
            running: true,
            focus: Focus::Filters,
            catalog,
            filters: FilterSet::new(),
            search: InputBuffer::new(),
            search_options: config.search_options(),
            max_results: config.tui.max_results,
            icons: IconCache::new(config.assets_dir()),
            filter_panel: FilterPanelState::new(),
            matches: Vec::new(),
            cards: Vec::new(),
            notice: Some(notice),
            show_help: false,
            picker: None,
            event_rx,
            event_tx,
        }
    }

    /// Sender for pushing events into the loop from other tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => self.handle_input(crossterm_event),
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Quit => self.running = false,
        }
    }

    fn handle_input(&mut self, event: Event) {
        // Priority 1: Picker consumes all input when open
        if let Some(ref mut picker) = self.picker {
            match picker.handle_input(&event) {
                PickerResult::Consumed => {}
                PickerResult::Select(action) => {
                    self.picker = None;
                    self.handle_action(action);
                }
                PickerResult::Close => self.picker = None,
            }
            return;
        }

        // Priority 2: Help modal
        if self.show_help {
            if let Some(action) = map_help_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 3: Focused area
        match self.focus {
            Focus::Search => {
                if self.handle_search_input(&event) {
                    return;
                }
            }
            Focus::Filters => match self.filter_panel.handle_input(&event, &self.filters) {
                PanelResult::Consumed => return,
                PanelResult::Dispatch(action) => {
                    self.handle_action(action);
                    return;
                }
                PanelResult::Ignored => {}
            },
        }

        // Priority 4: Global keybindings
        if let Some(action) = map_input_to_action(&event, self.focus) {
            self.handle_action(action);
        }
    }

    /// Edit the search text. Returns true if consumed.
    fn handle_search_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        let edited = match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Enter) => {
                self.handle_action(Action::FocusFilters);
                return true;
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.search.backspace();
                true
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.search.delete();
                true
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.search.clear();
                true
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.search.move_left();
                false
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.search.move_right();
                false
            }
            (KeyModifiers::NONE, KeyCode::Home) => {
                self.search.move_home();
                false
            }
            (KeyModifiers::NONE, KeyCode::End) => {
                self.search.move_end();
                false
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.search.insert_char(c);
                true
            }
            // Ctrl+C and friends fall through to the global bindings
            _ => return false,
        };

        if edited {
            self.refresh();
        }
        true
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusFilters => self.focus = Focus::Filters,
            Action::FocusSearch => self.focus = Focus::Search,
            Action::SetFilter(dim, value) => {
                log::debug!("Filter {} = {value:?}", dim.key());
                self.filters.set(dim, value);
                self.refresh();
            }
            Action::ClearFilter(dim) => {
                self.filters.clear(dim);
                self.refresh();
            }
            Action::ResetAll => {
                self.filters.reset();
                self.search.clear();
                self.refresh();
                self.set_notice("Filters reset");
            }
            Action::OpenPicker(dim) => {
                self.picker = Some(OptionPickerState::new(dim, self.filters.get(dim)));
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Re-run the query and rebuild the visible cards.
    pub fn refresh(&mut self) {
        self.matches = query::query_with(
            &self.catalog,
            &self.filters,
            self.search.text(),
            &self.search_options,
        );
        self.cards = self
            .matches
            .iter()
            .take(self.max_results)
            .map(|m| ResultCard::build(m, &mut self.icons))
            .collect();
    }

    fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            ttl_ticks: NOTICE_TTL_TICKS,
        });
    }

    fn on_tick(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ttl_ticks = notice.ttl_ticks.saturating_sub(1);
            if notice.ttl_ticks == 0 {
                self.notice = None;
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        let searching = !self.filters.is_unconstrained() || !self.search.is_empty();
        results::render(frame, layout.results, &self.cards, self.matches.len(), searching);
        self.filter_panel.render(
            frame,
            layout.filters,
            &self.filters,
            self.focus == Focus::Filters,
        );
        self.render_search_bar(frame, layout.search);
        self.render_status_bar(frame, layout.status);

        if self.show_help {
            self.render_help_modal(frame, area);
        }

        if let Some(ref picker) = self.picker {
            picker.render(frame, area);
        }
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Search;
        let block = theme::block("Search", focused);
        let cursor_style = if focused {
            Style::default().bg(theme::TEXT).fg(theme::BG_BASE)
        } else {
            Style::default()
        };
        let line = self.search.to_line(
            Span::styled("/ ", theme::key_hint()),
            "Item name",
            Style::default().fg(theme::TEXT),
            cursor_style,
            theme::dim(),
        );
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = match self.focus {
            Focus::Search => Span::styled(" SEARCH ", theme::insert_badge()),
            Focus::Filters => Span::raw(""),
        };

        let mut spans = vec![
            Span::styled(" KYNSEED ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
        ];

        match &self.notice {
            Some(notice) => spans.push(Span::styled(notice.message.clone(), theme::heading())),
            None => spans.extend([
                Span::styled("/", theme::key_hint()),
                Span::raw(":search "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(":pick "),
                Span::styled("X", theme::key_hint()),
                Span::raw(":reset "),
                Span::styled("?", theme::key_hint()),
                Span::raw(":help "),
                Span::styled("q", theme::key_hint()),
                Span::raw(":quit"),
            ]),
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("/", "Focus search"),
            ("Tab", "Switch filters / search"),
            ("X", "Reset all filters and search"),
            ("", ""),
            ("Filters:", ""),
            ("j/k", "Select dimension"),
            ("h/l", "Previous / next value"),
            ("Enter", "Pick a value"),
            ("x", "Clear dimension"),
            ("", ""),
            ("Search:", ""),
            ("Esc / Enter", "Back to filters"),
            ("Ctrl+U", "Clear search"),
            ("", ""),
            ("Picker:", ""),
            ("type", "Narrow options"),
            ("Up/Down", "Move selection"),
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<16}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

// ── Input mapping ───────────────────────────────────────────────────────

fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn map_input_to_action(event: &Event, focus: Focus) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match (*modifiers, *code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('X') => Some(Action::ResetAll),
            KeyCode::Tab => Some(focus.next().to_action()),
            KeyCode::BackTab => Some(focus.prev().to_action()),
            _ => None,
        },
        _ => None,
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
