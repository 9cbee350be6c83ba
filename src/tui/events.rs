use crate::core::dimension::Dimension;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notice expiry.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper, filter panel or picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Focus
    FocusFilters,
    FocusSearch,

    // Filters
    SetFilter(Dimension, String),
    ClearFilter(Dimension),
    ResetAll,

    // Modals
    OpenPicker(Dimension),
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which input area has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Filters,
    Search,
}

impl Focus {
    pub const ALL: [Focus; 2] = [Focus::Filters, Focus::Search];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Filters => "Filters",
            Focus::Search => "Search",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    pub fn to_action(self) -> Action {
        match self {
            Focus::Filters => Action::FocusFilters,
            Focus::Search => Action::FocusSearch,
        }
    }
}

/// A timed message shown in the status bar.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    /// Ticks remaining before it is dismissed.
    pub ttl_ticks: u32,
}
