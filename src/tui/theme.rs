//! Color theme for the Kynseed item browser.
//!
//! Chrome colors live here; fact colors come from the item data and are
//! converted with [`rgb`].

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::icons::Rgb;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Moss green: focused borders, active rows.
pub const PRIMARY: Color = Color::Rgb(0x5B, 0x8C, 0x3A);
/// Light moss: hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x8B, 0xC3, 0x4A);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Brass: titles, selections.
pub const ACCENT: Color = Color::Rgb(0xD4, 0xA0, 0x3C);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Base background.
pub const BG_BASE: Color = Color::Rgb(0x1A, 0x16, 0x10);
/// Card header background.
pub const BG_SURFACE: Color = Color::Rgb(0x2A, 0x24, 0x1A);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE8, 0xE0, 0xD0);
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x80, 0x70);
pub const TEXT_DIM: Color = Color::Rgb(0x55, 0x4E, 0x44);

// ── Style helpers ───────────────────────────────────────────────────────────

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Search mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Fact colors ─────────────────────────────────────────────────────────────

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Header facts sit on a background; pick the background that keeps the
/// label readable.
pub fn header_style(fg: Color, fg_rgb: Rgb) -> Style {
    let bg = if fg_rgb.is_light() {
        BG_SURFACE
    } else {
        rgb(fg_rgb.complementary())
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

pub fn block(title: &str, focused: bool) -> Block<'_> {
    if focused {
        block_focused(title)
    } else {
        block_default(title)
    }
}
