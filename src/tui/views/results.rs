//! Result cards.
//!
//! Cards are built once per query so icon colors are resolved outside of
//! rendering; `render` only lays them out.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::facts::{display_name, extract_facts, ColorHint, FactCategory, WHITE};
use crate::core::icons::{IconCache, IconKey, Rgb};
use crate::core::query::Match;
use crate::tui::theme;

/// A fact with its color resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub category: FactCategory,
    pub label: String,
    pub color: Rgb,
    /// The icon file was found and tinted this line.
    pub from_icon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub id: String,
    pub title: String,
    /// Item icon color, when the item has an icon.
    pub accent: Option<Rgb>,
    pub score: Option<u8>,
    pub lines: Vec<CardLine>,
}

impl ResultCard {
    pub fn build(matched: &Match, icons: &mut IconCache) -> Self {
        let lines = extract_facts(&matched.record)
            .into_iter()
            .map(|fact| {
                let resolved = fact.icon.as_ref().and_then(|key| icons.color(key));
                let (color, from_icon) = match (fact.color, resolved) {
                    (ColorHint::Fixed(color), _) => (color, false),
                    (ColorHint::FromIcon, Some(color)) => (color, true),
                    (ColorHint::FromIcon, None) => (WHITE, false),
                };
                CardLine {
                    category: fact.category,
                    label: fact.label,
                    color,
                    from_icon,
                }
            })
            .collect();

        Self {
            id: matched.id.clone(),
            title: display_name(&matched.id),
            accent: icons.color(&IconKey::Item(matched.id.clone())),
            score: matched.score,
            lines,
        }
    }

    fn to_lines(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .map(|line| {
                let fg = theme::rgb(line.color);
                if line.category.is_header() {
                    Line::from(Span::styled(
                        format!(" {} ", line.label),
                        theme::header_style(fg, line.color),
                    ))
                } else if line.category == FactCategory::Price {
                    Line::from(vec![
                        Span::styled(line.label.clone(), Style::default().fg(fg)),
                        Span::styled(" brass", theme::muted()),
                    ])
                } else {
                    Line::from(Span::styled(format!("  {}", line.label), Style::default().fg(fg)))
                }
            })
            .collect()
    }
}

/// Lay out up to `cards.len()` cards side by side.
pub fn render(frame: &mut Frame, area: Rect, cards: &[ResultCard], total: usize, searching: bool) {
    let title = match total {
        0 => "Results".to_string(),
        n if n > cards.len() => format!("Results ({} of {n})", cards.len()),
        n => format!("Results ({n})"),
    };
    let block = theme::block_default(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        let hint = if searching {
            "No matching items"
        } else {
            "Pick a filter or type / to search"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, theme::dim())).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::horizontal(constraints).split(inner);

    for (card, column) in cards.iter().zip(columns.iter()) {
        render_card(frame, *column, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &ResultCard) {
    let title_style = Style::default()
        .fg(card.accent.map_or(theme::ACCENT, theme::rgb))
        .add_modifier(Modifier::BOLD);

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", card.title), title_style))
        .borders(Borders::ALL)
        .border_style(theme::border_default());
    if let Some(score) = card.score {
        block = block.title_bottom(Line::styled(format!(" {score}% "), theme::muted()).right_aligned());
    }

    frame.render_widget(
        Paragraph::new(card.to_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
