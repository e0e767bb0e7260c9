//! Chip widget for the category row.
//!
//! Chips are pill-shaped tags rendered as `(text)`; the active chip is
//! highlighted.

use crate::colors;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

struct Chip {
    text: String,
    active: bool,
}

impl Chip {
    fn content(&self) -> String {
        format!("({})", self.text)
    }

    fn to_span(&self) -> Span<'static> {
        let style = if self.active {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::SUBTEXT)
        };
        Span::styled(self.content(), style)
    }
}

/// Render one category chip as a Span.
#[must_use]
pub fn render_chip(text: &str, active: bool) -> Span<'static> {
    Chip {
        text: text.to_string(),
        active,
    }
    .to_span()
}
