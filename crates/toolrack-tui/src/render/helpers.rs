//! Helper rendering functions shared across views.

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Truncate a string to `width` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Render the bottom help bar from key/description pairs, plus the transient
/// status line when one is active.
pub fn render_help_bar(f: &mut Frame, app: &App, area: Rect, bindings: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in bindings {
        spans.push(Span::styled(*key, Style::default().fg(colors::PRIMARY)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(colors::SUBTEXT),
        ));
    }
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(colors::WARNING),
        ));
    }

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(colors::SURFACE))
            .border_style(Style::default().fg(colors::OUTLINE)),
    );
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_is_unchanged() {
        assert_eq!(truncate("word counter", 20), "word counter");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("percentage calculator", 10), "percent...");
    }
}
