//! Home view: catalog summary and entry points.

use crate::app::App;
use crate::colors;
use crate::render::render_help_bar;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_home(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " toolrack ",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} tools", app.registry.len()),
            Style::default().fg(colors::SUBTEXT),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(colors::SURFACE))
            .border_style(Style::default().fg(colors::OUTLINE)),
    );
    f.render_widget(title, chunks[0]);

    let mut lines = vec![Line::from(Span::styled(
        "Categories",
        Style::default()
            .fg(colors::ON_SURFACE)
            .add_modifier(Modifier::BOLD),
    ))];
    for (category, count) in app.registry.category_counts() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", category.name()),
                Style::default().fg(colors::ON_SURFACE),
            ),
            Span::styled(format!("{count}"), Style::default().fg(colors::SUBTEXT)),
        ]));
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(colors::SURFACE))
            .border_style(Style::default().fg(colors::OUTLINE)),
    );
    f.render_widget(body, chunks[1]);

    render_help_bar(
        f,
        app,
        chunks[2],
        &[
            ("C-k", "search"),
            ("t/Enter", "browse tools"),
            ("Esc", "quit"),
        ],
    );
}
