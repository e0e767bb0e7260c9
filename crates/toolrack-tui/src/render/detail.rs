//! Tool detail and not-found views.

use crate::app::App;
use crate::colors;
use crate::render::render_help_bar;
use crate::widgets::render_chip;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use toolrack_core::ToolRecord;

pub fn render_detail(f: &mut Frame, app: &mut App, record: &ToolRecord) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                record.title.clone(),
                Style::default()
                    .fg(colors::ON_SURFACE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            render_chip(record.category.name(), true),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().fg(colors::SUBTEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            record.path.clone(),
            Style::default().fg(colors::OUTLINE),
        )),
    ];
    if !record.icon.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("icon: {}", record.icon),
            Style::default().fg(colors::OUTLINE),
        )));
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", record.title))
            .style(Style::default().bg(colors::SURFACE))
            .border_style(Style::default().fg(colors::PRIMARY)),
    );
    f.render_widget(body, chunks[0]);

    render_help_bar(
        f,
        app,
        chunks[1],
        &[("C-k", "search"), ("Backspace", "back"), ("Esc", "quit")],
    );
}

pub fn render_not_found(f: &mut Frame, app: &mut App, path: &str) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    let lines = vec![
        Line::from(Span::styled(
            "Not found",
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("No tool is registered at {path}"),
            Style::default().fg(colors::SUBTEXT),
        )),
    ];

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 404 ")
            .style(Style::default().bg(colors::SURFACE))
            .border_style(Style::default().fg(colors::ERROR)),
    );
    f.render_widget(body, chunks[0]);

    render_help_bar(
        f,
        app,
        chunks[1],
        &[("C-k", "search"), ("Backspace", "back"), ("Esc", "quit")],
    );
}
