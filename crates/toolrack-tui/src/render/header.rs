//! The global header search overlay (Ctrl+K).

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the overlay centered near the top of the screen, on top of
/// whatever view is underneath. Records the input and item rects so mouse
/// clicks can distinguish inside from outside.
pub fn render_header_overlay(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let width = 60.min(area.width.saturating_sub(4));
    let x = (area.width.saturating_sub(width)) / 2;
    let input_area = Rect::new(x, 2, width, 3);

    f.render_widget(Clear, input_area);
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(Style::default().bg(colors::SURFACE_HIGH))
        .border_style(Style::default().fg(colors::PRIMARY));

    let input_text = if app.overlay.query().is_empty() {
        Span::styled("Type to search...", Style::default().fg(colors::OUTLINE))
    } else {
        Span::styled(
            app.overlay.query().to_string(),
            Style::default().fg(colors::ON_SURFACE),
        )
    };
    f.render_widget(Paragraph::new(input_text).block(input_block), input_area);
    app.hits.overlay_input = Some(input_area);

    // Query length is bounded by the screen width
    #[allow(clippy::cast_possible_truncation)]
    if !app.overlay.query().is_empty() {
        f.set_cursor_position((
            input_area.x + app.overlay.query().chars().count() as u16 + 1,
            input_area.y + 1,
        ));
    }

    if !app.overlay.is_open() {
        return;
    }

    let matches = app.overlay.matches(&app.registry);
    let items: Vec<ListItem> = if matches.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            format!("No matches. Enter searches for \"{}\"", app.overlay.query()),
            Style::default().fg(colors::SUBTEXT),
        )))]
    } else {
        matches
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if app.overlay.highlighted() == Some(i) {
                    Style::default()
                        .bg(colors::SURFACE_HIGH)
                        .fg(colors::ON_SURFACE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::ON_SURFACE)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(record.title.clone(), style),
                    Span::styled(
                        format!("  {}", record.category.name()),
                        Style::default().fg(colors::OUTLINE),
                    ),
                ]))
            })
            .collect()
    };

    let match_count = matches.len();
    drop(matches);

    // One bordered row per item
    #[allow(clippy::cast_possible_truncation)]
    let height = (items.len() as u16 + 2).min(area.height.saturating_sub(input_area.bottom()));
    let list_area = Rect::new(x, input_area.bottom(), width, height);

    for i in 0..match_count.min(list_area.height.saturating_sub(2) as usize) {
        // Bounded by the dropdown height
        #[allow(clippy::cast_possible_truncation)]
        let y = list_area.y + 1 + i as u16;
        app.hits
            .overlay_items
            .push(Rect::new(x + 1, y, width.saturating_sub(2), 1));
    }

    f.render_widget(Clear, list_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(colors::SURFACE_HIGH))
        .border_style(Style::default().fg(colors::PRIMARY));
    f.render_widget(List::new(items).block(block), list_area);
}
