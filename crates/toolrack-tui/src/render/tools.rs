//! Tools page: inline search, category chips, and the filtered grid.

use crate::app::App;
use crate::colors;
use crate::render::{render_help_bar, truncate};
use crate::widgets::render_chip;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn render_tools(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_search_input(f, app, chunks[0]);
    render_chip_row(f, app, chunks[1]);
    render_grid(f, app, chunks[2]);
    render_help_bar(
        f,
        app,
        chunks[3],
        &[
            ("Tab", "category"),
            ("Up/Down", "highlight"),
            ("Enter", "open"),
            ("Backspace", "back"),
            ("Esc", "quit"),
        ],
    );

    // The dropdown draws last so it overlays the grid
    if app.tools.is_open() && app.tools.match_count() > 0 {
        render_dropdown(f, app, chunks[0]);
    }
}

fn render_search_input(f: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Tools ")
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::PRIMARY));

    let input_text = if app.tools.query().is_empty() {
        Span::styled(
            "Search tools...",
            Style::default().fg(colors::OUTLINE),
        )
    } else {
        Span::styled(
            app.tools.query().to_string(),
            Style::default().fg(colors::ON_SURFACE),
        )
    };
    f.render_widget(Paragraph::new(input_text).block(input_block), area);

    // Truncation is safe: query length is bounded by what fits on screen
    #[allow(clippy::cast_possible_truncation)]
    if !app.tools.query().is_empty() {
        f.set_cursor_position((area.x + app.tools.query().chars().count() as u16 + 1, area.y + 1));
    }
}

fn render_chip_row(f: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = Vec::new();
    let mut x = area.x;
    for index in 0..App::chip_count() {
        let label = App::chip_label(index);
        let span = render_chip(label, index == app.chip_index);
        // Width = "(label)" plus the separating space
        #[allow(clippy::cast_possible_truncation)]
        let width = (label.len() + 2) as u16;
        app.hits.chips.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width + 1);
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    let row = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::BG));
    f.render_widget(row, area);
}

fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let grid = app.grid();
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = grid
        .iter()
        .map(|record| {
            let line = Line::from(vec![
                Span::styled(
                    record.title.clone(),
                    Style::default()
                        .fg(colors::ON_SURFACE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    truncate(&record.description, width.saturating_sub(record.title.len() + 16)),
                    Style::default().fg(colors::SUBTEXT),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", record.category.name()),
                    Style::default().fg(colors::OUTLINE),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let count = grid.len();

    // One row per record inside the border, for mouse hit testing
    let paths: Vec<String> = grid.iter().map(|record| record.path.clone()).collect();
    drop(grid);
    let visible = area.height.saturating_sub(2) as usize;
    for (i, path) in paths.into_iter().take(visible).enumerate() {
        // Rows are bounded by the visible height, which fits in u16
        #[allow(clippy::cast_possible_truncation)]
        let y = area.y + 1 + i as u16;
        app.hits.grid_rows.push((
            Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1),
            path,
        ));
    }

    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Catalog ({count}) "))
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::OUTLINE));

    f.render_widget(List::new(items).block(grid_block), area);
}

/// The capped suggestion dropdown, anchored under the search input.
fn render_dropdown(f: &mut Frame, app: &mut App, input_area: Rect) {
    let matches = app.tools.matches(&app.registry);
    // Dropdown height: one row per match inside the border
    #[allow(clippy::cast_possible_truncation)]
    let height = (matches.len() as u16 + 2).min(f.area().height.saturating_sub(input_area.bottom()));
    let area = Rect::new(
        input_area.x + 2,
        input_area.bottom(),
        input_area.width.saturating_sub(4),
        height,
    );

    let items: Vec<ListItem> = matches
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let style = if app.tools.highlighted() == Some(i) {
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
        .collect();

    let item_count = items.len();
    drop(matches);
    for i in 0..item_count.min(area.height.saturating_sub(2) as usize) {
        // Bounded by dropdown height
        #[allow(clippy::cast_possible_truncation)]
        let y = area.y + 1 + i as u16;
        app.hits.dropdown_items.push(Rect::new(
            area.x + 1,
            y,
            area.width.saturating_sub(2),
            1,
        ));
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(colors::SURFACE_HIGH))
        .border_style(Style::default().fg(colors::PRIMARY));
    f.render_widget(List::new(items).block(block), area);
}
