//! toolrack TUI - terminal browser for the tool catalog.
//!
//! Two search surfaces run over the same engine: a global header overlay
//! (Ctrl+K) and the tools page's inline search. Committed selections drive
//! the view stack through the core's `Navigator` seam.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::Frame;
use toolrack_core::Route;
use toolrack_core::config::{Config, Directories};
use toolrack_core::registry::ToolRegistry;
use toolrack_core::session::SessionEvent;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod cli;
mod colors;
mod render;
mod router;
mod terminal;
mod widgets;

use app::{App, hit};
use cli::Cli;
use render::{render_detail, render_header_overlay, render_home, render_not_found, render_tools};
use router::View;
use terminal::TerminalGuard;

/// Set up logging with file output. The TUI must log to a file since it
/// owns the terminal for display.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    let log_filename = format!("toolrack-tui-{timestamp}.log");
    let temp_dir = std::env::temp_dir();
    let log_path = temp_dir.join(&log_filename);

    let symlink_path = temp_dir.join("toolrack-tui.log");
    let _ = std::fs::remove_file(&symlink_path);
    let _ = std::os::unix::fs::symlink(&log_path, &symlink_path);

    let file_appender = tracing_appender::rolling::never(&temp_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let start = cli.route.as_deref().map(Route::parse);
    run_tui(start).await
}

async fn run_tui(start: Option<Route>) -> Result<()> {
    let dirs = Directories::new();
    dirs.ensure_exists()?;

    let config = match Config::load(&dirs.config_file) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err}");
            Config::default()
        }
    };
    let registry = ToolRegistry::load(&dirs);

    let mut app = App::new(registry, &config);
    if let Some(route) = start {
        use toolrack_core::nav::Navigator;
        app.navigate(route);
    }

    // Restores the terminal on drop, including panics and early errors
    let mut guard = TerminalGuard::new()?;

    let mut event_stream = EventStream::new();
    let mut status_tick = tokio::time::interval(std::time::Duration::from_millis(250));
    let mut needs_render = true;

    loop {
        if needs_render {
            guard.terminal_mut().draw(|f| ui(f, &mut app))?;
            needs_render = false;
        }

        tokio::select! {
            Some(event_result) = event_stream.next() => {
                let event = match event_result {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::error!("event stream error: {err}");
                        continue;
                    }
                };

                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        handle_key(&mut app, key);
                        needs_render = true;
                    }
                    Event::Mouse(mouse) => {
                        handle_mouse(&mut app, &mouse);
                        needs_render = true;
                    }
                    Event::Resize(_, _) => {
                        needs_render = true;
                    }
                    _ => {}
                }
            }

            _ = status_tick.tick() => {
                if app.tick_status() {
                    needs_render = true;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    app.hits.clear();
    match app.router.current().clone() {
        View::Home => render_home(f, app),
        View::Tools => render_tools(f, app),
        View::Detail(record) => render_detail(f, app, &record),
        View::NotFound(path) => render_not_found(f, app, &path),
    }
    if app.overlay_open {
        render_header_overlay(f, app);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.overlay_open {
        handle_overlay_key(app, key.code, ctrl);
        return;
    }

    // Global bindings; '/' only opens the overlay where it cannot be text
    match key.code {
        KeyCode::Char('k') if ctrl => {
            app.open_overlay();
            return;
        }
        KeyCode::Char('/') if !matches!(app.router.current(), View::Tools) => {
            app.open_overlay();
            return;
        }
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.router.current().clone() {
        View::Home => handle_home_key(app, key.code),
        View::Tools => handle_tools_key(app, key.code, ctrl),
        View::Detail(_) | View::NotFound(_) => handle_leaf_key(app, key.code),
    }
}

fn handle_overlay_key(app: &mut App, key_code: KeyCode, ctrl: bool) {
    match key_code {
        KeyCode::Esc => {
            app.overlay_event(SessionEvent::Dismiss);
            app.overlay_open = false;
        }
        KeyCode::Enter => app.overlay_event(SessionEvent::Submit),
        KeyCode::Down => app.overlay_event(SessionEvent::SelectNext),
        KeyCode::Up => app.overlay_event(SessionEvent::SelectPrevious),
        KeyCode::Backspace => app.overlay_backspace(),
        KeyCode::Char(c) if !ctrl => app.overlay_insert(c),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key_code: KeyCode) {
    use toolrack_core::nav::Navigator;
    match key_code {
        KeyCode::Enter | KeyCode::Char('t') => {
            app.navigate(Route::Tools { search: None });
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_tools_key(app: &mut App, key_code: KeyCode, ctrl: bool) {
    match key_code {
        KeyCode::Tab => app.cycle_chip(true),
        KeyCode::BackTab => app.cycle_chip(false),
        KeyCode::Down => app.tools_event(SessionEvent::SelectNext),
        KeyCode::Up => app.tools_event(SessionEvent::SelectPrevious),
        KeyCode::Enter => app.tools_event(SessionEvent::Submit),
        KeyCode::Backspace => {
            if app.tools.query().is_empty() {
                app.router.back();
            } else {
                app.tools_backspace();
            }
        }
        KeyCode::Char(c) if !ctrl => app.tools_insert(c),
        _ => {}
    }
}

fn handle_leaf_key(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Backspace => {
            app.router.back();
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    use toolrack_core::nav::Navigator;

    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);

    if app.overlay_open {
        for (index, rect) in app.hits.overlay_items.clone().iter().enumerate() {
            if hit(*rect, column, row) {
                app.overlay_event(SessionEvent::SuggestionClicked { index });
                return;
            }
        }
        if app.hits.overlay_input.is_some_and(|rect| hit(rect, column, row)) {
            return;
        }
        // Click outside the overlay: dismiss without touching the query
        app.overlay_event(SessionEvent::FocusLost);
        app.overlay_open = false;
        return;
    }

    if matches!(app.router.current(), View::Tools) {
        for (index, rect) in app.hits.chips.clone().iter().enumerate() {
            if hit(*rect, column, row) {
                app.select_chip(index);
                return;
            }
        }
        for (index, rect) in app.hits.dropdown_items.clone().iter().enumerate() {
            if hit(*rect, column, row) {
                app.tools_event(SessionEvent::SuggestionClicked { index });
                return;
            }
        }
        for (rect, path) in app.hits.grid_rows.clone() {
            if hit(rect, column, row) {
                app.navigate(Route::parse(&path));
                return;
            }
        }
    }
}
