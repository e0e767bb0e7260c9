//! Application state for the TUI.
//!
//! The app owns the merged registry, the view stack, and one search session
//! per surface: the global header overlay and the tools-page inline search.
//! Committed targets flow through [`Navigator`], which the app itself
//! implements on top of its view stack.

use crate::router::{Router, View};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use toolrack_core::config::Config;
use toolrack_core::nav::{self, Navigator};
use toolrack_core::registry::ToolRegistry;
use toolrack_core::search::{CategoryFilter, filter_tools};
use toolrack_core::session::{SearchSession, SessionEvent};
use toolrack_core::{Category, NavTarget, Route, ToolRecord};
use tracing::debug;

const STATUS_LIFETIME: Duration = Duration::from_secs(3);

/// Clickable regions recorded during the last render, for mouse dispatch.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub overlay_input: Option<Rect>,
    pub overlay_items: Vec<Rect>,
    pub chips: Vec<Rect>,
    pub dropdown_items: Vec<Rect>,
    pub grid_rows: Vec<(Rect, String)>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        self.overlay_input = None;
        self.overlay_items.clear();
        self.chips.clear();
        self.dropdown_items.clear();
        self.grid_rows.clear();
    }
}

#[must_use]
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub struct App {
    pub registry: ToolRegistry,
    pub router: Router,

    /// Global header search (Ctrl+K overlay).
    pub overlay: SearchSession,
    pub overlay_open: bool,

    /// Tools-page inline search.
    pub tools: SearchSession,
    pub filter: CategoryFilter,
    pub chip_index: usize,

    pub status_message: Option<String>,
    status_until: Option<Instant>,

    pub should_quit: bool,
    pub hits: HitAreas,
}

impl App {
    #[must_use]
    pub fn new(registry: ToolRegistry, config: &Config) -> Self {
        Self {
            registry,
            router: Router::new(),
            overlay: SearchSession::new(config.header.clone()),
            overlay_open: false,
            tools: SearchSession::new(config.tools_page.clone()),
            filter: CategoryFilter::All,
            chip_index: 0,
            status_message: None,
            status_until: None,
            should_quit: false,
            hits: HitAreas::default(),
        }
    }

    /// The chip row: "all" plus every category, in declaration order.
    #[must_use]
    pub fn chip_count() -> usize {
        1 + Category::ALL.len()
    }

    #[must_use]
    pub fn chip_label(index: usize) -> &'static str {
        if index == 0 {
            "all"
        } else {
            Category::ALL[index - 1].name()
        }
    }

    pub fn select_chip(&mut self, index: usize) {
        if index >= Self::chip_count() {
            return;
        }
        self.chip_index = index;
        self.filter = if index == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::ALL[index - 1])
        };
    }

    pub fn cycle_chip(&mut self, forward: bool) {
        let count = Self::chip_count();
        let next = if forward {
            (self.chip_index + 1) % count
        } else {
            (self.chip_index + count - 1) % count
        };
        self.select_chip(next);
    }

    /// The uncapped grid behind the inline dropdown: active category AND
    /// active query.
    #[must_use]
    pub fn grid(&self) -> Vec<&ToolRecord> {
        filter_tools(self.registry.records(), self.tools.query(), self.filter)
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
        self.overlay_event(SessionEvent::Focused);
    }

    /// Feed an event to the overlay session, performing navigation if the
    /// event committed.
    pub fn overlay_event(&mut self, event: SessionEvent) {
        let target = self.overlay.process(event, &self.registry);
        if let Some(target) = target {
            self.overlay_open = false;
            self.commit(target);
        }
    }

    /// Feed an event to the tools-page inline session.
    pub fn tools_event(&mut self, event: SessionEvent) {
        let target = self.tools.process(event, &self.registry);
        if let Some(target) = target {
            self.commit(target);
        }
    }

    pub fn overlay_insert(&mut self, c: char) {
        let mut query = self.overlay.query().to_string();
        query.push(c);
        self.overlay_event(SessionEvent::QueryChanged { query });
    }

    pub fn overlay_backspace(&mut self) {
        let mut query = self.overlay.query().to_string();
        query.pop();
        self.overlay_event(SessionEvent::QueryChanged { query });
    }

    pub fn tools_insert(&mut self, c: char) {
        let mut query = self.tools.query().to_string();
        query.push(c);
        self.tools_event(SessionEvent::QueryChanged { query });
    }

    pub fn tools_backspace(&mut self) {
        let mut query = self.tools.query().to_string();
        query.pop();
        self.tools_event(SessionEvent::QueryChanged { query });
    }

    pub fn commit(&mut self, target: NavTarget) {
        nav::commit(target, self);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_until = Some(Instant::now() + STATUS_LIFETIME);
    }

    /// Expire the transient status line. Returns true when it was cleared.
    pub fn tick_status(&mut self) -> bool {
        if let Some(deadline) = self.status_until
            && Instant::now() >= deadline
        {
            self.status_message = None;
            self.status_until = None;
            return true;
        }
        false
    }
}

impl Navigator for App {
    fn navigate(&mut self, route: Route) {
        debug!(%route, "navigate");
        self.overlay_open = false;
        match route {
            Route::Home => self.router.push(View::Home),
            Route::Tools { search } => {
                self.router.push(View::Tools);
                self.select_chip(0);
                if let Some(query) = search {
                    self.set_status(format!("Search results for \"{query}\""));
                    self.tools_event(SessionEvent::QueryChanged { query });
                } else {
                    self.tools_event(SessionEvent::QueryChanged {
                        query: String::new(),
                    });
                }
            }
            Route::Tool { path } => match self.registry.find_by_path(&path) {
                Some(record) => self.router.push(View::Detail(record.clone())),
                None => self.router.push(View::NotFound(path)),
            },
        }
    }
}
