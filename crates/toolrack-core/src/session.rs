//! The suggestion state machine owning one search surface's transient state.
//!
//! Both shipped surfaces (the global header search and the tools-page inline
//! search) run the same [`SearchSession`]; their observable differences are
//! entirely in [`SurfaceConfig`]. Every transition is synchronous and total:
//! out-of-range indices clamp or no-op, and a commit against an empty match
//! list falls back to the raw-query search route.

use crate::registry::ToolRegistry;
use crate::search::{EmptyQueryPolicy, MatchConfig, MatchEngine};
use serde::{Deserialize, Serialize};
use toolrack_types::{NavTarget, ToolRecord};
use tracing::debug;

/// What Enter does when nothing is highlighted but matches exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitFallback {
    /// Commit the first match (header "submit" semantics).
    FirstMatch,

    /// Skip straight to the raw-query search route.
    Never,
}

/// Per-surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    #[serde(default = "default_empty_query")]
    pub empty_query: EmptyQueryPolicy,

    #[serde(default = "default_result_cap")]
    pub result_cap: Option<usize>,

    #[serde(default = "default_submit_fallback")]
    pub submit_fallback: SubmitFallback,
}

fn default_empty_query() -> EmptyQueryPolicy {
    EmptyQueryPolicy::HideAll
}
fn default_result_cap() -> Option<usize> {
    Some(5)
}
fn default_submit_fallback() -> SubmitFallback {
    SubmitFallback::FirstMatch
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::header()
    }
}

impl SurfaceConfig {
    /// Global header search: hidden until typed into, 5 suggestions,
    /// Enter without a highlight commits the first match.
    #[must_use]
    pub fn header() -> Self {
        Self {
            empty_query: EmptyQueryPolicy::HideAll,
            result_cap: Some(5),
            submit_fallback: SubmitFallback::FirstMatch,
        }
    }

    /// Tools-page inline search: full catalog when blank, 6 suggestions,
    /// Enter never auto-picks a match the user did not highlight.
    #[must_use]
    pub fn tools_page() -> Self {
        Self {
            empty_query: EmptyQueryPolicy::ShowAll,
            result_cap: Some(6),
            submit_fallback: SubmitFallback::Never,
        }
    }
}

/// Input events a search surface feeds into its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    QueryChanged { query: String },
    SelectNext,
    SelectPrevious,
    Submit,
    Dismiss,
    FocusLost,
    Focused,
    SuggestionClicked { index: usize },
}

/// One surface's search state: query text, open flag, highlight, and the
/// match list derived from the current query.
///
/// Matches are stored as indices into the registry so events and rendering
/// agree on one list without holding a borrow across frames.
#[derive(Debug, Clone)]
pub struct SearchSession {
    config: SurfaceConfig,
    query: String,
    open: bool,
    highlighted: Option<usize>,
    matches: Vec<usize>,
}

impl SearchSession {
    #[must_use]
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            query: String::new(),
            open: false,
            highlighted: None,
            matches: Vec::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Current match list resolved against the registry.
    #[must_use]
    pub fn matches<'a>(&self, registry: &'a ToolRegistry) -> Vec<&'a ToolRecord> {
        self.matches
            .iter()
            .filter_map(|&idx| registry.records().get(idx))
            .collect()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Apply one event. Returns the committed navigation target, if the
    /// event finalized the interaction.
    pub fn process(&mut self, event: SessionEvent, registry: &ToolRegistry) -> Option<NavTarget> {
        debug!(?event, open = self.open, highlighted = ?self.highlighted, "session event");
        match event {
            SessionEvent::QueryChanged { query } => {
                self.query = query;
                self.recompute_matches(registry);
                // Every text change restarts from "no selection"
                self.highlighted = None;
                self.open = self.should_open();
                None
            }
            SessionEvent::SelectNext => {
                if self.open {
                    let next = self.highlighted.map_or(0, |i| i + 1);
                    if next < self.matches.len() {
                        self.highlighted = Some(next);
                    }
                }
                None
            }
            SessionEvent::SelectPrevious => {
                if self.open {
                    self.highlighted = match self.highlighted {
                        Some(0) | None => None,
                        Some(i) => Some(i - 1),
                    };
                }
                None
            }
            SessionEvent::Submit => self.submit(registry),
            SessionEvent::Dismiss | SessionEvent::FocusLost => {
                self.open = false;
                self.highlighted = None;
                None
            }
            SessionEvent::Focused => {
                self.recompute_matches(registry);
                self.highlighted = None;
                self.open = self.should_open();
                None
            }
            SessionEvent::SuggestionClicked { index } => {
                if index < self.matches.len() {
                    let target = self.target_for(index, registry);
                    self.reset();
                    target
                } else {
                    None
                }
            }
        }
    }

    /// Whether the list should be visible for the current query under this
    /// surface's policy.
    fn should_open(&self) -> bool {
        match self.config.empty_query {
            EmptyQueryPolicy::ShowAll => true,
            EmptyQueryPolicy::HideAll => !self.query.is_empty(),
        }
    }

    fn recompute_matches(&mut self, registry: &ToolRegistry) {
        let engine = MatchEngine::new(MatchConfig {
            empty_query: self.config.empty_query,
            limit: self.config.result_cap,
        });
        self.matches = engine.search_indices(&self.query, registry.records());
    }

    /// The Enter cascade: highlighted match, then first-match fallback,
    /// then the raw-query search route, then nothing.
    fn submit(&mut self, registry: &ToolRegistry) -> Option<NavTarget> {
        let target = if let Some(index) = self.highlighted.filter(|&i| i < self.matches.len()) {
            self.target_for(index, registry)
        } else if !self.matches.is_empty()
            && self.config.submit_fallback == SubmitFallback::FirstMatch
        {
            self.target_for(0, registry)
        } else if !self.query.is_empty() {
            Some(NavTarget::Query {
                query: self.query.clone(),
            })
        } else {
            None
        };

        if target.is_some() {
            self.reset();
        }
        target
    }

    fn target_for(&self, index: usize, registry: &ToolRegistry) -> Option<NavTarget> {
        let record_idx = *self.matches.get(index)?;
        let record = registry.records().get(record_idx)?;
        Some(NavTarget::Tool {
            record: record.clone(),
        })
    }

    /// Post-commit state: query cleared, closed, no highlight.
    fn reset(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.highlighted = None;
        self.open = false;
    }
}
