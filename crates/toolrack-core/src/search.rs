//! Substring match engine over a tool registry.
//!
//! Matching is deliberately simple: a record matches when the query appears
//! case-insensitively somewhere in its title, description, or category name.
//! No tokenization, no fuzzy scoring, no ranking. Results always keep
//! registry insertion order, so two surfaces showing the same query agree on
//! what "first match" means.

use serde::{Deserialize, Serialize};
use toolrack_types::{Category, ToolRecord};
use tracing::debug;

/// What a surface shows when the query is blank (empty or whitespace-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// No suggestions until the user types something (header surface).
    HideAll,

    /// The whole catalog, order-preserved (tools-page surface).
    ShowAll,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub empty_query: EmptyQueryPolicy,

    /// Maximum results to return. `None` means uncapped.
    pub limit: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            empty_query: EmptyQueryPolicy::HideAll,
            limit: None,
        }
    }
}

/// Filter engine producing ordered subsequences of a registry.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Filter `records` by `query`.
    ///
    /// Returns references into the registry slice to avoid cloning. Blank
    /// queries follow the configured [`EmptyQueryPolicy`]; the limit applies
    /// in both cases.
    #[must_use]
    pub fn search<'a>(&self, query: &str, records: &'a [ToolRecord]) -> Vec<&'a ToolRecord> {
        self.search_indices(query, records)
            .into_iter()
            .filter_map(|idx| records.get(idx))
            .collect()
    }

    /// Like [`MatchEngine::search`], but yields positions into `records`.
    /// Sessions store these so their match list survives without borrowing
    /// the registry.
    #[must_use]
    pub fn search_indices(&self, query: &str, records: &[ToolRecord]) -> Vec<usize> {
        let mut results: Vec<usize> = if query.trim().is_empty() {
            match self.config.empty_query {
                EmptyQueryPolicy::HideAll => Vec::new(),
                EmptyQueryPolicy::ShowAll => (0..records.len()).collect(),
            }
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| record_matches(record, query))
                .map(|(idx, _)| idx)
                .collect()
        };

        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }

        debug!(query, matches = results.len(), "search");
        results
    }
}

/// Unanchored, case-insensitive substring containment against title,
/// description, and category name. The query is not trimmed.
#[must_use]
pub fn record_matches(record: &ToolRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.category.name().contains(&needle)
}

/// Category predicate for the tools-page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Identity filter (the "all" chip).
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn accepts(&self, record: &ToolRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

/// Uncapped grid composition: a record appears iff it satisfies the active
/// category AND the active query. A blank query keeps every record the
/// category accepts.
#[must_use]
pub fn filter_tools<'a>(
    records: &'a [ToolRecord],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a ToolRecord> {
    let blank = query.trim().is_empty();
    records
        .iter()
        .filter(|record| filter.accepts(record) && (blank || record_matches(record, query)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str, category: Category, path: &str) -> ToolRecord {
        ToolRecord {
            title: title.to_string(),
            description: description.to_string(),
            category,
            path: path.to_string(),
            icon: String::new(),
        }
    }

    fn sample() -> Vec<ToolRecord> {
        vec![
            record(
                "Word Counter",
                "Count words and characters",
                Category::Writing,
                "/word-counter",
            ),
            record(
                "Bill Splitter",
                "Split a bill between friends",
                Category::Finance,
                "/bill-splitter",
            ),
            record(
                "Color Palette Picker",
                "Pick harmonious colors",
                Category::Design,
                "/color-palette",
            ),
        ]
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let records = sample();
        assert!(record_matches(&records[0], "WORD"));
        assert!(record_matches(&records[0], "word"));
        assert!(record_matches(&records[0], "WoRd"));
    }

    #[test]
    fn test_match_against_description() {
        let records = sample();
        assert!(record_matches(&records[1], "between friends"));
    }

    #[test]
    fn test_match_against_category_name() {
        let records = sample();
        assert!(record_matches(&records[2], "design"));
        assert!(!record_matches(&records[0], "design"));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let records = sample();
        // "Count words" contains " words" but no record contains " word-x"
        assert!(record_matches(&records[0], " words"));
        assert!(!record_matches(&records[0], "words "));
    }

    #[test]
    fn test_hide_all_on_blank_query() {
        let records = sample();
        let engine = MatchEngine::new(MatchConfig {
            empty_query: EmptyQueryPolicy::HideAll,
            limit: Some(5),
        });
        assert!(engine.search("", &records).is_empty());
        assert!(engine.search("   ", &records).is_empty());
    }

    #[test]
    fn test_show_all_on_blank_query() {
        let records = sample();
        let engine = MatchEngine::new(MatchConfig {
            empty_query: EmptyQueryPolicy::ShowAll,
            limit: None,
        });
        let results = engine.search("", &records);
        assert_eq!(results.len(), records.len());
        assert_eq!(results[0].path, "/word-counter");
    }

    #[test]
    fn test_limit_applies_to_show_all() {
        let records = sample();
        let engine = MatchEngine::new(MatchConfig {
            empty_query: EmptyQueryPolicy::ShowAll,
            limit: Some(2),
        });
        assert_eq!(engine.search("", &records).len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let records = sample();
        let engine = MatchEngine::new(MatchConfig::default());
        // "l" appears in Bill Splitter and Color Palette Picker only
        let results = engine.search("l", &records);
        let paths: Vec<&str> = results.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/bill-splitter", "/color-palette"]);
    }

    #[test]
    fn test_no_matches_is_valid_output() {
        let records = sample();
        let engine = MatchEngine::new(MatchConfig::default());
        assert!(engine.search("doesnotexist123", &records).is_empty());
    }

    #[test]
    fn test_category_filter_all_is_identity() {
        let records = sample();
        let kept = filter_tools(&records, "", CategoryFilter::All);
        assert_eq!(kept.len(), records.len());
    }

    #[test]
    fn test_category_filter_only() {
        let records = sample();
        let kept = filter_tools(&records, "", CategoryFilter::Only(Category::Finance));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path, "/bill-splitter");
    }

    #[test]
    fn test_grid_composes_category_and_query() {
        let records = sample();
        // "l" matches Bill Splitter and Color Palette Picker, but the
        // finance chip keeps only the former
        let kept = filter_tools(&records, "l", CategoryFilter::Only(Category::Finance));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path, "/bill-splitter");

        let none = filter_tools(&records, "word", CategoryFilter::Only(Category::Finance));
        assert!(none.is_empty());
    }
}
