//! Shared types for toolrack components.
//!
//! This crate provides the core types used across toolrack-core,
//! toolrack-tui, and toolrack-cli. All types are serializable so catalogs,
//! routes and events can move through config files and CLI JSON output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse tool grouping.
///
/// The set is closed: catalogs, category chips and route queries only ever
/// use these thirteen values. The lowercase name is the wire form and also
/// the text the match engine sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Calculator,
    Health,
    Writing,
    Finance,
    Career,
    Utility,
    Productivity,
    Social,
    Education,
    Inspiration,
    Design,
    Business,
    Pdf,
}

impl Category {
    /// All categories in display order (chip rows, CLI listings).
    pub const ALL: [Category; 13] = [
        Category::Calculator,
        Category::Health,
        Category::Writing,
        Category::Finance,
        Category::Career,
        Category::Utility,
        Category::Productivity,
        Category::Social,
        Category::Education,
        Category::Inspiration,
        Category::Design,
        Category::Business,
        Category::Pdf,
    ];

    /// Lowercase name as used in catalogs and match text.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Calculator => "calculator",
            Category::Health => "health",
            Category::Writing => "writing",
            Category::Finance => "finance",
            Category::Career => "career",
            Category::Utility => "utility",
            Category::Productivity => "productivity",
            Category::Social => "social",
            Category::Education => "education",
            Category::Inspiration => "inspiration",
            Category::Design => "design",
            Category::Business => "business",
            Category::Pdf => "pdf",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a string that names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Static descriptor of one utility page.
///
/// `path` is the stable key: unique across a registry and doubling as the
/// route the record navigates to. `title` is unique too and is the primary
/// match key; `description` is the secondary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub path: String,
    /// Presentational hint (icon name). Never consulted by matching.
    #[serde(default)]
    pub icon: String,
}

/// A committed search selection, ready for the navigation sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavTarget {
    /// A concrete catalog record was chosen; navigate to its path.
    Tool { record: ToolRecord },

    /// Nothing was chosen; carry the raw query to the search results page.
    Query { query: String },
}

/// A navigable location.
///
/// The route grammar is tiny: `/` is home, `/tools` is the catalog page
/// (optionally seeded with a `search` query parameter), and any other path
/// is a tool page, resolved against the registry at display time. Query
/// parameters are only meaningful on the tools route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Route {
    Home,
    Tools {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        search: Option<String>,
    },
    Tool { path: String },
}

impl Route {
    /// Search-results route carrying a raw query.
    #[must_use]
    pub fn tools_search(query: impl Into<String>) -> Self {
        Route::Tools {
            search: Some(query.into()),
        }
    }

    /// Parse a path string.
    ///
    /// Total: there is no failure case. Unrecognized paths become
    /// [`Route::Tool`] and are resolved (or not) against a registry later.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };
        match base {
            "" | "/" => Route::Home,
            "/tools" => {
                let search = query.and_then(|raw| {
                    url::form_urlencoded::parse(raw.as_bytes())
                        .find(|(key, _)| key == "search")
                        .map(|(_, value)| value.into_owned())
                });
                Route::Tools { search }
            }
            _ => Route::Tool {
                path: base.to_string(),
            },
        }
    }

    /// Format as a path string, url-encoding the search query.
    ///
    /// Inverse of [`Route::parse`] for every route this crate produces.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Tools { search: None } => "/tools".to_string(),
            Route::Tools {
                search: Some(query),
            } => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
                format!("/tools?search={encoded}")
            }
            Route::Tool { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
