//! The tool registry: the static catalog plus optional user extensions.
//!
//! The registry is loaded once at startup and never mutated afterwards.
//! Construction validates the two uniqueness invariants (path and title);
//! everything downstream relies on registry indices staying stable.

use crate::config::Directories;
use crate::{Error, Result};
use toolrack_types::{Category, ToolRecord};
use tracing::{debug, warn};

/// Immutable, validated collection of [`ToolRecord`]s.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    records: Vec<ToolRecord>,
}

impl ToolRegistry {
    /// Build a registry, enforcing path and title uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registry`] naming the first duplicate path or title.
    pub fn from_records(records: Vec<ToolRecord>) -> Result<Self> {
        let mut paths = std::collections::HashSet::new();
        let mut titles = std::collections::HashSet::new();
        for record in &records {
            if !paths.insert(record.path.as_str()) {
                return Err(Error::Registry(format!("duplicate path: {}", record.path)));
            }
            if !titles.insert(record.title.as_str()) {
                return Err(Error::Registry(format!(
                    "duplicate title: {}",
                    record.title
                )));
            }
        }
        Ok(Self { records })
    }

    /// The built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(builtin_records()).expect("built-in catalog satisfies uniqueness")
    }

    /// Built-in catalog merged with the user's `tools.json`, if present.
    ///
    /// Loading is tolerant: an unreadable or unparsable extension file is
    /// logged and skipped, and individual user records that collide with an
    /// existing path or title are dropped with a warning. Startup never
    /// fails because of a bad extension file.
    #[must_use]
    pub fn load(dirs: &Directories) -> Self {
        let mut registry = Self::builtin();

        if !dirs.tools_file.exists() {
            return registry;
        }

        let extensions: Vec<ToolRecord> = match std::fs::read_to_string(&dirs.tools_file)
            .map_err(Error::from)
            .and_then(|content| serde_json::from_str(&content).map_err(Error::from))
        {
            Ok(records) => records,
            Err(err) => {
                warn!("ignoring unreadable {}: {err}", dirs.tools_file.display());
                return registry;
            }
        };

        let mut added = 0usize;
        for record in extensions {
            if registry.find_by_path(&record.path).is_some()
                || registry.records.iter().any(|r| r.title == record.title)
            {
                warn!(
                    "skipping user tool {:?}: path or title already registered",
                    record.title
                );
                continue;
            }
            registry.records.push(record);
            added += 1;
        }
        debug!(added, total = registry.len(), "loaded user tool extensions");
        registry
    }

    #[must_use]
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its route path.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&ToolRecord> {
        self.records.iter().find(|record| record.path == path)
    }

    /// Record counts per category, in [`Category::ALL`] order. Categories
    /// with no records are included with a zero count.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .records
                    .iter()
                    .filter(|record| record.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

fn record(
    title: &str,
    description: &str,
    category: Category,
    path: &str,
    icon: &str,
) -> ToolRecord {
    ToolRecord {
        title: title.to_string(),
        description: description.to_string(),
        category,
        path: path.to_string(),
        icon: icon.to_string(),
    }
}

/// The static catalog, in display order.
// Catalog text is authored so narrow queries stay narrow: "bmi" appears only
// in the BMI Calculator and "qr" only in the QR Code Generator.
#[allow(clippy::too_many_lines)]
fn builtin_records() -> Vec<ToolRecord> {
    use Category::{
        Business, Calculator, Career, Design, Education, Finance, Health, Inspiration, Pdf,
        Productivity, Social, Utility, Writing,
    };

    vec![
        record(
            "Age Calculator",
            "Work out exact age in years, months and days from a birth date",
            Calculator,
            "/age-calculator",
            "cake",
        ),
        record(
            "Unit Converter",
            "Convert length, weight, temperature and volume units",
            Calculator,
            "/unit-converter",
            "ruler",
        ),
        record(
            "Percentage Calculator",
            "Quick percentage, increase and decrease calculations",
            Calculator,
            "/percentage-calculator",
            "percent",
        ),
        record(
            "Date Difference Calculator",
            "Days between two dates, with weekdays broken out",
            Calculator,
            "/date-difference",
            "calendar",
        ),
        record(
            "BMI Calculator",
            "Check your body mass index from height and weight",
            Health,
            "/bmi-calculator",
            "activity",
        ),
        record(
            "Calorie Needs Calculator",
            "Estimate daily calorie needs from age and activity level",
            Health,
            "/calorie-needs",
            "flame",
        ),
        record(
            "Water Intake Tracker",
            "Daily hydration target based on body weight",
            Health,
            "/water-intake",
            "droplet",
        ),
        record(
            "Sleep Cycle Calculator",
            "Best bedtimes counted back in 90 minute sleep cycles",
            Health,
            "/sleep-cycle",
            "moon",
        ),
        record(
            "Word Counter",
            "Count words, characters, sentences and reading time",
            Writing,
            "/word-counter",
            "file-text",
        ),
        record(
            "Character Counter",
            "Live character count with and without spaces",
            Writing,
            "/character-counter",
            "type",
        ),
        record(
            "Letter Generator",
            "Ready-made formal letter templates to fill in and download",
            Writing,
            "/letter-generator",
            "mail",
        ),
        record(
            "Essay Outline Builder",
            "Structure an essay into thesis, arguments and conclusion",
            Writing,
            "/essay-outline",
            "list",
        ),
        record(
            "Bill Splitter",
            "Split a shared bill evenly or by custom shares",
            Finance,
            "/bill-splitter",
            "users",
        ),
        record(
            "Loan EMI Calculator",
            "Monthly loan installment from principal, rate and tenure",
            Finance,
            "/loan-emi-calculator",
            "landmark",
        ),
        record(
            "GST Calculator",
            "Add or remove GST at standard rates",
            Finance,
            "/gst-calculator",
            "receipt",
        ),
        record(
            "Discount Calculator",
            "Sale price and savings from a marked price",
            Finance,
            "/discount-calculator",
            "tag",
        ),
        record(
            "Income Tax Calculator",
            "Estimate income tax across slabs for the year",
            Finance,
            "/income-tax-calculator",
            "wallet",
        ),
        record(
            "Currency Converter",
            "Convert amounts between currencies at live rates",
            Finance,
            "/currency-converter",
            "banknote",
        ),
        record(
            "Resume Builder",
            "Compose a clean resume and export it as a document",
            Career,
            "/resume-builder",
            "briefcase",
        ),
        record(
            "Interview Question Bank",
            "Practice questions grouped by role and seniority",
            Career,
            "/interview-questions",
            "message-circle",
        ),
        record(
            "Salary Hike Calculator",
            "New salary after a raise, in absolute and percent terms",
            Career,
            "/salary-hike",
            "trending-up",
        ),
        record(
            "QR Code Generator",
            "Turn links and text into scannable QR codes",
            Utility,
            "/qr-code-generator",
            "qr-code",
        ),
        record(
            "Password Generator",
            "Strong random passwords with length and symbol options",
            Utility,
            "/password-generator",
            "key",
        ),
        record(
            "Random Number Picker",
            "Draw random numbers from a configurable range",
            Utility,
            "/random-number",
            "dices",
        ),
        record(
            "Stopwatch & Timer",
            "Stopwatch with laps plus a countdown timer",
            Utility,
            "/stopwatch",
            "timer",
        ),
        record(
            "Daily Planner",
            "Plan the day hour by hour and keep a local draft",
            Productivity,
            "/daily-planner",
            "notebook",
        ),
        record(
            "Todo List",
            "Simple task list with done states",
            Productivity,
            "/todo-list",
            "check-square",
        ),
        record(
            "Pomodoro Timer",
            "Focus sessions with timed breaks",
            Productivity,
            "/pomodoro-timer",
            "clock",
        ),
        record(
            "YouTube Downloader",
            "Fetch video details and grab a copy for offline viewing",
            Social,
            "/youtube-downloader",
            "youtube",
        ),
        record(
            "Hashtag Generator",
            "Suggest hashtags for a post topic",
            Social,
            "/hashtag-generator",
            "hash",
        ),
        record(
            "Bio Ideas",
            "Short profile bio ideas for social accounts",
            Social,
            "/bio-ideas",
            "user",
        ),
        record(
            "GPA Calculator",
            "Grade point average from course credits and grades",
            Education,
            "/gpa-calculator",
            "graduation-cap",
        ),
        record(
            "Periodic Table Lookup",
            "Element facts by symbol, name or atomic number",
            Education,
            "/periodic-table",
            "atom",
        ),
        record(
            "Times Table Trainer",
            "Practice multiplication tables against the clock",
            Education,
            "/times-table",
            "x",
        ),
        record(
            "Quote of the Day",
            "A fresh motivational quote every day",
            Inspiration,
            "/quote-of-the-day",
            "quote",
        ),
        record(
            "Writing Prompt Generator",
            "Random prompts to break through a blank page",
            Inspiration,
            "/writing-prompts",
            "feather",
        ),
        record(
            "Color Palette Picker",
            "Build harmonious color palettes from a base color",
            Design,
            "/color-palette",
            "palette",
        ),
        record(
            "Gradient Generator",
            "Two and three stop CSS gradients with copyable output",
            Design,
            "/gradient-generator",
            "layers",
        ),
        record(
            "Invoice Generator",
            "Itemized invoices with totals, ready to print",
            Business,
            "/invoice-generator",
            "receipt-text",
        ),
        record(
            "Business Name Ideas",
            "Brandable name suggestions for a new venture",
            Business,
            "/business-name-ideas",
            "lightbulb",
        ),
        record(
            "Meeting Cost Calculator",
            "What a meeting costs from headcount and hourly rates",
            Business,
            "/meeting-cost",
            "coins",
        ),
        record(
            "PDF Compressor",
            "Shrink PDF file size through a compression service",
            Pdf,
            "/pdf-compress",
            "file-down",
        ),
        record(
            "PDF Watermark",
            "Stamp text watermarks across PDF pages",
            Pdf,
            "/pdf-watermark",
            "stamp",
        ),
        record(
            "Image To PDF",
            "Bundle images into a single PDF document",
            Pdf,
            "/image-to-pdf",
            "image",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::record_matches;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let registry = ToolRegistry::builtin();
        assert!(registry.len() >= 40);
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let registry = ToolRegistry::builtin();
        for (category, count) in registry.category_counts() {
            assert!(count > 0, "no records in category {category}");
        }
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let records = vec![
            record("A", "first", Category::Utility, "/same", ""),
            record("B", "second", Category::Utility, "/same", ""),
        ];
        let err = ToolRegistry::from_records(records).unwrap_err();
        assert_eq!(err.to_string(), "Registry error: duplicate path: /same");
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let records = vec![
            record("Same", "first", Category::Utility, "/a", ""),
            record("Same", "second", Category::Utility, "/b", ""),
        ];
        let err = ToolRegistry::from_records(records).unwrap_err();
        assert_eq!(err.to_string(), "Registry error: duplicate title: Same");
    }

    #[test]
    fn test_find_by_path() {
        let registry = ToolRegistry::builtin();
        let found = registry.find_by_path("/bmi-calculator").unwrap();
        assert_eq!(found.title, "BMI Calculator");
        assert!(registry.find_by_path("/nope").is_none());
    }

    #[test]
    fn test_bmi_query_stays_narrow() {
        // Catalog text must never gain another "bmi" substring (e.g. the
        // word "submit"); the header search relies on this staying narrow.
        let registry = ToolRegistry::builtin();
        let matches: Vec<&str> = registry
            .records()
            .iter()
            .filter(|r| record_matches(r, "bmi"))
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(matches, vec!["BMI Calculator"]);
    }

    #[test]
    fn test_finance_query_is_exactly_the_category() {
        let registry = ToolRegistry::builtin();
        let matches: Vec<&str> = registry
            .records()
            .iter()
            .filter(|r| record_matches(r, "finance"))
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            matches,
            vec![
                "Bill Splitter",
                "Loan EMI Calculator",
                "GST Calculator",
                "Discount Calculator",
                "Income Tax Calculator",
                "Currency Converter",
            ]
        );
    }

    #[test]
    fn test_load_without_extension_file() {
        let temp = tempfile::tempdir().unwrap();
        let dirs = Directories::with_base(temp.path().to_path_buf());
        let registry = ToolRegistry::load(&dirs);
        assert_eq!(registry.len(), ToolRegistry::builtin().len());
    }

    #[test]
    fn test_load_merges_user_tools() {
        let temp = tempfile::tempdir().unwrap();
        let dirs = Directories::with_base(temp.path().to_path_buf());
        let user = serde_json::json!([{
            "title": "Tip Calculator",
            "description": "Tip amount and per-person total",
            "category": "finance",
            "path": "/tip-calculator"
        }]);
        std::fs::write(&dirs.tools_file, user.to_string()).unwrap();

        let registry = ToolRegistry::load(&dirs);
        assert_eq!(registry.len(), ToolRegistry::builtin().len() + 1);
        assert!(registry.find_by_path("/tip-calculator").is_some());
    }

    #[test]
    fn test_load_skips_colliding_user_tools() {
        let temp = tempfile::tempdir().unwrap();
        let dirs = Directories::with_base(temp.path().to_path_buf());
        let user = serde_json::json!([{
            "title": "Shadow",
            "description": "collides on path",
            "category": "utility",
            "path": "/bmi-calculator"
        }]);
        std::fs::write(&dirs.tools_file, user.to_string()).unwrap();

        let registry = ToolRegistry::load(&dirs);
        assert_eq!(registry.len(), ToolRegistry::builtin().len());
        assert_eq!(
            registry.find_by_path("/bmi-calculator").unwrap().title,
            "BMI Calculator"
        );
    }

    #[test]
    fn test_load_tolerates_invalid_json() {
        let temp = tempfile::tempdir().unwrap();
        let dirs = Directories::with_base(temp.path().to_path_buf());
        std::fs::write(&dirs.tools_file, "not json at all").unwrap();

        let registry = ToolRegistry::load(&dirs);
        assert_eq!(registry.len(), ToolRegistry::builtin().len());
    }
}
