//! # Chart Catalog
//!
//! The fixed taxonomy the guide is built on: five categories, each with three
//! recommended chart types.
//!
//! ```text
//! Catalog
//! └── Category (×5, display order)
//!     ├── title          // unique, also the lookup key
//!     ├── description
//!     ├── preview_key    // names the overview preview
//!     └── chart_types: [ChartType; 3]
//!         ├── name        // unique within the category, preview key
//!         ├── label
//!         └── explanation
//! ```
//!
//! The data is `'static` and never mutated, so any number of readers can share
//! `Catalog::builtin()` freely.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// One recommended visualization within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartType {
    pub name: &'static str,
    pub label: &'static str,
    pub explanation: &'static str,
}

/// A group of chart types sharing an analytical purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: &'static str,
    pub description: &'static str,
    pub preview_key: &'static str,
    pub chart_types: [ChartType; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: &'static [Category],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateTitle(String),
    DuplicateChartName { category: String, name: String },
    EmptyPreviewKey(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateTitle(title) => {
                write!(f, "catalog has more than one category titled '{title}'")
            }
            CatalogError::DuplicateChartName { category, name } => {
                write!(f, "category '{category}' lists chart '{name}' twice")
            }
            CatalogError::EmptyPreviewKey(title) => {
                write!(f, "category '{title}' has no preview key")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

const fn chart(name: &'static str, label: &'static str, explanation: &'static str) -> ChartType {
    ChartType {
        name,
        label,
        explanation,
    }
}

static CATEGORIES: [Category; 5] = [
    Category {
        title: "Comparison",
        description: "Compare values between categories to reveal rankings, size differences or standout elements.",
        preview_key: "BarChart",
        chart_types: [
            chart("BarChart", "Bar Chart", "Best for comparing discrete values across categories."),
            chart("DotPlot", "Dot Plot", "Highlights differences while avoiding chart clutter."),
            chart("LollipopChart", "Lollipop Chart", "Like a bar chart, but with a cleaner, more minimal visual."),
        ],
    },
    Category {
        title: "Change Over Time",
        description: "Show how variables evolve across time to identify trends and patterns.",
        preview_key: "LineChart",
        chart_types: [
            chart("LineChart", "Line Chart", "Ideal for tracking continuous data over intervals."),
            chart("AreaChart", "Area Chart", "Displays volume beneath a trend line, good for totals."),
            chart("SlopeChart", "Slope Chart", "Compares changes between two points in time."),
        ],
    },
    Category {
        title: "Distribution",
        description: "Reveal how data points are spread across a range.",
        preview_key: "Histogram",
        chart_types: [
            chart("Histogram", "Histogram", "Shows frequency of values within intervals."),
            chart("BoxPlot", "Box Plot", "Displays median, quartiles, and outliers."),
            chart("ViolinPlot", "Violin Plot", "Adds density curve to a box plot."),
        ],
    },
    Category {
        title: "Part-to-Whole",
        description: "Illustrate how individual parts make up a complete whole.",
        preview_key: "PieChart",
        chart_types: [
            chart("PieChart", "Pie Chart", "Classic for showing parts of a whole at a glance."),
            chart("StackedBar", "Stacked Bar", "Visualize sub-categories inside total values."),
            chart("Treemap", "Treemap", "Efficiently shows proportion with nested boxes."),
        ],
    },
    Category {
        title: "Relationship",
        description: "Show the connection or correlation between variables.",
        preview_key: "ScatterPlot",
        chart_types: [
            chart("ScatterPlot", "Scatter Plot", "Standard for showing two-variable relationships."),
            chart("BubbleChart", "Bubble Chart", "Adds a third variable with size."),
            chart("ConnectedScatter", "Connected Scatter", "Tracks progression over time between points."),
        ],
    },
];

static BUILTIN: Catalog = Catalog::new(&CATEGORIES);

impl Catalog {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The guide's built-in taxonomy.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All categories in display order.
    pub fn all(&self) -> &'static [Category] {
        self.categories
    }

    pub fn find_by_title(&self, title: &str) -> Option<&'static Category> {
        self.categories.iter().find(|category| category.title == title)
    }

    /// Position of a category in display order.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.title == title)
    }

    /// Checks the uniqueness invariants a hand-edited table can break.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut titles = HashSet::new();
        for category in self.categories {
            if !titles.insert(category.title) {
                return Err(CatalogError::DuplicateTitle(category.title.to_string()));
            }
            if category.preview_key.trim().is_empty() {
                return Err(CatalogError::EmptyPreviewKey(category.title.to_string()));
            }
            let mut names = HashSet::new();
            for chart in &category.chart_types {
                if !names.insert(chart.name) {
                    return Err(CatalogError::DuplicateChartName {
                        category: category.title.to_string(),
                        name: chart.name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}. {}", i + 1, category.title)?;
            writeln!(f, "   {}", category.description)?;
            for chart in &category.chart_types {
                writeln!(f, "   - {}: {}", chart.label, chart.explanation)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ChartType = chart("Plain", "Plain", "A chart.");

    #[test]
    fn test_builtin_has_five_categories_in_order() {
        let titles: Vec<&str> = Catalog::builtin().all().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Comparison",
                "Change Over Time",
                "Distribution",
                "Part-to-Whole",
                "Relationship"
            ]
        );
    }

    #[test]
    fn test_find_by_title_round_trips() {
        let catalog = Catalog::builtin();
        for category in catalog.all() {
            assert_eq!(catalog.find_by_title(category.title), Some(category));
        }
    }

    #[test]
    fn test_find_by_title_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_by_title("distribution").is_none());
        assert!(catalog.find_by_title("Distribution ").is_none());
        assert!(catalog.find_by_title("").is_none());
    }

    #[test]
    fn test_all_is_deterministic() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all(), catalog.all());
    }

    #[test]
    fn test_builtin_validates() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_every_category_has_preview_and_unique_charts() {
        for category in Catalog::builtin().all() {
            assert!(!category.preview_key.is_empty());
            let names: HashSet<&str> = category.chart_types.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), 3, "{}", category.title);
        }
    }

    #[test]
    fn test_preview_key_names_a_chart_in_the_category() {
        for category in Catalog::builtin().all() {
            assert!(
                category
                    .chart_types
                    .iter()
                    .any(|c| c.name == category.preview_key)
            );
        }
    }

    #[test]
    fn test_position() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.position("Comparison"), Some(0));
        assert_eq!(catalog.position("Relationship"), Some(4));
        assert_eq!(catalog.position("Maps"), None);
    }

    #[test]
    fn test_validate_rejects_duplicate_title() {
        static DUPES: [Category; 2] = [
            Category {
                title: "Same",
                description: "",
                preview_key: "Plain",
                chart_types: [PLAIN, chart("B", "B", ""), chart("C", "C", "")],
            },
            Category {
                title: "Same",
                description: "",
                preview_key: "Plain",
                chart_types: [PLAIN, chart("B", "B", ""), chart("C", "C", "")],
            },
        ];
        let err = Catalog::new(&DUPES).validate().unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTitle("Same".to_string()));
    }

    #[test]
    fn test_validate_rejects_duplicate_chart_name() {
        static DUPES: [Category; 1] = [Category {
            title: "Only",
            description: "",
            preview_key: "Plain",
            chart_types: [PLAIN, PLAIN, chart("C", "C", "")],
        }];
        let err = Catalog::new(&DUPES).validate().unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateChartName {
                category: "Only".to_string(),
                name: "Plain".to_string(),
            }
        );
        assert!(err.to_string().contains("'Plain' twice"));
    }

    #[test]
    fn test_validate_rejects_blank_preview_key() {
        static BLANK: [Category; 1] = [Category {
            title: "Blank",
            description: "",
            preview_key: "  ",
            chart_types: [PLAIN, chart("B", "B", ""), chart("C", "C", "")],
        }];
        assert_eq!(
            Catalog::new(&BLANK).validate(),
            Err(CatalogError::EmptyPreviewKey("Blank".to_string()))
        );
    }

    #[test]
    fn test_display_lists_every_label() {
        let text = Catalog::builtin().to_string();
        assert!(text.starts_with("1. Comparison\n"));
        assert!(text.contains("   - Violin Plot: Adds density curve to a box plot."));
        assert!(text.contains("5. Relationship"));
    }

    #[test]
    fn test_serializes_as_category_array() {
        let json = serde_json::to_value(Catalog::builtin()).unwrap();
        let categories = json.as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[2]["title"], "Distribution");
        assert_eq!(categories[2]["chart_types"][1]["name"], "BoxPlot");
    }
}
