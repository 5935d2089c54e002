//! # Navigation
//!
//! Two views, one piece of state:
//!
//! ```text
//!              select_category(title)
//!   Overview ─────────────────────────► Detail(title)
//!       ▲                                  │   ▲
//!       │            go_back()             │   │ select_category(other)
//!       └──────────────────────────────────┘───┘
//! ```
//!
//! `NavigationState` is a plain owned value and its transitions are pure
//! functions that take the catalog explicitly. `NavigationController` pairs a
//! state with a catalog for callers that want a single mutable handle.

use std::fmt;

use log::debug;

use crate::core::catalog::{Catalog, Category};

/// Selected category, or none for the overview grid.
///
/// Only constructible as the overview; the sole way into detail mode is
/// [`NavigationState::select`], which checks the title against a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active_category: Option<String>,
}

/// The current state resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'c> {
    Overview,
    Detail(&'c Category),
}

impl<'c> View<'c> {
    pub fn category(&self) -> Option<&'c Category> {
        match *self {
            View::Overview => None,
            View::Detail(category) => Some(category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Returned,
    AlreadyAtOverview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    InvalidSelection { title: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidSelection { title } => {
                write!(f, "no category titled '{title}'")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl NavigationState {
    pub fn overview() -> Self {
        Self::default()
    }

    pub fn is_overview(&self) -> bool {
        self.active_category.is_none()
    }

    pub fn active_title(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Detail state for `title` with the category it binds, or `InvalidSelection`
    /// if the catalog has no such category.
    pub fn select<'c>(
        &self,
        catalog: &'c Catalog,
        title: &str,
    ) -> Result<(NavigationState, &'c Category), NavigationError> {
        match catalog.find_by_title(title) {
            Some(category) => Ok((
                NavigationState {
                    active_category: Some(category.title.to_string()),
                },
                category,
            )),
            None => Err(NavigationError::InvalidSelection {
                title: title.to_string(),
            }),
        }
    }

    pub fn back(&self) -> NavigationState {
        NavigationState::overview()
    }

    /// A title the catalog doesn't know resolves to the overview.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> View<'c> {
        self.active_category
            .as_deref()
            .and_then(|title| catalog.find_by_title(title))
            .map_or(View::Overview, View::Detail)
    }
}

pub struct NavigationController<'c> {
    catalog: &'c Catalog,
    state: NavigationState,
}

impl<'c> NavigationController<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: NavigationState::overview(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn select_category(&mut self, title: &str) -> Result<&'c Category, NavigationError> {
        let (state, category) = self.state.select(self.catalog, title)?;
        self.state = state;
        debug!("Navigation: detail view for '{}'", title);
        Ok(category)
    }

    pub fn go_back(&mut self) -> BackOutcome {
        if self.state.is_overview() {
            return BackOutcome::AlreadyAtOverview;
        }
        self.state = self.state.back();
        debug!("Navigation: back to overview");
        BackOutcome::Returned
    }

    pub fn current(&self) -> View<'c> {
        self.state.resolve(self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController<'static> {
        NavigationController::new(Catalog::builtin())
    }

    #[test]
    fn test_starts_in_overview() {
        let nav = controller();
        assert!(nav.state().is_overview());
        assert_eq!(nav.current(), View::Overview);
        assert!(nav.current().category().is_none());
    }

    #[test]
    fn test_select_every_title_resolves_to_that_category() {
        for category in Catalog::builtin().all() {
            let mut nav = controller();
            let selected = nav.select_category(category.title).unwrap();
            assert_eq!(selected, category);
            assert_eq!(nav.current(), View::Detail(category));
            assert_eq!(nav.state().active_title(), Some(category.title));
        }
    }

    #[test]
    fn test_invalid_selection_from_overview_keeps_state() {
        let mut nav = controller();
        let err = nav.select_category("nonexistent").unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidSelection {
                title: "nonexistent".to_string()
            }
        );
        assert_eq!(nav.current(), View::Overview);
    }

    #[test]
    fn test_invalid_selection_from_detail_keeps_state() {
        let mut nav = controller();
        nav.select_category("Relationship").unwrap();
        let before = nav.state().clone();
        assert!(nav.select_category("Maps").is_err());
        assert_eq!(nav.state(), &before);
        assert_eq!(nav.current().category().map(|c| c.title), Some("Relationship"));
    }

    #[test]
    fn test_select_from_detail_switches_category() {
        let mut nav = controller();
        nav.select_category("Comparison").unwrap();
        nav.select_category("Part-to-Whole").unwrap();
        assert_eq!(nav.current().category().map(|c| c.title), Some("Part-to-Whole"));
    }

    #[test]
    fn test_go_back_from_detail() {
        let mut nav = controller();
        nav.select_category("Change Over Time").unwrap();
        assert_eq!(nav.go_back(), BackOutcome::Returned);
        assert_eq!(nav.current(), View::Overview);
    }

    #[test]
    fn test_go_back_from_overview_is_noop() {
        let mut nav = controller();
        assert_eq!(nav.go_back(), BackOutcome::AlreadyAtOverview);
        assert_eq!(nav.current(), View::Overview);
    }

    #[test]
    fn test_go_back_twice_equals_once() {
        let mut once = controller();
        once.select_category("Distribution").unwrap();
        once.go_back();

        let mut twice = controller();
        twice.select_category("Distribution").unwrap();
        twice.go_back();
        assert_eq!(twice.go_back(), BackOutcome::AlreadyAtOverview);

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_distribution_scenario() {
        let mut nav = controller();
        assert_eq!(nav.current(), View::Overview);

        nav.select_category("Distribution").unwrap();
        let category = nav.current().category().unwrap();
        assert_eq!(category.title, "Distribution");
        let names: Vec<&str> = category.chart_types.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Histogram", "BoxPlot", "ViolinPlot"]);

        nav.go_back();
        assert!(nav.current().category().is_none());
    }

    #[test]
    fn test_pure_transitions_do_not_touch_input() {
        let catalog = Catalog::builtin();
        let start = NavigationState::overview();
        let (detail, category) = start.select(catalog, "Comparison").unwrap();
        assert!(start.is_overview());
        assert_eq!(category.preview_key, "BarChart");
        assert_eq!(detail.active_title(), Some("Comparison"));
        assert_eq!(detail.back(), NavigationState::overview());
        assert!(detail.select(catalog, "nope").is_err());
    }

    #[test]
    fn test_resolve_against_other_catalog_falls_back_to_overview() {
        static OTHER: [Category; 0] = [];
        let (detail, _) = NavigationState::overview()
            .select(Catalog::builtin(), "Comparison")
            .unwrap();
        assert_eq!(detail.resolve(&Catalog::new(&OTHER)), View::Overview);
    }

    #[test]
    fn test_select_category_returns_the_bound_category() {
        let mut nav = controller();
        let selected = nav.select_category("Part-to-Whole").unwrap();
        assert_eq!(nav.current(), View::Detail(selected));
        assert_eq!(selected.chart_types[0].name, "PieChart");
    }

    #[test]
    fn test_error_message_names_title() {
        let err = NavigationError::InvalidSelection {
            title: "Maps".to_string(),
        };
        assert_eq!(err.to_string(), "no category titled 'Maps'");
    }
}
