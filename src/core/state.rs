//! # Application State
//!
//! Core state for the guide. Domain logic only, no TUI-specific types.
//! Presentation state (focus, scroll, hover) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationController  // overview or detail(title)
//! ├── status_message: String            // status bar text
//! ├── animations: bool                  // animate previews
//! ├── frame_interval: Duration          // redraw cadence while animating
//! └── mouse: bool                       // mouse capture enabled
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use log::warn;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::{DEFAULT_FRAME_INTERVAL_MS, ResolvedConfig};
use crate::core::navigation::NavigationController;

pub const WELCOME_MESSAGE: &str = "Pick a category to see which charts fit it";

pub struct App {
    pub navigation: NavigationController<'static>,
    pub status_message: String,
    pub animations: bool,
    pub frame_interval: Duration,
    pub mouse: bool,
}

impl App {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            navigation: NavigationController::new(catalog),
            status_message: String::from(WELCOME_MESSAGE),
            animations: true,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            mouse: true,
        }
    }

    /// Builds the app from resolved settings, opening the start category if one is set.
    ///
    /// An unknown start category is reported in the status bar and the app
    /// stays on the overview.
    pub fn from_config(catalog: &'static Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.animations = config.animations;
        app.frame_interval = config.frame_interval;
        app.mouse = config.mouse;

        if let Some(title) = &config.start_category {
            if let Effect::Rejected(err) = update(&mut app, Action::SelectCategory(title.clone())) {
                warn!("Start category ignored: {}", err);
            }
        }
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, PrismikConfig, resolve};
    use crate::core::navigation::View;
    use crate::test_support::test_app;

    fn resolved_with_start(start: Option<&str>) -> ResolvedConfig {
        let cli = CliOverrides {
            start_category: start,
            no_animation: true,
        };
        resolve(&PrismikConfig::default(), &cli)
    }

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, WELCOME_MESSAGE);
        assert_eq!(app.navigation.current(), View::Overview);
        assert!(app.animations);
    }

    #[test]
    fn test_from_config_opens_start_category() {
        let app = App::from_config(Catalog::builtin(), &resolved_with_start(Some("Distribution")));
        assert_eq!(
            app.navigation.current().category().map(|c| c.title),
            Some("Distribution")
        );
        assert!(!app.animations);
    }

    #[test]
    fn test_from_config_unknown_start_stays_on_overview() {
        let app = App::from_config(Catalog::builtin(), &resolved_with_start(Some("Maps")));
        assert_eq!(app.navigation.current(), View::Overview);
        assert_eq!(app.status_message, "Unknown category: Maps");
    }
}
