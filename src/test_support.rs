//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::catalog::Catalog;
use crate::core::state::App;

/// Creates a test App over the built-in catalog, starting on the overview.
pub fn test_app() -> App {
    App::new(Catalog::builtin())
}

/// Creates a test App already showing `title`'s detail view.
pub fn test_app_in(title: &str) -> App {
    let mut app = test_app();
    update(&mut app, Action::SelectCategory(title.to_string()));
    app
}
