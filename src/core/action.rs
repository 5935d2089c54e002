//! # Actions
//!
//! Everything that can happen in the guide becomes an `Action`.
//! User clicks a category tile? That's `Action::SelectCategory(title)`.
//! User hits the back control? That's `Action::GoBack`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::navigation::{BackOutcome, NavigationError};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(String),
    GoBack,
    Quit,
}

/// What the adapter should do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The action was refused; state is unchanged.
    Rejected(NavigationError),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectCategory(title) => match app.navigation.select_category(&title) {
            Ok(category) => {
                info!("Selected category '{}'", category.title);
                app.status_message = category.title.to_string();
                Effect::None
            }
            Err(err) => {
                warn!("Rejected selection: {}", err);
                app.status_message = format!("Unknown category: {title}");
                Effect::Rejected(err)
            }
        },
        Action::GoBack => {
            if app.navigation.go_back() == BackOutcome::Returned {
                app.status_message = String::from("All categories");
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
