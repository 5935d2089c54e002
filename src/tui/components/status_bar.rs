//! # StatusBar Component
//!
//! Bottom line: the status message on the left, key hints for the current
//! view on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut bar = StatusBar::new(app.status_message.clone(), in_detail);
//! bar.render(frame, area);
//! ```
//!
//! When the terminal is too narrow for both, the hints are dropped first so
//! the status message stays readable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const OVERVIEW_HINTS: &str = "←↑↓→ Move  Enter Open  1-5 Jump  q Quit";
const DETAIL_HINTS: &str = "←↑↓→ Move  Esc Back  q Quit";

/// Bottom status line with the status message and key hints.
pub struct StatusBar {
    /// Transient status (e.g., the open category, "Unknown category: Maps")
    pub status_message: String,
    /// Whether the detail view is showing (selects the key hints)
    pub in_detail: bool,
}

impl StatusBar {
    pub fn new(status_message: String, in_detail: bool) -> Self {
        Self {
            status_message,
            in_detail,
        }
    }

    fn hints(&self) -> &'static str {
        if self.in_detail {
            DETAIL_HINTS
        } else {
            OVERVIEW_HINTS
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = self.hints();
        let status_width = self.status_message.chars().count();
        let hints_width = hints.chars().count();
        let width = usize::from(area.width);

        let mut spans = vec![Span::styled(
            self.status_message.as_str(),
            Style::default().fg(Color::White),
        )];
        if status_width + 2 + hints_width <= width {
            let padding = width - status_width - hints_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
