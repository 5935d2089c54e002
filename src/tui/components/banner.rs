//! # Banner Component
//!
//! The guide's heading: a three-tone title with two lines of introduction.
//! Stateless; it has no props and always renders the same text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Prismik Visual Guide";
const TAGLINE: &str = "There are many ways to show data – so how do you pick the right one?";
const INTRO: &str = "This is a simple starting point for creating clear and meaningful visuals.";

/// Indigo → pink → yellow, one tone per word.
const TITLE_TONES: [Color; 3] = [
    Color::Rgb(99, 102, 241),
    Color::Rgb(236, 72, 153),
    Color::Rgb(234, 179, 8),
];

/// Rows the banner needs: title, tagline, intro, blank.
pub const BANNER_HEIGHT: u16 = 4;

pub struct Banner;

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title = Vec::new();
        for (i, word) in TITLE.split(' ').enumerate() {
            if i > 0 {
                title.push(Span::raw(" "));
            }
            title.push(Span::styled(
                word,
                Style::default()
                    .fg(TITLE_TONES[i % TITLE_TONES.len()])
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let lines = vec![
            Line::from(title),
            Line::styled(TAGLINE, Style::default().fg(Color::Gray)),
            Line::styled(INTRO, Style::default().fg(Color::DarkGray)),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
