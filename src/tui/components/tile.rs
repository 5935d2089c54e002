//! # Tile
//!
//! One card in a grid: preview on top, a bold heading, then wrapped body text.
//!
//! ```text
//! ┌──────────────────────────┐
//! │      ⣀⣤⣶ preview ⣶⣤⣀      │
//! │                          │
//! │ Distribution             │
//! │ Reveal how data points   │
//! │ are spread across a...   │
//! └──────────────────────────┘
//! ```
//!
//! Body lines come from `textwrap`, the same wrapping `tile_height` measures
//! with, so the grid's row heights always match what is drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::tui::components::preview::{PREVIEW_HEIGHT, PreviewFragment, PreviewWidget};

/// Border (2) + preview + spacer (1) + heading (1).
const CHROME_HEIGHT: u16 = 2 + PREVIEW_HEIGHT + 1 + 1;
/// Border (2) + horizontal padding (2).
const CHROME_WIDTH: u16 = 4;

pub fn body_lines(body: &str, tile_width: u16) -> Vec<String> {
    let width = usize::from(tile_width.saturating_sub(CHROME_WIDTH)).max(1);
    textwrap::wrap(body, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Rows a tile of `tile_width` needs to show `body` without clipping.
pub fn tile_height(body: &str, tile_width: u16) -> u16 {
    CHROME_HEIGHT + body_lines(body, tile_width).len() as u16
}

pub struct Tile<'a> {
    pub fragment: PreviewFragment,
    pub heading: &'a str,
    pub body: &'a str,
    pub phase: f64,
    pub focused: bool,
    pub hovered: bool,
    /// Shown dimmed before the heading in overview (digit shortcut).
    pub badge: Option<usize>,
}

impl Widget for Tile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if self.hovered {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [preview_area, _, heading_area, body_area] = Layout::vertical([
            Constraint::Length(PREVIEW_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        PreviewWidget::new(self.fragment, self.phase).render(preview_area, buf);

        let mut heading = Vec::new();
        if let Some(n) = self.badge {
            heading.push(Span::styled(
                format!("{n} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        heading.push(Span::styled(
            self.heading,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(Line::from(heading)).render(heading_area, buf);

        let lines: Vec<Line> = body_lines(self.body, area.width)
            .into_iter()
            .map(|text| Line::styled(text, Style::default().fg(Color::Gray)))
            .collect();
        Paragraph::new(lines).render(body_area, buf);
    }
}
