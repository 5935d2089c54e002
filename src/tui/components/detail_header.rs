//! # Detail Header
//!
//! Above the chart tiles in detail view: the back control, the category
//! title and its description.
//!
//! ```text
//!               ← Back to all categories       (row 0, clickable)
//!                      Distribution            (row 1)
//!        Reveal how data points are spread...  (rows 2..)
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::catalog::Category;
use crate::tui::component::Component;

pub const BACK_LABEL: &str = "← Back to all categories";

pub struct DetailHeader<'a> {
    pub category: &'a Category,
    /// Set during render to the back control's screen rect.
    pub back_button: Rect,
}

impl<'a> DetailHeader<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self {
            category,
            back_button: Rect::default(),
        }
    }

    /// Rows needed at `width`: back control, title, wrapped description, blank.
    pub fn height(category: &Category, width: u16) -> u16 {
        let width = usize::from(width).max(1);
        3 + textwrap::wrap(category.description, width).len() as u16
    }
}

impl Component for DetailHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let back_width = (BACK_LABEL.chars().count() as u16).min(area.width);
        self.back_button = Rect::new(
            area.x + (area.width - back_width) / 2,
            area.y,
            back_width,
            area.height.min(1),
        );

        let description = textwrap::wrap(self.category.description, usize::from(area.width).max(1));
        let mut lines = vec![
            Line::styled(
                BACK_LABEL,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Line::styled(
                self.category.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ];
        lines.extend(
            description
                .into_iter()
                .map(|text| Line::styled(text, Style::default().fg(Color::Gray))),
        );

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn distribution() -> &'static Category {
        Catalog::builtin().find_by_title("Distribution").unwrap()
    }

    #[test]
    fn test_height_wraps_description() {
        let category = distribution();
        assert_eq!(DetailHeader::height(category, 200), 4);
        assert!(DetailHeader::height(category, 20) > 4);
    }

    #[test]
    fn test_renders_back_control_title_and_description() {
        let category = distribution();
        let backend = TestBackend::new(80, DetailHeader::height(category, 80));
        let mut terminal = Terminal::new(backend).unwrap();
        let mut header = DetailHeader::new(category);

        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Back to all categories"));
        assert!(text.contains("Distribution"));
        assert!(text.contains("Reveal how data points are spread across a range."));

        // Back control is centered on the first row
        let label_width = BACK_LABEL.chars().count() as u16;
        assert_eq!(header.back_button, Rect::new((80 - label_width) / 2, 0, label_width, 1));
        assert_eq!(buffer[(header.back_button.x, 0)].symbol(), "←");
    }
}
