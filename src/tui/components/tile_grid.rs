//! # Tile Grid
//!
//! Responsive grid of [`Tile`]s inside a vertical `ScrollView`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GridState` lives in `TuiState` (focus, hover, scroll, last layout)
//! - `TileGrid` is created each frame with borrowed state
//!
//! ## Layout
//!
//! Column count follows the terminal width (1 / 2 / 3 columns). Every tile in
//! a row takes the row's tallest height so the cards line up. Rects are in
//! *content* coordinates (origin at the top of the scrollable canvas);
//! `GridState::hit_test` converts screen positions back into tile indices.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;
use crate::tui::components::tile::{Tile, tile_height};

pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;
pub const THREE_COLUMN_MIN_WIDTH: u16 = 100;
const GAP: u16 = 2;

pub fn columns_for_width(width: u16) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub tiles: Vec<Rect>,
    pub content_height: u16,
}

impl GridLayout {
    pub fn compute(width: u16, bodies: &[&str]) -> Self {
        let columns = columns_for_width(width);
        let gaps = GAP * (columns as u16 - 1);
        let tile_width = width.saturating_sub(gaps) / columns as u16;

        let mut tiles = Vec::with_capacity(bodies.len());
        let mut y = 0u16;
        for row in bodies.chunks(columns) {
            let row_height = row
                .iter()
                .map(|body| tile_height(body, tile_width))
                .max()
                .unwrap_or(0);
            for col in 0..row.len() {
                let x = col as u16 * (tile_width + GAP);
                tiles.push(Rect::new(x, y, tile_width, row_height));
            }
            y = y.saturating_add(row_height);
        }

        Self {
            columns,
            tiles,
            content_height: y,
        }
    }

    /// Tile under a content-space position, ignoring the gaps between tiles.
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tiles
            .iter()
            .position(|rect| rect.contains(Position::new(x, y)))
    }

    /// Moves focus one step, staying put at the grid's edges.
    pub fn step(&self, from: usize, direction: Direction) -> usize {
        let count = self.tiles.len();
        if count == 0 {
            return from;
        }
        let from = from.min(count - 1);
        let columns = self.columns.max(1);
        match direction {
            Direction::Left if from % columns > 0 => from - 1,
            Direction::Right if from % columns + 1 < columns && from + 1 < count => from + 1,
            Direction::Up if from >= columns => from - columns,
            // Moving down into a short last row lands on its last tile
            Direction::Down if from / columns < (count - 1) / columns => {
                (from + columns).min(count - 1)
            }
            _ => from,
        }
    }
}

/// Persistent grid state, kept across frames.
#[derive(Default)]
pub struct GridState {
    pub focused: usize,
    pub hovered: Option<usize>,
    pub scroll: ScrollViewState,
    /// Layout and screen area from the last render, for hit testing.
    pub layout: GridLayout,
    pub area: Rect,
}

impl GridState {
    /// Fresh state for a new set of tiles; layout is unknown until the next render.
    pub fn reset(&mut self, focused: usize) {
        self.focused = focused;
        self.hovered = None;
        self.scroll = ScrollViewState::default();
        self.layout = GridLayout::default();
    }

    /// Tile under a screen position, if the position is inside the grid.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = self.scroll.offset();
        self.layout.tile_at(
            column - self.area.x + offset.x,
            row - self.area.y + offset.y,
        )
    }

    pub fn move_focus(&mut self, direction: Direction) {
        self.focused = self.layout.step(self.focused, direction);
        self.scroll_to_focused();
    }

    /// Adjusts the scroll offset so the focused tile is fully visible.
    pub fn scroll_to_focused(&mut self) {
        let Some(rect) = self.layout.tiles.get(self.focused) else {
            return;
        };
        let viewport = self.area.height;
        let mut offset = self.scroll.offset();
        if rect.y < offset.y {
            offset.y = rect.y;
        } else if rect.bottom() > offset.y.saturating_add(viewport) {
            offset.y = rect.bottom().saturating_sub(viewport);
        }
        self.scroll.set_offset(offset);
    }
}

/// Content for one tile; the grid supplies focus, hover and phase.
pub struct TileSpec<'a> {
    pub fragment: crate::tui::components::preview::PreviewFragment,
    pub heading: &'a str,
    pub body: &'a str,
    pub badge: Option<usize>,
}

/// Transient render wrapper for the grid.
pub struct TileGrid<'a> {
    tiles: Vec<TileSpec<'a>>,
    state: &'a mut GridState,
    phase: f64,
}

impl<'a> TileGrid<'a> {
    pub fn new(tiles: Vec<TileSpec<'a>>, state: &'a mut GridState, phase: f64) -> Self {
        Self {
            tiles,
            state,
            phase,
        }
    }
}

impl Component for TileGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve one column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let bodies: Vec<&str> = self.tiles.iter().map(|t| t.body).collect();
        let layout = GridLayout::compute(content_width, &bodies);

        let mut scroll_view = ScrollView::new(Size::new(content_width, layout.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, (item, rect)) in self.tiles.iter().zip(layout.tiles.iter()).enumerate() {
            scroll_view.render_widget(
                Tile {
                    fragment: item.fragment,
                    heading: item.heading,
                    body: item.body,
                    phase: self.phase,
                    focused: index == self.state.focused,
                    hovered: self.state.hovered == Some(index),
                    badge: item.badge,
                },
                *rect,
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
        self.state.layout = layout;
        self.state.area = area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::preview::PreviewFragment;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const BODIES: [&str; 5] = ["a", "b", "c", "d", "e"];

    #[test]
    fn test_columns_for_width_breakpoints() {
        assert_eq!(columns_for_width(40), 1);
        assert_eq!(columns_for_width(59), 1);
        assert_eq!(columns_for_width(60), 2);
        assert_eq!(columns_for_width(99), 2);
        assert_eq!(columns_for_width(100), 3);
    }

    #[test]
    fn test_layout_three_columns() {
        let layout = GridLayout::compute(104, &BODIES);
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.tiles.len(), 5);
        // (104 - 2 gaps * 2) / 3 = 33
        assert_eq!(layout.tiles[0], Rect::new(0, 0, 33, layout.tiles[0].height));
        assert_eq!(layout.tiles[2].x, 70);
        assert_eq!(layout.tiles[3].x, 0);
        assert_eq!(layout.tiles[3].y, layout.tiles[0].height);
        assert_eq!(layout.content_height, layout.tiles[0].height * 2);
    }

    #[test]
    fn test_row_takes_tallest_tile() {
        let long = "a fairly long body that certainly wraps over several lines here";
        let layout = GridLayout::compute(70, &["short", long]);
        assert_eq!(layout.tiles[0].height, layout.tiles[1].height);
        assert_eq!(layout.tiles[0].height, tile_height(long, layout.tiles[1].width));
    }

    #[test]
    fn test_tile_at_skips_gaps() {
        let layout = GridLayout::compute(104, &BODIES);
        assert_eq!(layout.tile_at(0, 0), Some(0));
        assert_eq!(layout.tile_at(33, 0), None); // gap
        assert_eq!(layout.tile_at(35, 1), Some(1));
        assert_eq!(layout.tile_at(1, layout.tiles[3].y), Some(3));
        assert_eq!(layout.tile_at(80, layout.tiles[3].y), None); // empty slot
    }

    #[test]
    fn test_step_in_three_columns() {
        let layout = GridLayout::compute(104, &BODIES);
        assert_eq!(layout.step(0, Direction::Right), 1);
        assert_eq!(layout.step(2, Direction::Right), 2);
        assert_eq!(layout.step(3, Direction::Left), 3);
        assert_eq!(layout.step(4, Direction::Up), 1);
        assert_eq!(layout.step(0, Direction::Up), 0);
        assert_eq!(layout.step(1, Direction::Down), 4);
        assert_eq!(layout.step(2, Direction::Down), 4);
        assert_eq!(layout.step(4, Direction::Down), 4);
        assert_eq!(layout.step(4, Direction::Right), 4);
    }

    #[test]
    fn test_step_single_column() {
        let layout = GridLayout::compute(40, &BODIES);
        assert_eq!(layout.step(0, Direction::Down), 1);
        assert_eq!(layout.step(0, Direction::Right), 0);
        assert_eq!(layout.step(4, Direction::Down), 4);
    }

    #[test]
    fn test_step_on_empty_layout() {
        assert_eq!(GridLayout::default().step(3, Direction::Down), 3);
    }

    #[test]
    fn test_hit_test_accounts_for_area_and_scroll() {
        let mut state = GridState {
            layout: GridLayout::compute(40, &BODIES),
            area: Rect::new(0, 5, 41, 10),
            ..Default::default()
        };
        assert_eq!(state.hit_test(1, 5), Some(0));
        assert_eq!(state.hit_test(1, 4), None);

        let second_row = state.layout.tiles[1].y;
        state.scroll.set_offset(Position::new(0, second_row));
        assert_eq!(state.hit_test(1, 5), Some(1));
    }

    #[test]
    fn test_scroll_to_focused_brings_tile_into_view() {
        let mut state = GridState {
            layout: GridLayout::compute(40, &BODIES),
            area: Rect::new(0, 0, 41, 10),
            ..Default::default()
        };
        state.move_focus(Direction::Down);
        state.move_focus(Direction::Down);
        let rect = state.layout.tiles[2];
        assert_eq!(state.scroll.offset().y, rect.bottom() - 10);

        state.move_focus(Direction::Up);
        state.move_focus(Direction::Up);
        assert_eq!(state.scroll.offset().y, 0);
    }

    #[test]
    fn test_render_records_layout_and_draws_headings() {
        let backend = TestBackend::new(101, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = GridState::default();

        terminal
            .draw(|f| {
                let tiles = ["Alpha", "Beta", "Gamma"]
                    .into_iter()
                    .map(|heading| TileSpec {
                        fragment: PreviewFragment::Placeholder,
                        heading,
                        body: "body text",
                        badge: None,
                    })
                    .collect();
                TileGrid::new(tiles, &mut state, 0.0).render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.layout.columns, 3);
        assert_eq!(state.layout.tiles.len(), 3);
        assert_eq!(state.area, Rect::new(0, 0, 101, 40));

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Alpha"));
        assert!(text.contains("Gamma"));
    }
}
