//! Frame composition: banner on top, status line at the bottom, and either
//! the category grid or a category's detail view in between.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::catalog::{Catalog, Category};
use crate::core::navigation::View;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::preview;
use crate::tui::components::{BANNER_HEIGHT, Banner, DetailHeader, StatusBar, TileGrid, TileSpec};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, phase: f64) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(BANNER_HEIGHT), Min(0), Length(1)]);
    let [banner_area, main_area, status_area] = layout.areas(frame.area());

    Banner.render(frame, banner_area);

    let view = app.navigation.current();
    match view {
        View::Overview => {
            tui.back_button = None;
            draw_overview(frame, main_area, app.navigation.catalog(), tui, phase);
        }
        View::Detail(category) => draw_detail(frame, main_area, category, tui, phase),
    }

    let in_detail = matches!(view, View::Detail(_));
    StatusBar::new(app.status_message.clone(), in_detail).render(frame, status_area);
}

fn draw_overview(frame: &mut Frame, area: Rect, catalog: &Catalog, tui: &mut TuiState, phase: f64) {
    let tiles = catalog
        .all()
        .iter()
        .enumerate()
        .map(|(i, category)| TileSpec {
            fragment: preview::resolve(category.preview_key),
            heading: category.title,
            body: category.description,
            badge: Some(i + 1),
        })
        .collect();
    TileGrid::new(tiles, &mut tui.grid, phase).render(frame, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, category: &Category, tui: &mut TuiState, phase: f64) {
    let header_height = DetailHeader::height(category, area.width);
    let [header_area, grid_area] =
        Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(area);

    let mut header = DetailHeader::new(category);
    header.render(frame, header_area);
    tui.back_button = Some(header.back_button);

    let tiles = category
        .chart_types
        .iter()
        .map(|chart| TileSpec {
            fragment: preview::resolve(chart.name),
            heading: chart.label,
            body: chart.explanation,
            badge: None,
        })
        .collect();
    TileGrid::new(tiles, &mut tui.grid, phase).render(frame, grid_area);
}
