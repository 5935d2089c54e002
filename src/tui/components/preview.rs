//! # Preview Assets
//!
//! Small looping chart animations shown on tiles, looked up by chart name.
//!
//! ```text
//! resolve("BarChart")  →  PreviewFragment::Animated(Preview::BarChart)
//! resolve("Treemap")   →  PreviewFragment::Placeholder
//! ```
//!
//! Only five charts have artwork; every other key gets the placeholder box.
//! A preview is a pure function of elapsed time (`marks(phase)`), so the same
//! phase always draws the same frame and nothing here touches core state.
//!
//! Marks use a 100×60 canvas with the origin bottom-left.

use std::f64::consts::TAU;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line};
use ratatui::widgets::{Block, Widget};

pub const CANVAS_WIDTH: f64 = 100.0;
pub const CANVAS_HEIGHT: f64 = 60.0;

/// Cells a preview occupies: 20×5 braille cells ≈ 40×20 dots.
pub const PREVIEW_WIDTH: u16 = 20;
pub const PREVIEW_HEIGHT: u16 = 5;

pub const SKY_400: Color = Color::Rgb(56, 189, 248);
pub const SKY_500: Color = Color::Rgb(14, 165, 233);
pub const SKY_600: Color = Color::Rgb(2, 132, 199);
pub const PLACEHOLDER: Color = Color::Rgb(241, 245, 249);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    BarChart,
    LineChart,
    PieChart,
    Histogram,
    ScatterPlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFragment {
    Animated(Preview),
    Placeholder,
}

/// One drawable primitive of a preview frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Bar { x: f64, width: f64, height: f64, color: Color },
    Polyline { points: Vec<(f64, f64)>, color: Color },
    Disc { x: f64, y: f64, radius: f64, color: Color },
    /// Filled circular sector; angles in degrees, counter-clockwise from east.
    Wedge { x: f64, y: f64, radius: f64, start: f64, sweep: f64, color: Color },
    Dot { x: f64, y: f64, radius: f64, color: Color },
}

pub fn resolve(key: &str) -> PreviewFragment {
    match Preview::from_key(key) {
        Some(preview) => PreviewFragment::Animated(preview),
        None => {
            log::trace!("No preview for '{}', using placeholder", key);
            PreviewFragment::Placeholder
        }
    }
}

/// Eases `from → to → from` once per `period` seconds.
fn oscillate(phase: f64, period: f64, from: f64, to: f64) -> f64 {
    let t = (phase / period).rem_euclid(1.0);
    let eased = (1.0 - (t * TAU).cos()) / 2.0;
    from + (to - from) * eased
}

const LINE_FROM: [(f64, f64); 6] = [(0.0, 10.0), (20.0, 30.0), (40.0, 40.0), (60.0, 35.0), (80.0, 50.0), (100.0, 45.0)];
const LINE_TO: [(f64, f64); 6] = [(0.0, 15.0), (20.0, 25.0), (40.0, 35.0), (60.0, 40.0), (80.0, 45.0), (100.0, 50.0)];

impl Preview {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "BarChart" => Some(Preview::BarChart),
            "LineChart" => Some(Preview::LineChart),
            "PieChart" => Some(Preview::PieChart),
            "Histogram" => Some(Preview::Histogram),
            "ScatterPlot" => Some(Preview::ScatterPlot),
            _ => None,
        }
    }

    /// The frame at `phase` seconds into the loop.
    pub fn marks(self, phase: f64) -> Vec<Mark> {
        match self {
            Preview::BarChart => [
                (10.0, 30.0, 45.0, 1.2, SKY_400),
                (35.0, 40.0, 25.0, 1.4, SKY_500),
                (60.0, 50.0, 35.0, 1.6, SKY_600),
            ]
            .into_iter()
            .map(|(x, from, to, period, color)| Mark::Bar {
                x,
                width: 15.0,
                height: oscillate(phase, period, from, to),
                color,
            })
            .collect(),
            Preview::LineChart => {
                let points = LINE_FROM
                    .iter()
                    .zip(LINE_TO.iter())
                    .map(|(&(x, from), &(_, to))| (x, oscillate(phase, 2.0, from, to)))
                    .collect();
                vec![Mark::Polyline {
                    points,
                    color: SKY_400,
                }]
            }
            Preview::PieChart => {
                let turn = (phase / 4.0).rem_euclid(1.0);
                vec![
                    Mark::Disc {
                        x: 50.0,
                        y: 30.0,
                        radius: 28.0,
                        color: SKY_500,
                    },
                    Mark::Wedge {
                        x: 50.0,
                        y: 30.0,
                        radius: 28.0,
                        // Clockwise, like an SVG rotate
                        start: -360.0 * turn,
                        sweep: 90.0,
                        color: SKY_400,
                    },
                ]
            }
            Preview::Histogram => (0..4)
                .map(|i| {
                    let i = f64::from(i);
                    Mark::Bar {
                        x: 10.0 + i * 20.0,
                        width: 10.0,
                        height: oscillate(phase, 1.8, 10.0 + i * 10.0, 20.0 + i * 5.0),
                        color: SKY_500,
                    }
                })
                .collect(),
            Preview::ScatterPlot => [15.0, 35.0, 55.0, 75.0]
                .into_iter()
                .enumerate()
                .map(|(i, x)| Mark::Dot {
                    x,
                    y: 30.0 - 3.0 * i as f64,
                    radius: oscillate(phase, 1.5, 4.0, 6.0),
                    color: SKY_400,
                })
                .collect(),
        }
    }
}

fn fill_sector(ctx: &mut Context, x: f64, y: f64, radius: f64, start: f64, sweep: f64, color: Color) {
    let steps = (sweep / 3.0).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let angle = (start + sweep * step as f64 / steps as f64).to_radians();
        ctx.draw(&Line {
            x1: x,
            y1: y,
            x2: x + radius * angle.cos(),
            y2: y + radius * angle.sin(),
            color,
        });
    }
}

fn paint(ctx: &mut Context, marks: &[Mark]) {
    for mark in marks {
        match *mark {
            Mark::Bar {
                x,
                width,
                height,
                color,
            } => {
                let mut column = x;
                while column <= x + width {
                    ctx.draw(&Line {
                        x1: column,
                        y1: 0.0,
                        x2: column,
                        y2: height,
                        color,
                    });
                    column += 1.5;
                }
            }
            Mark::Polyline { ref points, color } => {
                for pair in points.windows(2) {
                    ctx.draw(&Line {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color,
                    });
                }
            }
            Mark::Disc {
                x,
                y,
                radius,
                color,
            } => fill_sector(ctx, x, y, radius, 0.0, 360.0, color),
            Mark::Wedge {
                x,
                y,
                radius,
                start,
                sweep,
                color,
            } => fill_sector(ctx, x, y, radius, start, sweep, color),
            Mark::Dot {
                x,
                y,
                radius,
                color,
            } => ctx.draw(&Circle {
                x,
                y,
                radius,
                color,
            }),
        }
    }
}

/// Draws a fragment centered in its area.
pub struct PreviewWidget {
    pub fragment: PreviewFragment,
    pub phase: f64,
}

impl PreviewWidget {
    pub fn new(fragment: PreviewFragment, phase: f64) -> Self {
        Self { fragment, phase }
    }
}

impl Widget for PreviewWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Constraint::Length(PREVIEW_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);

        match self.fragment {
            PreviewFragment::Animated(preview) => {
                let marks = preview.marks(self.phase);
                Canvas::default()
                    .marker(Marker::Braille)
                    .x_bounds([0.0, CANVAS_WIDTH])
                    .y_bounds([0.0, CANVAS_HEIGHT])
                    .paint(|ctx| paint(ctx, &marks))
                    .render(area, buf);
            }
            PreviewFragment::Placeholder => {
                Block::new()
                    .style(Style::default().bg(PLACEHOLDER))
                    .render(area, buf);
            }
        }
    }
}
