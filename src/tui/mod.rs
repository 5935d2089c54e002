//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating**: draws every `frame_interval` (80ms by default) so the
//!   previews move smoothly.
//! - **Animations off**: sleeps up to 500ms, only redraws on events or
//!   terminal resize. Previews stay on their first frame.
//!
//! All pending events are drained before the next draw.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::View;
use crate::core::state::App;
use crate::tui::components::{Direction, GridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub grid: GridState,
    /// Screen rect of the back control, present only in detail view.
    pub back_button: Option<Rect>,
    /// Overview focus to restore when leaving a detail view.
    pub overview_focus: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syncs presentation state with an app that may already be in detail view.
    pub fn for_app(app: &App) -> Self {
        let mut tui = Self::new();
        if let Some(category) = app.navigation.current().category() {
            tui.overview_focus = app
                .navigation
                .catalog()
                .position(category.title)
                .unwrap_or(0);
        }
        tui
    }

    fn enter_detail(&mut self, from_tile: usize) {
        self.overview_focus = from_tile;
        self.grid.reset(0);
    }

    fn return_to_overview(&mut self) {
        self.back_button = None;
        self.grid.reset(self.overview_focus);
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
            info!("Mouse capture enabled");
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}

/// Routes one terminal event to navigation, focus or scrolling.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::Back => go_back(app, tui),
        TuiEvent::Submit => {
            let focused = tui.grid.focused;
            activate(app, tui, focused)
        }
        TuiEvent::SelectNth(index) => match app.navigation.current() {
            View::Overview => activate(app, tui, index),
            View::Detail(_) => Effect::None,
        },
        TuiEvent::CursorUp => move_focus(tui, Direction::Up),
        TuiEvent::CursorDown => move_focus(tui, Direction::Down),
        TuiEvent::CursorLeft => move_focus(tui, Direction::Left),
        TuiEvent::CursorRight => move_focus(tui, Direction::Right),
        TuiEvent::ScrollUp => {
            tui.grid.scroll.scroll_up();
            Effect::None
        }
        TuiEvent::ScrollDown => {
            tui.grid.scroll.scroll_down();
            Effect::None
        }
        TuiEvent::ScrollPageUp => {
            tui.grid.scroll.scroll_page_up();
            Effect::None
        }
        TuiEvent::ScrollPageDown => {
            tui.grid.scroll.scroll_page_down();
            Effect::None
        }
        TuiEvent::MouseMove(column, row) => {
            tui.grid.hovered = tui.grid.hit_test(column, row);
            Effect::None
        }
        TuiEvent::MouseClick(column, row) => {
            if tui
                .back_button
                .is_some_and(|rect| rect.contains(Position::new(column, row)))
            {
                return go_back(app, tui);
            }
            match tui.grid.hit_test(column, row) {
                Some(index) => activate(app, tui, index),
                None => Effect::None,
            }
        }
    }
}

fn move_focus(tui: &mut TuiState, direction: Direction) -> Effect {
    tui.grid.move_focus(direction);
    Effect::None
}

/// Opens the category at `index` in overview; in detail view chart tiles only take focus.
fn activate(app: &mut App, tui: &mut TuiState, index: usize) -> Effect {
    match app.navigation.current() {
        View::Overview => {
            let Some(category) = app.navigation.catalog().all().get(index) else {
                return Effect::None;
            };
            let effect = update(app, Action::SelectCategory(category.title.to_string()));
            if effect == Effect::None {
                tui.enter_detail(index);
            }
            effect
        }
        View::Detail(_) => {
            tui.grid.focused = index;
            Effect::None
        }
    }
}

fn go_back(app: &mut App, tui: &mut TuiState) -> Effect {
    let was_detail = !app.navigation.state().is_overview();
    let effect = update(app, Action::GoBack);
    if was_detail {
        tui.return_to_overview();
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(Catalog::builtin(), &config);
    let mut tui = TuiState::for_app(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new(app.mouse);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.animations {
            needs_redraw = true;
        }

        if needs_redraw {
            let phase = if app.animations {
                start_time.elapsed().as_secs_f64()
            } else {
                0.0
            };
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, phase))?;
            needs_redraw = false;
        }

        let timeout = if app.animations {
            app.frame_interval
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
