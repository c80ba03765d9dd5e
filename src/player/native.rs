//! Terminal front end for the player.
//!
//! Runs the widget full screen in the terminal against a simulated media
//! element: polls crossterm for input with a short timeout, drives `tick()`
//! and redraws every iteration.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use super::input::{handle_event, PointerTracker};
use super::props::PlayerProps;
use super::render::{render_player, ControlLayout};
use super::simulated::SimulatedMedia;
use super::state::InputResult;
use super::timing::{Clock, SystemClock};
use super::widget::Player;
use crate::config::SimulationConfig;
use crate::fullscreen::{Fullscreen, FullscreenController};
use crate::tui::theme::Theme;

/// Upper bound on the time between two redraws.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Play `props` in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_sources(props: PlayerProps, simulation: &SimulationConfig, theme: &Theme) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let media = SimulatedMedia::new(clock.clone(), simulation.duration_secs, simulation.load_delay())
        .with_loop(props.attributes.loop_playback);
    let mut player = Player::with_clock(props, media, Fullscreen::new(), clock)
        .context("Invalid player configuration")?;

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut player, theme);
    restore_terminal(&mut terminal)?;

    player.unmount();
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop<F: FullscreenController>(
    terminal: &mut CrosstermTerminal,
    player: &mut Player<SimulatedMedia, F>,
    theme: &Theme,
) -> Result<()> {
    player.mount();
    let mut pointer = PointerTracker::new();

    loop {
        player.tick();

        let view = player.view();
        let mut layout = ControlLayout::compute(Rect::default(), &view);
        terminal
            .draw(|frame| layout = render_player(frame, &view, theme))
            .context("Failed to draw player")?;

        if !event::poll(FRAME_INTERVAL).context("Failed to poll terminal events")? {
            continue;
        }
        let event = event::read().context("Failed to read terminal event")?;
        if handle_event(event, player, &layout, &mut pointer) == InputResult::Quit {
            tracing::debug!("Quit requested");
            return Ok(());
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn init_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let setup = (|| {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )
        .context("Failed to enter alternate screen")?;
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
    })();
    undo_on_error(setup, || {
        execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .ok();
        disable_raw_mode().ok();
    })
}

/// Run `undo` when `result` is an error, then pass the result through.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(not(tarpaulin_include))]
fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();
    Ok(())
}
