//! Inspect command handler
//!
//! Builds the player headless on a manual clock, lets the simulated media
//! finish loading and prints what the control surface would show.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use vidctl::cli::InspectArgs;
use vidctl::config::SimulationConfig;
use vidctl::fullscreen::{Fullscreen, TerminalFullscreen};
use vidctl::player::{ManualClock, Player, PlayerProps, PlayerState, PlayerView, SimulatedMedia};
use vidctl::Config;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub root_classes: String,
    pub state: PlayerState,
    pub view: PlayerView,
}

/// Snapshot of a freshly mounted player once its media has loaded.
pub fn inspect(props: PlayerProps, simulation: &SimulationConfig) -> Result<InspectReport> {
    let clock = ManualClock::new();
    let shared = Arc::new(clock.clone());
    let media = SimulatedMedia::new(shared.clone(), simulation.duration_secs, simulation.load_delay())
        .with_loop(props.attributes.loop_playback);
    let fullscreen = Fullscreen::with_backends(vec![Box::new(TerminalFullscreen::new())]);

    let mut player = Player::with_clock(props, media, fullscreen, shared)?;
    player.mount();
    clock.advance(simulation.load_delay());
    player.tick();

    let view = player.view();
    Ok(InspectReport {
        root_classes: view.root_classes(),
        state: player.state().clone(),
        view,
    })
}

pub fn handle(args: InspectArgs) -> Result<()> {
    let config = Config::load()?;
    let props = args.player.props(&config)?;
    let report = inspect(props, &args.player.simulation(&config))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
