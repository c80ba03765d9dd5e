//! Play command handler

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};

use vidctl::cli::PlayArgs;
use vidctl::player::play_sources;
use vidctl::tui::Theme;
use vidctl::Config;

/// Run the terminal player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The player needs an interactive terminal; use `vidctl inspect` for scripted output");
    }

    let config = Config::load()?;
    let props = args.player.props(&config)?;
    let simulation = args.player.simulation(&config);
    let theme = match &args.theme {
        Some(name) => Theme::by_name(name).with_context(|| format!("Unknown theme '{}'", name))?,
        None => config.ui.theme(),
    };

    tracing::info!(
        sources = props.sources.len(),
        duration = simulation.duration_secs,
        "Starting terminal player"
    );
    play_sources(props, &simulation, &theme)
}
