//! Command line interface definition.
//!
//! Lives in the library so the man page generator can render it.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{Config, SimulationConfig};
use crate::player::{ConfigError, MediaAttributes, PlayerProps, SourceDescriptor};

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VIDCTL_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VIDCTL_BUILD_DATE"),
    ")"
);

/// Video player control surface in the terminal.
#[derive(Debug, Parser)]
#[command(name = "vidctl", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play sources in the terminal player
    Play(PlayArgs),
    /// Print the player's initial state and view as JSON
    Inspect(InspectArgs),
    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}

/// Options shared by every command that builds a player.
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Media sources as URL[#MIME]; the type is inferred from the extension when omitted
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<SourceDescriptor>,

    /// Start playing immediately
    #[arg(long, overrides_with = "no_autoplay")]
    pub autoplay: bool,

    /// Start paused even when the config enables autoplay
    #[arg(long, overrides_with = "autoplay")]
    pub no_autoplay: bool,

    /// Start muted
    #[arg(long, overrides_with = "no_muted")]
    pub muted: bool,

    /// Start with sound even when the config mutes playback
    #[arg(long, overrides_with = "muted")]
    pub no_muted: bool,

    /// Idle time before the controls hide while playing
    #[arg(long, value_name = "MS")]
    pub autohide_delay: Option<u64>,

    /// Rate limit window for time-progress updates
    #[arg(long, value_name = "MS")]
    pub time_update_debounce: Option<u64>,

    /// Extra media attribute (loop, poster, preload, playsinline, class, width, height)
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,

    /// Identifier of the player's root container
    #[arg(long, value_name = "ID")]
    pub root_id: Option<String>,

    /// Length of the simulated stream in seconds
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,
}

impl PlayerArgs {
    /// Build props from the config file defaults overridden by flags.
    pub fn props(&self, config: &Config) -> Result<PlayerProps, ConfigError> {
        let mut attributes = MediaAttributes::default();
        for pair in &self.attributes {
            attributes.set_pair(pair)?;
        }

        let mut props = config
            .player
            .apply(PlayerProps::new(self.sources.clone()))
            .with_attributes(attributes);

        if self.autoplay {
            props = props.with_autoplay(true);
        } else if self.no_autoplay {
            props = props.with_autoplay(false);
        }
        if self.muted {
            props = props.with_muted(true);
        } else if self.no_muted {
            props = props.with_muted(false);
        }
        if let Some(ms) = self.autohide_delay {
            props = props.with_autohide_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.time_update_debounce {
            props = props.with_time_update_debounce(Duration::from_millis(ms));
        }
        if let Some(root_id) = &self.root_id {
            props = props.with_root_id(root_id.clone());
        }

        props.validate()?;
        Ok(props)
    }

    /// Simulation settings from the config file overridden by flags.
    pub fn simulation(&self, config: &Config) -> SimulationConfig {
        let mut simulation = config.simulation.clone();
        if let Some(duration) = self.duration {
            simulation.duration_secs = duration.max(0.0);
        }
        simulation
    }
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub player: PlayerArgs,

    /// Color theme (standard, classic, ocean)
    #[arg(long)]
    pub theme: Option<String>,

    /// Write logs to this file instead of the default log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub player: PlayerArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_play_with_flags() {
        let cli = Cli::try_parse_from([
            "vidctl",
            "play",
            "intro.webm",
            "https://cdn.example.com/stream#video/mp4",
            "--autoplay",
            "--autohide-delay",
            "500",
            "--attr",
            "loop",
        ])
        .unwrap();

        let Commands::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.player.sources.len(), 2);
        assert_eq!(args.player.sources[0].mime_type, "video/webm");
        assert_eq!(args.player.sources[1].url, "https://cdn.example.com/stream");
        assert!(args.player.autoplay);
        assert_eq!(args.player.autohide_delay, Some(500));
        assert_eq!(args.player.attributes, vec!["loop".to_string()]);
    }

    #[test]
    fn sources_are_required() {
        assert!(Cli::try_parse_from(["vidctl", "inspect"]).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["vidctl", "inspect", "movie.xyz"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "vidctl",
            "inspect",
            "clip.mp4",
            "--muted",
            "--time-update-debounce",
            "40",
            "--duration",
            "30",
        ])
        .unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };

        let mut config = Config::default();
        config.player.autoplay = true;
        config.player.autohide_controls_delay_ms = 900;

        let props = args.player.props(&config).unwrap();
        assert!(props.autoplay);
        assert!(props.muted);
        assert_eq!(props.autohide_controls_delay, Duration::from_millis(900));
        assert_eq!(props.time_update_debounce, Duration::from_millis(40));
        assert_eq!(args.player.simulation(&config).duration_secs, 30.0);
    }

    #[test]
    fn negated_flags_turn_config_settings_off() {
        let cli = Cli::try_parse_from(["vidctl", "inspect", "clip.mp4", "--no-autoplay", "--no-muted"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };

        let mut config = Config::default();
        config.player.autoplay = true;
        config.player.muted = true;

        let props = args.player.props(&config).unwrap();
        assert!(!props.autoplay);
        assert!(!props.muted);
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let cli = Cli::try_parse_from(["vidctl", "inspect", "clip.mp4", "--no-muted", "--muted"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };

        assert!(args.player.muted);
        assert!(!args.player.no_muted);
        assert!(args.player.props(&Config::default()).unwrap().muted);
    }

    #[test]
    fn bad_attribute_is_reported() {
        let cli = Cli::try_parse_from(["vidctl", "inspect", "clip.mp4", "--attr", "autoplay=1"])
            .unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert!(args.player.props(&Config::default()).is_err());
    }
}
