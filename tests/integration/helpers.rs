//! Shared test helpers

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use assert_cmd::Command;
use tempfile::TempDir;

use vidctl::fullscreen::{Fullscreen, FullscreenBackend, TerminalFullscreen};
use vidctl::player::{ManualClock, Player, PlayerProps, SimulatedMedia, SourceDescriptor};

pub type SimPlayer = Player<SimulatedMedia, Fullscreen>;

/// Time until simulated media data is loaded.
pub const LOAD_DELAY: Duration = Duration::from_millis(100);

/// An isolated configuration location for CLI runs.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// The vidctl binary, reading config from this environment.
    pub fn vidctl(&self) -> Command {
        let mut cmd = Command::cargo_bin("vidctl").expect("Failed to find vidctl binary");
        cmd.env("VIDCTL_CONFIG", self.config_path())
            .env("VIDCTL_LOG", "vidctl=warn")
            .env("NO_COLOR", "1");
        cmd
    }
}

pub fn mp4_props() -> PlayerProps {
    PlayerProps::new(vec![SourceDescriptor::new(
        "https://cdn.example.com/big_buck_bunny.mp4",
        "video/mp4",
    )])
}

/// Build and mount a player over a simulated stream of `duration` seconds.
pub fn sim_player(props: PlayerProps, duration: f64) -> (SimPlayer, ManualClock) {
    sim_player_with_backends(props, duration, vec![Box::new(TerminalFullscreen::new())])
}

pub fn sim_player_with_backends(
    props: PlayerProps,
    duration: f64,
    backends: Vec<Box<dyn FullscreenBackend>>,
) -> (SimPlayer, ManualClock) {
    let clock = ManualClock::new();
    let shared = Arc::new(clock.clone());
    let media = SimulatedMedia::new(shared.clone(), duration, LOAD_DELAY);
    let mut player = Player::with_clock(props, media, Fullscreen::with_backends(backends), shared)
        .expect("Failed to build player");
    player.mount();
    (player, clock)
}

/// Advance the clock by `total_ms`, ticking every `step_ms`.
pub fn run_for(player: &mut SimPlayer, clock: &ManualClock, total_ms: u64, step_ms: u64) {
    let mut elapsed = 0;
    while elapsed < total_ms {
        let step = step_ms.min(total_ms - elapsed);
        clock.advance_ms(step);
        player.tick();
        elapsed += step;
    }
}

/// Let the simulated media finish loading.
pub fn load(player: &mut SimPlayer, clock: &ManualClock) {
    run_for(player, clock, LOAD_DELAY.as_millis() as u64, 50);
}
