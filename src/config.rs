//! Configuration file handling
//!
//! The configuration lives at `$VIDCTL_CONFIG` or
//! `<config_dir>/vidctl/config.toml`. A missing file means defaults; every
//! section and field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::props::{DEFAULT_AUTOHIDE_DELAY, DEFAULT_TIME_UPDATE_DEBOUNCE};
use crate::player::PlayerProps;
use crate::tui::Theme;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "VIDCTL_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
}

/// Defaults for player props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start playing as soon as the player is mounted
    pub autoplay: bool,
    /// Start muted
    pub muted: bool,
    /// Idle time before the controls hide while playing
    pub autohide_controls_delay_ms: u64,
    /// Rate limit window for time-progress notifications
    pub time_update_debounce_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            muted: false,
            autohide_controls_delay_ms: DEFAULT_AUTOHIDE_DELAY.as_millis() as u64,
            time_update_debounce_ms: DEFAULT_TIME_UPDATE_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl PlayerConfig {
    pub fn autohide_delay(&self) -> Duration {
        Duration::from_millis(self.autohide_controls_delay_ms)
    }

    pub fn time_update_debounce(&self) -> Duration {
        Duration::from_millis(self.time_update_debounce_ms)
    }

    /// Apply these defaults to `props`.
    pub fn apply(&self, props: PlayerProps) -> PlayerProps {
        props
            .with_autoplay(self.autoplay)
            .with_muted(self.muted)
            .with_autohide_delay(self.autohide_delay())
            .with_time_update_debounce(self.time_update_debounce())
    }
}

/// Settings of the simulated media element used by the terminal player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Length of the simulated stream
    pub duration_secs: f64,
    /// Time until the stream's data is "loaded"
    pub load_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120.0,
            load_delay_ms: 500,
        }
    }
}

impl SimulationConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// One of `standard`, `classic`, `ocean`
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "standard".to_string(),
        }
    }
}

impl UiConfig {
    /// The configured theme, or the default one for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "Unknown theme, using default");
            Theme::default()
        })
    }
}

impl Config {
    /// Location of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("vidctl").join("config.toml"))
    }

    /// Load the configuration file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.player.autohide_controls_delay_ms, 3000);
        assert_eq!(config.player.time_update_debounce_ms, 150);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[player]\nautoplay = true\n\n[ui]\ntheme = \"ocean\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.player.autoplay);
        assert!(!config.player.muted);
        assert_eq!(config.player.autohide_controls_delay_ms, 3000);
        assert_eq!(config.ui.theme, "ocean");
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.player.muted = true;
        config.simulation.duration_secs = 42.5;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[player]\nautoplay = \"sometimes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn player_section_applies_to_props() {
        use crate::player::SourceDescriptor;

        let player = PlayerConfig {
            autoplay: true,
            muted: true,
            autohide_controls_delay_ms: 500,
            time_update_debounce_ms: 50,
        };
        let props = player.apply(PlayerProps::new(vec![SourceDescriptor::new(
            "a.mp4",
            "video/mp4",
        )]));
        assert!(props.autoplay);
        assert!(props.muted);
        assert_eq!(props.autohide_controls_delay, Duration::from_millis(500));
        assert_eq!(props.time_update_debounce, Duration::from_millis(50));
    }

    #[test]
    fn unknown_theme_falls_back() {
        let ui = UiConfig {
            theme: "neon".to_string(),
        };
        assert_eq!(ui.theme().accent, Theme::default().accent);
    }
}
