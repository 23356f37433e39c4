//! Viewer configuration.
//!
//! User-level config: `~/.slides/config.yaml`
//! Project-level config: `.slides/config.yaml` (overrides the user file field by field)
//!
//! Resolution: explicit `--config` file → project config → user config → defaults.
//! Missing files are silently skipped; unreadable ones are logged and skipped.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default slide-in animation length.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Slide-in animation length in milliseconds. 0 disables animation.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Deck file to show instead of the built-in deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,
    /// Capture mouse clicks on buttons and dots.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// A config file as written on disk; every field optional so a project file
/// can override just one setting.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    transition_ms: Option<u64>,
    deck: Option<PathBuf>,
    mouse: Option<bool>,
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_mouse() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            deck: None,
            mouse: true,
        }
    }
}

/// Path to `~/.slides/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".slides"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".slides"))
    }
}

impl ViewerConfig {
    /// Load user config, then apply the project-level file on top.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(user) = dirs_path().map(|d| d.join("config.yaml")) {
            config.merge(read_partial(&user));
        }
        config.merge(read_partial(Path::new(".slides/config.yaml")));
        config
    }

    /// Load a single explicit config file. Unlike [`ViewerConfig::load`],
    /// a missing or malformed file is an error.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let partial: PartialConfig = serde_yaml::from_str(&yaml)
            .with_context(|| format!("invalid config {}", path.display()))?;
        let mut config = Self::default();
        config.merge(partial);
        Ok(config)
    }

    fn merge(&mut self, partial: PartialConfig) {
        if let Some(ms) = partial.transition_ms {
            self.transition_ms = ms;
        }
        if partial.deck.is_some() {
            self.deck = partial.deck;
        }
        if let Some(mouse) = partial.mouse {
            self.mouse = mouse;
        }
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Read a config file, treating absence as "no overrides".
fn read_partial(path: &Path) -> PartialConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {}: {e}", path.display());
            PartialConfig::default()
        }),
        Err(_) => PartialConfig::default(),
    }
}
