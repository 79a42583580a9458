//! Settings persistence using TOML
//!
//! Stored in `settings.toml` under the platform config directory
//! (`~/.config/tytris/` on Linux). A missing file means defaults; a file
//! that does not parse or validate is reported, never silently replaced.
//!
//! ```toml
//! tick_rate_hz = 60
//! seed = 1234
//!
//! [game]
//! width = 10
//! height = 25
//! base_interval = 45
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::GameConfig;
use crate::types::DEFAULT_TICK_RATE_HZ;

/// Highest tick rate the runner accepts
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Fixed piece sequence seed; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Engine tunables
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            seed: None,
            game: GameConfig::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tytris", "tytris")
}

impl Settings {
    /// Platform config directory, if the platform has one
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Platform data directory (logs, high scores)
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_hz == 0 || self.tick_rate_hz > MAX_TICK_RATE_HZ {
            bail!(
                "tick_rate_hz {} is outside 1..={MAX_TICK_RATE_HZ}",
                self.tick_rate_hz
            );
        }
        self.game.validate()?;
        Ok(())
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
