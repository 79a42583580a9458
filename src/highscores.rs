//! High score leaderboard
//!
//! Top 10 finished games, best first, persisted as JSON in the platform
//! data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameInfo;
use crate::settings::Settings;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub elapsed_ticks: u64,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> Option<PathBuf> {
        Settings::data_dir().map(|dir| dir.join("highscores.json"))
    }

    /// Check if a score would enter the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map_or(true, |e| score > e.score)
    }

    /// Insert a finished game if it qualifies
    ///
    /// Returns the rank achieved (1-indexed). Ties rank below existing entries.
    pub fn add(&mut self, info: &GameInfo, timestamp: u64) -> Option<usize> {
        if !self.qualifies(info.score) {
            return None;
        }

        let entry = HighScoreEntry {
            score: info.score,
            lines: info.lines_destroyed,
            pieces: info.pieces_dropped,
            elapsed_ticks: info.elapsed_ticks,
            timestamp,
        };
        let pos = self
            .entries
            .iter()
            .position(|e| info.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load from `path`; a missing file is an empty table
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let scores = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(scores)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("failed to serialize high scores")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
