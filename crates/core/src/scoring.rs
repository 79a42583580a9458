//! Scoring module - per-game statistics
//!
//! Scoring is flat: every destroyed line is worth `points_per_line`, however
//! many rows go at once. Multi-line clears are counted separately so the
//! presentation layer can show them.

use serde::{Deserialize, Serialize};

/// Points awarded for clearing `lines` rows in one lock
pub fn line_points(lines: usize, points_per_line: u32) -> u32 {
    (lines as u32).saturating_mul(points_per_line)
}

/// Accumulated statistics of one game
///
/// Reset on every new game; frozen once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameInfo {
    pub score: u32,
    /// Ticks spent in the playing phase
    pub elapsed_ticks: u64,
    /// Pieces locked into the well
    pub pieces_dropped: u32,
    /// Pieces locked through hard drop
    pub quick_drops: u32,
    /// Successful hold swaps
    pub swaps: u32,
    pub lines_destroyed: u32,
    pub doubles: u32,
    pub triples: u32,
    pub quads: u32,
    /// Set by the runner when the final score entered the high-score table
    pub high_score: bool,
}

impl GameInfo {
    /// Account for one lock that cleared `lines` rows; returns the points gained
    pub fn record_lock(&mut self, lines: usize, points_per_line: u32) -> u32 {
        self.pieces_dropped += 1;
        self.record_clear(lines, points_per_line)
    }

    pub fn record_quick_drop(&mut self) {
        self.quick_drops += 1;
    }

    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Account for `lines` destroyed rows without a lock
    pub fn record_clear(&mut self, lines: usize, points_per_line: u32) -> u32 {
        if lines == 0 {
            return 0;
        }

        self.lines_destroyed += lines as u32;
        match lines {
            2 => self.doubles += 1,
            3 => self.triples += 1,
            4 => self.quads += 1,
            _ => {}
        }

        let points = line_points(lines, points_per_line);
        self.score = self.score.saturating_add(points);
        points
    }
}
