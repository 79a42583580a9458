//! Config module - immutable tunables for one game
//!
//! Well dimensions and gravity constants are passed into
//! [`crate::GameState::new`] instead of living in process-wide statics, so
//! independent games (tests, benches) can run side by side with different
//! settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    DEFAULT_ACCELERATION_PERIOD, DEFAULT_BASE_INTERVAL, DEFAULT_FAST_DROP_INTERVAL,
    DEFAULT_INVALID_ROWS, DEFAULT_MINIMUM_INTERVAL, DEFAULT_POINTS_PER_LINE, DEFAULT_WELL_HEIGHT,
    DEFAULT_WELL_WIDTH,
};

/// Narrowest supported well
pub const MIN_WELL_WIDTH: u8 = 4;
/// Widest supported well
pub const MAX_WELL_WIDTH: u8 = 64;
/// Tallest supported well
pub const MAX_WELL_HEIGHT: u8 = 100;
/// Playable rows required below the invalid band
pub const MIN_PLAYABLE_ROWS: u8 = 4;
/// Smallest invalid band that still contains every spawn shape
pub const MIN_INVALID_ROWS: u8 = 2;

/// Reasons a [`GameConfig`] is rejected
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("well width {0} is outside 4..=64")]
    Width(u8),
    #[error("well height {height} must be between {min} and 100")]
    Height { height: u8, min: u8 },
    #[error("invalid band of {0} rows is smaller than 2")]
    InvalidRows(u8),
    #[error("minimum gravity interval must be at least one tick")]
    MinimumInterval,
    #[error("base interval {base} is below the minimum interval {minimum}")]
    BaseInterval { base: u32, minimum: u32 },
    #[error("fast drop interval must be at least one tick")]
    FastDropInterval,
    #[error("acceleration period must be at least one tick")]
    AccelerationPeriod,
}

/// Tunables fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Well width in cells
    pub width: u8,
    /// Well height in cells, including the invalid band
    pub height: u8,
    /// Topmost rows that must be empty whenever a piece spawns
    pub invalid_rows: u8,
    /// Gravity interval at tick 0 (ticks per row)
    pub base_interval: u32,
    /// Floor for the natural gravity interval
    pub minimum_interval: u32,
    /// Elapsed ticks per one-tick interval reduction
    pub acceleration_period: u32,
    /// Interval substituted while soft drop is held
    pub fast_drop_interval: u32,
    /// Points per destroyed line
    pub points_per_line: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WELL_WIDTH,
            height: DEFAULT_WELL_HEIGHT,
            invalid_rows: DEFAULT_INVALID_ROWS,
            base_interval: DEFAULT_BASE_INTERVAL,
            minimum_interval: DEFAULT_MINIMUM_INTERVAL,
            acceleration_period: DEFAULT_ACCELERATION_PERIOD,
            fast_drop_interval: DEFAULT_FAST_DROP_INTERVAL,
            points_per_line: DEFAULT_POINTS_PER_LINE,
        }
    }
}

impl GameConfig {
    /// Check every field, reporting the first offending one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WELL_WIDTH..=MAX_WELL_WIDTH).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if self.invalid_rows < MIN_INVALID_ROWS {
            return Err(ConfigError::InvalidRows(self.invalid_rows));
        }
        let min_height = self.invalid_rows.saturating_add(MIN_PLAYABLE_ROWS);
        if self.height < min_height || self.height > MAX_WELL_HEIGHT {
            return Err(ConfigError::Height {
                height: self.height,
                min: min_height,
            });
        }
        if self.minimum_interval == 0 {
            return Err(ConfigError::MinimumInterval);
        }
        if self.base_interval < self.minimum_interval {
            return Err(ConfigError::BaseInterval {
                base: self.base_interval,
                minimum: self.minimum_interval,
            });
        }
        if self.fast_drop_interval == 0 {
            return Err(ConfigError::FastDropInterval);
        }
        if self.acceleration_period == 0 {
            return Err(ConfigError::AccelerationPeriod);
        }
        Ok(())
    }
}
