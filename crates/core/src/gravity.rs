//! Gravity module - drop cadence derived from elapsed ticks
//!
//! The natural interval shrinks by one tick every `acceleration_period`
//! elapsed ticks, from `base_interval` down to `minimum_interval`:
//!
//! ```text
//! interval = clamp(base - elapsed / period, minimum, base)
//! ```
//!
//! It is recomputed only when a piece spawns. Holding soft drop substitutes
//! `fast_drop_interval` whenever the natural interval is slower, without
//! touching the natural interval itself.

use crate::config::GameConfig;

/// Natural gravity interval after `elapsed_ticks` ticks of play
pub fn interval_for(elapsed_ticks: u64, cfg: &GameConfig) -> u32 {
    let steps = elapsed_ticks / u64::from(cfg.acceleration_period.max(1));
    let reduced = u64::from(cfg.base_interval).saturating_sub(steps);
    reduced.max(u64::from(cfg.minimum_interval)) as u32
}

/// Current drop cadence of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityState {
    /// Natural interval, ticks per row
    pub interval: u32,
    /// Whether the player is holding soft drop
    pub speed_up: bool,
}

impl GravityState {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            interval: cfg.base_interval,
            speed_up: false,
        }
    }

    /// Recompute the natural interval; returns true if it changed
    pub fn recompute(&mut self, elapsed_ticks: u64, cfg: &GameConfig) -> bool {
        let interval = interval_for(elapsed_ticks, cfg);
        let changed = interval != self.interval;
        self.interval = interval;
        changed
    }

    /// Interval actually used for descent timing
    pub fn effective_interval(&self, cfg: &GameConfig) -> u32 {
        if self.speed_up && self.interval > cfg.fast_drop_interval {
            cfg.fast_drop_interval
        } else {
            self.interval
        }
    }

    /// Display level: how many ticks faster than the starting cadence
    pub fn speed_level(&self, cfg: &GameConfig) -> u32 {
        cfg.base_interval.saturating_sub(self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_steps_down_each_period() {
        let cfg = GameConfig::default();
        assert_eq!(interval_for(0, &cfg), 45);
        assert_eq!(interval_for(299, &cfg), 45);
        assert_eq!(interval_for(300, &cfg), 44);
        assert_eq!(interval_for(3000, &cfg), 35);
    }

    #[test]
    fn test_interval_floor() {
        let cfg = GameConfig::default();
        // 40 reductions reach the floor.
        assert_eq!(interval_for(40 * 300, &cfg), 5);
        assert_eq!(interval_for(u64::MAX, &cfg), 5);
    }

    #[test]
    fn test_soft_drop_only_speeds_up() {
        let cfg = GameConfig::default();
        let mut gravity = GravityState::new(&cfg);
        gravity.speed_up = true;
        assert_eq!(gravity.effective_interval(&cfg), 8);
        assert_eq!(gravity.interval, 45);

        // Natural interval already faster than the fast drop: keep it.
        gravity.interval = 6;
        assert_eq!(gravity.effective_interval(&cfg), 6);
    }

    #[test]
    fn test_recompute_reports_change() {
        let cfg = GameConfig::default();
        let mut gravity = GravityState::new(&cfg);
        assert!(!gravity.recompute(10, &cfg));
        assert!(gravity.recompute(600, &cfg));
        assert_eq!(gravity.interval, 43);
        assert_eq!(gravity.speed_level(&cfg), 2);
    }
}
