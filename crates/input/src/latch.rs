//! Soft drop latch for terminals without key-release events.
//!
//! Most terminals only report presses and auto-repeats. The latch treats the
//! soft drop key as held while presses keep arriving, and releases it once
//! no press has been seen for a short grace period.

use crate::types::Command;

/// Ticks without a press before the latch lets go (~150ms at 60 Hz)
pub const DEFAULT_SOFT_DROP_GRACE_TICKS: u32 = 9;

/// Tracks whether soft drop is held.
#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    remaining_ticks: u32,
    grace_ticks: u32,
    /// The terminal reports releases, so no grace timer is needed
    release_events: bool,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ticks(DEFAULT_SOFT_DROP_GRACE_TICKS)
    }

    pub fn with_grace_ticks(grace_ticks: u32) -> Self {
        Self {
            held: false,
            remaining_ticks: 0,
            grace_ticks,
            release_events: false,
        }
    }

    /// Rely on reported key releases instead of the grace timer
    pub fn with_release_events(mut self, release_events: bool) -> Self {
        self.release_events = release_events;
        self
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Feed a decoded key command; returns the command to forward, if any.
    ///
    /// Soft drop presses are deduplicated, everything else passes through.
    pub fn filter(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::SoftDropStart => self.press(),
            Command::SoftDropStop => self.release(),
            other => Some(other),
        }
    }

    fn press(&mut self) -> Option<Command> {
        self.remaining_ticks = self.grace_ticks;
        if self.held {
            return None;
        }
        self.held = true;
        Some(Command::SoftDropStart)
    }

    fn release(&mut self) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.remaining_ticks = 0;
        Some(Command::SoftDropStop)
    }

    /// Advance one tick; yields `SoftDropStop` when the grace period runs out
    pub fn tick(&mut self) -> Option<Command> {
        if !self.held || self.release_events {
            return None;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            return self.release();
        }
        None
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
