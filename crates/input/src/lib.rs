//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! soft drop latch for terminals without key-release events. Nothing here
//! knows about the engine beyond the command vocabulary.

pub mod latch;
pub mod map;

pub use tytris_types as types;

pub use latch::SoftDropLatch;
pub use map::{handle_key_event, should_quit};
