//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Snapshots from
//! the core are drawn into a plain framebuffer, and the framebuffer is
//! flushed to the terminal as a diff against the previous frame.
//!
//! - [`game_view`] is pure and unit-testable
//! - [`renderer`] is the only part that touches the terminal
//! - Cells are 2 columns wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tytris_core as core;
pub use tytris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
