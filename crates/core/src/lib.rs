//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and all simulation state. It has no
//! dependency on terminals, files or clocks: callers feed it abstract
//! [`Command`](types::Command)s and ticks, and read back events and
//! snapshots.
//!
//! - **Deterministic**: the same seed and command sequence replay the same game
//! - **Configurable**: well size and gravity come from a [`GameConfig`]
//! - **Observable**: every change is reported as a [`GameEvent`]
//!
//! # Module Structure
//!
//! - [`board`]: the well, collision validation and line clearing
//! - [`config`]: tunables and their validation
//! - [`events`]: state-change notifications and sinks
//! - [`game_state`]: the tick-driven state machine, hold and hard drop
//! - [`gravity`]: drop interval as a function of elapsed ticks
//! - [`pieces`]: piece catalog, geometric rotation and horizontal kicks
//! - [`rng`]: bag-randomized piece queue with preview
//! - [`scoring`]: per-game statistics
//! - [`snapshot`]: owned read-only copies for presenters
//!
//! # Game Rules
//!
//! - **Bag randomizer**: every appended batch of 7 holds each kind once
//! - **Simple kicks**: blocked rotations retry with horizontal offsets only
//! - **No lock delay**: a piece locks the moment gravity cannot move it down
//! - **Hold**: one swap per spawned piece
//! - **Game over**: a locked block in the invalid band when the next piece is due
//! - **Flat scoring**: a fixed number of points per destroyed line
//!
//! # Example
//!
//! ```
//! use tytris_core::{GameConfig, GameEvent, GameState};
//! use tytris_core::types::{Command, GamePhase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! game.apply(Command::NewGame);
//! game.advance_tick(); // spawns the first piece
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::HardDrop);
//!
//! let mut events: Vec<GameEvent> = Vec::new();
//! game.flush_events(&mut events);
//! assert!(!events.is_empty());
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! Gravity is counted in ticks, not wall-clock time. A new piece first
//! descends `interval` ticks after it spawns; the interval starts at 45 and
//! loses one tick every 300 ticks of play, down to 5. Holding soft drop
//! caps it at 8.

pub mod board;
pub mod config;
pub mod events;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tytris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use events::{EventSink, GameEvent};
pub use game_state::GameState;
pub use gravity::{interval_for, GravityState};
pub use pieces::{
    kick_offsets, piece_data, rotation_count, shape_of, try_rotate, Piece, PieceData, Rgb, Shape,
};
pub use rng::PieceQueue;
pub use scoring::GameInfo;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
