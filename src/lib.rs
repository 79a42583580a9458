//! Tytris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof (`tytris::{core, input,
//! term, types}`) and adds the pieces that only the interactive runner
//! needs: settings on disk and the high-score table.

pub mod highscores;
pub mod settings;

pub use tytris_core as core;
pub use tytris_input as input;
pub use tytris_term as term;
pub use tytris_types as types;

pub use highscores::{HighScoreEntry, HighScores};
pub use settings::Settings;
