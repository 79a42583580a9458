//! Events module - state-change notifications
//!
//! The engine never calls into presentation code. It records what happened
//! in emission order, and whoever drives it drains the buffer with
//! [`crate::GameState::flush_events`] after issuing commands or ticks.

use crate::pieces::Piece;
use crate::scoring::GameInfo;
use crate::types::{GamePhase, PieceKind};

/// A single observable change of game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    /// A new active piece appeared at its spawn anchor
    PieceSpawned(Piece),
    /// The active piece was translated, rotated or pulled down by gravity
    PieceMoved(Piece),
    /// The active piece was committed to the well at this position
    PieceLocked(Piece),
    /// Rows removed by one lock, as indexed before compaction, top to bottom
    LinesCleared { rows: Vec<usize> },
    ScoreChanged(u32),
    /// Natural gravity interval changed at a spawn
    SpeedChanged { interval: u32 },
    HoldChanged(Option<PieceKind>),
    /// Final statistics of a finished game
    GameOver(GameInfo),
}

impl GameEvent {
    /// Number of destroyed lines, for `LinesCleared`
    pub fn lines_cleared(&self) -> Option<usize> {
        match self {
            GameEvent::LinesCleared { rows } => Some(rows.len()),
            _ => None,
        }
    }
}

/// Receiver of drained [`GameEvent`]s
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<F: FnMut(GameEvent)> EventSink for F {
    fn emit(&mut self, event: GameEvent) {
        self(event)
    }
}
