//! Snapshot module - owned, read-only view of a game for presenters

use arrayvec::ArrayVec;

use crate::pieces::{Piece, Shape};
use crate::scoring::GameInfo;
use crate::types::{Cell, GamePhase, PieceKind, PREVIEW_LEN};

/// Active piece together with its resolved shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub piece: Piece,
    pub shape: Shape,
}

impl From<Piece> for ActiveSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            piece,
            shape: piece.shape(),
        }
    }
}

/// Consistent post-tick copy of everything a presenter draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Rows at the top that end the game when occupied at spawn
    pub invalid_rows: u8,
    /// Row-major well cells
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Lowest valid position of the active piece
    pub ghost: Option<Piece>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub preview: ArrayVec<PieceKind, PREVIEW_LEN>,
    pub phase: GamePhase,
    pub info: GameInfo,
    /// Natural gravity interval (ticks per row)
    pub interval: u32,
    pub speed_level: u32,
    pub soft_drop: bool,
}

impl GameSnapshot {
    /// Cell at `(x, y)`; out-of-range coordinates read as empty
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.board[y * self.width as usize + x]
    }
}
