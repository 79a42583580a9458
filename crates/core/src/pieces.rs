//! Pieces module - piece catalog, shape rotation and kick resolution
//!
//! Every kind is described once in a static table indexed by [`PieceKind`]:
//! its canonical occupancy pattern (a compact bounding box), how many distinct
//! rotation states it has, where it spawns and how it is coloured.
//!
//! Rotated shapes are derived geometrically from the canonical pattern rather
//! than stored, and rotation near walls or the stack is resolved with a small
//! horizontal-only kick list:
//!
//! | Kind | Rotation states | Kicks |
//! |------|-----------------|-------|
//! | O | 1 | none |
//! | I | 2 | -1, +1, -2, +2 |
//! | S, Z | 2 | -1, +1 |
//! | J, L, T | 4 | -1, +1 |
//!
//! The same kick list is used for every transition of a kind; there is no
//! distinction between, say, clockwise-into-state-1 and
//! counter-clockwise-into-state-1.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Spin, DEFAULT_WELL_WIDTH};

/// Largest bounding box a shape may occupy (4x4)
pub const MAX_SHAPE_AREA: usize = 16;

/// Absolute cell coordinates of a placed piece
pub type PieceCells = ArrayVec<(i8, i8), MAX_SHAPE_AREA>;

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Immutable per-kind record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceData {
    /// Row-major occupancy of the canonical (state 0) bounding box
    pub pattern: &'static [bool],
    /// Bounding box width (the pattern's stride)
    pub width: u8,
    /// Highest rotation state; states wrap modulo `max_rotations + 1`
    pub max_rotations: u8,
    /// Column of the bounding box's left edge at spawn
    pub spawn_column: i8,
    pub color: Rgb,
    pub highlight: Rgb,
}

const X: bool = true;
const O: bool = false;

static CATALOG: [PieceData; 7] = [
    // I
    PieceData {
        pattern: &[X, X, X, X],
        width: 4,
        max_rotations: 1,
        spawn_column: 3,
        color: Rgb::new(0, 163, 217),
        highlight: Rgb::new(102, 217, 255),
    },
    // J
    PieceData {
        pattern: &[X, O, O, X, X, X],
        width: 3,
        max_rotations: 3,
        spawn_column: 3,
        color: Rgb::new(26, 0, 102),
        highlight: Rgb::new(64, 0, 255),
    },
    // L
    PieceData {
        pattern: &[O, O, X, X, X, X],
        width: 3,
        max_rotations: 3,
        spawn_column: 3,
        color: Rgb::new(255, 128, 0),
        highlight: Rgb::new(255, 178, 102),
    },
    // O
    PieceData {
        pattern: &[X, X, X, X],
        width: 2,
        max_rotations: 0,
        spawn_column: 4,
        color: Rgb::new(217, 217, 0),
        highlight: Rgb::new(255, 255, 102),
    },
    // S
    PieceData {
        pattern: &[O, X, X, X, X, O],
        width: 3,
        max_rotations: 1,
        spawn_column: 3,
        color: Rgb::new(0, 102, 0),
        highlight: Rgb::new(0, 217, 0),
    },
    // Z
    PieceData {
        pattern: &[X, X, O, O, X, X],
        width: 3,
        max_rotations: 1,
        spawn_column: 3,
        color: Rgb::new(178, 0, 45),
        highlight: Rgb::new(255, 51, 102),
    },
    // T
    PieceData {
        pattern: &[O, X, O, X, X, X],
        width: 3,
        max_rotations: 3,
        spawn_column: 3,
        color: Rgb::new(140, 0, 140),
        highlight: Rgb::new(255, 51, 255),
    },
];

/// Look up the static record for a kind
#[inline]
pub fn piece_data(kind: PieceKind) -> &'static PieceData {
    &CATALOG[kind.index()]
}

/// Number of distinct rotation states of a kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    piece_data(kind).max_rotations + 1
}

/// Occupancy pattern of a piece in one rotation state
///
/// Unused trailing grid entries are always `false`, so two shapes compare
/// equal exactly when their dimensions and occupancy match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    grid: [bool; MAX_SHAPE_AREA],
}

impl Shape {
    fn from_pattern(pattern: &[bool], width: u8) -> Self {
        debug_assert!(pattern.len() <= MAX_SHAPE_AREA);
        debug_assert_eq!(pattern.len() % width as usize, 0);
        let mut grid = [false; MAX_SHAPE_AREA];
        grid[..pattern.len()].copy_from_slice(pattern);
        Self {
            width,
            height: (pattern.len() / width as usize) as u8,
            grid,
        }
    }

    /// Canonical (rotation state 0) shape of a kind
    pub fn canonical(kind: PieceKind) -> Self {
        let data = piece_data(kind);
        Self::from_pattern(data.pattern, data.width)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupied cells as `(x, y)` offsets from the bounding box's top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let w = self.width as usize;
        self.grid[..w * self.height as usize]
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i % w) as i8, (i / w) as i8))
    }

    /// Rows of the bounding box, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let w = self.width as usize;
        self.grid[..w * self.height as usize].chunks(w)
    }

    /// The same pattern turned 90° clockwise within its bounding box
    ///
    /// Width and height swap: cell `(x, y)` moves to `(height - 1 - y, x)`.
    pub fn rotated_cw(&self) -> Self {
        let new_w = self.height;
        let new_h = self.width;
        let mut grid = [false; MAX_SHAPE_AREA];
        for (x, y) in self.cells() {
            let nx = (self.height as i8 - 1 - y) as usize;
            let ny = x as usize;
            grid[ny * new_w as usize + nx] = true;
        }
        Self {
            width: new_w,
            height: new_h,
            grid,
        }
    }
}

/// Get the shape of a kind in a given rotation state
///
/// State 0 is the canonical pattern; each further state is one more
/// clockwise quarter turn. The state is reduced modulo the kind's rotation
/// count first, so the O piece always yields its single shape.
pub fn shape_of(kind: PieceKind, rotation: u8) -> Shape {
    let mut shape = Shape::canonical(kind);
    for _ in 0..rotation % rotation_count(kind) {
        shape = shape.rotated_cw();
    }
    shape
}

/// Horizontal offsets tried, in order, when an in-place rotation is blocked
pub fn kick_offsets(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::O => &[],
        PieceKind::I => &[-1, 1, -2, 2],
        _ => &[-1, 1],
    }
}

/// A piece instance: kind, rotation state and the top-left anchor of its
/// bounding box in well coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: piece_data(kind).spawn_column,
            y: 0,
        }
    }

    /// Spawn anchor for a well `width` columns wide
    ///
    /// The default anchors are kept for the standard 10-column well and
    /// shifted by half the width difference otherwise, so the piece stays
    /// roughly centred and always inside the walls.
    pub fn spawn_in(kind: PieceKind, width: u8) -> Self {
        let base = piece_data(kind).spawn_column as i16;
        let offset = (width as i16 - DEFAULT_WELL_WIDTH as i16) / 2;
        let max_x = (width as i16 - Shape::canonical(kind).width() as i16).max(0);
        Self {
            x: (base + offset).clamp(0, max_x) as i8,
            ..Self::spawn(kind)
        }
    }

    pub fn shape(&self) -> Shape {
        shape_of(self.kind, self.rotation)
    }

    /// Absolute well coordinates of every occupied cell
    pub fn cells(&self) -> PieceCells {
        self.shape()
            .cells()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same position, rotation state advanced cyclically by `spin`
    pub fn rotated(self, spin: Spin) -> Self {
        let count = rotation_count(self.kind) as i8;
        let rotation = (self.rotation as i8 + spin.delta()).rem_euclid(count) as u8;
        Self { rotation, ..self }
    }
}

/// Try to rotate a piece with horizontal kicks
///
/// The rotated piece is first tested in place, then shifted by each entry of
/// [`kick_offsets`] in order. Returns the first candidate `fits` accepts along
/// with the horizontal offset that was applied, or `None` when every candidate
/// is rejected (the caller's piece is untouched either way).
pub fn try_rotate(
    piece: &Piece,
    spin: Spin,
    fits: impl Fn(&Piece) -> bool,
) -> Option<(Piece, i8)> {
    let rotated = piece.rotated(spin);
    if fits(&rotated) {
        return Some((rotated, 0));
    }

    kick_offsets(piece.kind)
        .iter()
        .map(|&dx| (rotated.shifted(dx, 0), dx))
        .find(|(candidate, _)| fits(candidate))
}
