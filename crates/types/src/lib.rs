//! Shared types module - vocabulary used by the engine and its collaborators
//!
//! Everything here is plain data with no external dependencies, so the same
//! types can flow from the simulation core to the terminal front end without
//! either side knowing about the other.
//!
//! # Well Dimensions
//!
//! The default well is 10 columns by 25 rows. The top [`DEFAULT_INVALID_ROWS`]
//! rows form the *invalid band*: pieces spawn inside it, but a locked block
//! left there when the next piece is due ends the game.
//!
//! # Gravity Timing
//!
//! All timing is expressed in simulation ticks (the runner drives 60 ticks
//! per second):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BASE_INTERVAL` | 45 | Ticks per row at the start of a game |
//! | `DEFAULT_FAST_DROP_INTERVAL` | 8 | Ticks per row while soft drop is held |
//! | `DEFAULT_ACCELERATION_PERIOD` | 300 | Ticks per one-tick interval reduction |
//! | `DEFAULT_MINIMUM_INTERVAL` | 5 | Fastest natural gravity |
//!
//! # Examples
//!
//! ```
//! use tytris_types::{Command, PieceKind, Spin};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Spin::Cw.delta(), 1);
//! assert_eq!(Spin::Ccw.delta(), -1);
//!
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//! ```

/// Default well width in cells
pub const DEFAULT_WELL_WIDTH: u8 = 10;

/// Default well height in cells, including the invalid band
pub const DEFAULT_WELL_HEIGHT: u8 = 25;

/// Default number of rows at the top of the well that must be empty at spawn
pub const DEFAULT_INVALID_ROWS: u8 = 3;

/// Gravity interval at the start of a game (ticks per row)
pub const DEFAULT_BASE_INTERVAL: u32 = 45;

/// Gravity interval used while the player holds soft drop
pub const DEFAULT_FAST_DROP_INTERVAL: u32 = 8;

/// Elapsed ticks per one-tick reduction of the gravity interval
pub const DEFAULT_ACCELERATION_PERIOD: u32 = 300;

/// Floor for the natural gravity interval
pub const DEFAULT_MINIMUM_INTERVAL: u32 = 5;

/// Points awarded per destroyed line
pub const DEFAULT_POINTS_PER_LINE: u32 = 10;

/// Number of upcoming pieces the queue keeps visible
pub const PREVIEW_LEN: usize = 6;

/// Simulation ticks per second used by the interactive runner
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// The seven piece kinds
///
/// The declaration order is also the catalog order used for table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tytris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }
}

/// A cell of the well
///
/// - `None`: empty
/// - `Some(kind)`: a locked block, tagged with the kind that left it there
pub type Cell = Option<PieceKind>;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    /// 90° clockwise
    Cw,
    /// 90° counter-clockwise
    Ccw,
}

impl Spin {
    /// Signed step applied to a rotation state (+1 clockwise, -1 counter-clockwise)
    pub const fn delta(self) -> i8 {
        match self {
            Spin::Cw => 1,
            Spin::Ccw => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Spin::Cw => Spin::Ccw,
            Spin::Ccw => Spin::Cw,
        }
    }
}

/// Lifecycle phase of a game
///
/// ```text
/// Start --new game--> NewGame --> Playing <--pause toggle--> Paused
///                                    |
///                                    v
///                                 GameOver --new game--> NewGame
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Nothing has been played yet
    Start,
    /// Transient: the engine is resetting for a fresh game
    NewGame,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::NewGame => "new_game",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Commands accepted by the engine
///
/// These are the only inputs the core understands. Device decoding (keys,
/// gamepads) lives outside and produces these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Rotate the active piece clockwise (with kicks)
    RotateCw,
    /// Rotate the active piece counter-clockwise (with kicks)
    RotateCcw,
    /// Start accelerated gravity
    SoftDropStart,
    /// Stop accelerated gravity
    SoftDropStop,
    /// Drop the active piece to its ghost position and lock it
    HardDrop,
    /// Swap the active piece with the held slot
    Hold,
    /// Pause while playing, resume while paused
    PauseToggle,
    /// Start a fresh game
    NewGame,
}

impl Command {
    /// Parse a command name (case-insensitive, camelCase or snake_case)
    ///
    /// ```
    /// use tytris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotate_ccw"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdropstart" => Some(Command::SoftDropStart),
            "softdropstop" => Some(Command::SoftDropStop),
            "harddrop" => Some(Command::HardDrop),
            "hold" => Some(Command::Hold),
            "pausetoggle" | "pause" => Some(Command::PauseToggle),
            "newgame" => Some(Command::NewGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDropStart => "softDropStart",
            Command::SoftDropStop => "softDropStop",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
            Command::PauseToggle => "pauseToggle",
            Command::NewGame => "newGame",
        }
    }

    /// Whether the command acts on the active piece (only meaningful while playing)
    pub fn targets_piece(&self) -> bool {
        !matches!(self, Command::PauseToggle | Command::NewGame)
    }
}
