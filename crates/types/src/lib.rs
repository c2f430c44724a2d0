//! Shared data types and constants for the falling-block game.
//!
//! Everything here is plain data with no external dependencies, so it can be used
//! by the simulation core, the terminal front-end and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, **row 0 is the floor**, rows grow upward)
//!
//! Pieces spawn with the top of their shape on the top row, horizontally centered.
//!
//! # Drop Timing
//!
//! Gravity is driven by frame deltas in seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_INTERVAL_SECS` | 0.3 | One row every 300ms |
//! | `FAST_DROP_INTERVAL_SECS` | 0.02 | One row every 20ms while fast drop is held |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.index(), 7);
//! assert_eq!(kind.as_str(), "T");
//! assert_eq!(PieceKind::from_index(7), Some(PieceKind::T));
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Normal gravity interval in seconds.
pub const DEFAULT_DROP_INTERVAL_SECS: f32 = 0.3;

/// Gravity interval while fast drop is active.
pub const FAST_DROP_INTERVAL_SECS: f32 = 0.02;

/// Largest side of any shape matrix (the I piece is 4 long).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Points for clearing 0..=4 lines with a single lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per line when more than four lines clear at once.
pub const LONG_CLEAR_POINTS_PER_LINE: u32 = 200;


/// The seven tetromino kinds.
///
/// The declaration order fixes the 1-based index stored in locked board cells:
/// I=1, L=2, J=3, O=4, S=5, Z=6, T=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// 1-based index written into board cells when a piece locks.
    pub fn index(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::T => 7,
        }
    }

    /// Inverse of [`PieceKind::index`]. Returns `None` for 0 and out-of-range values.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Upper-case single letter, used by the side panel and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(PieceKind)`: locked cell of that kind
///
/// Exported snapshots flatten this to `u8` via [`PieceKind::index`] (0 = empty).
pub type Cell = Option<PieceKind>;

/// Discrete commands the simulation core accepts between ticks.
///
/// Moves and rotation are edge-triggered: one command, one attempt.
/// `SetFastDrop` is level-triggered and swaps the gravity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece 90° with wall kicks
    Rotate,
    /// Select the fast (true) or normal (false) drop interval
    SetFastDrop(bool),
}

/// Signals emitted by a simulation step, in causal order.
///
/// Front-ends use these for sound cues and screen transitions; the core has no
/// audio or navigation dependency of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece was written into the board.
    PiecePlaced { kind: PieceKind },
    /// One or more rows were removed by the lock that preceded this event.
    LinesCleared { count: u32, points: u32 },
    /// A freshly spawned piece overlapped the stack. Terminal until restart.
    GameOver { score: u32 },
}
