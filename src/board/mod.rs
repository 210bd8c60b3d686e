//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


pub use bitboard::Bitboard;
pub use board::Board;

pub use crate::config::{BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// The four line orientations, each scanned in both directions.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    /// First player ("X")
    Black,
    /// Second player ("O"), the bot in player-vs-bot games
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Symbol shown to players
    pub fn symbol(self) -> &'static str {
        match self {
            Stone::Black => "X",
            Stone::White => "O",
            Stone::Empty => ".",
        }
    }
}

/// Position on the board, also used as a move
///
/// Always on the board: the fields are private and every constructor checks
/// bounds, so the detector, evaluator and bitboards never see an off-board
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Position from coordinates known to be on the board.
    ///
    /// Panics on an off-board coordinate; use [`Pos::try_new`] for input that
    /// comes from outside the engine.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE,
            "({row}, {col}) is outside the board"
        );
        Self { row, col }
    }

    /// Checked constructor for caller-supplied coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Self, GameError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::InvalidCoordinate { row, col })
        }
    }

    /// Board center
    #[inline]
    pub fn center() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        Self::new(mid, mid)
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "index {idx} is outside the board");
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `steps` cells along `(dr, dc)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        if Self::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to the board center.
    #[inline]
    pub fn center_distance(self) -> i32 {
        let mid = (BOARD_SIZE / 2) as i32;
        (i32::from(self.row) - mid).abs() + (i32::from(self.col) - mid).abs()
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
