//! Board structure: one bitboard per player

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board snapshot
///
/// Cloning is cheap (two small bitboards), so callers that need an isolated
/// copy simply clone; the search instead mutates one working copy through
/// [`Board::with_stone`], which always restores the cell before returning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at `(row, col)`, or `None` when off the board.
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::is_valid(row, col).then(|| self.get(Pos::new(row as u8, col as u8)))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any checks.
    ///
    /// Used on validated moves only; see `try_place` for caller input.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "cell {pos:?} already occupied");
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Checked placement for caller-supplied coordinates.
    pub fn try_place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Pos, GameError> {
        let pos = Pos::try_new(row, col)?;
        if !self.is_empty(pos) {
            return Err(GameError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Place `stone` at `pos`, run `f`, then restore the cell to empty.
    ///
    /// The cell is restored however `f` returns, so sibling branches never
    /// observe each other's speculative stones.
    #[inline]
    pub fn with_stone<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        self.place_stone(pos, stone);
        let result = f(self);
        self.remove_stone(pos);
        result
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Build a board from text rows (`X`, `O`, anything else is empty).
    ///
    /// Missing rows and columns are left empty; extra ones are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate().take(BOARD_SIZE) {
            for (c, ch) in line.chars().enumerate().take(BOARD_SIZE) {
                let stone = match ch {
                    'X' | 'x' => Stone::Black,
                    'O' | 'o' => Stone::White,
                    _ => continue,
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                f.write_str(self.get(Pos::new(row as u8, col as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
