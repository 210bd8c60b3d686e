//! Weight table for placement evaluation
//!
//! One run-length-to-weight table serves both offense and defense. The
//! defensive ("block") tiers sit above the offensive ("build") tiers of the
//! same length, so suppressing an opponent run outranks extending our own.

use crate::board::{Pos, DIRECTIONS};
use crate::config::{BOARD_SIZE, WIN_LENGTH};

/// Evaluation weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Completed run for the evaluated player
    pub win: i32,
    /// Completed run when scoring the cell as a block
    pub block_win: i32,
    /// Four in a row, multiplied by (open ends + 1)
    pub four_in_row: i32,
    /// Blocking a four, multiplied by (open ends + 1)
    pub block_four: i32,
    /// Three in a row, multiplied by (open ends + 1)
    pub three_in_row: i32,
    /// Blocking a three with no open end
    pub block_three: i32,
    /// Blocking a three with one open end
    pub block_three_semi_open: i32,
    /// Blocking a three with both ends open (most dangerous)
    pub block_three_open: i32,
    /// Two in a row, multiplied by (open ends + 1)
    pub two_in_row: i32,
    /// Center bonus per unit of closeness
    pub positional_unit: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            win: 1_000_000,
            block_win: 900_000,
            four_in_row: 10_000,
            block_four: 50_000,
            three_in_row: 1_000,
            block_three: 10_000,
            block_three_semi_open: 12_000,
            block_three_open: 15_000,
            two_in_row: 100,
            positional_unit: 10,
        }
    }
}

impl Weights {
    /// Score one line through the evaluated cell.
    ///
    /// `run` counts the evaluated stone itself. `open_ends` and `blocked`
    /// describe the two run ends (each end is open, blocked, or neither when
    /// the scan depth ran out).
    pub fn line_score(&self, run: i32, open_ends: i32, blocked: i32, defensive: bool) -> i32 {
        let closed = blocked >= 2;
        match run {
            r if r >= WIN_LENGTH as i32 => {
                if defensive {
                    self.block_win
                } else {
                    self.win
                }
            }
            4 if closed => 0,
            4 if defensive => self.block_four * (open_ends + 1),
            4 => self.four_in_row * (open_ends + 1),
            3 if defensive => match open_ends {
                2 => self.block_three_open,
                1 => self.block_three_semi_open,
                _ if closed => 0,
                _ => self.block_three,
            },
            3 if closed => 0,
            3 => self.three_in_row * (open_ends + 1),
            2 if closed => 0,
            2 => self.two_in_row * (open_ends + 1),
            _ => 0,
        }
    }

    /// Center bonus for a cell; never negative.
    #[inline]
    pub fn positional_bonus(&self, pos: Pos) -> i32 {
        (BOARD_SIZE as i32 - pos.center_distance()).max(0) * self.positional_unit
    }

    /// Largest total a placement can score without completing a run:
    /// the strongest non-winning line tier on every orientation plus the
    /// best positional bonus.
    pub fn non_winning_ceiling(&self) -> i64 {
        let best_line = [
            self.four_in_row * 3,
            self.block_four * 3,
            self.three_in_row * 3,
            self.block_three,
            self.block_three_semi_open,
            self.block_three_open,
            self.two_in_row * 3,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
        .max(0);

        i64::from(best_line) * DIRECTIONS.len() as i64
            + i64::from(BOARD_SIZE as i32 * self.positional_unit.max(0))
    }
}
