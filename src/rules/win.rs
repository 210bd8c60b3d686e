//! Win detection
//!
//! Called on every real move and on every speculative placement made by the
//! search, so everything here reads only its arguments.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::config::WIN_LENGTH;

/// Outcome of a win check: the winning run, if any, ordered along its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinResult {
    line: Option<[Pos; WIN_LENGTH]>,
}

impl WinResult {
    /// No qualifying run
    pub const NONE: WinResult = WinResult { line: None };

    #[inline]
    pub fn is_win(&self) -> bool {
        self.line.is_some()
    }

    /// The `WIN_LENGTH` cells to highlight, ordered along the line.
    #[inline]
    pub fn line(&self) -> Option<&[Pos; WIN_LENGTH]> {
        self.line.as_ref()
    }
}

/// Count contiguous `color` stones from `pos` (exclusive) along `(dr, dc)`,
/// stopping at the first other cell, the board edge, or after `limit` steps.
#[inline]
pub fn count_run(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone, limit: i32) -> i32 {
    let mut count = 0;
    for step in 1..=limit {
        match pos.offset(dr, dc, step) {
            Some(p) if board.get(p) == color => count += 1,
            _ => break,
        }
    }
    count
}

/// Fast five-in-a-row check through a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    let limit = WIN_LENGTH as i32 - 1;
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_run(board, pos, dr, dc, color, limit)
            + count_run(board, pos, -dr, -dc, color, limit);
        count >= WIN_LENGTH as i32
    })
}

/// Check whether the stone at `pos` completes a qualifying run for `color`.
///
/// `pos` must already hold `color`. Returns on the first qualifying line;
/// the reported cells are a `WIN_LENGTH` window of that run containing `pos`.
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> WinResult {
    debug_assert!(
        color == Stone::Empty || board.get(pos) == color,
        "check_win called on {pos:?} which does not hold {color:?}"
    );
    if color == Stone::Empty {
        return WinResult::NONE;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_run(board, pos, -dr, -dc, color, i32::MAX);
        let forward = count_run(board, pos, dr, dc, color, i32::MAX);
        let total = (back + 1 + forward) as usize;
        if total < WIN_LENGTH {
            continue;
        }

        // Run cells are indexed from the backward end; `pos` sits at `back`.
        let origin = back as usize;
        let start = origin.saturating_sub(WIN_LENGTH - 1).min(total - WIN_LENGTH);
        let mut line = [pos; WIN_LENGTH];
        for (i, cell) in line.iter_mut().enumerate() {
            let step = (start + i) as i32 - back;
            // Every step lies inside the run counted above
            if let Some(p) = pos.offset(dr, dc, step) {
                *cell = p;
            }
        }
        return WinResult { line: Some(line) };
    }

    WinResult::NONE
}

/// Scan the whole board for a completed run.
///
/// Returns the owner and the run of the first qualifying stone in row-major
/// order.
pub fn find_winner(board: &Board) -> Option<(Stone, WinResult)> {
    board.occupied().iter_ones().find_map(|pos| {
        let color = board.get(pos);
        let result = check_win(board, pos, color);
        result.is_win().then_some((color, result))
    })
}
