//! Placement evaluation
//!
//! Estimates the strategic value of `color` occupying one cell, assuming the
//! stone is already on the board. Scoring is line-local: each of the four
//! orientations is scored from the run through the cell, then the four line
//! scores and a center bonus are summed.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::config::EVAL_SCAN_DEPTH;

use super::patterns::Weights;

/// Run through a cell along one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Contiguous stones including the origin
    pub run: i32,
    /// Run ends whose next cell is on the board and empty
    pub open_ends: i32,
    /// Run ends stopped by the opponent or the board edge
    pub blocked: i32,
}

/// Scan one half-line from `pos`, up to `EVAL_SCAN_DEPTH` cells.
///
/// Returns (stones, open, blocked) for that side.
fn scan_side(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (i32, i32, i32) {
    let mut stones = 0;
    for step in 1..=EVAL_SCAN_DEPTH {
        match pos.offset(dr, dc, step).map(|p| board.get(p)) {
            Some(s) if s == color => stones += 1,
            Some(Stone::Empty) => return (stones, 1, 0),
            // Opponent stone or board edge
            _ => return (stones, 0, 1),
        }
    }
    (stones, 0, 0)
}

/// Measure the run through `pos` along `(dr, dc)`.
pub fn line_shape(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> LineShape {
    let (fwd, fwd_open, fwd_blocked) = scan_side(board, pos, dr, dc, color);
    let (back, back_open, back_blocked) = scan_side(board, pos, -dr, -dc, color);
    LineShape {
        run: 1 + fwd + back,
        open_ends: fwd_open + back_open,
        blocked: fwd_blocked + back_blocked,
    }
}

/// Evaluate `color` occupying `pos`.
///
/// With `defensive` set the block tiers are used instead: the question is
/// then how much it is worth denying this cell to `color`. The result is
/// never negative, and a completed run outweighs every other term combined.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, color: Stone, defensive: bool, weights: &Weights) -> i32 {
    let lines: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let shape = line_shape(board, pos, dr, dc, color);
            weights.line_score(shape.run, shape.open_ends, shape.blocked, defensive)
        })
        .sum();

    lines + weights.positional_bonus(pos)
}
