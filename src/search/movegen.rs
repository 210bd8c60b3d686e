//! Candidate move generation
//!
//! Only empty cells within a Chebyshev radius of an existing stone are
//! plausible moves. The result is deduplicated and in row-major order, which
//! is the order every tie-break in the engine falls back on.

use crate::board::{Board, Pos, BOARD_SIZE};

/// Generate candidate moves near existing stones.
///
/// - Empty board: the center cell only
/// - No empty cell near any stone: every empty cell
/// - Full board: nothing
#[must_use]
pub fn candidates(board: &Board, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let radius = i32::from(radius);
    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];

    for stone in board.occupied().iter_ones() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let r = i32::from(stone.row()) + dr;
                let c = i32::from(stone.col()) + dc;
                if Pos::is_valid(r, c) {
                    near[r as usize][c as usize] = true;
                }
            }
        }
    }

    let mut moves = Vec::with_capacity(64);
    for (r, row) in near.iter().enumerate() {
        for (c, &is_near) in row.iter().enumerate() {
            let pos = Pos::new(r as u8, c as u8);
            if is_near && board.is_empty(pos) {
                moves.push(pos);
            }
        }
    }

    if moves.is_empty() {
        moves.extend(board.empty_cells());
    }
    moves
}
