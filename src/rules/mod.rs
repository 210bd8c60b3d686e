//! Game rules for freestyle Gomoku
//!
//! Five or more contiguous stones in any of the four line orientations win.
//! There are no captures and no forbidden moves.

pub mod win;

pub use win::{check_win, count_run, find_winner, has_five_at_pos, WinResult};
