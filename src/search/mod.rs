//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation with proximity filtering
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use movegen::candidates;
