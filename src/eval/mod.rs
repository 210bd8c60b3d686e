//! Evaluation module for Gomoku placements
//!
//! Scores how strong a single stone is for its owner, line by line:
//! - Run length through the stone in each of the four orientations
//! - Open versus blocked run ends
//! - Offensive ("build") versus defensive ("block") weight tiers
//! - Positional bonus toward the center

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, line_shape, LineShape};
pub use patterns::Weights;
