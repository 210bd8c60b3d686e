//! Error type shared by the board, the game loop and the engine configuration

use thiserror::Error;

/// Conditions reported by the checked entry points of the crate.
///
/// The search itself never produces these: every coordinate it generates is
/// bounds-checked by construction and every move it proposes is on an empty
/// cell. They guard against misuse by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: i32, col: i32 },
    #[error("cell ({row}, {col}) is already occupied")]
    IllegalMove { row: u8, col: u8 },
    #[error("the game is already over")]
    GameOver,
    #[error("it is not a human player's turn")]
    NotYourTurn,
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
