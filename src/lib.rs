//! Gomoku move-search engine
//!
//! A freestyle Gomoku bot for a 15x15 board:
//! - Five or more in a row wins, in any of the four orientations
//! - Black moves first, the bot usually plays White
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Line-local placement evaluation and the weight table
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: Bot decision policy integrating all components
//! - [`ui`]: Game loop and the egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! // Smaller depth for a faster doc test
//! let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // Bot responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("Bot plays at ({}, {})", pos.row(), pos.col());
//! }
//! ```
//!
//! # Decision Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Alpha-beta search over nearby candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::GameError;
pub use eval::Weights;
