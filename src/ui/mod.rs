//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. The game loop
//! itself (`GameState`) has no egui dependency and is usable headless.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::{AppSettings, GomokuApp};
pub use game_state::{BotState, GameEvent, GameMode, GameOutcome, GameState};
