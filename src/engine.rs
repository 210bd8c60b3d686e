//! Bot decision policy
//!
//! This module wires the win detector and the search into the bot's move
//! choice. The decision follows a fixed priority:
//!
//! 1. **Immediate win**: the first empty cell (row-major) that completes a run
//!    for the bot
//! 2. **Forced block**: the first empty cell that would complete a run for the
//!    opponent
//! 3. **Alpha-Beta**: minimax search over the candidate moves
//!
//! The engine holds configuration only. Every call reads its board argument
//! and nothing else, so independent snapshots can be decided concurrently.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! // Use smaller depth for faster example
//! let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.choose_move(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::rules::{find_winner, has_five_at_pos};
use crate::search::{SearchResult, Searcher};

/// Which tier of the policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Bot completes a run this move
    ImmediateWin,
    /// Bot occupies the cell the opponent would complete a run on
    ForcedBlock,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Board is full or already decided
    NoLegalMove,
}

/// Result of a move decision with search metadata.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when no legal move exists
    pub best_move: Option<Pos>,
    /// Score of the chosen move from the bot's point of view
    pub score: i32,
    /// Tier that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn forced_block(pos: Pos, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::ForcedBlock,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        let search_type = if result.best_move.is_some() {
            SearchType::AlphaBeta
        } else {
            SearchType::NoLegalMove
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }

    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoLegalMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// Gomoku bot.
///
/// Cheap to clone; the game loop hands a copy to its worker thread.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default depth, radius and weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine from a configuration that has passed [`EngineConfig::validate`].
    pub fn try_with_config(config: EngineConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `bot`, or `None` when the board has no legal move.
    ///
    /// ```
    /// use gomoku::{AIEngine, Board, Pos, Stone};
    ///
    /// let engine = AIEngine::new();
    /// assert_eq!(engine.get_move(&Board::new(), Stone::White), Some(Pos::new(7, 7)));
    /// ```
    #[must_use]
    pub fn get_move(&self, board: &Board, bot: Stone) -> Option<Pos> {
        self.choose_move(board, bot).best_move
    }

    /// Choose the bot's move with detailed statistics.
    ///
    /// The two short-circuits scan every empty cell, not just the search
    /// candidates, so a completing cell far from the action is never missed.
    #[must_use]
    pub fn choose_move(&self, board: &Board, bot: Stone) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;
        let weights = &self.config.weights;

        if board.is_full() {
            log::debug!("no legal move: board is full");
            return MoveResult::no_move(elapsed());
        }
        if let Some((winner, _)) = find_winner(board) {
            log::debug!("no legal move: {} already won", winner.symbol());
            return MoveResult::no_move(elapsed());
        }

        // Same scale as the search: a win one ply away scores `win - 1`
        if let Some(pos) = find_completing_move(board, bot) {
            log::debug!("immediate win at ({}, {})", pos.row(), pos.col());
            return MoveResult::immediate_win(pos, weights.win - 1, elapsed());
        }

        let opponent = bot.opponent();
        if let Some(pos) = find_completing_move(board, opponent) {
            log::debug!("forced block at ({}, {})", pos.row(), pos.col());
            return MoveResult::forced_block(pos, weights.block_win, elapsed());
        }

        let mut searcher = Searcher::new(self.config.clone());
        let result = searcher.search(board, bot);
        log::debug!(
            "alpha-beta depth {}: move {:?} score {} nodes {} cutoffs {} ({:.1}% first move)",
            self.config.search_depth,
            result.best_move,
            result.score,
            result.nodes,
            result.stats.beta_cutoffs,
            result.stats.first_move_rate(),
        );
        MoveResult::from_alphabeta(result, elapsed())
    }
}

/// First empty cell in row-major order where `color` would complete a run.
fn find_completing_move(board: &Board, color: Stone) -> Option<Pos> {
    let mut work = board.clone();
    let empties: Vec<Pos> = board.empty_cells().collect();
    empties
        .into_iter()
        .find(|&pos| work.with_stone(pos, color, |b| has_five_at_pos(b, pos, color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Weights;
    use std::thread;

    fn fast_engine() -> AIEngine {
        AIEngine::with_config(EngineConfig::default().with_depth(2))
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().search_depth, 4);
        assert_eq!(engine.config().candidate_radius, 2);
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = EngineConfig::default().with_depth(0);
        assert!(matches!(
            AIEngine::try_with_config(config),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(AIEngine::try_with_config(EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        board.place_stone(Pos::new(3, 3), Stone::Black);

        let result = AIEngine::new().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, Weights::default().win - 1);
    }

    #[test]
    fn test_immediate_win_score_matches_search() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(7, 2), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::Black);

        let policy = fast_engine().choose_move(&board, Stone::White);
        let searched = Searcher::new(EngineConfig::default().with_depth(2)).search(&board, Stone::White);
        assert_eq!(policy.search_type, SearchType::ImmediateWin);
        assert_eq!(policy.best_move, searched.best_move);
        assert_eq!(policy.score, searched.score);
    }

    #[test]
    fn test_engine_decided_board_has_no_move() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        board.place_stone(Pos::new(9, 9), Stone::White);

        let result = AIEngine::new().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoLegalMove);
        assert_eq!(AIEngine::new().get_move(&board, Stone::Black), None);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        board.place_stone(Pos::new(10, 5), Stone::White);

        let result = AIEngine::new().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::ForcedBlock);
    }

    #[test]
    fn test_engine_win_beats_block() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(2, i), Stone::Black);
            board.place_stone(Pos::new(12, 10 + i), Stone::White);
        }

        let result = AIEngine::new().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(12, 9)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_first_win_in_row_major_order() {
        // Open four: (4,3) and (4,8) both win, (4,3) comes first
        let mut board = Board::new();
        for c in 4..8 {
            board.place_stone(Pos::new(4, c), Stone::White);
        }
        let result = fast_engine().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(4, 3)));
    }

    #[test]
    fn test_engine_empty_board() {
        let result = fast_engine().choose_move(&Board::new(), Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_full_board() {
        // Pattern with no five in any direction
        let rows: Vec<String> = (0..15)
            .map(|r| {
                (0..15)
                    .map(|c| if ((c + 2 * r) / 2) % 2 == 0 { 'X' } else { 'O' })
                    .collect()
            })
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let board = Board::from_rows(&rows);
        assert!(board.is_full());

        let result = AIEngine::new().choose_move(&board, Stone::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoLegalMove);
    }

    #[test]
    fn test_engine_responds_near_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let pos = fast_engine().get_move(&board, Stone::White).unwrap();
        assert_ne!(pos, Pos::new(7, 7));
        assert!(pos.row().abs_diff(7) <= 2 && pos.col().abs_diff(7) <= 2);
    }

    #[test]
    fn test_engine_is_deterministic() {
        let board = Board::from_rows(&["", "", "", "", "", "", "......X", ".....OX", "......O"]);
        let engine = fast_engine();
        let first = engine.choose_move(&board, Stone::Black);
        let second = engine.choose_move(&board, Stone::Black);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_engine_concurrent_snapshots() {
        let board = Board::from_rows(&["", "", "", "", "", "", "......X", ".......O"]);
        let engine = fast_engine();
        let expected = engine.get_move(&board, Stone::Black);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                let board = board.clone();
                thread::spawn(move || engine.get_move(&board, Stone::Black))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_engine_alternating_colors() {
        let engine = fast_engine();
        let mut board = Board::new();
        let mut color = Stone::Black;
        for _ in 0..6 {
            let pos = engine.get_move(&board, color).unwrap();
            assert!(board.is_empty(pos));
            board.place_stone(pos, color);
            color = color.opponent();
        }
        assert_eq!(board.stone_count(), 6);
    }
}
