//! Minimax search with alpha-beta pruning
//!
//! Depth-limited minimax over the candidate moves, maximizing for the bot and
//! minimizing for its opponent. All scores are from the bot's point of view
//! and share one scale, the evaluator's:
//!
//! - A completed run found `ply` moves into the search scores
//!   `win - ply` for the bot and `-(win - ply)` for the opponent, so faster
//!   wins and slower losses are preferred.
//! - At the depth cutoff the side to move gets a one-ply static lookahead:
//!   its best single placement by the evaluator, negated for the opponent.
//!   A placement there that completes a run scores `±(win - (ply + 1))`,
//!   exactly what one more ply of search would report.
//!
//! The weight table guarantees every non-winning evaluator total stays below
//! `win - search_depth`, so static and terminal scores never overlap.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(EngineConfig::default().with_depth(2));
//! let result = searcher.search(&board, Stone::White);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::config::{EngineConfig, SCORE_LIMIT};
use crate::eval::evaluate;
use crate::rules::{find_winner, has_five_at_pos};

use super::movegen::candidates;

/// Bound for alpha-beta windows, above any reachable score
const INF: i32 = SCORE_LIMIT;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Static lookaheads performed at the depth cutoff
    pub frontier_evals: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` when the board is full or already decided
    pub best_move: Option<Pos>,
    /// Minimax value of the best move, from the bot's point of view
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only the configuration and per-search counters; every call to
/// [`Searcher::search`] starts fresh and works on its own copy of the board.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: EngineConfig,
    bot: Stone,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            bot: Stone::White,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Find the best move for `bot`.
    ///
    /// Ties between equally scored root moves go to the first in row-major
    /// order, whatever order the moves were searched in.
    #[must_use]
    pub fn search(&mut self, board: &Board, bot: Stone) -> SearchResult {
        self.bot = bot;
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work = board.clone();

        // Root already decided: nothing to search
        if let Some((winner, _)) = find_winner(&work) {
            let win = self.config.weights.win;
            return self.result(None, if winner == bot { win } else { -win });
        }

        let moves = self.ordered_moves(&mut work, bot);
        if moves.is_empty() {
            return self.result(None, 0);
        }

        let mut best_score = -INF;
        let mut best_move: Option<Pos> = None;

        for mov in moves {
            // A window just below the best lets equal scores come back exact,
            // so ties can be settled by position rather than by search order.
            let alpha = if best_move.is_some() { best_score - 1 } else { -INF };
            let score = work.with_stone(mov, bot, |b| self.minimax(b, 1, false, mov, alpha, INF));

            let better = score > best_score
                || (score == best_score && best_move.map_or(true, |best| mov < best));
            if better {
                best_score = score;
                best_move = Some(mov);
            }
        }

        let best_move = best_move.or_else(|| Some(Pos::center()).filter(|&c| board.is_empty(c)));
        self.result(best_move, best_score)
    }

    fn result(&self, best_move: Option<Pos>, score: i32) -> SearchResult {
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Signed terminal score for a run completed by `winner` at `ply`.
    #[inline]
    fn win_score(&self, winner: Stone, ply: u8) -> i32 {
        let score = self.config.weights.win - i32::from(ply);
        if winner == self.bot {
            score
        } else {
            -score
        }
    }

    /// Recursive minimax with alpha-beta pruning (fail-soft).
    ///
    /// `last_move` is the stone just placed; it is the only stone that can
    /// have completed a new run.
    fn minimax(
        &mut self,
        board: &mut Board,
        ply: u8,
        maximizing: bool,
        last_move: Pos,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let last_player = board.get(last_move);
        if has_five_at_pos(board, last_move, last_player) {
            return self.win_score(last_player, ply);
        }

        let to_move = if maximizing { self.bot } else { self.bot.opponent() };

        if ply >= self.config.search_depth {
            return self.frontier(board, ply, to_move);
        }

        let moves = self.ordered_moves(board, to_move);
        if moves.is_empty() {
            // Full board, no winner
            return 0;
        }

        if maximizing {
            let mut best = -INF;
            for (i, mov) in moves.into_iter().enumerate() {
                let score = board.with_stone(mov, to_move, |b| {
                    self.minimax(b, ply + 1, false, mov, alpha, beta)
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for (i, mov) in moves.into_iter().enumerate() {
                let score = board.with_stone(mov, to_move, |b| {
                    self.minimax(b, ply + 1, true, mov, alpha, beta)
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            best
        }
    }

    /// Static one-ply lookahead at the depth cutoff.
    fn frontier(&mut self, board: &mut Board, ply: u8, to_move: Stone) -> i32 {
        self.stats.frontier_evals += 1;
        let weights = self.config.weights;
        let sign = if to_move == self.bot { 1 } else { -1 };

        let mut best = 0;
        for mov in candidates(board, self.config.candidate_radius) {
            let (wins, score) = board.with_stone(mov, to_move, |b| {
                (
                    has_five_at_pos(b, mov, to_move),
                    evaluate(b, mov, to_move, false, &weights),
                )
            });
            if wins {
                return self.win_score(to_move, ply + 1);
            }
            best = best.max(score);
        }
        sign * best
    }

    /// Candidates for `to_move`, strongest first.
    ///
    /// Each candidate is scored once with the evaluator for the mover. That
    /// is descending bot value at maximizing nodes and ascending bot value at
    /// minimizing nodes. The sort is stable, so equal scores keep row-major
    /// order.
    fn ordered_moves(&self, board: &mut Board, to_move: Stone) -> Vec<Pos> {
        let weights = self.config.weights;
        let mut scored: Vec<(Pos, i32)> = candidates(board, self.config.candidate_radius)
            .into_iter()
            .map(|mov| {
                let score = board.with_stone(mov, to_move, |b| {
                    evaluate(b, mov, to_move, false, &weights)
                });
                (mov, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(mov, _)| mov).collect()
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.beta_cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }
}
