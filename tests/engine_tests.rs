//! Bot decision integration tests through the public API.

use gomoku::rules::find_winner;
use gomoku::search::Searcher;
use gomoku::{AIEngine, Board, EngineConfig, Pos, SearchType, Stone};

fn quick_engine(depth: u8) -> AIEngine {
    AIEngine::with_config(EngineConfig::default().with_depth(depth))
}

// =============================================================================
// Opening Tests
// =============================================================================

#[test]
fn test_reply_to_center_stays_close() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);

    let result = AIEngine::new().choose_move(&board, Stone::White);
    let pos = result.best_move.expect("bot should reply");

    assert_eq!(result.search_type, SearchType::AlphaBeta);
    assert_ne!(pos, Pos::new(7, 7));
    assert!(pos.row().abs_diff(7) <= 2, "row {} too far", pos.row());
    assert!(pos.col().abs_diff(7) <= 2, "col {} too far", pos.col());
}

#[test]
fn test_empty_board_opens_center() {
    let engine = quick_engine(2);
    assert_eq!(engine.get_move(&Board::new(), Stone::Black), Some(Pos::new(7, 7)));
}

// =============================================================================
// Short-circuit Tests
// =============================================================================

#[test]
fn test_open_four_is_blocked_at_an_end() {
    let mut board = Board::new();
    for c in 5..9 {
        board.place_stone(Pos::new(5, c), Stone::Black);
    }
    board.place_stone(Pos::new(9, 9), Stone::White);
    board.place_stone(Pos::new(10, 10), Stone::White);

    let pos = AIEngine::new().get_move(&board, Stone::White).unwrap();
    assert!(
        pos == Pos::new(5, 4) || pos == Pos::new(5, 9),
        "expected a blocking cell, got {pos:?}"
    );
}

#[test]
fn test_four_with_one_open_end_completes() {
    let mut board = Board::new();
    board.place_stone(Pos::new(2, 6), Stone::Black);
    for r in 3..7 {
        board.place_stone(Pos::new(r, 6), Stone::White);
    }
    board.place_stone(Pos::new(12, 0), Stone::Black);

    let result = AIEngine::new().choose_move(&board, Stone::White);
    assert_eq!(result.best_move, Some(Pos::new(7, 6)));
    assert_eq!(result.search_type, SearchType::ImmediateWin);
}

#[test]
fn test_diagonal_threat_is_blocked() {
    let mut board = Board::new();
    for i in 0..4 {
        board.place_stone(Pos::new(4 + i, 10 - i), Stone::Black);
    }
    board.place_stone(Pos::new(3, 11), Stone::White);
    board.place_stone(Pos::new(12, 12), Stone::White);

    let result = AIEngine::new().choose_move(&board, Stone::White);
    assert_eq!(result.best_move, Some(Pos::new(8, 6)));
    assert_eq!(result.search_type, SearchType::ForcedBlock);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_choose_move_is_deterministic() {
    let board = Board::from_rows(&[
        "", "", "", "", "",
        "......X",
        "......OX",
        ".....XO",
        "......O",
    ]);
    let engine = quick_engine(3);
    let first = engine.choose_move(&board, Stone::White);
    let second = engine.choose_move(&board, Stone::White);

    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_search_result_has_stats() {
    let board = Board::from_rows(&["", "", "", "", "", "", ".......X", "......O."]);
    let mut searcher = Searcher::new(EngineConfig::default().with_depth(3));
    let result = searcher.search(&board, Stone::Black);

    assert!(result.best_move.is_some());
    assert!(result.nodes > 1);
    assert!(result.stats.first_move_cutoffs <= result.stats.beta_cutoffs);
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_self_play_stays_legal() {
    let engine = quick_engine(2);
    let mut board = Board::new();
    let mut color = Stone::Black;

    for _ in 0..30 {
        if find_winner(&board).is_some() {
            break;
        }
        let pos = engine.get_move(&board, color).expect("board is not full");
        assert!(board.is_empty(pos), "bot chose occupied {pos:?}");
        board.place_stone(pos, color);
        color = color.opponent();
    }
    assert!(board.stone_count() >= 9);
}
