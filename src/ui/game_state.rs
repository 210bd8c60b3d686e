//! Game state management for the Gomoku GUI

use crate::board::{Board, Pos, Stone};
use crate::config::{THINK_DELAY_MS, WIN_LENGTH};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::check_win;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs bot; the bot plays the other colour
    PvE { human: Stone },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Stone::Black }
    }
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::PvP => "Player vs Player",
            GameMode::PvE { .. } => "Player vs Bot",
        }
    }
}

/// Bot computation state
pub enum BotState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won {
        winner: Stone,
        line: [Pos; WIN_LENGTH],
    },
    Draw,
}

/// What a single placement did to the game.
///
/// Every applied move yields exactly one event; the front-end reacts to it
/// (sound cues, banners) without re-deriving anything from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Placed { pos: Pos, stone: Stone },
    Won { pos: Pos, stone: Stone, line: [Pos; WIN_LENGTH] },
    Draw { pos: Pos, stone: Stone },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_bot_result: Option<MoveResult>,
    pub bot_state: BotState,
    pub message: Option<String>,

    engine: AIEngine,
    think_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, AIEngine::new(), Duration::from_millis(THINK_DELAY_MS))
    }

    pub fn with_engine(mode: GameMode, engine: AIEngine, think_delay: Duration) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_bot_result: None,
            bot_state: BotState::Idle,
            message: None,
            engine,
            think_delay,
        }
    }

    /// Start a new game in the same mode.
    ///
    /// A bot move still in flight is discarded with its receiver.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_bot_result = None;
        self.bot_state = BotState::Idle;
        self.message = None;
        log::info!("new game ({})", self.mode.label());
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.outcome {
            Some(GameOutcome::Won { winner, .. }) => Some(winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos; WIN_LENGTH]> {
        match &self.outcome {
            Some(GameOutcome::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the bot's turn
    pub fn is_bot_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if the bot is currently thinking
    pub fn is_bot_thinking(&self) -> bool {
        matches!(self.bot_state, BotState::Thinking { .. })
    }

    /// Attempt to place a stone for the human player to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<GameEvent, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.is_bot_thinking() || !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
            });
        }
        Ok(self.apply_move(pos))
    }

    /// Place a stone for the side to move (human and bot alike).
    fn apply_move(&mut self, pos: Pos) -> GameEvent {
        let stone = self.current_turn;
        self.board.place_stone(pos, stone);
        self.move_history.push((pos, stone));
        self.last_move = Some(pos);
        self.message = None;

        let event = if let Some(&line) = check_win(&self.board, pos, stone).line() {
            self.outcome = Some(GameOutcome::Won { winner: stone, line });
            GameEvent::Won { pos, stone, line }
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            GameEvent::Draw { pos, stone }
        } else {
            self.current_turn = stone.opponent();
            GameEvent::Placed { pos, stone }
        };
        log_event(&event);
        event
    }

    /// Hand the current position to a worker thread if the bot is to move.
    pub fn start_bot_thinking(&mut self) {
        if !self.is_bot_turn() || self.is_bot_thinking() || self.is_game_over() {
            return;
        }

        let board = self.board.clone();
        let color = self.current_turn;
        let engine = self.engine.clone();
        let delay = self.think_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let result = engine.choose_move(&board, color);
            // Receiver gone means the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.bot_state = BotState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the bot's move once the worker has delivered it.
    pub fn poll_bot(&mut self) -> Option<GameEvent> {
        let received = match &self.bot_state {
            BotState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("bot worker exited without a move");
                    self.bot_state = BotState::Idle;
                    self.message = Some("Bot error".to_string());
                    return None;
                }
            },
            BotState::Idle => return None,
        };

        self.bot_state = BotState::Idle;
        let best_move = received.best_move;
        self.last_bot_result = Some(received);

        match best_move {
            Some(pos) if self.board.is_empty(pos) => Some(self.apply_move(pos)),
            Some(pos) => {
                log::warn!("bot proposed occupied cell ({}, {})", pos.row(), pos.col());
                self.message = Some("Bot error".to_string());
                None
            }
            None => {
                self.outcome = Some(GameOutcome::Draw);
                log::info!("no legal move left, game drawn");
                None
            }
        }
    }

    /// Elapsed bot thinking time
    pub fn bot_thinking_elapsed(&self) -> Option<Duration> {
        match &self.bot_state {
            BotState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            BotState::Idle => None,
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Placed { pos, stone } => {
            log::info!("{} plays ({}, {})", stone.symbol(), pos.row(), pos.col());
        }
        GameEvent::Won { pos, stone, .. } => {
            log::info!("{} plays ({}, {}) and wins", stone.symbol(), pos.row(), pos.col());
        }
        GameEvent::Draw { pos, stone } => {
            log::info!("{} plays ({}, {}), board full, draw", stone.symbol(), pos.row(), pos.col());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn instant_bot(mode: GameMode) -> GameState {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
        GameState::with_engine(mode, engine, Duration::ZERO)
    }

    fn wait_for_bot(state: &mut GameState) -> Option<GameEvent> {
        for _ in 0..600 {
            if let Some(event) = state.poll_bot() {
                return Some(event);
            }
            if !state.is_bot_thinking() {
                return None;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("bot did not answer in time");
    }

    /// Full board without any five, used to reach a draw.
    fn drawn_rows() -> Vec<String> {
        (0..15)
            .map(|r| {
                (0..15)
                    .map(|c| if ((c + 2 * r) / 2) % 2 == 0 { 'X' } else { 'O' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_pvp_turns_alternate() {
        let mut state = GameState::new(GameMode::PvP);
        let event = state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(event, GameEvent::Placed { pos: Pos::new(7, 7), stone: Stone::Black });
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.last_move, Some(Pos::new(7, 7)));

        state.try_place_stone(Pos::new(7, 8)).unwrap();
        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(
            state.try_place_stone(Pos::new(7, 7)),
            Err(GameError::IllegalMove { row: 7, col: 7 })
        );
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(GameMode::PvP);
        for c in 0..4 {
            state.try_place_stone(Pos::new(0, c)).unwrap();
            state.try_place_stone(Pos::new(1, c)).unwrap();
        }
        let event = state.try_place_stone(Pos::new(0, 4)).unwrap();
        let expected_line = [0, 1, 2, 3, 4].map(|c| Pos::new(0, c));
        assert_eq!(
            event,
            GameEvent::Won { pos: Pos::new(0, 4), stone: Stone::Black, line: expected_line }
        );
        assert_eq!(state.winner(), Some(Stone::Black));
        assert_eq!(state.winning_line(), Some(&expected_line));
        assert_eq!(state.try_place_stone(Pos::new(5, 5)), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let rows = drawn_rows();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let mut state = GameState::new(GameMode::PvP);
        state.board = Board::from_rows(&rows);
        let last = Pos::new(14, 14);
        let stone = state.board.get(last);
        state.board.remove_stone(last);
        state.current_turn = stone;

        let event = state.try_place_stone(last).unwrap();
        assert_eq!(event, GameEvent::Draw { pos: last, stone });
        assert_eq!(state.outcome, Some(GameOutcome::Draw));
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_human_cannot_move_for_bot() {
        let mut state = instant_bot(GameMode::PvE { human: Stone::White });
        assert!(state.is_bot_turn());
        assert_eq!(state.try_place_stone(Pos::new(7, 7)), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_bot_replies_to_human() {
        let mut state = instant_bot(GameMode::default());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_bot_turn());

        state.start_bot_thinking();
        assert!(state.is_bot_thinking());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(GameError::NotYourTurn));

        let event = wait_for_bot(&mut state).unwrap();
        match event {
            GameEvent::Placed { pos, stone } => {
                assert_eq!(stone, Stone::White);
                assert_ne!(pos, Pos::new(7, 7));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(state.is_human_turn());
        assert!(state.last_bot_result.is_some());
    }

    #[test]
    fn test_bot_opens_when_human_is_white() {
        let mut state = instant_bot(GameMode::PvE { human: Stone::White });
        state.start_bot_thinking();
        let event = wait_for_bot(&mut state).unwrap();
        assert_eq!(event, GameEvent::Placed { pos: Pos::new(7, 7), stone: Stone::Black });
    }

    #[test]
    fn test_start_bot_is_noop_on_human_turn() {
        let mut state = instant_bot(GameMode::default());
        state.start_bot_thinking();
        assert!(!state.is_bot_thinking());
        assert_eq!(state.poll_bot(), None);
    }

    #[test]
    fn test_reset_discards_pending_bot_move() {
        let engine = AIEngine::with_config(EngineConfig::default().with_depth(2));
        let mut state =
            GameState::with_engine(GameMode::default(), engine, Duration::from_millis(50));
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_bot_thinking();
        state.reset();

        assert!(!state.is_bot_thinking());
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn, Stone::Black);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(state.poll_bot(), None);
        assert!(state.board.is_board_empty());
    }
}
