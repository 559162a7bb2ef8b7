//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{Difficulty, GameConfig, SearchConfig};
use crate::error::GameError;
use crate::game::Outcome;
use crate::rules::{is_valid_move, winning_line};
use crate::strategy::Strategy;
use crate::{AIEngine, Board, MoveResult, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// Reply from the worker thread: the strategy comes back with its answer.
type AiReply = (Box<dyn Strategy>, Result<Pos, GameError>);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Last computer move, for the debug card
#[derive(Debug, Clone)]
pub struct AiMove {
    pub pos: Pos,
    pub strategy: String,
    pub elapsed: Duration,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub outcome: Option<Outcome>,
    pub winning_line: Option<Vec<Pos>>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_move: Option<AiMove>,
    pub last_hint: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    difficulty: Difficulty,
    search: SearchConfig,
    /// `None` while the worker thread owns it
    strategy: Option<Box<dyn Strategy>>,
}

impl GameState {
    pub fn new(mode: GameMode, config: &GameConfig) -> Self {
        let difficulty = config.difficulty.unwrap_or(Difficulty::Hard);
        Self {
            board: Board::new(config.board_size),
            mode,
            current_turn: Stone::Black,
            outcome: None,
            winning_line: None,
            move_history: Vec::new(),
            last_ai_move: None,
            last_hint: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            difficulty,
            search: config.search,
            strategy: Some(difficulty.strategy(&config.search)),
        }
    }

    /// Start over with the same mode and settings.
    ///
    /// A pending computer move is abandoned; its thread finishes on its own.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, &self.config());
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board.size(),
            search: self.search,
            difficulty: Some(self.difficulty),
            interface: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err(GameError::GameOver.to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_valid_move(&self.board, pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            }
            .to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.board.place(pos, color);

        self.move_history.push((pos, color));
        self.suggested_move = None;
        self.move_timer.stop();

        if let Some(outcome) = self.check_outcome() {
            info!(%outcome, moves = self.move_history.len(), "game over");
            self.outcome = Some(outcome);
            return;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        self.message = None;
    }

    fn check_outcome(&mut self) -> Option<Outcome> {
        if let Some(winner) = self.board.winner() {
            self.winning_line = winning_line(&self.board);
            Some(Outcome::Winner(winner))
        } else if self.board.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Hand the strategy and a copy of the board to a worker thread.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }
        let Some(mut strategy) = self.strategy.take() else {
            return;
        };

        let mut board = self.board.clone();
        let color = self.current_turn;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = strategy.choose_move(&mut board, color);
            let _ = tx.send((strategy, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(reply) => Some((reply, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.strategy = Some(self.difficulty.strategy(&self.search));
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((strategy, result), elapsed)) = reply else {
            return;
        };
        self.ai_state = AiState::Idle;

        match result {
            Ok(pos) => {
                self.last_ai_move = Some(AiMove {
                    pos,
                    strategy: strategy.name().to_string(),
                    elapsed,
                });
                self.execute_move(pos);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.strategy = Some(strategy);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::from_search_config(&self.search);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);
        debug!(best_move = ?result.best_move, score = result.score, "hint");

        self.suggested_move = result.best_move;
        self.last_hint = Some(result);
    }

    /// Undo last move; in PvE the computer's reply is taken back too.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { human_color } => {
                // Back to the last position where the human was to move
                let mut n = 0;
                for (_, color) in self.move_history.iter().rev() {
                    n += 1;
                    if *color == human_color {
                        break;
                    }
                }
                n
            }
            GameMode::PvP => 1,
        };

        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = Board::new(self.board.size());
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.winning_line = None;
        self.suggested_move = None;
        self.message = None;

        for (pos, color) in moves {
            self.board.place(pos, color);
            self.move_history.push((pos, color));
            self.current_turn = color.opponent();
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(difficulty: Difficulty) -> GameConfig {
        GameConfig {
            difficulty: Some(difficulty),
            search: SearchConfig {
                depth: 2,
                candidate_limit: 8,
            },
            ..GameConfig::default()
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_human_move_then_ai_reply() {
        let mut state = GameState::new(GameMode::default(), &config(Difficulty::Hard));
        state.try_place_stone(Pos::new(5, 5)).unwrap();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.current_turn, Stone::Black);
        let ai = state.last_ai_move.as_ref().unwrap();
        assert_eq!(ai.strategy, "minimax");
        assert_eq!(state.board.get(ai.pos), Stone::White);
    }

    #[test]
    fn test_ai_opens_when_human_plays_white() {
        let mode = GameMode::PvE {
            human_color: Stone::White,
        };
        let mut state = GameState::new(mode, &config(Difficulty::Easy));
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());

        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.move_history.len(), 1);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Hard));
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        let err = state.try_place_stone(Pos::new(3, 3)).unwrap_err();
        assert_eq!(err, "cell (3, 3) is not empty");
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_pvp_win_sets_outcome_and_line() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Hard));
        for col in 0..4 {
            state.try_place_stone(Pos::new(0, col)).unwrap();
            state.try_place_stone(Pos::new(1, col)).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        assert_eq!(state.outcome, Some(Outcome::Winner(Stone::Black)));
        assert_eq!(state.winning_line.as_ref().map(Vec::len), Some(5));
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_undo_pvp_and_pve() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Hard));
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.undo();
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.board.get(Pos::new(4, 4)), Stone::Empty);
        assert_eq!(state.current_turn, Stone::White);

        let mut state = GameState::new(GameMode::default(), &config(Difficulty::Easy));
        state.try_place_stone(Pos::new(5, 5)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        state.undo();
        assert!(state.move_history.is_empty());
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn, Stone::Black);
    }

    #[test]
    fn test_undo_clears_outcome() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Hard));
        for col in 0..4 {
            state.try_place_stone(Pos::new(0, col)).unwrap();
            state.try_place_stone(Pos::new(1, col)).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();
        state.undo();
        assert_eq!(state.outcome, None);
        assert_eq!(state.winning_line, None);
        assert_eq!(state.current_turn, Stone::Black);
    }

    #[test]
    fn test_hint_does_not_move() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Hard));
        state.try_place_stone(Pos::new(5, 5)).unwrap();
        state.request_suggestion();
        assert!(state.suggested_move.is_some());
        assert!(state.last_hint.is_some());
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut state = GameState::new(GameMode::PvP, &config(Difficulty::Easy));
        state.try_place_stone(Pos::new(1, 1)).unwrap();
        state.reset();
        assert!(state.board.is_board_empty());
        assert_eq!(state.mode, GameMode::PvP);
        assert_eq!(state.difficulty(), Difficulty::Easy);
    }
}
