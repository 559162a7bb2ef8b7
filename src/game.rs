//! Game facade shared by the front-ends
//!
//! Owns the board and the computer's [`Strategy`]; validates human moves and
//! reports when the game is over.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::validate_move;
use crate::strategy::Strategy;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Stone),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(stone) => write!(f, "{} won the game!", stone.name()),
            Outcome::Draw => f.write_str("DRAW!"),
        }
    }
}

/// One game between a human and a computer strategy.
pub struct Game {
    board: Board,
    strategy: Box<dyn Strategy>,
}

impl Game {
    pub fn new(config: &GameConfig, strategy: Box<dyn Strategy>) -> Self {
        Self {
            board: Board::new(config.board_size),
            strategy,
        }
    }

    /// Start over on an empty board of the same size.
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.size());
        debug!("game restarted");
    }

    /// Validate and play a human move.
    ///
    /// Checks the row range, then the column range, then that the cell is
    /// empty. The board is untouched on error.
    pub fn human_move(&mut self, row: i32, col: i32, color: Stone) -> Result<Pos, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let pos = validate_move(&self.board, row, col)?;
        self.board.place(pos, color);
        debug!(color = color.name(), row = pos.row, col = pos.col, "human move");
        self.log_outcome();
        Ok(pos)
    }

    /// Let the strategy play for `color`.
    pub fn computer_move(&mut self, color: Stone) -> Result<Pos, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let pos = self.strategy.choose_move(&mut self.board, color)?;
        self.log_outcome();
        Ok(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// True once someone has five in a row or the board is full.
    pub fn is_finished(&self) -> bool {
        self.board.winner().is_some() || self.board.is_draw()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(stone) = self.board.winner() {
            Some(Outcome::Winner(stone))
        } else if self.board.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn log_outcome(&self) {
        if let Some(outcome) = self.outcome() {
            info!(%outcome, moves = self.board.stone_count(), "game over");
        }
    }
}
