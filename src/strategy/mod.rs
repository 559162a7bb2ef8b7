//! Computer players
//!
//! A [`Strategy`] picks a move for one side and plays it on the board.
//! [`Difficulty::Easy`] maps to [`RandomStrategy`], [`Difficulty::Hard`] to
//! the minimax [`AIEngine`].

mod random;

pub use random::RandomStrategy;

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, SearchConfig};
use crate::engine::AIEngine;
use crate::error::GameError;

/// A computer player.
pub trait Strategy: Send {
    /// Choose a move for `color`, place it on `board` and return it.
    ///
    /// Fails with [`GameError::NoLegalMove`] when the board is full.
    fn choose_move(&mut self, board: &mut Board, color: Stone) -> Result<Pos, GameError>;

    /// Short name for logs and status lines
    fn name(&self) -> &str;
}

impl Difficulty {
    /// Build the strategy for this level.
    pub fn strategy(self, search: &SearchConfig) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Hard => Box::new(AIEngine::from_search_config(search)),
        }
    }
}
