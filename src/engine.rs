//! Main AI engine
//!
//! Entry point for computer moves. An empty board is answered with the centre
//! cell; every other position goes through the alpha-beta [`Searcher`].
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! // Shallow search keeps the example fast
//! let mut engine = AIEngine::with_config(2, 10);
//! let mut board = Board::new(11);
//! board.place(Pos::new(5, 5), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::search::{SearchResult, Searcher, DEFAULT_DEPTH, MAX_CANDIDATES};
use crate::strategy::Strategy;

/// Which path produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Centre move on an empty board
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the chosen move for the side to move
    pub score: i64,
    /// Path that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of placements tried
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Minimax player.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Pos, Stone};
///
/// let mut engine = AIEngine::with_config(2, 8);
/// let mut board = Board::new(11);
/// board.place(Pos::new(5, 5), Stone::Black);
/// if let Some(best_move) = engine.get_move(&board, Stone::White) {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine searching 4 plies with 10 candidates per node.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, MAX_CANDIDATES)
    }

    /// Create an engine with a custom depth and candidate budget.
    #[must_use]
    pub fn with_config(max_depth: u32, candidate_limit: usize) -> Self {
        Self {
            searcher: Searcher::new(max_depth, candidate_limit),
        }
    }

    #[must_use]
    pub fn from_search_config(config: &SearchConfig) -> Self {
        Self::with_config(config.depth, config.candidate_limit)
    }

    /// Get the best move for the given position, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.is_board_empty() {
            return MoveResult::opening(board.center(), start.elapsed().as_millis() as u64);
        }

        let result = self.searcher.search(board, color);
        MoveResult::from_alphabeta(result, start.elapsed().as_millis() as u64)
    }

    pub fn set_max_depth(&mut self, depth: u32) {
        self.searcher.set_max_depth(depth);
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.searcher.max_depth()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AIEngine {
    fn choose_move(&mut self, board: &mut Board, color: Stone) -> Result<Pos, GameError> {
        let result = self.get_move_with_stats(board, color);
        let pos = result.best_move.ok_or(GameError::NoLegalMove)?;
        info!(
            color = color.name(),
            row = pos.row,
            col = pos.col,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "computed move"
        );
        board.place(pos, color);
        Ok(pos)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
