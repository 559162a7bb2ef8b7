//! Gomoku with a minimax computer opponent
//!
//! Free-style Gomoku on a square board (11x11 by default): players alternate
//! placing stones and five or more in a row wins. A full board without a
//! winner is a draw.
//!
//! # Architecture
//!
//! - [`board`]: grid state, line scans and scoped apply/undo
//! - [`rules`]: move validation and five-in-a-row helpers
//! - [`eval`]: pattern table and static evaluation
//! - [`search`]: candidate generation and alpha-beta minimax
//! - [`engine`]: computer-move entry point with search statistics
//! - [`strategy`]: pluggable computer players (random, minimax)
//! - [`game`]: game facade used by the front-ends
//! - [`config`]: TOML configuration
//! - [`ui`]: console and egui front-ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new(11);
//! let mut engine = AIEngine::with_config(2, 10);
//!
//! board.place(Pos::new(5, 5), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod strategy;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{Difficulty, GameConfig, Interface};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use game::{Game, Outcome};
pub use strategy::{RandomStrategy, Strategy};
