//! Game rules for Gomoku
//!
//! This module implements the rule set for free-style Gomoku:
//! - Move validation at the human-input boundary
//! - Win conditions (5-in-a-row, overlines allowed)

pub mod win;

use crate::board::{Board, Pos};
use crate::error::{Axis, GameError};

// Re-exports for convenient access
pub use win::{has_five_at_pos, winning_line};

/// Validate a human move: row range, then column range, then emptiness.
pub fn validate_move(board: &Board, row: i32, col: i32) -> Result<Pos, GameError> {
    let size = board.size();
    if row < 0 || row as usize >= size {
        return Err(GameError::InvalidCoordinate {
            axis: Axis::Row,
            value: row,
            size,
        });
    }
    if col < 0 || col as usize >= size {
        return Err(GameError::InvalidCoordinate {
            axis: Axis::Column,
            value: col,
            size,
        });
    }
    let pos = Pos::new(row as usize, col as usize);
    if !board.is_empty(pos) {
        return Err(GameError::CellOccupied {
            row: pos.row,
            col: pos.col,
        });
    }
    Ok(pos)
}

/// Check if a move is legal on the current board
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    pos.row < board.size() && pos.col < board.size() && board.is_empty(pos)
}
