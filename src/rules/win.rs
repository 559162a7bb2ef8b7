//! Five-in-a-row helpers
//!
//! The board tracks its own winner incrementally. These helpers answer the
//! questions front-ends and tests ask about a position: which cells form the
//! winning line, and whether a given cell sits on a five.

use crate::board::{Board, Direction, Pos, Stone};

/// Count of consecutive `color` stones through `pos` along one axis.
fn run_length(board: &Board, pos: Pos, dir: Direction, color: Stone) -> usize {
    let size = board.size();
    let mut count = 1;
    for d in [dir, dir.opposite()] {
        let mut step = 1;
        while let Some(next) = pos.offset(d, step, size) {
            if board.get(next) != color {
                break;
            }
            count += 1;
            step += 1;
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. Unlike the board's own
/// line scans this is not capped in length.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    color != Stone::Empty
        && board.get(pos) == color
        && Direction::AXES
            .iter()
            .any(|&dir| run_length(board, pos, dir, color) >= 5)
}

/// Cells of the winning run through the last move, ordered along the axis.
///
/// Returns `None` when the board has no winner.
pub fn winning_line(board: &Board) -> Option<Vec<Pos>> {
    let color = board.winner()?;
    let pos = board.last_move()?;
    let size = board.size();

    for dir in Direction::AXES {
        let mut line = vec![pos];
        let mut step = 1;
        while let Some(prev) = pos.offset(dir.opposite(), step, size) {
            if board.get(prev) != color {
                break;
            }
            line.insert(0, prev);
            step += 1;
        }
        step = 1;
        while let Some(next) = pos.offset(dir, step, size) {
            if board.get(next) != color {
                break;
            }
            line.push(next);
            step += 1;
        }
        if line.len() >= 5 {
            return Some(line);
        }
    }
    None
}
