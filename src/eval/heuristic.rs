//! Heuristic evaluation function for Gomoku board positions
//!
//! Only the lines through stones placed inside the current search branch are
//! scored. Each line window is normalized to the mover's point of view and
//! every substring of 4 to 6 cells is looked up in the pattern table.

use crate::board::{Board, Direction, Pos, Stone};

use super::patterns::{pattern_score, MAX_PATTERN_LEN, MIN_PATTERN_LEN};

/// Evaluate the board from the perspective of `mover`.
///
/// Positive values favour `mover`. Stones in `moves_so_far` are scanned along
/// all four axes with unrestricted windows; cells shared by several windows
/// are counted once per window.
#[must_use]
pub fn evaluate(board: &Board, mover: Stone, moves_so_far: &[Pos]) -> i64 {
    let mut score = 0;
    for &pos in moves_so_far {
        for dir in Direction::AXES {
            let line = board.line_through(pos, dir, false);
            score += score_line(&line.normalized(mover));
        }
    }
    score
}

/// Sum of pattern scores over every substring of a normalized line.
#[must_use]
pub fn score_line(normalized: &str) -> i64 {
    let n = normalized.len();
    let mut score = 0;
    for len in MIN_PATTERN_LEN..=MAX_PATTERN_LEN.min(n) {
        for start in 0..=n - len {
            score += pattern_score(&normalized[start..start + len]);
        }
    }
    score
}
