//! Pattern scores for Gomoku evaluation
//!
//! Lines are normalized to the mover's point of view before lookup: `+` is a
//! mover stone, `-` an opponent stone and a blank an empty cell.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Pattern scores for evaluation.
///
/// Magnitudes keep three bands far apart: fives, then fours, then threes and
/// twos. Opponent shapes are penalised harder than the matching own shapes.
pub struct PatternScore;

impl PatternScore {
    // Winning patterns
    /// Five in a row: `+++++`
    pub const FIVE: i64 = 1_000_000_000_000;
    /// Opponent five: `-----`
    pub const OPPONENT_FIVE: i64 = -1_000_000_000_000;

    // Fours
    /// Open four: ` ++++ `
    pub const OPEN_FOUR: i64 = 10_000_000_000;
    /// Opponent open four: ` ---- `
    pub const OPPONENT_OPEN_FOUR: i64 = -50_000_000_000;
    /// Four blocked on one side: `-++++ ` or ` ++++-`
    pub const CLOSED_FOUR: i64 = 100_000_000;
    /// Opponent four blocked by a mover stone: `+---- ` or ` ----+`
    pub const OPPONENT_CLOSED_FOUR: i64 = -500_000_000;

    // Threes
    /// Open three: ` +++ `
    pub const OPEN_THREE: i64 = 1_000;
    /// Three blocked on the right: ` +++-`
    pub const CLOSED_THREE: i64 = 150;
    /// Opponent open three: ` --- `
    pub const OPPONENT_OPEN_THREE: i64 = -5_000;
    /// Opponent three blocked on the right: ` ---+`
    pub const OPPONENT_CLOSED_THREE: i64 = -50;

    // Twos
    /// Open two: ` ++ `
    pub const OPEN_TWO: i64 = 10;
    /// Opponent open two: ` -- `
    pub const OPPONENT_OPEN_TWO: i64 = -50;
}

/// Shortest and longest pattern in the table
pub const MIN_PATTERN_LEN: usize = 4;
pub const MAX_PATTERN_LEN: usize = 6;

/// Process-wide pattern table, built on first use and never mutated.
pub static PATTERN_TABLE: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    HashMap::from([
        ("+++++", PatternScore::FIVE),
        ("-----", PatternScore::OPPONENT_FIVE),
        (" ++++ ", PatternScore::OPEN_FOUR),
        (" ---- ", PatternScore::OPPONENT_OPEN_FOUR),
        ("-++++ ", PatternScore::CLOSED_FOUR),
        (" ++++-", PatternScore::CLOSED_FOUR),
        (" ----+", PatternScore::OPPONENT_CLOSED_FOUR),
        ("+---- ", PatternScore::OPPONENT_CLOSED_FOUR),
        (" +++ ", PatternScore::OPEN_THREE),
        (" +++-", PatternScore::CLOSED_THREE),
        (" --- ", PatternScore::OPPONENT_OPEN_THREE),
        (" ---+", PatternScore::OPPONENT_CLOSED_THREE),
        (" ++ ", PatternScore::OPEN_TWO),
        (" -- ", PatternScore::OPPONENT_OPEN_TWO),
    ])
});

/// Score for a single normalized substring (zero if not a known pattern)
#[inline]
pub fn pattern_score(pattern: &str) -> i64 {
    PATTERN_TABLE.get(pattern).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR * 10);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR * 10);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE * 10);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_opponent_shapes_are_negative() {
        for (pattern, score) in PATTERN_TABLE.iter() {
            if pattern.contains('-') && !pattern.contains('+') {
                assert!(*score < 0, "{pattern:?} should be negative");
            }
        }
        assert!(PatternScore::OPPONENT_FIVE.abs() > PatternScore::OPPONENT_OPEN_FOUR.abs());
    }

    #[test]
    fn test_pattern_lengths_in_range() {
        for pattern in PATTERN_TABLE.keys() {
            assert!((MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&pattern.len()));
        }
    }

    #[test]
    fn test_unknown_pattern_scores_zero() {
        assert_eq!(pattern_score("+-+-"), 0);
        assert_eq!(pattern_score("    "), 0);
        assert_eq!(pattern_score(" ++ "), PatternScore::OPEN_TWO);
    }
}
