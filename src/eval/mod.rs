//! Evaluation module for Gomoku positions
//!
//! Contains:
//! - The fixed pattern-score table
//! - The static evaluator used at the search horizon

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_line};
pub use patterns::{pattern_score, PatternScore, PATTERN_TABLE};
