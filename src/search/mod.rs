//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation and ranking
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF};
pub use candidates::{cell_importance, generate_candidates, MAX_CANDIDATES};
