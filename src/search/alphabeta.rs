//! Depth-limited minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//!
//! # Features
//!
//! - Candidate pruning: only the top-ranked neighbours of existing stones
//! - Immediate-win short circuit: a winning placement is scored just inside
//!   the bounds instead of being searched further
//! - Apply/undo on a single work board through [`Placement`] guards
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(11);
//! board.place(Pos::new(5, 5), Stone::Black);
//!
//! let mut searcher = Searcher::new(2, 10);
//! let result = searcher.search(&board, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```
//!
//! [`Placement`]: crate::board::Placement

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

use super::candidates::generate_candidates;

/// Bound standing in for infinity; exceeds any reachable heuristic sum.
pub const INF: i64 = 7_000_000_000_000;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Placements tried across the whole tree
    pub nodes: u64,
    /// Static evaluations at depth zero
    pub leaves: u64,
    /// Candidate loops cut short by alpha-beta
    pub cutoffs: u64,
    /// Placements that won on the spot
    pub immediate_wins: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side's point of view
    pub score: i64,
    /// Depth searched
    pub depth: u32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher with a fixed depth and candidate budget.
pub struct Searcher {
    max_depth: u32,
    candidate_limit: usize,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(max_depth: u32, candidate_limit: usize) -> Self {
        Self {
            max_depth,
            candidate_limit,
            stats: SearchStats::default(),
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth;
    }

    /// Search for the best move for `color`.
    ///
    /// Works on a private copy of `board`; the caller's board is untouched.
    /// `best_move` is `None` when no candidate exists.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone) -> SearchResult {
        self.stats = SearchStats::default();
        let mut work_board = board.clone();
        let mut moves_so_far = Vec::with_capacity(self.max_depth as usize);

        let (score, best_move) = self.minimax(
            &mut work_board,
            self.max_depth,
            true,
            -INF,
            INF,
            &mut moves_so_far,
            color,
        );

        debug!(
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            score,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth: self.max_depth,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `color` is the side placing a stone at this ply and the perspective
    /// used for static evaluation at depth zero.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
        moves_so_far: &mut Vec<Pos>,
        color: Stone,
    ) -> (i64, Option<Pos>) {
        if depth == 0 {
            self.stats.leaves += 1;
            return (evaluate(board, color, moves_so_far), None);
        }

        let candidates = generate_candidates(board, self.candidate_limit);
        if candidates.is_empty() {
            // Board filled up inside the tree
            self.stats.leaves += 1;
            return (evaluate(board, color, moves_so_far), None);
        }

        let next = color.opponent();
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for pos in candidates {
            self.stats.nodes += 1;
            let value = {
                let mut child = board.apply(pos, color);
                moves_so_far.push(pos);
                let value = if child.winner().is_some() {
                    self.stats.immediate_wins += 1;
                    if maximizing {
                        INF - 1
                    } else {
                        -INF + 1
                    }
                } else {
                    self.minimax(
                        &mut child,
                        depth - 1,
                        !maximizing,
                        alpha,
                        beta,
                        moves_so_far,
                        next,
                    )
                    .0
                };
                moves_so_far.pop();
                value
            };

            if maximizing {
                if value > best_score {
                    best_score = value;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if value < best_score {
                    best_score = value;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, super::MAX_CANDIDATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Same tree as `Searcher::minimax`, without pruning.
    fn plain_minimax(
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        moves_so_far: &mut Vec<Pos>,
        color: Stone,
    ) -> i64 {
        if depth == 0 {
            return evaluate(board, color, moves_so_far);
        }
        let candidates = generate_candidates(board, super::super::MAX_CANDIDATES);
        if candidates.is_empty() {
            return evaluate(board, color, moves_so_far);
        }
        let mut best = if maximizing { -INF } else { INF };
        for pos in candidates {
            let mut child = board.apply(pos, color);
            moves_so_far.push(pos);
            let value = if child.winner().is_some() {
                if maximizing {
                    INF - 1
                } else {
                    -INF + 1
                }
            } else {
                plain_minimax(&mut child, depth - 1, !maximizing, moves_so_far, color.opponent())
            };
            moves_so_far.pop();
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    fn board_with(size: usize, stones: &[(usize, usize, Stone)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, s) in stones {
            board.place(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_search_empty_board_has_no_move() {
        let mut searcher = Searcher::new(2, 10);
        let board = Board::new(11);
        let result = searcher.search(&board, Stone::Black);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new(2, 10);
        let board = board_with(
            11,
            &[
                (9, 0, Stone::Black),
                (9, 1, Stone::Black),
                (9, 2, Stone::Black),
                (9, 3, Stone::Black),
                (0, 10, Stone::White),
            ],
        );
        let result = searcher.search(&board, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.score, INF - 1);
    }

    #[test]
    fn test_search_completes_broken_four_at_default_depth() {
        let board = board_with(
            11,
            &[
                (1, 1, Stone::White),
                (1, 2, Stone::White),
                (1, 3, Stone::White),
                (1, 5, Stone::White),
            ],
        );
        let mut searcher = Searcher::default();
        assert_eq!(searcher.search(&board, Stone::White).best_move, Some(Pos::new(1, 4)));
        assert_eq!(searcher.search(&board, Stone::Black).best_move, Some(Pos::new(1, 4)));
    }

    #[test]
    fn test_search_does_not_touch_caller_board() {
        let board = board_with(11, &[(5, 5, Stone::Black), (5, 6, Stone::White)]);
        let before = board.clone();
        let mut searcher = Searcher::new(3, 10);
        let _ = searcher.search(&board, Stone::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        let positions = [
            board_with(9, &[(4, 4, Stone::Black)]),
            board_with(9, &[(4, 4, Stone::Black), (4, 5, Stone::White), (3, 3, Stone::Black)]),
            board_with(
                9,
                &[
                    (2, 2, Stone::White),
                    (2, 3, Stone::White),
                    (3, 3, Stone::Black),
                    (4, 4, Stone::Black),
                    (6, 1, Stone::White),
                ],
            ),
        ];
        for board in &positions {
            for depth in 1..=3 {
                for color in [Stone::Black, Stone::White] {
                    let mut searcher = Searcher::new(depth, 10);
                    let pruned = searcher.search(board, color);
                    let mut work = board.clone();
                    let full = plain_minimax(&mut work, depth, true, &mut Vec::new(), color);
                    assert_eq!(pruned.score, full, "depth {depth}, {color:?} to move");
                }
            }
        }
    }

    #[test]
    fn test_pruning_reduces_work() {
        let board = board_with(
            11,
            &[(5, 5, Stone::Black), (5, 6, Stone::White), (4, 4, Stone::Black)],
        );
        let mut searcher = Searcher::new(3, 10);
        let result = searcher.search(&board, Stone::White);
        assert!(result.stats.cutoffs > 0);
        // Full tree at depth 3 with 10 candidates per node visits 1110 placements
        assert!(result.stats.nodes < 1110);
    }

    #[test]
    fn test_search_on_full_board() {
        let mut board = Board::new(5);
        for row in 0..5 {
            for col in 0..5 {
                let stone = if (col / 2 + row) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place(Pos::new(row, col), stone);
            }
        }
        let mut searcher = Searcher::default();
        let result = searcher.search(&board, Stone::Black);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_blocks_closed_four() {
        // Black to move must cover the only open end of White's four
        let board = board_with(
            11,
            &[
                (3, 3, Stone::White),
                (3, 4, Stone::White),
                (3, 5, Stone::White),
                (3, 6, Stone::White),
                (3, 2, Stone::Black),
                (6, 6, Stone::Black),
            ],
        );
        let mut searcher = Searcher::default();
        let result = searcher.search(&board, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(3, 7)));
    }
}
