//! Candidate move generation
//!
//! Searching every empty cell is intractable, so each node only considers the
//! empty neighbours of stones already on the board, ranked by how long a run
//! a stone of either color would form there.

use std::collections::BTreeSet;

use crate::board::{Board, Direction, Pos, Stone};

/// Default number of candidates kept per node
pub const MAX_CANDIDATES: usize = 10;

/// Ranked candidate moves for the current position.
///
/// Seeds are every occupied cell, which covers the stones present when the
/// search started as well as the moves placed inside the current branch.
/// Returns at most `limit` empty cells, best first. Ties keep row-major order.
pub fn generate_candidates(board: &mut Board, limit: usize) -> Vec<Pos> {
    let size = board.size();
    let mut cells = BTreeSet::new();
    for seed in board.filled_cells() {
        for dir in Direction::ALL {
            if let Some(next) = seed.offset(dir, 1, size) {
                if board.is_empty(next) {
                    cells.insert(next);
                }
            }
        }
    }

    let mut ranked: Vec<(Pos, u64)> = cells
        .into_iter()
        .map(|pos| (pos, cell_importance(board, pos)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked.into_iter().map(|(pos, _)| pos).collect()
}

/// Connectivity score of an empty cell.
///
/// Probes a White then a Black stone at `pos` and sums the cube of the
/// same-color run length along each axis. Occupied cells score zero.
pub fn cell_importance(board: &mut Board, pos: Pos) -> u64 {
    if !board.is_empty(pos) {
        return 0;
    }
    let mut value = 0;
    for probe in [Stone::White, Stone::Black] {
        board.place_unchecked(pos, probe);
        for dir in Direction::AXES {
            let run = board.line_through(pos, dir, true).len() as u64;
            value += run * run * run;
        }
    }
    board.place_unchecked(pos, Stone::Empty);
    value
}
