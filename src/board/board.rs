//! Board structure with incremental win detection

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::line::{Line, MAX_REACH};
use super::{Direction, Pos, Stone};

/// Game board: an NxN grid of stones with move bookkeeping.
///
/// The winner is only ever computed from the four axes through the most recent
/// placement. Stones are never removed during play, so a five can only be
/// created by the last move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    last_move: Option<Pos>,
    /// Once set, stays set for the lifetime of this board
    winner: Option<Stone>,
    empty_count: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            last_move: None,
            winner: None,
            empty_count: size * size,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Check if signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// No empty cell left and nobody won
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.empty_count == 0 && self.winner.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// No stone placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count == self.cells.len()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len() - self.empty_count
    }

    /// Centre cell, used for the opening move
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Iterate every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Pos::new(i / size, i % size), s))
    }

    /// Occupied cells in row-major order
    pub fn filled_cells(&self) -> Vec<Pos> {
        self.iter()
            .filter(|&(_, s)| s != Stone::Empty)
            .map(|(p, _)| p)
            .collect()
    }

    /// Place a stone and recompute the winner from the lines through it.
    ///
    /// The cell must be empty and on the board; callers validate first
    /// (see [`crate::rules::validate_move`]).
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(stone != Stone::Empty);
        debug_assert!(self.is_empty(pos), "place on occupied cell {pos}");
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.empty_count -= 1;
        self.last_move = Some(pos);
        self.check_winner();
    }

    /// Set a cell without touching the winner, last move or empty count.
    ///
    /// Only for transient probing; the cell must be restored to
    /// `Stone::Empty` afterwards.
    #[inline]
    pub fn place_unchecked(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// Dropping the guard restores the cell, last move, empty count and
    /// winner to their values before the placement.
    pub fn apply(&mut self, pos: Pos, stone: Stone) -> Placement<'_> {
        let prev_last_move = self.last_move;
        let prev_winner = self.winner;
        self.place(pos, stone);
        Placement {
            board: self,
            pos,
            prev_last_move,
            prev_winner,
        }
    }

    /// Window of up to `MAX_REACH` cells on each side of `pos` along `dir`.
    ///
    /// With `same_only`, expansion on each side stops at the first cell whose
    /// value differs from the centre, yielding the contiguous run through `pos`.
    pub fn line_through(&self, pos: Pos, dir: Direction, same_only: bool) -> Line {
        let center = self.get(pos);
        let behind = self.collect_side(pos, dir.opposite(), center, same_only);
        let ahead = self.collect_side(pos, dir, center, same_only);

        let mut cells = Vec::with_capacity(behind.len() + ahead.len() + 1);
        cells.extend(behind.iter().rev());
        cells.push(center);
        cells.extend(ahead);
        Line::new(cells, behind.len())
    }

    fn collect_side(&self, pos: Pos, dir: Direction, center: Stone, same_only: bool) -> Vec<Stone> {
        let mut side = Vec::with_capacity(MAX_REACH);
        for step in 1..=MAX_REACH {
            let Some(next) = pos.offset(dir, step, self.size) else {
                break;
            };
            let stone = self.get(next);
            if same_only && stone != center {
                break;
            }
            side.push(stone);
        }
        side
    }

    fn check_winner(&mut self) {
        let Some(pos) = self.last_move else {
            return;
        };
        for dir in Direction::AXES {
            let line = self.line_through(pos, dir, true);
            if line.has_five(Stone::White) {
                self.winner = Some(Stone::White);
            } else if line.has_five(Stone::Black) {
                self.winner = Some(Stone::Black);
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>3}")?;
            for col in 0..self.size {
                let c = match self.get(Pos::new(row, col)) {
                    Stone::Empty => '.',
                    s => s.to_char(),
                };
                write!(f, "{c:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Scoped placement on a [`Board`], undone on drop.
///
/// Dereferences to the board so search code can recurse on the hypothetical
/// position; every exit path (including pruning breaks) restores the board.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
    prev_last_move: Option<Pos>,
    prev_winner: Option<Stone>,
}

impl Placement<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        let idx = self.board.index(self.pos);
        self.board.cells[idx] = Stone::Empty;
        self.board.empty_count += 1;
        self.board.last_move = self.prev_last_move;
        self.board.winner = self.prev_winner;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}
