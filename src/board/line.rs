//! Directional line windows around a cell

use std::fmt;

use super::Stone;

/// Maximum number of cells scanned on each side of the centre cell
pub const MAX_REACH: usize = 7;

/// A window of cells along one axis, centred on the scanned cell.
///
/// Cells are ordered from the far end behind the scan direction, through the
/// centre, to the far end ahead of it. Length is at most `2 * MAX_REACH + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Stone>,
    center: usize,
}

impl Line {
    pub(crate) fn new(cells: Vec<Stone>, center: usize) -> Self {
        debug_assert!(center < cells.len());
        Self { cells, center }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Index of the scanned cell inside the window
    #[inline]
    pub fn center(&self) -> usize {
        self.center
    }

    /// Token string: `B`, `W` and blank
    pub fn tokens(&self) -> String {
        self.cells.iter().map(|s| s.to_char()).collect()
    }

    /// Token string seen from `mover`: own stones `+`, opponent stones `-`.
    pub fn normalized(&self, mover: Stone) -> String {
        self.cells
            .iter()
            .map(|&s| {
                if s == Stone::Empty {
                    ' '
                } else if s == mover {
                    '+'
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Longest contiguous run of `stone` anywhere in the window
    pub fn longest_run(&self, stone: Stone) -> usize {
        let mut best = 0;
        let mut run = 0;
        for &s in &self.cells {
            if s == stone {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    /// Five or more consecutive `stone` cells
    #[inline]
    pub fn has_five(&self, stone: Stone) -> bool {
        stone != Stone::Empty && self.longest_run(stone) >= 5
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens())
    }
}
