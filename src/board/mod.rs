//! Board representation for Gomoku

pub mod board;
pub mod line;


// Re-exports
pub use board::{Board, Placement};
pub use line::{Line, MAX_REACH};

/// Default board size (11x11)
pub const DEFAULT_BOARD_SIZE: usize = 11;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character token used by line scans and text rendering
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
            Stone::Empty => ' ',
        }
    }

    /// Upper-case color name for status messages
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "BLACK",
            Stone::White => "WHITE",
            Stone::Empty => "NONE",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `dir`, or `None` when that leaves a `size` board.
    #[inline]
    pub fn offset(self, dir: Direction, steps: usize, size: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i64 + dr as i64 * steps as i64;
        let c = self.col as i64 + dc as i64 * steps as i64;
        if r >= 0 && r < size as i64 && c >= 0 && c < size as i64 {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass directions, clockwise from north.
///
/// Opposite directions describe the same axis, so line scans only use
/// [`Direction::AXES`]; the full set is used for 8-neighbourhood adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Vertical, anti-diagonal, horizontal and diagonal
    pub const AXES: [Direction; 4] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
    ];

    /// Direction for compass index 0-7
    pub fn from_index(idx: usize) -> Option<Direction> {
        Self::ALL.get(idx).copied()
    }

    /// (row, col) change for one step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}
