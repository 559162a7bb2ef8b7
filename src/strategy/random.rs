use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Direction, Pos, Stone};
use crate::error::GameError;

use super::Strategy;

/// Plays next to the previous stone in a random direction.
///
/// Falls back to the first empty cell in row-major order when every
/// neighbour of the last move is taken or off the board.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible strategy for tests
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, board: &Board) -> Option<Pos> {
        if let Some(last) = board.last_move() {
            let mut dirs = Direction::ALL;
            dirs.shuffle(&mut self.rng);
            let near = dirs
                .iter()
                .filter_map(|&dir| last.offset(dir, 1, board.size()))
                .find(|&pos| board.is_empty(pos));
            if near.is_some() {
                return near;
            }
        }
        board
            .iter()
            .find(|&(_, stone)| stone == Stone::Empty)
            .map(|(pos, _)| pos)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &mut Board, color: Stone) -> Result<Pos, GameError> {
        let pos = self.pick(board).ok_or(GameError::NoLegalMove)?;
        debug!(color = color.name(), row = pos.row, col = pos.col, "random move");
        board.place(pos, color);
        Ok(pos)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_next_to_last_move() {
        for seed in 0..20 {
            let mut board = Board::new(11);
            board.place(Pos::new(5, 5), Stone::Black);
            let mut strategy = RandomStrategy::with_seed(seed);

            let pos = strategy.choose_move(&mut board, Stone::White).unwrap();
            assert!(pos.row.abs_diff(5) <= 1 && pos.col.abs_diff(5) <= 1);
            assert_ne!(pos, Pos::new(5, 5));
            assert_eq!(board.get(pos), Stone::White);
        }
    }

    #[test]
    fn test_same_seed_same_move() {
        let mut board = Board::new(11);
        board.place(Pos::new(3, 7), Stone::Black);

        let a = RandomStrategy::with_seed(42).choose_move(&mut board.clone(), Stone::White);
        let b = RandomStrategy::with_seed(42).choose_move(&mut board.clone(), Stone::White);
        assert_eq!(a, b);
    }

    #[test]
    fn test_corner_neighbours_stay_on_board() {
        let mut board = Board::new(11);
        board.place(Pos::new(0, 0), Stone::Black);
        let mut strategy = RandomStrategy::with_seed(7);
        let pos = strategy.choose_move(&mut board, Stone::White).unwrap();
        assert!([Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)].contains(&pos));
    }

    #[test]
    fn test_surrounded_last_move_falls_back_to_row_major() {
        let mut board = Board::new(11);
        for row in 4..7 {
            for col in 4..7 {
                if (row, col) != (5, 5) {
                    board.place(Pos::new(row, col), Stone::White);
                }
            }
        }
        board.place(Pos::new(5, 5), Stone::Black);

        let mut strategy = RandomStrategy::with_seed(1);
        let pos = strategy.choose_move(&mut board, Stone::White).unwrap();
        assert_eq!(pos, Pos::new(0, 0));
    }

    #[test]
    fn test_empty_board_plays_first_cell() {
        let mut board = Board::new(11);
        let mut strategy = RandomStrategy::new();
        assert_eq!(strategy.choose_move(&mut board, Stone::Black), Ok(Pos::new(0, 0)));
    }

    #[test]
    fn test_full_board_is_error() {
        let mut board = Board::new(5);
        for row in 0..5 {
            for col in 0..5 {
                let stone = if (col / 2 + row) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place(Pos::new(row, col), stone);
            }
        }
        let mut strategy = RandomStrategy::with_seed(3);
        assert_eq!(
            strategy.choose_move(&mut board, Stone::Black),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(RandomStrategy::new().name(), "random");
    }
}
