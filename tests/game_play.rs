//! Whole games through the public API.

use gomoku::rules::winning_line;
use gomoku::{
    AIEngine, Board, Difficulty, Game, GameConfig, GameError, Outcome, Pos, RandomStrategy, Stone,
    Strategy,
};

fn play_out(board: &mut Board, black: &mut dyn Strategy, white: &mut dyn Strategy) -> Outcome {
    let mut color = Stone::Black;
    loop {
        if let Some(winner) = board.winner() {
            return Outcome::Winner(winner);
        }
        if board.is_draw() {
            return Outcome::Draw;
        }
        let player: &mut dyn Strategy = if color == Stone::Black { &mut *black } else { &mut *white };
        let pos = player.choose_move(board, color).expect("board has an empty cell");
        assert_eq!(board.get(pos), color);
        color = color.opponent();
    }
}

#[test]
fn minimax_fills_the_gap_for_either_side() {
    let mut board = Board::new(11);
    for col in [1, 2, 3, 5] {
        board.place(Pos::new(1, col), Stone::White);
    }

    let mut engine = AIEngine::new();
    let mut for_black = board.clone();
    assert_eq!(engine.choose_move(&mut for_black, Stone::Black), Ok(Pos::new(1, 4)));

    let mut for_white = board.clone();
    assert_eq!(engine.choose_move(&mut for_white, Stone::White), Ok(Pos::new(1, 4)));
    assert_eq!(for_white.winner(), Some(Stone::White));
}

#[test]
fn random_move_becomes_last_move() {
    let mut board = Board::new(11);
    board.place(Pos::new(1, 1), Stone::White);
    let mut strategy = RandomStrategy::with_seed(2024);
    let pos = strategy.choose_move(&mut board, Stone::Black).unwrap();
    assert_eq!(board.last_move(), Some(pos));
}

#[test]
fn random_self_play_reaches_an_outcome() {
    for seed in 0..5 {
        let mut board = Board::new(7);
        let mut black = RandomStrategy::with_seed(seed);
        let mut white = RandomStrategy::with_seed(seed + 100);
        let outcome = play_out(&mut board, &mut black, &mut white);

        match outcome {
            Outcome::Winner(stone) => {
                let line = winning_line(&board).expect("winner has a line");
                assert!(line.len() >= 5);
                assert!(line.iter().all(|&p| board.get(p) == stone));
            }
            Outcome::Draw => assert!(board.is_full()),
        }
    }
}

#[test]
fn minimax_against_random_finishes() {
    let mut board = Board::new(9);
    let mut engine = AIEngine::with_config(2, 8);
    let mut random = RandomStrategy::with_seed(7);
    let outcome = play_out(&mut board, &mut engine, &mut random);

    // Black opens in the centre
    assert_eq!(board.get(Pos::new(4, 4)), Stone::Black);
    match outcome {
        Outcome::Winner(stone) => assert_eq!(board.winner(), Some(stone)),
        Outcome::Draw => assert!(board.is_full()),
    }
}

#[test]
fn game_facade_human_against_hard() {
    let config = GameConfig {
        board_size: 9,
        ..GameConfig::default()
    };
    let strategy = Difficulty::Hard.strategy(&config.search);
    let mut game = Game::new(&config, strategy);

    game.human_move(4, 4, Stone::Black).unwrap();
    let reply = game.computer_move(Stone::White).unwrap();
    assert_ne!(reply, Pos::new(4, 4));
    assert!(reply.row.abs_diff(4) <= 1 && reply.col.abs_diff(4) <= 1);

    assert_eq!(
        game.human_move(reply.row as i32, reply.col as i32, Stone::Black),
        Err(GameError::CellOccupied {
            row: reply.row,
            col: reply.col
        })
    );
    assert!(!game.is_finished());
    assert_eq!(game.outcome(), None);
}

#[test]
fn computer_on_full_board_reports_no_move() {
    let mut board = Board::new(5);
    for row in 0..5 {
        for col in 0..5 {
            let stone = if (col / 2 + row) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(Pos::new(row, col), stone);
        }
    }
    assert!(board.is_draw());

    let mut engine = AIEngine::new();
    assert_eq!(engine.choose_move(&mut board, Stone::Black), Err(GameError::NoLegalMove));
    let mut random = RandomStrategy::new();
    assert_eq!(random.choose_move(&mut board, Stone::White), Err(GameError::NoLegalMove));
}
