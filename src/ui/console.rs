//! Text front-end
//!
//! The human plays Black and moves first, the computer answers as White.
//! Generic over its input and output so games can be scripted in tests.

use std::io::{self, BufRead, Write};

use crate::board::Stone;
use crate::config::{Difficulty, Interface};
use crate::error::GameError;
use crate::game::{Game, Outcome};

const HUMAN: Stone = Stone::Black;
const COMPUTER: Stone = Stone::White;

/// Why a human turn did not produce a move.
enum TurnError {
    /// Input ended
    Eof,
    /// Non-numeric input or a rejected move; the same player is asked again
    Retry(String),
}

impl From<GameError> for TurnError {
    fn from(err: GameError) -> Self {
        TurnError::Retry(err.to_string())
    }
}

pub struct ConsoleUi<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Play until the game ends or input runs out.
    ///
    /// Returns the outcome, or `None` if input ended first.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        let mut human_turn = true;

        while !self.game.is_finished() {
            writeln!(self.output, "{}", self.game.board())?;

            let turn = if human_turn {
                self.human_turn()?
            } else {
                self.game.computer_move(COMPUTER).map(|_| ()).map_err(TurnError::from)
            };

            match turn {
                Ok(()) => human_turn = !human_turn,
                Err(TurnError::Retry(message)) => writeln!(self.output, "{message}")?,
                Err(TurnError::Eof) => return Ok(None),
            }
        }

        writeln!(self.output, "{}", self.game.board())?;
        let outcome = self.game.outcome();
        if let Some(outcome) = outcome {
            writeln!(self.output, "{outcome}")?;
        }
        Ok(outcome)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn human_turn(&mut self) -> io::Result<Result<(), TurnError>> {
        let row = match self.read_number("row>")? {
            Ok(row) => row,
            Err(e) => return Ok(Err(e)),
        };
        let col = match self.read_number("column>")? {
            Ok(col) => col,
            Err(e) => return Ok(Err(e)),
        };
        Ok(self.game.human_move(row, col, HUMAN).map(|_| ()).map_err(TurnError::from))
    }

    fn read_number(&mut self, prompt: &str) -> io::Result<Result<i32, TurnError>> {
        let Some(line) = read_prompted(&mut self.input, &mut self.output, prompt)? else {
            return Ok(Err(TurnError::Eof));
        };
        Ok(line
            .parse()
            .map_err(|_| TurnError::Retry(format!("invalid number: {line:?}"))))
    }
}

/// Print `prompt` and read one trimmed line; `None` at end of input.
fn read_prompted<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until the answer is `1` or `2`; `None` at end of input.
fn ask_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<bool>> {
    loop {
        match read_prompted(input, output, prompt)?.as_deref() {
            None => return Ok(None),
            Some("1") => return Ok(Some(true)),
            Some("2") => return Ok(Some(false)),
            Some(_) => continue,
        }
    }
}

/// Startup menu for the difficulty.
pub fn ask_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Difficulty>> {
    Ok(ask_choice(input, output, "Difficulty (1 - easy or 2 - hard): ")?
        .map(|easy| if easy { Difficulty::Easy } else { Difficulty::Hard }))
}

/// Startup menu for the front-end.
pub fn ask_interface<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Interface>> {
    Ok(
        ask_choice(input, output, "User interface (1 - console or 2 - GUI): ")?
            .map(|console| if console { Interface::Console } else { Interface::Gui }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::config::GameConfig;
    use crate::strategy::{RandomStrategy, Strategy};
    use std::io::Cursor;

    fn run_script(script: &str) -> (Option<Outcome>, String, Game) {
        let game = Game::new(&GameConfig::default(), Box::new(RandomStrategy::with_seed(9)));
        let mut ui = ConsoleUi::new(game, Cursor::new(script.to_string()), Vec::new());
        let outcome = ui.run().unwrap();
        let ConsoleUi { game, output, .. } = ui;
        (outcome, String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn test_eof_ends_cleanly() {
        let (outcome, output, game) = run_script("");
        assert_eq!(outcome, None);
        assert!(output.ends_with("row>"));
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_human_then_computer() {
        let (outcome, output, game) = run_script("5\n5\n");
        assert_eq!(outcome, None);
        assert_eq!(game.board().stone_count(), 2);
        assert_eq!(game.board().get(Pos::new(5, 5)), Stone::Black);
        assert!(output.contains("column>"));
    }

    #[test]
    fn test_errors_are_printed_and_turn_repeats() {
        let (_, output, game) = run_script("abc\n11\n0\n1\n1\n");
        assert!(output.contains("invalid number: \"abc\""));
        assert!(output.contains("row value 11 out of range (0..11)"));
        assert_eq!(game.board().stone_count(), 2);
        assert_eq!(game.board().get(Pos::new(1, 1)), Stone::Black);
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let (_, output, _) = run_script("0\n0\n0\n0\n");
        assert!(output.contains("cell (0, 0) is not empty"));
    }

    /// Fills the board in row-major order.
    struct FirstEmpty;

    impl Strategy for FirstEmpty {
        fn choose_move(&mut self, board: &mut Board, color: Stone) -> Result<Pos, GameError> {
            let pos = board
                .iter()
                .find(|&(_, s)| s == Stone::Empty)
                .map(|(p, _)| p)
                .ok_or(GameError::NoLegalMove)?;
            board.place(pos, color);
            Ok(pos)
        }

        fn name(&self) -> &str {
            "first-empty"
        }
    }

    fn run_against_first_empty(script: &str) -> (Option<Outcome>, String) {
        let game = Game::new(&GameConfig::default(), Box::new(FirstEmpty));
        let mut ui = ConsoleUi::new(game, Cursor::new(script.to_string()), Vec::new());
        let outcome = ui.run().unwrap();
        (outcome, String::from_utf8(ui.output).unwrap())
    }

    #[test]
    fn test_human_wins() {
        let script: String = (0..5).map(|col| format!("10\n{col}\n")).collect();
        let (outcome, output) = run_against_first_empty(&script);
        assert_eq!(outcome, Some(Outcome::Winner(Stone::Black)));
        assert!(output.ends_with("BLACK won the game!\n"));
    }

    #[test]
    fn test_computer_wins() {
        let script: String = [0, 2, 4, 6, 8]
            .iter()
            .map(|col| format!("10\n{col}\n"))
            .collect();
        let (outcome, output) = run_against_first_empty(&script);
        assert_eq!(outcome, Some(Outcome::Winner(Stone::White)));
        assert!(output.ends_with("WHITE won the game!\n"));
    }

    #[test]
    fn test_menu_choices() {
        let mut out = Vec::new();
        let mut input = Cursor::new("x\n1\n2\n");
        assert_eq!(ask_difficulty(&mut input, &mut out).unwrap(), Some(Difficulty::Easy));
        assert_eq!(ask_interface(&mut input, &mut out).unwrap(), Some(Interface::Gui));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Difficulty (1 - easy or 2 - hard): ").count(), 2);

        let mut input = Cursor::new("");
        assert_eq!(ask_interface(&mut input, &mut Vec::new()).unwrap(), None);
    }
}
