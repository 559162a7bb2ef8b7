//! Front-ends
//!
//! [`console`] plays over stdin/stdout; the rest is the egui/eframe GUI.

pub mod console;

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use console::ConsoleUi;
pub use game_state::{GameMode, GameState};
