//! Gomoku against the computer, in the terminal or in a window.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ui::console::{ask_difficulty, ask_interface};
use gomoku::ui::{ConsoleUi, GomokuApp};
use gomoku::{Difficulty, Game, GameConfig, Interface};

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(version, about = "Gomoku against a minimax AI", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Computer strength (asked interactively when not set)
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Front-end (asked interactively when not set)
    #[arg(long, value_enum)]
    interface: Option<Interface>,

    /// Board size
    #[arg(long)]
    board_size: Option<usize>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Log filter, e.g. `debug` or `gomoku=trace`; `RUST_LOG` wins when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.difficulty = cli.difficulty.or(config.difficulty);
    config.interface = cli.interface.or(config.interface);
    config.validate()?;

    println!("\n\n------- GOMOKAI -------");

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let Some(difficulty) = choose(config.difficulty, &mut input, &mut output, ask_difficulty)? else {
        return Ok(());
    };
    config.difficulty = Some(difficulty);
    let Some(interface) = choose(config.interface, &mut input, &mut output, ask_interface)? else {
        return Ok(());
    };

    info!(?difficulty, ?interface, board_size = config.board_size, "starting");

    match interface {
        Interface::Console => {
            let game = Game::new(&config, difficulty.strategy(&config.search));
            let mut ui = ConsoleUi::new(game, input, output);
            ui.run()?;
            Ok(())
        }
        Interface::Gui => {
            drop(input);
            run_gui(config)
        }
    }
}

/// Use the configured value, or ask on the terminal.
fn choose<T, R: BufRead, W: Write>(
    configured: Option<T>,
    input: &mut R,
    output: &mut W,
    ask: fn(&mut R, &mut W) -> io::Result<Option<T>>,
) -> Result<Option<T>> {
    match configured {
        Some(value) => Ok(Some(value)),
        None => Ok(ask(input, output)?),
    }
}

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomokai"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
