use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;
use crate::search::{DEFAULT_DEPTH, MAX_CANDIDATES};

/// Smallest board on which five in a row fits
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the GUI labels (A-S)
pub const MAX_BOARD_SIZE: usize = 19;

/// Computer strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random moves around the last stone
    Easy,
    /// Minimax search
    Hard,
}

/// Front-end to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    Console,
    Gui,
}

/// Search parameters for the minimax strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched
    pub depth: u32,
    /// Candidates kept per node
    pub candidate_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            candidate_limit: MAX_CANDIDATES,
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub search: SearchConfig,
    /// Chosen interactively when absent
    pub difficulty: Option<Difficulty>,
    /// Chosen interactively when absent
    pub interface: Option<Interface>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            search: SearchConfig::default(),
            difficulty: None,
            interface: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [{MIN_BOARD_SIZE}, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.candidate_limit == 0 {
            return Err(ConfigError::Validation(
                "search.candidate_limit must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
