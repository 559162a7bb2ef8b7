use std::fmt;
use std::path::PathBuf;

/// Which coordinate of a move was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors surfaced at the move boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{axis} value {value} out of range (0..{size})")]
    InvalidCoordinate { axis: Axis, value: i32, size: usize },

    #[error("cell ({row}, {col}) is not empty")]
    CellOccupied { row: usize, col: usize },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_display() {
        let err = GameError::InvalidCoordinate {
            axis: Axis::Row,
            value: 11,
            size: 11,
        };
        assert_eq!(err.to_string(), "row value 11 out of range (0..11)");

        let err = GameError::InvalidCoordinate {
            axis: Axis::Column,
            value: -1,
            size: 11,
        };
        assert_eq!(err.to_string(), "column value -1 out of range (0..11)");
    }

    #[test]
    fn test_cell_occupied_display() {
        let err = GameError::CellOccupied { row: 1, col: 1 };
        assert_eq!(err.to_string(), "cell (1, 1) is not empty");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
