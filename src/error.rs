use std::path::PathBuf;

/// Errors that can occur when applying a move to a game state.
///
/// All variants are caller-recoverable: a rejected move never alters the
/// state it was attempted on, since moves produce fresh copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..7)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already decided")]
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
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull(2).to_string(),
            "column 2 is full"
        );
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range (expected 0..7)"
        );
        assert_eq!(
            MoveError::GameOver.to_string(),
            "the game is already decided"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.search_depth must be >= 1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.search_depth must be >= 1"
        );
    }
}
