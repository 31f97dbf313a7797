use std::path::Path;

use crate::error::ConfigError;

/// Engine knobs: how strong (and how expensive) the greedy player is.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lookahead depth in plies for the greedy player. The search is
    /// full-width, so cost grows as 7^depth; depths beyond 6 get slow.
    pub search_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { search_depth: 4 }
    }
}

/// Settings for AI-vs-AI series runs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of games to play in a series.
    pub games: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig { games: 10 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub series: SeriesConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.search_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.search_depth must be >= 1".into(),
            ));
        }
        if self.series.games == 0 {
            return Err(ConfigError::Validation(
                "series.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
