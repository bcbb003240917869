use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::StrategyKind;
use crate::arena::ArenaConfig;
use crate::error::ConfigError;

/// Deepest alpha-beta search accepted from configuration.
pub const MAX_SEARCH_DEPTH: usize = 4;

/// Search settings for the minimax strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub minimax_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { minimax_depth: 2 }
    }
}

/// Strategies seated at each color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub dark: StrategyKind,
    pub light: StrategyKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            dark: StrategyKind::Heuristic,
            light: StrategyKind::Greedy,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub arena: ArenaConfig,
    pub search: SearchConfig,
    pub players: PlayersConfig,
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
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.max_plies == 0 {
            return Err(ConfigError::Validation(
                "arena.max_plies must be > 0".into(),
            ));
        }
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.search.minimax_depth) {
            return Err(ConfigError::Validation(format!(
                "search.minimax_depth must be in [1, {MAX_SEARCH_DEPTH}]"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
