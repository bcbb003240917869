use std::path::PathBuf;

use crate::game::{Color, Move};

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised when a strategy is asked for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("no legal moves available for {0}")]
    NoLegalMoves(Color),

    #[error("search failed: {0}")]
    Game(#[from] GameError),
}

/// Errors that can occur while driving a game between strategies.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("strategy {strategy} selected illegal move {mv}")]
    IllegalMove { strategy: String, mv: Move },

    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("game error: {0}")]
    Game(#[from] GameError),
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

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown strategy '{0}' (expected random, greedy, hard or minimax)")]
    UnknownStrategy(String),
}
