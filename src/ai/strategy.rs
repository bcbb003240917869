use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StrategyError};
use crate::game::{Move, Position};

use super::{GreedyStrategy, HeuristicStrategy, MinimaxStrategy, RandomStrategy};

/// Universal interface for computer players.
pub trait Strategy: Send {
    /// Pick a move for the side to move.
    ///
    /// Fails with [`StrategyError::NoLegalMoves`] when the position offers
    /// none; callers are expected to check for a finished game first.
    fn choose_move(&mut self, position: &Position) -> Result<Move, StrategyError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// The available move-selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Greedy,
    Heuristic,
    Minimax,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Minimax => "minimax",
        }
    }

    /// Build a boxed strategy of this kind.
    ///
    /// `depth` only applies to minimax. With a seed the strategy's random
    /// source is reproducible.
    pub fn build(self, depth: usize, seed: Option<u64>) -> Box<dyn Strategy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::with_rng(rng)),
            StrategyKind::Greedy => Box::new(GreedyStrategy::with_rng(rng)),
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::with_rng(rng)),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new(depth)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(StrategyKind::Random),
            "greedy" | "medium" => Ok(StrategyKind::Greedy),
            "heuristic" | "hard" => Ok(StrategyKind::Heuristic),
            "minimax" | "alphabeta" => Ok(StrategyKind::Minimax),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Difficulty levels offered to human players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a difficulty onto its strategy. Minimax has no difficulty label.
    pub fn strategy(self) -> StrategyKind {
        match self {
            Difficulty::Easy => StrategyKind::Random,
            Difficulty::Medium => StrategyKind::Greedy,
            Difficulty::Hard => StrategyKind::Heuristic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("random".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!("Easy".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!("medium".parse::<StrategyKind>().unwrap(), StrategyKind::Greedy);
        assert_eq!("hard".parse::<StrategyKind>().unwrap(), StrategyKind::Heuristic);
        assert_eq!("minimax".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        assert!(matches!(
            "mcts".parse::<StrategyKind>(),
            Err(ConfigError::UnknownStrategy(name)) if name == "mcts"
        ));
    }

    #[test]
    fn difficulty_mapping() {
        assert_eq!(Difficulty::Easy.strategy(), StrategyKind::Random);
        assert_eq!(Difficulty::Medium.strategy(), StrategyKind::Greedy);
        assert_eq!(Difficulty::Hard.strategy(), StrategyKind::Heuristic);
    }

    #[test]
    fn built_strategies_pick_legal_moves() {
        let position = Position::standard();
        for kind in [
            StrategyKind::Random,
            StrategyKind::Greedy,
            StrategyKind::Heuristic,
            StrategyKind::Minimax,
        ] {
            let mut strategy = kind.build(1, Some(7));
            let mv = strategy.choose_move(&position).unwrap();
            assert!(position.is_legal_move(&mv), "{kind} chose {mv}");
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&StrategyKind::Heuristic).unwrap(),
            "\"heuristic\""
        );
        let kind: StrategyKind = serde_json::from_str("\"minimax\"").unwrap();
        assert_eq!(kind, StrategyKind::Minimax);
    }
}
