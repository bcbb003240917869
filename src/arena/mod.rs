//! Game driver: plays strategies against each other and tallies the results.

mod game;
mod summary;

pub use game::{play_game, GameEnd, GameResult};
pub use summary::{GameSummary, MatchSummary};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::ai::Strategy;
use crate::error::ArenaError;
use crate::game::{Color, Position};

/// Match settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games in a match
    pub games: usize,
    /// Games still undecided after this many plies count as unfinished
    pub max_plies: usize,
    /// Swap colors every game; otherwise the first strategy always plays Dark
    pub alternate_colors: bool,
    /// Seed for the strategies' random sources
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            max_plies: 300,
            alternate_colors: true,
            seed: None,
        }
    }
}

/// Runs matches from the standard setup.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Arena { config }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Color the first strategy plays in game `index`
    pub fn first_color(&self, index: usize) -> Color {
        if self.config.alternate_colors && index % 2 == 1 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Play a full match
    #[instrument(skip_all, fields(first = first.name(), second = second.name(), games = self.config.games))]
    pub fn run(
        &self,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Result<MatchSummary, ArenaError> {
        let mut summary = MatchSummary::new(first.name(), second.name());

        for index in 0..self.config.games {
            let first_color = self.first_color(index);
            let result = match first_color {
                Color::Dark => play_game(Position::standard(), first, second, self.config.max_plies)?,
                Color::Light => play_game(Position::standard(), second, first, self.config.max_plies)?,
            };
            info!(
                game = index + 1,
                first_color = %first_color,
                winner = ?result.winner,
                end = ?result.end,
                plies = result.plies,
                "game finished"
            );
            summary.record(&result, first_color);
        }

        info!(
            first_wins = summary.first_wins,
            second_wins = summary.second_wins,
            unfinished = summary.unfinished,
            "match finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyStrategy, RandomStrategy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alternating_colors() {
        let arena = Arena::new(ArenaConfig::default());
        assert_eq!(arena.first_color(0), Color::Dark);
        assert_eq!(arena.first_color(1), Color::Light);
        assert_eq!(arena.first_color(2), Color::Dark);

        let fixed = Arena::new(ArenaConfig {
            alternate_colors: false,
            ..ArenaConfig::default()
        });
        assert_eq!(fixed.first_color(1), Color::Dark);
    }

    #[test]
    fn test_run_records_every_game() {
        let arena = Arena::new(ArenaConfig {
            games: 4,
            max_plies: 500,
            ..ArenaConfig::default()
        });
        let mut greedy = GreedyStrategy::with_rng(StdRng::seed_from_u64(1));
        let mut random = RandomStrategy::with_rng(StdRng::seed_from_u64(2));
        let summary = arena.run(&mut greedy, &mut random).unwrap();

        assert_eq!(summary.first, "Greedy");
        assert_eq!(summary.second, "Random");
        assert_eq!(summary.total_games(), 4);
        assert_eq!(
            summary.first_wins + summary.second_wins + summary.unfinished,
            4
        );
        let colors: Vec<Color> = summary.games.iter().map(|g| g.first_color).collect();
        assert_eq!(colors, vec![Color::Dark, Color::Light, Color::Dark, Color::Light]);
    }

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config.games, 10);
        assert_eq!(config.max_plies, 300);
        assert!(config.alternate_colors);
        assert_eq!(config.seed, None);
    }
}
