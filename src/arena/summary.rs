use serde::Serialize;

use crate::game::Color;

use super::game::{GameEnd, GameResult};

/// Outcome of one game from the match's point of view.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub first_color: Color,
    pub winner: Option<Color>,
    pub end: GameEnd,
    pub plies: usize,
}

/// Aggregated results of a match between two strategies.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub first: String,
    pub second: String,
    pub first_wins: usize,
    pub second_wins: usize,
    pub unfinished: usize,
    pub games: Vec<GameSummary>,
}

impl MatchSummary {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        MatchSummary {
            first: first.into(),
            second: second.into(),
            first_wins: 0,
            second_wins: 0,
            unfinished: 0,
            games: Vec::new(),
        }
    }

    /// Record a game in which the first strategy played `first_color`
    pub fn record(&mut self, result: &GameResult, first_color: Color) {
        match result.winner {
            Some(color) if color == first_color => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.unfinished += 1,
        }
        self.games.push(GameSummary {
            first_color,
            winner: result.winner,
            end: result.end,
            plies: result.plies,
        });
    }

    pub fn total_games(&self) -> usize {
        self.games.len()
    }

    /// Share of all games won by the first strategy
    pub fn first_win_rate(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.first_wins as f64 / self.games.len() as f64
    }

    /// Share of all games won by the second strategy
    pub fn second_win_rate(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.second_wins as f64 / self.games.len() as f64
    }

    /// Average game length in plies
    pub fn average_length(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: usize = self.games.iter().map(|g| g.plies).sum();
        total as f64 / self.games.len() as f64
    }

    /// Games the given color won, whichever strategy played it
    pub fn wins_for_color(&self, color: Color) -> usize {
        self.games
            .iter()
            .filter(|g| g.winner == Some(color))
            .count()
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vs {}: {} games",
            self.first,
            self.second,
            self.total_games()
        )?;
        writeln!(
            f,
            "  {:<10} {:>4} wins ({:.0}%)",
            self.first,
            self.first_wins,
            self.first_win_rate() * 100.0
        )?;
        writeln!(
            f,
            "  {:<10} {:>4} wins ({:.0}%)",
            self.second,
            self.second_wins,
            self.second_win_rate() * 100.0
        )?;
        writeln!(f, "  unfinished {:>4}", self.unfinished)?;
        writeln!(
            f,
            "  dark won {}, light won {}",
            self.wins_for_color(Color::Dark),
            self.wins_for_color(Color::Light)
        )?;
        write!(f, "  average length {:.1} plies", self.average_length())
    }
}
