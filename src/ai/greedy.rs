use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::StrategyError;
use crate::game::{Move, Position};

use super::eval::{piece_counts, weakest_board};
use super::strategy::Strategy;

/// Upper bound on the opponent's piece count plus slack, so scores stay positive.
const BASE_SCORE: i32 = 20;
/// Weight of the opponent's weakest board relative to one piece anywhere.
const WEAKEST_WEIGHT: i32 = 2;
/// Scale applied to everything except the jitter.
const MULTIPLIER: i32 = 100;

/// One-ply greedy player: minimise the opponent's material, pressing hardest
/// on the board closest to being cleared.
pub struct GreedyStrategy<R = StdRng> {
    rng: R,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        GreedyStrategy {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> GreedyStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        GreedyStrategy { rng }
    }

    /// Score a position reached by our move; the side to move is the opponent.
    fn score(&mut self, position: &Position) -> i32 {
        let opponent = position.turn();
        let counts = piece_counts(position, opponent);
        let weakest = weakest_board(&counts, opponent, false);

        let total: usize = counts.iter().sum();
        let mut score = BASE_SCORE - total as i32 - WEAKEST_WEIGHT * counts[weakest] as i32;
        score *= MULTIPLIER;

        if opponent.is_home_board(weakest) {
            score += MULTIPLIER / 2;
        }
        score + self.rng.random_range(0..MULTIPLIER / 2)
    }
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Strategy for GreedyStrategy<R> {
    fn choose_move(&mut self, position: &Position) -> Result<Move, StrategyError> {
        let moves = position.legal_moves(position.turn());
        let Some(&first) = moves.first() else {
            return Err(StrategyError::NoLegalMoves(position.turn()));
        };

        let mut scratch = *position;
        let mut best_move = first;
        let mut best_score = i32::MIN;

        for &mv in &moves {
            let data = scratch.apply(mv)?;
            let score = self.score(&scratch);
            scratch.reverse(mv, data);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        debug!(mv = %best_move, score = best_score, candidates = moves.len(), "greedy move");
        Ok(best_move)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
