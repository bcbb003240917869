use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::StrategyError;
use crate::game::{Move, Position};

use super::strategy::Strategy;

/// Picks uniformly among the enumerated legal moves.
///
/// Duplicated entries in the enumeration weigh proportionally more.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Strategy for RandomStrategy<R> {
    fn choose_move(&mut self, position: &Position) -> Result<Move, StrategyError> {
        let moves = position.legal_moves(position.turn());
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMoves(position.turn()));
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        debug!(%mv, candidates = moves.len(), "random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CellState, Color, Coordinate};

    #[test]
    fn test_random_selects_legal_move() {
        let mut strategy = RandomStrategy::with_rng(StdRng::seed_from_u64(3));
        let position = Position::standard();
        for _ in 0..100 {
            let mv = strategy.choose_move(&position).unwrap();
            assert!(position.is_legal_move(&mv), "Move {mv} is not legal");
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let position = Position::standard();
        let mut a = RandomStrategy::with_rng(StdRng::seed_from_u64(11));
        let mut b = RandomStrategy::with_rng(StdRng::seed_from_u64(11));
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&position).unwrap(),
                b.choose_move(&position).unwrap()
            );
        }
    }

    #[test]
    fn test_random_plays_full_game() {
        let mut dark = RandomStrategy::with_rng(StdRng::seed_from_u64(1));
        let mut light = RandomStrategy::with_rng(StdRng::seed_from_u64(2));
        let mut position = Position::standard();

        for _ in 0..200 {
            if position.victor().is_some() || !position.has_legal_moves() {
                break;
            }
            let mv = match position.turn() {
                Color::Dark => dark.choose_move(&position).unwrap(),
                Color::Light => light.choose_move(&position).unwrap(),
            };
            position.apply(mv).unwrap();
        }
    }

    #[test]
    fn test_no_legal_moves() {
        let mut position = Position::standard();
        for board in 2..4 {
            for col in 0..4 {
                position
                    .set_field(Coordinate::new(board, 2, col), CellState::Dark)
                    .unwrap();
            }
        }
        position.set_turn(CellState::Light).unwrap();
        let mut strategy = RandomStrategy::new();
        assert_eq!(
            strategy.choose_move(&position),
            Err(StrategyError::NoLegalMoves(Color::Light))
        );
    }

    #[test]
    fn test_random_name() {
        assert_eq!(RandomStrategy::new().name(), "Random");
    }
}
