use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{GameError, StrategyError};
use crate::game::{Color, Move, Position};

use super::eval::{piece_counts, weakest_board, Heuristic, PositionalHeuristic};
use super::strategy::Strategy;

/// Score for a win or a loss; no positional score comes close.
pub const MAX_SCORE: i32 = 10_000_000;
/// Penalty per piece left on the opponent's weakest board.
const WEAKEST: i32 = 10;
/// Bonus when the opponent's weakest board is one of its home boards.
const HOME_BONUS: i32 = 10;
/// Exclusive bound of the jitter, below any positional difference that matters.
const RAND_BOUND: i32 = 5;

/// One-ply player with positional tables and a defensive lookahead: a move
/// that leaves one of our boards at a single piece is vetoed when the
/// opponent could clear that board on the reply.
pub struct HeuristicStrategy<R = StdRng> {
    rng: R,
    tables: PositionalHeuristic,
}

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> HeuristicStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        HeuristicStrategy {
            rng,
            tables: PositionalHeuristic,
        }
    }

    /// Score `position`, reached by a move of `side`. The position is left as found.
    fn score(&mut self, position: &mut Position, side: Color) -> Result<i32, GameError> {
        let opponent = side.other();
        let mut score = self.tables.evaluate(position, side);

        let own_counts = piece_counts(position, side);
        let opp_counts = piece_counts(position, opponent);
        let own_weakest = weakest_board(&own_counts, side, false);
        let opp_weakest = weakest_board(&opp_counts, opponent, true);

        if opp_counts[opp_weakest] == 0 {
            return Ok(MAX_SCORE);
        }

        if own_counts[own_weakest] == 1 {
            for reply in position.legal_moves(position.turn()) {
                let data = position.apply(reply)?;
                let lost = position.victor() == Some(opponent);
                position.reverse(reply, data);
                if lost {
                    return Ok(-MAX_SCORE);
                }
            }
        }

        score -= opp_counts[opp_weakest] as i32 * WEAKEST;
        if opponent.is_home_board(opp_weakest) {
            score += HOME_BONUS;
        }
        Ok(score + self.rng.random_range(0..RAND_BOUND))
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Strategy for HeuristicStrategy<R> {
    fn choose_move(&mut self, position: &Position) -> Result<Move, StrategyError> {
        let side = position.turn();
        let moves = position.legal_moves(side);
        let Some(&first) = moves.first() else {
            return Err(StrategyError::NoLegalMoves(side));
        };

        let mut scratch = *position;
        let mut best_move = first;
        let mut best_score = i32::MIN;

        for &mv in &moves {
            let data = scratch.apply(mv)?;
            let score = self.score(&mut scratch, side)?;
            scratch.reverse(mv, data);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        debug!(mv = %best_move, score = best_score, candidates = moves.len(), "heuristic move");
        Ok(best_move)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::test_positions::{light_blocked, sudden_death};
    use crate::ai::GreedyStrategy;
    use crate::arena::play_game;
    use crate::game::{CellState, Coordinate};

    fn place(position: &mut Position, cell: CellState, coords: &[(i32, i32, i32)]) {
        for &(b, r, c) in coords {
            position.set_field(Coordinate::new(b, r, c), cell).unwrap();
        }
    }

    #[test]
    fn selects_legal_move() {
        let mut strategy = HeuristicStrategy::with_rng(StdRng::seed_from_u64(4));
        let position = Position::standard();
        let mv = strategy.choose_move(&position).unwrap();
        assert!(position.is_legal_move(&mv));
    }

    #[test]
    fn takes_winning_move() {
        let position = sudden_death();
        let mut strategy = HeuristicStrategy::with_rng(StdRng::seed_from_u64(8));
        let mv = strategy.choose_move(&position).unwrap();
        let next = position.clone_with_move_applied(mv).unwrap();
        assert_eq!(next.victor(), Some(Color::Dark));
    }

    #[test]
    fn winning_position_scores_max() {
        let mut position = sudden_death();
        place(&mut position, CellState::Empty, &[(3, 3, 0)]);
        position.set_turn(CellState::Light).unwrap();
        let mut strategy = HeuristicStrategy::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(strategy.score(&mut position, Color::Dark).unwrap(), MAX_SCORE);
    }

    #[test]
    fn losing_reply_is_vetoed() {
        // Light to move can push the lone Dark piece off board 1
        let mut position = Position::new();
        place(
            &mut position,
            CellState::Dark,
            &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)],
        );
        place(
            &mut position,
            CellState::Light,
            &[(0, 3, 3), (1, 1, 0), (2, 3, 3), (3, 3, 3)],
        );
        position.set_turn(CellState::Light).unwrap();
        let before = position;

        let mut strategy = HeuristicStrategy::with_rng(StdRng::seed_from_u64(2));
        assert_eq!(strategy.score(&mut position, Color::Dark).unwrap(), -MAX_SCORE);
        assert_eq!(position, before);

        // Without the threat the score is an ordinary one
        place(&mut position, CellState::Empty, &[(1, 1, 0)]);
        place(&mut position, CellState::Light, &[(1, 3, 3)]);
        let score = strategy.score(&mut position, Color::Dark).unwrap();
        assert!(score.abs() < MAX_SCORE);
    }

    #[test]
    fn no_legal_moves_is_an_error() {
        let mut strategy = HeuristicStrategy::new();
        assert_eq!(
            strategy.choose_move(&light_blocked()),
            Err(StrategyError::NoLegalMoves(Color::Light))
        );
    }

    #[test]
    fn beats_greedy() {
        let games = 20;
        let mut heuristic_wins = 0;

        for game in 0..games {
            let mut heuristic = HeuristicStrategy::with_rng(StdRng::seed_from_u64(game));
            let mut greedy = GreedyStrategy::with_rng(StdRng::seed_from_u64(500 + game));
            let heuristic_color = if game % 2 == 0 { Color::Dark } else { Color::Light };
            let result = if heuristic_color == Color::Dark {
                play_game(Position::standard(), &mut heuristic, &mut greedy, 400).unwrap()
            } else {
                play_game(Position::standard(), &mut greedy, &mut heuristic, 400).unwrap()
            };
            if result.winner == Some(heuristic_color) {
                heuristic_wins += 1;
            }
        }

        let win_rate = heuristic_wins as f64 / games as f64;
        assert!(
            win_rate >= 0.6,
            "Heuristic should beat greedy at least 60% of the time, got {:.0}% ({heuristic_wins}/{games})",
            win_rate * 100.0
        );
    }

    #[test]
    fn name_is_heuristic() {
        assert_eq!(HeuristicStrategy::new().name(), "Heuristic");
    }
}
