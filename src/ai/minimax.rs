use tracing::debug;

use crate::error::{GameError, StrategyError};
use crate::game::{Move, Position};

use super::eval::{Heuristic, PositionalHeuristic};
use super::strategy::Strategy;

/// Score for a decided game; any static evaluation stays well below it.
pub const VICTORY: i32 = 100_000;
const INFINITY: i32 = i32::MAX;

/// Fixed-depth alpha-beta search in negamax form over the apply/reverse chain.
pub struct MinimaxStrategy {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxStrategy {
    /// Depth is counted in plies and clamped to at least one
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(PositionalHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxStrategy {
            depth: depth.max(1),
            heuristic,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn best_move(&self, position: &Position) -> Result<Move, StrategyError> {
        let moves = position.legal_moves(position.turn());
        let Some(&first) = moves.first() else {
            return Err(StrategyError::NoLegalMoves(position.turn()));
        };

        let mut scratch = *position;
        let mut best_move = first;
        let mut alpha = -INFINITY;

        for &mv in &moves {
            let data = scratch.apply(mv)?;
            // Opponent's score is negated
            let score = -self.negamax(&mut scratch, self.depth - 1, -INFINITY, -alpha)?;
            scratch.reverse(mv, data);
            if score > alpha {
                alpha = score;
                best_move = mv;
            }
        }

        debug!(mv = %best_move, score = alpha, depth = self.depth, "minimax move");
        Ok(best_move)
    }

    /// Value of `position` for the side to move. Sooner wins score higher.
    fn negamax(
        &self,
        position: &mut Position,
        depth: usize,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, GameError> {
        let mover = position.turn();
        if let Some(winner) = position.victor() {
            let value = VICTORY + depth as i32;
            return Ok(if winner == mover { value } else { -value });
        }

        if depth == 0 {
            if !position.has_legal_moves() {
                return Ok(-VICTORY);
            }
            return Ok(self.heuristic.evaluate(position, mover));
        }

        let moves = position.legal_moves(mover);
        if moves.is_empty() {
            return Ok(-(VICTORY + depth as i32));
        }

        let mut best = -INFINITY;
        for mv in moves {
            let data = position.apply(mv)?;
            let score = -self.negamax(position, depth - 1, -beta, -alpha)?;
            position.reverse(mv, data);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, position: &Position) -> Result<Move, StrategyError> {
        self.best_move(position)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
