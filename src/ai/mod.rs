//! Computer players: the [`Strategy`] trait and its four policies.

mod eval;
mod greedy;
mod heuristic;
mod minimax;
mod random;
mod strategy;

pub use eval::{Heuristic, PositionalHeuristic, PIECE_VALUE};
pub use greedy::GreedyStrategy;
pub use heuristic::{HeuristicStrategy, MAX_SCORE};
pub use minimax::{MinimaxStrategy, VICTORY};
pub use random::RandomStrategy;
pub use strategy::{Difficulty, Strategy, StrategyKind};

#[cfg(test)]
pub(crate) mod test_positions {
    use crate::game::{CellState, Coordinate, Position};

    /// One piece of each color per board, Dark to move; Dark wins by pushing
    /// (3, 3, 0) off board 3.
    pub fn sudden_death() -> Position {
        let mut position = Position::new();
        for (b, r, c) in [(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 2, 0)] {
            position
                .set_field(Coordinate::new(b, r, c), CellState::Dark)
                .unwrap();
        }
        for (b, r, c) in [(0, 3, 3), (1, 3, 3), (2, 3, 3), (3, 3, 0)] {
            position
                .set_field(Coordinate::new(b, r, c), CellState::Light)
                .unwrap();
        }
        position
    }

    /// Standard setup with Light to move and every Light piece walled in.
    pub fn light_blocked() -> Position {
        let mut position = Position::standard();
        for board in 2..4 {
            for col in 0..4 {
                position
                    .set_field(Coordinate::new(board, 2, col), CellState::Dark)
                    .unwrap();
            }
        }
        position.set_turn(CellState::Light).unwrap();
        position
    }
}
