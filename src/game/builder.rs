//! Three-click move construction for human players.

use super::board::{Coordinate, Vector};
use super::moves::Move;
use super::position::Position;

/// Progress of a partially built move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Waiting for the passive piece
    #[default]
    Passive,
    /// Passive piece chosen, waiting for its destination
    Destination { passive: Coordinate },
    /// Passive half complete, waiting for the aggressive piece
    Aggressive { passive: Coordinate, vector: Vector },
}

/// Outcome of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Accepted, more input needed
    Progress,
    /// The move is complete and legal; the builder is back at the first stage
    Complete(Move),
    /// Not a valid choice for the current stage; nothing changed
    Rejected,
}

/// Builds a [`Move`] from successive cell selections, validating each one
/// against the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveBuilder {
    stage: Stage,
}

impl MoveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Abandon the partial selection
    pub fn reset(&mut self) {
        self.stage = Stage::Passive;
    }

    /// Feed one clicked cell to the builder.
    ///
    /// The destination click is translated into a vector; it must lie on the
    /// passive piece's board along a straight or diagonal line.
    pub fn select(&mut self, position: &Position, coord: Coordinate) -> Selection {
        match self.stage {
            Stage::Passive => {
                if !position.is_legal_passive(coord) {
                    return Selection::Rejected;
                }
                self.stage = Stage::Destination { passive: coord };
                Selection::Progress
            }
            Stage::Destination { passive } => match Vector::between(passive, coord) {
                Some(vector) if position.is_legal_vector(passive, vector) => {
                    self.stage = Stage::Aggressive { passive, vector };
                    Selection::Progress
                }
                _ => Selection::Rejected,
            },
            Stage::Aggressive { passive, vector } => {
                let mv = Move::new(passive, coord, vector);
                if !position.is_legal_aggressive(&mv) {
                    return Selection::Rejected;
                }
                self.reset();
                Selection::Complete(mv)
            }
        }
    }

    /// Cells on `board` worth highlighting for the current stage
    pub fn choices(&self, position: &Position, board: usize) -> Vec<Coordinate> {
        match self.stage {
            Stage::Passive => position.passive_pieces_on(board),
            Stage::Destination { passive } => position.destinations_for(board, passive),
            Stage::Aggressive { passive, vector } => {
                position.aggressive_pieces_for(board, passive, vector)
            }
        }
    }
}
