use crate::error::GameError;

use super::moves::{Move, ReverseData};
use super::position::Position;

/// The authoritative position of a game plus its undo/redo history.
///
/// Undo walks back with [`Position::reverse`]; redo replays the undone moves.
#[derive(Debug, Clone)]
pub struct GameRecord {
    position: Position,
    played: Vec<(Move, ReverseData)>,
    undone: Vec<Move>,
}

impl GameRecord {
    pub fn new(position: Position) -> Self {
        GameRecord {
            position,
            played: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Start from the standard setup
    pub fn standard() -> Self {
        Self::new(Position::standard())
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|(mv, _)| *mv)
    }

    /// Apply a move and record it. Clears the redo history.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        let data = self.position.apply(mv)?;
        self.played.push((mv, data));
        self.undone.clear();
        Ok(())
    }

    /// Play `mv` if legal; an illegal move is ignored
    pub fn attempt(&mut self, mv: Move) -> bool {
        self.play(mv).is_ok()
    }

    pub fn can_undo(&self, steps: usize) -> bool {
        steps > 0 && self.played.len() >= steps
    }

    pub fn can_redo(&self, steps: usize) -> bool {
        steps > 0 && self.undone.len() >= steps
    }

    /// Take back `steps` plies. Nothing happens unless all of them are available.
    pub fn undo(&mut self, steps: usize) -> bool {
        if !self.can_undo(steps) {
            return false;
        }
        for _ in 0..steps {
            if let Some((mv, data)) = self.played.pop() {
                self.position.reverse(mv, data);
                self.undone.push(mv);
            }
        }
        true
    }

    /// Replay `steps` undone plies, all or nothing
    pub fn redo(&mut self, steps: usize) -> Result<bool, GameError> {
        if !self.can_redo(steps) {
            return Ok(false);
        }
        for _ in 0..steps {
            if let Some(mv) = self.undone.pop() {
                let data = self.position.apply(mv)?;
                self.played.push((mv, data));
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Color, Coordinate, Vector};

    fn first_move(position: &Position) -> Move {
        position.legal_moves(position.turn())[0]
    }

    #[test]
    fn test_play_and_undo() {
        let mut record = GameRecord::standard();
        assert!(!record.can_undo(1));

        let opening = first_move(record.position());
        record.play(opening).unwrap();
        let reply = first_move(record.position());
        record.play(reply).unwrap();
        assert_eq!(record.moves().collect::<Vec<_>>(), vec![opening, reply]);

        assert!(!record.can_undo(3));
        assert!(!record.undo(3));
        assert_eq!(record.moves().count(), 2);

        assert!(record.undo(2));
        assert_eq!(*record.position(), Position::standard());
        assert!(record.can_redo(2));
    }

    #[test]
    fn test_redo_restores_position() {
        let mut record = GameRecord::standard();
        for _ in 0..4 {
            let mv = first_move(record.position());
            record.play(mv).unwrap();
        }
        let after = *record.position();

        assert!(record.undo(1));
        assert!(record.undo(2));
        assert_eq!(record.position().turn(), Color::Light);
        assert!(!record.redo(4).unwrap());
        assert!(record.redo(3).unwrap());
        assert_eq!(*record.position(), after);
        assert!(!record.can_redo(1));
    }

    #[test]
    fn test_new_move_discards_redo() {
        let mut record = GameRecord::standard();
        let mv = first_move(record.position());
        record.play(mv).unwrap();
        record.undo(1);
        assert!(record.can_redo(1));

        let moves = record.position().legal_moves(Color::Dark);
        record.play(moves[moves.len() - 1]).unwrap();
        assert!(!record.can_redo(1));
    }

    #[test]
    fn test_attempt_rejects_illegal_move() {
        let mut record = GameRecord::standard();
        let illegal = Move::new(
            Coordinate::new(2, 3, 0),
            Coordinate::new(1, 3, 0),
            Vector::new(-1, 0, 1),
        );
        assert!(!record.attempt(illegal));
        assert_eq!(*record.position(), Position::standard());
        assert!(matches!(
            record.play(illegal),
            Err(GameError::IllegalMove(_))
        ));
        assert!(!record.can_undo(1));
    }
}
