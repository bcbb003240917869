use serde::{Deserialize, Serialize};

use super::board::{Coordinate, Vector};

/// A complete turn: a passive half and an aggressive half that travel by the
/// same vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub passive: Coordinate,
    pub aggressive: Coordinate,
    pub vector: Vector,
}

impl Move {
    pub const fn new(passive: Coordinate, aggressive: Coordinate, vector: Vector) -> Self {
        Move {
            passive,
            aggressive,
            vector,
        }
    }

    pub fn passive(&self) -> Coordinate {
        self.passive
    }

    pub fn aggressive(&self) -> Coordinate {
        self.aggressive
    }

    pub fn row_change(&self) -> i32 {
        self.vector.row_change
    }

    pub fn col_change(&self) -> i32 {
        self.vector.col_change
    }

    pub fn magnitude(&self) -> i32 {
        self.vector.magnitude
    }

    /// Where the passive piece lands
    pub fn passive_destination(&self) -> Coordinate {
        self.passive.step(self.vector, self.vector.magnitude)
    }

    /// Where the aggressive piece lands
    pub fn aggressive_destination(&self) -> Coordinate {
        self.aggressive.step(self.vector, self.vector.magnitude)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} by ({}, {}) x{}",
            self.passive,
            self.aggressive,
            self.vector.row_change,
            self.vector.col_change,
            self.vector.magnitude
        )
    }
}

/// The opponent piece displaced by an aggressive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Push {
    pub from: Coordinate,
    /// `None` when the piece was pushed off the edge.
    pub to: Option<Coordinate>,
}

/// What `Position::apply` needs to remember so `Position::reverse` can undo
/// exactly that application. Meaningless for any other move or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReverseData {
    pub push: Option<Push>,
}

impl ReverseData {
    pub fn has_push(&self) -> bool {
        self.push.is_some()
    }

    pub fn pushed_from(&self) -> Option<Coordinate> {
        self.push.map(|p| p.from)
    }

    /// True if a piece was pushed and stayed on the board
    pub fn on_board(&self) -> bool {
        self.pushed_to().is_some()
    }

    pub fn pushed_to(&self) -> Option<Coordinate> {
        self.push.and_then(|p| p.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations() {
        let mv = Move::new(
            Coordinate::new(2, 3, 1),
            Coordinate::new(1, 3, 2),
            Vector::new(-1, 1, 1),
        );
        assert_eq!(mv.passive_destination(), Coordinate::new(2, 2, 2));
        assert_eq!(mv.aggressive_destination(), Coordinate::new(1, 2, 3));
    }

    #[test]
    fn test_reverse_data_accessors() {
        let quiet = ReverseData::default();
        assert!(!quiet.has_push());
        assert!(!quiet.on_board());

        let captured = ReverseData {
            push: Some(Push {
                from: Coordinate::new(1, 1, 2),
                to: None,
            }),
        };
        assert!(captured.has_push());
        assert!(!captured.on_board());
        assert_eq!(captured.pushed_from(), Some(Coordinate::new(1, 1, 2)));
    }

    #[test]
    fn test_move_wire_fields() {
        let mv = Move::new(
            Coordinate::new(0, 0, 0),
            Coordinate::new(1, 0, 1),
            Vector::new(1, 1, 2),
        );
        let json = serde_json::to_value(mv).unwrap();
        assert_eq!(json["passive"]["board"], 0);
        assert_eq!(json["aggressive"]["column"], 1);
        assert_eq!(json["vector"]["magnitude"], 2);
        let back: Move = serde_json::from_value(json).unwrap();
        assert_eq!(back, mv);
    }
}
