//! Legal move enumeration and the move-builder projections.

use crate::error::GameError;

use super::board::{Coordinate, Vector, BOARDS, DIRECTIONS};
use super::moves::Move;
use super::position::Position;
use super::Color;

/// How aggressive candidates are admitted for a board pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// Any legal aggressive move, magnitude 2 filtered from the magnitude 1 survivors
    All,
    /// Only aggressive moves that push, which a passive move with the same
    /// vector could not make
    PushingOnly,
}

impl Position {
    /// Every legal move for `color`.
    ///
    /// Four board pairs are scanned independently so the same logical move
    /// can appear more than once.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        self.for_each_move(color, true, &mut |mv| {
            moves.push(mv);
            true
        });
        moves
    }

    /// True when the side to move has at least one legal move
    pub fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.for_each_move(self.turn(), true, &mut |_| {
            found = true;
            false
        });
        found
    }

    /// Pieces on `board` that start at least one legal move, in first-seen order.
    ///
    /// Empty for boards that are not home boards of the side to move.
    pub fn passive_pieces_on(&self, board: usize) -> Vec<Coordinate> {
        if !self.turn().is_home_board(board) {
            return Vec::new();
        }
        let mut pieces = Vec::new();
        for mv in self.builder_moves() {
            if mv.passive.board == board as i32 && !pieces.contains(&mv.passive) {
                pieces.push(mv.passive);
            }
        }
        pieces
    }

    /// Passive destinations reachable by `passive` as part of a legal move
    pub fn destinations_for(&self, board: usize, passive: Coordinate) -> Vec<Coordinate> {
        if passive.board != board as i32 {
            return Vec::new();
        }
        let mut destinations = Vec::new();
        for mv in self.builder_moves() {
            if mv.passive == passive {
                let destination = mv.passive_destination();
                if !destinations.contains(&destination) {
                    destinations.push(destination);
                }
            }
        }
        destinations
    }

    /// Aggressive pieces on `board` that complete a legal move with the given
    /// passive piece and vector
    pub fn aggressive_pieces_for(
        &self,
        board: usize,
        passive: Coordinate,
        vector: Vector,
    ) -> Vec<Coordinate> {
        if passive.side() == (board % 2) as i32 {
            return Vec::new();
        }
        let mut pieces = Vec::new();
        for mv in self.builder_moves() {
            if mv.passive == passive
                && mv.vector == vector
                && mv.aggressive.board == board as i32
                && !pieces.contains(&mv.aggressive)
            {
                pieces.push(mv.aggressive);
            }
        }
        pieces
    }

    /// Copy the position and apply `mv` to the copy
    pub fn clone_with_move_applied(&self, mv: Move) -> Result<Position, GameError> {
        let mut next = *self;
        next.apply(mv)?;
        Ok(next)
    }

    /// Moves for the side to move with every pairing unrestricted
    fn builder_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.for_each_move(self.turn(), false, &mut |mv| {
            moves.push(mv);
            true
        });
        moves
    }

    /// Feed moves to `visit` until it returns false.
    ///
    /// With `restricted` set the own-home pair only yields pushing moves.
    /// Returns false when the visit stopped early.
    fn for_each_move(
        &self,
        color: Color,
        restricted: bool,
        visit: &mut dyn FnMut(Move) -> bool,
    ) -> bool {
        let pieces: Vec<Vec<Coordinate>> = (0..BOARDS)
            .map(|board| {
                self.board(board)
                    .pieces(color)
                    .map(|(row, col)| Coordinate::new(board as i32, row as i32, col as i32))
                    .collect()
            })
            .collect();

        let [home, _] = color.home_boards();
        let [opponent, _] = color.other().home_boards();
        let defensive = if restricted {
            Pairing::PushingOnly
        } else {
            Pairing::All
        };

        let pairs = [
            (home, opponent + 1, Pairing::All),
            (home + 1, opponent, Pairing::All),
            (home + 1, home, defensive),
            (home, home + 1, Pairing::All),
        ];

        pairs.into_iter().all(|(passive_board, aggressive_board, pairing)| {
            self.moves_between(
                color,
                &pieces[passive_board],
                &pieces[aggressive_board],
                pairing,
                visit,
            )
        })
    }

    fn moves_between(
        &self,
        color: Color,
        passives: &[Coordinate],
        aggressives: &[Coordinate],
        pairing: Pairing,
        visit: &mut dyn FnMut(Move) -> bool,
    ) -> bool {
        if passives.is_empty() || aggressives.is_empty() {
            return true;
        }

        for (row_change, col_change) in DIRECTIONS {
            let mut passive_survivors = passives.to_vec();
            let mut aggressive_survivors = aggressives.to_vec();
            for magnitude in 1..=2 {
                let vector = Vector::new(row_change, col_change, magnitude);
                let (passive_set, aggressive_set) = match pairing {
                    Pairing::All => {
                        passive_survivors.retain(|&p| self.is_legal_vector(p, vector));
                        aggressive_survivors
                            .retain(|&a| self.is_aggressive_path_legal(color, a, vector));
                        (passive_survivors.clone(), aggressive_survivors.clone())
                    }
                    Pairing::PushingOnly => {
                        let passive_set = passives
                            .iter()
                            .copied()
                            .filter(|&p| self.is_legal_vector(p, vector))
                            .collect::<Vec<_>>();
                        let aggressive_set = aggressives
                            .iter()
                            .copied()
                            .filter(|&a| {
                                self.is_aggressive_path_legal(color, a, vector)
                                    && !self.is_legal_vector(a, vector)
                            })
                            .collect::<Vec<_>>();
                        (passive_set, aggressive_set)
                    }
                };

                for &passive in &passive_set {
                    for &aggressive in &aggressive_set {
                        if !visit(Move::new(passive, aggressive, vector)) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}
