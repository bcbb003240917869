use crate::error::GameError;

use super::board::{Board, CellState, Coordinate, Vector, BOARDS, SIZE};
use super::moves::{Move, Push, ReverseData};
use super::Color;

/// Number of codes produced by [`Position::to_codes`]: 64 cells plus the turn.
pub const CODES_LEN: usize = BOARDS * SIZE * SIZE + 1;

/// The four sub-boards and the color to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    boards: [Board; BOARDS],
    turn: Color,
}

impl Position {
    /// Create a position with no pieces, Dark to move
    pub fn new() -> Self {
        Position {
            boards: [Board::new(); BOARDS],
            turn: Color::Dark,
        }
    }

    /// Standard setup: every board has Dark on row 0 and Light on row 3,
    /// Dark moves first
    pub fn standard() -> Self {
        Position {
            boards: [Board::standard(); BOARDS],
            turn: Color::Dark,
        }
    }

    /// Get the state of a cell.
    ///
    /// Panics when `coord` is out of range; the legality predicates check
    /// range before reading.
    pub fn field(&self, coord: Coordinate) -> CellState {
        self.boards[coord.board as usize].get(coord.row as usize, coord.column as usize)
    }

    /// Range-checked read
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        coord.is_valid().then(|| self.field(coord))
    }

    /// Raw write used by deserialization and tests; bypasses the rules
    pub fn set_field(&mut self, coord: Coordinate, cell: CellState) -> Result<(), GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidState(format!(
                "field {coord} does not exist"
            )));
        }
        self.put(coord, cell);
        Ok(())
    }

    /// Get the color to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Raw turn setter; the empty pseudo-color is rejected
    pub fn set_turn(&mut self, cell: CellState) -> Result<(), GameError> {
        match cell.color() {
            Some(color) => {
                self.turn = color;
                Ok(())
            }
            None => Err(GameError::InvalidState(
                "turn has to be Light or Dark".into(),
            )),
        }
    }

    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    pub fn boards(&self) -> &[Board; BOARDS] {
        &self.boards
    }

    /// Total pieces of `color` across all boards
    pub fn count(&self, color: Color) -> usize {
        self.boards.iter().map(|b| b.count(color)).sum()
    }

    /// The winner, if some board has been cleared of one color.
    ///
    /// Boards are scanned in index order and the first cleared board decides.
    pub fn victor(&self) -> Option<Color> {
        for board in &self.boards {
            if board.count(Color::Dark) == 0 {
                return Some(Color::Light);
            }
            if board.count(Color::Light) == 0 {
                return Some(Color::Dark);
            }
        }
        None
    }

    /// In range, holds a piece of the color to move, and lies on one of its
    /// home boards
    pub fn is_legal_passive(&self, coord: Coordinate) -> bool {
        coord.is_valid()
            && self.field(coord) == self.turn.to_cell()
            && self.turn.is_home_board(coord.board as usize)
    }

    /// The vector is well formed and every cell the passive piece crosses,
    /// destination included, is empty
    pub fn is_legal_vector(&self, passive: Coordinate, vector: Vector) -> bool {
        if !passive.is_valid() || !vector.is_valid() {
            return false;
        }
        if !passive.step(vector, vector.magnitude).is_valid() {
            return false;
        }
        (1..=vector.magnitude).all(|step| self.field(passive.step(vector, step)) == CellState::Empty)
    }

    /// The aggressive board has the other side parity, the aggressive cell
    /// holds a piece of the color to move and its path pushes at most one
    /// opposing piece
    pub fn is_legal_aggressive(&self, mv: &Move) -> bool {
        if mv.passive.side() == mv.aggressive.side() {
            return false;
        }
        if !mv.aggressive.is_valid() || self.field(mv.aggressive) != self.turn.to_cell() {
            return false;
        }
        self.is_aggressive_path_legal(self.turn, mv.aggressive, mv.vector)
    }

    /// The sole legality gate
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.is_legal_passive(mv.passive)
            && self.is_legal_vector(mv.passive, mv.vector)
            && self.is_legal_aggressive(mv)
    }

    /// Walk an aggressive path for `color` without any board constraint.
    ///
    /// Once an opposing piece is met the walk extends one cell further, unless
    /// that cell is off the grid (the piece would be pushed off).
    pub(crate) fn is_aggressive_path_legal(
        &self,
        color: Color,
        from: Coordinate,
        vector: Vector,
    ) -> bool {
        if !from.is_valid() || !vector.is_valid() {
            return false;
        }
        if !from.step(vector, vector.magnitude).is_valid() {
            return false;
        }

        let own = color.to_cell();
        let mut pushes = 0;
        let mut step = 1;
        while step <= vector.magnitude + pushes {
            let cell = from.step(vector, step);
            if step <= vector.magnitude || cell.is_valid() {
                match self.field(cell) {
                    CellState::Empty => {}
                    c if c == own => return false,
                    _ => {
                        pushes += 1;
                        if pushes > 1 {
                            return false;
                        }
                    }
                }
            }
            step += 1;
        }
        true
    }

    /// Apply a legal move in place and return the data needed to reverse it
    pub fn apply(&mut self, mv: Move) -> Result<ReverseData, GameError> {
        if !self.is_legal_move(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        let own = self.turn.to_cell();
        let opponent = self.turn.other().to_cell();
        let vector = mv.vector;

        // Passive half never captures
        self.put(mv.passive_destination(), own);
        self.put(mv.passive, CellState::Empty);

        let mut pushed_from = None;
        for step in 1..=vector.magnitude {
            let cell = mv.aggressive.step(vector, step);
            if self.field(cell) == opponent {
                pushed_from = Some(cell);
                self.put(cell, CellState::Empty);
            }
        }

        let push = match pushed_from {
            Some(from) => {
                let landing = mv.aggressive.step(vector, vector.magnitude + 1);
                let to = landing.is_valid().then_some(landing);
                if let Some(to) = to {
                    self.put(to, opponent);
                }
                Some(Push { from, to })
            }
            None => None,
        };

        self.put(mv.aggressive_destination(), own);
        self.put(mv.aggressive, CellState::Empty);

        self.turn = self.turn.other();
        Ok(ReverseData { push })
    }

    /// Undo `apply(mv)` given the data it returned.
    ///
    /// Mismatched data is not detected; callers must pair each move with its
    /// own reverse data.
    pub fn reverse(&mut self, mv: Move, data: ReverseData) {
        self.turn = self.turn.other();
        let own = self.turn.to_cell();

        self.put(mv.passive_destination(), CellState::Empty);
        self.put(mv.passive, own);

        self.put(mv.aggressive_destination(), CellState::Empty);
        self.put(mv.aggressive, own);

        if let Some(push) = data.push {
            self.put(push.from, self.turn.other().to_cell());
            if let Some(to) = push.to {
                self.put(to, CellState::Empty);
            }
        }
    }

    /// Encode as 64 cell codes in board/row/column order followed by the turn
    pub fn to_codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(CODES_LEN);
        for board in &self.boards {
            for row in 0..SIZE {
                for col in 0..SIZE {
                    codes.push(board.get(row, col).code());
                }
            }
        }
        codes.push(self.turn.code());
        codes
    }

    /// Decode the output of [`Position::to_codes`]
    pub fn from_codes(codes: &[u8]) -> Result<Position, GameError> {
        if codes.len() != CODES_LEN {
            return Err(GameError::InvalidState(format!(
                "expected {CODES_LEN} codes, got {}",
                codes.len()
            )));
        }
        let decode = |code: u8| {
            CellState::from_code(code)
                .ok_or_else(|| GameError::InvalidState(format!("unknown cell code {code}")))
        };

        let mut position = Position::new();
        for (index, &code) in codes[..CODES_LEN - 1].iter().enumerate() {
            let coord = Coordinate::new(
                (index / (SIZE * SIZE)) as i32,
                (index / SIZE % SIZE) as i32,
                (index % SIZE) as i32,
            );
            position.set_field(coord, decode(code)?)?;
        }
        position.set_turn(decode(codes[CODES_LEN - 1])?)?;
        Ok(position)
    }

    fn put(&mut self, coord: Coordinate, cell: CellState) {
        self.boards[coord.board as usize].set(coord.row as usize, coord.column as usize, cell);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
