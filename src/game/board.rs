use serde::{Deserialize, Serialize};

use super::Color;

/// Number of sub-boards in play.
pub const BOARDS: usize = 4;
/// Rows and columns of a single sub-board.
pub const SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Light,
    Dark,
}

impl CellState {
    /// Numeric code used by persistence: Light = 0, Dark = 1, Empty = 2
    pub fn code(self) -> u8 {
        match self {
            CellState::Light => 0,
            CellState::Dark => 1,
            CellState::Empty => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<CellState> {
        match code {
            0 => Some(CellState::Light),
            1 => Some(CellState::Dark),
            2 => Some(CellState::Empty),
            _ => None,
        }
    }

    /// The color of the piece on this cell, if any
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Light => Some(Color::Light),
            CellState::Dark => Some(Color::Dark),
        }
    }
}

/// Identifies one cell among the four sub-boards.
///
/// Fields are signed so that offsets past the edge can be represented and
/// rejected by the legality predicates instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub board: i32,
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const fn new(board: i32, row: i32, column: i32) -> Self {
        Coordinate { board, row, column }
    }

    /// True when both the board index and the cell are in range
    pub fn is_valid(&self) -> bool {
        (0..BOARDS as i32).contains(&self.board) && on_grid(self.row, self.column)
    }

    /// The coordinate `steps` cells along `vector`'s direction on the same board
    pub fn step(&self, vector: Vector, steps: i32) -> Coordinate {
        Coordinate {
            board: self.board,
            row: self.row + vector.row_change * steps,
            column: self.column + vector.col_change * steps,
        }
    }

    /// Side parity of the board: 0 for the left boards, 1 for the right ones
    pub fn side(&self) -> i32 {
        self.board.rem_euclid(2)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.board, self.row, self.column)
    }
}

/// Check whether a row/column pair lies on a 4x4 board
pub fn on_grid(row: i32, column: i32) -> bool {
    (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&column)
}

/// The eight compass directions as (row_change, col_change).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Direction and length shared by both halves of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub row_change: i32,
    pub col_change: i32,
    pub magnitude: i32,
}

impl Vector {
    pub const fn new(row_change: i32, col_change: i32, magnitude: i32) -> Self {
        Vector {
            row_change,
            col_change,
            magnitude,
        }
    }

    /// Magnitude is 1 or 2 and the direction is one of the eight compass points
    pub fn is_valid(&self) -> bool {
        (1..=2).contains(&self.magnitude)
            && (-1..=1).contains(&self.row_change)
            && (-1..=1).contains(&self.col_change)
            && (self.row_change, self.col_change) != (0, 0)
    }

    /// Derive the vector that leads from `from` to `to` on the same board.
    ///
    /// Only straight or diagonal offsets of length 1 or 2 qualify.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Vector> {
        if from.board != to.board {
            return None;
        }
        let rows = to.row - from.row;
        let cols = to.column - from.column;
        let (r, c) = (rows.abs(), cols.abs());
        let straight_or_diagonal = (r == c && r != 0) || (r * c == 0 && r + c != 0);
        if !straight_or_diagonal {
            return None;
        }
        let magnitude = r.max(c);
        let vector = Vector::new(rows / magnitude, cols / magnitude, magnitude);
        vector.is_valid().then_some(vector)
    }

    /// All 16 candidate vectors: every direction at magnitude 1 and 2
    pub fn all() -> impl Iterator<Item = Vector> {
        DIRECTIONS.into_iter().flat_map(|(row_change, col_change)| {
            (1..=2).map(move |magnitude| Vector::new(row_change, col_change, magnitude))
        })
    }
}

/// A single 4x4 sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[CellState; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; SIZE]; SIZE],
        }
    }

    /// Starting layout: Dark across row 0, Light across row 3
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.cells[0] = [CellState::Dark; SIZE];
        board.cells[SIZE - 1] = [CellState::Light; SIZE];
        board
    }

    /// Get the cell at a specific position
    /// Row 0 is Dark's starting row, row 3 is Light's
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: CellState) {
        self.cells[row][col] = cell;
    }

    /// Number of pieces of `color` on this board
    pub fn count(&self, color: Color) -> usize {
        let cell = color.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// (row, col) of every piece of `color`, in row-major order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cell = color.to_cell();
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[row][col] == cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
