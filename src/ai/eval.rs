use crate::game::{Color, Position, BOARDS, SIZE};

/// Score for one piece on any board.
pub const PIECE_VALUE: i32 = 100;

/// Own piece on one of its home boards; centre squares are worth more.
pub const SIDE_HOME_VALUES: [[i32; SIZE]; SIZE] = [
    [20, 25, 25, 20],
    [25, 30, 30, 25],
    [25, 30, 30, 25],
    [20, 25, 25, 20],
];

/// Own piece away from home.
pub const SIDE_AWAY_VALUES: [[i32; SIZE]; SIZE] = [
    [20, 30, 30, 20],
    [30, 40, 40, 30],
    [30, 40, 40, 30],
    [20, 30, 30, 20],
];

/// Opposing piece on one of the opponent's home boards.
pub const OPPONENT_HOME_VALUES: [[i32; SIZE]; SIZE] = [
    [-20, -30, -30, -20],
    [-30, -40, -40, -30],
    [-30, -40, -40, -30],
    [-20, -30, -30, -20],
];

/// Opposing piece away from the opponent's home.
pub const OPPONENT_AWAY_VALUES: [[i32; SIZE]; SIZE] = [
    [-20, -25, -25, -20],
    [-25, -30, -30, -25],
    [-25, -30, -30, -25],
    [-20, -25, -25, -20],
];

/// Static evaluation of a position from one color's point of view.
pub trait Heuristic: Send {
    fn evaluate(&self, position: &Position, color: Color) -> i32;
}

/// Material plus the positional tables, no lookahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, position: &Position, color: Color) -> i32 {
        let opponent = color.other();
        let mut score = 0;

        for (index, board) in position.boards().iter().enumerate() {
            for (row, col) in board.pieces(color) {
                score += PIECE_VALUE;
                score += if color.is_home_board(index) {
                    SIDE_HOME_VALUES[row][col]
                } else {
                    SIDE_AWAY_VALUES[row][col]
                };
            }
            for (row, col) in board.pieces(opponent) {
                score -= PIECE_VALUE;
                score += if opponent.is_home_board(index) {
                    OPPONENT_HOME_VALUES[row][col]
                } else {
                    OPPONENT_AWAY_VALUES[row][col]
                };
            }
        }

        score
    }
}

/// Pieces of `color` on each board
pub fn piece_counts(position: &Position, color: Color) -> [usize; BOARDS] {
    let mut counts = [0; BOARDS];
    for (count, board) in counts.iter_mut().zip(position.boards()) {
        *count = board.count(color);
    }
    counts
}

/// Index of the board holding the fewest pieces of `color`.
///
/// The earliest board wins a tie unless `prefer_home` is set, in which case
/// a later tied board that is a home board of `color` takes over.
pub fn weakest_board(counts: &[usize; BOARDS], color: Color, prefer_home: bool) -> usize {
    let mut weakest = 0;
    for index in 1..BOARDS {
        if counts[index] < counts[weakest]
            || (prefer_home && counts[index] == counts[weakest] && color.is_home_board(index))
        {
            weakest = index;
        }
    }
    weakest
}
