//! Shobu rules: the four-board position, move legality, apply/reverse,
//! move enumeration and the helpers a front end needs to drive a game.

mod board;
mod builder;
mod color;
mod history;
mod movegen;
mod moves;
mod position;

pub use board::{on_grid, Board, CellState, Coordinate, Vector, BOARDS, DIRECTIONS, SIZE};
pub use builder::{MoveBuilder, Selection, Stage};
pub use color::Color;
pub use history::GameRecord;
pub use moves::{Move, Push, ReverseData};
pub use position::{Position, CODES_LEN};
