use serde::{Deserialize, Serialize};

use super::board::CellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Get the other color
    pub fn other(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Convert color to the cell state of one of its pieces
    pub fn to_cell(self) -> CellState {
        match self {
            Color::Light => CellState::Light,
            Color::Dark => CellState::Dark,
        }
    }

    /// The two boards this color plays passive moves on
    pub fn home_boards(self) -> [usize; 2] {
        match self {
            Color::Dark => [0, 1],
            Color::Light => [2, 3],
        }
    }

    /// Whether `board` is one of this color's home boards
    pub fn is_home_board(self, board: usize) -> bool {
        self.home_boards().contains(&board)
    }

    /// Numeric code shared with the serialization surface
    pub fn code(self) -> u8 {
        self.to_cell().code()
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Light => "Light",
            Color::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_color() {
        assert_eq!(Color::Light.other(), Color::Dark);
        assert_eq!(Color::Dark.other(), Color::Light);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(Color::Light.name(), "Light");
        assert_eq!(Color::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_home_boards() {
        assert!(Color::Dark.is_home_board(0));
        assert!(Color::Dark.is_home_board(1));
        assert!(!Color::Dark.is_home_board(2));
        assert!(Color::Light.is_home_board(2));
        assert!(Color::Light.is_home_board(3));
        assert!(!Color::Light.is_home_board(1));
        assert!(!Color::Light.is_home_board(4));
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Light.code(), 0);
        assert_eq!(Color::Dark.code(), 1);
    }
}
