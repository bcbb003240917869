use tracing::trace;

use crate::ai::Strategy;
use crate::error::ArenaError;
use crate::game::{Color, Position};

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// A board lost all pieces of one color
    BoardCleared,
    /// The side to move had nothing legal to play
    NoLegalMoves,
    /// The ply cap was reached first
    PlyLimit,
}

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub end: GameEnd,
    pub plies: usize,
    pub final_position: Position,
}

/// Play `position` out between two strategies.
///
/// A strategy returning an illegal move aborts the game with an error rather
/// than being retried.
pub fn play_game(
    mut position: Position,
    dark: &mut dyn Strategy,
    light: &mut dyn Strategy,
    max_plies: usize,
) -> Result<GameResult, ArenaError> {
    let mut plies = 0;

    let (winner, end) = loop {
        if let Some(winner) = position.victor() {
            break (Some(winner), GameEnd::BoardCleared);
        }
        if !position.has_legal_moves() {
            break (Some(position.turn().other()), GameEnd::NoLegalMoves);
        }
        if plies >= max_plies {
            break (None, GameEnd::PlyLimit);
        }

        let strategy: &mut dyn Strategy = match position.turn() {
            Color::Dark => &mut *dark,
            Color::Light => &mut *light,
        };
        let mv = strategy.choose_move(&position)?;
        if !position.is_legal_move(&mv) {
            return Err(ArenaError::IllegalMove {
                strategy: strategy.name().to_string(),
                mv,
            });
        }
        position.apply(mv)?;
        plies += 1;
        trace!(ply = plies, %mv, "move played");
    };

    Ok(GameResult {
        winner,
        end,
        plies,
        final_position: position,
    })
}
