use thiserror::Error;

use crate::games::tictactoe::Player;

/// Rejected game operations. None of them is fatal: the session stays as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the board (expected 0..=8)")]
    InvalidCellIndex(usize),

    #[error("Cell {0} is already occupied")]
    CellAlreadyOccupied(usize),

    #[error("Game is already over")]
    MoveAfterGameOver,

    #[error("Not this player's turn, {expected:?} moves next")]
    OutOfTurn { expected: Player },
}

pub type Result<T> = std::result::Result<T, GameError>;
