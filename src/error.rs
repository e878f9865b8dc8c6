//! Errors reported by the game session for moves it refuses

use thiserror::Error;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the 15x15 board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("the game is already over")]
    GameOver,
    #[error("no move available for {0}")]
    NoMove(crate::board::Player),
}
