//! Game rules for freestyle Gomoku
//!
//! Five in a row in any orientation wins; a full board without a winner is
//! a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five_positions, has_five_at, is_draw, is_game_over, is_win};
