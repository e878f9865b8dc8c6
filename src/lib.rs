//! Gomoku move-recommendation engine
//!
//! Freestyle Gomoku on a 15x15 board:
//! - X moves first, players alternate
//! - Five or more in a row (horizontal, vertical, diagonal) wins
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: Bitboard board representation and move application
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Pattern-based static evaluation
//! - [`search`]: Candidate generation, minimax and alpha-beta
//! - [`engine`]: Move policy (opening, block, search)
//! - [`game`]: Game session with move validation
//! - [`cli`] and [`ui`]: Terminal self-play and the egui frontend
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_move, AIEngine, Board, MoveHistory, Player, Pos};
//!
//! let (board, history) = apply_move(&Board::new(), Pos::new(7, 7), Player::X, &MoveHistory::new());
//!
//! // Engine answers as O
//! let engine = AIEngine::new();
//! if let Some(pos) = engine.get_move(&board, Player::O, &history) {
//!     let (board, _) = apply_move(&board, pos, Player::O, &history);
//!     assert_eq!(board.stone_count(), 2);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Move Policy
//!
//! 1. Empty history: play the center
//! 2. Opponent can complete five on a candidate cell: block it
//! 3. Otherwise: depth-2 alpha-beta over neighborhood candidates

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{apply_move, Board, MoveHistory, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{
    find_best_move, find_best_move_alpha_beta, AIEngine, EngineConfig, MoveResult, SearchKind, SelectionType,
};
pub use error::MoveError;
pub use eval::{evaluate_heuristic, PatternScore, Score};
pub use game::{Game, Outcome};
pub use rules::{is_draw, is_game_over, is_win};
pub use search::{get_valid_moves, minimax, minimax_alpha_beta, SearchResult};
