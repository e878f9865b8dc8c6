//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation restricted to a neighborhood of played stones
//! - Plain fixed-depth minimax
//! - Minimax with alpha-beta pruning
//!
//! Both searches run on a private working copy of the board and history,
//! placing and removing stones around each recursive call. Candidates are
//! enumerated in row-major order, so ties between equally scored moves
//! always resolve to the first such move in that order.

pub mod alphabeta;
pub mod minimax;
pub mod movegen;

pub use alphabeta::minimax_alpha_beta;
pub use minimax::minimax;
pub use movegen::{get_valid_moves, DEFAULT_RADIUS};

use crate::board::Pos;
use crate::eval::Score;

/// Unbounded score for the initial alpha-beta window
pub const INF: Score = Score::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation of the searched position
    pub score: Score,
    /// Best move found, `None` when the position had no continuation
    pub best_move: Option<Pos>,
    /// Total nodes visited
    pub nodes: u64,
}

/// Fixed-depth searcher holding the neighborhood radius and a node counter.
///
/// # Example
///
/// ```
/// use gomoku::search::Searcher;
/// use gomoku::{apply_move, Board, MoveHistory, Player, Pos};
///
/// let (board, history) = apply_move(&Board::new(), Pos::new(7, 7), Player::X, &MoveHistory::new());
/// let mut searcher = Searcher::new(2);
/// let result = searcher.alpha_beta(&board, 1, true, Player::O, &history);
/// assert!(result.best_move.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    radius: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher generating candidates within `radius` of played stones
    #[must_use]
    pub fn new(radius: u8) -> Self {
        Self { radius, nodes: 0 }
    }

    /// Neighborhood radius used for move generation
    #[must_use]
    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}
