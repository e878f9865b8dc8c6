//! Move selection policy wrapping the search
//!
//! The engine picks a move in three steps:
//!
//! 1. **Opening**: with no moves played, take the center of the board
//! 2. **Block**: if the opponent could complete five on any candidate cell,
//!    take the first such cell in row-major order
//! 3. **Search**: otherwise run a fixed-depth minimax (plain or alpha-beta)
//!
//! The search already prefers the engine's own immediate win through its
//! win short-circuit, so there is no separate self-win check. Note the order:
//! an available block is played even when the engine could win on the spot.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, MoveHistory, Player, Pos};
//!
//! let engine = AIEngine::new();
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::X, &MoveHistory::new());
//! assert_eq!(result.best_move, Some(Pos::new(7, 7)));
//! println!("Selection: {:?}", result.selection);
//! ```

use std::fmt;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, MoveHistory, Player, Pos};
use crate::eval::Score;
use crate::rules::is_win;
use crate::search::{get_valid_moves, Searcher, DEFAULT_RADIUS};

/// Which search variant the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Plain minimax, every node expanded
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Minimax => write!(f, "minimax"),
            SearchKind::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Engine configuration.
///
/// The default is the reference policy: alpha-beta, depth 2, radius 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search variant
    pub kind: SearchKind,
    /// Search depth in plies
    pub depth: u8,
    /// Candidate neighborhood radius
    pub radius: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: SearchKind::AlphaBeta,
            depth: 2,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// Which step of the policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionType {
    /// First move of the game, played at the center
    Opening,
    /// Blocks an immediate five of the opponent
    Block,
    /// Result of the minimax search
    Search(SearchKind),
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Search score, 0 for opening and blocking moves
    pub score: Score,
    /// Policy step that produced the move
    pub selection: SelectionType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(time_ms: u64) -> Self {
        Self {
            best_move: Some(Pos::center()),
            score: 0,
            selection: SelectionType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            selection: SelectionType::Block,
            time_ms,
            nodes: 0,
        }
    }
}

/// Gomoku move-selection engine.
///
/// Stateless between calls apart from its configuration, so one engine can
/// serve both sides of a game.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{AIEngine, EngineConfig, SearchKind};
    ///
    /// let engine = AIEngine::with_config(EngineConfig {
    ///     kind: SearchKind::Minimax,
    ///     depth: 1,
    ///     radius: 2,
    /// });
    /// assert_eq!(engine.config().depth, 1);
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Shorthand for the default configuration with a given search kind
    #[must_use]
    pub fn with_kind(kind: SearchKind) -> Self {
        Self::with_config(EngineConfig {
            kind,
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the search depth.
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Get the best move for `player`, or `None` if no move is available.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player, history: &MoveHistory) -> Option<Pos> {
        self.get_move_with_stats(board, player, history).best_move
    }

    /// Get the best move with the policy step and search statistics.
    #[must_use]
    #[instrument(level = "debug", skip(self, board, history), fields(kind = %self.config.kind, moves = history.len()))]
    pub fn get_move_with_stats(&self, board: &Board, player: Player, history: &MoveHistory) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = || start.elapsed().as_millis() as u64;

        // 1. Opening move
        if history.is_empty() {
            debug!("empty history, opening at center");
            return MoveResult::opening(elapsed_ms());
        }

        // 2. Block an immediate five of the opponent
        if let Some(block) = self.find_block(board, player, history) {
            debug!(%block, "blocking opponent five");
            return MoveResult::block(block, elapsed_ms());
        }

        // 3. Fixed-depth search, maximizing for `player`
        let mut searcher = Searcher::new(self.config.radius);
        let result = match self.config.kind {
            SearchKind::Minimax => searcher.minimax(board, self.config.depth, true, player, history),
            SearchKind::AlphaBeta => searcher.alpha_beta(board, self.config.depth, true, player, history),
        };

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            selection: SelectionType::Search(self.config.kind),
            time_ms: elapsed_ms(),
            nodes: result.nodes,
        }
    }

    /// First candidate cell on which the opponent would complete five.
    ///
    /// Does not rank several blocks against each other.
    fn find_block(&self, board: &Board, player: Player, history: &MoveHistory) -> Option<Pos> {
        let opponent = player.opponent();
        get_valid_moves(board, history, self.config.radius)
            .into_iter()
            .find(|&mov| {
                let mut test_board = *board;
                test_board.place_stone(mov, opponent);
                is_win(&test_board, opponent)
            })
    }
}

/// Best move using plain minimax at the reference depth.
///
/// # Example
///
/// ```
/// use gomoku::{find_best_move, Board, MoveHistory, Player, Pos};
///
/// let best = find_best_move(&Board::new(), Player::X, &MoveHistory::new());
/// assert_eq!(best, Some(Pos::new(7, 7)));
/// ```
#[must_use]
pub fn find_best_move(board: &Board, player: Player, history: &MoveHistory) -> Option<Pos> {
    AIEngine::with_kind(SearchKind::Minimax).get_move(board, player, history)
}

/// Best move using alpha-beta minimax at the reference depth.
#[must_use]
pub fn find_best_move_alpha_beta(board: &Board, player: Player, history: &MoveHistory) -> Option<Pos> {
    AIEngine::with_kind(SearchKind::AlphaBeta).get_move(board, player, history)
}
