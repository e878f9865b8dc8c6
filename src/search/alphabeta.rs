//! Minimax with alpha-beta pruning
//!
//! Same tree shape, terminal rules and win short-circuit as
//! [`minimax`](super::minimax), plus the usual `alpha`/`beta` window. For a
//! given move order the root score always matches plain minimax; only the
//! chosen move may differ, and only among moves with equal scores.
//!
//! # Example
//!
//! ```
//! use gomoku::search::{minimax, minimax_alpha_beta, INF};
//! use gomoku::{apply_move, Board, MoveHistory, Player, Pos};
//!
//! let (board, history) = apply_move(&Board::new(), Pos::new(7, 7), Player::X, &MoveHistory::new());
//!
//! let plain = minimax(&board, 2, true, Player::O, &history);
//! let pruned = minimax_alpha_beta(&board, 2, true, Player::O, &history, -INF, INF);
//! assert_eq!(plain.score, pruned.score);
//! assert!(pruned.nodes <= plain.nodes);
//! ```

use crate::board::{Board, MoveHistory, Player, Pos};
use crate::eval::{evaluate_heuristic, PatternScore, Score};
use crate::rules::{has_five_at, is_game_over};

use super::{get_valid_moves, SearchResult, Searcher, INF};

impl Searcher {
    /// Run alpha-beta minimax from `board` for `player` with the full window.
    #[must_use]
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        player: Player,
        history: &MoveHistory,
    ) -> SearchResult {
        self.alpha_beta_window(board, depth, maximizing, player, history, -INF, INF)
    }

    /// Run alpha-beta minimax with an explicit `(alpha, beta)` window.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta_window(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        player: Player,
        history: &MoveHistory,
        alpha: Score,
        beta: Score,
    ) -> SearchResult {
        self.nodes = 0;
        let mut work_board = *board;
        let mut work_history = history.clone();

        let (score, best_move) = self.alpha_beta_node(
            &mut work_board,
            &mut work_history,
            depth,
            maximizing,
            player,
            alpha,
            beta,
        );

        SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta_node(
        &mut self,
        board: &mut Board,
        history: &mut MoveHistory,
        depth: u8,
        maximizing: bool,
        player: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 || is_game_over(board) {
            return (evaluate_heuristic(board, player), None);
        }

        let moves = get_valid_moves(board, history, self.radius);
        if moves.is_empty() {
            return (PatternScore::DRAW, None);
        }

        let mover = if maximizing { player } else { player.opponent() };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            board.place_stone(mov, mover);

            if has_five_at(board, mov, mover) {
                board.remove_stone(mov);
                let score = if maximizing { PatternScore::WIN } else { -PatternScore::WIN };
                return (score, Some(mov));
            }

            history.push(mov);
            let (score, _) =
                self.alpha_beta_node(board, history, depth - 1, !maximizing, player, alpha, beta);
            history.pop();
            board.remove_stone(mov);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                if best_score >= beta {
                    return (best_score, best_move); // Beta cutoff
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                if best_score <= alpha {
                    return (best_score, best_move); // Alpha cutoff
                }
                beta = beta.min(best_score);
            }
        }

        (best_score, best_move)
    }
}

/// Alpha-beta minimax with the default neighborhood radius.
///
/// Call with `alpha = -INF` and `beta = INF` at the root.
#[must_use]
pub fn minimax_alpha_beta(
    board: &Board,
    depth: u8,
    maximizing: bool,
    player: Player,
    history: &MoveHistory,
    alpha: Score,
    beta: Score,
) -> SearchResult {
    Searcher::default().alpha_beta_window(board, depth, maximizing, player, history, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::apply_move;
    use crate::search::minimax;

    fn position(stones: &[(u8, u8, Player)]) -> (Board, MoveHistory) {
        let mut board = Board::new();
        let mut history = MoveHistory::new();
        for &(r, c, player) in stones {
            (board, history) = apply_move(&board, Pos::new(r, c), player, &history);
        }
        (board, history)
    }

    fn assert_same_score(stones: &[(u8, u8, Player)], depth: u8, maximizing: bool, player: Player) {
        let (board, history) = position(stones);
        let plain = minimax(&board, depth, maximizing, player, &history);
        let pruned = minimax_alpha_beta(&board, depth, maximizing, player, &history, -INF, INF);

        assert_eq!(plain.score, pruned.score, "scores differ for {stones:?}");
        assert!(pruned.nodes <= plain.nodes);
        // Whatever move pruning settles on must be worth the same at depth - 1
        if let (Some(a), Some(b)) = (plain.best_move, pruned.best_move) {
            if a != b {
                let mover = if maximizing { player } else { player.opponent() };
                let value = |m: Pos| {
                    let (next, next_history) = apply_move(&board, m, mover, &history);
                    minimax(&next, depth - 1, !maximizing, player, &next_history).score
                };
                assert_eq!(value(a), value(b));
            }
        }
    }

    #[test]
    fn test_matches_minimax_opening() {
        assert_same_score(&[(7, 7, Player::X)], 2, true, Player::O);
    }

    #[test]
    fn test_matches_minimax_middle_game() {
        assert_same_score(
            &[
                (7, 7, Player::X),
                (7, 8, Player::O),
                (8, 8, Player::X),
                (6, 6, Player::O),
            ],
            2,
            true,
            Player::X,
        );
    }

    #[test]
    fn test_matches_minimax_minimizing_root() {
        assert_same_score(
            &[(7, 7, Player::X), (8, 7, Player::O), (7, 9, Player::X)],
            2,
            false,
            Player::O,
        );
    }

    #[test]
    fn test_matches_minimax_depth_one() {
        assert_same_score(&[(3, 3, Player::O), (3, 4, Player::X)], 1, true, Player::X);
    }

    #[test]
    fn test_finds_winning_move() {
        let (board, history) = position(&[
            (10, 2, Player::O),
            (10, 3, Player::O),
            (10, 4, Player::O),
            (10, 5, Player::O),
            (0, 14, Player::X),
        ]);
        let result = minimax_alpha_beta(&board, 2, true, Player::O, &history, -INF, INF);
        assert_eq!(result.score, PatternScore::WIN);
        assert_eq!(result.best_move, Some(Pos::new(10, 1)));
    }

    #[test]
    fn test_prunes_nodes() {
        let (board, history) = position(&[(7, 7, Player::X), (7, 8, Player::O)]);
        let plain = minimax(&board, 2, true, Player::X, &history);
        let pruned = minimax_alpha_beta(&board, 2, true, Player::X, &history, -INF, INF);
        assert!(pruned.nodes < plain.nodes);
    }

    #[test]
    fn test_searcher_reports_nodes() {
        let (board, history) = position(&[(7, 7, Player::X)]);
        let mut searcher = Searcher::new(1);
        let result = searcher.alpha_beta(&board, 1, true, Player::O, &history);
        // Root plus the eight neighbors of the center stone
        assert_eq!(result.nodes, 9);
        assert_eq!(searcher.nodes(), 9);
    }

    #[test]
    fn test_full_board_scores_zero_without_move() {
        let mut board = Board::new();
        for idx in 0..crate::board::TOTAL_CELLS {
            let player = if (idx / 2) % 2 == 0 { Player::X } else { Player::O };
            board.place_stone(Pos::from_index(idx), player);
        }
        let history: MoveHistory = (0..crate::board::TOTAL_CELLS).map(Pos::from_index).collect();
        let result = minimax_alpha_beta(&board, 2, true, Player::O, &history, -INF, INF);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
    }
}
