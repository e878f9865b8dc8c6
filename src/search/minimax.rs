//! Plain fixed-depth minimax
//!
//! The maximizing ply plays for the searching player, the minimizing ply for
//! the opponent. A move that completes five returns the win score at once
//! without looking at the remaining siblings.

use crate::board::{Board, MoveHistory, Player, Pos};
use crate::eval::{evaluate_heuristic, PatternScore, Score};
use crate::rules::{has_five_at, is_game_over};

use super::{get_valid_moves, SearchResult, Searcher, INF};

impl Searcher {
    /// Run minimax from `board` for `player`.
    ///
    /// `maximizing` tells whether the first ply moves for `player` (true) or
    /// for the opponent (false).
    #[must_use]
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        player: Player,
        history: &MoveHistory,
    ) -> SearchResult {
        self.nodes = 0;
        let mut work_board = *board;
        let mut work_history = history.clone();

        let (score, best_move) =
            self.minimax_node(&mut work_board, &mut work_history, depth, maximizing, player);

        SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        }
    }

    fn minimax_node(
        &mut self,
        board: &mut Board,
        history: &mut MoveHistory,
        depth: u8,
        maximizing: bool,
        player: Player,
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

            // The position was not over, so any five now runs through `mov`
            if has_five_at(board, mov, mover) {
                board.remove_stone(mov);
                let score = if maximizing { PatternScore::WIN } else { -PatternScore::WIN };
                return (score, Some(mov));
            }

            history.push(mov);
            let (score, _) = self.minimax_node(board, history, depth - 1, !maximizing, player);
            history.pop();
            board.remove_stone(mov);

            let improves = if maximizing { score > best_score } else { score < best_score };
            if improves {
                best_score = score;
                best_move = Some(mov);
            }
        }

        (best_score, best_move)
    }
}

/// Fixed-depth minimax with the default neighborhood radius.
///
/// Returns the score of `board` for `player` and the move that achieves it.
/// At depth 0 or on a finished game the heuristic score comes back with no
/// move; with no candidate moves the score is 0 with no move.
///
/// # Example
///
/// ```
/// use gomoku::{minimax, Board, MoveHistory, Player};
///
/// let result = minimax(&Board::new(), 2, true, Player::X, &MoveHistory::new());
/// assert_eq!(result.score, 0);
/// assert_eq!(result.best_move, None);
/// ```
#[must_use]
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    player: Player,
    history: &MoveHistory,
) -> SearchResult {
    Searcher::default().minimax(board, depth, maximizing, player, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{apply_move, TOTAL_CELLS};

    fn position(stones: &[(u8, u8, Player)]) -> (Board, MoveHistory) {
        let mut board = Board::new();
        let mut history = MoveHistory::new();
        for &(r, c, player) in stones {
            (board, history) = apply_move(&board, Pos::new(r, c), player, &history);
        }
        (board, history)
    }

    #[test]
    fn test_depth_zero_returns_heuristic() {
        let (board, history) = position(&[(7, 7, Player::X), (7, 8, Player::X)]);
        let result = minimax(&board, 0, true, Player::X, &history);
        assert_eq!(result.score, evaluate_heuristic(&board, Player::X));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_finished_game_returns_heuristic() {
        let stones: Vec<_> = (3..8).map(|c| (7, c, Player::O)).collect();
        let (board, history) = position(&stones);
        let result = minimax(&board, 2, true, Player::X, &history);
        assert_eq!(result.score, evaluate_heuristic(&board, Player::X));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_full_board_scores_zero_without_move() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let player = if (idx / 2) % 2 == 0 { Player::X } else { Player::O };
            board.place_stone(Pos::from_index(idx), player);
        }
        let history: MoveHistory = (0..TOTAL_CELLS).map(Pos::from_index).collect();

        for depth in 0..3 {
            let result = minimax(&board, depth, true, Player::X, &history);
            assert_eq!(result.score, 0);
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn test_no_candidates_is_a_draw_line() {
        // Stones on the board but no history to grow candidates from
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::X);
        board.place_stone(Pos::new(7, 8), Player::X);
        let result = minimax(&board, 2, true, Player::X, &MoveHistory::new());
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_maximizer_takes_winning_move() {
        let (board, history) = position(&[
            (7, 3, Player::X),
            (0, 0, Player::O),
            (7, 4, Player::X),
            (0, 14, Player::O),
            (7, 5, Player::X),
            (14, 0, Player::O),
            (7, 6, Player::X),
        ]);
        let result = minimax(&board, 2, true, Player::X, &history);
        assert_eq!(result.score, PatternScore::WIN);
        // (7,2) comes before (7,7) in row-major order
        assert_eq!(result.best_move, Some(Pos::new(7, 2)));
    }

    #[test]
    fn test_minimizer_finds_opponent_win() {
        let (board, history) = position(&[
            (2, 2, Player::O),
            (2, 3, Player::O),
            (2, 4, Player::O),
            (2, 5, Player::O),
            (9, 9, Player::X),
        ]);
        let result = minimax(&board, 1, false, Player::X, &history);
        assert_eq!(result.score, -PatternScore::WIN);
        assert_eq!(result.best_move, Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_depth_one_picks_best_heuristic_move() {
        let (board, history) = position(&[(7, 7, Player::X)]);
        let result = minimax(&board, 1, true, Player::X, &history);
        let moves = get_valid_moves(&board, &history, super::super::DEFAULT_RADIUS);

        let best = moves
            .iter()
            .map(|&m| {
                let (next, _) = apply_move(&board, m, Player::X, &history);
                evaluate_heuristic(&next, Player::X)
            })
            .max()
            .unwrap();
        assert_eq!(result.score, best);

        // The returned move is the first one reaching that score
        let first = moves
            .iter()
            .copied()
            .find(|&m| {
                let (next, _) = apply_move(&board, m, Player::X, &history);
                evaluate_heuristic(&next, Player::X) == best
            })
            .unwrap();
        assert_eq!(result.best_move, Some(first));
        assert_eq!(result.nodes, 1 + moves.len() as u64);
    }

    #[test]
    fn test_search_restores_inputs() {
        let (board, history) = position(&[(7, 7, Player::X), (8, 8, Player::O)]);
        let before_board = board;
        let before_history = history.clone();
        let _ = minimax(&board, 2, true, Player::X, &history);
        assert_eq!(board, before_board);
        assert_eq!(history, before_history);
    }
}
