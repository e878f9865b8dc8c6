//! Heuristic evaluation function for Gomoku board positions
//!
//! Every cell is treated as the origin of a short window in each of the four
//! line directions, once for the evaluating player and once for the
//! opponent. A window looks one cell behind the origin and up to five cells
//! forward, counting the scored side's stones until something else is hit.
//! Overlapping windows are all counted, so a run of four also contributes
//! its three- and two-stone tails.

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::win::DIRECTIONS;

use super::patterns::{PatternScore, Score};

/// Cells inspected forward from each origin
const WINDOW: i32 = 5;

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favor `player`. Runs of the opponent count negatively,
/// and every opponent four with at least one open end costs an extra
/// [`PatternScore::OPEN_FOUR_PENALTY`] so the search treats it as urgent.
///
/// Pure and deterministic.
///
/// # Example
///
/// ```
/// use gomoku::{evaluate_heuristic, Board, Player, Pos};
///
/// let mut board = Board::new();
/// board.place_stone(Pos::new(7, 7), Player::X);
/// board.place_stone(Pos::new(7, 8), Player::X);
///
/// // One open two for X: 100 x 1.5
/// assert_eq!(evaluate_heuristic(&board, Player::X), 150);
/// assert_eq!(evaluate_heuristic(&board, Player::O), -150);
/// ```
#[must_use]
pub fn evaluate_heuristic(board: &Board, player: Player) -> Score {
    let opponent = player.opponent();
    let mut score: Score = 0;

    for idx in 0..TOTAL_CELLS {
        let origin = Pos::from_index(idx);
        for &(dr, dc) in &DIRECTIONS {
            for (role, sign) in [(player, 1), (opponent, -1)] {
                let (count, open_ends) = scan_window(board, origin, dr, dc, role);

                if let Some(base) = PatternScore::base_value(count) {
                    score += sign * PatternScore::with_open_ends(base, open_ends);
                }
                if role == opponent && count == 4 && open_ends >= 1 {
                    score -= PatternScore::OPEN_FOUR_PENALTY;
                }
            }
        }
    }

    score
}

/// Count `role` stones forward from `origin` and the open ends around them.
///
/// The cell behind the origin counts as an open end when empty. The forward
/// walk stops at the board edge, at an opposing stone, or at the first empty
/// cell, which counts as a second open end.
fn scan_window(board: &Board, origin: Pos, dr: i32, dc: i32, role: Player) -> (u32, u32) {
    let mut count = 0;
    let mut open_ends = 0;

    if let Some(behind) = origin.offset(dr, dc, -1) {
        if board.is_empty(behind) {
            open_ends += 1;
        }
    }

    for j in 0..WINDOW {
        let Some(p) = origin.offset(dr, dc, j) else {
            break;
        };
        match board.get(p) {
            Some(s) if s == role => count += 1,
            None => {
                open_ends += 1;
                break;
            }
            Some(_) => break,
        }
    }

    (count, open_ends)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, stones: &[(u8, u8)], player: Player) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), player);
        }
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_heuristic(&board, Player::X), 0);
        assert_eq!(evaluate_heuristic(&board, Player::O), 0);
    }

    #[test]
    fn test_single_stone_scores_zero() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::X);
        assert_eq!(evaluate_heuristic(&board, Player::X), 0);
    }

    #[test]
    fn test_open_three() {
        let mut board = Board::new();
        place(&mut board, &[(7, 6), (7, 7), (7, 8)], Player::X);
        // Three from (7,6) with both ends open: 1500
        // Two from (7,7), stone behind, one open end: 100
        assert_eq!(evaluate_heuristic(&board, Player::X), 1_600);
    }

    #[test]
    fn test_open_four_for_player_has_no_penalty() {
        let mut board = Board::new();
        place(&mut board, &[(7, 1), (7, 2), (7, 3), (7, 4)], Player::X);
        // 10000 * 1.5 + 1000 + 100
        assert_eq!(evaluate_heuristic(&board, Player::X), 16_100);
    }

    #[test]
    fn test_opponent_open_four_penalty() {
        let mut board = Board::new();
        place(&mut board, &[(7, 1), (7, 2), (7, 3), (7, 4)], Player::X);
        // -(15000 + 1000 + 100) - 50000
        assert_eq!(evaluate_heuristic(&board, Player::O), -66_100);
    }

    #[test]
    fn test_opponent_four_with_one_open_end_penalty() {
        let mut board = Board::new();
        // Left end is the board edge, (7,4) is open
        place(&mut board, &[(7, 0), (7, 1), (7, 2), (7, 3)], Player::X);
        // -(10000 + 1000 + 100) - 50000
        assert_eq!(evaluate_heuristic(&board, Player::O), -61_100);
    }

    #[test]
    fn test_blocked_four_scores_nothing_and_no_penalty() {
        let mut board = Board::new();
        place(&mut board, &[(7, 1), (7, 2), (7, 3), (7, 4)], Player::X);
        place(&mut board, &[(7, 0), (7, 5)], Player::O);
        // The X four is closed on both sides; its three- and two-stone tails
        // only see the O stone ahead, so everything X-owned scores zero.
        assert_eq!(evaluate_heuristic(&board, Player::O), 0);
    }

    #[test]
    fn test_vertical_and_diagonal_runs() {
        let mut vertical = Board::new();
        place(&mut vertical, &[(3, 3), (4, 3)], Player::O);
        assert_eq!(evaluate_heuristic(&vertical, Player::O), 150);

        let mut diagonal = Board::new();
        place(&mut diagonal, &[(3, 3), (4, 4)], Player::O);
        assert_eq!(evaluate_heuristic(&diagonal, Player::O), 150);

        let mut anti = Board::new();
        place(&mut anti, &[(3, 5), (4, 4)], Player::O);
        assert_eq!(evaluate_heuristic(&anti, Player::O), 150);
    }

    #[test]
    fn test_last_cell_is_scanned() {
        let mut board = Board::new();
        place(&mut board, &[(14, 13), (14, 14)], Player::O);
        // Edge two from (14, 13): only the cell behind is open
        assert_eq!(evaluate_heuristic(&board, Player::O), 100);
        assert_eq!(evaluate_heuristic(&board, Player::X), -100);
    }

    #[test]
    fn test_full_board_scores_zero() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let player = if (idx / 2) % 2 == 0 { Player::X } else { Player::O };
            board.place_stone(Pos::from_index(idx), player);
        }
        // No empty cell means no open end anywhere
        assert_eq!(evaluate_heuristic(&board, Player::X), 0);
    }

    #[test]
    fn test_antisymmetric_without_fours() {
        let mut board = Board::new();
        place(&mut board, &[(7, 7), (7, 8), (8, 8)], Player::X);
        place(&mut board, &[(6, 6), (5, 5), (9, 9)], Player::O);
        assert_eq!(
            evaluate_heuristic(&board, Player::X),
            -evaluate_heuristic(&board, Player::O)
        );
    }
}
