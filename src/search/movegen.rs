//! Candidate move generation
//!
//! Candidates are the empty cells within `radius` steps of any played stone
//! along the eight principal directions. Restricting the search to this
//! neighborhood keeps the branching factor proportional to the number of
//! stones instead of the whole board.

use crate::board::{Bitboard, Board, MoveHistory, Pos};

/// Default neighborhood radius
pub const DEFAULT_RADIUS: u8 = 4;

/// The four line axes, each walked in both senses
const NEIGHBOR_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
];

/// Generate candidate moves near the stones in `history`.
///
/// Returns each candidate once, in row-major order. Walks pass over occupied
/// cells (a stone two cells away still makes the cell behind it a candidate)
/// and stop at the board edge. An empty history yields no candidates; the
/// opening move is the caller's business.
///
/// # Example
///
/// ```
/// use gomoku::search::get_valid_moves;
/// use gomoku::{apply_move, Board, MoveHistory, Player, Pos};
///
/// let (board, history) = apply_move(&Board::new(), Pos::new(0, 0), Player::X, &MoveHistory::new());
/// let moves = get_valid_moves(&board, &history, 1);
/// assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
/// ```
#[must_use]
pub fn get_valid_moves(board: &Board, history: &MoveHistory, radius: u8) -> Vec<Pos> {
    let mut candidates = Bitboard::new();

    for played in history.iter() {
        for &(dr, dc) in &NEIGHBOR_DIRECTIONS {
            for dist in 1..=i32::from(radius) {
                let Some(pos) = played.offset(dr, dc, dist) else {
                    break;
                };
                if board.is_empty(pos) {
                    candidates.set(pos);
                }
            }
        }
    }

    candidates.iter_ones().collect()
}
