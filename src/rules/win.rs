//! Terminal detection: five in a row and the full-board draw
//!
//! A line of five consecutive stones in any of the four orientations wins.
//! Longer lines contain a five and therefore win too.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if `player` has five consecutive stones anywhere on the board.
///
/// Every stone of `player` is tried as the origin of a line in all four
/// orientations, which covers every possible five.
pub fn is_win(board: &Board, player: Player) -> bool {
    find_five_positions(board, player).is_some()
}

/// Check if no empty cell remains
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Check if either side has won or the board is full
pub fn is_game_over(board: &Board) -> bool {
    is_win(board, Player::X) || is_win(board, Player::O) || is_draw(board)
}

/// Return the side holding five in a row, X checked first
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_win(board, player))
}

/// Fast five-in-a-row check through a specific position.
///
/// Only walks the four lines through `pos`. After placing a stone at `pos`
/// on a board that held no five, this agrees with [`is_win`].
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, player: Player) -> bool {
    if board.get(pos) != Some(player) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, pos, dr, dc, player);
        let backward = run_length(board, pos, -dr, -dc, player);
        1 + forward + backward >= 5
    })
}

/// Count same-colored stones beyond `pos` along one direction
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    (1..)
        .map_while(|dist| pos.offset(dr, dc, dist))
        .take_while(|&p| board.get(p) == Some(player))
        .count()
}

/// Find the first five-in-a-row of `player`, scanning stones in row-major order
pub fn find_five_positions(board: &Board, player: Player) -> Option<[Pos; 5]> {
    for pos in board.stones(player).iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let mut line = [pos; 5];
            let mut complete = true;
            for (k, slot) in line.iter_mut().enumerate().skip(1) {
                match pos.offset(dr, dc, k as i32) {
                    Some(p) if board.get(p) == Some(player) => *slot = p,
                    _ => {
                        complete = false;
                        break;
                    }
                }
            }
            if complete {
                return Some(line);
            }
        }
    }
    None
}
