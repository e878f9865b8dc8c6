//! Board structure and move history

use super::bitboard::Bitboard;
use super::{Player, Pos, TOTAL_CELLS};

/// Game board: one bitboard per side.
///
/// The board is `Copy` (64 bytes), so applying a move can hand out a fresh
/// value while leaving the caller's board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// X stones bitboard
    pub x: Bitboard,
    /// O stones bitboard
    pub o: Bitboard,
}

impl Board {
    /// Create an empty 15x15 board
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get the occupant of a position, `None` if empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        if self.x.get(pos) {
            Some(Player::X)
        } else if self.o.get(pos) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a stone in place. The cell must be empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        match player {
            Player::X => self.x.set(pos),
            Player::O => self.o.set(pos),
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(&self.o)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Value-semantics move application, see [`apply_move`].
    #[must_use]
    pub fn apply_move(&self, pos: Pos, player: Player, history: &MoveHistory) -> (Board, MoveHistory) {
        apply_move(self, pos, player, history)
    }
}

/// Ordered sequence of the moves played so far.
///
/// No coordinate appears twice and the length never exceeds the cell count,
/// as long as moves only go onto empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveHistory {
    moves: Vec<Pos>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recent move
    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.moves.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.moves.iter().copied()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.moves
    }

    pub(crate) fn push(&mut self, pos: Pos) {
        debug_assert!(self.moves.len() < TOTAL_CELLS);
        self.moves.push(pos);
    }

    pub(crate) fn pop(&mut self) -> Option<Pos> {
        self.moves.pop()
    }
}

impl FromIterator<Pos> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Apply `pos` for `player`, returning the new board and the history with
/// `pos` appended. Neither input is modified.
///
/// The target cell must be in bounds and empty. That is checked upstream:
/// the engine only applies moves it generated itself, and the game session
/// validates human input before calling this.
///
/// # Example
///
/// ```
/// use gomoku::{apply_move, Board, MoveHistory, Player, Pos};
///
/// let board = Board::new();
/// let history = MoveHistory::new();
/// let (next, next_history) = apply_move(&board, Pos::new(7, 7), Player::X, &history);
///
/// assert_eq!(next.get(Pos::new(7, 7)), Some(Player::X));
/// assert_eq!(next_history.last(), Some(Pos::new(7, 7)));
/// assert!(board.is_board_empty());
/// ```
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, player: Player, history: &MoveHistory) -> (Board, MoveHistory) {
    let mut new_board = *board;
    new_board.place_stone(pos, player);
    let mut new_history = history.clone();
    new_history.push(pos);
    (new_board, new_history)
}
