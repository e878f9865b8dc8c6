//! Game session: turn order, move validation and outcome
//!
//! The session is the only place where untrusted coordinates enter. It
//! checks bounds and occupancy before handing a move to
//! [`apply_move`](crate::board::apply_move), which assumes both.
//!
//! # Example
//!
//! ```
//! use gomoku::game::{Game, Outcome};
//! use gomoku::{AIEngine, Player};
//!
//! let mut game = Game::new();
//! let engine = AIEngine::new();
//!
//! let pos = game.validate(7, 7).unwrap();
//! game.play(pos).unwrap();
//! assert_eq!(game.to_move(), Player::O);
//!
//! let result = game.play_ai(&engine).unwrap();
//! assert!(result.best_move.is_some());
//! assert_eq!(game.outcome(), None::<Outcome>);
//! ```

use tracing::{info, instrument, warn};

use crate::board::{apply_move, Board, MoveHistory, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::MoveError;
use crate::rules::{find_five_positions, is_draw, is_win};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// One game in progress. X moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: MoveHistory,
    to_move: Player,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            to_move: Player::X,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last()
    }

    /// The five stones that won the game, if it was won
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.outcome {
            Some(Outcome::Win(player)) => find_five_positions(&self.board, player),
            _ => None,
        }
    }

    /// Check raw coordinates: bounds first, then occupancy.
    pub fn validate(&self, row: i32, col: i32) -> Result<Pos, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(pos)
    }

    /// Play `pos` for the side to move.
    ///
    /// Returns the outcome if this move ended the game. The turn passes to
    /// the other side otherwise.
    #[instrument(level = "debug", skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Pos) -> Result<Option<Outcome>, MoveError> {
        let pos = self.validate(i32::from(pos.row), i32::from(pos.col))?;
        let player = self.to_move;

        (self.board, self.history) = apply_move(&self.board, pos, player, &self.history);
        info!(%player, %pos, move_number = self.history.len(), "move played");

        if is_win(&self.board, player) {
            self.outcome = Some(Outcome::Win(player));
        } else if is_draw(&self.board) {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.to_move = player.opponent();
        }

        if let Some(outcome) = self.outcome {
            info!(?outcome, "game over");
        }
        Ok(self.outcome)
    }

    /// Ask `engine` for a move for the side to move and play it.
    pub fn play_ai(&mut self, engine: &AIEngine) -> Result<MoveResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let result = engine.get_move_with_stats(&self.board, self.to_move, &self.history);
        let pos = result.best_move.ok_or(MoveError::NoMove(self.to_move))?;
        self.play(pos)?;
        Ok(result)
    }

    /// Take back the last `count` moves by replaying the rest of the history.
    pub fn undo(&mut self, count: usize) {
        let keep = self.history.len().saturating_sub(count);
        let moves: Vec<Pos> = self.history.iter().take(keep).collect();

        *self = Game::new();
        for pos in moves {
            if let Err(error) = self.play(pos) {
                warn!(%error, %pos, "history replay stopped");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, SearchKind, SelectionType};

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds() {
        let game = Game::new();
        assert_eq!(
            game.validate(15, 3),
            Err(MoveError::OutOfBounds { row: 15, col: 3 })
        );
        assert_eq!(
            game.validate(-1, 0),
            Err(MoveError::OutOfBounds { row: -1, col: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_occupied() {
        let mut game = Game::new();
        game.play(Pos::new(7, 7)).unwrap();
        assert_eq!(game.validate(7, 7), Err(MoveError::Occupied { row: 7, col: 7 }));
        assert_eq!(
            game.play(Pos::new(7, 7)),
            Err(MoveError::Occupied { row: 7, col: 7 })
        );
        // A rejected move does not pass the turn
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        game.play(Pos::new(7, 7)).unwrap();
        game.play(Pos::new(8, 8)).unwrap();
        assert_eq!(game.board().get(Pos::new(7, 7)), Some(Player::X));
        assert_eq!(game.board().get(Pos::new(8, 8)), Some(Player::O));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.last_move(), Some(Pos::new(8, 8)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for c in 0..4 {
            game.play(Pos::new(0, c)).unwrap();
            game.play(Pos::new(1, c)).unwrap();
        }
        let outcome = game.play(Pos::new(0, 4)).unwrap();
        assert_eq!(outcome, Some(Outcome::Win(Player::X)));
        assert!(game.is_over());
        assert_eq!(game.winning_line().map(|l| l[0]), Some(Pos::new(0, 0)));
        assert_eq!(game.validate(5, 5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_replays_history() {
        let mut game = Game::new();
        game.play(Pos::new(7, 7)).unwrap();
        game.play(Pos::new(7, 8)).unwrap();
        game.play(Pos::new(8, 8)).unwrap();

        game.undo(2);
        assert_eq!(game.history().as_slice(), &[Pos::new(7, 7)]);
        assert_eq!(game.to_move(), Player::O);
        assert!(game.board().is_empty(Pos::new(8, 8)));

        game.undo(5);
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_undo_reopens_won_game() {
        let mut game = Game::new();
        for c in 0..4 {
            game.play(Pos::new(0, c)).unwrap();
            game.play(Pos::new(1, c)).unwrap();
        }
        game.play(Pos::new(0, 4)).unwrap();
        assert!(game.is_over());

        game.undo(1);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.history().len(), 8);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().stone_count(), 8);
        assert_eq!(game.play(Pos::new(0, 4)), Ok(Some(Outcome::Win(Player::X))));
    }

    #[test]
    fn test_ai_opens_at_center_and_blocks() {
        let engine = AIEngine::with_config(EngineConfig {
            kind: SearchKind::AlphaBeta,
            depth: 1,
            radius: 4,
        });
        let mut game = Game::new();

        let result = game.play_ai(&engine).unwrap();
        assert_eq!(result.selection, SelectionType::Opening);
        assert_eq!(game.last_move(), Some(Pos::new(7, 7)));

        // O threatens five along row 0 while X wanders
        for (o, x) in [((0, 0), (14, 14)), ((0, 1), (14, 12)), ((0, 2), (12, 14))] {
            game.play(Pos::new(o.0, o.1)).unwrap();
            game.play(Pos::new(x.0, x.1)).unwrap();
        }
        game.play(Pos::new(0, 3)).unwrap();

        let result = game.play_ai(&engine).unwrap();
        assert_eq!(result.selection, SelectionType::Block);
        assert_eq!(game.last_move(), Some(Pos::new(0, 4)));
    }
}
