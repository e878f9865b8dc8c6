//! Command-line interface: GUI launcher and headless self-play.

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::board::{Board, Player, Pos, BOARD_SIZE};
use crate::engine::{AIEngine, SearchKind, SelectionType};
use crate::game::{Game, Outcome};

/// Gomoku - 15x15 five-in-a-row against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "15x15 Gomoku with minimax and alpha-beta engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run, the GUI when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Search depth in plies for every engine, at least 1
    #[arg(long, global = true, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..))]
    pub depth: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the graphical board
    Gui {
        /// Side played by the human
        #[arg(long, value_enum, default_value_t = PlayerArg::X)]
        human: PlayerArg,

        /// Let alpha-beta (X) play plain minimax (O)
        #[arg(long)]
        ai_vs_ai: bool,
    },

    /// Play engine against engine in the terminal
    Selfplay {
        /// Engine playing X
        #[arg(long, value_enum, default_value_t = EngineArg::AlphaBeta)]
        x_engine: EngineArg,

        /// Engine playing O
        #[arg(long, value_enum, default_value_t = EngineArg::Minimax)]
        o_engine: EngineArg,

        /// Stop after this many moves
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    Minimax,
    AlphaBeta,
}

impl From<EngineArg> for SearchKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Minimax => SearchKind::Minimax,
            EngineArg::AlphaBeta => SearchKind::AlphaBeta,
        }
    }
}

/// Render the board as text: `.` empty, `X`/`O` stones, the last move
/// bracketed.
pub fn render_board(board: &Board, last_move: Option<Pos>) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col:>3}"));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE as u8 {
        out.push_str(&format!("{row:>3}"));
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            let cell = board.get(pos).map_or('.', Player::symbol);
            if last_move == Some(pos) {
                out.push_str(&format!("[{cell}]"));
            } else {
                out.push_str(&format!("  {cell}"));
            }
        }
        out.push('\n');
    }
    out
}

/// Play `x` against `o` from the empty board, writing every move and the
/// board after it to `out`. Returns the outcome, or `None` when stopped by
/// `max_moves`.
pub fn run_selfplay<W: Write>(
    x: &AIEngine,
    o: &AIEngine,
    max_moves: Option<usize>,
    out: &mut W,
) -> anyhow::Result<Option<Outcome>> {
    info!(x = %x.config().kind, o = %o.config().kind, "starting self-play");
    let mut game = Game::new();

    while !game.is_over() {
        if max_moves.is_some_and(|max| game.history().len() >= max) {
            break;
        }

        let player = game.to_move();
        let engine = match player {
            Player::X => x,
            Player::O => o,
        };
        let result = game.play_ai(engine)?;

        let selection = match result.selection {
            SelectionType::Opening => "opening".to_string(),
            SelectionType::Block => "block".to_string(),
            SelectionType::Search(kind) => kind.to_string(),
        };
        if let Some(pos) = result.best_move {
            writeln!(
                out,
                "{:>3}. {player} {pos}  [{selection}, score {}, {} nodes, {}ms]",
                game.history().len(),
                result.score,
                result.nodes,
                result.time_ms,
            )?;
            writeln!(out, "{}", render_board(game.board(), Some(pos)))?;
        }
    }

    let outcome = game.outcome();
    match outcome {
        Some(Outcome::Win(player)) => writeln!(out, "{player} wins")?,
        Some(Outcome::Draw) => writeln!(out, "draw")?,
        None => writeln!(out, "stopped after {} moves", game.history().len())?,
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn engine(kind: SearchKind) -> AIEngine {
        AIEngine::with_config(EngineConfig {
            kind,
            depth: 1,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_render_board_marks_last_move() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::X);
        board.place_stone(Pos::new(0, 1), Player::O);

        let text = render_board(&board, Some(Pos::new(0, 1)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert!(lines[1].starts_with("  0  X[O]  ."));
        assert_eq!(lines[2].matches('.').count(), BOARD_SIZE);
    }

    #[test]
    fn test_selfplay_stops_at_max_moves() {
        let mut out = Vec::new();
        let outcome = run_selfplay(
            &engine(SearchKind::AlphaBeta),
            &engine(SearchKind::Minimax),
            Some(4),
            &mut out,
        )
        .unwrap();

        assert_eq!(outcome, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  1. X (7, 7)  [opening"));
        assert!(text.contains("  4. O "));
        assert!(text.contains("stopped after 4 moves"));
    }

    #[test]
    fn test_cli_parses_selfplay() {
        let cli = Cli::parse_from(["gomoku", "selfplay", "--x-engine", "minimax", "--depth", "1"]);
        assert_eq!(cli.depth, 1);
        match cli.command {
            Some(Command::Selfplay { x_engine, o_engine, max_moves }) => {
                assert_eq!(SearchKind::from(x_engine), SearchKind::Minimax);
                assert_eq!(SearchKind::from(o_engine), SearchKind::Minimax);
                assert_eq!(max_moves, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_depth_zero() {
        assert!(Cli::try_parse_from(["gomoku", "selfplay", "--depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["gomoku", "--depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["gomoku", "gui", "--depth", "1"]).is_ok());
    }

    #[test]
    fn test_cli_defaults_to_gui() {
        let cli = Cli::parse_from(["gomoku"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.depth, 2);
    }
}
