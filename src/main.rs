//! Gomoku GUI and terminal self-play
//!
//! Without a subcommand the graphical board opens with the human playing X.

use anyhow::Result;
use clap::Parser;
use gomoku::cli::{run_selfplay, Cli, Command, EngineArg, PlayerArg};
use gomoku::ui::{GameMode, GomokuApp};
use gomoku::{AIEngine, EngineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Command::Gui {
        human: PlayerArg::X,
        ai_vs_ai: false,
    });

    match command {
        Command::Gui { human, ai_vs_ai } => {
            let mode = if ai_vs_ai {
                GameMode::AiVsAi
            } else {
                GameMode::HumanVsAi { human: human.into() }
            };
            run_gui(mode, cli.depth)
        }
        Command::Selfplay {
            x_engine,
            o_engine,
            max_moves,
        } => {
            let engine = |arg: EngineArg| {
                AIEngine::with_config(EngineConfig {
                    kind: arg.into(),
                    depth: cli.depth,
                    ..EngineConfig::default()
                })
            };
            let mut stdout = std::io::stdout().lock();
            run_selfplay(&engine(x_engine), &engine(o_engine), max_moves, &mut stdout)?;
            Ok(())
        }
    }
}

/// Open the egui window
fn run_gui(mode: GameMode, depth: u8) -> Result<()> {
    info!(?mode, depth, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, mode, depth)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
