//! Gomoku GUI
//!
//! Play against the bot or another player on a 15x15 board.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use gomoku::config::{CANDIDATE_RADIUS, SEARCH_DEPTH, THINK_DELAY_MS};
use gomoku::ui::{AppSettings, GameMode, GomokuApp};
use gomoku::{AIEngine, EngineConfig, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Two humans on one board
    Pvp,
    /// Human (Black) against the bot (White)
    Pve,
}

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Gomoku against a minimax bot")]
struct Cli {
    /// Search depth in plies
    #[arg(long, default_value_t = SEARCH_DEPTH)]
    depth: u8,

    /// Candidate radius around existing stones
    #[arg(long, default_value_t = CANDIDATE_RADIUS)]
    radius: u8,

    /// Pause before each bot move, in milliseconds
    #[arg(long, default_value_t = THINK_DELAY_MS)]
    think_delay_ms: u64,

    /// Start directly in this mode instead of the selection screen
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let requested = EngineConfig::default()
        .with_depth(cli.depth)
        .with_radius(cli.radius);
    let engine = AIEngine::try_with_config(requested).unwrap_or_else(|err| {
        log::warn!("{err}; falling back to defaults");
        AIEngine::new()
    });
    log::info!(
        "engine depth {} radius {}",
        engine.config().search_depth,
        engine.config().candidate_radius
    );

    let settings = AppSettings {
        engine,
        think_delay: Duration::from_millis(cli.think_delay_ms),
        start_mode: cli.mode.map(|mode| match mode {
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Pve => GameMode::PvE { human: Stone::Black },
        }),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, settings)))),
    )
}
