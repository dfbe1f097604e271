//! Terminal 2048 runner (default binary).
//!
//! Turn based: the loop blocks on the next terminal event, applies at most one
//! action and redraws. Logging goes to a file, and only when `--log-dir` is
//! given, so the alternate screen is never scribbled over.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{opt_format, FileSpec, Logger, LoggerHandle};
use log::{debug, info};

use tui_2048::core::{GameConfig, GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{SpawnWeights, DEFAULT_GOAL, DEFAULT_GRID_SIZE};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Slide, merge, reach the goal tile")]
struct Cli {
    /// Board side length (2 to 8)
    #[arg(short = 'n', long, env = "TUI2048_SIZE", default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Magnitude that wins the game (a power of two, at least 4)
    #[arg(short = 'g', long, env = "TUI2048_GOAL", default_value_t = DEFAULT_GOAL)]
    goal: u32,

    /// RNG seed; taken from the clock when omitted
    #[arg(short = 's', long, env = "TUI2048_SEED")]
    seed: Option<u32>,

    /// Chance in percent that a spawned tile is a 4
    #[arg(long, env = "TUI2048_FOUR_PERCENT", default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    four_percent: u32,

    /// Write a log file into this directory
    #[arg(long, env = "TUI2048_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.size)
            .with_goal(self.goal)
            .with_spawn(SpawnWeights::new(100 - self.four_percent, self.four_percent))
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn setup_logging(dir: &Path) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(dir))
        .format(opt_format)
        .start()
        .with_context(|| format!("start file logger in {}", dir.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The handle must outlive the game loop or buffered lines are lost.
    let _logger = match &cli.log_dir {
        Some(dir) => Some(setup_logging(dir)?),
        None => None,
    };

    // Reject bad rules before the terminal is switched into raw mode.
    let seed = cli.seed();
    let game = GameState::seeded(cli.config(), seed).context("invalid game configuration")?;
    info!(
        "starting {}x{} game, goal {}, seed {}",
        cli.size, cli.size, cli.goal, seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        "quit after {} moves, best tile {}",
                        game.moves(),
                        game.board().max_tile()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = game.apply_action(action)?;
                    debug!("{} -> changed: {}", action.as_str(), changed);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
