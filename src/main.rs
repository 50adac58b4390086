//! Terminal Blockfall runner (default binary).
//!
//! This is the driver around the simulation core: it owns the timer and the
//! event loop, serializes key presses and gravity ticks into one stream of
//! engine calls, and paints every frame through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_blockfall::core::{Engine, GameConfig};
use tui_blockfall::input::{handle_key_event, should_quit, should_restart};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_WIDTH, TICK_MS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns on the board
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u16,
    /// Number of rows on the board
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u16,
    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,
    /// Terminal columns used to draw one board cell
    #[arg(long, default_value_t = CELL_WIDTH)]
    cell_width: u16,
    /// Seed for piece selection (random when omitted)
    #[arg(long)]
    seed: Option<u32>,
    /// Write logs to this file (filter with RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            tick_ms: self.tick_ms,
            cell_width: self.cell_width,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Build the engine before touching the terminal so bad flags fail cleanly.
    let seed = args.seed.unwrap_or_else(rand::random);
    let engine = Engine::new(args.config(), seed).context("invalid game configuration")?;
    info!(seed, width = args.width, height = args.height, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Send tracing output to `path`; the terminal itself belongs to the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run(term: &mut TerminalRenderer, mut engine: Engine) -> Result<()> {
    let view = GameView::new(engine.config().cell_width);
    let tick_duration = Duration::from_millis(u64::from(engine.config().tick_ms));
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit");
                        return Ok(());
                    }
                    if engine.game_over() && should_restart(key) {
                        let seed = rand::random();
                        engine = Engine::new(*engine.config(), seed)?;
                        info!(seed, "restarted");
                        last_tick = Instant::now();
                        continue;
                    }
                    if let Some(intent) = handle_key_event(key) {
                        engine.handle_input(intent);
                        report_freeze(&mut engine);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
            report_freeze(&mut engine);
        }
    }
}

fn report_freeze(engine: &mut Engine) {
    if let Some(event) = engine.take_last_event() {
        if event.lines_cleared > 0 {
            info!(
                lines = event.lines_cleared,
                score = engine.score(),
                "cleared lines"
            );
        }
    }
}
