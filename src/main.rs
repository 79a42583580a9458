//! Terminal runner (default binary).
//!
//! Drives the engine at a fixed tick rate, feeds it keyboard commands and
//! draws snapshots through the framebuffer renderer.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tytris::core::{GameEvent, GameState};
use tytris::input::{handle_key_event, should_quit, SoftDropLatch};
use tytris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tytris::{HighScores, Settings};

fn main() -> Result<()> {
    let settings = Settings::load()?;
    let _log_guard = init_logging();

    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, tick_rate_hz = settings.tick_rate_hz, "starting");
    let game = GameState::new(settings.game, seed).context("invalid game config")?;

    let scores_path = HighScores::default_path();
    let scores = match scores_path.as_deref().map(HighScores::load_from) {
        Some(Ok(scores)) => scores,
        Some(Err(err)) => {
            warn!("ignoring high scores: {err:#}");
            HighScores::new()
        }
        None => HighScores::new(),
    };

    let mut runner = Runner {
        game,
        view: GameView::default().with_tick_rate(settings.tick_rate_hz),
        latch: SoftDropLatch::new(),
        scores,
        scores_path,
        tick: Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate_hz)),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let release_events = enable_release_events();
    runner.latch = runner.latch.with_release_events(release_events);

    let result = runner.run(&mut term);

    // Always try to restore terminal state.
    if release_events {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    result
}

/// Log to a file in the data directory; stdout belongs to the game.
fn init_logging() -> Option<WorkerGuard> {
    let dir = Settings::data_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&dir, "tytris.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();
    Some(guard)
}

/// Ask the terminal for key release events where the protocol allows it.
fn enable_release_events() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        return false;
    }
    let mut stdout = io::stdout();
    let pushed = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();
    let _ = stdout.flush();
    pushed
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

struct Runner {
    game: GameState,
    view: GameView,
    latch: SoftDropLatch,
    scores: HighScores,
    scores_path: Option<PathBuf>,
    tick: Duration,
}

impl Runner {
    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let mut fb = FrameBuffer::new(0, 0);
        let mut events: Vec<GameEvent> = Vec::new();
        let mut last_tick = Instant::now();

        loop {
            let (w, h) = terminal::size().unwrap_or((80, 24));
            self.view
                .render_into(&self.game.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            let timeout = self
                .tick
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(command) = handle_key_event(key) {
                            if let Some(command) = self.latch.filter(command) {
                                self.game.apply(command);
                            }
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick {
                last_tick = Instant::now();
                if let Some(command) = self.latch.tick() {
                    self.game.apply(command);
                }
                self.game.advance_tick();
            }

            self.game.flush_events(&mut events);
            for event in events.drain(..) {
                self.on_event(event);
            }
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        let GameEvent::GameOver(info) = event else {
            return;
        };
        info!(
            score = info.score,
            lines = info.lines_destroyed,
            ticks = info.elapsed_ticks,
            "game over"
        );

        let rank = self.scores.add(&info, unix_now());
        self.game.set_high_score(rank.is_some());
        if rank.is_none() {
            return;
        }
        if let Some(path) = &self.scores_path {
            if let Err(err) = self.scores.save_to(path) {
                warn!("failed to save high scores: {err:#}");
            }
        }
    }
}
