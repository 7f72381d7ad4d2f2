//! Terminal dots runner (default binary).
//!
//! Mouse drags (or the keyboard cursor) select chains; the gesture driver
//! holds each released chain for the clear delay before committing it.
//! Rendering goes through the framebuffer-based `term` crate.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, trace};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dots_game::config::DotsConfig;
use dots_game::core::{GameEngine, GameSnapshot};
use dots_game::input::{
    handle_key_event, CursorInput, Gesture, GestureDriver, GestureOutcome, PointerMapper,
    UiCommand,
};
use dots_game::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use dots_game::types::{MoveSummary, TICK_MS};

fn main() -> Result<()> {
    let config = DotsConfig::from_env()?;
    init_tracing(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the configured file only; stdout belongs to the game screen.
fn init_tracing(config: &DotsConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("building log filter")?;

    let Some(path) = &config.log_path else {
        tracing_subscriber::registry().with(filter).init();
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &DotsConfig) -> Result<()> {
    let seed = config.resolved_seed();
    info!(seed, clear_delay_ms = config.clear_delay_ms, "starting");

    let mut engine = GameEngine::new(seed);
    let mut driver = GestureDriver::with_clear_delay_ms(config.clear_delay_ms);
    let mut pointer = PointerMapper::new();
    let mut keys = CursorInput::new();
    let mut keyboard_active = false;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            engine.snapshot_into(&mut snap);
            let overlay = Overlay {
                cursor: keyboard_active.then(|| keys.cursor()),
                clearing: driver.is_clearing(),
            };
            view.render_into(&snap, overlay, viewport, &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    dirty = true;
                    match handle_key_event(key) {
                        Some(UiCommand::Quit) => return Ok(()),
                        Some(UiCommand::NewGame) => {
                            engine.new_game();
                            driver.reset();
                            keys.reset();
                        }
                        None => {
                            keyboard_active = true;
                            if let Some(gesture) = keys.handle_key_press(key.code) {
                                apply_gesture(&mut driver, &mut engine, gesture);
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    let gesture = pointer.map(mouse, |x, y| view.cell_at(viewport, x, y));
                    if let Some(gesture) = gesture {
                        keyboard_active = false;
                        apply_gesture(&mut driver, &mut engine, gesture);
                        dirty = true;
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(summary) = driver.tick(&mut engine, TICK_MS) {
                log_commit(summary);
                dirty = true;
            }
        }
    }
}

fn apply_gesture(driver: &mut GestureDriver, engine: &mut GameEngine, gesture: Gesture) {
    match driver.handle(engine, gesture) {
        GestureOutcome::Committed(summary) => log_commit(summary),
        outcome => trace!(?gesture, ?outcome, "gesture"),
    }
}

fn log_commit(summary: MoveSummary) {
    info!(
        cleared = summary.cleared,
        score = summary.score,
        moves_left = summary.moves_left,
        "move"
    );
    if summary.moves_left == 0 {
        info!(score = summary.score, "game over");
    }
}
