//! Token Tetris terminal runner (default binary).
//!
//! Reads configuration from the environment, then drives the engine with a
//! fixed timestep. Keyboard and mouse input go through the status gate before
//! reaching the engine; frames are rendered into a reused framebuffer and
//! only changed cells are flushed.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};

use token_tetris::config::AppConfig;
use token_tetris::core::{GameSnapshot, GameState, PieceSource, SimpleRng};
use token_tetris::input::{admits, handle_mouse_event, map_key, should_quit, GestureTracker};
use token_tetris::logging;
use token_tetris::term::{
    is_static, snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer,
    Viewport,
};
use token_tetris::types::GameAction;

/// Redraw interval for screens that only change on input.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    let _log_guard = logging::init(config.log_dir.as_deref(), &config.log_filter)?;

    let mut term = TerminalRenderer::new().with_mouse_capture(config.mouse);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.resolve_seed();
    info!(seed, tick_ms = config.tick_ms, mouse = config.mouse, "starting");

    let mut game = GameState::with_config(SimpleRng::new(seed), config.engine_config());

    let view = GameView::default();
    let mut gestures = GestureTracker::for_cells();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snapshot_fingerprint(&snap), is_static(&snap)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log_session_end(&game);
                        return Ok(());
                    }
                    if let Some(action) = map_key(key, game.status()) {
                        dispatch(&mut game, action);
                    }
                }
                Event::Mouse(mouse) => {
                    let now_ms = clock.elapsed().as_millis() as u64;
                    if let Some(action) = handle_mouse_event(&mut gestures, mouse, now_ms) {
                        dispatch(&mut game, action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(config.tick_ms);
            report_lock(&mut game);
        }
    }
}

/// Forward an action if the current status admits it.
fn dispatch<S: PieceSource>(game: &mut GameState<S>, action: GameAction) {
    let status = game.status();
    if !admits(status, action) {
        debug!(action = action.as_str(), status = status.as_str(), "action gated");
        return;
    }
    game.apply_action(action);
    if game.status() != status {
        debug!(from = status.as_str(), to = game.status().as_str(), "status changed");
    }
    report_lock(game);
}

fn report_lock<S: PieceSource>(game: &mut GameState<S>) {
    let Some(event) = game.take_last_event() else {
        return;
    };
    if event.tokens > 0 {
        info!(
            earned = event.tokens,
            total = game.tokens(),
            lines = event.lines_cleared,
            "tokens earned"
        );
    }
}

fn log_session_end<S: PieceSource>(game: &GameState<S>) {
    info!(
        status = game.status().as_str(),
        score = game.score(),
        tokens = game.tokens(),
        level = game.level(),
        lines = game.lines(),
        "session ended"
    );
}
