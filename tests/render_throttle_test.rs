//! Redraw decisions driven by real session snapshots.

use token_tetris::core::{GameSnapshot, GameState, ScriptedSource};
use token_tetris::term::{is_static, snapshot_fingerprint, RenderThrottle};
use token_tetris::types::PieceKind;

const STATIC_MS: u64 = 250;

fn decide(throttle: &mut RenderThrottle, now_ms: u64, snap: &GameSnapshot) -> bool {
    throttle.should_render(now_ms, snapshot_fingerprint(snap), is_static(snap))
}

fn session() -> GameState<ScriptedSource> {
    GameState::with_source(ScriptedSource::repeat(PieceKind::O))
}

#[test]
fn running_session_redraws_every_frame() {
    let mut game = session();
    game.start();
    let snap = game.snapshot();
    let mut throttle = RenderThrottle::new(STATIC_MS);

    for frame in 0..10 {
        assert!(decide(&mut throttle, frame * 16, &snap));
    }
}

#[test]
fn paused_screen_redraws_only_on_interval() {
    let mut game = session();
    game.start();
    game.toggle_pause();
    let snap = game.snapshot();
    let mut throttle = RenderThrottle::new(STATIC_MS);

    assert!(decide(&mut throttle, 0, &snap));
    assert!(!decide(&mut throttle, 16, &snap));
    assert!(!decide(&mut throttle, STATIC_MS - 1, &snap));
    assert!(decide(&mut throttle, STATIC_MS, &snap));
}

#[test]
fn pausing_forces_a_redraw() {
    let mut game = session();
    game.start();
    let mut throttle = RenderThrottle::new(STATIC_MS);
    assert!(decide(&mut throttle, 0, &game.snapshot()));

    game.toggle_pause();
    assert!(decide(&mut throttle, 1, &game.snapshot()));
    assert!(!decide(&mut throttle, 2, &game.snapshot()));
}

#[test]
fn game_over_screen_redraws_when_tokens_change() {
    let mut game = session();
    game.start();
    while !game.game_over() {
        game.hard_drop();
    }
    let mut snap = game.snapshot();
    let mut throttle = RenderThrottle::new(STATIC_MS);

    assert!(decide(&mut throttle, 0, &snap));
    assert!(!decide(&mut throttle, 10, &snap));

    snap.tokens += 1;
    assert!(decide(&mut throttle, 11, &snap));
}

#[test]
fn reset_redraws_static_screen_after_resize() {
    let snap = session().snapshot();
    let mut throttle = RenderThrottle::new(STATIC_MS);

    assert!(decide(&mut throttle, 0, &snap));
    assert!(!decide(&mut throttle, 5, &snap));
    throttle.reset();
    assert!(decide(&mut throttle, 6, &snap));
}
