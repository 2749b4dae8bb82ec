use token_tetris::core::{GameSnapshot, GameState, ScriptedSource};
use token_tetris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use token_tetris::types::{GameStatus, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_snapshot() -> GameSnapshot {
    let mut gs = GameState::new(1);
    gs.start();
    gs.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = running_snapshot();
    // Put a locked I block at bottom-left.
    snap.board[19][0] = PieceKind::I.code();
    snap.active = None;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_colors_blocks_by_token() {
    let mut snap = running_snapshot();
    snap.active = None;
    for (x, kind) in PieceKind::ALL.into_iter().enumerate() {
        snap.board[19][x] = kind.code();
    }

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    for (x, kind) in PieceKind::ALL.into_iter().enumerate() {
        let cell = fb.get(1 + 2 * x as u16, 20).unwrap();
        assert_eq!(cell.style.fg, kind.color(), "{:?}", kind);
    }
}

#[test]
fn term_view_draws_active_piece() {
    let mut gs = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
    gs.start();
    let snap = gs.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    // O spawns at x=4, y=0: board cells (4,0),(5,0),(4,1),(5,1).
    for (cx, cy) in [(4u16, 0u16), (5, 0), (4, 1), (5, 1)] {
        let cell = fb.get(1 + cx * 2, 1 + cy).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PieceKind::O.color());
    }
}

#[test]
fn term_view_hides_active_cells_above_the_board() {
    let mut snap = running_snapshot();
    snap.board = [[0; 10]; 20];
    if let Some(active) = snap.active.as_mut() {
        active.y = -4;
    }

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains('█'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.tokens = 56;

    let view = GameView::default();
    // Wider than the 22x22 board frame to allow a panel.
    let all = screen_text(&view.render(&snap, Viewport::new(60, 22)));

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("TOKENS"));
    assert!(all.contains("56"));
    assert!(all.contains("COINS"));
    assert!(all.contains(PieceKind::I.token_name()));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = running_snapshot();
    let all = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!all.contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // Board frame is 22 rows tall (20 + border).
    let vp = Viewport::new(22, 30);
    let fb = view.render(&snap, vp);

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_ready_overlay() {
    let snap = GameState::new(1).snapshot();
    assert_eq!(snap.status, GameStatus::Ready);

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(all.contains("TOKEN TETRIS"));
    assert!(all.contains("ENTER to start"));
}

#[test]
fn term_view_shows_pause_overlay() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.toggle_pause();

    let all = screen_text(&GameView::default().render(&gs.snapshot(), Viewport::new(22, 22)));
    assert!(all.contains("GAME PAUSED"));
    assert!(all.contains("ENTER to resume"));
}

#[test]
fn term_view_running_has_no_overlay() {
    let all = screen_text(&GameView::default().render(&running_snapshot(), Viewport::new(22, 22)));
    assert!(!all.contains("GAME PAUSED"));
    assert!(!all.contains("ENTER"));
}

#[test]
fn term_view_shows_final_score_on_game_over() {
    let mut snap = running_snapshot();
    snap.status = GameStatus::GameOver;
    snap.score = 4200;
    snap.tokens = 7;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("FINAL SCORE 4200"));
    assert!(all.contains("TOKENS 7"));
    assert!(all.contains("ENTER to play again"));
}
