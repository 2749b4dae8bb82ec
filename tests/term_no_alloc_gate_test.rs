use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use token_tetris::core::{GameSnapshot, GameState};
use token_tetris::term::{
    is_static, snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle, Viewport,
};
use token_tetris::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut throttle = RenderThrottle::new(250);

    let mut gs = GameState::new(1);
    gs.start();

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    // Warm-up (resize/initial clears).
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for frame in 0..200u64 {
            if frame % 20 == 0 {
                let _ = gs.apply_action(GameAction::HardDrop);
            }
            let _ = gs.tick(16);
            gs.snapshot_into(&mut snap);
            if throttle.should_render(frame * 16, snapshot_fingerprint(&snap), is_static(&snap)) {
                view.render_into(&snap, viewport, &mut fb);
            }
        }
    });

    assert_eq!(allocs, 0);
}

#[test]
fn overlay_screens_render_without_allocating() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(7);
    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        // Ready overlay.
        gs.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);

        // Paused overlay.
        gs.start();
        gs.toggle_pause();
        gs.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);

        // Game over overlay.
        gs.toggle_pause();
        while !gs.game_over() {
            gs.hard_drop();
        }
        gs.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
    });

    assert_eq!(allocs, 0);
}
