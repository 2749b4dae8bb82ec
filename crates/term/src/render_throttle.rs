//! Redraw throttling for static screens.
//!
//! While a session runs every frame is drawn. Paused, ready and game-over
//! screens only change on input, so they are redrawn when the snapshot
//! fingerprint changes and otherwise at a low refresh rate.

use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        if !self.has_rendered || !is_static || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}

/// FNV-1a hasher; deterministic across runs, no allocation.
#[derive(Debug, Clone)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Fingerprint of everything visible in a snapshot.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut h = Fnv1aHasher::new();
    snap.hash(&mut h);
    h.finish()
}

/// Whether the snapshot shows a screen that only changes on input.
pub fn is_static(snap: &GameSnapshot) -> bool {
    !snap.playable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    #[test]
    fn fingerprint_tracks_visible_changes() {
        let a = GameSnapshot::default();
        let mut b = a;
        assert_eq!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));
        b.tokens = 1;
        assert_ne!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));
    }

    #[test]
    fn only_running_screens_are_dynamic() {
        let mut s = GameSnapshot::default();
        assert!(is_static(&s));
        s.status = GameStatus::Running;
        assert!(!is_static(&s));
        s.status = GameStatus::Paused;
        assert!(is_static(&s));
    }

    #[test]
    fn reset_forces_render() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7, true));
        assert!(!t.should_render(5, 7, true));
        t.reset();
        assert!(t.should_render(6, 7, true));
    }
}
