//! Swipe and double-tap gestures.
//!
//! A drag is compared against the previous pointer position on every move:
//! a mostly horizontal step moves the piece, a mostly vertical one rotates
//! (upwards) or soft-drops (downwards). The reference point follows the
//! pointer, so one long swipe can produce several actions. Two taps in quick
//! succession hard-drop.

use crate::types::GameAction;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Maximum gap between two taps of a double tap.
pub const DOUBLE_TAP_MS: u64 = 300;

/// Swipe threshold for pixel coordinates.
pub const SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Swipe threshold for terminal cell coordinates (one cell is enough).
pub const SWIPE_THRESHOLD_CELLS: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    threshold: f32,
    double_tap_ms: u64,
    anchor: Option<(f32, f32)>,
    last_tap_ms: Option<u64>,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            double_tap_ms: DOUBLE_TAP_MS,
            anchor: None,
            last_tap_ms: None,
        }
    }

    /// Tracker tuned for terminal mouse reports.
    pub fn for_cells() -> Self {
        Self::new(SWIPE_THRESHOLD_CELLS)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }

    /// Pointer went down at (x, y). Returns `HardDrop` on the second tap of a
    /// double tap.
    pub fn press(&mut self, x: f32, y: f32, now_ms: u64) -> Option<GameAction> {
        self.anchor = Some((x, y));
        match self.last_tap_ms {
            Some(prev) if now_ms.saturating_sub(prev) <= self.double_tap_ms => {
                self.last_tap_ms = None;
                Some(GameAction::HardDrop)
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                None
            }
        }
    }

    /// Pointer moved to (x, y) while down.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<GameAction> {
        let (start_x, start_y) = self.anchor?;
        let diff_x = start_x - x;
        let diff_y = start_y - y;

        let action = if diff_x.abs() > diff_y.abs() {
            if diff_x > self.threshold {
                Some(GameAction::MoveLeft)
            } else if diff_x < -self.threshold {
                Some(GameAction::MoveRight)
            } else {
                None
            }
        } else if diff_y > self.threshold {
            Some(GameAction::Rotate)
        } else if diff_y < -self.threshold {
            Some(GameAction::SoftDrop)
        } else {
            None
        };

        self.anchor = Some((x, y));
        if action.is_some() {
            // A swipe is not a tap.
            self.last_tap_ms = None;
        }
        action
    }

    /// Pointer released.
    pub fn release(&mut self) {
        self.anchor = None;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

/// Feed a crossterm mouse event through `tracker`.
///
/// Only the left button drives gestures; cells are used as coordinates.
pub fn handle_mouse_event(
    tracker: &mut GestureTracker,
    event: MouseEvent,
    now_ms: u64,
) -> Option<GameAction> {
    let x = f32::from(event.column);
    let y = f32::from(event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => tracker.press(x, y, now_ms),
        MouseEventKind::Drag(MouseButton::Left) => tracker.moved(x, y),
        MouseEventKind::Up(MouseButton::Left) => {
            tracker.release();
            None
        }
        _ => None,
    }
}
