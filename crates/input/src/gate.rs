//! Status gate: which actions reach the engine in each session status.
//!
//! The engine itself accepts moves while paused; this is where a paused or
//! finished session stops listening to gameplay input.

use crate::types::{GameAction, GameStatus};

/// Whether `action` should be forwarded to the engine while in `status`.
pub fn admits(status: GameStatus, action: GameAction) -> bool {
    match status {
        GameStatus::Running => true,
        GameStatus::Paused => matches!(action, GameAction::TogglePause | GameAction::Restart),
        GameStatus::Ready | GameStatus::GameOver => action == GameAction::Restart,
    }
}

/// The overlay button's action for a status, if it shows one.
///
/// `Ready` and `GameOver` start a new session, `Paused` resumes.
pub fn primary_action(status: GameStatus) -> Option<GameAction> {
    match status {
        GameStatus::Ready | GameStatus::GameOver => Some(GameAction::Restart),
        GameStatus::Paused => Some(GameAction::TogglePause),
        GameStatus::Running => None,
    }
}
