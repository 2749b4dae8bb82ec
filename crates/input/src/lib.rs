//! Terminal input (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key and
//! mouse events into [`crate::types::GameAction`], turns pointer drags into
//! swipe gestures, and decides which actions a session status admits.

pub mod gate;
pub mod map;
pub mod touch;

pub use token_tetris_types as types;

pub use gate::{admits, primary_action};
pub use map::{handle_key_event, is_primary_key, map_key, should_quit};
pub use touch::{handle_mouse_event, GestureTracker, DOUBLE_TAP_MS};
