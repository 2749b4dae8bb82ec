//! Terminal "game renderer".
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - `core` stays deterministic and testable; this crate only reads snapshots
//! - Precise control over aspect ratio (2 chars wide per board cell)
//! - Only changed cell runs are written to the terminal

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use token_tetris_core as core;
pub use token_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::{is_static, snapshot_fingerprint, Fnv1aHasher, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
