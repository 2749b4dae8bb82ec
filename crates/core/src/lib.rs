//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the Token Tetris rules, state management, and
//! simulation logic. It has no dependencies on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same piece source produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Fast**: Zero-allocation hot paths for ticks, moves and line clears
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: Session state machine, active piece, scoring, gravity
//! - [`pieces`]: Tetromino occupancy matrices and clockwise rotation
//! - [`rng`]: Injectable piece sources (seeded LCG, scripted)
//! - [`scoring`]: Line points, token rewards, leveling, drop interval
//! - [`snapshot`]: Plain-data copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random (no bag).
//! - Rotation turns the whole matrix clockwise and is rejected if it does not
//!   fit; there are no wall kicks.
//! - A piece locks the moment it cannot move down; there is no lock delay.
//! - Clearing `n` lines at level `L` scores `[0, 40, 100, 300, 1200][n] * L`
//!   and, for `n >= 2`, awards `n - 1` tokens.
//! - Every 10 lines since the last level-up raise the level by one.
//!
//! # Example
//!
//! ```
//! use token_tetris_core::GameState;
//! use token_tetris_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. A gravity step fires once the accumulated time
//! exceeds `1000 - level * 50` ms.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use token_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, EngineConfig, GameState};
pub use pieces::Shape;
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_points, tokens_for_clear, ClearResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
