//! Token Tetris (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and shared-type crates under one
//! name, and hosts the terminal driver's configuration and logging setup.

pub mod config;
pub mod logging;

pub use token_tetris_core as core;
pub use token_tetris_input as input;
pub use token_tetris_term as term;
pub use token_tetris_types as types;

pub use config::{AppConfig, ConfigError};
