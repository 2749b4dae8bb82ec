//! Runtime configuration read from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::core::EngineConfig;
use crate::types::TICK_MS;

pub const ENV_SEED: &str = "TOKEN_TETRIS_SEED";
pub const ENV_TICK_MS: &str = "TOKEN_TETRIS_TICK_MS";
pub const ENV_DROP_FLOOR_MS: &str = "TOKEN_TETRIS_DROP_FLOOR_MS";
pub const ENV_LOG_DIR: &str = "TOKEN_TETRIS_LOG_DIR";
pub const ENV_LOG: &str = "TOKEN_TETRIS_LOG";
pub const ENV_MOUSE: &str = "TOKEN_TETRIS_MOUSE";

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable did not parse
    #[error("{var}: expected an unsigned integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// A boolean variable did not parse
    #[error("{var}: expected true/false/1/0/on/off, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    /// The fixed timestep must advance time
    #[error("{var}: tick interval must be greater than zero")]
    ZeroTick { var: &'static str },
}

/// Terminal driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Piece RNG seed; `None` derives one from the clock.
    pub seed: Option<u32>,
    /// Fixed timestep in milliseconds.
    pub tick_ms: u32,
    /// Optional lower bound for the gravity interval.
    pub drop_floor_ms: Option<u32>,
    /// Write logs into this directory; logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
    /// Capture mouse events for swipe and double-click input.
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            drop_floor_ms: None,
            log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(ENV_SEED).map(|v| parse_u32(ENV_SEED, v)).transpose()?;

        let tick_ms = match get(ENV_TICK_MS) {
            Some(v) => parse_u32(ENV_TICK_MS, v)?,
            None => TICK_MS,
        };
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTick { var: ENV_TICK_MS });
        }

        let drop_floor_ms = get(ENV_DROP_FLOOR_MS)
            .map(|v| parse_u32(ENV_DROP_FLOOR_MS, v))
            .transpose()?;

        let log_dir = get(ENV_LOG_DIR).map(PathBuf::from);
        let log_filter = get(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let mouse = match get(ENV_MOUSE) {
            Some(v) => parse_bool(ENV_MOUSE, v)?,
            None => true,
        };

        Ok(Self {
            seed,
            tick_ms,
            drop_floor_ms,
            log_dir,
            log_filter,
            mouse,
        })
    }

    /// Seed to use: the configured one or one derived from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            drop_interval_floor_ms: self.drop_floor_ms,
        }
    }
}

fn parse_u32(var: &'static str, value: String) -> Result<u32, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the 128-bit value so both fast and slow bits contribute.
    (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
}
