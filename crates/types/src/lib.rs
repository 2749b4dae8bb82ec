//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used by the engine,
//! the input adapter and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default fixed timestep of the terminal driver (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity formula intercept |
//! | `DROP_MS_PER_LEVEL` | 50 | Gravity speed-up per level |
//!
//! The drop interval is `BASE_DROP_MS - level * DROP_MS_PER_LEVEL` and is not
//! clamped, so from level 20 on it is zero or negative.
//!
//! # Examples
//!
//! ```
//! use token_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.token_name(), "Cardano");
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval intercept in milliseconds.
pub const BASE_DROP_MS: i64 = 1000;

/// Milliseconds removed from the gravity interval per level.
pub const DROP_MS_PER_LEVEL: i64 = 50;

/// Level of a fresh session.
pub const STARTING_LEVEL: u32 = 1;

/// Lines needed (since the last level-up) to gain a level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by lines cleared in one lock.
///
/// Multiplied by the current level:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Piece colors indexed by [`PieceKind::index`].
pub const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(0xf7, 0x93, 0x1a), // I - Bitcoin orange
    Rgb::new(0x62, 0x7e, 0xea), // J - Ethereum blue
    Rgb::new(0x99, 0x45, 0xff), // L - Solana purple
    Rgb::new(0x27, 0x75, 0xca), // O - USDC blue
    Rgb::new(0x82, 0x47, 0xe5), // S - Polygon purple
    Rgb::new(0x00, 0x33, 0xad), // T - Cardano blue
    Rgb::new(0xc2, 0xa6, 0x33), // Z - Dogecoin yellow
];

/// The seven tetromino kinds.
///
/// Each kind stands for a crypto token and carries a fixed color:
/// - **I**: Bitcoin
/// - **J**: Ethereum
/// - **L**: Solana
/// - **O**: USDC
/// - **S**: Polygon
/// - **T**: Cardano
/// - **Z**: Dogecoin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in palette/code order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use token_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position in [`PieceKind::ALL`] and [`PIECE_COLORS`] (0-6).
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Board cell code (1-7). Code 0 is reserved for an empty cell.
    ///
    /// ```
    /// use token_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.code(), 1);
    /// assert_eq!(PieceKind::from_code(7), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_code(0), None);
    /// ```
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Token this piece represents on the board.
    pub fn token_name(&self) -> &'static str {
        match self {
            PieceKind::I => "Bitcoin",
            PieceKind::J => "Ethereum",
            PieceKind::L => "Solana",
            PieceKind::O => "USDC",
            PieceKind::S => "Polygon",
            PieceKind::T => "Cardano",
            PieceKind::Z => "Dogecoin",
        }
    }

    /// Display color of the piece.
    pub fn color(&self) -> Rgb {
        PIECE_COLORS[self.index()]
    }
}

/// Commands accepted by the engine
///
/// These are produced by keyboard, mouse/touch gestures or any other adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks if it cannot)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece until it lands, then lock
    HardDrop,
    /// Pause a running game or resume a paused one
    TogglePause,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use token_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("togglePause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }
}

/// Session lifecycle
///
/// `Ready` → `Running` ⇄ `Paused`, and `Running` → `GameOver`.
/// A restart from any state yields a fresh `Running` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameStatus {
    #[default]
    Ready,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Core-side event emitted after a piece locks.
///
/// Carries the score/token/level changes produced by a single merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded by this clear.
    pub points: u32,
    /// Tokens awarded by this clear.
    pub tokens: u32,
    /// New level, if this clear crossed the level-up threshold.
    pub level_up: Option<u32>,
    /// The replacement piece could not spawn.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
