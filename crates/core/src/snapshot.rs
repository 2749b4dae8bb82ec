#[cfg(feature = "serde")]
use serde::Serialize;

use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            shape: value.shape,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board cells covered by the piece, including rows above the board.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Plain-data copy of everything a renderer or observer needs.
///
/// `board` holds cell codes: 0 for empty, 1-7 for [`PieceKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub piece_id: u32,
    pub score: u32,
    pub tokens: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: i64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Board cell code at (x, y), or 0 outside the board.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Ready,
            piece_id: 0,
            score: 0,
            tokens: 0,
            level: crate::types::STARTING_LEVEL,
            lines: 0,
            drop_interval_ms: crate::scoring::drop_interval_ms(crate::types::STARTING_LEVEL),
        }
    }
}
