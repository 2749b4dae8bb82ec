//! Pieces module - tetromino occupancy matrices and rotation
//!
//! Each piece is an N×N occupancy matrix (N = 4 for I, 2 for O, 3 otherwise).
//! Rotation is a clockwise quarter turn of the whole matrix:
//! `rotated[x][N-1-y] = original[y][x]`. There is no kick table: a rotation
//! that does not fit is simply rejected by the caller.

use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest matrix side of any shape.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset (dx, dy) of a single mino relative to the matrix top-left corner
pub type MinoOffset = (i8, i8);

/// Occupied cells of a shape (always 4 for the built-in shapes).
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square occupancy matrix of a piece in its current orientation.
///
/// Only the top-left `size × size` corner of `cells` is meaningful; indexing is
/// `cells[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from the rows of an N×N matrix.
    ///
    /// Rows or columns beyond `MAX_SHAPE_SIZE` are ignored.
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let size = N.min(MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().take(size).enumerate() {
            for (x, &v) in row.iter().take(size).enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Spawn orientation for a piece kind.
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows([
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::L => Self::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
            PieceKind::O => Self::from_rows([[1, 1], [1, 1]]),
            PieceKind::S => Self::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
            PieceKind::T => Self::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::Z => Self::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        }
    }

    /// Matrix side length.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the matrix cell at (row, col) is occupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        let n = self.size as usize;
        row < n && col < n && self.cells[row][col]
    }

    /// Raw matrix (only the `size × size` corner is meaningful).
    pub fn cells(&self) -> &[[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        &self.cells
    }

    /// Quarter turn clockwise: `rotated[x][N-1-y] = original[y][x]`.
    pub fn rotated(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Occupied cells as (dx, dy) = (column, row) offsets, row-major order.
    pub fn minos(&self) -> Minos {
        let n = self.size as usize;
        let mut out = Minos::new();
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Spawn column for a shape: horizontally centered on the board.
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8
}

/// Spawn row: the matrix's top row sits on the top board row.
pub const SPAWN_Y: i8 = 0;
