//! Grid geometry with (row, col) coordinates

use serde::{Deserialize, Serialize};

/// Number of rows and columns
pub const BOARD_SIZE: usize = 3;

/// Total number of cells
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Grid coordinates of a placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate is on the board
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index (0-8). Only meaningful for valid coordinates.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Move::index`]
    pub fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All coordinates in row-major order: (0,0), (0,1), (0,2), (1,0), ...
///
/// This is the move enumeration order used everywhere, so search results
/// are reproducible.
pub fn all_coords() -> impl Iterator<Item = Move> {
    (0..CELL_COUNT).map(Move::from_index)
}

/// The 8 winning lines, in check order.
/// Index: 0-2 = rows (top to bottom), 3-5 = columns (left to right),
/// 6 = main diagonal, 7 = anti-diagonal
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Human-readable line names, parallel to [`LINES`]
pub const LINE_NAMES: [&str; 8] = [
    "top row",
    "middle row",
    "bottom row",
    "left column",
    "center column",
    "right column",
    "main diagonal",
    "anti-diagonal",
];
