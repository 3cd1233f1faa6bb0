//! Board state, turn order and move application

use crate::board::{all_coords, Move, BOARD_SIZE, CELL_COUNT, LINES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Contents of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Owner of the mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// Side to move. Derived from the board, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

/// Game verdict for a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    Undetermined,
}

/// Rejected placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("move ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Malformed board notation
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),
    #[error("unexpected character {0:?} in board notation")]
    InvalidChar(char),
}

// ============================================================================
// BOARD
// ============================================================================

/// 3x3 board (copy to derive)
///
/// Equality and hashing are by content. Boards are never mutated after
/// construction; [`Board::apply_move`] returns a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// The all-empty starting board
    pub fn initial() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows. No turn-order validation is done.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Cell at a coordinate, `None` when off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        if mv.is_valid() {
            Some(self.cells[mv.row][mv.col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    fn cell_iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// (count of X, count of O)
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cell_iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cell_iter().filter(|&c| c == Cell::Empty).count()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// X moves first and whenever the mark counts are tied
    pub fn current_player(&self) -> Player {
        let (x, o) = self.mark_counts();
        if x <= o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty coordinates in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        all_coords()
            .filter(|&mv| self.cells[mv.row][mv.col] == Cell::Empty)
            .collect()
    }

    /// First complete line in check order (rows, columns, main diagonal,
    /// anti-diagonal)
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|[a, b, c]| {
            let first = self.cells[a.row][a.col];
            if first == self.cells[b.row][b.col] && first == self.cells[c.row][c.col] {
                first.player()
            } else {
                None
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cell_iter().all(|c| c != Cell::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Undetermined,
        }
    }

    /// Terminal score: +1 X wins, -1 O wins, 0 draw.
    ///
    /// # Panics
    ///
    /// Panics if the board is not terminal.
    pub fn utility(&self) -> i32 {
        crate::eval::utility(self)
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Place the current player's mark, returning the new board.
    /// `self` is left as it was.
    pub fn apply_move(&self, mv: Move) -> Result<Board, InvalidMoveError> {
        match self.get(mv) {
            None => Err(InvalidMoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            }),
            Some(Cell::Empty) => Ok(self.with_mark(mv, self.current_player())),
            Some(_) => Err(InvalidMoveError::Occupied {
                row: mv.row,
                col: mv.col,
            }),
        }
    }

    /// Unchecked placement for moves drawn from `legal_moves`
    pub(crate) fn with_mark(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = player.mark();
        next
    }

    // ========================================================================
    // NOTATION
    // ========================================================================

    /// Compact 9-character form, e.g. `XX.OO....`
    pub fn to_notation(&self) -> String {
        self.cell_iter().map(Cell::to_char).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`/`O` (either case) and `.`/`-`/`_` for empty; `/` and
    /// whitespace separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .map(|c| Cell::from_char(c).ok_or(BoardParseError::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::initial();
        for (mv, cell) in all_coords().zip(cells) {
            board.cells[mv.row][mv.col] = cell;
        }
        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_notation()
    }
}

// ============================================================================
// TESTS
// ============================================================================
