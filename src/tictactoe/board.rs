//! Board state representation and basic queries

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board
pub const SIDE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIDE * SIDE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cell {
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
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Orientation of this player's objective on X-relative utilities:
    /// +1 for the maximizer (X), -1 for the minimizer (O).
    pub fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate naming one cell.
///
/// Ordering is row-major, which is also the order in which the rule engine
/// enumerates legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major index (0-8), or `None` if either coordinate is off the board
    pub fn index(self) -> Option<usize> {
        (self.row < SIDE && self.col < SIDE).then_some(self.row * SIDE + self.col)
    }

    /// Move addressing the given row-major index.
    ///
    /// Indices past the board produce an out-of-range move, which the rule
    /// engine rejects.
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / SIDE,
            col: index % SIDE,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One game position: nine cells in row-major order.
///
/// `Board` is a `Copy` value. Every transition produces a new board, so a
/// search can explore many futures from one ancestor without the branches
/// interfering. The side to move is never stored; see
/// [`current_player`](super::rules::current_player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from raw cells.
    ///
    /// No reachability check is made; use [`Board::ensure_reachable`] when the
    /// cells come from an untrusted source.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Board { cells }
    }

    /// Build a board from a 3×3 grid of rows
    pub fn from_rows(rows: [[Cell; SIDE]; SIDE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIDE..(r + 1) * SIDE].copy_from_slice(row);
        }
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters once whitespace and `/` row
    /// separators are removed (`X`, `O`, and `.` for empty). Extra characters
    /// after the ninth cell are rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not 9 or any character is not a
    /// valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell, Move};
    ///
    /// let board = Board::from_string("XX. / OO. / ...").unwrap();
    /// assert_eq!(board.get(Move::new(0, 1)), Some(Cell::X));
    /// assert_eq!(board.get(Move::new(1, 2)), Some(Cell::Empty));
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Cell addressed by `mv`, or `None` if the move is off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Count the cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        CELLS - self.count(Cell::Empty)
    }

    /// Check if the cell at a row-major index is empty
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Check whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Row-major indices of all empty cells
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Copy of this board with one cell replaced. Callers are responsible for
    /// the index being in range.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    /// Compact nine-character encoding, e.g. `XX.OO....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIDE) && i < CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
