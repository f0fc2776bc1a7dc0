//! Grid storage: one logical 9x9 table held in three synchronized views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address in `[0,9) x [0,9)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Panics when either coordinate is out of range;
    /// coordinates are always internally generated, so an out-of-range
    /// value is a caller bug, not an input condition.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < 9, "row out of range: {}", row);
        assert!(col < 9, "col out of range: {}", col);
        Self { row, col }
    }

    /// Row-major linear index in `[0, 81)`.
    pub fn index(self) -> usize {
        self.row * 9 + self.col
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range: {}", index);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Index of the 3x3 block containing this cell, in `[0, 9)`.
    pub fn block(self) -> usize {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Index of this cell within its block, in `[0, 9)`.
    pub fn block_slot(self) -> usize {
        (self.row % 3) * 3 + self.col % 3
    }
}

/// One 9x9 puzzle state, 0 meaning empty.
///
/// The same 81 cells are materialized three times so that a row, column,
/// or block check each reads a single 9-element line. [`Grid::set`] is
/// the only mutation path and writes all three views together, keeping
/// `rows[r][c] == cols[c][r] == blocks[b][i]` for every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    pub(crate) rows: [[u8; 9]; 9],
    pub(crate) cols: [[u8; 9]; 9],
    pub(crate) blocks: [[u8; 9]; 9],
}

impl Grid {
    /// All cells empty.
    pub fn empty() -> Self {
        Self {
            rows: [[0; 9]; 9],
            cols: [[0; 9]; 9],
            blocks: [[0; 9]; 9],
        }
    }

    /// Parse a puzzle given as nine rows of nine ASCII digits, '0' for an
    /// empty cell. Row `j` of the input supplies row `j` of the grid.
    pub fn from_rows(lines: &[&str]) -> Result<Self, ParseGridError> {
        if lines.len() != 9 {
            return Err(ParseGridError::WrongRowCount(lines.len()));
        }
        let mut grid = Self::empty();
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != 9 {
                return Err(ParseGridError::WrongRowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                grid.set(Position::new(row, col), digit(ch, row, col)?);
            }
        }
        Ok(grid)
    }

    /// Parse a puzzle given as one 81-character digit string, row-major.
    pub fn from_line(s: &str) -> Result<Self, ParseGridError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::WrongLength(len));
        }
        let mut grid = Self::empty();
        for (index, ch) in s.chars().enumerate() {
            let pos = Position::from_index(index);
            grid.set(pos, digit(ch, pos.row, pos.col)?);
        }
        Ok(grid)
    }

    /// Current value at `pos`, 0 if empty.
    pub fn get(&self, pos: Position) -> u8 {
        self.rows[pos.row][pos.col]
    }

    /// Write `value` into all three views. `value` is in `[0, 9]`, 0
    /// clearing the cell. Validity against the uniqueness constraints is
    /// not checked here.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9, "cell value out of range: {}", value);
        self.rows[pos.row][pos.col] = value;
        self.cols[pos.col][pos.row] = value;
        self.blocks[pos.block()][pos.block_slot()] = value;
    }

    /// True iff no cell holds 0.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    /// Linear indices of the empty cells in row-major scan order. The
    /// solver computes this once per solve; the order is its decision
    /// order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..81)
            .filter(|&index| self.get(Position::from_index(index)) == 0)
            .collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// The 81-character row-major digit form, the inverse of
    /// [`Grid::from_line`].
    pub fn to_line(&self) -> String {
        self.rows
            .iter()
            .flatten()
            .map(|&v| char::from(b'0' + v))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

fn digit(ch: char, row: usize, col: usize) -> Result<u8, ParseGridError> {
    ch.to_digit(10)
        .map(|d| d as u8)
        .ok_or(ParseGridError::InvalidDigit { row, col, ch })
}

/// Bordered 19-column table: a dash rule before every 3-row band and at
/// the end, `|` in front of columns 0, 3, 6 and after column 8, a blank
/// for an empty cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(19);
        for (row, cells) in self.rows.iter().enumerate() {
            if row % 3 == 0 {
                writeln!(f, "{}", rule)?;
            }
            for (col, &value) in cells.iter().enumerate() {
                let sep = if col % 3 == 0 { '|' } else { ' ' };
                let shown = if value == 0 {
                    ' '
                } else {
                    char::from(b'0' + value)
                };
                write!(f, "{}{}", sep, shown)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)
    }
}

// Serde goes through the canonical 81-character form so a deserialized
// grid always re-enters through the parser and the three views can never
// disagree.
impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_line()
    }
}

impl TryFrom<String> for Grid {
    type Error = ParseGridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Grid::from_line(&s)
    }
}

/// Why a textual puzzle was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// Input did not contain exactly nine rows
    WrongRowCount(usize),
    /// A row did not contain exactly nine characters
    WrongRowLength { row: usize, len: usize },
    /// A character outside '0'..='9'
    InvalidDigit { row: usize, col: usize, ch: char },
    /// Single-line form was not exactly 81 characters
    WrongLength(usize),
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(n) => write!(f, "expected 9 rows, got {}", n),
            Self::WrongRowLength { row, len } => {
                write!(f, "row {} has {} characters, expected 9", row + 1, len)
            }
            Self::InvalidDigit { row, col, ch } => {
                write!(
                    f,
                    "invalid character {:?} at row {} column {}",
                    ch,
                    row + 1,
                    col + 1
                )
            }
            Self::WrongLength(n) => write!(f, "expected 81 characters, got {}", n),
        }
    }
}

impl std::error::Error for ParseGridError {}
