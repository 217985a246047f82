//! Core domain types for the word-building game.

use serde::{Deserialize, Serialize};

/// A player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The human player.
    User,
    /// The computer opponent.
    Computer,
}

/// Opponent difficulty, forwarded opaquely to the move collaborator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// The opponent prefers short words.
    Easy,
    /// Balanced opponent strength.
    #[default]
    Medium,
    /// The opponent plays the longest word it finds.
    Hard,
}

/// Identifier of one grid cell.
///
/// The `(row, col)` pair is the join key between the field, the traced
/// path, and the provisional letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    row: usize,
    col: usize,
}

impl CellId {
    /// Creates a cell identifier from row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.row, self.col)
    }
}

/// One square of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square, rendered as `.`.
    Empty,
    /// Square holding an uppercase letter.
    Letter(char),
}

impl Cell {
    /// Converts a raw character; `.` is the empty sentinel.
    pub fn from_char(raw: char) -> Self {
        if raw == '.' {
            Cell::Empty
        } else {
            Cell::Letter(uppercase(raw))
        }
    }

    /// Renders the cell as a single character.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Letter(letter) => letter,
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Uppercases a single letter.
///
/// Multi-character expansions do not occur for the alphabets the game
/// accepts; the first mapped character is taken.
pub(crate) fn uppercase(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

/// Square letter grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    cells: Vec<Vec<Cell>>,
}

impl Field {
    /// Creates an empty `size × size` field.
    pub fn empty(size: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; size]; size],
        }
    }

    /// Builds a field from one string per row; `.` marks an empty square.
    ///
    /// Letters are upper-cased on the way in.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            cells: lines
                .iter()
                .map(|line| line.chars().map(Cell::from_char).collect())
                .collect(),
        }
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `cell`, or `None` when off the grid.
    pub fn get(&self, cell: CellId) -> Option<Cell> {
        self.cells.get(cell.row())?.get(cell.col()).copied()
    }

    /// Writes `value` at `cell`. The caller guarantees the cell is on the field.
    pub(crate) fn set(&mut self, cell: CellId, value: Cell) {
        self.cells[cell.row()][cell.col()] = value;
    }

    /// Checks whether any of the four orthogonal neighbors holds a letter.
    ///
    /// Off-grid neighbors are treated as absent and never satisfy adjacency.
    pub fn has_adjacent_letter(&self, cell: CellId) -> bool {
        let (row, col) = (cell.row(), cell.col());
        let neighbors = [
            row.checked_sub(1).map(|r| CellId::new(r, col)),
            Some(CellId::new(row + 1, col)),
            col.checked_sub(1).map(|c| CellId::new(row, c)),
            Some(CellId::new(row, col + 1)),
        ];

        neighbors
            .into_iter()
            .flatten()
            .any(|id| matches!(self.get(id), Some(Cell::Letter(_))))
    }

    /// Reads the word along the center row.
    ///
    /// Field generators embed one seed word there; for an empty field this is
    /// a row of sentinels.
    pub fn center_row_word(&self) -> String {
        match self.cells.get(self.cells.len() / 2) {
            Some(row) => row.iter().map(|cell| cell.as_char()).collect(),
            None => String::new(),
        }
    }

    /// Formats the field as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The single letter placed this turn, not yet part of a committed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionalLetter {
    cell: CellId,
    letter: char,
}

impl ProvisionalLetter {
    pub(crate) fn new(cell: CellId, letter: char) -> Self {
        Self { cell, letter }
    }

    /// Returns the cell holding the provisional letter.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// Returns the letter (uppercase).
    pub fn letter(&self) -> char {
        self.letter
    }
}

/// Phase of the in-progress turn, derived from the aggregate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No provisional letter on the board.
    Idle,
    /// A provisional letter is placed, nothing traced yet.
    LetterPlaced,
    /// A word is being traced.
    Tracing,
}
