use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The four alignment orientations as (row, column) steps:
/// horizontal, vertical, and the two diagonals.
const ORIENTATIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// The raw 7×6 grid. Row 0 is the bottom row, so pieces fall toward lower
/// row indices and every column's occupied cells form a contiguous run
/// from row 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in 0..ROWS {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) completes four in a row.
    ///
    /// Examines only the four lines through that cell, walking outward in
    /// both opposite directions per orientation. Running this once at the
    /// just-placed piece is enough to detect any new alignment; the rest
    /// of the board is never rescanned.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        for &(step_r, step_c) in &ORIENTATIONS {
            let mut connected = 1; // a piece is at least connected with itself
            for (dir_r, dir_c) in [(step_r, step_c), (-step_r, -step_c)] {
                let mut r = row as i32 + dir_r;
                let mut c = col as i32 + dir_c;
                while (0..ROWS as i32).contains(&r)
                    && (0..COLS as i32).contains(&c)
                    && self.cells[r as usize][c as usize] == cell
                {
                    connected += 1;
                    r += dir_r;
                    c += dir_c;
                }
            }
            if connected >= 4 {
                return true;
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::One => 'X',
                    Cell::Two => 'O',
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "0 1 2 3 4 5 6")
    }
}
