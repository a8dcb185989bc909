//! Peg solitaire on a rectangular grid.
//!
//! A move jumps a peg over an orthogonally adjacent peg into an empty hole,
//! removing the peg jumped over. The board is solved when one peg is left.

use std::fmt;
use std::str::FromStr;

use crate::pruning::{is_dead_end_among, is_local_dead_end};
use crate::puzzle::{rectangular_width, Puzzle, PuzzleError};

/// A cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `#`: not part of the board
    Unused,
    /// `*`
    Peg,
    /// `.`
    Empty,
}

impl Cell {
    pub fn from_marker(marker: char) -> Option<Cell> {
        match marker {
            '#' => Some(Cell::Unused),
            '*' => Some(Cell::Peg),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Unused => '#',
            Cell::Peg => '*',
            Cell::Empty => '.',
        }
    }
}

/// Snapshot of a peg solitaire board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PegSolitaire {
    rows: usize,
    cols: usize,
    /// Row-major
    cells: Vec<Cell>,
}

impl PegSolitaire {
    /// Build a board from rows of `#`, `*` and `.` markers.
    pub fn new(grid: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        let cols = rectangular_width(&grid)?;
        let rows = grid.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, markers) in grid.iter().enumerate() {
            for (col, &marker) in markers.iter().enumerate() {
                let cell = Cell::from_marker(marker)
                    .ok_or(PuzzleError::InvalidMarker { marker, row, col })?;
                cells.push(cell);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Number of pegs left on the board.
    pub fn pegs(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    /// Move the peg at `from` over `over` into the hole at `to`.
    fn jump(&self, from: usize, over: usize, to: usize) -> Self {
        let mut cells = self.cells.clone();
        cells[to] = Cell::Peg;
        cells[over] = Cell::Empty;
        cells[from] = Cell::Empty;
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    fn is_peg(&self, index: usize) -> bool {
        self.cells[index] == Cell::Peg
    }
}

impl FromStr for PegSolitaire {
    type Err = PuzzleError;

    /// Parse one board row per non-empty line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        Self::new(grid)
    }
}

impl Puzzle for PegSolitaire {
    fn is_solved(&self) -> bool {
        self.pegs() == 1
    }

    /// Scan holes row-major; for each, try jumps arriving from the left,
    /// right, below and above.
    fn extensions(&self) -> Vec<Self> {
        let cols = self.cols;
        let mut result = Vec::new();
        for (hole, _) in self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Cell::Empty)
        {
            let (row, col) = (hole / cols, hole % cols);
            if col >= 2 && self.is_peg(hole - 1) && self.is_peg(hole - 2) {
                result.push(self.jump(hole - 2, hole - 1, hole));
            }
            if col + 2 < cols && self.is_peg(hole + 1) && self.is_peg(hole + 2) {
                result.push(self.jump(hole + 2, hole + 1, hole));
            }
            if row + 2 < self.rows && self.is_peg(hole + cols) && self.is_peg(hole + 2 * cols) {
                result.push(self.jump(hole + 2 * cols, hole + cols, hole));
            }
            if row >= 2 && self.is_peg(hole - cols) && self.is_peg(hole - 2 * cols) {
                result.push(self.jump(hole - 2 * cols, hole - cols, hole));
            }
        }
        result
    }

    fn fail_fast(&self) -> bool {
        is_local_dead_end(self)
    }

    fn fail_fast_with(&self, extensions: &[Self]) -> bool {
        is_dead_end_among(self, extensions)
    }
}

impl fmt::Display for PegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.marker())?;
            }
        }
        Ok(())
    }
}
