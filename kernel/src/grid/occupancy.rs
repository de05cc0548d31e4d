//! `OccupancyGrid`: immutable rectangular grid of small integer cell codes.
//!
//! `0` is a wall; any nonzero value is passable. Two nonzero codes are
//! reserved to mark the start and goal cells, but they are passable exactly
//! like any other open cell.
//!
//! Cells are stored row-major in a single `Vec<u8>`.

use super::position::Position;

/// Impassable cell.
pub const WALL: u8 = 0;
/// Ordinary open cell.
pub const OPEN: u8 = 1;
/// Reserved code marking the start cell.
pub const START: u8 = 2;
/// Reserved code marking the goal cell.
pub const GOAL: u8 = 3;

/// Typed failure for grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no columns.
    Empty,
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} (grid must be rectangular)"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A validated, immutable occupancy grid.
///
/// Invariant: `cells.len() == rows * cols`, with `rows >= 1` and `cols >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    /// Build a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a zero-size grid and
    /// [`GridError::Ragged`] if the rows differ in length.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// An all-open grid of the given size (used by tests and benchmarks).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if either dimension is zero.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(vec![vec![OPEN; cols]; rows])
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// The cell code at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<u8> {
        self.in_bounds(pos)
            .then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// In bounds and nonzero.
    #[must_use]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|code| code != WALL)
    }

    /// All positions holding `code`, in row-major order.
    #[must_use]
    pub fn positions_of(&self, code: u8) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == code)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
            .collect()
    }

    /// Iterate rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.cols)
    }
}
