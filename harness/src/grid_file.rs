//! Grid file provider: parse and validate whitespace-separated integer grids.
//!
//! # Format
//!
//! One grid row per non-blank line, cells separated by whitespace. Every
//! cell is a `u8` code: `0` wall, nonzero passable, `2` the start and `3`
//! the goal. Exactly one start and one goal are required.
//!
//! ```text
//! 2 1 1
//! 1 0 1
//! 1 1 3
//! ```

use std::path::Path;

use serde_json::Value;
use waypoint_kernel::grid::{GridError, OccupancyGrid, Position, GOAL, START};
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Error loading or validating a grid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridFileError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// A token is not a non-negative integer.
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    /// An integer token does not fit a cell code.
    ValueOutOfRange {
        line: usize,
        column: usize,
        token: String,
    },
    /// The rows do not form a non-empty rectangle.
    Shape(GridError),
    /// No cell carries the given endpoint code.
    MissingEndpoint { code: u8 },
    /// More than one cell carries the given endpoint code.
    DuplicateEndpoint {
        code: u8,
        first: Position,
        second: Position,
    },
}

impl std::fmt::Display for GridFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read grid file {path}: {detail}"),
            Self::InvalidToken {
                line,
                column,
                token,
            } => write!(f, "line {line}, cell {column}: '{token}' is not a cell code"),
            Self::ValueOutOfRange {
                line,
                column,
                token,
            } => write!(f, "line {line}, cell {column}: {token} exceeds the largest cell code"),
            Self::Shape(e) => write!(f, "malformed grid: {e}"),
            Self::MissingEndpoint { code } => {
                write!(f, "grid has no {} cell (code {code})", endpoint_name(*code))
            }
            Self::DuplicateEndpoint {
                code,
                first,
                second,
            } => write!(
                f,
                "grid has more than one {} cell (code {code}) at {first} and {second}",
                endpoint_name(*code)
            ),
        }
    }
}

impl std::error::Error for GridFileError {}

impl From<GridError> for GridFileError {
    fn from(e: GridError) -> Self {
        Self::Shape(e)
    }
}

fn endpoint_name(code: u8) -> &'static str {
    if code == START {
        "start"
    } else {
        "goal"
    }
}

/// A validated grid with its located endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFixture {
    pub grid: OccupancyGrid,
    pub start: Position,
    pub goal: Position,
}

impl GridFixture {
    /// Locate the unique start and goal cells of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridFileError::MissingEndpoint`] or
    /// [`GridFileError::DuplicateEndpoint`].
    pub fn from_grid(grid: OccupancyGrid) -> Result<Self, GridFileError> {
        let start = unique_cell(&grid, START)?;
        let goal = unique_cell(&grid, GOAL)?;
        Ok(Self { grid, start, goal })
    }

    /// Canonical JSON of the grid: `{"cells": [[..], ..], "cols": c, "rows": r}`.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let cells: Vec<Value> = self
            .grid
            .row_slices()
            .map(|row| Value::Array(row.iter().map(|&c| Value::from(c)).collect()))
            .collect();
        serde_json::json!({
            "rows": self.grid.rows(),
            "cols": self.grid.cols(),
            "cells": cells,
        })
    }

    /// Content hash of the grid contents.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from the canonical writer.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::GridFixture, &bytes))
    }
}

fn unique_cell(grid: &OccupancyGrid, code: u8) -> Result<Position, GridFileError> {
    match grid.positions_of(code).as_slice() {
        [] => Err(GridFileError::MissingEndpoint { code }),
        [only] => Ok(*only),
        [first, second, ..] => Err(GridFileError::DuplicateEndpoint {
            code,
            first: *first,
            second: *second,
        }),
    }
}

/// Parse grid text.
///
/// # Errors
///
/// Returns [`GridFileError`] for bad tokens, a non-rectangular or empty
/// grid, or a missing or repeated start/goal.
pub fn parse_grid_text(text: &str) -> Result<GridFixture, GridFileError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(column, token)| parse_cell(index + 1, column + 1, token))
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(row);
    }
    GridFixture::from_grid(OccupancyGrid::new(rows)?)
}

fn parse_cell(line: usize, column: usize, token: &str) -> Result<u8, GridFileError> {
    match token.parse::<u64>() {
        Ok(value) => u8::try_from(value).map_err(|_| GridFileError::ValueOutOfRange {
            line,
            column,
            token: token.to_owned(),
        }),
        Err(_) => Err(GridFileError::InvalidToken {
            line,
            column,
            token: token.to_owned(),
        }),
    }
}

/// Read and parse a grid file.
///
/// # Errors
///
/// Returns [`GridFileError::Io`] if the file cannot be read, otherwise as
/// [`parse_grid_text`].
pub fn load_grid_file(path: &Path) -> Result<GridFixture, GridFileError> {
    let text = std::fs::read_to_string(path).map_err(|e| GridFileError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    parse_grid_text(&text)
}
