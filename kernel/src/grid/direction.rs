//! Cardinal moves and the direction-dependent edge-cost model.
//!
//! Edge cost depends only on the direction of travel, never on the cells
//! involved: North = 1, East = 2, South = 3, West = 4. The cheapest edge
//! therefore costs 1, which keeps step-count heuristics admissible.

use super::position::Position;

/// One of the four cardinal moves. Row 0 is the northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Successor generation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Cost of a single step in this direction.
    #[must_use]
    pub const fn edge_cost(self) -> i64 {
        match self {
            Self::North => 1,
            Self::East => 2,
            Self::South => 3,
            Self::West => 4,
        }
    }

    /// The neighbor of `from` in this direction, if it lies inside a
    /// `rows` x `cols` grid.
    #[must_use]
    pub fn offset(self, from: Position, rows: usize, cols: usize) -> Option<Position> {
        let (row, col) = match self {
            Self::North => (from.row.checked_sub(1)?, from.col),
            Self::East => (from.row, from.col.checked_add(1)?),
            Self::South => (from.row.checked_add(1)?, from.col),
            Self::West => (from.row, from.col.checked_sub(1)?),
        };
        (row < rows && col < cols).then_some(Position { row, col })
    }

    /// Infer the direction of a single step purely from the coordinate delta.
    ///
    /// Returns `None` unless `to` is 4-adjacent to `from`.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }
        Some(if to.row < from.row {
            Self::North
        } else if to.row > from.row {
            Self::South
        } else if to.col > from.col {
            Self::East
        } else {
            Self::West
        })
    }

    /// Single-character path marker used when overlaying a route on a grid.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => '!',
            Self::West => '<',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
