//! Heuristic trait and the built-in estimates.

use waypoint_kernel::grid::distance::{euclidean_floor, manhattan};
use waypoint_kernel::grid::Position;

/// Estimate of the remaining cost from a position to the goal.
///
/// Implementations must be pure and non-negative. For A* to return an
/// optimal path the estimate must also be admissible: never more than the
/// true cheapest remaining cost under the direction-cost model.
pub trait Heuristic {
    /// Stable identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn estimate(&self, from: Position, goal: Position) -> i64;
}

/// Always 0. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn estimate(&self, _from: Position, _goal: Position) -> i64 {
        0
    }
}

/// Manhattan distance. Admissible because the cheapest edge costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn name(&self) -> &'static str {
        "manhattan"
    }

    fn estimate(&self, from: Position, goal: Position) -> i64 {
        manhattan(from, goal)
    }
}

/// Euclidean distance, floored to an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn estimate(&self, from: Position, goal: Position) -> i64 {
        euclidean_floor(from, goal)
    }
}

/// Adapter for a plain function pointer.
#[derive(Clone, Copy)]
pub struct FnHeuristic {
    name: &'static str,
    estimate: fn(Position, Position) -> i64,
}

impl FnHeuristic {
    #[must_use]
    pub const fn new(name: &'static str, estimate: fn(Position, Position) -> i64) -> Self {
        Self { name, estimate }
    }
}

impl std::fmt::Debug for FnHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHeuristic")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Heuristic for FnHeuristic {
    fn name(&self) -> &'static str {
        self.name
    }

    fn estimate(&self, from: Position, goal: Position) -> i64 {
        (self.estimate)(from, goal)
    }
}
