//! Path recovery and independent cost audit.

use waypoint_kernel::grid::{Direction, OccupancyGrid, Position};

use crate::arena::NodeArena;
use crate::node::{NodeId, SearchNode};

/// A recovered path had two consecutive positions that are not one cardinal
/// step apart, so no edge cost can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathAuditError {
    /// Index of `from` within the path.
    pub index: usize,
    pub from: Position,
    pub to: Position,
}

impl std::fmt::Display for PathAuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "path step {} from {} to {} is not a single cardinal move",
            self.index, self.from, self.to
        )
    }
}

impl std::error::Error for PathAuditError {}

/// Walk parent links from `goal` to the root through `lookup`, then reverse.
///
/// Depends only on the parent-chain contract, so any node store can supply
/// `lookup`. A dangling parent id ends the walk early.
pub fn extract_path_with<'a, F>(goal: &'a SearchNode, lookup: F) -> Vec<Position>
where
    F: Fn(NodeId) -> Option<&'a SearchNode>,
{
    let mut path = Vec::with_capacity(goal.depth as usize + 1);
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.position);
        current = node.parent_id.and_then(&lookup);
    }
    path.reverse();
    path
}

/// Positions from the root to `goal`, start first.
///
/// Returns an empty path if `goal` was not issued by `arena`.
#[must_use]
pub fn extract_path(arena: &NodeArena, goal: NodeId) -> Vec<Position> {
    match arena.get(goal) {
        Some(node) => extract_path_with(node, |id| arena.get(id)),
        None => Vec::new(),
    }
}

/// Re-derive the cost of `path` from its coordinates alone: each step's
/// direction is inferred from the position delta and priced by
/// [`Direction::edge_cost`].
///
/// # Errors
///
/// Returns [`PathAuditError`] at the first pair of positions that are not
/// 4-adjacent.
pub fn audit_path_cost(path: &[Position]) -> Result<i64, PathAuditError> {
    path.windows(2)
        .enumerate()
        .try_fold(0_i64, |total, (index, pair)| {
            let (from, to) = (pair[0], pair[1]);
            Direction::between(from, to)
                .map(|direction| total + direction.edge_cost())
                .ok_or(PathAuditError { index, from, to })
        })
}

/// `true` if every position is passable and consecutive positions are
/// 4-adjacent.
#[must_use]
pub fn is_walkable(grid: &OccupancyGrid, path: &[Position]) -> bool {
    path.iter().all(|&p| grid.is_passable(p))
        && path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
}
