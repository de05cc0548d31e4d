//! Successor generation: the one neighbor rule shared by every strategy.

use waypoint_kernel::grid::{Direction, OccupancyGrid, Position};

use crate::arena::NodeArena;
use crate::heuristic::Heuristic;
use crate::node::NodeId;

/// Generate the children of `parent`, in North, East, South, West order.
///
/// A neighbor is produced iff it is in bounds and passable. Each child is
/// allocated in `arena` (and therefore counts as generated) whether or not
/// the caller later admits it to the frontier.
///
/// The child's `g_cost` is the parent's `g_cost` plus the edge cost of the
/// move; its `h_cost` is `heuristic` evaluated at the child's own position.
pub fn successors(
    arena: &mut NodeArena,
    parent: NodeId,
    grid: &OccupancyGrid,
    goal: Position,
    heuristic: &dyn Heuristic,
) -> Vec<NodeId> {
    let from = arena[parent].position;
    let mut children = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let Some(next) = direction.offset(from, grid.rows(), grid.cols()) else {
            continue;
        };
        if !grid.is_passable(next) {
            continue;
        }
        let h_cost = heuristic.estimate(next, goal);
        children.push(arena.child(parent, next, direction.edge_cost(), h_cost));
    }
    children
}
