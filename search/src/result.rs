//! Search outcome, run statistics, and the deterministic JSON report.

use serde_json::{json, Value};
use waypoint_kernel::grid::Position;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::arena::NodeArena;
use crate::node::{NodeId, SearchNode};

/// Why the expansion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node at the goal position passed the goal test.
    GoalReached { node_id: NodeId },
    /// The frontier emptied without reaching the goal: no path exists.
    FrontierExhausted,
    /// `SearchPolicy::max_iterations` was hit before either of the above.
    IterationBudgetExceeded { limit: u64 },
    /// Iterative deepening reached its depth-bound ceiling with nodes still
    /// being cut off.
    DepthBoundExhausted { bound: u32 },
}

impl TerminationReason {
    fn to_json(self) -> Value {
        match self {
            Self::GoalReached { node_id } => {
                json!({ "kind": "goal_reached", "node_id": node_id.index() })
            }
            Self::FrontierExhausted => json!({ "kind": "frontier_exhausted" }),
            Self::IterationBudgetExceeded { limit } => {
                json!({ "kind": "iteration_budget_exceeded", "limit": limit })
            }
            Self::DepthBoundExhausted { bound } => {
                json!({ "kind": "depth_bound_exhausted", "bound": bound })
            }
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalReached { node_id } => write!(f, "goal reached at node {node_id}"),
            Self::FrontierExhausted => f.write_str("frontier exhausted"),
            Self::IterationBudgetExceeded { limit } => {
                write!(f, "iteration budget of {limit} exceeded")
            }
            Self::DepthBoundExhausted { bound } => {
                write!(f, "depth bound ceiling {bound} exhausted")
            }
        }
    }
}

/// Counters for one search call. Never shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Every node instance created, root included.
    pub nodes_generated: u64,
    /// True observed maximum frontier occupancy.
    pub max_frontier_size: u64,
    /// Pop/expand cycles, summed over IDS passes.
    pub iterations: u64,
    /// Depth of the goal node; 0 when no goal was reached.
    pub goal_depth: u32,
    /// Cost re-derived from the recovered path's coordinates; 0 when no goal
    /// was reached or the path fails the audit.
    pub path_cost: i64,
    /// Goal node's accumulated `g_cost`; 0 when no goal was reached.
    pub accumulated_cost: i64,
    /// Final depth bound (iterative deepening only).
    pub depth_bound: Option<u32>,
    /// Depth-limited passes run (1 for non-iterative strategies).
    pub passes: u32,
}

/// The six-field summary every strategy reports:
/// `(goal_node, nodes_generated, max_frontier_size, iterations, goal_depth, path_cost)`.
pub type SearchTuple = (Option<SearchNode>, u64, u64, u64, u32, i64);

/// Terminal outcome of one search call. Immutable once returned.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub start: Position,
    pub goal: Position,
    /// The node that passed the goal test, if any.
    pub goal_node: Option<SearchNode>,
    /// Start-to-goal positions; empty when no goal was reached.
    pub path: Vec<Position>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
    /// Every node created during the call, indexed by [`NodeId`].
    pub nodes: NodeArena,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Re-walk the goal node's parent chain through the owned arena.
    #[must_use]
    pub fn extract_path(&self) -> Vec<Position> {
        self.goal_node
            .as_ref()
            .map(|goal| crate::path::extract_path(&self.nodes, goal.node_id))
            .unwrap_or_default()
    }

    /// `true` if the recovered path passes the coordinate audit and its cost
    /// agrees with the goal node's accumulated cost (vacuously true when no
    /// goal was reached).
    #[must_use]
    pub fn is_cost_consistent(&self) -> bool {
        if self.goal_node.is_none() {
            return true;
        }
        crate::path::audit_path_cost(&self.path) == Ok(self.stats.accumulated_cost)
    }

    #[must_use]
    pub fn into_tuple(self) -> SearchTuple {
        let SearchStats {
            nodes_generated,
            max_frontier_size,
            iterations,
            goal_depth,
            path_cost,
            ..
        } = self.stats;
        (
            self.goal_node,
            nodes_generated,
            max_frontier_size,
            iterations,
            goal_depth,
            path_cost,
        )
    }

    /// The report as a JSON value. Contains only integers, strings, booleans,
    /// arrays and objects, so it is always canonicalizable.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let path: Vec<Value> = self.path.iter().map(|&p| position_json(p)).collect();
        json!({
            "start": position_json(self.start),
            "goal": position_json(self.goal),
            "found": self.is_goal_reached(),
            "path": path,
            "stats": {
                "nodes_generated": self.stats.nodes_generated,
                "max_frontier_size": self.stats.max_frontier_size,
                "iterations": self.stats.iterations,
                "goal_depth": self.stats.goal_depth,
                "path_cost": self.stats.path_cost,
                "accumulated_cost": self.stats.accumulated_cost,
                "depth_bound": self.stats.depth_bound,
                "passes": self.stats.passes,
            },
            "termination": self.termination.to_json(),
        })
    }

    /// Canonical JSON bytes of [`SearchResult::to_json_value`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from the canonical writer.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from the canonical writer.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchReport,
            &self.to_canonical_json_bytes()?,
        ))
    }

    /// Content hash of the path alone, independent of search statistics.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from the canonical writer.
    pub fn path_digest(&self) -> Result<ContentHash, CanonError> {
        let path: Vec<Value> = self.path.iter().map(|&p| position_json(p)).collect();
        let bytes = canonical_json_bytes(&Value::Array(path))?;
        Ok(canonical_hash(HashDomain::SearchPath, &bytes))
    }
}

/// `[row, col]` as a JSON array.
#[must_use]
pub fn position_json(p: Position) -> Value {
    json!([p.row, p.col])
}
