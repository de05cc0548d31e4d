//! Core search node type and its frontier ordering key.

use waypoint_kernel::grid::Position;

/// Index of a node inside the [`crate::arena::NodeArena`] that created it.
///
/// Ids are only meaningful for the arena (and therefore the search call)
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable search-tree vertex.
///
/// Nodes are created only by [`crate::arena::NodeArena`], which upholds:
///
/// - `depth == 0` iff `parent_id.is_none()`
/// - `depth == parent.depth + 1` and `g_cost == parent.g_cost + edge_cost`
///   for every child
///
/// `g_cost` is built strictly from edge costs; the heuristic lives only in
/// `h_cost` and enters the ordering once, through [`SearchNode::f_cost`].
///
/// Two nodes are the same search state iff their `position` fields are
/// equal, whatever their cost or parent. Explored-set and frontier
/// membership are keyed on `position` for that reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Arena index of this node.
    pub node_id: NodeId,
    /// Parent node (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// Grid cell this node stands on.
    pub position: Position,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated edge cost from the root.
    pub g_cost: i64,
    /// Heuristic estimate from `position` to the goal (0 when unused).
    pub h_cost: i64,
    /// Creation order within one search call. Tie-breaker only.
    pub creation_order: u64,
}

impl SearchNode {
    /// Compute `f_cost = g_cost + h_cost` (the priority ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// Positional equivalence used for duplicate detection.
    #[must_use]
    pub fn same_state(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}

/// The priority ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; equal costs pop in creation order, which keeps
/// expansion order deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}
