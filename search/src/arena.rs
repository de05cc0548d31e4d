//! Per-invocation node store.
//!
//! Every node created during one search call lives here, indexed by
//! [`NodeId`]. A node's `parent_id` is an index back into the same arena,
//! so parents stay alive for as long as the arena does and path
//! reconstruction is O(depth).
//!
//! The arena also serves as the "nodes generated" counter: its length is the
//! number of node instances created by this call and nothing else.

use waypoint_kernel::grid::Position;

use crate::node::{NodeId, SearchNode};

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Create a root node (depth 0, no parent, zero path cost).
    pub fn root(&mut self, position: Position, h_cost: i64) -> NodeId {
        self.alloc(None, position, 0, 0, h_cost)
    }

    /// Create a child of `parent` reached by one edge of cost `edge_cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn child(
        &mut self,
        parent: NodeId,
        position: Position,
        edge_cost: i64,
        h_cost: i64,
    ) -> NodeId {
        let (depth, g_cost) = {
            let p = &self.nodes[parent.0];
            (p.depth + 1, p.g_cost + edge_cost)
        };
        self.alloc(Some(parent), position, depth, g_cost, h_cost)
    }

    fn alloc(
        &mut self,
        parent_id: Option<NodeId>,
        position: Position,
        depth: u32,
        g_cost: i64,
        h_cost: i64,
    ) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            position,
            depth,
            g_cost,
            h_cost,
            creation_order: self.nodes.len() as u64,
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
