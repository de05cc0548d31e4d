//! Position-keyed explored set.

use std::collections::BTreeSet;

use waypoint_kernel::grid::Position;

/// Positions already popped and expanded during one search pass.
#[derive(Debug, Clone, Default)]
pub struct ExploredSet {
    positions: BTreeSet<Position>,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `position` explored. Returns `false` if it already was.
    pub fn insert(&mut self, position: Position) -> bool {
        self.positions.insert(position)
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forget everything (start of a new iterative-deepening pass).
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}
