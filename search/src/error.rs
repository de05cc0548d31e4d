//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, iteration budget exceeded) are expressed
//! via [`crate::result::TerminationReason`] inside a
//! [`crate::result::SearchResult`]; "no path" is never an error.

use waypoint_kernel::grid::Position;

/// Which search endpoint a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    Goal,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any grid traversal begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy selector named no known strategy.
    UnknownStrategy { name: String },
    /// A heuristic selector named no known heuristic.
    UnknownHeuristic { name: String },
    /// The policy combination cannot be honored.
    InvalidPolicy { detail: String },
    /// Start or goal lies outside the grid.
    EndpointOutOfBounds {
        role: EndpointRole,
        position: Position,
    },
    /// Start or goal is a wall cell.
    EndpointBlocked {
        role: EndpointRole,
        position: Position,
    },
    /// A caller-supplied frontier already held entries.
    FrontierNotEmpty { len: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(
                f,
                "unknown search strategy '{name}' (expected one of: dfs, bfs, ucs, astar, ids)"
            ),
            Self::UnknownHeuristic { name } => write!(
                f,
                "unknown heuristic '{name}' (expected one of: zero, manhattan, euclidean)"
            ),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::EndpointOutOfBounds { role, position } => {
                write!(f, "{role} position {position} is outside the grid")
            }
            Self::EndpointBlocked { role, position } => {
                write!(f, "{role} position {position} is a wall")
            }
            Self::FrontierNotEmpty { len } => {
                write!(f, "frontier must be empty before a search, found {len} entries")
            }
        }
    }
}

impl std::error::Error for SearchError {}
