//! Waypoint Search: interchangeable uninformed and informed grid search over
//! one shared expansion loop.
//!
//! This crate depends only on `waypoint_kernel`. It does NOT depend on
//! `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (grid, hashing)     (frontier, nodes)     (grid files, rendering, runs)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] -- immutable search-tree vertex, identity by position
//! - [`arena::NodeArena`] -- per-invocation node store; parents are arena indices
//! - [`frontier::Frontier`] -- stack / queue / priority disciplines
//! - [`heuristic::Heuristic`] -- pluggable remaining-cost estimate
//! - [`strategy::SearchConfig`] -- strategy + heuristic selection
//! - [`policy::SearchPolicy`] -- iteration cap, goal-test timing, IDS ceiling
//! - [`result::SearchResult`] -- terminal outcome with path and statistics

#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod result;
pub mod search;
pub mod strategy;
pub mod successor;
