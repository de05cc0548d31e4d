//! Waypoint Kernel: the immutable data model shared by every search strategy.
//!
//! # API Surface
//!
//! - [`grid::OccupancyGrid`] -- validated rectangular occupancy grid
//! - [`grid::Position`] / [`grid::Direction`] -- coordinates and the four cardinal moves
//! - [`grid::Direction::edge_cost`] -- the direction-dependent edge-cost model
//! - [`proof::canon::canonical_json_bytes`] + [`proof::hash::canonical_hash`] --
//!   deterministic report serialization and content addressing
//!
//! # Module Dependency Direction
//!
//! `grid` ← `proof`
//!
//! `grid` depends on nothing internal. `proof` never reaches into `grid`;
//! callers build JSON values and hand them over.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
