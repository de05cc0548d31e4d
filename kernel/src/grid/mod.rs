//! Grid module: coordinates, cardinal moves, and the occupancy grid.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod direction;
pub mod distance;
pub mod occupancy;
pub mod position;

pub use direction::Direction;
pub use occupancy::{GridError, OccupancyGrid, GOAL, OPEN, START, WALL};
pub use position::Position;
