//! Waypoint Harness: grid files in, rendered paths and audited reports out.
//!
//! The harness owns everything around a search call: loading and validating
//! grid files, resolving selector names, rendering the path overlay, and
//! packaging a deterministic report with a content digest.
//!
//! The harness does NOT implement search logic. It delegates to
//! `waypoint_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod grid_file;
pub mod render;
pub mod report;
pub mod runner;
