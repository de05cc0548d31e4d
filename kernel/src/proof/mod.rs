//! Proof module: canonical serialization and content hashing for reports.
//!
//! Nothing in `proof` depends on `grid`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
