//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]; this module is
//! the single authority for the separator bytes.

/// Typed domain separator for [`super::hash::canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte string used as a
/// SHA-256 prefix, so equal bytes hashed under different domains never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Grid contents (dimensions + cell codes).
    GridFixture,
    /// Recovered path (ordered positions).
    SearchPath,
    /// Full search report (config + path + statistics + termination).
    SearchReport,
    /// Harness run report (search report + rendering).
    RunReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &[HashDomain] = &[
        Self::GridFixture,
        Self::SearchPath,
        Self::SearchReport,
        Self::RunReport,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::GridFixture => b"WAYPOINT::GRID_FIXTURE::V1\0",
            Self::SearchPath => b"WAYPOINT::SEARCH_PATH::V1\0",
            Self::SearchReport => b"WAYPOINT::SEARCH_REPORT::V1\0",
            Self::RunReport => b"WAYPOINT::RUN_REPORT::V1\0",
        }
    }
}

impl std::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GridFixture => "GridFixture",
            Self::SearchPath => "SearchPath",
            Self::SearchReport => "SearchReport",
            Self::RunReport => "RunReport",
        };
        f.write_str(name)
    }
}
