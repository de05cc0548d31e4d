//! Run configuration from command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::strategy::SearchConfig;

/// Search a grid file for a path from its start cell (2) to its goal cell (3).
///
/// Selector names are kept as given; [`RunConfig::search_config`] resolves
/// them so that unknown names surface as [`SearchError`]s.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "waypoint")]
#[command(version, about, long_about = None)]
pub struct RunConfig {
    /// Grid file: whitespace-separated cell codes, one row per line
    pub grid_file: PathBuf,

    /// Search strategy: dfs, bfs, ucs, astar or ids
    pub strategy: String,

    /// Heuristic for astar: zero, manhattan or euclidean
    pub heuristic: Option<String>,

    /// Stop after this many expansions
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

impl RunConfig {
    /// Resolve the strategy and heuristic names.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] or
    /// [`SearchError::UnknownHeuristic`].
    pub fn search_config(&self) -> Result<SearchConfig, SearchError> {
        SearchConfig::parse(&self.strategy, self.heuristic.as_deref())
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_iterations: self.max_iterations,
            ..SearchPolicy::default()
        }
    }
}
