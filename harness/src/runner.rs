//! Harness runner: grid fixture + selectors in, audited report out.
//!
//! # Pipeline
//!
//! ```text
//! load_grid_file() → SearchConfig::parse() → search()
//!   → render_path() → run_report_value() → canonical_json_bytes() → hash
//! ```
//!
//! The runner does not search itself; it delegates to `waypoint_search` and
//! only packages the outcome.

use log::{debug, info};
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::result::SearchResult;
use waypoint_search::search::search;
use waypoint_search::strategy::SearchConfig;

use crate::config::RunConfig;
use crate::grid_file::{load_grid_file, GridFileError, GridFixture};
use crate::render::render_path;
use crate::report::{run_report_value, summary_lines};

/// Error during a harness run. A search that finds no path is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The grid file could not be loaded.
    GridFile(GridFileError),
    /// Selectors, policy, or endpoints were rejected before searching.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GridFile(e) => write!(f, "grid error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon(e) => write!(f, "report error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GridFile(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<GridFileError> for RunError {
    fn from(e: GridFileError) -> Self {
        Self::GridFile(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub config: SearchConfig,
    /// Content hash of the searched grid.
    pub grid_digest: ContentHash,
    pub result: SearchResult,
    /// Grid with the path overlaid (plain grid when no path was found).
    pub rendered: String,
    /// Canonical JSON of the run report.
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(RunReport, report_bytes)`.
    pub digest: ContentHash,
}

impl RunReport {
    #[must_use]
    pub fn found(&self) -> bool {
        self.result.is_goal_reached()
    }

    /// The six statistics lines.
    #[must_use]
    pub fn summary(&self) -> String {
        summary_lines(&self.result.stats, self.result.path.len())
    }
}

/// Search `fixture` and package the outcome.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search rejects its inputs, or
/// [`RunError::Canon`] if the report cannot be serialized.
pub fn run(
    fixture: &GridFixture,
    config: &SearchConfig,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    let grid_digest = fixture.digest()?;
    debug!("[harness] grid {grid_digest} with {}", config.strategy);

    let result = search(&fixture.grid, fixture.start, fixture.goal, config, policy)?;
    let rendered = render_path(&fixture.grid, &result.path);
    let report_bytes = canonical_json_bytes(&run_report_value(config, &grid_digest, &result))?;
    let digest = canonical_hash(HashDomain::RunReport, &report_bytes);
    log_outcome(&result, &digest);

    Ok(RunReport {
        config: *config,
        grid_digest,
        result,
        rendered,
        report_bytes,
        digest,
    })
}

/// Load the grid named by `config` and run it.
///
/// # Errors
///
/// Any [`RunError`]; selectors are resolved before the grid file is read.
pub fn run_config(config: &RunConfig) -> Result<(GridFixture, RunReport), RunError> {
    let search_config = config.search_config()?;
    let fixture = load_grid_file(&config.grid_file)?;
    let report = run(&fixture, &search_config, &config.policy())?;
    Ok((fixture, report))
}

fn log_outcome(result: &SearchResult, digest: &ContentHash) {
    info!(
        "[harness] {} in {} iterations, report {digest}",
        result.termination, result.stats.iterations
    );
}
