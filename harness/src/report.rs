//! Run report: the search report plus run context, and the plain-text
//! statistics summary.

use serde_json::Value;
use waypoint_kernel::proof::hash::ContentHash;
use waypoint_search::result::{SearchResult, SearchStats};
use waypoint_search::strategy::SearchConfig;

/// The search report extended with `strategy`, `heuristic` and `grid_digest`.
///
/// `heuristic` is the one actually used for ordering, so a heuristic named
/// for a non-A* strategy reports as `"zero"`.
#[must_use]
pub fn run_report_value(
    config: &SearchConfig,
    grid_digest: &ContentHash,
    result: &SearchResult,
) -> Value {
    let mut value = result.to_json_value();
    if let Value::Object(map) = &mut value {
        map.insert("strategy".into(), Value::from(config.strategy.name()));
        map.insert(
            "heuristic".into(),
            Value::from(config.effective_heuristic().name()),
        );
        map.insert("grid_digest".into(), Value::from(grid_digest.as_str()));
    }
    value
}

/// The six statistics lines, each newline-terminated.
#[must_use]
pub fn summary_lines(stats: &SearchStats, path_len: usize) -> String {
    format!(
        "Total nodes generated {}\n\
         Max nodes stored at once {}\n\
         Number of iterations {}\n\
         Depth of goal {}\n\
         Cost of path {}\n\
         Length of path {}\n",
        stats.nodes_generated,
        stats.max_frontier_size,
        stats.iterations,
        stats.goal_depth,
        stats.path_cost,
        path_len,
    )
}
