//! Search entry points and the shared expansion loop.
//!
//! Every strategy runs the same loop: seed the frontier with the root, pop,
//! mark explored, count the iteration, goal-test, expand through
//! [`successors`], filter, insert. Strategies differ only in the frontier
//! discipline, the heuristic, goal-test timing, and (for iterative
//! deepening) a depth bound applied to children.

use log::{debug, trace, warn};
use waypoint_kernel::grid::{OccupancyGrid, Position};

use crate::arena::NodeArena;
use crate::error::{EndpointRole, SearchError};
use crate::explored::ExploredSet;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier};
use crate::heuristic::Heuristic;
use crate::node::NodeId;
use crate::path::{audit_path_cost, extract_path};
use crate::policy::{GoalTestTiming, SearchPolicy};
use crate::result::{SearchResult, SearchStats, TerminationReason};
use crate::strategy::{SearchConfig, Strategy};
use crate::successor::successors;

/// How one pass of the expansion loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassOutcome {
    Goal(NodeId),
    /// Frontier emptied. `cutoff` is set if the depth bound dropped any
    /// otherwise-admissible child.
    Exhausted { cutoff: bool },
    BudgetExceeded { limit: u64 },
}

/// Fixed inputs for one or more passes over the same grid.
struct Expansion<'a> {
    grid: &'a OccupancyGrid,
    start: Position,
    goal: Position,
    heuristic: &'a dyn Heuristic,
    goal_test: GoalTestTiming,
    max_iterations: Option<u64>,
}

impl Expansion<'_> {
    /// Run the loop once with `frontier`, which must be empty. Nodes go into
    /// `arena`; pop/expand cycles are added to `iterations`.
    fn run_pass(
        &self,
        arena: &mut NodeArena,
        frontier: &mut dyn Frontier,
        depth_limit: Option<u32>,
        iterations: &mut u64,
    ) -> PassOutcome {
        let root = arena.root(self.start, self.heuristic.estimate(self.start, self.goal));
        frontier.insert(&arena[root]);
        if self.goal_test == GoalTestTiming::OnGeneration && self.start == self.goal {
            return PassOutcome::Goal(root);
        }

        let mut explored = ExploredSet::new();
        let mut cutoff = false;
        let dedup_frontier = !frontier.resolves_duplicates();

        while !frontier.is_empty() {
            if let Some(limit) = self.max_iterations {
                if *iterations >= limit {
                    return PassOutcome::BudgetExceeded { limit };
                }
            }
            let Some(id) = frontier.pop() else { break };
            let (position, depth) = (arena[id].position, arena[id].depth);
            if !explored.insert(position) {
                continue;
            }
            *iterations += 1;
            trace!(
                "[search] expand {id} at {position} depth={depth} g={} f={}",
                arena[id].g_cost,
                arena[id].f_cost()
            );

            if self.goal_test == GoalTestTiming::OnExpansion && position == self.goal {
                return PassOutcome::Goal(id);
            }

            for child in successors(arena, id, self.grid, self.goal, self.heuristic) {
                let node = &arena[child];
                if explored.contains(node.position) {
                    continue;
                }
                if dedup_frontier && frontier.contains(node.position) {
                    continue;
                }
                if depth_limit.is_some_and(|bound| node.depth > bound) {
                    cutoff = true;
                    continue;
                }
                if self.goal_test == GoalTestTiming::OnGeneration && node.position == self.goal {
                    return PassOutcome::Goal(child);
                }
                let admission = frontier.insert(node);
                trace!("[search]   child {child} at {} -> {admission:?}", node.position);
            }
        }
        PassOutcome::Exhausted { cutoff }
    }
}

/// Run the strategy named by `config` under `policy`.
///
/// # Errors
///
/// Returns [`SearchError`] if an endpoint is outside the grid or on a wall,
/// or if `policy` is invalid for the strategy. "No path" is not an error.
pub fn search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
    config: &SearchConfig,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    let strategy = config.strategy;
    policy.validate_for(strategy.discipline())?;
    validate_endpoints(grid, start, goal)?;
    if config.ignores_heuristic() {
        warn!(
            "[search] heuristic '{}' has no effect on {strategy}; using zero",
            config.heuristic
        );
    }

    let expansion = Expansion {
        grid,
        start,
        goal,
        heuristic: config.effective_heuristic(),
        goal_test: policy.goal_test,
        max_iterations: policy.max_iterations,
    };
    debug!(
        "[search] {strategy} from {start} to {goal} on {}x{} grid (heuristic={})",
        grid.rows(),
        grid.cols(),
        expansion.heuristic.name()
    );

    let result = if strategy.is_depth_bounded() {
        let ceiling = policy.max_depth_bound.unwrap_or_else(|| cell_bound(grid));
        iterative_deepening(&expansion, ceiling)
    } else {
        let mut frontier = strategy.new_frontier();
        single_pass(&expansion, frontier.as_mut())
    };
    log_finish(strategy.name(), &result);
    Ok(result)
}

/// Run one pass of the shared loop with a caller-supplied frontier.
///
/// The frontier's discipline decides expansion order and whether duplicates
/// are filtered by membership (stack, queue) or resolved by the frontier
/// itself (priority). Useful for instrumenting frontier behaviour.
///
/// # Errors
///
/// Returns [`SearchError::FrontierNotEmpty`] if `frontier` holds entries, or
/// any error [`search`] would return for the same endpoints and policy.
pub fn search_with_frontier(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
    frontier: &mut dyn Frontier,
    heuristic: &dyn Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    if !frontier.is_empty() {
        return Err(SearchError::FrontierNotEmpty {
            len: frontier.len(),
        });
    }
    policy.validate_for(frontier.discipline())?;
    validate_endpoints(grid, start, goal)?;
    let expansion = Expansion {
        grid,
        start,
        goal,
        heuristic,
        goal_test: policy.goal_test,
        max_iterations: policy.max_iterations,
    };
    debug!(
        "[search] custom {} frontier from {start} to {goal} (heuristic={})",
        frontier.discipline(),
        heuristic.name()
    );
    let result = single_pass(&expansion, frontier);
    log_finish("custom", &result);
    Ok(result)
}

/// Depth-first search with default policy.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<SearchResult, SearchError> {
    search(
        grid,
        start,
        goal,
        &SearchConfig::new(Strategy::DepthFirst),
        &SearchPolicy::default(),
    )
}

/// Breadth-first search with default policy.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<SearchResult, SearchError> {
    search(
        grid,
        start,
        goal,
        &SearchConfig::new(Strategy::BreadthFirst),
        &SearchPolicy::default(),
    )
}

/// Uniform-cost search with default policy.
///
/// # Errors
///
/// See [`search`].
pub fn uniform_cost_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<SearchResult, SearchError> {
    search(
        grid,
        start,
        goal,
        &SearchConfig::new(Strategy::UniformCost),
        &SearchPolicy::default(),
    )
}

/// A* with an arbitrary heuristic and default policy.
///
/// The returned path is cost-optimal whenever `heuristic` is admissible.
///
/// # Errors
///
/// See [`search`].
pub fn a_star_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult, SearchError> {
    let mut frontier = PriorityFrontier::new();
    search_with_frontier(
        grid,
        start,
        goal,
        &mut frontier,
        heuristic,
        &SearchPolicy::default(),
    )
}

/// Iterative-deepening search with default policy.
///
/// # Errors
///
/// See [`search`].
pub fn iterative_deepening_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<SearchResult, SearchError> {
    search(
        grid,
        start,
        goal,
        &SearchConfig::new(Strategy::IterativeDeepening),
        &SearchPolicy::default(),
    )
}

fn single_pass(expansion: &Expansion<'_>, frontier: &mut dyn Frontier) -> SearchResult {
    let mut arena = NodeArena::with_capacity(expansion.grid.cell_count());
    let mut iterations = 0;
    let outcome = expansion.run_pass(&mut arena, frontier, None, &mut iterations);
    let termination = match outcome {
        PassOutcome::Goal(node_id) => TerminationReason::GoalReached { node_id },
        PassOutcome::Exhausted { .. } => TerminationReason::FrontierExhausted,
        PassOutcome::BudgetExceeded { limit } => {
            TerminationReason::IterationBudgetExceeded { limit }
        }
    };
    let stats = SearchStats {
        max_frontier_size: frontier.high_water(),
        iterations,
        passes: 1,
        ..SearchStats::default()
    };
    finish(expansion, arena, termination, stats)
}

/// Depth-limited passes with bound `1, 2, …, ceiling`. Frontier and
/// explored set are fresh each pass; the arena and iteration count span
/// all passes.
fn iterative_deepening(expansion: &Expansion<'_>, ceiling: u32) -> SearchResult {
    let mut arena = NodeArena::new();
    let mut iterations = 0;
    let mut max_frontier = 0;
    let mut passes = 0;
    let mut bound = 1;

    let termination = loop {
        let mut frontier = QueueFrontier::new();
        let outcome = expansion.run_pass(&mut arena, &mut frontier, Some(bound), &mut iterations);
        passes += 1;
        max_frontier = max_frontier.max(frontier.high_water());
        debug!("[search] ids pass {passes} bound={bound} -> {outcome:?}");

        match outcome {
            PassOutcome::Goal(node_id) => break TerminationReason::GoalReached { node_id },
            PassOutcome::BudgetExceeded { limit } => {
                break TerminationReason::IterationBudgetExceeded { limit }
            }
            PassOutcome::Exhausted { cutoff: false } => {
                break TerminationReason::FrontierExhausted
            }
            PassOutcome::Exhausted { cutoff: true } if bound >= ceiling => {
                break TerminationReason::DepthBoundExhausted { bound }
            }
            PassOutcome::Exhausted { cutoff: true } => bound += 1,
        }
    };

    let stats = SearchStats {
        max_frontier_size: max_frontier,
        iterations,
        depth_bound: Some(bound),
        passes,
        ..SearchStats::default()
    };
    finish(expansion, arena, termination, stats)
}

/// Fill in goal-dependent statistics and assemble the result.
fn finish(
    expansion: &Expansion<'_>,
    arena: NodeArena,
    termination: TerminationReason,
    mut stats: SearchStats,
) -> SearchResult {
    stats.nodes_generated = arena.len() as u64;
    let goal_node = match termination {
        TerminationReason::GoalReached { node_id } => arena.get(node_id).cloned(),
        _ => None,
    };

    let path = goal_node
        .as_ref()
        .map(|node| extract_path(&arena, node.node_id))
        .unwrap_or_default();

    if let Some(node) = &goal_node {
        stats.goal_depth = node.depth;
        stats.accumulated_cost = node.g_cost;
        stats.path_cost = match audit_path_cost(&path) {
            Ok(cost) => {
                if cost != node.g_cost {
                    warn!(
                        "[search] path cost mismatch: audited {cost} but node chain carries {}",
                        node.g_cost
                    );
                }
                cost
            }
            // No audited cost exists; the chain's own value is kept only in
            // `accumulated_cost`.
            Err(err) => {
                warn!("[search] recovered path failed audit: {err}");
                0
            }
        };
    }

    SearchResult {
        start: expansion.start,
        goal: expansion.goal,
        goal_node,
        path,
        stats,
        termination,
        nodes: arena,
    }
}

fn validate_endpoints(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<(), SearchError> {
    for (role, position) in [(EndpointRole::Start, start), (EndpointRole::Goal, goal)] {
        if !grid.in_bounds(position) {
            return Err(SearchError::EndpointOutOfBounds { role, position });
        }
        if !grid.is_passable(position) {
            return Err(SearchError::EndpointBlocked { role, position });
        }
    }
    Ok(())
}

/// No simple path is longer than the number of cells.
fn cell_bound(grid: &OccupancyGrid) -> u32 {
    u32::try_from(grid.cell_count()).unwrap_or(u32::MAX)
}

fn log_finish(label: &str, result: &SearchResult) {
    debug!(
        "[search] {label} finished: {} (generated={}, iterations={}, max_frontier={}, cost={})",
        result.termination,
        result.stats.nodes_generated,
        result.stats.iterations,
        result.stats.max_frontier_size,
        result.stats.path_cost
    );
}
