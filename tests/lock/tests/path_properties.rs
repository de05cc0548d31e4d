//! Path validity, extraction idempotence, cost audit, and optimality over a
//! batch of generated grids, checked against independent reference solvers.

use lock_tests::grid_helpers::{random_grid, reference_min_depth, reference_optimal_cost};
use waypoint_kernel::grid::distance::manhattan;
use waypoint_kernel::grid::{OccupancyGrid, Position};
use waypoint_search::heuristic::{EuclideanHeuristic, FnHeuristic, ManhattanHeuristic};
use waypoint_search::path::{audit_path_cost, extract_path, is_walkable};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::result::SearchResult;
use waypoint_search::search::{a_star_search, search};
use waypoint_search::strategy::{SearchConfig, Strategy};

const SEEDS: std::ops::Range<u64> = 1..41;

fn corners(grid: &OccupancyGrid) -> (Position, Position) {
    (
        Position::new(0, 0),
        Position::new(grid.rows() - 1, grid.cols() - 1),
    )
}

fn run(strategy: Strategy, grid: &OccupancyGrid) -> SearchResult {
    let (start, goal) = corners(grid);
    search(
        grid,
        start,
        goal,
        &SearchConfig::new(strategy),
        &SearchPolicy::default(),
    )
    .unwrap()
}

fn batch() -> impl Iterator<Item = OccupancyGrid> {
    SEEDS.map(|seed| random_grid(7, 9, 28, seed))
}

#[test]
fn found_paths_are_walkable_and_anchored() {
    for (seed, grid) in SEEDS.zip(batch()) {
        let (start, goal) = corners(&grid);
        for strategy in Strategy::ALL {
            let result = run(strategy, &grid);
            if !result.is_goal_reached() {
                continue;
            }
            assert_eq!(result.path.first(), Some(&start), "seed {seed} {strategy}");
            assert_eq!(result.path.last(), Some(&goal), "seed {seed} {strategy}");
            assert!(is_walkable(&grid, &result.path), "seed {seed} {strategy}");
            assert_eq!(
                result.path.len(),
                result.stats.goal_depth as usize + 1,
                "seed {seed} {strategy}"
            );
        }
    }
}

#[test]
fn reachability_agrees_across_strategies() {
    for (seed, grid) in SEEDS.zip(batch()) {
        let (start, goal) = corners(&grid);
        let reachable = reference_optimal_cost(&grid, start, goal).is_some();
        for strategy in Strategy::ALL {
            assert_eq!(
                run(strategy, &grid).is_goal_reached(),
                reachable,
                "seed {seed} {strategy}"
            );
        }
    }
}

#[test]
fn extract_path_is_idempotent() {
    for grid in batch() {
        let result = run(Strategy::AStar, &grid);
        let Some(goal) = &result.goal_node else {
            continue;
        };
        let first = extract_path(&result.nodes, goal.node_id);
        let second = extract_path(&result.nodes, goal.node_id);
        assert_eq!(first, second);
        assert_eq!(first, result.path);
        assert_eq!(result.extract_path(), result.path);
    }
}

#[test]
fn audited_cost_matches_accumulated_cost() {
    for grid in batch() {
        for strategy in Strategy::ALL {
            let result = run(strategy, &grid);
            assert!(result.is_cost_consistent(), "{strategy}");
            assert_eq!(audit_path_cost(&result.path), Ok(result.stats.path_cost));
        }
    }
}

#[test]
fn ucs_and_astar_are_cost_optimal() {
    for (seed, grid) in SEEDS.zip(batch()) {
        let (start, goal) = corners(&grid);
        let Some(optimal) = reference_optimal_cost(&grid, start, goal) else {
            continue;
        };
        assert_eq!(run(Strategy::UniformCost, &grid).stats.path_cost, optimal, "seed {seed} ucs");
        assert_eq!(run(Strategy::AStar, &grid).stats.path_cost, optimal, "seed {seed} astar");
        let euclid = a_star_search(&grid, start, goal, &EuclideanHeuristic).unwrap();
        assert_eq!(euclid.stats.path_cost, optimal, "seed {seed} astar/euclidean");
    }
}

#[test]
fn bfs_and_ids_find_minimum_depth() {
    for (seed, grid) in SEEDS.zip(batch()) {
        let (start, goal) = corners(&grid);
        let Some(depth) = reference_min_depth(&grid, start, goal) else {
            continue;
        };
        for strategy in [Strategy::BreadthFirst, Strategy::IterativeDeepening] {
            assert_eq!(
                i64::from(run(strategy, &grid).stats.goal_depth),
                depth,
                "seed {seed} {strategy}"
            );
        }
    }
}

#[test]
fn astar_expands_no_more_than_ucs() {
    for grid in batch() {
        let (start, goal) = corners(&grid);
        let ucs = run(Strategy::UniformCost, &grid);
        let astar = a_star_search(&grid, start, goal, &ManhattanHeuristic).unwrap();
        if ucs.is_goal_reached() {
            assert!(astar.stats.iterations <= ucs.stats.iterations);
        }
    }
}

#[test]
fn function_heuristic_matches_builtin() {
    let by_fn = FnHeuristic::new("manhattan_fn", manhattan);
    for grid in batch() {
        let (start, goal) = corners(&grid);
        let builtin = a_star_search(&grid, start, goal, &ManhattanHeuristic).unwrap();
        let adapted = a_star_search(&grid, start, goal, &by_fn).unwrap();
        assert_eq!(builtin.path, adapted.path);
        assert_eq!(builtin.stats, adapted.stats);
    }
}
