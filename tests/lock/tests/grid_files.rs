//! Grid file loading end to end: checked-in fixtures and temp files.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use waypoint_harness::config::RunConfig;
use waypoint_harness::grid_file::{load_grid_file, GridFileError};
use waypoint_harness::runner::{run_config, RunError};
use waypoint_kernel::grid::Position;
use waypoint_search::error::SearchError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures/grids")
        .join(name)
}

fn config(path: &Path, strategy: &str, heuristic: Option<&str>) -> RunConfig {
    RunConfig {
        grid_file: path.to_path_buf(),
        strategy: strategy.to_owned(),
        heuristic: heuristic.map(str::to_owned),
        max_iterations: None,
    }
}

#[test]
fn checked_in_fixtures_load() {
    let open = load_grid_file(&fixture("open3x3.txt")).unwrap();
    assert_eq!((open.start, open.goal), (Position::new(0, 0), Position::new(2, 2)));

    let corridor = load_grid_file(&fixture("corridor.txt")).unwrap();
    assert_eq!(corridor.grid.rows(), 1);
    assert_eq!(corridor.goal, Position::new(0, 4));

    let maze = load_grid_file(&fixture("maze.txt")).unwrap();
    assert_eq!((maze.grid.rows(), maze.grid.cols()), (5, 6));
}

#[test]
fn fixture_runs_match_expected_outcomes() {
    let (_, open) = run_config(&config(&fixture("open3x3.txt"), "bfs", None)).unwrap();
    assert_eq!(open.result.stats.goal_depth, 4);

    let (_, corridor) = run_config(&config(&fixture("corridor.txt"), "astar", Some("euclidean")))
        .unwrap();
    assert_eq!(corridor.result.stats.path_cost, 8);
    assert_eq!(corridor.rendered, "> > > > *\n");

    let (_, walled) = run_config(&config(&fixture("walled.txt"), "ucs", None)).unwrap();
    assert!(!walled.found());
    assert_eq!(walled.summary().lines().last(), Some("Length of path 0"));
}

#[test]
fn temp_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2 0 3").unwrap();
    writeln!(file, "1 1 1").unwrap();
    file.flush().unwrap();

    let (fixture, report) = run_config(&config(file.path(), "dfs", None)).unwrap();
    assert_eq!(fixture.goal, Position::new(0, 2));
    assert!(report.found());
    assert_eq!(report.result.stats.goal_depth, 4);
    assert_eq!(report.rendered, "! 0 *\n> > ^\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_grid_file(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, GridFileError::Io { .. }));
}

#[test]
fn malformed_file_is_a_grid_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "2 1 1\n1 1\n1 1 3\n").unwrap();
    file.flush().unwrap();
    let err = run_config(&config(file.path(), "bfs", None)).unwrap_err();
    assert!(matches!(err, RunError::GridFile(GridFileError::Shape(_))));
}

#[test]
fn unknown_selector_fails_before_reading_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_config(&config(&dir.path().join("never-read.txt"), "beam", None)).unwrap_err();
    assert_eq!(
        err,
        RunError::Search(SearchError::UnknownStrategy {
            name: "beam".into()
        })
    );
}
