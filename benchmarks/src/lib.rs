//! Shared grid regimes for waypoint benchmark suites.
//!
//! Every regime is built deterministically so criterion runs and the
//! auditable report compare like with like across machines.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waypoint_harness::grid_file::GridFixture;
use waypoint_kernel::grid::{OccupancyGrid, GOAL, OPEN, START, WALL};

/// A named grid workload.
pub struct Regime {
    pub name: &'static str,
    pub fixture: GridFixture,
}

/// Open `n x n` grid, start top-left, goal bottom-right.
///
/// # Panics
///
/// Panics if `n < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn open_square(n: usize) -> GridFixture {
    assert!(n >= 2, "open_square needs at least two cells per side");
    let mut rows = vec![vec![OPEN; n]; n];
    rows[0][0] = START;
    rows[n - 1][n - 1] = GOAL;
    fixture(rows)
}

/// Serpentine corridor: every other row is a wall with one gap, alternating
/// sides, so the only path snakes through the whole grid. Odd `n` keeps the
/// last row open.
///
/// # Panics
///
/// Panics if `n < 3`.
#[must_use]
pub fn serpentine(n: usize) -> GridFixture {
    assert!(n >= 3, "serpentine needs at least three cells per side");
    let mut rows = vec![vec![OPEN; n]; n];
    for (r, row) in rows.iter_mut().enumerate().skip(1).step_by(2) {
        row.fill(WALL);
        let gap = if (r / 2) % 2 == 0 { n - 1 } else { 0 };
        row[gap] = OPEN;
    }
    rows[0][0] = START;
    rows[n - 1][n - 1] = GOAL;
    fixture(rows)
}

/// `n x n` grid with roughly `wall_percent` walls drawn from a seeded ChaCha8
/// stream. Start and goal are forced open; the goal may be unreachable.
///
/// # Panics
///
/// Panics if `n < 2`.
#[must_use]
pub fn scattered(n: usize, wall_percent: u64, seed: u64) -> GridFixture {
    assert!(n >= 2, "scattered needs at least two cells per side");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![OPEN; n]; n];
    for cell in rows.iter_mut().flatten() {
        if rng.random_range(0..100) < wall_percent {
            *cell = WALL;
        }
    }
    rows[0][0] = START;
    rows[n - 1][n - 1] = GOAL;
    fixture(rows)
}

/// Open grid with a full wall column cutting the goal off.
///
/// # Panics
///
/// Panics if `n < 3`.
#[must_use]
pub fn walled_off(n: usize) -> GridFixture {
    assert!(n >= 3, "walled_off needs at least three cells per side");
    let mut rows = vec![vec![OPEN; n]; n];
    for row in &mut rows {
        row[n - 2] = WALL;
    }
    rows[0][0] = START;
    rows[n - 1][n - 1] = GOAL;
    fixture(rows)
}

/// The standard regime set used by the strategy and report benches.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "open_24",
            fixture: open_square(24),
        },
        Regime {
            name: "serpentine_25",
            fixture: serpentine(25),
        },
        Regime {
            name: "scattered_32",
            fixture: scattered(32, 25, 0x5eed),
        },
        Regime {
            name: "walled_off_24",
            fixture: walled_off(24),
        },
    ]
}

fn fixture(rows: Vec<Vec<u8>>) -> GridFixture {
    let grid = OccupancyGrid::new(rows).expect("benchmark grid is rectangular");
    GridFixture::from_grid(grid).expect("benchmark grid has unique endpoints")
}
