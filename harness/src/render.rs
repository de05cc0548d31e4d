//! Text rendering of grids and path overlays.
//!
//! Cells are separated by a single space, one row per line. In a path
//! overlay each step's departure cell shows the direction of travel
//! (`^` north, `>` east, `!` south, `<` west) and the final cell shows `*`.

use std::collections::BTreeMap;

use waypoint_kernel::grid::{Direction, OccupancyGrid, Position};

/// Marker drawn on the last cell of a path.
pub const GOAL_MARKER: char = '*';

/// The grid as cell codes.
#[must_use]
pub fn render_grid(grid: &OccupancyGrid) -> String {
    render_with(grid, &BTreeMap::new())
}

/// The grid with `path` overlaid. An empty path renders the plain grid.
///
/// Consecutive positions that are not one cardinal step apart get no
/// direction marker.
#[must_use]
pub fn render_path(grid: &OccupancyGrid, path: &[Position]) -> String {
    let mut overlay = BTreeMap::new();
    for pair in path.windows(2) {
        if let Some(direction) = Direction::between(pair[0], pair[1]) {
            overlay.insert(pair[0], direction.marker());
        }
    }
    if let Some(&last) = path.last() {
        overlay.insert(last, GOAL_MARKER);
    }
    render_with(grid, &overlay)
}

fn render_with(grid: &OccupancyGrid, overlay: &BTreeMap<Position, char>) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2 + grid.rows());
    for (row, cells) in grid.row_slices().enumerate() {
        for (col, code) in cells.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            match overlay.get(&Position::new(row, col)) {
                Some(marker) => out.push(*marker),
                None => out.push_str(&code.to_string()),
            }
        }
        out.push('\n');
    }
    out
}
