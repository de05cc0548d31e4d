//! Distance functions over grid coordinates.

use super::position::Position;

/// Manhattan (taxicab) distance.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn manhattan(a: Position, b: Position) -> i64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as i64
}

/// Euclidean distance rounded down to an integer.
///
/// Flooring keeps every cost in the search integral while never exceeding the
/// true straight-line distance, so it stays admissible wherever the exact
/// Euclidean distance is.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn euclidean_floor(a: Position, b: Position) -> i64 {
    let dr = a.row.abs_diff(b.row) as u64;
    let dc = a.col.abs_diff(b.col) as u64;
    let squared = dr * dr + dc * dc;
    let mut root = (squared as f64).sqrt() as u64;
    // Correct any rounding drift from the float estimate.
    while root * root > squared {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= squared {
        root += 1;
    }
    root as i64
}
