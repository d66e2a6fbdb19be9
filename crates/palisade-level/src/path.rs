//! Route derivation from the level grid.
//!
//! The route starts at the first path cell in row-major scan order and
//! walks cell to cell, preferring to keep its current direction, until
//! it runs off a border edge. Waypoints are the pixel centers of the
//! visited cells in order.

use palisade_core::types::{GridCell, Position};
use thiserror::Error;

use crate::grid::Grid;

/// Errors raised while loading a level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    /// The grid contains no path cells at all.
    #[error("grid has no path cells")]
    NoPath,
    /// The route dead-ended before reaching a border edge.
    #[error("path breaks off at column {col}, row {row}")]
    BrokenPath { col: usize, row: usize },
    /// The grid text contains a token other than `0` or `1`.
    #[error("bad cell token {token:?} at row {row}, column {col}")]
    BadCell {
        row: usize,
        col: usize,
        token: String,
    },
}

/// Derive the attacker route for a grid.
///
/// The walk prefers, in order: the direction of the previous step, the
/// two perpendicular directions, and only as a last resort the reverse
/// direction, never revisiting a cell. If that stalls away from the
/// right or bottom border, a relaxed scan over fixed direction order is
/// tried before giving up, which lets the walk cross cells of
/// double-width path segments a second time.
pub fn derive_path(grid: &Grid) -> Result<Vec<Position>, LevelError> {
    let (mut col, mut row) = find_start(grid).ok_or(LevelError::NoPath)?;

    let mut visited = vec![false; grid.cols() * grid.rows()];
    let mut waypoints = vec![GridCell::new(col, row).center()];

    // Direction of the previous step; routes enter from the left.
    let mut dir: (isize, isize) = (1, 0);

    // Generous cap so a malformed grid cannot walk forever.
    let max_steps = grid.cols() * grid.rows() * 4;

    for _ in 0..max_steps {
        visited[row * grid.cols() + col] = true;

        let next = pick_next(grid, &visited, col, row, dir);
        let (ncol, nrow, ndir) = match next {
            Some(step) => step,
            None => {
                // Dead end on a border edge is the exit.
                if col == grid.cols() - 1 || row == grid.rows() - 1 {
                    return Ok(waypoints);
                }
                match pick_next_relaxed(grid, col, row) {
                    Some(step) => step,
                    None => return Err(LevelError::BrokenPath { col, row }),
                }
            }
        };

        col = ncol;
        row = nrow;
        dir = ndir;
        waypoints.push(GridCell::new(col, row).center());
    }

    Err(LevelError::BrokenPath { col, row })
}

/// First path cell in row-major order.
fn find_start(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_path(col, row) {
                return Some((col, row));
            }
        }
    }
    None
}

/// Next unvisited path cell, preferring the current direction.
fn pick_next(
    grid: &Grid,
    visited: &[bool],
    col: usize,
    row: usize,
    dir: (isize, isize),
) -> Option<(usize, usize, (isize, isize))> {
    let candidates: [(isize, isize); 4] = if dir.0 != 0 {
        // Walking horizontally: straight, then down, up, reverse.
        [(dir.0, 0), (0, 1), (0, -1), (-dir.0, 0)]
    } else {
        // Walking vertically: straight, then right, left, reverse.
        [(0, dir.1), (1, 0), (-1, 0), (0, -dir.1)]
    };

    for d in candidates {
        if let Some((ncol, nrow)) = step(grid, col, row, d) {
            if grid.is_path(ncol, nrow) && !visited[nrow * grid.cols() + ncol] {
                return Some((ncol, nrow, d));
            }
        }
    }
    None
}

/// Fallback scan in fixed order, ignoring the visited set.
fn pick_next_relaxed(
    grid: &Grid,
    col: usize,
    row: usize,
) -> Option<(usize, usize, (isize, isize))> {
    for d in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
        if let Some((ncol, nrow)) = step(grid, col, row, d) {
            if grid.is_path(ncol, nrow) {
                return Some((ncol, nrow, d));
            }
        }
    }
    None
}

/// Apply a unit step, returning None when it leaves the grid.
fn step(grid: &Grid, col: usize, row: usize, d: (isize, isize)) -> Option<(usize, usize)> {
    let ncol = col.checked_add_signed(d.0)?;
    let nrow = row.checked_add_signed(d.1)?;
    if grid.in_bounds(ncol, nrow) {
        Some((ncol, nrow))
    } else {
        None
    }
}
