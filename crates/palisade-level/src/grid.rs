//! The placement grid.
//!
//! A grid is parsed from a whitespace-separated text block of `1`
//! (walkable path) and `0` (buildable ground) tokens. Rows shorter than
//! the widest row are padded with buildable cells, matching how the
//! levels were originally authored.

use std::collections::HashSet;

use palisade_core::types::GridCell;
use serde::Serialize;

use crate::path::LevelError;

/// One cell of the placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    /// Buildable ground.
    Empty,
    /// Part of the attacker route. Never buildable.
    Path,
}

/// Rectangular cell grid with optional placement-blocking obstacles.
/// Serializes for frontends that render the board; construction always
/// goes through [`Grid::parse`].
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    obstacles: HashSet<GridCell>,
}

impl Grid {
    /// Parse a grid from its text form.
    ///
    /// Returns `LevelError::BadCell` on any token other than `0` or `1`.
    pub fn parse(text: &str) -> Result<Grid, LevelError> {
        let lines: Vec<&str> = text.trim().lines().collect();
        let rows = lines.len();
        let mut cols = 0;
        for line in &lines {
            cols = cols.max(line.split_whitespace().count());
        }

        let mut cells = vec![Cell::Empty; rows * cols];
        for (row, line) in lines.iter().enumerate() {
            for (col, token) in line.split_whitespace().enumerate() {
                cells[row * cols + col] = match token {
                    "0" => Cell::Empty,
                    "1" => Cell::Path,
                    _ => {
                        return Err(LevelError::BadCell {
                            row,
                            col,
                            token: token.to_string(),
                        })
                    }
                };
            }
        }

        Ok(Grid {
            cols,
            rows,
            cells,
            obstacles: HashSet::new(),
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    /// Whether the cell is part of the attacker route.
    /// Out-of-bounds cells are not path.
    pub fn is_path(&self, col: usize, row: usize) -> bool {
        self.in_bounds(col, row) && self.cells[row * self.cols + col] == Cell::Path
    }

    /// Whether the cell is blocked by a placement obstacle.
    pub fn is_obstacle(&self, col: usize, row: usize) -> bool {
        self.obstacles.contains(&GridCell::new(col, row))
    }

    /// Mark a cell as a placement obstacle. Requests on path cells are
    /// ignored; the path already blocks placement on its own.
    pub fn add_obstacle(&mut self, col: usize, row: usize) {
        if !self.is_path(col, row) {
            self.obstacles.insert(GridCell::new(col, row));
        }
    }
}
