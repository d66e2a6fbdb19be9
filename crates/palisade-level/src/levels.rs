//! Built-in level layouts.

use palisade_core::types::Position;
use serde::Serialize;

use crate::grid::Grid;
use crate::path::{derive_path, LevelError};

/// A fully loaded level: grid, derived route, and wave count.
#[derive(Debug, Clone, Serialize)]
pub struct LevelLayout {
    /// Level number (1-based).
    pub number: u32,
    pub name: String,
    pub grid: Grid,
    /// Attacker route waypoints in pixel space, entrance first.
    pub path: Vec<Position>,
    /// Total waves the player must survive.
    pub waves: u32,
}

impl LevelLayout {
    /// Load a level from its grid text, deriving the route.
    pub fn new(number: u32, name: &str, grid: Grid, waves: u32) -> Result<LevelLayout, LevelError> {
        let path = derive_path(&grid)?;
        Ok(LevelLayout {
            number,
            name: name.to_string(),
            grid,
            path,
            waves,
        })
    }
}

// Level 1: gentle S-curve, 18x9.
const LEVEL_1: &str = "
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
1 1 1 1 1 1 1 1 1 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 1 1 1 1 1 1 0 0 0 0
0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0
0 0 0 0 0 0 0 0 1 1 1 1 1 1 0 0 0 0
0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0";

// Level 2: perimeter loop with two switchbacks, 18x9.
const LEVEL_2: &str = "
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
0 0 0 0 1 1 1 1 1 1 1 1 1 1 1 1 0 0
0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 1 0 0
0 1 1 1 1 0 0 0 0 0 0 0 0 0 0 1 0 0
0 1 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0
0 1 1 1 1 1 0 0 0 0 0 0 1 1 1 1 0 0
0 0 0 0 0 1 0 0 0 0 0 0 1 0 0 0 0 0
0 0 0 0 0 1 0 0 0 0 0 0 1 1 1 1 1 1";

// Level 3: long snake with double-width stretches, 18x11.
const LEVEL_3: &str = "
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1
0 0 0 0 1 1 1 1 1 1 1 1 1 1 1 1 1 1
0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 0 0
0 0 0 0 1 1 1 1 1 1 1 1 1 1 0 0 0 0
0 1 1 1 1 1 1 1 1 1 1 1 1 0 0 0 0 0
0 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 0
0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0
0 0 0 0 0 1 1 1 1 1 1 1 1 1 1 1 1 0
0 0 0 0 0 1 1 1 1 1 1 1 1 1 1 1 1 1";

/// The three shipped levels, in play order.
pub fn builtin_levels() -> Result<Vec<LevelLayout>, LevelError> {
    Ok(vec![level_1()?, level_2()?, level_3()?])
}

fn level_1() -> Result<LevelLayout, LevelError> {
    let grid = Grid::parse(LEVEL_1)?;
    LevelLayout::new(1, "Level 1", grid, 5)
}

fn level_2() -> Result<LevelLayout, LevelError> {
    let grid = Grid::parse(LEVEL_2)?;
    LevelLayout::new(2, "Level 2", grid, 8)
}

fn level_3() -> Result<LevelLayout, LevelError> {
    let mut grid = Grid::parse(LEVEL_3)?;
    // Rock clusters flanking the path, three in a row each.
    for (col, row) in [
        (14, 2),
        (15, 2),
        (16, 2),
        (14, 5),
        (15, 5),
        (16, 5),
        (2, 9),
        (3, 9),
        (4, 9),
    ] {
        grid.add_obstacle(col, row);
    }
    LevelLayout::new(3, "Level 3", grid, 12)
}
