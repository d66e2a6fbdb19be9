use palisade_core::constants::{HUD_OFFSET_Y, TILE_SIZE};
use palisade_core::types::Position;

use crate::grid::Grid;
use crate::levels::builtin_levels;
use crate::path::{derive_path, LevelError};

fn center(col: usize, row: usize) -> Position {
    Position::new(
        col as f64 * TILE_SIZE + TILE_SIZE / 2.0,
        row as f64 * TILE_SIZE + TILE_SIZE / 2.0 + HUD_OFFSET_Y,
    )
}

#[test]
fn test_grid_parse_dimensions() {
    let grid = Grid::parse("0 1 0\n1 1 1").unwrap();
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 2);
    assert!(grid.is_path(1, 0));
    assert!(!grid.is_path(0, 0));
    assert!(grid.is_path(2, 1));
}

#[test]
fn test_grid_parse_pads_short_rows() {
    // Second row is one token short; the missing cell reads as ground.
    let grid = Grid::parse("1 1 1\n1 1").unwrap();
    assert_eq!(grid.cols(), 3);
    assert!(!grid.is_path(2, 1));
}

#[test]
fn test_grid_parse_rejects_bad_token() {
    let err = Grid::parse("0 1\n0 2").unwrap_err();
    assert_eq!(
        err,
        LevelError::BadCell {
            row: 1,
            col: 1,
            token: "2".to_string(),
        }
    );
}

#[test]
fn test_obstacle_on_path_is_ignored() {
    let mut grid = Grid::parse("1 1\n0 0").unwrap();
    grid.add_obstacle(0, 0);
    grid.add_obstacle(0, 1);
    assert!(!grid.is_obstacle(0, 0));
    assert!(grid.is_obstacle(0, 1));
}

#[test]
fn test_derive_path_straight_line() {
    let grid = Grid::parse("0 0 0\n1 1 1\n0 0 0").unwrap();
    let path = derive_path(&grid).unwrap();
    assert_eq!(path, vec![center(0, 1), center(1, 1), center(2, 1)]);
}

#[test]
fn test_derive_path_follows_turns() {
    let grid = Grid::parse(
        "1 1 0\n\
         0 1 0\n\
         0 1 1",
    )
    .unwrap();
    let path = derive_path(&grid).unwrap();
    assert_eq!(
        path,
        vec![
            center(0, 0),
            center(1, 0),
            center(1, 1),
            center(1, 2),
            center(2, 2),
        ]
    );
}

#[test]
fn test_derive_path_no_path_cells() {
    let grid = Grid::parse("0 0\n0 0").unwrap();
    assert_eq!(derive_path(&grid).unwrap_err(), LevelError::NoPath);
}

#[test]
fn test_derive_path_isolated_cell_mid_grid() {
    // A single path cell away from the borders goes nowhere.
    let grid = Grid::parse(
        "0 0 0\n\
         0 1 0\n\
         0 0 0",
    )
    .unwrap();
    assert_eq!(
        derive_path(&grid).unwrap_err(),
        LevelError::BrokenPath { col: 1, row: 1 }
    );
}

#[test]
fn test_derive_path_dead_end_mid_grid() {
    // Route stalls at (1, 1); the relaxed scan only offers the cell it
    // came from, so the walk hits the step cap and reports a break.
    let grid = Grid::parse(
        "1 1 0 0\n\
         0 1 0 0\n\
         0 0 0 0",
    )
    .unwrap();
    assert!(matches!(
        derive_path(&grid).unwrap_err(),
        LevelError::BrokenPath { .. }
    ));
}

#[test]
fn test_builtin_levels_load() {
    let levels = builtin_levels().unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].waves, 5);
    assert_eq!(levels[1].waves, 8);
    assert_eq!(levels[2].waves, 12);
    for (i, level) in levels.iter().enumerate() {
        assert_eq!(level.number as usize, i + 1);
        assert!(level.path.len() >= 2, "{} has a trivial path", level.name);
    }
}

#[test]
fn test_level_1_route() {
    let level = &builtin_levels().unwrap()[0];
    // S-curve: 26 cells from the left edge to the bottom border.
    assert_eq!(level.path.len(), 26);
    assert_eq!(level.path[0], center(0, 1));
    assert_eq!(*level.path.last().unwrap(), center(8, 8));
}

#[test]
fn test_level_3_obstacles() {
    let level = &builtin_levels().unwrap()[2];
    assert!(level.grid.is_obstacle(14, 2));
    assert!(level.grid.is_obstacle(16, 5));
    assert!(level.grid.is_obstacle(4, 9));
    assert!(!level.grid.is_obstacle(0, 0));
}
