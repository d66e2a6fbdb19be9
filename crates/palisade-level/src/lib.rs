//! Level definitions for PALISADE.
//!
//! Levels are authored as text grids of walkable and buildable cells.
//! The attacker route is derived from the grid at load time, so a level
//! is fully described by its grid string, wave count, and obstacles.

pub mod grid;
pub mod levels;
pub mod path;

pub use grid::{Cell, Grid};
pub use levels::{builtin_levels, LevelLayout};
pub use path::{derive_path, LevelError};

#[cfg(test)]
mod tests;
