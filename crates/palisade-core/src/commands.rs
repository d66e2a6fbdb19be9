//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, never
//! inside the tick pipeline itself.

use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin the simulation for the loaded level.
    StartLevel,
    /// Suspend tick advancement.
    Pause,
    /// Resume tick advancement.
    Resume,
    /// Place a defender of the given kind at a grid cell. Rejected
    /// silently if the cell is on the path, blocked, occupied, or the
    /// player cannot afford it.
    PlaceDefender {
        col: usize,
        row: usize,
        kind: DefenderKind,
    },
    /// Sell the defender at a grid cell, refunding half its cost.
    /// Ignored if no defender is there.
    SellDefender { col: usize, row: usize },
}
