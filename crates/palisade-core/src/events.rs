//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;
use crate::state::ScoreRecord;

/// Simulation events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave started spawning.
    WaveStarted { wave: u32, count: u32 },
    /// An attacker was killed; its reward was credited.
    AttackerKilled { reward: u32 },
    /// An attacker reached the exit.
    Breach { health_remaining: i32 },
    /// A defender was destroyed by counter-fire.
    DefenderDestroyed { col: usize, row: usize },
    /// A defender was placed.
    DefenderPlaced {
        col: usize,
        row: usize,
        kind: DefenderKind,
    },
    /// A defender was sold.
    DefenderSold {
        col: usize,
        row: usize,
        refund: u32,
    },
    /// Player health reached zero. Fires exactly once per level.
    GameOver { record: ScoreRecord },
    /// All waves cleared. Fires exactly once per level.
    LevelComplete { record: ScoreRecord },
}
