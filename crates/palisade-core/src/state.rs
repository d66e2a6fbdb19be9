//! Game state snapshot — the complete visible state built after each tick.
//!
//! The renderer reads snapshots and must never mutate simulation state;
//! everything here is an owned copy.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{GridCell, Position, SimTime};

/// Complete game state handed to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub economy: EconomyView,
    pub attackers: Vec<AttackerView>,
    pub defenders: Vec<DefenderView>,
    pub munitions: Vec<MunitionView>,
    pub events: Vec<GameEvent>,
}

/// Wave progression for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Current wave number (1-based).
    pub wave: u32,
    pub total_waves: u32,
    /// Whether a wave is currently on the field.
    pub active: bool,
}

/// Economy and score counters for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub money: u32,
    /// Player health, 0..=100.
    pub health: i32,
    pub enemies_killed: u32,
    pub money_spent: u32,
    /// Running score under the fixed formula.
    pub score: u32,
}

/// A visible attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackerView {
    pub unit_id: u64,
    pub position: Position,
    pub variant: AttackerVariant,
    /// Clamped to zero for display; internal health may be negative.
    pub health: i32,
    pub max_health: i32,
    /// False while the spawn delay is still counting down (not drawn,
    /// not targetable).
    pub spawned: bool,
}

/// A visible defender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub unit_id: u64,
    pub cell: GridCell,
    pub position: Position,
    pub kind: DefenderKind,
    pub health: i32,
    pub max_health: i32,
    /// Facing angle in radians.
    pub facing: f64,
    /// Muzzle flash active this frame.
    pub flashing: bool,
    /// Targeting range (pixels), for range-circle overlays.
    pub range: f64,
}

/// A munition in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MunitionView {
    pub position: Position,
    /// Launch heading in radians (rendering orientation).
    pub heading: f64,
    /// True for attacker counter-shots, false for defender shots.
    pub hostile: bool,
}

/// Final score snapshot delivered to the persistence collaborator at
/// game over or level completion. Delivery is fire-and-forget; the core
/// proceeds regardless of what the collaborator does with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub level: u32,
    /// `enemies_killed * 20 + health_remaining + money_spent`.
    pub score: u32,
    pub enemies_killed: u32,
    pub health_remaining: i32,
    pub money_spent: u32,
}
