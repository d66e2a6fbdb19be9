//! ECS components for the simulation entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Cross-entity references use `UnitId` values, never owning handles:
//! a referrer resolves the id against the live world each tick and
//! treats a missing or dead unit as a normal no-op.

use serde::{Deserialize, Serialize};

use crate::enums::{AttackerVariant, DefenderKind};
use crate::types::GridCell;

/// Stable identity of a combat unit, assigned in spawn order.
/// Doubles as the scan order for targeting tie-breaks: candidates are
/// visited in ascending id, so equal distances resolve to the unit
/// spawned or placed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u64);

/// Marks an entity as an attacker walking the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Attacker;

/// Marks an entity as a placed defender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defender;

/// Marks a munition fired by a defender at an attacker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DefenderShot;

/// Marks a counter-shot fired by an attacker at a defender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackerShot;

/// Hit points. `current` may go below zero for attackers (views clamp
/// for display); defenders are clamped to exactly zero at death.
/// A unit with `current <= 0` is dead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Path-following state of an attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walker {
    pub variant: AttackerVariant,
    /// Walk speed after wave scaling (px/tick).
    pub speed: f64,
    /// Money awarded when this attacker dies.
    pub reward: u32,
    /// Index of the waypoint most recently reached.
    pub path_index: usize,
    /// Ticks until this attacker enters the field. While positive the
    /// attacker neither moves nor fights and is invisible to targeting.
    pub spawn_delay: u32,
    /// Set when the final waypoint is reached; removal follows.
    pub reached_end: bool,
}

/// Counter-fire parameters of an attacker (per variant).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackStats {
    pub damage: i32,
    pub range: f64,
    pub cooldown_ticks: u32,
}

/// Ticks remaining until the attacker may fire again.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttackTimer {
    pub remaining: u32,
}

/// Combat state of a placed defender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emplacement {
    pub kind: DefenderKind,
    /// Grid cell this defender occupies.
    pub cell: GridCell,
    /// Ticks until the next shot is allowed.
    pub cooldown: u32,
    /// Muzzle-flash indicator countdown (rendering only).
    pub flash_timer: u32,
    /// Facing angle in radians, tracking the current target.
    pub facing: f64,
    /// Current target, recomputed from scratch every tick. Weak
    /// reference; never outlives the tick it was computed in.
    pub target: Option<UnitId>,
}

/// A homing shot in flight. The target id is validated against the live
/// world every tick; a dead or despawned target expires the shot with no
/// damage applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Munition {
    pub target: UnitId,
    pub damage: i32,
    /// Flight speed (px/tick).
    pub speed: f64,
    /// Launch angle in radians, fixed at creation. Rendering
    /// orientation only; movement homes on the target's live position.
    pub heading: f64,
}
