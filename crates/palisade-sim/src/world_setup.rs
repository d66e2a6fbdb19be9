//! Entity spawn factories for the simulation world.
//!
//! Creates attacker and defender entities with their component bundles.
//! Every combat unit gets a `UnitId` from a monotonically increasing
//! counter, so id order is spawn order.

use hecs::World;

use palisade_core::components::*;
use palisade_core::constants::{HEALTH_PER_WAVE, SPEED_PER_WAVE};
use palisade_core::enums::{AttackerVariant, DefenderKind};
use palisade_core::types::{GridCell, Position};
use palisade_level::LevelLayout;

/// Spawn a single attacker at the route entrance.
///
/// Health and speed scale up with the wave number; the spawn delay
/// staggers arrivals within a wave.
pub fn spawn_attacker(
    world: &mut World,
    next_unit_id: &mut u64,
    level: &LevelLayout,
    variant: AttackerVariant,
    wave: u32,
    spawn_delay: u32,
) -> hecs::Entity {
    let stats = variant.stats();
    let health = stats.base_health + wave as i32 * HEALTH_PER_WAVE;
    let speed = stats.base_speed + wave as f64 * SPEED_PER_WAVE;

    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        Attacker,
        unit_id,
        level.path[0],
        Walker {
            variant,
            speed,
            reward: stats.reward,
            path_index: 0,
            spawn_delay,
            reached_end: false,
        },
        Health {
            current: health,
            max: health,
        },
        AttackStats {
            damage: stats.attack_damage,
            range: stats.attack_range,
            cooldown_ticks: stats.attack_cooldown,
        },
        AttackTimer::default(),
    ))
}

/// Spawn a defender at a grid cell. Placement validation happens in the
/// command handler; this factory assumes the cell is legal.
pub fn spawn_defender(
    world: &mut World,
    next_unit_id: &mut u64,
    cell: GridCell,
    kind: DefenderKind,
) -> hecs::Entity {
    let stats = kind.stats();

    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        Defender,
        unit_id,
        cell.center(),
        Health {
            current: stats.health,
            max: stats.health,
        },
        Emplacement {
            kind,
            cell,
            cooldown: 0,
            flash_timer: 0,
            facing: 0.0,
            target: None,
        },
    ))
}

/// Spawn a homing shot from a defender toward an attacker.
pub fn spawn_defender_shot(
    world: &mut World,
    next_unit_id: &mut u64,
    from: Position,
    target: UnitId,
    damage: i32,
    speed: f64,
    heading: f64,
) -> hecs::Entity {
    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        DefenderShot,
        unit_id,
        from,
        Munition {
            target,
            damage,
            speed,
            heading,
        },
    ))
}

/// Spawn a counter-shot from an attacker toward a defender.
pub fn spawn_attacker_shot(
    world: &mut World,
    next_unit_id: &mut u64,
    from: Position,
    target: UnitId,
    damage: i32,
    speed: f64,
    heading: f64,
) -> hecs::Entity {
    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        AttackerShot,
        unit_id,
        from,
        Munition {
            target,
            damage,
            speed,
            heading,
        },
    ))
}
