//! Defender system: destruction, target selection, turret facing, and
//! firing.
//!
//! Targets are recomputed from scratch every tick. A defender tracks
//! its target continuously but only fires when its cooldown has run
//! out, so facing stays live between shots.

use hecs::{Entity, World};

use palisade_core::components::*;
use palisade_core::constants::{DEFENDER_SHOT_SPEED, FLASH_TICKS};
use palisade_core::events::GameEvent;
use palisade_core::types::Position;

use crate::world_setup;

/// Run one defender pass over the world.
pub fn run(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    next_unit_id: &mut u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Targetable attackers: on the field and alive, in spawn order.
    let mut attackers: Vec<(UnitId, Position)> = world
        .query::<(&UnitId, &Position, &Walker, &Health, &Attacker)>()
        .iter()
        .filter(|(_, (_, _, walker, health, _))| walker.spawn_delay == 0 && health.current > 0)
        .map(|(_, (uid, pos, _, _, _))| (*uid, *pos))
        .collect();
    attackers.sort_by_key(|(uid, _)| uid.0);

    let mut destroyed: Vec<(u64, Entity, usize, usize)> = Vec::new();
    let mut launches: Vec<(u64, Position, UnitId, i32, f64)> = Vec::new();

    for (entity, (uid, _defender, pos, health, emplacement)) in world.query_mut::<(
        &UnitId,
        &Defender,
        &Position,
        &Health,
        &mut Emplacement,
    )>() {
        if health.current <= 0 {
            destroyed.push((uid.0, entity, emplacement.cell.col, emplacement.cell.row));
            continue;
        }

        if emplacement.cooldown > 0 {
            emplacement.cooldown -= 1;
        }
        if emplacement.flash_timer > 0 {
            emplacement.flash_timer -= 1;
        }

        let stats = emplacement.kind.stats();
        match pick_target(pos, stats.range, &attackers) {
            Some((target, target_pos)) => {
                emplacement.target = Some(target);
                emplacement.facing = pos.angle_to(&target_pos);
                if emplacement.cooldown == 0 {
                    launches.push((uid.0, *pos, target, stats.damage, emplacement.facing));
                    emplacement.cooldown = stats.fire_rate;
                    emplacement.flash_timer = FLASH_TICKS;
                }
            }
            None => {
                emplacement.target = None;
            }
        }
    }

    destroyed.sort_by_key(|(uid, ..)| *uid);
    for (_, entity, col, row) in destroyed {
        events.push(GameEvent::DefenderDestroyed { col, row });
        despawn_buffer.push(entity);
    }

    launches.sort_by_key(|(uid, ..)| *uid);
    for (_, from, target, damage, heading) in launches {
        world_setup::spawn_defender_shot(
            world,
            next_unit_id,
            from,
            target,
            damage,
            DEFENDER_SHOT_SPEED,
            heading,
        );
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Nearest live attacker within range, ties to the earliest spawned.
fn pick_target(
    pos: &Position,
    range: f64,
    attackers: &[(UnitId, Position)],
) -> Option<(UnitId, Position)> {
    let mut best: Option<(UnitId, Position, f64)> = None;
    for (uid, apos) in attackers {
        let dist = pos.distance_to(apos);
        if dist <= range && best.as_ref().map_or(true, |(_, _, d)| dist < *d) {
            best = Some((*uid, *apos, dist));
        }
    }
    best.map(|(uid, apos, _)| (uid, apos))
}
