//! Attacker system: removal of the dead, path following, breaches, and
//! counter-fire against defenders.
//!
//! Attackers that died since the last pass are removed before anything
//! moves, so a kill always takes priority over a breach. Movement snaps
//! onto a waypoint when it is within one step, which keeps segment
//! travel times exact and turns crisp.

use hecs::{Entity, World};

use palisade_core::components::*;
use palisade_core::constants::{ATTACKER_SHOT_SPEED, BREACH_DAMAGE};
use palisade_core::events::GameEvent;
use palisade_core::types::Position;

use crate::economy::EconomyState;
use crate::world_setup;

/// Run one attacker pass over the world.
pub fn run(
    world: &mut World,
    path: &[Position],
    economy: &mut EconomyState,
    events: &mut Vec<GameEvent>,
    next_unit_id: &mut u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Candidate defenders, in placement order for stable tie-breaks.
    let mut defenders: Vec<(UnitId, Position)> = world
        .query::<(&UnitId, &Position, &Defender)>()
        .iter()
        .map(|(_, (uid, pos, _))| (*uid, *pos))
        .collect();
    defenders.sort_by_key(|(uid, _)| uid.0);

    let mut kills: Vec<(u64, Entity, u32)> = Vec::new();
    let mut breaches: Vec<(u64, Entity)> = Vec::new();
    let mut launches: Vec<(u64, Position, UnitId, i32, f64)> = Vec::new();

    for (entity, (uid, _attacker, pos, walker, health, stats, timer)) in world.query_mut::<(
        &UnitId,
        &Attacker,
        &mut Position,
        &mut Walker,
        &Health,
        &AttackStats,
        &mut AttackTimer,
    )>() {
        // Staggered entry: no movement, no combat, no visibility.
        if walker.spawn_delay > 0 {
            walker.spawn_delay -= 1;
            continue;
        }

        // A kill registered last tick beats everything else.
        if health.current <= 0 {
            kills.push((uid.0, entity, walker.reward));
            continue;
        }

        // Already at the exit. Covers degenerate single-cell routes,
        // whose entry waypoint is also the final one.
        if walker.path_index + 1 >= path.len() {
            walker.reached_end = true;
        } else {
            let next_waypoint = path[walker.path_index + 1];
            let dist = pos.distance_to(&next_waypoint);
            if dist <= walker.speed {
                *pos = next_waypoint;
                walker.path_index += 1;
                if walker.path_index == path.len() - 1 {
                    walker.reached_end = true;
                }
            } else {
                let angle = pos.angle_to(&next_waypoint);
                pos.x += walker.speed * angle.cos();
                pos.y += walker.speed * angle.sin();
            }
        }

        if walker.reached_end {
            breaches.push((uid.0, entity));
            continue;
        }

        if timer.remaining > 0 {
            timer.remaining -= 1;
        }
        if timer.remaining == 0 {
            if let Some((target, heading)) = pick_target(pos, stats.range, &defenders) {
                launches.push((uid.0, *pos, target, stats.damage, heading));
                timer.remaining = stats.cooldown_ticks;
            }
        }
    }

    kills.sort_by_key(|(uid, _, _)| *uid);
    for (_, entity, reward) in kills {
        economy.money += reward;
        economy.enemies_killed += 1;
        events.push(GameEvent::AttackerKilled { reward });
        despawn_buffer.push(entity);
    }

    breaches.sort_by_key(|(uid, _)| *uid);
    for (_, entity) in breaches {
        economy.health = (economy.health - BREACH_DAMAGE).max(0);
        events.push(GameEvent::Breach {
            health_remaining: economy.health,
        });
        despawn_buffer.push(entity);
    }

    launches.sort_by_key(|(uid, ..)| *uid);
    for (_, from, target, damage, heading) in launches {
        world_setup::spawn_attacker_shot(
            world,
            next_unit_id,
            from,
            target,
            damage,
            ATTACKER_SHOT_SPEED,
            heading,
        );
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Nearest defender within range. Candidates arrive sorted by id, and
/// only a strictly nearer candidate displaces the current pick, so ties
/// go to the defender placed first.
fn pick_target(
    pos: &Position,
    range: f64,
    defenders: &[(UnitId, Position)],
) -> Option<(UnitId, f64)> {
    let mut best: Option<(UnitId, Position, f64)> = None;
    for (uid, dpos) in defenders {
        let dist = pos.distance_to(dpos);
        if dist <= range && best.as_ref().map_or(true, |(_, _, d)| dist < *d) {
            best = Some((*uid, *dpos, dist));
        }
    }
    best.map(|(uid, dpos, _)| (uid, pos.angle_to(&dpos)))
}
