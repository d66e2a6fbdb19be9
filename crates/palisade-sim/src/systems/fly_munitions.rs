//! Munition flight: homing movement, proximity detonation, and expiry.
//!
//! Shots are processed in launch order so two munitions racing toward
//! the same target resolve identically on every run. A shot whose
//! target is already dead or gone expires without dealing damage.

use std::collections::HashMap;

use hecs::{Entity, World};

use palisade_core::components::*;
use palisade_core::constants::HIT_RADIUS;
use palisade_core::types::Position;

/// Advance every munition by one tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Live unit lookup for resolving weak target references.
    let units: HashMap<u64, Entity> = world
        .query::<(&UnitId, &Health)>()
        .iter()
        .map(|(entity, (uid, _))| (uid.0, entity))
        .collect();

    let mut shots: Vec<(u64, Entity, Munition)> = world
        .query::<(&UnitId, &Munition)>()
        .iter()
        .map(|(entity, (uid, munition))| (uid.0, entity, *munition))
        .collect();
    shots.sort_by_key(|(uid, ..)| *uid);

    for (_, shot_entity, munition) in shots {
        let target_entity = match units.get(&munition.target.0) {
            Some(&e) => e,
            None => {
                despawn_buffer.push(shot_entity);
                continue;
            }
        };

        // Damage already dealt this tick may have killed the target.
        let target_alive = world
            .get::<&Health>(target_entity)
            .map(|h| h.current > 0)
            .unwrap_or(false);
        if !target_alive {
            despawn_buffer.push(shot_entity);
            continue;
        }

        let target_pos = match world.get::<&Position>(target_entity) {
            Ok(pos) => *pos,
            Err(_) => {
                despawn_buffer.push(shot_entity);
                continue;
            }
        };

        // Hit check first, against the pre-move position; a miss flies
        // one full step toward wherever the target is now. The stored
        // launch heading is rendering-only and never changes.
        let hit = {
            let mut pos = match world.get::<&mut Position>(shot_entity) {
                Ok(pos) => pos,
                Err(_) => continue,
            };
            let dist = pos.distance_to(&target_pos);
            if dist < HIT_RADIUS {
                true
            } else {
                let dir = pos.angle_to(&target_pos);
                pos.x += munition.speed * dir.cos();
                pos.y += munition.speed * dir.sin();
                false
            }
        };

        if hit {
            apply_damage(world, target_entity, munition.damage);
            despawn_buffer.push(shot_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Deal damage to a struck unit. Defender health bottoms out at zero;
/// attacker health may go negative so overkill reads naturally.
fn apply_damage(world: &mut World, target: Entity, damage: i32) {
    let is_defender = world.get::<&Defender>(target).is_ok();
    if let Ok(mut health) = world.get::<&mut Health>(target) {
        if is_defender {
            health.current = (health.current - damage).max(0);
        } else {
            health.current -= damage;
        }
    }
}
