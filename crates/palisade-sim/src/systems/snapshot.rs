//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only and never modifies the world. All views are
//! sorted by unit id so identical worlds serialize identically.

use hecs::World;

use palisade_core::components::*;
use palisade_core::enums::GamePhase;
use palisade_core::events::GameEvent;
use palisade_core::state::*;
use palisade_core::types::{Position, SimTime};

use crate::economy::EconomyState;
use crate::systems::wave_spawner::WaveState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    economy: &EconomyState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave: WaveView {
            wave: wave.wave,
            total_waves: wave.total_waves,
            active: wave.active,
        },
        economy: economy.view(),
        attackers: build_attackers(world),
        defenders: build_defenders(world),
        munitions: build_munitions(world),
        events,
    }
}

fn build_attackers(world: &World) -> Vec<AttackerView> {
    let mut attackers: Vec<AttackerView> = world
        .query::<(&UnitId, &Position, &Walker, &Health, &Attacker)>()
        .iter()
        .map(|(_, (uid, pos, walker, health, _))| AttackerView {
            unit_id: uid.0,
            position: *pos,
            variant: walker.variant,
            health: health.current.max(0),
            max_health: health.max,
            spawned: walker.spawn_delay == 0,
        })
        .collect();

    attackers.sort_by_key(|a| a.unit_id);
    attackers
}

fn build_defenders(world: &World) -> Vec<DefenderView> {
    let mut defenders: Vec<DefenderView> = world
        .query::<(&UnitId, &Position, &Health, &Emplacement, &Defender)>()
        .iter()
        .map(|(_, (uid, pos, health, emplacement, _))| DefenderView {
            unit_id: uid.0,
            cell: emplacement.cell,
            position: *pos,
            kind: emplacement.kind,
            health: health.current,
            max_health: health.max,
            facing: emplacement.facing,
            flashing: emplacement.flash_timer > 0,
            range: emplacement.kind.stats().range,
        })
        .collect();

    defenders.sort_by_key(|d| d.unit_id);
    defenders
}

fn build_munitions(world: &World) -> Vec<MunitionView> {
    let mut munitions: Vec<(u64, MunitionView)> = world
        .query::<(&UnitId, &Position, &Munition, &DefenderShot)>()
        .iter()
        .map(|(_, (uid, pos, munition, _))| {
            (
                uid.0,
                MunitionView {
                    position: *pos,
                    heading: munition.heading,
                    hostile: false,
                },
            )
        })
        .collect();

    munitions.extend(
        world
            .query::<(&UnitId, &Position, &Munition, &AttackerShot)>()
            .iter()
            .map(|(_, (uid, pos, munition, _))| {
                (
                    uid.0,
                    MunitionView {
                        position: *pos,
                        heading: munition.heading,
                        hostile: true,
                    },
                )
            }),
    );

    munitions.sort_by_key(|(uid, _)| *uid);
    munitions.into_iter().map(|(_, view)| view).collect()
}
