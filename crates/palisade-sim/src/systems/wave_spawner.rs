//! Wave spawning system.
//!
//! One wave is on the field at a time. When a wave is cleared the next
//! one launches on the following tick; within a wave, attackers enter
//! the route on staggered delays.

use hecs::World;

use palisade_core::components::Attacker;
use palisade_core::constants::{
    SPAWN_STAGGER_TICKS, WAVE_BASE_COUNT, WAVE_COUNT_GROWTH, WAVE_GAP_TICKS,
};
use palisade_core::enums::AttackerVariant;
use palisade_core::events::GameEvent;
use palisade_level::LevelLayout;

use crate::world_setup;

/// Wave progression state, owned by the engine.
#[derive(Debug, Clone, Copy)]
pub struct WaveState {
    /// Current wave number (1-based). Advances past `total_waves` once
    /// the final wave is cleared.
    pub wave: u32,
    pub total_waves: u32,
    /// True while the current wave's attackers are on the field.
    pub active: bool,
    /// Countdown until the next wave may launch.
    pub spawn_timer: u32,
}

impl WaveState {
    pub fn new(total_waves: u32) -> Self {
        Self {
            wave: 1,
            total_waves,
            active: false,
            spawn_timer: 0,
        }
    }

    /// Whether every wave has been cleared.
    pub fn all_cleared(&self) -> bool {
        !self.active && self.wave > self.total_waves
    }
}

/// Size of wave `n`.
pub fn wave_size(wave: u32) -> u32 {
    WAVE_BASE_COUNT + WAVE_COUNT_GROWTH * wave
}

/// Variant of the `i`-th attacker in wave `wave`.
///
/// Wave `n` draws from the first `min(n, 7)` variants, splitting the
/// wave into equal blocks of ascending strength. The strongest unlocked
/// variant absorbs any remainder.
pub fn variant_for_index(wave: u32, i: u32) -> AttackerVariant {
    let count = wave_size(wave);
    let unlocked = (wave.min(AttackerVariant::ALL.len() as u32)).max(1);
    let per_block = count / unlocked;
    let block = (i / per_block.max(1)).min(unlocked - 1);
    AttackerVariant::ALL[block as usize]
}

/// Launch the next wave when due, or count down toward it.
pub fn run(
    world: &mut World,
    state: &mut WaveState,
    level: &LevelLayout,
    next_unit_id: &mut u64,
    events: &mut Vec<GameEvent>,
) {
    if state.active || state.wave > state.total_waves {
        return;
    }
    if state.spawn_timer > 0 {
        state.spawn_timer -= 1;
        return;
    }

    let count = wave_size(state.wave);
    for i in 0..count {
        let variant = variant_for_index(state.wave, i);
        world_setup::spawn_attacker(
            world,
            next_unit_id,
            level,
            variant,
            state.wave,
            i * SPAWN_STAGGER_TICKS,
        );
    }

    state.active = true;
    state.spawn_timer = WAVE_GAP_TICKS;
    events.push(GameEvent::WaveStarted {
        wave: state.wave,
        count,
    });
    log::info!("wave {} launched with {} attackers", state.wave, count);
}

/// Advance to the next wave once the field is empty. The countdown is
/// zeroed so the next wave launches without delay.
pub fn advance_if_cleared(world: &World, state: &mut WaveState) {
    if !state.active {
        return;
    }
    let remaining = world.query::<&Attacker>().iter().count();
    if remaining == 0 {
        state.active = false;
        state.wave += 1;
        state.spawn_timer = 0;
    }
}
