//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, which keeps the whole game deterministic and
//! testable: the same command sequence always produces the same
//! snapshots.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};

use palisade_core::commands::PlayerCommand;
use palisade_core::components::Emplacement;
use palisade_core::constants::SELL_REFUND_DIVISOR;
use palisade_core::enums::{DefenderKind, GamePhase};
use palisade_core::events::GameEvent;
use palisade_core::state::GameStateSnapshot;
use palisade_core::types::{GridCell, SimTime};
use palisade_level::LevelLayout;

use crate::economy::EconomyState;
use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    level: LevelLayout,
    wave: WaveState,
    economy: EconomyState,
    next_unit_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine for the given level, in the pregame phase.
    pub fn new(level: LevelLayout) -> Self {
        let wave = WaveState::new(level.waves);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            level,
            wave,
            economy: EconomyState::default(),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Outside the active phase the world stays untouched and
    /// the snapshot just reflects current state.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.economy,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the loaded level.
    pub fn level(&self) -> &LevelLayout {
        &self.level
    }

    /// Get the current economy state.
    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    /// Get the current wave state.
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that need to
    /// force world state directly).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartLevel => {
                if self.phase == GamePhase::Pregame {
                    self.phase = GamePhase::Active;
                    info!("level {} started: {}", self.level.number, self.level.name);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::PlaceDefender { col, row, kind } => {
                self.place_defender(col, row, kind);
            }
            PlayerCommand::SellDefender { col, row } => {
                self.sell_defender(col, row);
            }
        }
    }

    /// Validate and apply a placement. Rejections are silent toward the
    /// player; the attempt just doesn't happen.
    fn place_defender(&mut self, col: usize, row: usize, kind: DefenderKind) {
        if matches!(self.phase, GamePhase::GameOver | GamePhase::LevelComplete) {
            return;
        }
        if !self.level.grid.in_bounds(col, row) {
            debug!("placement rejected at ({col}, {row}): out of bounds");
            return;
        }
        if self.level.grid.is_path(col, row) {
            debug!("placement rejected at ({col}, {row}): on the path");
            return;
        }
        if self.level.grid.is_obstacle(col, row) {
            debug!("placement rejected at ({col}, {row}): blocked by obstacle");
            return;
        }
        if self.defender_at(col, row).is_some() {
            debug!("placement rejected at ({col}, {row}): cell occupied");
            return;
        }
        let cost = kind.stats().cost;
        if self.economy.money < cost {
            debug!(
                "placement rejected at ({col}, {row}): cost {cost} exceeds funds {}",
                self.economy.money
            );
            return;
        }

        self.economy.money -= cost;
        self.economy.money_spent += cost;
        world_setup::spawn_defender(
            &mut self.world,
            &mut self.next_unit_id,
            GridCell::new(col, row),
            kind,
        );
        self.events.push(GameEvent::DefenderPlaced { col, row, kind });
    }

    /// Sell the defender at a cell for half its cost. No-op when the
    /// cell is empty.
    fn sell_defender(&mut self, col: usize, row: usize) {
        if matches!(self.phase, GamePhase::GameOver | GamePhase::LevelComplete) {
            return;
        }
        let Some((entity, kind)) = self.defender_at(col, row) else {
            debug!("sell rejected at ({col}, {row}): no defender there");
            return;
        };

        let refund = kind.stats().cost / SELL_REFUND_DIVISOR;
        self.economy.money += refund;
        let _ = self.world.despawn(entity);
        self.events.push(GameEvent::DefenderSold { col, row, refund });
    }

    /// Find the defender occupying a cell.
    fn defender_at(&self, col: usize, row: usize) -> Option<(hecs::Entity, DefenderKind)> {
        self.world
            .query::<&Emplacement>()
            .iter()
            .find(|(_, e)| e.cell.col == col && e.cell.row == row)
            .map(|(entity, e)| (entity, e.kind))
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave launch / countdown
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave,
            &self.level,
            &mut self.next_unit_id,
            &mut self.events,
        );
        // 2. Attacker removal, movement, breaches, counter-fire
        systems::advance_attackers::run(
            &mut self.world,
            &self.level.path,
            &mut self.economy,
            &mut self.events,
            &mut self.next_unit_id,
            &mut self.despawn_buffer,
        );
        // 3. Wave-complete check
        systems::wave_spawner::advance_if_cleared(&self.world, &mut self.wave);
        // 4. Defender destruction, targeting, firing
        systems::update_defenders::run(
            &mut self.world,
            &mut self.events,
            &mut self.next_unit_id,
            &mut self.despawn_buffer,
        );
        // 5. Munition flight and detonation
        systems::fly_munitions::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Terminal phase latches
        if self.economy.health <= 0 {
            self.phase = GamePhase::GameOver;
            let record = self.economy.record(self.level.number);
            self.events.push(GameEvent::GameOver { record });
            info!("level {} lost with score {}", self.level.number, record.score);
        } else if self.wave.all_cleared() {
            self.phase = GamePhase::LevelComplete;
            let record = self.economy.record(self.level.number);
            self.events.push(GameEvent::LevelComplete { record });
            info!(
                "level {} cleared with score {}",
                self.level.number, record.score
            );
        }
    }
}
