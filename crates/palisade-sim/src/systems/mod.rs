//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They own no state; everything lives in components or in
//! the small state structs the engine passes in.

pub mod advance_attackers;
pub mod fly_munitions;
pub mod snapshot;
pub mod update_defenders;
pub mod wave_spawner;
