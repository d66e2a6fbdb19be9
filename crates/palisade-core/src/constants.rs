//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield geometry ---

/// Edge length of one grid cell in pixels.
pub const TILE_SIZE: f64 = 64.0;

/// Vertical offset of the playfield below the HUD toolbar (pixels).
pub const HUD_OFFSET_Y: f64 = 100.0;

// --- Economy ---

/// Money the player starts each level with.
pub const STARTING_MONEY: u32 = 500;

/// Player health at level start (also the cap).
pub const STARTING_HEALTH: i32 = 100;

/// Health lost when one attacker reaches the path exit.
pub const BREACH_DAMAGE: i32 = 20;

/// Fraction of the purchase cost refunded on sale (divisor).
pub const SELL_REFUND_DIVISOR: u32 = 2;

/// Score awarded per attacker killed.
pub const KILL_SCORE: u32 = 20;

// --- Wave control ---

/// Base number of attackers in a wave, before per-wave growth.
pub const WAVE_BASE_COUNT: u32 = 5;

/// Additional attackers per wave number.
pub const WAVE_COUNT_GROWTH: u32 = 2;

/// Countdown armed when a wave launches. Wave-clear handling zeroes it,
/// so consecutive waves follow each other without a gap.
pub const WAVE_GAP_TICKS: u32 = 60;

/// Spawn-delay step between consecutive attackers of one wave (ticks).
pub const SPAWN_STAGGER_TICKS: u32 = 30;

// --- Attacker scaling ---

/// Extra hit points per wave number, on top of the variant base.
pub const HEALTH_PER_WAVE: i32 = 10;

/// Extra speed (px/tick) per wave number, on top of the variant base.
pub const SPEED_PER_WAVE: f64 = 0.1;

// --- Munitions ---

/// Flight speed of defender shots (px/tick).
pub const DEFENDER_SHOT_SPEED: f64 = 8.0;

/// Flight speed of attacker counter-shots (px/tick).
pub const ATTACKER_SHOT_SPEED: f64 = 7.0;

/// Distance at which a shot registers a hit on its target (pixels).
pub const HIT_RADIUS: f64 = 5.0;

/// Duration of the muzzle-flash indicator after a defender fires (ticks).
pub const FLASH_TICKS: u32 = 5;
