//! Enumeration types used throughout the simulation.
//!
//! Attacker variants and defender kinds are data-driven: each maps to a
//! fixed stat tuple, so behavior differs only in parameters, never in
//! logic shape.

use serde::{Deserialize, Serialize};

/// Attacker variant, ordered by ascending strength. Waves unlock variants
/// front to back: wave N may spawn the first `min(N, count)` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerVariant {
    Light,
    Medium,
    Heavy,
    TankGreen,
    TankBrown,
    TankBlue,
    TankGray,
}

/// Base stats for an attacker variant, before wave scaling.
#[derive(Debug, Clone, Copy)]
pub struct AttackerStats {
    /// Hit points at wave 0.
    pub base_health: i32,
    /// Walk speed at wave 0 (px/tick).
    pub base_speed: f64,
    /// Money awarded on kill.
    pub reward: u32,
    /// Damage per counter-shot against defenders.
    pub attack_damage: i32,
    /// Counter-fire range (pixels).
    pub attack_range: f64,
    /// Ticks between counter-shots.
    pub attack_cooldown: u32,
}

impl AttackerVariant {
    /// All variants in ascending-strength (unlock) order.
    pub const ALL: [AttackerVariant; 7] = [
        AttackerVariant::Light,
        AttackerVariant::Medium,
        AttackerVariant::Heavy,
        AttackerVariant::TankGreen,
        AttackerVariant::TankBrown,
        AttackerVariant::TankBlue,
        AttackerVariant::TankGray,
    ];

    /// Fixed stat tuple for this variant.
    pub fn stats(self) -> AttackerStats {
        match self {
            AttackerVariant::Light => AttackerStats {
                base_health: 50,
                base_speed: 1.5,
                reward: 20,
                attack_damage: 6,
                attack_range: 140.0,
                attack_cooldown: 70,
            },
            AttackerVariant::Medium => AttackerStats {
                base_health: 80,
                base_speed: 1.2,
                reward: 30,
                attack_damage: 9,
                attack_range: 150.0,
                attack_cooldown: 65,
            },
            AttackerVariant::Heavy => AttackerStats {
                base_health: 150,
                base_speed: 1.0,
                reward: 50,
                attack_damage: 14,
                attack_range: 160.0,
                attack_cooldown: 70,
            },
            AttackerVariant::TankGreen => AttackerStats {
                base_health: 120,
                base_speed: 1.1,
                reward: 60,
                attack_damage: 12,
                attack_range: 160.0,
                attack_cooldown: 60,
            },
            AttackerVariant::TankBrown => AttackerStats {
                base_health: 180,
                base_speed: 1.3,
                reward: 80,
                attack_damage: 16,
                attack_range: 170.0,
                attack_cooldown: 65,
            },
            AttackerVariant::TankBlue => AttackerStats {
                base_health: 200,
                base_speed: 1.6,
                reward: 90,
                attack_damage: 18,
                attack_range: 180.0,
                attack_cooldown: 60,
            },
            AttackerVariant::TankGray => AttackerStats {
                base_health: 250,
                base_speed: 1.2,
                reward: 120,
                attack_damage: 20,
                attack_range: 190.0,
                attack_cooldown: 60,
            },
        }
    }
}

/// Defender (tower) kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    Basic,
    Advanced,
    Heavy,
    Missile,
}

/// Fixed stats for a defender kind.
#[derive(Debug, Clone, Copy)]
pub struct DefenderStats {
    pub health: i32,
    /// Damage per shot.
    pub damage: i32,
    /// Targeting range (pixels).
    pub range: f64,
    /// Ticks between shots.
    pub fire_rate: u32,
    /// Purchase cost.
    pub cost: u32,
}

impl DefenderKind {
    /// All kinds in toolbar order.
    pub const ALL: [DefenderKind; 4] = [
        DefenderKind::Basic,
        DefenderKind::Advanced,
        DefenderKind::Heavy,
        DefenderKind::Missile,
    ];

    /// Fixed stat tuple for this kind.
    pub fn stats(self) -> DefenderStats {
        match self {
            DefenderKind::Basic => DefenderStats {
                health: 140,
                damage: 15,
                range: 150.0,
                fire_rate: 60,
                cost: 50,
            },
            DefenderKind::Advanced => DefenderStats {
                health: 170,
                damage: 25,
                range: 180.0,
                fire_rate: 25,
                cost: 75,
            },
            DefenderKind::Heavy => DefenderStats {
                health: 220,
                damage: 50,
                range: 200.0,
                fire_rate: 90,
                cost: 100,
            },
            DefenderKind::Missile => DefenderStats {
                health: 190,
                damage: 80,
                range: 250.0,
                fire_rate: 120,
                cost: 150,
            },
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level loaded, simulation not yet started.
    #[default]
    Pregame,
    /// Ticks advance the simulation.
    Active,
    /// Tick advancement suspended; no partial-tick state exists.
    Paused,
    /// Terminal: player health reached zero.
    GameOver,
    /// Terminal: all waves cleared.
    LevelComplete,
}
