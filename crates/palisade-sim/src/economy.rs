//! Player economy and score bookkeeping.

use palisade_core::constants::{KILL_SCORE, STARTING_HEALTH, STARTING_MONEY};
use palisade_core::state::{EconomyView, ScoreRecord};

/// Money, health, and the counters feeding the score formula.
#[derive(Debug, Clone, Copy)]
pub struct EconomyState {
    pub money: u32,
    /// Player health. Clamped to zero at the bottom; a breach can never
    /// push it negative.
    pub health: i32,
    pub enemies_killed: u32,
    /// Lifetime spend. Selling never reduces it.
    pub money_spent: u32,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            health: STARTING_HEALTH,
            enemies_killed: 0,
            money_spent: 0,
        }
    }
}

impl EconomyState {
    /// Running score: kills weigh heaviest, with remaining health and
    /// total spend as the tiebreakers.
    pub fn score(&self) -> u32 {
        self.enemies_killed * KILL_SCORE + self.health.max(0) as u32 + self.money_spent
    }

    /// Freeze the current state into a final score record.
    pub fn record(&self, level: u32) -> ScoreRecord {
        ScoreRecord {
            level,
            score: self.score(),
            enemies_killed: self.enemies_killed,
            health_remaining: self.health.max(0),
            money_spent: self.money_spent,
        }
    }

    /// HUD view of the current state.
    pub fn view(&self) -> EconomyView {
        EconomyView {
            money: self.money,
            health: self.health.max(0),
            enemies_killed: self.enemies_killed,
            money_spent: self.money_spent,
            score: self.score(),
        }
    }
}
