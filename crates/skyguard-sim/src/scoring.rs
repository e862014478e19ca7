//! Score ledger: points and per-game statistics.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use skyguard_core::constants::{POINTS_PER_CITY, POINTS_PER_MISSILE};
use skyguard_core::enums::EntityKind;
use skyguard_core::state::StatsView;

/// Monotonic score counter plus running statistics.
///
/// Only `reset` (a fresh game) ever lowers the score.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    score: u64,
    stats: StatsView,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn stats(&self) -> &StatsView {
        &self.stats
    }

    /// Clear everything for a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Credit an enemy missile destroyed by an explosion. Returns the points awarded.
    pub fn credit_missile_kill(&mut self) -> u64 {
        self.stats.missiles_destroyed += 1;
        self.score += POINTS_PER_MISSILE;
        POINTS_PER_MISSILE
    }

    /// Credit the end-of-level bonus. Returns the points awarded.
    pub fn credit_level_complete(&mut self, surviving_cities: u32) -> u64 {
        let bonus = POINTS_PER_CITY * u64::from(surviving_cities);
        self.stats.levels_cleared += 1;
        self.score += bonus;
        bonus
    }

    pub fn record_launch(&mut self) {
        self.stats.counter_missiles_fired += 1;
    }

    pub fn record_target_lost(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::City => self.stats.cities_lost += 1,
            EntityKind::Silo => self.stats.silos_lost += 1,
            _ => {}
        }
    }
}
