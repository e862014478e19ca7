//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::Position;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A level began (also emitted for level 1 of a fresh game).
    LevelStarted { level: u32 },
    /// A silo fired at an aim point.
    CounterMissileLaunched { silo_slot: usize, target: Position },
    /// An explosion caught an enemy missile.
    EnemyMissileDestroyed { position: Position, points: u64 },
    /// An enemy missile reached a city or silo.
    TargetDestroyed {
        kind: EntityKind,
        slot: usize,
        position: Position,
    },
    /// A new explosion appeared.
    Detonation { position: Position },
    /// Spawn quota exhausted with cities surviving.
    LevelComplete {
        level: u32,
        surviving_cities: u32,
        bonus: u64,
    },
    /// The last city fell.
    GameOver { level: u32, score: u64 },
}
