//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a game.
    #[default]
    Title,
    /// A level is running.
    Playing,
    /// Spawn quota exhausted with cities surviving; next level starts after a delay.
    LevelComplete,
    /// Every city has been destroyed.
    GameOver,
}

/// Kind tag for the entities tracked by the simulation world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    City,
    Silo,
    EnemyMissile,
    CounterMissile,
    Explosion,
}
