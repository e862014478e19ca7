//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Liveness flag shared by every entity kind.
/// Systems clear it; the cleanup system despawns entities where it is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alive(pub bool);

/// A defended city. Losing all of them ends the game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    /// Fixed layout slot (left to right).
    pub slot: usize,
}

/// A player launch site with finite ammunition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Silo {
    /// Fixed layout slot (left to right).
    pub slot: usize,
    /// Remaining counter missiles.
    pub missiles: u32,
}

/// Adversarial projectile heading for a city or silo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyMissile {
    pub start: Position,
    /// Position of the targeted city or silo at spawn time.
    pub target: Position,
    /// Level speed at spawn time (units/tick); also the arrival threshold.
    pub speed: f64,
}

/// Player-launched interceptor heading for an aim point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CounterMissile {
    pub start: Position,
    pub target: Position,
    /// Slot of the silo that fired it.
    pub silo_slot: usize,
}

/// Growing-then-shrinking damage field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    /// Current radius.
    pub size: f64,
    /// +1 while growing, -1 while shrinking.
    pub dir: i8,
}
