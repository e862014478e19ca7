//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{LevelParams, Position, SimTime, Velocity};

/// Complete read-only game state produced after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub game_state: GamePhase,
    pub level: u32,
    pub params: LevelParams,
    pub score: u64,
    pub stats: StatsView,
    pub cities: Vec<CityView>,
    pub silos: Vec<SiloView>,
    pub enemy_missiles: Vec<MissileView>,
    pub counter_missiles: Vec<MissileView>,
    pub explosions: Vec<ExplosionView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A city still standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityView {
    pub slot: usize,
    pub position: Position,
    pub alive: bool,
}

/// A silo still standing and its remaining ammunition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiloView {
    pub slot: usize,
    pub position: Position,
    pub missiles: u32,
    pub alive: bool,
}

/// An in-flight missile (enemy or counter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    pub start: Position,
    pub position: Position,
    pub target: Position,
    pub velocity: Velocity,
    pub alive: bool,
}

/// An active explosion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub size: f64,
    pub dir: i8,
    pub alive: bool,
}

/// Running statistics for the current game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub missiles_destroyed: u32,
    pub counter_missiles_fired: u32,
    pub cities_lost: u32,
    pub silos_lost: u32,
    pub levels_cleared: u32,
}

impl GameSnapshot {
    /// Counter missiles left across all standing silos.
    pub fn total_ammo(&self) -> u32 {
        self.silos.iter().map(|s| s.missiles).sum()
    }
}
