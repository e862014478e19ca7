//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in logical screen units.
/// x = right, y = down (the ground line sits at `GROUND_Y`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-tick displacement (units/tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed host time in milliseconds.
    pub elapsed_ms: f64,
}

/// Simulation parameters for a single level, produced by the difficulty curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    /// Enemy missile speed (units/tick).
    pub speed: f64,
    /// Enemy missiles spawned over the whole level.
    pub total_missiles: u32,
    /// Upper bound on missiles created per spawn batch.
    pub missiles_per_batch: u32,
    /// Minimum time between spawn batches (ms).
    pub spawn_interval_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Advance by one tick of `velocity`.
    pub fn step(&mut self, velocity: &Velocity) {
        self.x += velocity.dx;
        self.y += velocity.dy;
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    ///
    /// The launch angle is measured from "straight up" (negative y) toward
    /// positive x, so `(dx, dy) = speed * (sin(angle), -cos(angle))`.
    /// Coincident points yield a straight-up launch.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Self {
        let angle = (to.x - from.x).atan2(from.y - to.y);
        Self {
            dx: speed * angle.sin(),
            dy: -speed * angle.cos(),
        }
    }

    /// Speed magnitude (units/tick).
    pub fn speed(&self) -> f64 {
        DVec2::new(self.dx, self.dy).length()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }
}

impl SimTime {
    /// Advance by one tick of `dt_ms` host time.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}
