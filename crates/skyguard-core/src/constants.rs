//! Simulation constants and tuning parameters.

/// Nominal host refresh rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- World bounds ---

/// Logical playfield width.
pub const WORLD_WIDTH: f64 = 800.0;

/// Ground line (y grows downward).
pub const GROUND_Y: f64 = 500.0;

// --- Layout ---

/// City x positions, left to right.
pub const CITY_X: [f64; 6] = [150.0, 220.0, 290.0, 510.0, 580.0, 650.0];

/// Cities sit this far above the ground line.
pub const CITY_ELEVATION: f64 = 20.0;

/// Silo x positions, left to right.
pub const SILO_X: [f64; 3] = [55.0, 400.0, 745.0];

/// Silos sit this far above the ground line.
pub const SILO_ELEVATION: f64 = 30.0;

/// Counter missiles loaded in each silo at game start.
pub const SILO_MAX_MISSILES: u32 = 10;

// --- Missiles ---

/// Counter missile speed (units/tick); also its arrival threshold.
pub const COUNTER_MISSILE_SPEED: f64 = 15.0;

/// Collision radius of an enemy missile.
pub const MISSILE_SIZE: f64 = 4.0;

// --- Explosions ---

/// Radius of a freshly spawned explosion.
pub const EXPLOSION_INITIAL_SIZE: f64 = 2.0;

/// Radius change per tick.
pub const EXPLOSION_GROWTH_RATE: f64 = 0.35;

/// Radius beyond which an explosion starts shrinking.
pub const EXPLOSION_MAX_SIZE: f64 = 30.0;

/// A missile death inside this radius of an existing explosion spawns no new one.
pub const EXPLOSION_DEDUP_RADIUS: f64 = 5.0;

// --- Scoring ---

/// Points per enemy missile destroyed by an explosion.
pub const POINTS_PER_MISSILE: u64 = 25;

/// Points per surviving city when a level completes.
pub const POINTS_PER_CITY: u64 = 100;

// --- Difficulty curve ---

pub const BASE_MISSILE_SPEED: f64 = 1.0;
pub const MISSILE_SPEED_PER_LEVEL: f64 = 0.3;
pub const MAX_MISSILE_SPEED: f64 = 3.0;

pub const BASE_TOTAL_MISSILES: u32 = 20;
pub const TOTAL_MISSILES_PER_LEVEL: u32 = 5;

pub const BASE_MISSILES_PER_BATCH: u32 = 3;
pub const MAX_MISSILES_PER_BATCH: u32 = 6;

pub const BASE_SPAWN_INTERVAL_MS: f64 = 3000.0;
pub const SPAWN_INTERVAL_STEP_MS: f64 = 200.0;
pub const MIN_SPAWN_INTERVAL_MS: f64 = 1500.0;

// --- Timing ---

/// At level start the spawner behaves as if the last batch fired this long ago.
pub const INITIAL_SPAWN_OFFSET_MS: f64 = 2000.0;

/// Pause between LevelComplete and the next level.
pub const LEVEL_COMPLETE_DELAY_MS: f64 = 3000.0;
