//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs ECS world, runs systems once per host tick,
//! and produces GameSnapshots for the renderer.

pub mod difficulty;
pub mod engine;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyguard_core as core;
