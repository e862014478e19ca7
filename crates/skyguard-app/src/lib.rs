//! SKYGUARD headless host.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, a command
//! channel, and an optional autopilot player. A renderer would sit where the
//! shared latest snapshot is read.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use skyguard_core as core;
