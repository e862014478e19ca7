//! Player commands sent from the host to the simulation.
//!
//! Commands are recorded and consumed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Aim at a point; launches a counter missile from the nearest eligible silo.
    Aim { x: f64, y: f64 },
    /// Start a game from the title screen, or return to it after game over.
    Confirm,
}

impl PlayerCommand {
    pub fn aim_at(position: Position) -> Self {
        PlayerCommand::Aim {
            x: position.x,
            y: position.y,
        }
    }
}
