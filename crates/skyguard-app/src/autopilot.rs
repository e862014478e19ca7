//! Demo player: defends against the most advanced incoming missile.

use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::{COUNTER_MISSILE_SPEED, EXPLOSION_MAX_SIZE};
use skyguard_core::enums::GamePhase;
use skyguard_core::state::{GameSnapshot, MissileView};
use skyguard_core::types::Position;

/// Ticks between two autopilot launches.
const FIRE_COOLDOWN_TICKS: u32 = 20;

/// Reads the latest snapshot and decides at most one command per tick.
#[derive(Debug, Default)]
pub struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&mut self, snapshot: &GameSnapshot) -> Option<PlayerCommand> {
        match snapshot.game_state {
            GamePhase::Title | GamePhase::GameOver => Some(PlayerCommand::Confirm),
            GamePhase::LevelComplete => None,
            GamePhase::Playing => {
                if self.cooldown > 0 {
                    self.cooldown -= 1;
                    return None;
                }
                let aim = choose_aim(snapshot)?;
                self.cooldown = FIRE_COOLDOWN_TICKS;
                Some(PlayerCommand::aim_at(aim))
            }
        }
    }
}

/// Lead the lowest uncovered enemy missile by the counter missile's flight time.
fn choose_aim(snapshot: &GameSnapshot) -> Option<Position> {
    let silos: Vec<Position> = snapshot
        .silos
        .iter()
        .filter(|s| s.alive && s.missiles > 0)
        .map(|s| s.position)
        .collect();
    if silos.is_empty() {
        return None;
    }

    snapshot
        .enemy_missiles
        .iter()
        .filter(|m| m.alive && !is_covered(snapshot, &m.position))
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|missile| lead_point(missile, &silos))
}

/// Whether a counter missile or explosion will already reach `pos`.
fn is_covered(snapshot: &GameSnapshot, pos: &Position) -> bool {
    let pending = snapshot.counter_missiles.iter().map(|c| c.target);
    let burning = snapshot.explosions.iter().map(|e| e.position);
    pending
        .chain(burning)
        .any(|p| p.distance_to(pos) < EXPLOSION_MAX_SIZE)
}

fn lead_point(missile: &MissileView, silos: &[Position]) -> Position {
    let flight_dist = silos
        .iter()
        .map(|s| s.distance_to(&missile.position))
        .fold(f64::INFINITY, f64::min);
    let ticks = flight_dist / COUNTER_MISSILE_SPEED;
    let lead = missile.position.as_dvec2() + missile.velocity.as_dvec2() * ticks;
    Position::from(lead)
}
