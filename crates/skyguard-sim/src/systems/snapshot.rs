//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::SimEvent;
use skyguard_core::state::*;
use skyguard_core::types::{LevelParams, Position, SimTime, Velocity};

use crate::scoring::ScoreLedger;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    game_state: GamePhase,
    level: u32,
    params: &LevelParams,
    ledger: &ScoreLedger,
    events: Vec<SimEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        game_state,
        level,
        params: *params,
        score: ledger.score(),
        stats: ledger.stats().clone(),
        cities: build_cities(world),
        silos: build_silos(world),
        enemy_missiles: build_enemy_missiles(world),
        counter_missiles: build_counter_missiles(world),
        explosions: build_explosions(world),
        events,
    }
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&City, &Position, &Alive)>()
        .iter()
        .map(|(_, (city, pos, alive))| CityView {
            slot: city.slot,
            position: *pos,
            alive: alive.0,
        })
        .collect();

    cities.sort_by_key(|c| c.slot);
    cities
}

fn build_silos(world: &World) -> Vec<SiloView> {
    let mut silos: Vec<SiloView> = world
        .query::<(&Silo, &Position, &Alive)>()
        .iter()
        .map(|(_, (silo, pos, alive))| SiloView {
            slot: silo.slot,
            position: *pos,
            missiles: silo.missiles,
            alive: alive.0,
        })
        .collect();

    silos.sort_by_key(|s| s.slot);
    silos
}

fn build_enemy_missiles(world: &World) -> Vec<MissileView> {
    world
        .query::<(&EnemyMissile, &Position, &Velocity, &Alive)>()
        .iter()
        .map(|(_, (missile, pos, vel, alive))| MissileView {
            start: missile.start,
            position: *pos,
            target: missile.target,
            velocity: *vel,
            alive: alive.0,
        })
        .collect()
}

fn build_counter_missiles(world: &World) -> Vec<MissileView> {
    world
        .query::<(&CounterMissile, &Position, &Velocity, &Alive)>()
        .iter()
        .map(|(_, (missile, pos, vel, alive))| MissileView {
            start: missile.start,
            position: *pos,
            target: missile.target,
            velocity: *vel,
            alive: alive.0,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position, &Alive)>()
        .iter()
        .map(|(_, (explosion, pos, alive))| ExplosionView {
            position: *pos,
            size: explosion.size,
            dir: explosion.dir,
            alive: alive.0,
        })
        .collect()
}
