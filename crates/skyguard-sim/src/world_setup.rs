//! Entity spawn factories for setting up the simulation world.
//!
//! Creates cities, silos, missiles and explosions with
//! appropriate component bundles.

use hecs::{Entity, World};

use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::types::{Position, Velocity};

/// Links an enemy missile to the city or silo entity it is aimed at.
///
/// The handle may go stale once the target is despawned; the missile still
/// flies to the stored target position.
#[derive(Debug, Clone, Copy)]
pub struct TargetLink(pub Entity);

/// Set up a fresh game world: six cities and three full silos, nothing in flight.
pub fn setup_game(world: &mut World) {
    world.clear();
    spawn_cities(world);
    spawn_silos(world);
}

/// Spawn the fixed row of cities.
pub fn spawn_cities(world: &mut World) {
    for (slot, &x) in CITY_X.iter().enumerate() {
        world.spawn((
            City { slot },
            Position::new(x, GROUND_Y - CITY_ELEVATION),
            Alive(true),
        ));
    }
}

/// Spawn the three silos, each loaded with `SILO_MAX_MISSILES`.
pub fn spawn_silos(world: &mut World) {
    for (slot, &x) in SILO_X.iter().enumerate() {
        world.spawn((
            Silo {
                slot,
                missiles: SILO_MAX_MISSILES,
            },
            Position::new(x, GROUND_Y - SILO_ELEVATION),
            Alive(true),
        ));
    }
}

/// Spawn an enemy missile at `start` flying toward `target` at `speed` units/tick.
pub fn spawn_enemy_missile(
    world: &mut World,
    start: Position,
    target_entity: Entity,
    target: Position,
    speed: f64,
) -> Entity {
    world.spawn((
        EnemyMissile {
            start,
            target,
            speed,
        },
        start,
        Velocity::toward(&start, &target, speed),
        TargetLink(target_entity),
        Alive(true),
    ))
}

/// Spawn a counter missile leaving `start` for the aim point `target`.
pub fn spawn_counter_missile(
    world: &mut World,
    silo_slot: usize,
    start: Position,
    target: Position,
) -> Entity {
    world.spawn((
        CounterMissile {
            start,
            target,
            silo_slot,
        },
        start,
        Velocity::toward(&start, &target, COUNTER_MISSILE_SPEED),
        Alive(true),
    ))
}

/// Spawn a fresh, growing explosion.
pub fn spawn_explosion(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Explosion {
            size: EXPLOSION_INITIAL_SIZE,
            dir: 1,
        },
        position,
        Alive(true),
    ))
}
