//! Cleanup system: removes dead entities and clears the level's projectiles.

use hecs::{Entity, World};

use skyguard_core::components::{Alive, CounterMissile, EnemyMissile, Explosion};

/// Despawn every entity whose `Alive` flag is false. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, alive) in world.query_mut::<&Alive>() {
        if !alive.0 {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}

/// Remove all missiles and explosions, leaving cities and silos in place.
pub fn clear_projectiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _missile) in world.query_mut::<&EnemyMissile>() {
        despawn_buffer.push(entity);
    }
    for (entity, _missile) in world.query_mut::<&CounterMissile>() {
        despawn_buffer.push(entity);
    }
    for (entity, _explosion) in world.query_mut::<&Explosion>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
