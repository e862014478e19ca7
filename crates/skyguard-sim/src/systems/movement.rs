//! Kinematic integration system.
//!
//! Missiles advance by their per-tick velocity; explosions grow, then shrink.

use hecs::World;

use skyguard_core::components::{Alive, Explosion};
use skyguard_core::constants::{EXPLOSION_GROWTH_RATE, EXPLOSION_MAX_SIZE};
use skyguard_core::types::{Position, Velocity};

/// Advance every live entity by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, alive)) in world.query_mut::<(&mut Position, &Velocity, &Alive)>() {
        if alive.0 {
            pos.step(vel);
        }
    }

    for (_entity, (explosion, alive)) in world.query_mut::<(&mut Explosion, &mut Alive)>() {
        if alive.0 {
            advance_explosion(explosion, alive);
        }
    }
}

/// One tick of an explosion's lifecycle.
///
/// Grows by `EXPLOSION_GROWTH_RATE` until the radius passes
/// `EXPLOSION_MAX_SIZE`, then shrinks at the same rate; dies at zero.
pub fn advance_explosion(explosion: &mut Explosion, alive: &mut Alive) {
    explosion.size += EXPLOSION_GROWTH_RATE * f64::from(explosion.dir);

    if explosion.dir > 0 && explosion.size > EXPLOSION_MAX_SIZE {
        explosion.dir = -1;
    }
    if explosion.size <= 0.0 {
        alive.0 = false;
    }
}
