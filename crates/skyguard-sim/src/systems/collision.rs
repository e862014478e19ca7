//! Collision resolution: arrivals, explosion kills and detonations.
//!
//! Runs once per tick after movement. Only flips `Alive` flags and spawns
//! explosions; removal is left to the cleanup system.

use hecs::{Entity, World};

use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::enums::EntityKind;
use skyguard_core::events::SimEvent;
use skyguard_core::types::{Position, Velocity};

use crate::scoring::ScoreLedger;
use crate::world_setup::{self, TargetLink};

/// Resolve all collisions for the current tick.
pub fn run(world: &mut World, ledger: &mut ScoreLedger, events: &mut Vec<SimEvent>) {
    let mut dead_enemies: Vec<Position> = Vec::new();

    resolve_enemy_arrivals(world, ledger, events, &mut dead_enemies);
    resolve_explosion_hits(world, ledger, events, &mut dead_enemies);
    resolve_counter_arrivals(world, events);
    spawn_wreck_explosions(world, events, &dead_enemies);
}

/// Enemy missiles within one step of their target die and take the target with them.
fn resolve_enemy_arrivals(
    world: &mut World,
    ledger: &mut ScoreLedger,
    events: &mut Vec<SimEvent>,
    dead_enemies: &mut Vec<Position>,
) {
    let arrived: Vec<(Entity, Position, Entity)> = world
        .query::<(&EnemyMissile, &Position, &TargetLink, &Alive)>()
        .iter()
        .filter(|(_, (missile, pos, _, alive))| {
            alive.0 && pos.distance_to(&missile.target) < missile.speed
        })
        .map(|(entity, (_, pos, link, _))| (entity, *pos, link.0))
        .collect();

    for (missile, pos, target) in arrived {
        set_dead(world, missile);
        dead_enemies.push(pos);

        // A target hit twice in one tick is only destroyed once.
        let Some((kind, slot, target_pos)) = ground_target(world, target) else {
            continue;
        };
        if set_dead(world, target) {
            ledger.record_target_lost(kind);
            events.push(SimEvent::TargetDestroyed {
                kind,
                slot,
                position: target_pos,
            });
            tracing::debug!(?kind, slot, "ground target destroyed");
        }
    }
}

/// Enemy missiles touching an explosion die and score.
fn resolve_explosion_hits(
    world: &mut World,
    ledger: &mut ScoreLedger,
    events: &mut Vec<SimEvent>,
    dead_enemies: &mut Vec<Position>,
) {
    let explosions: Vec<(Position, f64)> = world
        .query::<(&Explosion, &Position, &Alive)>()
        .iter()
        .filter(|(_, (_, _, alive))| alive.0)
        .map(|(_, (explosion, pos, _))| (*pos, explosion.size))
        .collect();
    if explosions.is_empty() {
        return;
    }

    let hit: Vec<(Entity, Position)> = world
        .query::<(&EnemyMissile, &Position, &Alive)>()
        .iter()
        .filter(|(_, (_, pos, alive))| {
            alive.0
                && explosions
                    .iter()
                    .any(|(center, size)| pos.distance_to(center) < MISSILE_SIZE + size)
        })
        .map(|(entity, (_, pos, _))| (entity, *pos))
        .collect();

    for (missile, pos) in hit {
        set_dead(world, missile);
        dead_enemies.push(pos);
        let points = ledger.credit_missile_kill();
        events.push(SimEvent::EnemyMissileDestroyed {
            position: pos,
            points,
        });
    }
}

/// Counter missiles detonate at their aim point.
///
/// A counter missile already heading away from its aim point also detonates,
/// which only happens for a zero-length launch.
fn resolve_counter_arrivals(world: &mut World, events: &mut Vec<SimEvent>) {
    let arrived: Vec<(Entity, Position)> = world
        .query::<(&CounterMissile, &Position, &Velocity, &Alive)>()
        .iter()
        .filter(|(_, (missile, pos, vel, alive))| {
            let arrived = pos.distance_to(&missile.target) < COUNTER_MISSILE_SPEED;
            alive.0 && (arrived || heading_away(pos, vel, &missile.target))
        })
        .map(|(entity, (_, pos, _, _))| (entity, *pos))
        .collect();

    for (missile, pos) in arrived {
        set_dead(world, missile);
        world_setup::spawn_explosion(world, pos);
        events.push(SimEvent::Detonation { position: pos });
    }
}

/// Enemy missiles that died below the launch line leave an explosion,
/// unless a live one is already burning within `EXPLOSION_DEDUP_RADIUS`.
fn spawn_wreck_explosions(
    world: &mut World,
    events: &mut Vec<SimEvent>,
    dead_enemies: &[Position],
) {
    let mut burning: Vec<Position> = world
        .query::<(&Explosion, &Position, &Alive)>()
        .iter()
        .filter(|(_, (_, _, alive))| alive.0)
        .map(|(_, (_, pos, _))| *pos)
        .collect();

    for pos in dead_enemies.iter().filter(|pos| pos.y > 0.0) {
        if burning
            .iter()
            .any(|other| other.distance_to(pos) < EXPLOSION_DEDUP_RADIUS)
        {
            continue;
        }
        world_setup::spawn_explosion(world, *pos);
        burning.push(*pos);
        events.push(SimEvent::Detonation { position: *pos });
    }
}

/// Kind, slot and position of a city or silo that still exists.
fn ground_target(world: &World, entity: Entity) -> Option<(EntityKind, usize, Position)> {
    let pos = *world.get::<&Position>(entity).ok()?;
    if let Ok(city) = world.get::<&City>(entity) {
        return Some((EntityKind::City, city.slot, pos));
    }
    if let Ok(silo) = world.get::<&Silo>(entity) {
        return Some((EntityKind::Silo, silo.slot, pos));
    }
    None
}

/// Clear the alive flag. Returns true if the entity was alive before.
fn set_dead(world: &World, entity: Entity) -> bool {
    match world.get::<&mut Alive>(entity) {
        Ok(mut alive) => std::mem::replace(&mut alive.0, false),
        Err(_) => false,
    }
}

fn heading_away(pos: &Position, vel: &Velocity, target: &Position) -> bool {
    let to_target = target.as_dvec2() - pos.as_dvec2();
    vel.as_dvec2().dot(to_target) < 0.0
}
