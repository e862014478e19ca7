//! Wave spawning system: releases enemy missile batches on a timer.

use hecs::{Entity, World};
use rand::Rng;

use skyguard_core::components::{City, Silo};
use skyguard_core::constants::{INITIAL_SPAWN_OFFSET_MS, WORLD_WIDTH};
use skyguard_core::types::{LevelParams, Position};

use crate::world_setup;

/// Spawn bookkeeping for the current level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveState {
    /// Host time (ms) of the last batch.
    pub last_spawn_ms: f64,
    /// Enemy missiles created so far this level.
    pub spawned: u32,
}

impl WaveState {
    /// Fresh state for a level starting at `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_spawn_ms: now_ms - INITIAL_SPAWN_OFFSET_MS,
            spawned: 0,
        }
    }

    /// Whether the level's whole quota has been released.
    pub fn quota_reached(&self, params: &LevelParams) -> bool {
        self.spawned >= params.total_missiles
    }
}

/// Release a batch if the spawn interval has elapsed. Returns the number spawned.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    wave: &mut WaveState,
    params: &LevelParams,
    now_ms: f64,
) -> u32 {
    if wave.quota_reached(params) || now_ms - wave.last_spawn_ms <= params.spawn_interval_ms {
        return 0;
    }

    let targets = collect_targets(world);
    if targets.is_empty() {
        return 0;
    }

    // Launch points: above every city and silo, plus both screen edges.
    let mut launch_x: Vec<f64> = targets.iter().map(|(_, pos)| pos.x).collect();
    launch_x.push(0.0);
    launch_x.push(WORLD_WIDTH);

    let batch = params
        .missiles_per_batch
        .min(params.total_missiles - wave.spawned);

    for _ in 0..batch {
        let start = Position::new(launch_x[rng.gen_range(0..launch_x.len())], 0.0);
        let (target_entity, target) = targets[rng.gen_range(0..targets.len())];
        world_setup::spawn_enemy_missile(world, start, target_entity, target, params.speed);
    }

    wave.spawned += batch;
    wave.last_spawn_ms = now_ms;

    tracing::trace!(
        batch,
        spawned = wave.spawned,
        total = params.total_missiles,
        "enemy batch released"
    );

    batch
}

/// Every tracked city then every tracked silo, each in slot order.
/// Liveness is not checked here; it matters only on arrival.
fn collect_targets(world: &World) -> Vec<(Entity, Position)> {
    let mut cities: Vec<(usize, Entity, Position)> = world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(entity, (city, pos))| (city.slot, entity, *pos))
        .collect();
    cities.sort_by_key(|(slot, _, _)| *slot);

    let mut silos: Vec<(usize, Entity, Position)> = world
        .query::<(&Silo, &Position)>()
        .iter()
        .map(|(entity, (silo, pos))| (silo.slot, entity, *pos))
        .collect();
    silos.sort_by_key(|(slot, _, _)| *slot);

    cities
        .into_iter()
        .chain(silos)
        .map(|(_, entity, pos)| (entity, pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use skyguard_core::components::EnemyMissile;
    use skyguard_core::constants::{CITY_X, SILO_X};
    use skyguard_core::types::Velocity;

    use crate::difficulty::params_for_level;

    fn enemy_count(world: &World) -> usize {
        world.query::<&EnemyMissile>().iter().count()
    }

    #[test]
    fn first_batch_waits_for_interval_minus_offset() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = params_for_level(1);
        let mut wave = WaveState::new(0.0);

        // Level 1: interval 3000ms, offset 2000ms -> first batch strictly after 1000ms.
        assert_eq!(run(&mut world, &mut rng, &mut wave, &params, 1000.0), 0);
        assert_eq!(run(&mut world, &mut rng, &mut wave, &params, 1001.0), 3);
        assert_eq!(enemy_count(&world), 3);
        assert_eq!(wave.last_spawn_ms, 1001.0);

        // Next batch a full interval later.
        assert_eq!(run(&mut world, &mut rng, &mut wave, &params, 4000.0), 0);
        assert_eq!(run(&mut world, &mut rng, &mut wave, &params, 4002.0), 3);
    }

    #[test]
    fn never_exceeds_quota() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let params = params_for_level(1);
        let mut wave = WaveState::new(0.0);

        let mut now = 0.0;
        for _ in 0..20 {
            now += params.spawn_interval_ms + 1.0;
            run(&mut world, &mut rng, &mut wave, &params, now);
        }

        // 20 = 6 batches of 3 + a final batch of 2.
        assert_eq!(wave.spawned, 20);
        assert!(wave.quota_reached(&params));
        assert_eq!(enemy_count(&world), 20);
    }

    #[test]
    fn missiles_start_on_launch_line_and_aim_at_ground_targets() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let params = params_for_level(4);
        let mut wave = WaveState::new(0.0);
        run(&mut world, &mut rng, &mut wave, &params, 10_000.0);

        let mut valid_x: Vec<f64> = CITY_X.iter().chain(SILO_X.iter()).copied().collect();
        valid_x.extend([0.0, WORLD_WIDTH]);

        let mut query = world.query::<(&EnemyMissile, &Position, &Velocity)>();
        let mut seen = 0;
        for (_entity, (missile, pos, vel)) in query.iter() {
            seen += 1;
            assert_eq!(missile.start.y, 0.0);
            assert_eq!(*pos, missile.start);
            assert!(valid_x.contains(&missile.start.x));
            assert!(valid_x.contains(&missile.target.x));
            assert!((vel.speed() - params.speed).abs() < 1e-9);
            assert!(vel.dy > 0.0, "enemy missiles fly downward");
        }
        assert_eq!(seen, params.missiles_per_batch as usize);
    }

    #[test]
    fn same_seed_same_batch() {
        let spawn = |seed: u64| {
            let mut world = World::new();
            world_setup::setup_game(&mut world);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut wave = WaveState::new(0.0);
            run(&mut world, &mut rng, &mut wave, &params_for_level(1), 5000.0);
            let mut out: Vec<(f64, f64)> = world
                .query::<&EnemyMissile>()
                .iter()
                .map(|(_, m)| (m.start.x, m.target.x))
                .collect();
            out.sort_by(|a, b| a.partial_cmp(b).unwrap());
            out
        };
        assert_eq!(spawn(11), spawn(11));
    }

    #[test]
    fn no_targets_no_spawn() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut wave = WaveState::new(0.0);
        assert_eq!(
            run(&mut world, &mut rng, &mut wave, &params_for_level(1), 10_000.0),
            0
        );
        assert_eq!(wave.spawned, 0);
    }
}
