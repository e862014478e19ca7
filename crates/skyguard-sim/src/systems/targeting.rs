//! Targeting: turns a player aim point into a counter missile launch.

use hecs::World;

use skyguard_core::components::{Alive, Silo};
use skyguard_core::types::Position;

use crate::world_setup;

/// Fire from the standing silo with ammunition that is nearest to `aim`.
///
/// Distance is measured from each silo to the aim point; ties go to the
/// lowest slot. Returns the slot that fired, or `None` when no silo is
/// eligible, in which case nothing changes.
pub fn launch(world: &mut World, aim: Position) -> Option<usize> {
    let mut candidates: Vec<(usize, hecs::Entity, Position)> = world
        .query::<(&Silo, &Position, &Alive)>()
        .iter()
        .filter(|(_, (silo, _, alive))| alive.0 && silo.missiles > 0)
        .map(|(entity, (silo, pos, _))| (silo.slot, entity, *pos))
        .collect();
    candidates.sort_by_key(|(slot, _, _)| *slot);

    let mut best: Option<(usize, hecs::Entity, Position, f64)> = None;
    for (slot, entity, pos) in candidates {
        let distance = pos.distance_to(&aim);
        if best.map_or(true, |(_, _, _, d)| distance < d) {
            best = Some((slot, entity, pos, distance));
        }
    }
    let (slot, entity, origin, _) = best?;

    if let Ok(mut silo) = world.get::<&mut Silo>(entity) {
        silo.missiles = silo.missiles.saturating_sub(1);
    }
    world_setup::spawn_counter_missile(world, slot, origin, aim);

    Some(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::components::CounterMissile;
    use skyguard_core::constants::COUNTER_MISSILE_SPEED;
    use skyguard_core::types::Velocity;

    fn silo_ammo(world: &World) -> Vec<u32> {
        let mut silos: Vec<(usize, u32)> = world
            .query::<&Silo>()
            .iter()
            .map(|(_, s)| (s.slot, s.missiles))
            .collect();
        silos.sort();
        silos.into_iter().map(|(_, m)| m).collect()
    }

    fn set_ammo(world: &mut World, slot: usize, missiles: u32) {
        for (_entity, silo) in world.query_mut::<&mut Silo>() {
            if silo.slot == slot {
                silo.missiles = missiles;
            }
        }
    }

    #[test]
    fn picks_nearest_silo_to_aim_point() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);

        assert_eq!(launch(&mut world, Position::new(400.0, 300.0)), Some(1));
        assert_eq!(silo_ammo(&world), vec![10, 9, 10]);

        let mut query = world.query::<(&CounterMissile, &Velocity)>();
        let missiles: Vec<_> = query.iter().collect();
        assert_eq!(missiles.len(), 1);
        let (_, (missile, vel)) = missiles[0];
        assert_eq!(missile.target, Position::new(400.0, 300.0));
        assert_eq!(missile.start, Position::new(400.0, 470.0));
        assert!((vel.speed() - COUNTER_MISSILE_SPEED).abs() < 1e-9);
        assert!(vel.dy < 0.0);
    }

    #[test]
    fn left_and_right_aims_use_outer_silos() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        assert_eq!(launch(&mut world, Position::new(10.0, 100.0)), Some(0));
        assert_eq!(launch(&mut world, Position::new(790.0, 100.0)), Some(2));
    }

    #[test]
    fn empty_silo_is_skipped() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        set_ammo(&mut world, 1, 0);

        let fired = launch(&mut world, Position::new(400.0, 300.0));
        assert!(matches!(fired, Some(0) | Some(2)));
        assert_eq!(silo_ammo(&world)[1], 0);
    }

    #[test]
    fn tie_goes_to_lowest_slot() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        // Exactly halfway between silo 0 (x=55) and silo 1 (x=400).
        assert_eq!(launch(&mut world, Position::new(227.5, 100.0)), Some(0));
    }

    #[test]
    fn no_eligible_silo_is_a_silent_no_op() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        for slot in 0..3 {
            set_ammo(&mut world, slot, 0);
        }

        assert_eq!(launch(&mut world, Position::new(400.0, 300.0)), None);
        assert_eq!(silo_ammo(&world), vec![0, 0, 0]);
        assert_eq!(world.query::<&CounterMissile>().iter().count(), 0);
    }

    #[test]
    fn dead_silo_never_fires() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        for (_entity, (silo, alive)) in world.query_mut::<(&Silo, &mut Alive)>() {
            if silo.slot == 1 {
                alive.0 = false;
            }
        }
        let fired = launch(&mut world, Position::new(400.0, 300.0));
        assert_ne!(fired, Some(1));
        assert_eq!(silo_ammo(&world)[1], 10);
    }

    #[test]
    fn ammo_never_goes_negative() {
        let mut world = World::new();
        world_setup::setup_game(&mut world);
        let mut launches = 0;
        for _ in 0..50 {
            if launch(&mut world, Position::new(400.0, 200.0)).is_some() {
                launches += 1;
            }
        }
        assert_eq!(launches, 30);
        assert_eq!(silo_ammo(&world), vec![0, 0, 0]);
    }
}
