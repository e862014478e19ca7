//! Difficulty curve: level number -> simulation parameters.

use skyguard_core::constants::*;
use skyguard_core::types::LevelParams;

/// Parameters for `level` (levels start at 1; 0 is treated as 1).
///
/// Speed and batch size grow to a cap, the missile quota grows without bound,
/// and the spawn interval shrinks to a floor.
pub fn params_for_level(level: u32) -> LevelParams {
    let step = level.max(1) - 1;

    LevelParams {
        speed: (BASE_MISSILE_SPEED + step as f64 * MISSILE_SPEED_PER_LEVEL).min(MAX_MISSILE_SPEED),
        total_missiles: BASE_TOTAL_MISSILES
            .saturating_add(step.saturating_mul(TOTAL_MISSILES_PER_LEVEL)),
        missiles_per_batch: (BASE_MISSILES_PER_BATCH + step / 2).min(MAX_MISSILES_PER_BATCH),
        spawn_interval_ms: (BASE_SPAWN_INTERVAL_MS - step as f64 * SPAWN_INTERVAL_STEP_MS)
            .max(MIN_SPAWN_INTERVAL_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_one_baseline() {
        let p = params_for_level(1);
        assert_eq!(p.speed, 1.0);
        assert_eq!(p.total_missiles, 20);
        assert_eq!(p.missiles_per_batch, 3);
        assert_eq!(p.spawn_interval_ms, 3000.0);
    }

    #[test]
    fn level_two() {
        let p = params_for_level(2);
        assert!((p.speed - 1.3).abs() < 1e-12);
        assert_eq!(p.total_missiles, 25);
        assert_eq!(p.missiles_per_batch, 3);
        assert_eq!(p.spawn_interval_ms, 2800.0);
    }

    #[test]
    fn caps_and_floors() {
        let p = params_for_level(20);
        assert_eq!(p.speed, 3.0);
        assert_eq!(p.missiles_per_batch, 6);
        assert_eq!(p.spawn_interval_ms, 1500.0);
        assert_eq!(p.total_missiles, 115);
    }

    #[test]
    fn level_zero_behaves_like_level_one() {
        assert_eq!(params_for_level(0), params_for_level(1));
    }

    proptest! {
        #[test]
        fn curve_is_monotonic(level in 1u32..10_000) {
            let a = params_for_level(level);
            let b = params_for_level(level + 1);
            prop_assert!(b.speed >= a.speed);
            prop_assert!(b.total_missiles > a.total_missiles);
            prop_assert!(b.missiles_per_batch >= a.missiles_per_batch);
            prop_assert!(b.spawn_interval_ms <= a.spawn_interval_ms);
        }

        #[test]
        fn curve_stays_within_bounds(level in 1u32..10_000) {
            let p = params_for_level(level);
            prop_assert!(p.speed >= 1.0 && p.speed <= 3.0);
            prop_assert!(p.missiles_per_batch >= 3 && p.missiles_per_batch <= 6);
            prop_assert!(p.spawn_interval_ms >= 1500.0 && p.spawn_interval_ms <= 3000.0);
            prop_assert!(p.total_missiles >= 20);
        }
    }
}
