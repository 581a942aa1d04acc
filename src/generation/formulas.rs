//! Stat formulas shared with the wider rules library

use crate::core::config::CLASS_BASE_HEALTH;
use rand::Rng;

/// Roll max health for a class enemy: a flat base plus one hit die per
/// level, sized by the career's hit-points-per-level.
pub fn roll_class_max_health(level: i32, hit_points_per_level: i32, rng: &mut impl Rng) -> i32 {
    let die = hit_points_per_level.max(1);
    let mut health = CLASS_BASE_HEALTH;
    for _ in 0..level.max(0) {
        health += rng.gen_range(1..=die);
    }
    health
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_health_within_die_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let health = roll_class_max_health(10, 18, &mut rng);
            assert!(health >= CLASS_BASE_HEALTH + 10);
            assert!(health <= CLASS_BASE_HEALTH + 10 * 18);
        }
    }

    #[test]
    fn test_zero_level_is_base_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(roll_class_max_health(0, 18, &mut rng), CLASS_BASE_HEALTH);
    }

    #[test]
    fn test_degenerate_die_still_rolls() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(roll_class_max_health(5, 0, &mut rng), CLASS_BASE_HEALTH + 5);
    }
}
